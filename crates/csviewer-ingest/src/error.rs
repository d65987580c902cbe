//! Error types for CSViewer data ingestion.

use std::fmt;
use std::path::PathBuf;

use csviewer_model::SourceId;
use thiserror::Error;

/// Errors that can occur while loading sources into the data pool.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Content is not valid delimited tabular text.
    #[error("failed to parse CSV {path}{}: {message}", line_suffix(.line))]
    Parse {
        path: PathBuf,
        /// 1-based line of the offending record, when one can be named.
        line: Option<u64>,
        message: String,
    },

    // === Pool Errors ===
    /// One or more sources failed during a pool rebuild.
    #[error(
        "failed to load {} of the selected sources: {}",
        .failures.len(),
        join_failures(.failures)
    )]
    Load { failures: Vec<SourceFailure> },

    /// Source identifier is not present in the data pool.
    #[error("unknown source {id}")]
    UnknownSource { id: SourceId },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(
        path: impl Into<PathBuf>,
        line: Option<u64>,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

/// One failing source of a pool rebuild.
#[derive(Debug)]
pub struct SourceFailure {
    pub id: SourceId,
    pub location: PathBuf,
    pub error: IngestError,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source {} ({}): {}", self.id, self.location.display(), self.error)
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|line| format!(" at line {line}"))
        .unwrap_or_default()
}

fn join_failures(failures: &[SourceFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::parse("data/a.csv", Some(4), "expected 2 fields, found 3");
        assert_eq!(
            err.to_string(),
            "failed to parse CSV data/a.csv at line 4: expected 2 fields, found 3"
        );
    }

    #[test]
    fn test_load_error_lists_every_failure() {
        let err = IngestError::Load {
            failures: vec![
                SourceFailure {
                    id: SourceId::new(1),
                    location: PathBuf::from("a.csv"),
                    error: IngestError::io(
                        "a.csv",
                        std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                    ),
                },
                SourceFailure {
                    id: SourceId::new(3),
                    location: PathBuf::from("c.csv"),
                    error: IngestError::parse("c.csv", None, "source contains no rows"),
                },
            ],
        };
        let message = err.to_string();
        assert!(message.starts_with("failed to load 2 of the selected sources"));
        assert!(message.contains("source 1 (a.csv): failed to read a.csv: missing"));
        assert!(message.contains("source 3 (c.csv)"));
    }
}
