//! Command-line dataset specifications: `SOURCE[:X:Y[:LABEL]]`.

use std::fmt;
use std::str::FromStr;

use csviewer_model::{Axis, SourceId};
use csviewer_plot::{PlotError, Session};
use thiserror::Error;

/// Errors for malformed `--dataset` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetSpecError {
    #[error("dataset spec is empty")]
    Empty,

    #[error("'{0}' is not a source number")]
    InvalidSource(String),

    #[error("'{0}' names an X field without a Y field; use SOURCE:X:Y")]
    MissingField(String),

    #[error("'{0}' has an empty field name")]
    EmptyField(String),
}

/// One `--dataset` argument.
///
/// The source is the 1-based position of the file on the command line. The
/// label is everything after the third colon, so it may contain colons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSpec {
    pub source: SourceId,
    pub fields: Option<(String, String)>,
    pub label: Option<String>,
}

impl FromStr for DatasetSpec {
    type Err = DatasetSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(DatasetSpecError::Empty);
        }
        let mut parts = text.splitn(4, ':');
        let source_text = parts.next().unwrap_or_default();
        let source = source_text
            .parse::<SourceId>()
            .ok()
            .filter(|id| id.get() > 0)
            .ok_or_else(|| DatasetSpecError::InvalidSource(source_text.to_string()))?;

        let fields = match (parts.next(), parts.next()) {
            (None, _) => None,
            (Some(_), None) => return Err(DatasetSpecError::MissingField(text.to_string())),
            (Some(x), Some(y)) => {
                let (x, y) = (x.trim(), y.trim());
                if x.is_empty() || y.is_empty() {
                    return Err(DatasetSpecError::EmptyField(text.to_string()));
                }
                Some((x.to_string(), y.to_string()))
            }
        };
        let label = parts.next().map(str::to_string);

        Ok(Self {
            source,
            fields,
            label,
        })
    }
}

impl fmt::Display for DatasetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)?;
        if let Some((x, y)) = &self.fields {
            write!(f, ":{x}:{y}")?;
            if let Some(label) = &self.label {
                write!(f, ":{label}")?;
            }
        }
        Ok(())
    }
}

impl DatasetSpec {
    /// Applies the spec to descriptor `index` of `session`.
    ///
    /// Selecting the source defaults the fields to its first two columns;
    /// explicit fields then replace them.
    pub fn apply(&self, session: &mut Session, index: usize) -> Result<(), PlotError> {
        if let Some(report) = session.set_source(index, self.source)?
            && self.fields.is_none()
        {
            return Err(report.into());
        }
        if let Some((x, y)) = &self.fields {
            session.set_field(index, Axis::X, x)?;
            session.set_field(index, Axis::Y, y)?;
        }
        if let Some(label) = &self.label {
            session.set_label(index, label.as_str())?;
        }
        Ok(())
    }
}
