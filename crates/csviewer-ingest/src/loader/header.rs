//! Header row detection and column naming.

use std::collections::BTreeSet;

use csviewer_model::{ColumnName, ModelError, looks_numeric};

/// Number of rows after the candidate header that are compared against it.
pub const HEADER_SAMPLE_ROWS: usize = 20;

/// Shape of one column across the sampled data rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnShape {
    /// Every non-empty cell looks numeric.
    Numeric,
    /// Every non-empty cell has the same character length.
    FixedLength(usize),
    /// Nothing consistent to compare against.
    Mixed,
}

fn column_shape<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnShape {
    let mut seen = 0usize;
    let mut all_numeric = true;
    let mut length: Option<usize> = None;
    let mut fixed_length = true;
    for cell in cells {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            continue;
        }
        seen += 1;
        all_numeric &= looks_numeric(trimmed);
        let len = trimmed.chars().count();
        match length {
            None => length = Some(len),
            Some(expected) if expected != len => fixed_length = false,
            Some(_) => {}
        }
    }
    match (seen, length) {
        (0, _) => ColumnShape::Mixed,
        _ if all_numeric => ColumnShape::Numeric,
        (_, Some(len)) if fixed_length => ColumnShape::FixedLength(len),
        _ => ColumnShape::Mixed,
    }
}

/// A header candidate: no blanks, nothing numeric, no repeated token.
fn is_header_candidate(row: &[String]) -> bool {
    let mut seen = BTreeSet::new();
    row.iter().all(|cell| {
        let trimmed = cell.trim();
        !trimmed.is_empty() && !looks_numeric(trimmed) && seen.insert(trimmed)
    })
}

/// Decides whether the first row of `rows` is a header.
///
/// The first row must be a header candidate and must differ structurally
/// from the rows after it. Each column votes: a numeric data column votes
/// for a header when the candidate cell is not numeric, a fixed-length data
/// column votes for a header when the candidate's length differs and
/// against it when the length matches. Other columns abstain. A positive
/// total means header. Fewer than two rows never have a header.
pub fn sniff_header(rows: &[Vec<String>]) -> bool {
    let Some((first, rest)) = rows.split_first() else {
        return false;
    };
    if rest.is_empty() || !is_header_candidate(first) {
        return false;
    }
    let sample: Vec<&Vec<String>> = rest
        .iter()
        .filter(|row| row.len() == first.len())
        .take(HEADER_SAMPLE_ROWS)
        .collect();
    if sample.is_empty() {
        return false;
    }

    let mut votes = 0i64;
    for (index, candidate) in first.iter().enumerate() {
        let shape = column_shape(sample.iter().map(|row| row[index].as_str()));
        let candidate = candidate.trim();
        match shape {
            ColumnShape::Numeric => {
                if looks_numeric(candidate) {
                    votes -= 1;
                } else {
                    votes += 1;
                }
            }
            ColumnShape::FixedLength(len) => {
                if candidate.chars().count() == len {
                    votes -= 1;
                } else {
                    votes += 1;
                }
            }
            ColumnShape::Mixed => {}
        }
    }
    tracing::trace!(votes, columns = first.len(), "header vote");
    votes > 0
}

/// Collapses inner whitespace and strips a byte-order mark.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Column names from a header row; repeats get `.1`, `.2`, … suffixes.
pub(crate) fn header_names(row: &[String]) -> Result<Vec<ColumnName>, ModelError> {
    let mut used: BTreeSet<String> = BTreeSet::new();
    let mut names = Vec::with_capacity(row.len());
    for raw in row {
        let base = normalize_header(raw);
        let mut name = base.clone();
        let mut suffix = 1usize;
        while used.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        used.insert(name.clone());
        names.push(ColumnName::new(name)?);
    }
    Ok(names)
}

/// `column-0`, `column-1`, … for sources without a header.
pub(crate) fn positional_names(width: usize) -> Vec<ColumnName> {
    (0..width).map(ColumnName::positional).collect()
}
