use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid column name: {0:?}")]
    InvalidColumnName(String),
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("row has {found} cells but the table declares {expected} columns")]
    RowWidth { expected: usize, found: usize },
    #[error("unknown axis scale: {0:?} (expected \"linear\" or \"log\")")]
    UnknownScale(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
