// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application

/// A node (or node list) could not be rendered to text.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("nothing to render: section content is absent")]
    AbsentContent,

    #[error("no extractable text content")]
    NoText,
}

/// A table node could not be reconstructed into a rectangular record set.
#[derive(Error, Debug)]
pub enum TableFormatError {
    #[error("table has no rows")]
    Empty,

    #[error("node is not composed of table rows and cells")]
    NotTabular,

    #[error("table declares a second header row but has only {0} row(s)")]
    TruncatedHeader(usize),

    #[error("header rows expand to different widths ({0} vs {1})")]
    HeaderWidthMismatch(usize, usize),

    #[error("body row {row} has {found} cells, expected {expected}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// The growth/contraction sentences could not be parsed into sector ranks.
#[derive(Error, Debug)]
pub enum RankingParseError {
    #[error("unexpected ranking sentence structure: {0}")]
    Structure(String),

    #[error("sector {0:?} is not in the known sector vocabulary")]
    UnknownSector(String),
}

/// A respondent-comment line did not match the expected quote/sector shape.
#[derive(Error, Debug)]
pub enum CommentParseError {
    #[error("comment line did not match the quote/sector pattern: {0:?}")]
    Pattern(String),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("every requested section came back absent")]
    TotalExtractionFailure,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
