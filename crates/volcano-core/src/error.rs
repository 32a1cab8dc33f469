//! Error types for Volcano Atlas

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for Volcano Atlas
#[derive(Debug, Error)]
pub enum VolcanoError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
}

/// Errors raised while reading the dataset at startup
///
/// These are fatal: the dashboard never opens without a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot read workbook {}: {message}", path.display())]
    Workbook { path: PathBuf, message: String },

    #[error("Workbook {} has no worksheet", .0.display())]
    NoWorksheet(PathBuf),

    #[error("Worksheet has no header row")]
    MissingHeader,

    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Row {row}: column {column} is not numeric ({value:?})")]
    NotNumeric {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Errors in user selections that block one branch of the page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Please select {expected} countries.")]
    WrongCountryCount { expected: usize, actual: usize },
}

/// Errors from the encyclopedia summary lookup
///
/// Recoverable: only the panel that asked for the summary is affected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("No page found for {0:?}")]
    PageNotFound(String),

    #[error("{topic:?} may refer to several pages: {}", .options.join(", "))]
    Disambiguation { topic: String, options: Vec<String> },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Lookups are disabled (offline mode)")]
    Offline,
}

/// Result alias for dataset loading
pub type LoadResult<T> = Result<T, LoadError>;
