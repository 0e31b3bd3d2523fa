// File: crates/netscatter-core/src/error.rs
// Summary: Typed error taxonomy for loading, validating and rendering.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No encoding candidate both decoded and parsed the input.
    #[error("could not read '{}' with any of the encodings {tried:?}", path.display())]
    Unreadable { path: PathBuf, tried: Vec<&'static str> },

    #[error("missing required columns {missing:?}; columns present: {present:?}")]
    MissingColumns { missing: Vec<String>, present: Vec<String> },

    #[error("row {row}: column '{column}' has non-numeric value '{value}'")]
    InvalidValue { row: usize, column: String, value: String },

    #[error("no complete rows left to plot ({rows_read} rows read, all had missing values)")]
    EmptyDataset { rows_read: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("render failed: {0}")]
    Render(String),
}

impl PlotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;
