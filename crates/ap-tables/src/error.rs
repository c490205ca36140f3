//! Table-loading error type.

use std::path::PathBuf;

use thiserror::Error;

use ap_core::ApError;

/// Errors produced while reading placement tables.
///
/// Lookups never fail; only loading does.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("table parse error: {0}")]
    Parse(String),

    #[error("bad turns key {turns:?} under placement key {key:?}: {source}")]
    Turns {
        key:    String,
        turns:  String,
        #[source]
        source: ApError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}: {source}", path.display())]
    InFile {
        path:   PathBuf,
        #[source]
        source: Box<TableError>,
    },
}

impl TableError {
    /// Attach the file a failure came from.
    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        TableError::InFile { path: path.into(), source: Box::new(self) }
    }
}

pub type TableResult<T> = Result<T, TableError>;
