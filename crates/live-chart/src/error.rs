// File: crates/live-chart/src/error.rs
// Summary: Error taxonomy for configuration and the per-tick redraw.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single redraw failed. None of these stop the server; the tick is
/// recorded as failed and the previous chart stays on screen.
#[derive(Error, Debug)]
pub enum RedrawError {
    #[error("cannot read data file {}: {source}", path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("column `{column}` not found in {}", path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("row {row}: value {value:?} in column `{column}` is not a number")]
    MalformedRow { row: usize, column: String, value: String },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("render failed: {0}")]
    Render(anyhow::Error),

    #[error("redraw task aborted: {0}")]
    Aborted(String),
}

impl RedrawError {
    /// Short machine-readable kind, exposed to the dashboard.
    pub fn kind(&self) -> &'static str {
        match self {
            RedrawError::FileUnavailable { .. } => "file_unavailable",
            RedrawError::MissingColumn { .. } => "missing_column",
            RedrawError::MalformedRow { .. } => "malformed_row",
            RedrawError::Csv(_) => "csv",
            RedrawError::Render(_) => "render",
            RedrawError::Aborted(_) => "aborted",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },

    #[error("interval must be greater than zero")]
    ZeroInterval,

    #[error("column name must not be empty")]
    EmptyColumn,

    #[error("at least one redraw must be allowed to run")]
    NoRedrawSlots,
}
