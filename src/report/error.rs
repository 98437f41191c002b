//! Report error types.

use crate::core::StateId;
use thiserror::Error;

/// Errors raised while handing a report to or from a rendering layer.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not encode report as JSON: {0}")]
    EncodeFailed(String),

    #[error("report JSON is malformed: {0}")]
    DecodeFailed(String),

    /// The report was written by an incompatible format revision
    #[error("report format v{found} cannot be read, expected v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A table row does not have one cell per alphabet symbol
    #[error("table row for state {state} has {cells} cell(s) for {columns} symbol column(s)")]
    RaggedTableRow {
        state: StateId,
        cells: usize,
        columns: usize,
    },
}
