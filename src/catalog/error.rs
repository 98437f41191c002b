//! Catalog error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while assembling a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON for a descriptor list
    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),

    /// Two entries share a name
    #[error("Duplicate catalog entry '{0}'")]
    DuplicateEntry(String),

    /// An entry does not describe a well-formed DFA
    #[error("Invalid catalog entry '{name}': {source}")]
    InvalidEntry { name: String, source: BuildError },
}
