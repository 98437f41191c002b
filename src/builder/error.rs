//! Build errors for DFA construction.

use crate::validation::DfaViolation;
use thiserror::Error;

/// Errors that can occur when building a DFA.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("DFA '{name}' has {} structural violation(s)", .violations.len())]
    InvalidDefinition {
        name: String,
        violations: Vec<DfaViolation>,
    },
}

impl BuildError {
    /// Every violation behind this error. Empty for `MissingStartState`.
    pub fn violations(&self) -> &[DfaViolation] {
        match self {
            Self::MissingStartState => &[],
            Self::InvalidDefinition { violations, .. } => violations,
        }
    }
}
