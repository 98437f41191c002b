//! Structural violations of a DFA definition.

use crate::core::{StateId, Symbol};
use thiserror::Error;

/// A single breach of the DFA structural invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DfaViolation {
    #[error("Start state '{start}' is not one of the declared states")]
    UnknownStartState { start: StateId },

    #[error("Accepting state '{state}' is not one of the declared states")]
    UnknownAcceptingState { state: StateId },

    #[error("Transition δ({from}, {symbol}) leaves undeclared state '{from}'")]
    UnknownSourceState { from: StateId, symbol: Symbol },

    #[error("Transition δ({from}, {symbol}) targets undeclared state '{to}'")]
    UnknownTargetState {
        from: StateId,
        symbol: Symbol,
        to: StateId,
    },

    #[error("Transition δ({from}, {symbol}) reads '{symbol}', which is not in the alphabet")]
    SymbolOutsideAlphabet { from: StateId, symbol: Symbol },

    #[error("Transition δ({from}, {symbol}) is defined more than once")]
    DuplicateTransition { from: StateId, symbol: Symbol },
}
