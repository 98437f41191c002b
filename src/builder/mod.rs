//! Builder API for DFA construction.
//!
//! This module provides a fluent builder and a declaration macro for
//! creating automata. Every path into a [`Dfa`](crate::core::Dfa) goes
//! through [`DfaBuilder::build`], which enforces the structural invariants.

pub mod dfa;
pub mod error;
pub mod macros;

pub use dfa::DfaBuilder;
pub use error::BuildError;
