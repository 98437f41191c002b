//! Core automaton types.
//!
//! This module contains the immutable data model:
//! - State identifiers and symbols
//! - The `Dfa` value and its transition relation
//!
//! Nothing in this module performs I/O or mutates a built automaton.

mod dfa;
mod state;

pub use dfa::{Dfa, Transition, TransitionMap};
pub use state::{StateId, Symbol};
