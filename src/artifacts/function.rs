//! Transition function listing.

use crate::core::{Dfa, Transition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every defined transition, ordered by (state, symbol).
///
/// The order is lexicographic on state label then symbol, never the order
/// the transitions were declared in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionFunction {
    entries: Vec<Transition>,
}

impl TransitionFunction {
    pub fn entries(&self) -> &[Transition] {
        &self.entries
    }

    /// Entries formatted as `δ(state, symbol) = next_state`.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for TransitionFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// List the transition function of `dfa`.
pub fn transition_function(dfa: &Dfa) -> TransitionFunction {
    let mut entries: Vec<Transition> = dfa.transitions().iter().cloned().collect();
    entries.sort_by(|a, b| (&a.from, a.symbol).cmp(&(&b.from, b.symbol)));
    TransitionFunction { entries }
}
