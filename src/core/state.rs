//! State identifiers and input symbols.
//!
//! States are opaque labels. Their only structure is a total order
//! (lexicographic on the label) used wherever a deterministic listing
//! of states is required.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A single input symbol. Alphabets are sets of characters.
pub type Symbol = char;

/// Opaque, unique label of a DFA state.
///
/// Ordering is lexicographic on the label, so `"q0" < "q1" < "qDead"`.
///
/// # Example
///
/// ```rust
/// use dfa_lab::core::StateId;
///
/// let q0 = StateId::from("q0");
/// let dead = StateId::from("qDead");
///
/// assert_eq!(q0.name(), "q0");
/// assert!(q0 < dead);
/// assert_eq!(dead.to_string(), "qDead");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create a state identifier from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the state's label for display/logging.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for StateId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StateId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StateId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashMap};

    #[test]
    fn name_returns_label() {
        assert_eq!(StateId::from("q0").name(), "q0");
        assert_eq!(StateId::new(String::from("qDead")).name(), "qDead");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let states: BTreeSet<StateId> = ["qDead", "q2", "q0", "q1"]
            .into_iter()
            .map(StateId::from)
            .collect();

        let ordered: Vec<&str> = states.iter().map(StateId::name).collect();
        assert_eq!(ordered, vec!["q0", "q1", "q2", "qDead"]);
    }

    #[test]
    fn lookup_by_str_through_borrow() {
        let mut map = HashMap::new();
        map.insert(StateId::from("q1"), 7);

        assert_eq!(map.get("q1"), Some(&7));
        assert_eq!(map.get("q2"), None);
    }

    #[test]
    fn compares_against_str() {
        let state = StateId::from("q2");
        assert_eq!(state, "q2");
        assert_ne!(state, "q3");
    }

    #[test]
    fn serializes_as_plain_string() {
        let state = StateId::from("q1");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"q1\"");

        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
