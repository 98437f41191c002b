//! Data-only DFA descriptors.

use crate::builder::{BuildError, DfaBuilder};
use crate::core::{Dfa, StateId, Symbol, Transition};
use serde::{Deserialize, Serialize};

/// Plain-data form of a DFA, as declared in a catalog.
///
/// Descriptors are what the catalog stores and what JSON catalogs contain.
/// Turning one into a [`Dfa`] runs the full structural validation.
///
/// # Example
///
/// ```rust
/// use dfa_lab::catalog::DfaDescriptor;
///
/// let json = r#"{
///     "name": "ones",
///     "states": ["q0"],
///     "alphabet": ["1"],
///     "start": "q0",
///     "final": ["q0"],
///     "transitions": [{ "from": "q0", "symbol": "1", "to": "q0" }]
/// }"#;
///
/// let descriptor: DfaDescriptor = serde_json::from_str(json).unwrap();
/// let dfa = descriptor.to_dfa().unwrap();
/// assert_eq!(dfa.name(), "ones");
/// assert!(dfa.description().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfaDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub regex: String,
    pub states: Vec<StateId>,
    pub alphabet: Vec<Symbol>,
    pub start: StateId,
    #[serde(rename = "final", alias = "accepting", default)]
    pub accepting: Vec<StateId>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl DfaDescriptor {
    /// Build and validate the DFA this descriptor declares.
    pub fn to_dfa(&self) -> Result<Dfa, BuildError> {
        DfaBuilder::new(self.name.clone())
            .description(self.description.clone())
            .regex(self.regex.clone())
            .states(self.states.iter().cloned())
            .alphabet(self.alphabet.iter().copied())
            .start(self.start.clone())
            .accepting(self.accepting.iter().cloned())
            .transitions(self.transitions.iter().cloned())
            .build()
    }
}

impl From<&Dfa> for DfaDescriptor {
    fn from(dfa: &Dfa) -> Self {
        Self {
            name: dfa.name().to_string(),
            description: dfa.description().to_string(),
            regex: dfa.regex().to_string(),
            states: dfa.states().iter().cloned().collect(),
            alphabet: dfa.alphabet().iter().copied().collect(),
            start: dfa.start().clone(),
            accepting: dfa.accepting().iter().cloned().collect(),
            transitions: dfa.transitions().iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_rebuilds_equal_dfa() {
        let dfa = DfaBuilder::new("toggle")
            .states(["on", "off"])
            .alphabet(['t'])
            .start("off")
            .accepting(["on"])
            .transition("off", 't', "on")
            .transition("on", 't', "off")
            .build()
            .unwrap();

        let descriptor = DfaDescriptor::from(&dfa);
        assert_eq!(descriptor.to_dfa().unwrap(), dfa);
    }

    #[test]
    fn accepting_alias_is_understood() {
        let json = r#"{
            "name": "a",
            "states": ["s"],
            "alphabet": [],
            "start": "s",
            "accepting": ["s"]
        }"#;

        let descriptor: DfaDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.accepting, vec![StateId::from("s")]);
        assert!(descriptor.transitions.is_empty());
    }

    #[test]
    fn invalid_descriptor_fails_to_build() {
        let descriptor = DfaDescriptor {
            name: "bad".to_string(),
            description: String::new(),
            regex: String::new(),
            states: vec![StateId::from("q0")],
            alphabet: vec!['0'],
            start: StateId::from("q0"),
            accepting: Vec::new(),
            transitions: vec![Transition::new("q0", '0', "q1")],
        };

        let error = descriptor.to_dfa().unwrap_err();
        assert_eq!(error.violations().len(), 1);
    }
}
