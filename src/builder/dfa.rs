//! Builder for constructing DFAs.

use crate::builder::error::BuildError;
use crate::core::{Dfa, StateId, Symbol, Transition, TransitionMap};
use crate::validation::{collect_violations, validate};
use std::collections::BTreeSet;
use tracing::debug;

/// Builder for constructing a [`Dfa`] with a fluent API.
///
/// `build` checks every structural invariant and reports all violations
/// together.
///
/// # Example
///
/// ```rust
/// use dfa_lab::builder::{BuildError, DfaBuilder};
///
/// let result = DfaBuilder::new("broken")
///     .states(["q0"])
///     .alphabet(['a'])
///     .start("q0")
///     .accepting(["q3"])
///     .transition("q0", 'b', "q1")
///     .build();
///
/// match result {
///     Err(BuildError::InvalidDefinition { violations, .. }) => assert_eq!(violations.len(), 3),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct DfaBuilder {
    name: String,
    description: String,
    regex: String,
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<Symbol>,
    start: Option<StateId>,
    accepting: BTreeSet<StateId>,
    transitions: Vec<Transition>,
}

impl DfaBuilder {
    /// Create a new builder for a DFA registered under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the human-readable description (optional).
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the descriptive regular expression (optional, never parsed).
    pub fn regex(mut self, regex: impl Into<String>) -> Self {
        self.regex = regex.into();
        self
    }

    /// Declare one state.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.states.insert(state.into());
        self
    }

    /// Declare several states at once. Repeated labels collapse.
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add one symbol to the alphabet.
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.alphabet.insert(symbol);
        self
    }

    /// Add several symbols to the alphabet.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: impl Into<StateId>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Mark states as accepting.
    pub fn accepting<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        self.accepting.extend(states.into_iter().map(Into::into));
        self
    }

    /// Define `δ(from, symbol) = to`.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        symbol: Symbol,
        to: impl Into<StateId>,
    ) -> Self {
        self.transitions.push(Transition::new(from, symbol, to));
        self
    }

    /// Add several pre-built transitions, keeping their order.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Build the DFA.
    /// Returns an error if the start state is missing or any structural
    /// invariant is violated.
    pub fn build(self) -> Result<Dfa, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        let dfa = Dfa {
            name: self.name,
            description: self.description,
            regex: self.regex,
            states: self.states,
            alphabet: self.alphabet,
            start,
            accepting: self.accepting,
            transitions: TransitionMap::from_entries(self.transitions),
        };

        let result = validate(&dfa);
        if result.is_failure() {
            let violations = collect_violations(&result);
            debug!(
                dfa = dfa.name(),
                violations = violations.len(),
                "rejected DFA definition"
            );
            return Err(BuildError::InvalidDefinition {
                name: dfa.name,
                violations,
            });
        }

        Ok(dfa)
    }
}
