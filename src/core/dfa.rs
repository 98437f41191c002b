//! The deterministic finite automaton value type.
//!
//! A [`Dfa`] is immutable once built. The only way to obtain one is
//! through [`DfaBuilder`](crate::builder::DfaBuilder), which checks every
//! structural invariant before handing the value out.

use super::state::{StateId, Symbol};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A single defined transition `δ(from, symbol) = to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The state being transitioned from
    pub from: StateId,
    /// The symbol consumed
    pub symbol: Symbol,
    /// The state being transitioned to
    pub to: StateId,
}

impl Transition {
    pub fn new(from: impl Into<StateId>, symbol: Symbol, to: impl Into<StateId>) -> Self {
        Self {
            from: from.into(),
            symbol,
            to: to.into(),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "δ({}, {}) = {}", self.from, self.symbol, self.to)
    }
}

/// Partial transition relation.
///
/// Entries keep their definition order for iteration. Lookup goes through a
/// two-level index `state -> symbol -> entry`, so an absent pair is simply
/// an undefined transition.
#[derive(Clone, Debug, Default)]
pub struct TransitionMap {
    entries: Vec<Transition>,
    index: HashMap<StateId, HashMap<Symbol, usize>>,
}

impl TransitionMap {
    /// Index a list of transitions. When a (state, symbol) key repeats, the
    /// first entry wins the index; callers reject such lists beforehand.
    pub(crate) fn from_entries(entries: Vec<Transition>) -> Self {
        let mut index: HashMap<StateId, HashMap<Symbol, usize>> = HashMap::new();
        for (position, transition) in entries.iter().enumerate() {
            index
                .entry(transition.from.clone())
                .or_default()
                .entry(transition.symbol)
                .or_insert(position);
        }
        Self { entries, index }
    }

    /// Destination for `(state, symbol)`, or `None` when undefined.
    pub fn get(&self, state: &str, symbol: Symbol) -> Option<&StateId> {
        self.index
            .get(state)
            .and_then(|row| row.get(&symbol))
            .map(|&position| &self.entries[position].to)
    }

    pub fn contains(&self, state: &str, symbol: Symbol) -> bool {
        self.get(state, symbol).is_some()
    }

    /// Transitions in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, Transition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Transition] {
        &self.entries
    }
}

impl PartialEq for TransitionMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for TransitionMap {}

impl Serialize for TransitionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

impl<'a> IntoIterator for &'a TransitionMap {
    type Item = &'a Transition;
    type IntoIter = std::slice::Iter<'a, Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Deterministic finite automaton.
///
/// Holds the five-tuple plus descriptive metadata (`name`, `description`,
/// `regex`) that has no effect on simulation.
///
/// # Example
///
/// ```rust
/// use dfa_lab::builder::DfaBuilder;
///
/// let dfa = DfaBuilder::new("ends_in_1")
///     .states(["q0", "q1"])
///     .alphabet(['0', '1'])
///     .start("q0")
///     .accepting(["q1"])
///     .transition("q0", '0', "q0")
///     .transition("q0", '1', "q1")
///     .transition("q1", '0', "q0")
///     .transition("q1", '1', "q1")
///     .build()
///     .unwrap();
///
/// assert_eq!(dfa.next_state("q0", '1').map(|s| s.name()), Some("q1"));
/// assert!(dfa.is_accepting("q1"));
/// assert!(!dfa.is_accepting("q0"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dfa {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) regex: String,
    pub(crate) states: BTreeSet<StateId>,
    pub(crate) alphabet: BTreeSet<Symbol>,
    pub(crate) start: StateId,
    #[serde(rename = "final")]
    pub(crate) accepting: BTreeSet<StateId>,
    pub(crate) transitions: TransitionMap,
}

impl Dfa {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Descriptive regular expression. Never parsed.
    pub fn regex(&self) -> &str {
        &self.regex
    }

    /// States in lexicographic order.
    pub fn states(&self) -> &BTreeSet<StateId> {
        &self.states
    }

    /// Alphabet symbols in lexicographic order.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    pub fn start(&self) -> &StateId {
        &self.start
    }

    /// Accepting states in lexicographic order.
    pub fn accepting(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    pub fn transitions(&self) -> &TransitionMap {
        &self.transitions
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    pub fn is_start(&self, state: &str) -> bool {
        self.start == state
    }

    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepting.contains(state)
    }

    pub fn in_alphabet(&self, symbol: Symbol) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// Look up `δ(state, symbol)`. `None` means the transition is undefined.
    pub fn next_state(&self, state: &str, symbol: Symbol) -> Option<&StateId> {
        self.transitions.get(state, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> TransitionMap {
        TransitionMap::from_entries(vec![
            Transition::new("q0", '1', "q1"),
            Transition::new("q0", '0', "q0"),
            Transition::new("q1", '0', "q1"),
        ])
    }

    #[test]
    fn lookup_finds_defined_transitions() {
        let map = sample_map();

        assert_eq!(map.get("q0", '1'), Some(&StateId::from("q1")));
        assert_eq!(map.get("q0", '0'), Some(&StateId::from("q0")));
        assert_eq!(map.get("q1", '0'), Some(&StateId::from("q1")));
    }

    #[test]
    fn absent_pair_is_undefined() {
        let map = sample_map();

        assert!(map.get("q1", '1').is_none());
        assert!(!map.contains("q2", '0'));
    }

    #[test]
    fn iteration_keeps_definition_order() {
        let map = sample_map();
        let order: Vec<(&str, char)> = map.iter().map(|t| (t.from.name(), t.symbol)).collect();

        assert_eq!(order, vec![("q0", '1'), ("q0", '0'), ("q1", '0')]);
        assert_eq!(map.len(), 3);
        assert!(!map.is_empty());
    }

    #[test]
    fn first_entry_wins_on_repeated_key() {
        let map = TransitionMap::from_entries(vec![
            Transition::new("q0", 'a', "q1"),
            Transition::new("q0", 'a', "q2"),
        ]);

        assert_eq!(map.get("q0", 'a'), Some(&StateId::from("q1")));
    }

    #[test]
    fn transition_displays_in_delta_notation() {
        assert_eq!(Transition::new("q1", '0', "qDead").to_string(), "δ(q1, 0) = qDead");
    }

    #[test]
    fn serializes_as_entry_list() {
        let map = TransitionMap::from_entries(vec![Transition::new("q0", 'a', "q1")]);
        let json = serde_json::to_value(&map).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{ "from": "q0", "symbol": "a", "to": "q1" }])
        );
    }
}
