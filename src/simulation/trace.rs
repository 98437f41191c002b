//! Simulation traces and verdicts.
//!
//! A trace is an immutable record of one run of a DFA over an input:
//! every symbol read, the state it was read in, where it led, and how
//! the run ended.

use crate::core::{StateId, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of reading a single symbol.
///
/// `to` is `None` when the automaton had no transition for the pair; such
/// a step is always the last one of its trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStep {
    /// The symbol read
    pub symbol: Symbol,
    /// The state the symbol was read in
    pub from: StateId,
    /// The state reached, if a transition was defined
    pub to: Option<StateId>,
}

impl fmt::Display for SimulationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.to {
            Some(to) => write!(f, "Read '{}': {} → {}", self.symbol, self.from, to),
            None => write!(f, "Read '{}': {} → [No transition]", self.symbol, self.from),
        }
    }
}

/// How a run ended.
///
/// Every variant other than `Accepted` is a rejection; none of them is an
/// error. Positions are 1-based character positions in the input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Whole input consumed, ended in an accepting state
    Accepted,

    /// A symbol outside the alphabet was read; nothing after it was read
    RejectedInvalidSymbol {
        symbol: Symbol,
        position: usize,
        state: StateId,
    },

    /// No transition from `state` on `symbol`
    RejectedNoTransition {
        symbol: Symbol,
        position: usize,
        state: StateId,
    },

    /// Whole input consumed, ended in a non-accepting state
    RejectedFinalState,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Whether the run stopped before consuming all of its input.
    pub fn halted_early(&self) -> bool {
        matches!(
            self,
            Self::RejectedInvalidSymbol { .. } | Self::RejectedNoTransition { .. }
        )
    }

    /// 1-based position of the symbol that stopped the run, if it halted early.
    pub fn halt_position(&self) -> Option<usize> {
        match self {
            Self::RejectedInvalidSymbol { position, .. }
            | Self::RejectedNoTransition { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// The state the run was in when it halted early.
    pub fn halt_state(&self) -> Option<&StateId> {
        match self {
            Self::RejectedInvalidSymbol { state, .. }
            | Self::RejectedNoTransition { state, .. } => Some(state),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("accepted"),
            Self::RejectedInvalidSymbol {
                symbol, position, ..
            } => write!(
                f,
                "invalid: character '{symbol}' at position {position} is not in the alphabet"
            ),
            Self::RejectedNoTransition {
                symbol,
                position,
                state,
            } => write!(
                f,
                "rejected: no transition from {state} on '{symbol}' at position {position}"
            ),
            Self::RejectedFinalState => f.write_str("rejected: ended in a non-accepting state"),
        }
    }
}

/// Ordered record of one simulation run.
///
/// # Example
///
/// ```rust
/// use dfa_lab::catalog::Catalog;
/// use dfa_lab::simulation::run;
///
/// let dfa = Catalog::builtin().lookup("contains_01");
/// let trace = run(&dfa, "001");
///
/// let path: Vec<&str> = trace.path().iter().map(|s| s.name()).collect();
/// assert_eq!(path, vec!["q0", "q1", "q1", "q2"]);
/// assert!(trace.is_accepted());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationTrace {
    pub(crate) input: String,
    pub(crate) start: StateId,
    pub(crate) steps: Vec<SimulationStep>,
    pub(crate) verdict: Verdict,
    pub(crate) final_state: Option<StateId>,
}

impl SimulationTrace {
    /// The input the run was given, including any unread suffix.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn start(&self) -> &StateId {
        &self.start
    }

    /// Steps in the order they were taken.
    pub fn steps(&self) -> &[SimulationStep] {
        &self.steps
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// State reached after consuming the whole input.
    /// `None` when the run halted early.
    pub fn final_state(&self) -> Option<&StateId> {
        self.final_state.as_ref()
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// The state the run stopped in, whether it finished or halted.
    pub fn last_state(&self) -> &StateId {
        self.final_state
            .as_ref()
            .or_else(|| self.verdict.halt_state())
            .unwrap_or(&self.start)
    }

    /// States visited: the start state, then the target of each
    /// successful step.
    pub fn path(&self) -> Vec<&StateId> {
        let mut path = vec![&self.start];
        path.extend(self.steps.iter().filter_map(|step| step.to.as_ref()));
        path
    }

    /// Human-readable step listing.
    ///
    /// Starts with the start state, lists every step, and ends with the
    /// final state when the whole input was consumed.
    pub fn narration(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.steps.len() + 2);
        lines.push(format!("Start State: {}", self.start));
        lines.extend(self.steps.iter().map(ToString::to_string));
        if let Some(state) = &self.final_state {
            lines.push(format!("Final State: {state}"));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(symbol: Symbol, from: &str, to: Option<&str>) -> SimulationStep {
        SimulationStep {
            symbol,
            from: StateId::from(from),
            to: to.map(StateId::from),
        }
    }

    fn halted_trace() -> SimulationTrace {
        SimulationTrace {
            input: "011".to_string(),
            start: StateId::from("q0"),
            steps: vec![step('0', "q0", Some("q1")), step('1', "q1", None)],
            verdict: Verdict::RejectedNoTransition {
                symbol: '1',
                position: 2,
                state: StateId::from("q1"),
            },
            final_state: None,
        }
    }

    #[test]
    fn step_display_marks_missing_transition() {
        assert_eq!(step('0', "q0", Some("q1")).to_string(), "Read '0': q0 → q1");
        assert_eq!(
            step('1', "q1", None).to_string(),
            "Read '1': q1 → [No transition]"
        );
    }

    #[test]
    fn path_skips_failed_step() {
        let trace = halted_trace();
        let path: Vec<&str> = trace.path().iter().map(|s| s.name()).collect();

        assert_eq!(path, vec!["q0", "q1"]);
        assert_eq!(trace.last_state(), &StateId::from("q1"));
    }

    #[test]
    fn narration_omits_final_state_after_halt() {
        let lines = halted_trace().narration();

        assert_eq!(
            lines,
            vec![
                "Start State: q0",
                "Read '0': q0 → q1",
                "Read '1': q1 → [No transition]",
            ]
        );
    }

    #[test]
    fn verdict_queries() {
        let halted = halted_trace();
        assert!(halted.verdict().halted_early());
        assert_eq!(halted.verdict().halt_position(), Some(2));
        assert!(!halted.is_accepted());

        assert!(Verdict::Accepted.is_accepted());
        assert!(!Verdict::RejectedFinalState.halted_early());
        assert_eq!(Verdict::RejectedFinalState.halt_position(), None);
        assert_eq!(Verdict::Accepted.halt_state(), None);
    }

    #[test]
    fn verdict_display() {
        let invalid = Verdict::RejectedInvalidSymbol {
            symbol: 'a',
            position: 2,
            state: StateId::from("q1"),
        };

        assert_eq!(
            invalid.to_string(),
            "invalid: character 'a' at position 2 is not in the alphabet"
        );
        assert_eq!(
            halted_trace().verdict().to_string(),
            "rejected: no transition from q1 on '1' at position 2"
        );
        assert_eq!(Verdict::Accepted.to_string(), "accepted");
    }

    #[test]
    fn verdict_serializes_with_kind_tag() {
        let json = serde_json::to_value(halted_trace().verdict()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "kind": "rejected_no_transition",
                "symbol": "1",
                "position": 2,
                "state": "q1"
            })
        );
    }
}
