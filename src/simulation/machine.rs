//! Step-wise execution of a DFA over its input.

use crate::core::{Dfa, StateId, Symbol};
use crate::simulation::trace::{SimulationStep, SimulationTrace, Verdict};
use tracing::{debug, trace};

/// Result of feeding a single symbol
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// Moved to a new state
    Advanced(StateId),

    /// Run stopped; further symbols are ignored
    Halted(Verdict),
}

/// Runs one input through a borrowed DFA, one symbol at a time.
///
/// The simulator owns all of its run state, so any number of them can
/// share one DFA.
///
/// # Example
///
/// ```rust
/// use dfa_lab::catalog::Catalog;
/// use dfa_lab::simulation::{Simulator, StepResult};
///
/// let dfa = Catalog::builtin().lookup("contains_ab");
/// let mut simulator = Simulator::new(&dfa);
///
/// assert!(matches!(simulator.feed('a'), StepResult::Advanced(_)));
/// assert!(matches!(simulator.feed('c'), StepResult::Halted(_)));
/// assert!(simulator.is_halted());
///
/// let trace = simulator.finish();
/// assert_eq!(trace.verdict().halt_position(), Some(2));
/// ```
#[derive(Debug)]
pub struct Simulator<'a> {
    dfa: &'a Dfa,
    input: String,
    current: StateId,
    steps: Vec<SimulationStep>,
    halted: Option<Verdict>,
}

impl<'a> Simulator<'a> {
    /// Create a simulator positioned at the DFA's start state
    pub fn new(dfa: &'a Dfa) -> Self {
        Self {
            dfa,
            input: String::new(),
            current: dfa.start().clone(),
            steps: Vec::new(),
            halted: None,
        }
    }

    /// Get current state
    pub fn current_state(&self) -> &StateId {
        &self.current
    }

    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    /// Steps taken so far
    pub fn steps(&self) -> &[SimulationStep] {
        &self.steps
    }

    /// Read one symbol.
    ///
    /// A symbol outside the alphabet halts the run without recording a
    /// step. A missing transition halts the run after recording the failed
    /// step. Once halted, the simulator ignores its input.
    pub fn feed(&mut self, symbol: Symbol) -> StepResult {
        self.input.push(symbol);

        if let Some(verdict) = &self.halted {
            return StepResult::Halted(verdict.clone());
        }

        let position = self.steps.len() + 1;

        if !self.dfa.in_alphabet(symbol) {
            return self.halt(Verdict::RejectedInvalidSymbol {
                symbol,
                position,
                state: self.current.clone(),
            });
        }

        let Some(next) = self.dfa.next_state(self.current.name(), symbol) else {
            trace!(%symbol, from = %self.current, "no transition");
            self.steps.push(SimulationStep {
                symbol,
                from: self.current.clone(),
                to: None,
            });
            return self.halt(Verdict::RejectedNoTransition {
                symbol,
                position,
                state: self.current.clone(),
            });
        };

        trace!(%symbol, from = %self.current, to = %next, "step");
        let next = next.clone();
        self.steps.push(SimulationStep {
            symbol,
            from: std::mem::replace(&mut self.current, next.clone()),
            to: Some(next.clone()),
        });

        StepResult::Advanced(next)
    }

    fn halt(&mut self, verdict: Verdict) -> StepResult {
        self.halted = Some(verdict.clone());
        StepResult::Halted(verdict)
    }

    /// Close the run and produce its trace.
    pub fn finish(self) -> SimulationTrace {
        let (verdict, final_state) = match self.halted {
            Some(verdict) => (verdict, None),
            None if self.dfa.is_accepting(self.current.name()) => {
                (Verdict::Accepted, Some(self.current.clone()))
            }
            None => (Verdict::RejectedFinalState, Some(self.current.clone())),
        };

        debug!(
            dfa = self.dfa.name(),
            steps = self.steps.len(),
            %verdict,
            "simulation finished"
        );

        SimulationTrace {
            input: self.input,
            start: self.dfa.start().clone(),
            steps: self.steps,
            verdict,
            final_state,
        }
    }
}

/// Run `input` against `dfa` and return the full trace.
///
/// Pure: identical arguments always produce identical traces. The empty
/// input produces no steps and is judged on the start state alone.
pub fn run(dfa: &Dfa, input: &str) -> SimulationTrace {
    let mut simulator = Simulator::new(dfa);
    let mut symbols = input.chars();

    for symbol in symbols.by_ref() {
        if let StepResult::Halted(_) = simulator.feed(symbol) {
            break;
        }
    }

    // Keep the unread suffix so the trace reports the whole input.
    simulator.input.extend(symbols);
    simulator.finish()
}

impl Dfa {
    /// Run `input` against this DFA. See [`run`].
    pub fn run(&self, input: &str) -> SimulationTrace {
        run(self, input)
    }

    /// Whether this DFA accepts `input`.
    pub fn accepts(&self, input: &str) -> bool {
        run(self, input).is_accepted()
    }
}
