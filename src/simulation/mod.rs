//! Running input strings through a DFA.
//!
//! # Key Concepts
//!
//! - **Simulator**: reads one symbol at a time and halts on the first
//!   symbol outside the alphabet or the first undefined transition
//! - **Trace**: the ordered steps of a run plus its verdict
//! - **Verdict**: accepted, or one of three rejection kinds, returned as
//!   data rather than as an error
//!
//! Simulation is pure. It never mutates the DFA and produces the same
//! trace for the same arguments.

mod machine;
mod trace;

pub use machine::{run, Simulator, StepResult};
pub use trace::{SimulationStep, SimulationTrace, Verdict};
