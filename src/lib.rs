//! dfa-lab: deterministic finite automaton simulation and diagnostics.
//!
//! Given a DFA and an input string, dfa-lab computes the step-by-step
//! state trajectory and the accept/reject verdict, and derives structured
//! views of the automaton for display.
//!
//! Everything here is pure: automata are immutable, simulation returns
//! data, and rejections are verdicts rather than errors.
//!
//! # Core Concepts
//!
//! - **Dfa**: immutable automaton, built and validated by `DfaBuilder`
//! - **Catalog**: fixed registry of named automata with a fallback for
//!   unknown names
//! - **Simulation**: runs an input, producing a `SimulationTrace`
//! - **Artifacts**: transition table, transition function and graph views
//! - **Report**: one request's results, serializable to JSON
//!
//! # Example
//!
//! ```rust
//! use dfa_lab::artifacts::Artifacts;
//! use dfa_lab::catalog::Catalog;
//! use dfa_lab::simulation::{run, Verdict};
//!
//! let dfa = Catalog::builtin().lookup("contains_01");
//!
//! let trace = run(&dfa, "0a1");
//! assert!(matches!(
//!     trace.verdict(),
//!     Verdict::RejectedInvalidSymbol { symbol: 'a', position: 2, .. }
//! ));
//!
//! let artifacts = Artifacts::generate(&dfa);
//! assert_eq!(artifacts.function.lines()[0], "δ(q0, 0) = q1");
//! ```

pub mod artifacts;
pub mod builder;
pub mod catalog;
pub mod core;
pub mod report;
pub mod simulation;
pub mod validation;

// Re-export commonly used types
pub use crate::artifacts::Artifacts;
pub use crate::builder::{BuildError, DfaBuilder};
pub use crate::catalog::{Catalog, CatalogError, DfaDescriptor};
pub use crate::core::{Dfa, StateId, Symbol, Transition};
pub use crate::report::{Report, ReportError};
pub use crate::simulation::{run, SimulationStep, SimulationTrace, Verdict};
