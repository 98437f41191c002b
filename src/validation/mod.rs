//! Validation-based structural checks for DFA definitions.
//!
//! This module checks the invariants every [`Dfa`](crate::core::Dfa) must
//! satisfy using Stillwater's `Validation` type, so a broken definition
//! reports ALL of its problems in a single pass instead of the first one.
//!
//! # Example
//!
//! ```rust
//! use dfa_lab::catalog::Catalog;
//! use dfa_lab::validation::validate;
//!
//! let dfa = Catalog::builtin().lookup("contains_01");
//! assert!(validate(&dfa).is_success());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{collect_violations, validate, Check};
pub use violations::DfaViolation;
