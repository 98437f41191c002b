//! Everything a front end needs for one request, in one value.
//!
//! A [`Report`] resolves a catalog name, optionally simulates an input,
//! and generates every artifact of the resolved DFA. Reports serialize to
//! JSON for handing to a rendering layer.

use crate::artifacts::Artifacts;
use crate::catalog::{Catalog, DfaDescriptor};
use crate::simulation::{run, SimulationTrace, Verdict};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod error;

pub use error::ReportError;

/// Version identifier for the report format
pub const REPORT_VERSION: u32 = 1;

/// Results of one request against a catalog.
///
/// # Example
///
/// ```rust
/// use dfa_lab::catalog::Catalog;
/// use dfa_lab::report::Report;
///
/// let report = Report::analyze(Catalog::builtin(), "odd_1s", Some("1"));
///
/// assert!(report.known);
/// assert!(report.trace.as_ref().unwrap().is_accepted());
/// assert_eq!(report.artifacts.function.len(), 4);
///
/// let json = report.to_json().unwrap();
/// assert_eq!(Report::from_json(&json).unwrap(), report);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report format version
    pub version: u32,

    /// Catalog name as requested
    pub requested: String,

    /// Whether the name was in the catalog; `false` means `dfa` is the fallback
    pub known: bool,

    /// Structural fields of the resolved DFA
    pub dfa: DfaDescriptor,

    /// Simulation of the supplied input, if any was supplied
    pub trace: Option<SimulationTrace>,

    /// Table, function and graph views
    pub artifacts: Artifacts,
}

impl Report {
    /// Resolve `name`, simulate `input` when given, and generate artifacts.
    ///
    /// `None` skips simulation. `Some("")` simulates the empty string.
    pub fn analyze(catalog: &Catalog, name: &str, input: Option<&str>) -> Self {
        let known = catalog.contains(name);
        let dfa = catalog.lookup(name);
        let trace = input.map(|input| run(&dfa, input));
        let artifacts = Artifacts::generate(&dfa);

        debug!(
            name,
            known,
            simulated = trace.is_some(),
            "analyzed catalog entry"
        );

        Self {
            version: REPORT_VERSION,
            requested: name.to_string(),
            known,
            dfa: DfaDescriptor::from(&dfa),
            trace,
            artifacts,
        }
    }

    /// One-line outcome message for the simulated input, if any.
    pub fn headline(&self) -> Option<String> {
        let trace = self.trace.as_ref()?;
        let message = match trace.verdict() {
            Verdict::Accepted => format!(
                "STRING VALID & ACCEPTED - String '{}' matches the pattern '{}'",
                trace.input(),
                self.dfa.description
            ),
            Verdict::RejectedFinalState => format!(
                "STRING VALID BUT REJECTED - String '{}' does not match the pattern '{}'",
                trace.input(),
                self.dfa.description
            ),
            Verdict::RejectedNoTransition { .. } => {
                "STRING REJECTED (No valid transition)".to_string()
            }
            Verdict::RejectedInvalidSymbol {
                symbol, position, ..
            } => {
                let mut alphabet = self.dfa.alphabet.clone();
                alphabet.sort_unstable();
                let alphabet: Vec<String> = alphabet.iter().map(char::to_string).collect();
                format!(
                    "STRING INVALID - Character '{symbol}' at position {position} is not in alphabet {{{}}}",
                    alphabet.join(", ")
                )
            }
        };
        Some(message)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string(self).map_err(|e| ReportError::EncodeFailed(e.to_string()))
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::EncodeFailed(e.to_string()))
    }

    /// Deserialize from JSON, rejecting unknown format versions and tables
    /// whose rows do not line up with their symbol columns.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)
            .map_err(|e| ReportError::DecodeFailed(e.to_string()))?;

        if report.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: report.version,
                supported: REPORT_VERSION,
            });
        }

        let table = &report.artifacts.table;
        if let Some(row) = table.ragged_row() {
            return Err(ReportError::RaggedTableRow {
                state: row.state.clone(),
                cells: row.cells.len(),
                columns: table.symbols().len(),
            });
        }

        Ok(report)
    }
}
