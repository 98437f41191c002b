//! Registry of named automata.
//!
//! The catalog maps a symbolic name to a validated DFA. The built-in
//! catalog is initialized once per process and never mutated; every
//! [`lookup`](Catalog::lookup) hands out a fresh copy, so callers own
//! their automaton outright.
//!
//! Unknown names are not an error: they resolve to a single-state
//! fallback automaton whose description is `"Unknown"`.

mod builtin;
mod descriptor;
pub mod error;

pub use descriptor::DfaDescriptor;
pub use error::CatalogError;

use crate::core::Dfa;
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::debug;

lazy_static! {
    static ref BUILTIN: Catalog =
        Catalog::from_descriptors(builtin::descriptors()).expect("builtin catalog is well-formed");
}

/// Name-indexed collection of automata.
///
/// # Example
///
/// ```rust
/// use dfa_lab::catalog::Catalog;
///
/// let catalog = Catalog::builtin();
///
/// let dfa = catalog.lookup("odd_1s");
/// assert_eq!(dfa.description(), "Odd number of 1s");
///
/// let unknown = catalog.lookup("nonexistent");
/// assert_eq!(unknown.description(), "Unknown");
/// assert!(!catalog.contains("nonexistent"));
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<Dfa>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Entry shown before the user picks one.
    pub const DEFAULT_ENTRY: &'static str = "contains_01";

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog from descriptors, validating each entry.
    /// Entry order is preserved for [`names`](Catalog::names).
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = DfaDescriptor>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for descriptor in descriptors {
            if index.contains_key(&descriptor.name) {
                return Err(CatalogError::DuplicateEntry(descriptor.name));
            }

            let dfa = descriptor
                .to_dfa()
                .map_err(|source| CatalogError::InvalidEntry {
                    name: descriptor.name.clone(),
                    source,
                })?;

            index.insert(descriptor.name, entries.len());
            entries.push(dfa);
        }

        Ok(Self { entries, index })
    }

    /// Load a catalog from a JSON array of descriptors.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let descriptors: Vec<DfaDescriptor> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseFailed(e.to_string()))?;
        Self::from_descriptors(descriptors)
    }

    /// Resolve `name` to a fresh DFA, falling back to the degenerate
    /// single-state automaton when the name is unknown.
    pub fn lookup(&self, name: &str) -> Dfa {
        match self.get(name) {
            Some(dfa) => dfa.clone(),
            None => {
                debug!(name, "unknown catalog entry, serving fallback DFA");
                fallback(name)
            }
        }
    }

    /// Borrow the entry registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Dfa> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entry names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(Dfa::name)
    }

    /// Descriptor of the entry registered under `name`, if any.
    pub fn descriptor(&self, name: &str) -> Option<DfaDescriptor> {
        self.get(name).map(DfaDescriptor::from)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The fallback automaton for an unknown `name`: one state `q0`, both
/// start and accepting, alphabet `{0, 1}` and no transitions.
pub fn fallback(name: &str) -> Dfa {
    builtin::fallback(name)
        .to_dfa()
        .expect("fallback DFA is well-formed")
}
