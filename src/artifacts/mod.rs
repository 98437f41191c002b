//! Derived views of a DFA.
//!
//! Three independent generators, each a pure function of the DFA alone:
//! - **Table**: states × symbols grid with start/accepting markers
//! - **Function**: `δ(state, symbol) = next_state` listing
//! - **Graph**: nodes plus edges coalesced per (from, to) pair
//!
//! None of them can fail on a DFA produced by
//! [`DfaBuilder`](crate::builder::DfaBuilder).

mod function;
mod graph;
mod table;

pub use function::{transition_function, TransitionFunction};
pub use graph::{graph, Graph, GraphEdge, GraphNode, LABEL_SEPARATOR};
pub use table::{transition_table, TableCell, TableRow, TransitionTable, NO_TRANSITION};

use crate::core::Dfa;
use serde::{Deserialize, Serialize};

/// All three views of one DFA.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifacts {
    pub table: TransitionTable,
    pub function: TransitionFunction,
    pub graph: Graph,
}

impl Artifacts {
    /// Generate every view of `dfa`.
    pub fn generate(dfa: &Dfa) -> Self {
        Self {
            table: transition_table(dfa),
            function: transition_function(dfa),
            graph: graph(dfa),
        }
    }
}
