//! Graph view: nodes and coalesced edges.

use crate::core::{Dfa, StateId, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Separator between symbols in an edge label.
pub const LABEL_SEPARATOR: &str = ", ";

/// A state drawn as a node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: StateId,
    pub start: bool,
    #[serde(rename = "final")]
    pub accepting: bool,
}

impl GraphNode {
    /// Space-separated tags: `"start"`, `"final"`, `"start final"` or `""`.
    pub fn kind(&self) -> &'static str {
        match (self.start, self.accepting) {
            (true, true) => "start final",
            (true, false) => "start",
            (false, true) => "final",
            (false, false) => "",
        }
    }
}

/// All transitions between one ordered pair of states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: StateId,
    pub to: StateId,
    /// Symbols in the order their transitions were declared
    pub symbols: Vec<Symbol>,
    pub label: String,
}

impl GraphEdge {
    fn new(from: StateId, to: StateId, symbol: Symbol) -> Self {
        Self {
            from,
            to,
            symbols: vec![symbol],
            label: symbol.to_string(),
        }
    }

    fn add_symbol(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
        self.label.push_str(LABEL_SEPARATOR);
        self.label.push(symbol);
    }
}

/// Node and edge lists for drawing a DFA.
///
/// # Example
///
/// ```rust
/// use dfa_lab::artifacts::graph;
/// use dfa_lab::catalog::Catalog;
///
/// let dfa = Catalog::builtin().lookup("contains_01");
/// let graph = graph(&dfa);
///
/// let self_loop = graph.edge("q2", "q2").unwrap();
/// assert_eq!(self_loop.label, "0, 1");
/// assert_eq!(graph.edges().len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GraphParts")]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    #[serde(skip)]
    node_index: HashMap<StateId, usize>,
    #[serde(skip)]
    edge_index: HashMap<StateId, HashMap<StateId, usize>>,
}

/// Serialized form of a [`Graph`]; the lookup indexes are rebuilt on load.
#[derive(Deserialize)]
struct GraphParts {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl From<GraphParts> for Graph {
    fn from(parts: GraphParts) -> Self {
        Self::from_parts(parts.nodes, parts.edges)
    }
}

impl Graph {
    fn from_parts(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        let node_index = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.id.clone(), position))
            .collect();

        let mut edge_index: HashMap<StateId, HashMap<StateId, usize>> = HashMap::new();
        for (position, edge) in edges.iter().enumerate() {
            edge_index
                .entry(edge.from.clone())
                .or_default()
                .entry(edge.to.clone())
                .or_insert(position);
        }

        Self {
            nodes,
            edges,
            node_index,
            edge_index,
        }
    }

    /// Nodes in lexicographic order of state label.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in the order their (from, to) pair first appears.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index.get(id).map(|&position| &self.nodes[position])
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&GraphEdge> {
        self.edge_index
            .get(from)?
            .get(to)
            .map(|&position| &self.edges[position])
    }
}

/// Build the graph of `dfa`.
///
/// Transitions sharing a (from, to) pair collapse into one edge. The edge
/// is created at the first such transition and only extended afterwards.
pub fn graph(dfa: &Dfa) -> Graph {
    let nodes: Vec<GraphNode> = dfa
        .states()
        .iter()
        .map(|state| GraphNode {
            id: state.clone(),
            start: dfa.is_start(state.name()),
            accepting: dfa.is_accepting(state.name()),
        })
        .collect();

    let mut edges: Vec<GraphEdge> = Vec::new();
    let mut by_pair: HashMap<(&StateId, &StateId), usize> = HashMap::new();

    for transition in dfa.transitions() {
        match by_pair.entry((&transition.from, &transition.to)) {
            Entry::Occupied(slot) => edges[*slot.get()].add_symbol(transition.symbol),
            Entry::Vacant(slot) => {
                slot.insert(edges.len());
                edges.push(GraphEdge::new(
                    transition.from.clone(),
                    transition.to.clone(),
                    transition.symbol,
                ));
            }
        }
    }

    Graph::from_parts(nodes, edges)
}
