//! Transition table view.

use crate::core::{Dfa, StateId, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker shown for an undefined transition.
pub const NO_TRANSITION: &str = "-";

/// One cell of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableCell {
    /// Destination state
    Next(StateId),
    /// The (state, symbol) pair has no transition
    NoTransition,
}

impl TableCell {
    pub fn next_state(&self) -> Option<&StateId> {
        match self {
            Self::Next(state) => Some(state),
            Self::NoTransition => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Next(_))
    }
}

impl fmt::Display for TableCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next(state) => write!(f, "{state}"),
            Self::NoTransition => f.write_str(NO_TRANSITION),
        }
    }
}

/// One row per state, cells in column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub state: StateId,
    pub is_start: bool,
    pub is_accepting: bool,
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Row heading: `→` before the start state, `+` after accepting ones.
    pub fn label(&self) -> String {
        let mut label = String::new();
        if self.is_start {
            label.push_str("→ ");
        }
        label.push_str(self.state.name());
        if self.is_accepting {
            label.push_str(" +");
        }
        label
    }
}

/// States × symbols grid of destinations.
///
/// Rows follow the lexicographic order of state labels and columns the
/// order of symbols, so the layout does not depend on how the transition
/// relation was declared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTable {
    symbols: Vec<Symbol>,
    rows: Vec<TableRow>,
}

impl TransitionTable {
    /// Column symbols in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Cell at (`state`, `symbol`), if both are part of the table.
    pub fn cell(&self, state: &str, symbol: Symbol) -> Option<&TableCell> {
        let column = self.symbols.iter().position(|&s| s == symbol)?;
        self.rows
            .iter()
            .find(|row| row.state == state)?
            .cells
            .get(column)
    }

    /// First row whose cell count differs from the number of symbols.
    ///
    /// Tables built by [`transition_table`] are never ragged; tables read
    /// back from JSON may be.
    pub fn ragged_row(&self) -> Option<&TableRow> {
        self.rows
            .iter()
            .find(|row| row.cells.len() != self.symbols.len())
    }

    /// Number of cells holding a destination.
    pub fn defined_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.is_defined())
            .count()
    }
}

impl TableRow {
    /// Rendered cell in `column`. A missing cell shows as the sentinel.
    fn cell_text(&self, column: usize) -> String {
        self.cells
            .get(column)
            .map_or_else(|| NO_TRANSITION.to_string(), ToString::to_string)
    }
}

impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.rows.iter().map(TableRow::label).collect();
        let label_width = labels
            .iter()
            .map(|label| label.chars().count())
            .chain(std::iter::once("State".len()))
            .max()
            .unwrap_or(0);

        let column_widths: Vec<usize> = (0..self.symbols.len())
            .map(|column| {
                self.rows
                    .iter()
                    .map(|row| row.cell_text(column).chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(1)
            })
            .collect();

        let render = |heading: &str, cells: Vec<String>| {
            let mut line = format!("{heading:<label_width$}");
            for (cell, &width) in cells.iter().zip(&column_widths) {
                line.push_str(&format!(" | {cell:<width$}"));
            }
            line.trim_end().to_string()
        };

        let header = render(
            "State",
            self.symbols.iter().map(|symbol| symbol.to_string()).collect(),
        );
        write!(f, "{header}")?;

        for (row, label) in self.rows.iter().zip(&labels) {
            let cells = (0..self.symbols.len())
                .map(|column| row.cell_text(column))
                .collect();
            let line = render(label.as_str(), cells);
            write!(f, "\n{line}")?;
        }

        Ok(())
    }
}

/// Build the transition table of `dfa`.
pub fn transition_table(dfa: &Dfa) -> TransitionTable {
    let symbols: Vec<Symbol> = dfa.alphabet().iter().copied().collect();

    let rows = dfa
        .states()
        .iter()
        .map(|state| TableRow {
            state: state.clone(),
            is_start: dfa.is_start(state.name()),
            is_accepting: dfa.is_accepting(state.name()),
            cells: symbols
                .iter()
                .map(|&symbol| match dfa.next_state(state.name(), symbol) {
                    Some(next) => TableCell::Next(next.clone()),
                    None => TableCell::NoTransition,
                })
                .collect(),
        })
        .collect();

    TransitionTable { symbols, rows }
}
