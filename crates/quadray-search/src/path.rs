//! Search results.

use quadray_core::Cell;

/// A path from start to goal, both included.
///
/// Never empty: a search whose start equals its goal yields a single cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    cells: Vec<Cell>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(cells: Vec<Cell>, cost: f64) -> Self {
        debug_assert!(!cells.is_empty(), "a path holds at least its start");
        Self { cells, cost }
    }

    /// Cells from start to goal.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells, start and goal included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, `len() - 1`.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Total cost of entering every cell after the start. Equals
    /// [`steps`](Self::steps) for unweighted searches.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// First cell.
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    /// Last cell.
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Consume the path, keeping the cells.
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
