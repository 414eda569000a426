//! Breadth-first, A* and flood-fill searches.
//!
//! All three walk bounded adjacency under one [`Neighbourhood`]. The start
//! cell is never tested against `is_walkable`; every cell entered after it
//! is. Cells outside the lattice are never entered.

use crate::error::SearchError;
use crate::path::Path;
use indexmap::{IndexMap, IndexSet};
use quadray_core::Cell;
use quadray_lattice::{Neighbourhood, QuadLattice};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// Search driver over one lattice.
///
/// ```
/// use quadray_lattice::{Neighbourhood, QuadLattice};
/// use quadray_search::PathFinder;
///
/// let lattice = QuadLattice::new(4).unwrap();
/// let finder = PathFinder::new(&lattice).neighbourhood(Neighbourhood::Axial8);
/// let path = finder.bfs([0, 0, 0, 0], [2, 0, 0, 0], |_| true).unwrap();
/// assert_eq!(path.len(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'a> {
    lattice: &'a QuadLattice,
    neighbourhood: Neighbourhood,
    min_step_cost: Option<f64>,
}

impl<'a> PathFinder<'a> {
    /// A finder over `lattice` using [`Neighbourhood::Axial8`].
    ///
    /// With no minimum step cost configured, [`shortest_path`] assumes 1
    /// when every step costs 1 and 0 when a cost function is supplied, so
    /// any finite non-negative cost is accepted out of the box.
    ///
    /// [`shortest_path`]: Self::shortest_path
    pub fn new(lattice: &'a QuadLattice) -> Self {
        Self {
            lattice,
            neighbourhood: Neighbourhood::default(),
            min_step_cost: None,
        }
    }

    /// Set the adjacency family.
    pub fn neighbourhood(mut self, neighbourhood: Neighbourhood) -> Self {
        self.neighbourhood = neighbourhood;
        self
    }

    /// Set the smallest cost any cell may report in
    /// [`shortest_path`](Self::shortest_path).
    ///
    /// The A* heuristic scales by this value, so it must not exceed the
    /// true minimum; costs below it are rejected. Zero degrades A* to
    /// Dijkstra.
    pub fn min_step_cost(mut self, min_step_cost: f64) -> Self {
        self.min_step_cost = Some(min_step_cost);
        self
    }

    /// The lattice searched.
    pub fn lattice(&self) -> &'a QuadLattice {
        self.lattice
    }

    /// The adjacency family in use.
    pub fn family(&self) -> Neighbourhood {
        self.neighbourhood
    }

    fn steps_from(&self, cell: Cell) -> impl Iterator<Item = Cell> + 'a {
        self.lattice.steps(self.neighbourhood, cell)
    }

    /// Unweighted shortest path from `start` to `goal`.
    ///
    /// Returns `None` if either end is out of bounds, the goal is not
    /// walkable, or no path exists. A start equal to the goal yields a
    /// one-cell path.
    pub fn bfs<W>(&self, start: Cell, goal: Cell, is_walkable: W) -> Option<Path>
    where
        W: Fn(Cell) -> bool,
    {
        if !self.lattice.in_bounds(&start) || !self.lattice.in_bounds(&goal) {
            tracing::debug!(?start, ?goal, "bfs endpoint out of bounds");
            return None;
        }
        if start == goal {
            return Some(Path::new(vec![start], 0.0));
        }

        let mut parents: IndexMap<Cell, Option<Cell>> = IndexMap::new();
        let mut queue = VecDeque::new();
        parents.insert(start, None);
        queue.push_back(start);

        while let Some(cell) = queue.pop_front() {
            for nb in self.steps_from(cell) {
                if parents.contains_key(&nb) || !is_walkable(nb) {
                    continue;
                }
                parents.insert(nb, Some(cell));
                if nb == goal {
                    let cells = reconstruct(&parents, goal);
                    let cost = (cells.len() - 1) as f64;
                    return Some(Path::new(cells, cost));
                }
                queue.push_back(nb);
            }
        }

        tracing::debug!(
            ?start,
            ?goal,
            visited = parents.len(),
            "bfs exhausted frontier"
        );
        None
    }

    /// Weighted shortest path from `start` to `goal` (A*).
    ///
    /// `cost(cell)` is the price of entering `cell`; `None` prices every
    /// cell at 1. The heuristic is [`Neighbourhood::min_steps`] to the goal
    /// times the minimum step cost, so it never overestimates. Frontier
    /// ties pop in insertion order.
    ///
    /// Returns `Ok(None)` when unreachable or either end is out of bounds.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidMinStepCost`] if the configured minimum is
    /// negative or not finite; [`SearchError::InvalidCost`] as soon as a
    /// step cost is non-finite or below the minimum (configured, or the
    /// default described on [`new`](Self::new)).
    pub fn shortest_path<W>(
        &self,
        start: Cell,
        goal: Cell,
        is_walkable: W,
        cost: Option<&dyn Fn(Cell) -> f64>,
    ) -> Result<Option<Path>, SearchError>
    where
        W: Fn(Cell) -> bool,
    {
        let min = self
            .min_step_cost
            .unwrap_or(if cost.is_some() { 0.0 } else { 1.0 });
        if !min.is_finite() || min < 0.0 {
            return Err(SearchError::InvalidMinStepCost { value: min });
        }
        if !self.lattice.in_bounds(&start) || !self.lattice.in_bounds(&goal) {
            tracing::debug!(?start, ?goal, "shortest_path endpoint out of bounds");
            return Ok(None);
        }
        if start == goal {
            return Ok(Some(Path::new(vec![start], 0.0)));
        }

        let family = self.neighbourhood;
        let heuristic = |cell: Cell| family.min_steps(cell, goal) as f64 * min;

        let mut best: IndexMap<Cell, f64> = IndexMap::new();
        let mut parents: IndexMap<Cell, Option<Cell>> = IndexMap::new();
        let mut closed: IndexSet<Cell> = IndexSet::new();
        let mut open = BinaryHeap::new();
        let mut seq = 0u64;

        best.insert(start, 0.0);
        parents.insert(start, None);
        open.push(Reverse(Frontier {
            priority: heuristic(start),
            seq,
            cell: start,
        }));

        while let Some(Reverse(Frontier { cell, .. })) = open.pop() {
            if !closed.insert(cell) {
                continue;
            }
            let g = best.get(&cell).copied().unwrap_or(f64::INFINITY);
            if cell == goal {
                tracing::debug!(?goal, expanded = closed.len(), cost = g, "shortest_path found");
                return Ok(Some(Path::new(reconstruct(&parents, goal), g)));
            }

            for nb in self.steps_from(cell) {
                if closed.contains(&nb) || !is_walkable(nb) {
                    continue;
                }
                let step = cost.map_or(1.0, |f| f(nb));
                if !step.is_finite() || step < min {
                    return Err(SearchError::InvalidCost {
                        cell: nb,
                        cost: step,
                        min,
                    });
                }
                let tentative = g + step;
                if tentative < best.get(&nb).copied().unwrap_or(f64::INFINITY) {
                    best.insert(nb, tentative);
                    parents.insert(nb, Some(cell));
                    seq += 1;
                    open.push(Reverse(Frontier {
                        priority: tentative + heuristic(nb),
                        seq,
                        cell: nb,
                    }));
                }
            }
        }

        tracing::debug!(
            ?start,
            ?goal,
            expanded = closed.len(),
            "shortest_path exhausted frontier"
        );
        Ok(None)
    }

    /// Breadth-first reachable set from `start`, start included.
    ///
    /// With `max_cells`, stops after that many cells. The capped set is
    /// deterministic (a prefix of the uncapped BFS order) but not
    /// necessarily a full ball. An out-of-bounds start yields nothing.
    pub fn flood_fill<W>(&self, start: Cell, is_walkable: W, max_cells: Option<usize>) -> Vec<Cell>
    where
        W: Fn(Cell) -> bool,
    {
        let cap = max_cells.unwrap_or(usize::MAX);
        if cap == 0 || !self.lattice.in_bounds(&start) {
            return Vec::new();
        }

        let mut seen: IndexSet<Cell> = IndexSet::new();
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);

        'outer: while let Some(cell) = queue.pop_front() {
            for nb in self.steps_from(cell) {
                if seen.len() >= cap {
                    break 'outer;
                }
                if seen.contains(&nb) || !is_walkable(nb) {
                    continue;
                }
                seen.insert(nb);
                queue.push_back(nb);
            }
        }

        seen.into_iter().collect()
    }
}

/// Walk parent pointers back from `goal`.
fn reconstruct(parents: &IndexMap<Cell, Option<Cell>>, goal: Cell) -> Vec<Cell> {
    let mut cells = vec![goal];
    let mut cursor = goal;
    while let Some(&Some(prev)) = parents.get(&cursor) {
        cells.push(prev);
        cursor = prev;
    }
    cells.reverse();
    cells
}

/// A* frontier entry, ordered by priority then insertion sequence.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    priority: f64,
    seq: u64,
    cell: Cell,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}
