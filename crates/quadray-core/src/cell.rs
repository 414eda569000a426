//! Integer lattice cells, their textual keys, and the normalized [`CellKey`].

use crate::error::CoordError;
use crate::quadray::Quadray;
use std::fmt;
use std::str::FromStr;

/// An integer lattice tuple `[a, b, c, d]`.
///
/// Cells are raw tuples: `[1, 1, 1, 1]` and `[0, 0, 0, 0]` are distinct
/// cells of a bounded lattice even though they name the same point in
/// space. Use [`CellKey`] when spatial identity is what matters.
pub type Cell = [i32; 4];

/// Encode a cell as its canonical `"a,b,c,d"` string.
///
/// The encoding is of the raw tuple; it round-trips through [`parse_key`].
pub fn key(cell: Cell) -> String {
    let [a, b, c, d] = cell;
    format!("{a},{b},{c},{d}")
}

/// Decode a `"a,b,c,d"` string produced by [`key`].
///
/// Surrounding whitespace on each component is ignored.
pub fn parse_key(s: &str) -> Result<Cell, CoordError> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err(CoordError::MalformedKey {
            key: s.to_owned(),
            reason: format!("expected 4 components, got {}", parts.len()),
        });
    }
    let mut cell = [0i32; 4];
    for (i, part) in parts.iter().enumerate() {
        cell[i] = part
            .trim()
            .parse::<i32>()
            .map_err(|_| CoordError::MalformedKey {
                key: s.to_owned(),
                reason: format!("component {i} ({part:?}) is not an integer"),
            })?;
    }
    Ok(cell)
}

/// Normalized integer key identifying a point of the lattice.
///
/// Two cells that differ by a multiple of `(1, 1, 1, 1)` produce the same
/// key, which makes `CellKey` the right key type for caller-owned sparse
/// maps. Components are widened to `i64` so normalization cannot overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey([i64; 4]);

impl CellKey {
    /// Build the normalized key of an integer cell.
    pub fn from_cell(cell: Cell) -> Self {
        let wide = cell.map(i64::from);
        let min = wide.iter().copied().min().unwrap_or(0);
        Self(wide.map(|v| v - min))
    }

    /// The normalized components. At least one is zero, none is negative.
    pub fn components(&self) -> [i64; 4] {
        self.0
    }

    /// The point this key names, as a (normalized) quadray.
    pub fn to_quadray(&self) -> Quadray {
        let [a, b, c, d] = self.0;
        Quadray::new(a as f64, b as f64, c as f64, d as f64)
    }
}

impl From<Cell> for CellKey {
    fn from(cell: Cell) -> Self {
        Self::from_cell(cell)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a},{b},{c},{d}")
    }
}

impl FromStr for CellKey {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s).map(Self::from_cell)
    }
}
