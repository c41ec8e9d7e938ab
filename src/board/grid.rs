//! Fixed-size square grid of optional tiles.

use serde::{Deserialize, Serialize};

use crate::core::{Tile, TileId};

/// A grid cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square matrix of cells, each empty or holding one tile.
///
/// Size is fixed for the lifetime of the grid. Serialized as nested rows so
/// stored snapshots read naturally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Option<Tile>>>", into = "Vec<Vec<Option<Tile>>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty `size` x `size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `coord` lies on the grid.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Tile at `coord`, or `None` if empty or off the grid.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        self.index(coord).and_then(|i| self.cells[i].as_ref())
    }

    /// Whether `coord` is on the grid and empty.
    #[must_use]
    pub fn is_vacant(&self, coord: Coord) -> bool {
        self.index(coord).is_some_and(|i| self.cells[i].is_none())
    }

    /// Put `tile` into an empty cell.
    ///
    /// Returns the tile back if the cell is occupied or off the grid.
    pub fn put(&mut self, coord: Coord, tile: Tile) -> Result<(), Tile> {
        match self.index(coord) {
            Some(i) if self.cells[i].is_none() => {
                self.cells[i] = Some(tile);
                Ok(())
            }
            _ => Err(tile),
        }
    }

    /// Empty the cell at `coord`, returning what was there.
    pub fn take(&mut self, coord: Coord) -> Option<Tile> {
        let i = self.index(coord)?;
        self.cells[i].take()
    }

    /// Find the cell holding tile `id`.
    #[must_use]
    pub fn position_of(&self, id: TileId) -> Option<Coord> {
        self.cells
            .iter()
            .position(|cell| cell.is_some_and(|t| t.id == id))
            .map(|i| Coord::new(i / self.size, i % self.size))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterate occupied cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, &Tile)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|t| (Coord::new(i / self.size, i % self.size), t))
        })
    }

    /// One row of cells, left to right, or `None` if off the grid.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Option<Tile>]> {
        (row < self.size).then(|| &self.cells[row * self.size..(row + 1) * self.size])
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.size + coord.col)
    }
}

impl From<Grid> for Vec<Vec<Option<Tile>>> {
    fn from(grid: Grid) -> Self {
        grid.cells.chunks(grid.size.max(1)).map(<[_]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Option<Tile>>>> for Grid {
    type Error = String;

    fn try_from(rows: Vec<Vec<Option<Tile>>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        if let Some(bad) = rows.iter().position(|r| r.len() != size) {
            return Err(format!(
                "grid row {} has {} cells, expected {}",
                bad,
                rows[bad].len(),
                size
            ));
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}
