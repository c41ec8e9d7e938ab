//! The bunch: shuffled, ordered reserve of undrawn tiles.
//!
//! Draws always come from the front. Returned tiles trigger a full reshuffle
//! so their position cannot be predicted.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, LetterDistribution, Tile, TileId};
use crate::error::EngineError;

/// Tiles drawn by one exchange. Three inline covers the default dump.
pub type Drawn = SmallVec<[Tile; 3]>;

/// Expand a distribution into one tile per unit count, shuffled.
///
/// Ids are assigned `0..total` in alphabetical letter order before the
/// shuffle, so they are unique and dense.
pub fn materialize(distribution: &LetterDistribution, rng: &mut GameRng) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(distribution.total());
    let mut next_id = 0u32;

    for (letter, count) in distribution.iter() {
        for _ in 0..count {
            tiles.push(Tile::new(TileId(next_id), letter));
            next_id += 1;
        }
    }

    rng.shuffle(&mut tiles);
    tiles
}

/// Deal the first `hand_size` tiles as the starting hand.
///
/// The rest become the bunch, order preserved. Asking for more tiles than
/// exist deals everything.
pub fn starting_split(tiles: Vec<Tile>, hand_size: usize) -> (Vector<Tile>, Bunch) {
    let mut hand: Vector<Tile> = tiles.into_iter().collect();
    let rest = if hand_size < hand.len() {
        hand.split_off(hand_size)
    } else {
        Vector::new()
    };
    (hand, Bunch { tiles: rest })
}

/// Ordered reserve of undrawn tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bunch {
    tiles: Vector<Tile>,
}

impl Bunch {
    /// Create an empty bunch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the bunch is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in draw order (front first).
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Remove and return the front tile.
    pub fn draw(&mut self) -> Result<Tile, EngineError> {
        self.tiles.pop_front().ok_or(EngineError::EmptyPool)
    }

    /// Draw `count` tiles from the front, all or nothing.
    pub fn draw_many(&mut self, count: usize) -> Result<Drawn, EngineError> {
        if self.tiles.len() < count {
            return Err(EngineError::InsufficientPool {
                available: self.tiles.len(),
                required: count,
            });
        }
        let rest = self.tiles.split_off(count);
        let drawn = std::mem::replace(&mut self.tiles, rest);
        Ok(drawn.into_iter().collect())
    }

    /// Put a tile back and reshuffle the whole bunch.
    pub fn return_and_reshuffle(&mut self, tile: Tile, rng: &mut GameRng) {
        let mut tiles: Vec<Tile> = self.tiles.iter().copied().collect();
        tiles.push(tile);
        rng.shuffle(&mut tiles);
        self.tiles = tiles.into_iter().collect();
    }
}

impl FromIterator<Tile> for Bunch {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
