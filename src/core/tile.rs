//! Tile identification.
//!
//! Every letter tile in a game has a unique `TileId`. Two tiles showing the
//! same letter are told apart only by their ids.
//!
//! ## Usage
//!
//! ```
//! use rust_peel::core::{Tile, TileId};
//!
//! let a = Tile::new(TileId(0), 'A');
//! let b = Tile::new(TileId(1), 'A');
//!
//! assert_eq!(a.letter, b.letter);
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile within one game.
///
/// Ids are assigned densely from 0 when a distribution is materialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A single letter tile. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    /// Uppercase ASCII letter.
    pub letter: char,
}

impl Tile {
    /// Create a tile. The letter is stored uppercased.
    #[must_use]
    pub fn new(id: TileId, letter: char) -> Self {
        Self {
            id,
            letter: letter.to_ascii_uppercase(),
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.letter, self.id.0)
    }
}
