//! The single selection cursor.

use serde::{Deserialize, Serialize};

use crate::board::Coord;
use crate::core::{Tile, TileId};

/// Where a selected tile currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Hand,
    Grid(Coord),
}

/// At most one tile is selected at a time.
///
/// A `Selected` cursor always names a tile that is present at `source`; the
/// engine clears or moves the cursor whenever that tile moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Idle,
    Selected { tile: Tile, source: Source },
}

impl Selection {
    /// The selected tile, if any.
    #[must_use]
    pub fn tile(&self) -> Option<&Tile> {
        match self {
            Selection::Idle => None,
            Selection::Selected { tile, .. } => Some(tile),
        }
    }

    /// Whether tile `id` is the one selected.
    #[must_use]
    pub fn is_selected(&self, id: TileId) -> bool {
        self.tile().is_some_and(|t| t.id == id)
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle() {
        let sel = Selection::default();
        assert!(sel.is_idle());
        assert!(sel.tile().is_none());
        assert!(!sel.is_selected(TileId(0)));
    }

    #[test]
    fn test_selected() {
        let tile = Tile::new(TileId(4), 'R');
        let sel = Selection::Selected {
            tile,
            source: Source::Grid(Coord::new(1, 1)),
        };
        assert!(!sel.is_idle());
        assert!(sel.is_selected(TileId(4)));
        assert!(!sel.is_selected(TileId(5)));
    }
}
