//! Results of player intents.
//!
//! Placement intents never fail: a refused intent is a `Rejected` value that
//! leaves the state untouched. `peel` and `dump` report failure through
//! `EngineError` instead.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::selection::Source;
use crate::board::Coord;
use crate::core::Tile;
use crate::pool::Drawn;

/// Why a placement intent changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Rejection {
    #[display("no game in progress")]
    NotPlaying,
    #[display("no tile selected")]
    NothingSelected,
    #[display("that tile is not in your hand")]
    TileNotInHand,
    #[display("cell {_0} is empty")]
    EmptyCell(Coord),
    #[display("cell {_0} is occupied")]
    CellOccupied(Coord),
    #[display("cell {_0} is off the grid")]
    OutOfBounds(Coord),
    #[display("the selected tile is already in your hand")]
    AlreadyInHand,
}

/// What a placement intent did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// The cursor now points at `tile`.
    Selected { tile: Tile, source: Source },
    /// The same tile was selected again; the cursor is idle.
    Deselected,
    /// `tile` moved from `from` onto the grid at `at`.
    Placed { tile: Tile, from: Source, at: Coord },
    /// `tile` left the grid cell `from` for the hand.
    Returned { tile: Tile, from: Coord },
    /// Nothing changed.
    Rejected(Rejection),
}

impl PlacementOutcome {
    /// Whether the intent was refused.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, PlacementOutcome::Rejected(_))
    }
}

/// Result of a successful peel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeelOutcome {
    /// One tile moved from the bunch to the hand.
    Drew(Tile),
    /// The bunch was already empty: the game is won.
    GameComplete,
}

impl std::fmt::Display for PeelOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeelOutcome::Drew(tile) => write!(f, "PEEL! Drew: {}", tile.letter),
            PeelOutcome::GameComplete => f.write_str("BANANAS! You used every tile."),
        }
    }
}

/// Result of a successful dump.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpOutcome {
    /// The tile given back to the bunch.
    pub returned: Tile,
    /// Replacements now in the hand.
    pub drawn: Drawn,
}

impl std::fmt::Display for DumpOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dumped {}, drew {} tiles", self.returned.letter, self.drawn.len())
    }
}
