//! Engine error types.
//!
//! Every failure here is recoverable: the caller shows the message as a
//! transient notice and the game carries on.

use derive_more::{Display, Error};

use crate::core::{Phase, TileId};

/// A rejected `peel`, `dump`, or bunch draw.
///
/// The `Display` text is phrased for the player.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The bunch has no tiles left to draw.
    #[display("The bunch is empty!")]
    EmptyPool,

    /// Peel requires every hand tile to be on the grid first.
    #[display("Use all your tiles before peeling!")]
    HandNotEmpty,

    /// Dump needs a tile to give back.
    #[display("No tiles in hand to dump!")]
    EmptyHand,

    /// Not enough tiles left in the bunch to cover the exchange.
    #[display("Not enough tiles in bunch to dump! ({available} left, need {required})")]
    InsufficientPool { available: usize, required: usize },

    /// The named tile is not in the hand.
    #[display("{id} is not in your hand")]
    TileNotInHand { id: TileId },

    /// The intent needs a game in progress.
    #[display("No game in progress (phase: {phase})")]
    NotPlaying { phase: Phase },
}
