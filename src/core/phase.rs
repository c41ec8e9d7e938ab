//! Game phase.

use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle.
///
/// Transitions only through engine operations:
/// `start` (any -> `Playing`), `peel` on an empty bunch (`Playing` -> `Won`),
/// and `reset` (any -> `Menu`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No game in progress.
    #[default]
    Menu,
    /// Tiles are being drawn and placed.
    Playing,
    /// The bunch ran dry on a peel with an empty hand.
    Won,
}

impl Phase {
    /// Whether intents that mutate tiles are accepted.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Phase::Playing)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Menu => "menu",
            Phase::Playing => "playing",
            Phase::Won => "won",
        };
        f.write_str(name)
    }
}
