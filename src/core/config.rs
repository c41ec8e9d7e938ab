//! Game configuration types.
//!
//! Callers configure the engine at construction by providing:
//! - `LetterDistribution`: How many tiles of each letter exist
//! - `GameConfig`: Grid size, starting hand size, dump exchange rate
//!
//! The engine never hardcodes these - the defaults reproduce the classic game.

use serde::{Deserialize, Serialize};

/// Standard 98-tile distribution, A through Z.
const STANDARD_COUNTS: [u8; 26] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, // A-M
    6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1, // N-Z
];

/// 144-tile distribution of the banana-bag game.
const BANANAGRAMS_COUNTS: [u8; 26] = [
    13, 3, 3, 6, 18, 3, 4, 3, 12, 2, 2, 5, 3, // A-M
    8, 11, 3, 2, 9, 6, 9, 6, 3, 3, 2, 3, 2, // N-Z
];

/// Mapping from letter to tile count, one entry per letter A-Z.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterDistribution {
    counts: [u8; 26],
}

impl LetterDistribution {
    /// Create a distribution from counts indexed A=0 .. Z=25.
    ///
    /// Panics if every count is zero.
    #[must_use]
    pub fn from_counts(counts: [u8; 26]) -> Self {
        assert!(
            counts.iter().any(|&c| c > 0),
            "Distribution must contain at least one tile"
        );
        Self { counts }
    }

    /// The standard 98-tile set.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_counts(STANDARD_COUNTS)
    }

    /// The 144-tile banana-bag set.
    #[must_use]
    pub fn bananagrams() -> Self {
        Self::from_counts(BANANAGRAMS_COUNTS)
    }

    /// Number of tiles showing `letter` (case-insensitive). Non-letters have 0.
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            self.counts[(upper as u8 - b'A') as usize] as usize
        } else {
            0
        }
    }

    /// Total number of tiles in one game.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Iterate `(letter, count)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| ((b'A' + i as u8) as char, c as usize))
    }
}

impl Default for LetterDistribution {
    fn default() -> Self {
        Self::standard()
    }
}

/// Complete game configuration.
///
/// ```
/// use rust_peel::core::{GameConfig, LetterDistribution};
///
/// let config = GameConfig::new()
///     .with_grid_size(15)
///     .with_starting_hand_size(11)
///     .with_distribution(LetterDistribution::bananagrams());
///
/// assert_eq!(config.grid_size, 15);
/// assert_eq!(config.distribution.total(), 144);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_size: usize,

    /// Tiles dealt into the hand when a game starts.
    pub starting_hand_size: usize,

    /// Tiles drawn in exchange for one dumped tile.
    pub dump_draw_count: usize,

    /// Full tile population for one game.
    pub distribution: LetterDistribution,
}

impl GameConfig {
    /// Default grid side length.
    pub const DEFAULT_GRID_SIZE: usize = 25;
    /// Default starting hand size.
    pub const DEFAULT_STARTING_HAND: usize = 21;
    /// Default dump exchange rate.
    pub const DEFAULT_DUMP_DRAW: usize = 3;

    /// Create a configuration with the classic defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            starting_hand_size: Self::DEFAULT_STARTING_HAND,
            dump_draw_count: Self::DEFAULT_DUMP_DRAW,
            distribution: LetterDistribution::standard(),
        }
    }

    /// Set the grid side length.
    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Grid size must be at least 1");
        self.grid_size = size;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set how many tiles a dump draws.
    #[must_use]
    pub fn with_dump_draw_count(mut self, count: usize) -> Self {
        assert!(count > 0, "Dump must draw at least 1 tile");
        self.dump_draw_count = count;
        self
    }

    /// Set the letter distribution.
    #[must_use]
    pub fn with_distribution(mut self, distribution: LetterDistribution) -> Self {
        self.distribution = distribution;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
