//! Core engine types: tiles, phase, RNG, configuration.
//!
//! These are the building blocks every other module shares. Callers
//! configure a game via `GameConfig` rather than modifying the engine.

pub mod tile;
pub mod phase;
pub mod rng;
pub mod config;

pub use tile::{Tile, TileId};
pub use phase::Phase;
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, LetterDistribution};
