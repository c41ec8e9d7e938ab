//! Tile pool: materializing a distribution and managing the bunch.
//!
//! ## Key Types
//!
//! - `materialize`: One shuffled tile per unit of a `LetterDistribution`
//! - `starting_split`: Deal the starting hand off the front
//! - `Bunch`: Front-drawn reserve with reshuffle-on-return

pub mod bunch;

pub use bunch::{materialize, starting_split, Bunch, Drawn};
