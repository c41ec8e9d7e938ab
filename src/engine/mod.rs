//! Placement state machine and the game engine.
//!
//! ## Key Types
//!
//! - `Engine`: Owns bunch, hand, grid, selection, clock, and lexicon
//! - `Selection` / `Source`: The tagged selection cursor
//! - `PlacementOutcome` / `Rejection`: Results of select/place/return intents
//! - `PeelOutcome` / `DumpOutcome`: Results of bunch exchanges
//! - `GameView` / `AnnotatedWord`: Read-only state for renderers

pub mod selection;
pub mod outcome;
pub mod game;
pub mod view;

pub use selection::{Selection, Source};
pub use outcome::{DumpOutcome, PeelOutcome, PlacementOutcome, Rejection};
pub use game::Engine;
pub use view::{format_elapsed, AnnotatedWord, GameView};
