//! # rust-peel
//!
//! Game-state engine for a single-player tile-placement word game.
//!
//! ## Design Principles
//!
//! 1. **Explicit Instances**: No globals. Every game is an `Engine` value
//!    with its own injected `GameRng`, so games are independent and
//!    deterministic under a seed.
//!
//! 2. **Unrepresentable Bad States**: The selection cursor is a tagged enum,
//!    and the lexicon is `Unavailable` until a word list is installed.
//!
//! 3. **Configuration Over Convention**: Grid size, hand size, dump rate,
//!    and letter distribution come from `GameConfig`.
//!
//! ## Data Flow
//!
//! intent -> `Engine` mutates bunch/hand/grid -> `extract_words` rescans the
//! grid -> `Lexicon` annotates each word -> caller reads a `GameView`.
//!
//! ## Modules
//!
//! - `core`: Tiles, phase, RNG, configuration
//! - `pool`: Materializing distributions and the bunch
//! - `board`: The grid and candidate word extraction
//! - `lexicon`: Word lists and the two-phase lexicon capability
//! - `engine`: Placement state machine, peel/dump, views
//! - `session`: Snapshots, stores, and autosave

pub mod core;
pub mod error;
pub mod pool;
pub mod board;
pub mod lexicon;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, LetterDistribution, Phase, Tile, TileId};

pub use crate::error::EngineError;

pub use crate::pool::{materialize, starting_split, Bunch};

pub use crate::board::{extract_words, CandidateWord, Coord, Grid, Orientation};

pub use crate::lexicon::{Lexicon, PendingLexicon, Validity, WordList};

pub use crate::engine::{
    AnnotatedWord, DumpOutcome, Engine, GameView, PeelOutcome, PlacementOutcome, Rejection,
    Selection, Source,
};

pub use crate::session::{FileStore, MemoryStore, Session, Snapshot, SnapshotError, SnapshotStore};
