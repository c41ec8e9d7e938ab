//! Snapshot persistence around the engine.
//!
//! ## Key Types
//!
//! - `Snapshot`: `{ pool, hand, grid, phase, elapsed_seconds }` plus RNG state
//! - `SnapshotStore`: Save/load/clear backend (`MemoryStore`, JSON `FileStore`)
//! - `Session`: Engine wrapper that autosaves while a game is in progress

pub mod snapshot;
pub mod store;
pub mod autosave;

pub use snapshot::{Snapshot, SnapshotError};
pub use store::{FileStore, MemoryStore, SnapshotStore};
pub use autosave::Session;
