//! Snapshot storage backends.
//!
//! The engine never touches storage itself. A `Session` drives a store
//! through this trait.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use super::snapshot::{Snapshot, SnapshotError};

/// Somewhere to keep at most one in-progress game.
pub trait SnapshotStore {
    /// Overwrite the stored snapshot.
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError>;

    /// Read the stored snapshot, if any.
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError>;

    /// Forget the stored snapshot. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<(), SnapshotError>;
}

/// In-memory store, for tests and embedders that persist elsewhere.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Option<Snapshot>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Peek at the stored snapshot.
    #[must_use]
    pub fn stored(&self) -> Option<&Snapshot> {
        self.slot.as_ref()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        self.slot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        Ok(self.slot.clone())
    }

    fn clear(&mut self) -> Result<(), SnapshotError> {
        self.slot = None;
        Ok(())
    }
}

/// JSON file store.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store snapshots at `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    #[instrument(skip(self, snapshot), fields(path = %self.path.display()))]
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let json = snapshot.to_json()?;
        // Replace atomically via rename
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!("snapshot saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(Snapshot::from_json(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&mut self) -> Result<(), SnapshotError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::engine::Engine;

    fn sample() -> Snapshot {
        let mut engine = Engine::with_seed(GameConfig::new().with_grid_size(4), 5);
        engine.start();
        engine.snapshot()
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let snapshot = sample();
        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));
        assert_eq!(store.save_count(), 1);

        store.clear().unwrap();
        assert!(store.stored().is_none());
    }

    #[test]
    fn test_file_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("game.json"));

        assert!(store.load().unwrap().is_none());

        let snapshot = sample();
        store.save(&snapshot).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), Some(snapshot));

        store.clear().unwrap();
        assert!(!store.path().exists());
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_corrupt() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("game.json");
        std::fs::write(&path, "{ truncated").unwrap();

        let store = FileStore::new(path);
        assert!(matches!(store.load(), Err(SnapshotError::Json(_))));
    }
}
