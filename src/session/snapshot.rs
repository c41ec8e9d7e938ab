//! Persisted game snapshots.
//!
//! A snapshot is the plain record a storage layer writes after each move:
//! pool, hand, grid, phase, and the clock. The RNG position rides along so a
//! seeded game resumes on the same shuffle stream.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{GameConfig, GameRng, GameRngState, Phase, Tile};
use crate::engine::Engine;
use crate::pool::Bunch;

/// Errors reading, writing, or adopting a snapshot.
#[derive(Debug, Display, Error, From)]
pub enum SnapshotError {
    #[display("snapshot I/O failed: {_0}")]
    Io(std::io::Error),

    #[display("snapshot JSON is malformed: {_0}")]
    Json(serde_json::Error),

    #[display("snapshot binary is malformed: {_0}")]
    Binary(bincode::Error),

    /// Grid dimensions don't match the configuration.
    #[from(skip)]
    #[display("snapshot grid is {found}x{found}, expected {expected}x{expected}")]
    GridSize { found: usize, expected: usize },

    /// Containers break tile conservation.
    #[from(skip)]
    #[display("snapshot is inconsistent: {reason}")]
    Inconsistent {
        #[error(not(source))]
        reason: String,
    },
}

/// Serializable record of one game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pool: Vec<Tile>,
    pub hand: Vec<Tile>,
    pub grid: Grid,
    pub phase: Phase,
    pub elapsed_seconds: u64,
    #[serde(default)]
    pub rng: Option<GameRngState>,
}

impl Snapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode compactly with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Engine {
    /// Capture the current game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pool: self.bunch().iter().copied().collect(),
            hand: self.hand().iter().copied().collect(),
            grid: self.grid().clone(),
            phase: self.phase(),
            elapsed_seconds: self.elapsed_seconds(),
            rng: Some(self.rng().state()),
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// The selection starts idle and the lexicon unavailable. Snapshots
    /// without RNG state get a fresh entropy-seeded RNG.
    pub fn restore(config: GameConfig, snapshot: Snapshot) -> Result<Self, SnapshotError> {
        if snapshot.grid.size() != config.grid_size {
            return Err(SnapshotError::GridSize {
                found: snapshot.grid.size(),
                expected: config.grid_size,
            });
        }

        let rng = snapshot
            .rng
            .as_ref()
            .map_or_else(GameRng::from_entropy, GameRng::from_state);

        let engine = Engine::from_parts(
            config,
            rng,
            snapshot.phase,
            snapshot.pool.into_iter().collect::<Bunch>(),
            snapshot.hand.into_iter().collect(),
            snapshot.grid,
            snapshot.elapsed_seconds,
        );
        engine
            .check_invariants()
            .map_err(|reason| SnapshotError::Inconsistent { reason })?;
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;
    use crate::core::{LetterDistribution, TileId};

    fn midgame() -> Engine {
        let mut engine = Engine::with_seed(GameConfig::new().with_grid_size(7), 21);
        engine.start();
        for col in 0..3 {
            let id = engine.hand()[0].id;
            engine.select_from_hand(id);
            engine.place_at(Coord::new(3, col));
        }
        engine.tick();
        engine
    }

    #[test]
    fn test_restore_round_trip() {
        let engine = midgame();
        let restored = Engine::restore(engine.config().clone(), engine.snapshot()).unwrap();

        assert_eq!(restored.snapshot(), engine.snapshot());
        assert_eq!(restored.elapsed_seconds(), 1);
        assert!(restored.selection().is_idle());
    }

    #[test]
    fn test_restored_rng_continues_stream() {
        let mut engine = midgame();
        let mut restored = Engine::restore(engine.config().clone(), engine.snapshot()).unwrap();

        let id = engine.hand()[0].id;
        let a = engine.dump(id).unwrap();
        let b = restored.dump(id).unwrap();

        assert_eq!(a, b);
        assert_eq!(engine.snapshot(), restored.snapshot());
    }

    #[test]
    fn test_json_shape() {
        let snapshot = midgame().snapshot();
        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(json["phase"], "playing");
        assert_eq!(json["elapsed_seconds"], 1);
        assert_eq!(json["grid"].as_array().unwrap().len(), 7);
        assert_eq!(json["hand"].as_array().unwrap().len(), 18);
    }

    #[test]
    fn test_binary_encoding() {
        let snapshot = midgame().snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(Snapshot::from_bytes(&bytes).unwrap(), snapshot);
        assert!(bytes.len() < snapshot.to_json().unwrap().len());
    }

    #[test]
    fn test_restore_wrong_grid_size() {
        let snapshot = midgame().snapshot();
        let err = Engine::restore(GameConfig::new().with_grid_size(9), snapshot).unwrap_err();
        assert!(matches!(err, SnapshotError::GridSize { found: 7, expected: 9 }));
    }

    #[test]
    fn test_restore_duplicate_tile() {
        let mut snapshot = midgame().snapshot();
        let dup = snapshot.hand[0];
        snapshot.pool.push(dup);
        snapshot.hand.pop();

        let err = Engine::restore(GameConfig::new().with_grid_size(7), snapshot).unwrap_err();
        assert!(matches!(err, SnapshotError::Inconsistent { .. }));
    }

    #[test]
    fn test_restore_lowercase_letters() {
        let mut snapshot = midgame().snapshot();
        for tile in snapshot.pool.iter_mut().chain(snapshot.hand.iter_mut()) {
            tile.letter = tile.letter.to_ascii_lowercase();
        }

        let err = Engine::restore(GameConfig::new().with_grid_size(7), snapshot).unwrap_err();
        assert!(matches!(err, SnapshotError::Inconsistent { .. }));
        assert!(err.to_string().contains("has letter"));
    }

    #[test]
    fn test_restore_foreign_letter_mix() {
        // Same ids and count, but every bunch and hand tile shows Z
        let mut snapshot = midgame().snapshot();
        for tile in snapshot.pool.iter_mut().chain(snapshot.hand.iter_mut()) {
            tile.letter = 'Z';
        }

        let err = Engine::restore(GameConfig::new().with_grid_size(7), snapshot).unwrap_err();
        assert!(matches!(err, SnapshotError::Inconsistent { .. }));
        assert!(err.to_string().contains(" A tiles in play, expected 9"));
    }

    #[test]
    fn test_restore_wrong_distribution() {
        let snapshot = midgame().snapshot();
        let config = GameConfig::new()
            .with_grid_size(7)
            .with_distribution(LetterDistribution::bananagrams());

        assert!(Engine::restore(config, snapshot).is_err());
    }

    #[test]
    fn test_restore_missing_tile() {
        let mut snapshot = midgame().snapshot();
        snapshot.pool.retain(|t| t.id != TileId(0));
        snapshot.hand.retain(|t| t.id != TileId(0));
        snapshot.grid = {
            let mut grid = snapshot.grid.clone();
            if let Some(at) = grid.position_of(TileId(0)) {
                grid.take(at);
            }
            grid
        };

        let err = Engine::restore(GameConfig::new().with_grid_size(7), snapshot).unwrap_err();
        assert!(err.to_string().contains("expected 98"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Snapshot::from_json("{not json"),
            Err(SnapshotError::Json(_))
        ));
    }
}
