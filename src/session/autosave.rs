//! An engine wired to a snapshot store.
//!
//! The session mirrors every engine intent and persists after each change
//! while a game is in progress. Starting, resetting, and winning clear the
//! stored game. Storage failures are logged and never interrupt play.

use tracing::{info, warn};

use super::snapshot::{Snapshot, SnapshotError};
use super::store::SnapshotStore;
use crate::board::Coord;
use crate::core::TileId;
use crate::engine::{DumpOutcome, Engine, GameView, PeelOutcome, PlacementOutcome};
use crate::error::EngineError;
use crate::lexicon::Lexicon;

/// Engine plus autosave.
///
/// ```
/// use rust_peel::{Engine, GameConfig, Phase};
/// use rust_peel::session::{MemoryStore, Session};
///
/// let engine = Engine::with_seed(GameConfig::default(), 1);
/// let mut session = Session::open(engine, MemoryStore::new());
/// assert!(session.resumable().is_none());
///
/// session.start();
/// assert_eq!(session.engine().phase(), Phase::Playing);
/// assert!(session.store().stored().is_some());
/// ```
#[derive(Debug)]
pub struct Session<S> {
    engine: Engine,
    store: S,
    resumable: Option<Snapshot>,
}

impl<S: SnapshotStore> Session<S> {
    /// Attach `store`, remembering any in-progress game it holds.
    pub fn open(engine: Engine, store: S) -> Self {
        let resumable = match store.load() {
            Ok(Some(snapshot)) if snapshot.phase.is_playing() => Some(snapshot),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "failed to load saved game");
                None
            }
        };
        if resumable.is_some() {
            info!("saved game available");
        }
        Self {
            engine,
            store,
            resumable,
        }
    }

    /// The stored game offered for resumption, if any.
    #[must_use]
    pub fn resumable(&self) -> Option<&Snapshot> {
        self.resumable.as_ref()
    }

    /// Adopt the stored game. Returns `false` if there was none.
    ///
    /// An unusable snapshot is cleared from the store and reported.
    pub fn resume(&mut self) -> Result<bool, SnapshotError> {
        let Some(snapshot) = self.resumable.take() else {
            return Ok(false);
        };
        let lexicon = self.engine.lexicon().clone();

        match Engine::restore(self.engine.config().clone(), snapshot) {
            Ok(mut engine) => {
                engine.install_lexicon(lexicon);
                self.engine = engine;
                info!(elapsed = self.engine.elapsed_seconds(), "saved game resumed");
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "saved game is unusable, discarding");
                self.clear_store();
                Err(e)
            }
        }
    }

    /// Decline the stored game without touching the store.
    pub fn discard_resumable(&mut self) {
        self.resumable = None;
    }

    /// The wrapped engine, read-only. Mutate through the session intents.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current state for rendering.
    #[must_use]
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// Give back the engine and store.
    pub fn into_parts(self) -> (Engine, S) {
        (self.engine, self.store)
    }

    /// Swap in a lexicon. Never saved.
    pub fn install_lexicon(&mut self, lexicon: Lexicon) {
        self.engine.install_lexicon(lexicon);
    }

    // === Intents ===

    /// Start a fresh game, replacing any stored or offered one.
    pub fn start(&mut self) {
        self.clear_store();
        self.resumable = None;
        self.engine.start();
        self.persist();
    }

    /// Return to the menu and forget the stored game.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.clear_store();
    }

    /// Advance the clock and save.
    pub fn tick(&mut self) {
        self.engine.tick();
        self.persist();
    }

    /// See [`Engine::select_from_hand`]. Selection alone is not saved.
    pub fn select_from_hand(&mut self, id: TileId) -> PlacementOutcome {
        self.engine.select_from_hand(id)
    }

    /// See [`Engine::select_from_grid`].
    pub fn select_from_grid(&mut self, coord: Coord) -> PlacementOutcome {
        self.engine.select_from_grid(coord)
    }

    /// Place the selected tile, saving if it moved.
    pub fn place_at(&mut self, coord: Coord) -> PlacementOutcome {
        let outcome = self.engine.place_at(coord);
        self.persist_after(&outcome)
    }

    /// Return the selected grid tile to the hand, saving if it moved.
    pub fn return_selected_to_hand(&mut self) -> PlacementOutcome {
        let outcome = self.engine.return_selected_to_hand();
        self.persist_after(&outcome)
    }

    /// See [`Engine::tap_cell`]. Saves after a place.
    pub fn tap_cell(&mut self, coord: Coord) -> PlacementOutcome {
        let outcome = self.engine.tap_cell(coord);
        self.persist_after(&outcome)
    }

    /// Alias of `return_selected_to_hand`.
    pub fn tap_hand_area(&mut self) -> PlacementOutcome {
        self.return_selected_to_hand()
    }

    /// Peel. A win clears the stored game; a draw saves.
    pub fn peel(&mut self) -> Result<PeelOutcome, EngineError> {
        let outcome = self.engine.peel()?;
        match outcome {
            PeelOutcome::GameComplete => self.clear_store(),
            PeelOutcome::Drew(_) => self.persist(),
        }
        Ok(outcome)
    }

    /// Dump tile `id` and save.
    pub fn dump(&mut self, id: TileId) -> Result<DumpOutcome, EngineError> {
        let outcome = self.engine.dump(id)?;
        self.persist();
        Ok(outcome)
    }

    /// Dump the newest hand tile and save.
    pub fn dump_last(&mut self) -> Result<DumpOutcome, EngineError> {
        let outcome = self.engine.dump_last()?;
        self.persist();
        Ok(outcome)
    }

    // === Storage ===

    fn persist_after(&mut self, outcome: &PlacementOutcome) -> PlacementOutcome {
        if matches!(
            outcome,
            PlacementOutcome::Placed { .. } | PlacementOutcome::Returned { .. }
        ) {
            self.persist();
        }
        outcome.clone()
    }

    fn persist(&mut self) {
        if !self.engine.phase().is_playing() {
            return;
        }
        if let Err(e) = self.store.save(&self.engine.snapshot()) {
            warn!(error = %e, "failed to save game");
        }
    }

    fn clear_store(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear saved game");
        }
    }
}
