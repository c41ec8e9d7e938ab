//! The game engine: sole owner of bunch, hand, grid, and selection.
//!
//! Every intent is a synchronous `&mut self` call that either applies fully
//! or leaves the state as it was. After each mutation the tile conservation
//! invariant is asserted in debug builds.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::outcome::{DumpOutcome, PeelOutcome, PlacementOutcome, Rejection};
use super::selection::{Selection, Source};
use crate::board::{extract_words, CandidateWord, Coord, Grid};
use crate::core::{GameConfig, GameRng, Phase, Tile, TileId};
use crate::error::EngineError;
use crate::lexicon::Lexicon;
use crate::pool::{materialize, starting_split, Bunch};

/// Single-player game instance.
///
/// ## Usage
///
/// ```
/// use rust_peel::{Engine, GameConfig, Phase};
///
/// let mut engine = Engine::with_seed(GameConfig::default(), 7);
/// engine.start();
///
/// assert_eq!(engine.phase(), Phase::Playing);
/// assert_eq!(engine.hand().len(), 21);
/// assert_eq!(engine.pool_size(), 98 - 21);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    config: GameConfig,
    rng: GameRng,
    phase: Phase,
    bunch: Bunch,
    hand: Vector<Tile>,
    grid: Grid,
    selection: Selection,
    elapsed_seconds: u64,
    lexicon: Lexicon,
}

impl Engine {
    /// Create an engine in the `Menu` phase.
    #[must_use]
    pub fn new(config: GameConfig, rng: GameRng) -> Self {
        let grid = Grid::new(config.grid_size);
        Self {
            config,
            rng,
            phase: Phase::Menu,
            bunch: Bunch::new(),
            hand: Vector::new(),
            grid,
            selection: Selection::Idle,
            elapsed_seconds: 0,
            lexicon: Lexicon::Unavailable,
        }
    }

    /// Create an engine with a seeded RNG.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }

    /// Rebuild an engine from stored containers. Callers must check invariants.
    pub(crate) fn from_parts(
        config: GameConfig,
        rng: GameRng,
        phase: Phase,
        bunch: Bunch,
        hand: Vector<Tile>,
        grid: Grid,
        elapsed_seconds: u64,
    ) -> Self {
        Self {
            config,
            rng,
            phase,
            bunch,
            hand,
            grid,
            selection: Selection::Idle,
            elapsed_seconds,
            lexicon: Lexicon::Unavailable,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Tiles in hand, oldest first.
    #[must_use]
    pub fn hand(&self) -> &Vector<Tile> {
        &self.hand
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn bunch(&self) -> &Bunch {
        &self.bunch
    }

    /// Tiles left to draw.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.bunch.len()
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Swap in a lexicon. Takes effect for the next word annotation.
    pub fn install_lexicon(&mut self, lexicon: Lexicon) {
        info!(ready = lexicon.is_ready(), "lexicon installed");
        self.lexicon = lexicon;
    }

    /// Candidate words on the current grid.
    #[must_use]
    pub fn words(&self) -> Vec<CandidateWord> {
        extract_words(&self.grid)
    }

    // === Phase transitions ===

    /// Begin a fresh game: new shuffled tiles, starting hand, empty grid.
    pub fn start(&mut self) {
        let tiles = materialize(&self.config.distribution, &mut self.rng);
        let (hand, bunch) = starting_split(tiles, self.config.starting_hand_size);

        self.hand = hand;
        self.bunch = bunch;
        self.grid = Grid::new(self.config.grid_size);
        self.selection = Selection::Idle;
        self.elapsed_seconds = 0;
        self.phase = Phase::Playing;

        info!(
            hand = self.hand.len(),
            bunch = self.bunch.len(),
            seed = self.rng.seed(),
            "game started"
        );
        self.assert_invariants();
    }

    /// Abandon the game and return to the menu. All tiles are discarded.
    pub fn reset(&mut self) {
        self.hand = Vector::new();
        self.bunch = Bunch::new();
        self.grid = Grid::new(self.config.grid_size);
        self.selection = Selection::Idle;
        self.elapsed_seconds = 0;
        self.phase = Phase::Menu;

        info!("game reset");
        self.assert_invariants();
    }

    /// Advance the game clock by one second while playing.
    pub fn tick(&mut self) {
        if self.phase.is_playing() {
            self.elapsed_seconds += 1;
        }
    }

    // === Placement ===

    /// Select tile `id` from the hand, or deselect it if already selected.
    pub fn select_from_hand(&mut self, id: TileId) -> PlacementOutcome {
        if !self.phase.is_playing() {
            return PlacementOutcome::Rejected(Rejection::NotPlaying);
        }
        let Some(tile) = self.hand.iter().find(|t| t.id == id).copied() else {
            return PlacementOutcome::Rejected(Rejection::TileNotInHand);
        };
        self.toggle(tile, Source::Hand)
    }

    /// Select the tile at `coord`, or deselect it if already selected.
    pub fn select_from_grid(&mut self, coord: Coord) -> PlacementOutcome {
        if !self.phase.is_playing() {
            return PlacementOutcome::Rejected(Rejection::NotPlaying);
        }
        if !self.grid.contains(coord) {
            return PlacementOutcome::Rejected(Rejection::OutOfBounds(coord));
        }
        let Some(tile) = self.grid.get(coord).copied() else {
            return PlacementOutcome::Rejected(Rejection::EmptyCell(coord));
        };
        self.toggle(tile, Source::Grid(coord))
    }

    fn toggle(&mut self, tile: Tile, source: Source) -> PlacementOutcome {
        if self.selection.is_selected(tile.id) {
            debug!(tile = %tile, "deselected");
            self.selection = Selection::Idle;
            PlacementOutcome::Deselected
        } else {
            debug!(tile = %tile, ?source, "selected");
            self.selection = Selection::Selected { tile, source };
            PlacementOutcome::Selected { tile, source }
        }
    }

    /// Move the selected tile into the empty cell at `coord`.
    ///
    /// Occupied targets are refused, never swapped.
    pub fn place_at(&mut self, coord: Coord) -> PlacementOutcome {
        if !self.phase.is_playing() {
            return PlacementOutcome::Rejected(Rejection::NotPlaying);
        }
        let Selection::Selected { tile, source } = self.selection else {
            return PlacementOutcome::Rejected(Rejection::NothingSelected);
        };
        if !self.grid.contains(coord) {
            return PlacementOutcome::Rejected(Rejection::OutOfBounds(coord));
        }
        if !self.grid.is_vacant(coord) {
            return PlacementOutcome::Rejected(Rejection::CellOccupied(coord));
        }

        match source {
            Source::Hand => self.remove_from_hand(tile.id),
            Source::Grid(from) => self.grid.take(from),
        };
        // Target was checked vacant above
        let _ = self.grid.put(coord, tile);
        self.selection = Selection::Idle;

        debug!(tile = %tile, %coord, "placed");
        self.assert_invariants();
        PlacementOutcome::Placed {
            tile,
            from: source,
            at: coord,
        }
    }

    /// Move the selected grid tile back into the hand.
    pub fn return_selected_to_hand(&mut self) -> PlacementOutcome {
        if !self.phase.is_playing() {
            return PlacementOutcome::Rejected(Rejection::NotPlaying);
        }
        let from = match self.selection {
            Selection::Idle => return PlacementOutcome::Rejected(Rejection::NothingSelected),
            Selection::Selected {
                source: Source::Hand,
                ..
            } => return PlacementOutcome::Rejected(Rejection::AlreadyInHand),
            Selection::Selected {
                source: Source::Grid(from),
                ..
            } => from,
        };

        let Some(tile) = self.grid.take(from) else {
            unreachable!("selection points at empty cell {}", from);
        };
        self.hand.push_back(tile);
        self.selection = Selection::Idle;

        debug!(tile = %tile, %from, "returned to hand");
        self.assert_invariants();
        PlacementOutcome::Returned { tile, from }
    }

    /// Tap on a grid cell: select, place, or deselect depending on state.
    pub fn tap_cell(&mut self, coord: Coord) -> PlacementOutcome {
        match (self.selection, self.grid.get(coord).copied()) {
            (Selection::Idle, Some(_)) => self.select_from_grid(coord),
            (Selection::Idle, None) if self.phase.is_playing() => {
                PlacementOutcome::Rejected(Rejection::NothingSelected)
            }
            (Selection::Selected { tile, .. }, Some(occupant)) if occupant.id == tile.id => {
                self.select_from_grid(coord)
            }
            _ => self.place_at(coord),
        }
    }

    /// Tap on the hand area: return a selected grid tile.
    pub fn tap_hand_area(&mut self) -> PlacementOutcome {
        self.return_selected_to_hand()
    }

    // === Bunch exchanges ===

    /// Draw one tile once the hand is empty. An empty bunch wins the game.
    pub fn peel(&mut self) -> Result<PeelOutcome, EngineError> {
        self.require_playing()?;
        if !self.hand.is_empty() {
            return Err(EngineError::HandNotEmpty);
        }

        if self.bunch.is_empty() {
            self.phase = Phase::Won;
            info!(elapsed = self.elapsed_seconds, "bunch exhausted, game won");
            return Ok(PeelOutcome::GameComplete);
        }

        let tile = self.bunch.draw()?;
        self.hand.push_back(tile);

        debug!(tile = %tile, left = self.bunch.len(), "peeled");
        self.assert_invariants();
        Ok(PeelOutcome::Drew(tile))
    }

    /// Trade hand tile `id` for `dump_draw_count` tiles from the bunch.
    pub fn dump(&mut self, id: TileId) -> Result<DumpOutcome, EngineError> {
        self.require_playing()?;
        if self.hand.is_empty() {
            return Err(EngineError::EmptyHand);
        }
        let required = self.config.dump_draw_count;
        if self.bunch.len() < required {
            return Err(EngineError::InsufficientPool {
                available: self.bunch.len(),
                required,
            });
        }
        let returned = self
            .remove_from_hand(id)
            .ok_or(EngineError::TileNotInHand { id })?;

        // Draw before returning so the dumped tile can't come straight back
        let drawn = self.bunch.draw_many(required)?;
        self.hand.extend(drawn.iter().copied());
        self.bunch.return_and_reshuffle(returned, &mut self.rng);

        if self.selection.is_selected(id) {
            self.selection = Selection::Idle;
        }

        debug!(returned = %returned, left = self.bunch.len(), "dumped");
        self.assert_invariants();
        Ok(DumpOutcome { returned, drawn })
    }

    /// Dump the most recently received hand tile.
    pub fn dump_last(&mut self) -> Result<DumpOutcome, EngineError> {
        self.require_playing()?;
        let id = self.hand.last().map(|t| t.id).ok_or(EngineError::EmptyHand)?;
        self.dump(id)
    }

    fn require_playing(&self) -> Result<(), EngineError> {
        if self.phase.is_playing() {
            Ok(())
        } else {
            Err(EngineError::NotPlaying { phase: self.phase })
        }
    }

    fn remove_from_hand(&mut self, id: TileId) -> Option<Tile> {
        let index = self.hand.iter().position(|t| t.id == id)?;
        Some(self.hand.remove(index))
    }

    // === Invariants ===

    /// Verify tile conservation and selection consistency.
    ///
    /// Outside the menu, bunch + hand + grid must hold exactly the
    /// distribution's tiles: no id in two places, every letter uppercase,
    /// and each letter as often as the distribution counts it. In the menu
    /// all three are empty.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = FxHashSet::default();
        let mut letters = [0usize; 26];
        let all = self
            .bunch
            .iter()
            .chain(self.hand.iter())
            .chain(self.grid.tiles().map(|(_, t)| t));

        for tile in all {
            if !seen.insert(tile.id) {
                return Err(format!("{} appears in more than one place", tile.id));
            }
            if !tile.letter.is_ascii_uppercase() {
                return Err(format!("{} has letter {:?}", tile.id, tile.letter));
            }
            letters[(tile.letter as u8 - b'A') as usize] += 1;
        }

        let expected = match self.phase {
            Phase::Menu => 0,
            Phase::Playing | Phase::Won => self.config.distribution.total(),
        };
        if seen.len() != expected {
            return Err(format!(
                "{} tiles in play, expected {} (bunch {}, hand {}, grid {})",
                seen.len(),
                expected,
                self.bunch.len(),
                self.hand.len(),
                self.grid.occupied_count()
            ));
        }

        if self.phase != Phase::Menu {
            for (letter, count) in self.config.distribution.iter() {
                let found = letters[(letter as u8 - b'A') as usize];
                if found != count {
                    return Err(format!("{} {} tiles in play, expected {}", found, letter, count));
                }
            }
        }

        if let Selection::Selected { tile, source } = self.selection {
            let present = match source {
                Source::Hand => self.hand.contains(&tile),
                Source::Grid(coord) => self.grid.get(coord) == Some(&tile),
            };
            if !present {
                return Err(format!("selection {} is not at {:?}", tile, source));
            }
        }

        Ok(())
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violation) = self.check_invariants() {
                panic!("engine invariant violated: {}", violation);
            }
        }
    }
}
