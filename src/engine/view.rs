//! Read-only view of the engine for presentation layers.

use im::Vector;
use serde::Serialize;

use super::game::Engine;
use super::selection::Selection;
use crate::board::{CandidateWord, Grid};
use crate::core::{Phase, Tile};
use crate::lexicon::Validity;

/// A candidate word with its lexicon classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnnotatedWord {
    #[serde(flatten)]
    pub word: CandidateWord,
    pub validity: Validity,
}

/// Everything a renderer needs after a mutation.
#[derive(Clone, Debug, Serialize)]
pub struct GameView {
    pub phase: Phase,
    pub hand: Vector<Tile>,
    pub grid: Grid,
    pub pool_size: usize,
    pub elapsed_seconds: u64,
    pub selection: Selection,
    pub words: Vec<AnnotatedWord>,
    /// False while the lexicon is unavailable; every word is then `Unknown`.
    pub lexicon_ready: bool,
}

impl GameView {
    /// Words the lexicon accepted.
    pub fn valid_words(&self) -> impl Iterator<Item = &AnnotatedWord> {
        self.words.iter().filter(|w| w.validity == Validity::Valid)
    }

    /// Words the lexicon rejected.
    pub fn invalid_words(&self) -> impl Iterator<Item = &AnnotatedWord> {
        self.words.iter().filter(|w| w.validity == Validity::Invalid)
    }

    /// Elapsed time as `m:ss`.
    #[must_use]
    pub fn clock(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

impl Engine {
    /// Candidate words annotated by the installed lexicon.
    #[must_use]
    pub fn annotated_words(&self) -> Vec<AnnotatedWord> {
        self.words()
            .into_iter()
            .map(|word| {
                let validity = self.lexicon().validity(&word.word);
                AnnotatedWord { word, validity }
            })
            .collect()
    }

    /// Snapshot of the current state for rendering.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            phase: self.phase(),
            hand: self.hand().clone(),
            grid: self.grid().clone(),
            pool_size: self.pool_size(),
            elapsed_seconds: self.elapsed_seconds(),
            selection: *self.selection(),
            words: self.annotated_words(),
            lexicon_ready: self.lexicon().is_ready(),
        }
    }
}

/// Format seconds as minutes and zero-padded seconds.
///
/// ```
/// assert_eq!(rust_peel::engine::format_elapsed(125), "2:05");
/// ```
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
