//! The play grid and word extraction.
//!
//! ## Key Types
//!
//! - `Coord`: Row/column cell address
//! - `Grid`: Fixed-size square matrix of optional tiles
//! - `CandidateWord`: A run of two or more letters, with anchor and orientation
//! - `extract_words`: Full rescan of the grid for candidate words

pub mod grid;
pub mod words;

pub use grid::{Coord, Grid};
pub use words::{extract_words, CandidateWord, Orientation};
