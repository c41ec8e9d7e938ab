//! Candidate word extraction.
//!
//! A candidate word is a maximal run of two or more occupied cells in one
//! row or one column. Extraction is a full O(area) rescan; nothing is cached
//! between calls.

use serde::{Deserialize, Serialize};

use super::grid::{Coord, Grid};

/// Direction a run is read in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Left to right along a row.
    #[serde(rename = "h")]
    Horizontal,
    /// Top to bottom along a column.
    #[serde(rename = "v")]
    Vertical,
}

/// A contiguous run of letters found on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateWord {
    pub word: String,
    /// Row of the first letter.
    pub row: usize,
    /// Column of the first letter.
    pub col: usize,
    pub orientation: Orientation,
}

impl CandidateWord {
    /// Coordinate of the first letter.
    #[must_use]
    pub fn anchor(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Always false: runs shorter than two are never emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Every cell the word covers, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.len()).map(move |i| match self.orientation {
            Orientation::Horizontal => Coord::new(self.row, self.col + i),
            Orientation::Vertical => Coord::new(self.row + i, self.col),
        })
    }
}

/// Accumulates one run while scanning a line.
struct Run {
    word: String,
    start: usize,
}

impl Run {
    fn new() -> Self {
        Self {
            word: String::new(),
            start: 0,
        }
    }

    fn push(&mut self, at: usize, letter: char) {
        if self.word.is_empty() {
            self.start = at;
        }
        self.word.push(letter);
    }

    /// Close the run. Yields the word and its start if it is long enough.
    fn close(&mut self) -> Option<(String, usize)> {
        let word = std::mem::take(&mut self.word);
        (word.chars().count() >= 2).then_some((word, self.start))
    }
}

/// Scan the grid for candidate words.
///
/// Order: horizontal runs row by row (top to bottom, left to right), then
/// vertical runs column by column (left to right, top to bottom).
#[must_use]
pub fn extract_words(grid: &Grid) -> Vec<CandidateWord> {
    let size = grid.size();
    let mut words = Vec::new();

    for row in 0..size {
        let mut run = Run::new();
        // One step past the edge closes a run touching the boundary
        for col in 0..=size {
            match grid.get(Coord::new(row, col)) {
                Some(tile) => run.push(col, tile.letter),
                None => {
                    if let Some((word, start)) = run.close() {
                        words.push(CandidateWord {
                            word,
                            row,
                            col: start,
                            orientation: Orientation::Horizontal,
                        });
                    }
                }
            }
        }
    }

    for col in 0..size {
        let mut run = Run::new();
        for row in 0..=size {
            match grid.get(Coord::new(row, col)) {
                Some(tile) => run.push(row, tile.letter),
                None => {
                    if let Some((word, start)) = run.close() {
                        words.push(CandidateWord {
                            word,
                            row: start,
                            col,
                            orientation: Orientation::Vertical,
                        });
                    }
                }
            }
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tile, TileId};

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len());
        let mut id = 0;
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch != '.' {
                    grid.put(Coord::new(r, c), Tile::new(TileId(id), ch)).unwrap();
                    id += 1;
                }
            }
        }
        grid
    }

    fn texts(words: &[CandidateWord]) -> Vec<&str> {
        words.iter().map(|w| w.word.as_str()).collect()
    }

    #[test]
    fn test_empty_grid() {
        assert!(extract_words(&Grid::new(25)).is_empty());
    }

    #[test]
    fn test_single_horizontal_word() {
        let grid = grid_from(&["CAT..", ".....", ".....", ".....", "....."]);
        let words = extract_words(&grid);

        assert_eq!(
            words,
            vec![CandidateWord {
                word: "CAT".to_string(),
                row: 0,
                col: 0,
                orientation: Orientation::Horizontal,
            }]
        );
    }

    #[test]
    fn test_single_letters_ignored() {
        let grid = grid_from(&["A.B", "...", "C.D"]);
        assert!(extract_words(&grid).is_empty());
    }

    #[test]
    fn test_runs_touching_far_edge() {
        let grid = grid_from(&["...", "..D", "OXO"]);
        let words = extract_words(&grid);
        assert_eq!(texts(&words), vec!["OXO", "DO"]);
        assert_eq!(words[1].anchor(), Coord::new(1, 2));
        assert_eq!(words[1].orientation, Orientation::Vertical);
    }

    #[test]
    fn test_order_horizontal_then_vertical() {
        let grid = grid_from(&[
            "CAT..", //
            "A..HI", //
            "B..O.", //
            ".....", //
            "GO...", //
        ]);
        let words = extract_words(&grid);

        assert_eq!(texts(&words), vec!["CAT", "HI", "GO", "CAB", "HO"]);
        assert!(words[..3].iter().all(|w| w.orientation == Orientation::Horizontal));
        assert!(words[3..].iter().all(|w| w.orientation == Orientation::Vertical));
        assert_eq!(words[4].anchor(), Coord::new(1, 3));
    }

    #[test]
    fn test_gap_splits_runs() {
        let grid = grid_from(&["AB.CD", ".....", ".....", ".....", "....."]);
        let words = extract_words(&grid);
        assert_eq!(texts(&words), vec!["AB", "CD"]);
        assert_eq!(words[1].col, 3);
    }

    #[test]
    fn test_cells() {
        let word = CandidateWord {
            word: "DOG".to_string(),
            row: 2,
            col: 5,
            orientation: Orientation::Vertical,
        };
        let cells: Vec<Coord> = word.cells().collect();
        assert_eq!(
            cells,
            vec![Coord::new(2, 5), Coord::new(3, 5), Coord::new(4, 5)]
        );
        assert_eq!(word.len(), 3);
    }
}
