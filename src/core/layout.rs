//! Level layout - structural description of a board
//!
//! A layout gives, per cell, whether it is playable, plus the level's
//! target score and move allowance. Layouts arrive with source row 0 at
//! the top (the authoring order of the level files); the level flips
//! them so that internal row 0 is the bottom of the board.

use std::error::Error;
use std::fmt;

use crate::types::{NUM_COLUMNS, NUM_ROWS};

/// Parsed level description, still in source (top-first) row order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLayout {
    /// `NUM_ROWS` rows of `NUM_COLUMNS` 0/1 flags, row 0 topmost
    pub tiles: Vec<Vec<u8>>,
    pub target_score: u32,
    pub moves: u32,
}

/// Malformed or dimension-mismatched level description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelLoadError {
    /// Wrong number of rows
    RowCount { found: usize },
    /// A row with the wrong number of columns
    RowWidth { row: usize, found: usize },
    /// A tile flag other than 0 or 1
    BadFlag { column: usize, row: usize, value: u8 },
}

impl fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LevelLoadError::RowCount { found } => {
                write!(f, "expected {} tile rows, found {}", NUM_ROWS, found)
            }
            LevelLoadError::RowWidth { row, found } => {
                write!(
                    f,
                    "expected {} columns in tile row {}, found {}",
                    NUM_COLUMNS, row, found
                )
            }
            LevelLoadError::BadFlag { column, row, value } => {
                write!(
                    f,
                    "tile flag at ({}, {}) must be 0 or 1, found {}",
                    column, row, value
                )
            }
        }
    }
}

impl Error for LevelLoadError {}

impl LevelLayout {
    /// Check dimensions and flag values against the fixed board size
    pub fn validate(&self) -> Result<(), LevelLoadError> {
        if self.tiles.len() != NUM_ROWS {
            return Err(LevelLoadError::RowCount {
                found: self.tiles.len(),
            });
        }
        for (row, flags) in self.tiles.iter().enumerate() {
            if flags.len() != NUM_COLUMNS {
                return Err(LevelLoadError::RowWidth {
                    row,
                    found: flags.len(),
                });
            }
            for (column, &value) in flags.iter().enumerate() {
                if value > 1 {
                    return Err(LevelLoadError::BadFlag { column, row, value });
                }
            }
        }
        Ok(())
    }

    /// Layout with every cell playable (for tests and benches)
    pub fn fully_playable(target_score: u32, moves: u32) -> Self {
        Self {
            tiles: vec![vec![1; NUM_COLUMNS]; NUM_ROWS],
            target_score,
            moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_playable_validates() {
        assert_eq!(LevelLayout::fully_playable(1000, 15).validate(), Ok(()));
    }

    #[test]
    fn test_row_count_mismatch() {
        let mut layout = LevelLayout::fully_playable(0, 0);
        layout.tiles.pop();
        assert_eq!(
            layout.validate(),
            Err(LevelLoadError::RowCount { found: NUM_ROWS - 1 })
        );
    }

    #[test]
    fn test_ragged_row() {
        let mut layout = LevelLayout::fully_playable(0, 0);
        layout.tiles[4].push(1);
        assert_eq!(
            layout.validate(),
            Err(LevelLoadError::RowWidth {
                row: 4,
                found: NUM_COLUMNS + 1
            })
        );
    }

    #[test]
    fn test_bad_flag() {
        let mut layout = LevelLayout::fully_playable(0, 0);
        layout.tiles[2][3] = 7;
        assert_eq!(
            layout.validate(),
            Err(LevelLoadError::BadFlag {
                column: 3,
                row: 2,
                value: 7
            })
        );
    }
}
