//! Level file loading - JSON documents describing a board
//!
//! A level file carries a `tiles` grid of 0/1 flags (row 0 topmost, the
//! authoring order), a `targetScore`, and a `moves` allowance:
//!
//! ```json
//! {
//!   "tiles": [[1,1,...], ...],
//!   "targetScore": 1000,
//!   "moves": 15
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::{Level, LevelLayout};

/// Wire model of a level description document
#[derive(Debug, Clone, Deserialize)]
pub struct LevelFile {
    pub tiles: Vec<Vec<u8>>,
    #[serde(rename = "targetScore")]
    pub target_score: u32,
    pub moves: u32,
}

impl From<LevelFile> for LevelLayout {
    fn from(file: LevelFile) -> Self {
        LevelLayout {
            tiles: file.tiles,
            target_score: file.target_score,
            moves: file.moves,
        }
    }
}

/// Parse a level description from JSON text
pub fn parse_level(json: &str) -> Result<Level> {
    let file: LevelFile = serde_json::from_str(json).context("malformed level description")?;
    let layout = LevelLayout::from(file);
    let level = Level::new(&layout).context("invalid level description")?;
    Ok(level)
}

/// Load and parse a level description file
pub fn load_level(path: &Path) -> Result<Level> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading level file {}", path.display()))?;
    parse_level(&json).with_context(|| format!("loading level file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NUM_COLUMNS, NUM_ROWS};

    fn full_board_json(target_score: u32, moves: u32) -> String {
        let row = format!("[{}]", vec!["1"; NUM_COLUMNS].join(","));
        let rows = vec![row; NUM_ROWS].join(",");
        format!(
            "{{\"tiles\":[{}],\"targetScore\":{},\"moves\":{}}}",
            rows, target_score, moves
        )
    }

    #[test]
    fn test_parse_full_board() {
        let level = parse_level(&full_board_json(1000, 15)).expect("valid document");
        assert_eq!(level.target_score(), 1000);
        assert_eq!(level.maximum_moves(), 15);
        for row in 0..NUM_ROWS {
            for column in 0..NUM_COLUMNS {
                assert!(level.has_tile(column, row));
            }
        }
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_level("{\"tiles\": [").unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert!(parse_level("{\"tiles\": [[1]]}").is_err());
    }

    #[test]
    fn test_parse_rejects_dimension_mismatch() {
        let json = "{\"tiles\":[[1,1,1]],\"targetScore\":10,\"moves\":5}";
        let err = parse_level(json).unwrap_err();
        assert!(err.to_string().contains("invalid level description"));
    }
}
