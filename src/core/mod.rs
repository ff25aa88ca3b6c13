//! Core rule engine - pure, deterministic, and testable
//!
//! Everything that makes the game a game lives here: the grid model,
//! swap legality, match detection, removal and scoring, gravity and
//! refill. The module has zero dependencies on UI, networking, or I/O:
//!
//! - **Deterministic**: same layout and seed produce identical boards
//! - **Synchronous**: every operation is a plain transformation on the
//!   grid state, driven by discrete turns rather than a render loop
//! - **Single-writer**: no internal concurrency; the driver serializes
//!   turns and waits for each cascade to settle before the next swap
//!
//! # Module Structure
//!
//! - [`grid`]: generic fixed-size sparse 2D container
//! - [`cookies`]: cookie entities, tile markers, and the id arena
//! - [`chains`]: `Swap` and `Chain` value types
//! - [`layout`]: level description and validation
//! - [`level`]: board lifecycle and all game-rule algorithms
//! - [`rng`]: seeded LCG and uniform cookie-kind selection

pub mod chains;
pub mod cookies;
pub mod grid;
pub mod layout;
pub mod level;
pub mod rng;

// Re-export commonly used types for convenience
pub use chains::{Chain, Swap};
pub use cookies::{Cookie, CookieArena, CookieId, Tile};
pub use grid::Grid2D;
pub use layout::{LevelLayout, LevelLoadError};
pub use level::{BoardGenerationError, IllegalSwapError, Level, MAX_SHUFFLE_ATTEMPTS};
pub use rng::{random_cookie_type, SimpleRng};
