//! Match-3 puzzle rule engine.
//!
//! The crate tracks a 9x9 grid of tiles and colored cookies, validates
//! swaps against a precomputed legal-move set, finds matched runs,
//! removes them, lets cookies fall, and refills from the top until the
//! board settles. Drivers (a renderer, a test harness, the bundled
//! self-play binary) own the turn loop and consume the plain data each
//! step returns.
//!
//! # Example
//!
//! ```
//! use crunch::core::{Level, LevelLayout, SimpleRng};
//! use crunch::engine::resolve_swap;
//!
//! let mut level = Level::new(&LevelLayout::fully_playable(1000, 15)).unwrap();
//! let mut rng = SimpleRng::new(12345);
//! level.shuffle(&mut rng).unwrap();
//!
//! let swap = *level.possible_swaps().iter().next().unwrap();
//! let outcome = resolve_swap(&mut level, &mut rng, swap).unwrap();
//! assert!(outcome.score > 0);
//! ```

pub mod adapter;
pub mod core;
pub mod engine;
pub mod types;
