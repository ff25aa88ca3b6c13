//! Adapter module - JSON boundary around the core
//!
//! Loads level description files and flattens core results into
//! serializable reports for a presentation layer.

pub mod level_file;
pub mod report;

pub use level_file::{load_level, parse_level, LevelFile};
pub use report::{
    spawn_report, swap_report, turn_report, ChainReport, CookieReport, StepReport, SwapReport,
    TurnReport,
};
