//! Engine module - synchronous turn resolution on top of the core
//!
//! Where `core` exposes individual rule operations, this layer packages
//! a whole player turn behind one call so drivers cannot get the
//! sequencing wrong.

pub mod resolve;

pub use resolve::{resolve_swap, CascadeStep, SwapError, TurnOutcome};
