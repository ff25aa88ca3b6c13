//! RNG module - deterministic random cookie selection
//!
//! A simple seeded LCG keeps every generation path reproducible: the
//! same seed always produces the same shuffled board and the same
//! top-up cookies. Constrained selection (no 3-in-a-row at board
//! creation, no immediate repeats during top-up) lives with the level
//! logic, which calls [`random_cookie_type`] in a re-roll loop.

use crate::types::CookieType;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Get the current state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Pick a cookie kind uniformly from the fixed set
pub fn random_cookie_type(rng: &mut SimpleRng) -> CookieType {
    CookieType::ALL[rng.next_range(CookieType::COUNT as u32) as usize]
}
