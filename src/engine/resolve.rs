//! Turn resolution: validate, commit, cascade
//!
//! The driver-facing command interface over [`Level`]. One call takes a
//! proposed swap and runs the whole turn to quiescence: commit the swap,
//! then repeat remove-matches / fill-holes / top-up until no further
//! chains appear, then rebuild the legal-move set for the next turn.
//! The returned outcome carries everything a presentation layer needs
//! to animate the turn; total-score and remaining-move bookkeeping stay
//! with the driver.

use std::error::Error;
use std::fmt;

use crate::core::{Chain, CookieId, Level, SimpleRng, Swap};

/// A proposed swap was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapError {
    /// Not in the current legal-move set
    NotLegal(Swap),
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapError::NotLegal(swap) => write!(f, "{} is not a legal move", swap),
        }
    }
}

impl Error for SwapError {}

/// One round of the cascade: the chains removed, then the cookies that
/// fell, then the cookies spawned from the top
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeStep {
    pub chains: Vec<Chain>,
    /// Moved cookies per column, in fill order; unchanged columns omitted
    pub fallen: Vec<Vec<CookieId>>,
    /// New cookies per column, top-down; already-full columns omitted
    pub spawned: Vec<Vec<CookieId>>,
}

/// Everything that happened during one resolved turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// The committed swap
    pub swap: Swap,
    /// Cascade rounds in order; empty only if the swap produced no chain,
    /// which a legal swap never does
    pub steps: Vec<CascadeStep>,
    /// Sum of all chain scores across the cascade
    pub score: u32,
    /// Size of the recomputed legal-move set (telemetry)
    pub possible_swaps: usize,
}

/// Resolve one player turn.
///
/// Rejects swaps outside the legal-move set without mutating anything,
/// so a driver can animate invalid-move feedback. On success the combo
/// multiplier is reset for the new turn, the swap is committed, and the
/// cascade runs until the board settles.
pub fn resolve_swap(
    level: &mut Level,
    rng: &mut SimpleRng,
    swap: Swap,
) -> Result<TurnOutcome, SwapError> {
    if !level.is_possible_swap(&swap) {
        return Err(SwapError::NotLegal(swap));
    }

    level.reset_combo_multiplier();
    level.perform_swap(&swap);

    let mut steps = Vec::new();
    let mut score = 0u32;
    loop {
        let chains = level.remove_matches();
        if chains.is_empty() {
            break;
        }
        score += chains.iter().map(Chain::score).sum::<u32>();

        let fallen = level.fill_holes();
        let spawned = level.top_up_cookies(rng);
        steps.push(CascadeStep {
            chains,
            fallen,
            spawned,
        });
    }

    level.detect_possible_swaps();

    Ok(TurnOutcome {
        swap,
        steps,
        score,
        possible_swaps: level.possible_swap_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LevelLayout;
    use crate::types::CookieType;

    fn level() -> Level {
        Level::new(&LevelLayout::fully_playable(1000, 15)).expect("valid layout")
    }

    #[test]
    fn test_resolve_rejects_illegal_swap() {
        let mut level = level();
        let a = level.place_cookie(0, 0, CookieType::Donut);
        let b = level.place_cookie(1, 0, CookieType::Danish);
        level.detect_possible_swaps();

        let mut rng = SimpleRng::new(1);
        let swap = Swap::new(a, b);
        assert_eq!(
            resolve_swap(&mut level, &mut rng, swap),
            Err(SwapError::NotLegal(swap))
        );
        // Board untouched.
        assert_eq!(level.cookie_at(0, 0), Some(a));
        assert_eq!(level.cookie_at(1, 0), Some(b));
    }

    #[test]
    fn test_resolve_runs_cascade_to_quiescence() {
        let mut level = level();
        let mut rng = SimpleRng::new(1234);
        level.shuffle(&mut rng).expect("shuffle converges");

        let swap = *level
            .possible_swaps()
            .iter()
            .next()
            .expect("shuffle guarantees a legal move");
        let outcome = resolve_swap(&mut level, &mut rng, swap).expect("legal swap resolves");

        // A legal swap always produces at least one chain.
        assert!(!outcome.steps.is_empty());
        assert!(outcome.score > 0);
        assert!(outcome
            .steps
            .iter()
            .all(|step| step.chains.iter().all(|chain| chain.len() >= 3)));

        // Settled: an immediate re-detection finds nothing.
        assert!(level.remove_matches().is_empty());
        assert_eq!(outcome.possible_swaps, level.possible_swap_count());
    }

    #[test]
    fn test_resolve_is_deterministic_under_seed() {
        let run = |seed: u32| {
            let mut level = level();
            let mut rng = SimpleRng::new(seed);
            level.shuffle(&mut rng).expect("shuffle converges");
            let mut swaps: Vec<Swap> = level.possible_swaps().iter().copied().collect();
            swaps.sort_by_key(|s| (s.a().min(s.b()), s.a().max(s.b())));
            let outcome =
                resolve_swap(&mut level, &mut rng, swaps[0]).expect("legal swap resolves");
            (outcome.score, outcome.steps.len(), outcome.possible_swaps)
        };

        assert_eq!(run(77), run(77));
    }

    #[test]
    fn test_resolve_board_stays_full() {
        let mut level = level();
        let mut rng = SimpleRng::new(42);
        level.shuffle(&mut rng).expect("shuffle converges");

        let swap = *level
            .possible_swaps()
            .iter()
            .next()
            .expect("shuffle guarantees a legal move");
        resolve_swap(&mut level, &mut rng, swap).expect("legal swap resolves");

        // On a fully playable board, gravity plus top-up leaves no holes.
        for row in 0..crate::types::NUM_ROWS {
            for column in 0..crate::types::NUM_COLUMNS {
                assert!(level.cookie_at(column, row).is_some());
            }
        }
    }
}
