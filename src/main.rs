//! Headless self-play runner (default binary).
//!
//! Loads a level description, shuffles a board, then plays random legal
//! swaps until the moves run out or the target score is reached. Each
//! step prints the same JSON reports a presentation layer would consume,
//! so the output doubles as a smoke test of the whole stack.
//!
//! Usage: `crunch [LEVEL_FILE] [SEED]`

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crunch::adapter::{load_level, spawn_report, turn_report};
use crunch::core::{Level, SimpleRng, Swap};
use crunch::engine::resolve_swap;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("levels/level_1.json"));
    let seed: u32 = match args.next() {
        Some(raw) => raw.parse().context("seed must be an unsigned integer")?,
        None => 1,
    };

    let mut level = load_level(&path)?;
    let mut rng = SimpleRng::new(seed);

    let cookies = level.shuffle(&mut rng)?;
    println!(
        "board: {}",
        serde_json::to_string(&spawn_report(&level, &cookies))?
    );

    let target = level.target_score();
    let mut moves_left = level.maximum_moves();
    let mut total_score = 0u32;

    while moves_left > 0 && total_score < target {
        let Some(swap) = pick_swap(&level, &mut rng) else {
            // Stuck board: no legal move survived the last cascade.
            let cookies = level.shuffle(&mut rng)?;
            println!(
                "board: {}",
                serde_json::to_string(&spawn_report(&level, &cookies))?
            );
            continue;
        };

        let outcome = resolve_swap(&mut level, &mut rng, swap)?;
        total_score += outcome.score;
        moves_left -= 1;
        println!("turn: {}", serde_json::to_string(&turn_report(&level, &outcome))?);
    }

    let verdict = if total_score >= target { "won" } else { "lost" };
    println!(
        "{}: score {} / {} with {} moves left",
        verdict, total_score, target, moves_left
    );
    Ok(())
}

/// Pick a legal swap deterministically under the seed: sort the set by
/// canonical cookie ids, then index it with the RNG.
fn pick_swap(level: &Level, rng: &mut SimpleRng) -> Option<Swap> {
    let mut swaps: Vec<Swap> = level.possible_swaps().iter().copied().collect();
    if swaps.is_empty() {
        return None;
    }
    swaps.sort_by_key(|s| (s.a().min(s.b()), s.a().max(s.b())));
    let index = rng.next_range(swaps.len() as u32) as usize;
    Some(swaps[index])
}
