//! Report types - serializable board-change descriptions
//!
//! The presentation layer has no rule knowledge; it only consumes plain
//! data describing what changed. These types flatten cookie handles
//! into self-contained records (id, position, kind) so a renderer can
//! animate a turn without access to the level.

use serde::Serialize;

use crate::core::{Chain, CookieId, Level, Swap};
use crate::engine::{CascadeStep, TurnOutcome};

/// One cookie: stable id, current position, kind
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CookieReport {
    pub id: u32,
    pub column: usize,
    pub row: usize,
    pub kind: &'static str,
}

/// A matched run with its score
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChainReport {
    pub kind: &'static str,
    pub score: u32,
    pub cookies: Vec<CookieReport>,
}

/// One cascade round: removals, falls, spawns
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub chains: Vec<ChainReport>,
    pub fallen: Vec<Vec<CookieReport>>,
    pub spawned: Vec<Vec<CookieReport>>,
}

/// The committed swap, by cookie id
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwapReport {
    pub a: u32,
    pub b: u32,
}

/// Everything a renderer needs to animate one resolved turn
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TurnReport {
    pub swap: SwapReport,
    pub steps: Vec<StepReport>,
    pub score: u32,
    pub possible_swaps: usize,
}

fn cookie_report(level: &Level, id: CookieId) -> CookieReport {
    let cookie = level.cookie(id);
    CookieReport {
        id: id.0,
        column: cookie.column,
        row: cookie.row,
        kind: cookie.kind.as_str(),
    }
}

fn chain_report(level: &Level, chain: &Chain) -> ChainReport {
    ChainReport {
        kind: chain.kind().as_str(),
        score: chain.score(),
        cookies: chain
            .cookies()
            .iter()
            .map(|&id| cookie_report(level, id))
            .collect(),
    }
}

fn columns_report(level: &Level, columns: &[Vec<CookieId>]) -> Vec<Vec<CookieReport>> {
    columns
        .iter()
        .map(|ids| ids.iter().map(|&id| cookie_report(level, id)).collect())
        .collect()
}

fn step_report(level: &Level, step: &CascadeStep) -> StepReport {
    StepReport {
        chains: step
            .chains
            .iter()
            .map(|chain| chain_report(level, chain))
            .collect(),
        fallen: columns_report(level, &step.fallen),
        spawned: columns_report(level, &step.spawned),
    }
}

/// Describe the cookies created by a shuffle or top-up
pub fn spawn_report(level: &Level, cookies: &[CookieId]) -> Vec<CookieReport> {
    cookies.iter().map(|&id| cookie_report(level, id)).collect()
}

/// Describe a resolved turn. Positions are read from the settled board,
/// so removed cookies report their last grid position.
pub fn turn_report(level: &Level, outcome: &TurnOutcome) -> TurnReport {
    TurnReport {
        swap: swap_report(&outcome.swap),
        steps: outcome
            .steps
            .iter()
            .map(|step| step_report(level, step))
            .collect(),
        score: outcome.score,
        possible_swaps: outcome.possible_swaps,
    }
}

/// Describe a swap by its cookie ids
pub fn swap_report(swap: &Swap) -> SwapReport {
    SwapReport {
        a: swap.a().0,
        b: swap.b().0,
    }
}
