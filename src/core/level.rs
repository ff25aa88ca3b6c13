//! Level module - board lifecycle and rule engine
//!
//! A `Level` owns the cookie grid, the tile mask, the arena of cookie
//! records and the current legal-move set, and implements every game
//! rule: shuffle, swap legality, match detection, removal and scoring,
//! gravity and top-up. A driver calls these operations one turn at a
//! time and consumes the plain data they return; the level never knows
//! anything about rendering or input.
//!
//! Invariants held across every mutation:
//! - an occupied cell is always tile-marked; non-tile cells stay empty
//! - each cookie's stored `(column, row)` matches its grid cell

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use arrayvec::ArrayVec;

use crate::core::chains::{Chain, Swap};
use crate::core::cookies::{Cookie, CookieArena, CookieId, Tile};
use crate::core::grid::Grid2D;
use crate::core::layout::{LevelLayout, LevelLoadError};
use crate::core::rng::{random_cookie_type, SimpleRng};
use crate::types::{ChainKind, CookieType, MIN_CHAIN_LENGTH, NUM_COLUMNS, NUM_ROWS};

/// Safety cap on board regeneration. Shuffling a playable layout
/// converges in a handful of attempts; hitting the cap means the layout
/// cannot produce a board with a legal move.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 1000;

/// Board regeneration exhausted its retry limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGenerationError {
    pub attempts: usize,
}

impl fmt::Display for BoardGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no board with a legal move after {} shuffle attempts",
            self.attempts
        )
    }
}

impl Error for BoardGenerationError {}

/// A swap was requested that is not in the current legal-move set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalSwapError(pub Swap);

impl fmt::Display for IllegalSwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a legal move", self.0)
    }
}

impl Error for IllegalSwapError {}

/// The board state and rule engine for one level
#[derive(Debug, Clone)]
pub struct Level {
    cookies: Grid2D<CookieId>,
    tiles: Grid2D<Tile>,
    arena: CookieArena,
    possible_swaps: HashSet<Swap>,
    target_score: u32,
    maximum_moves: u32,
    combo_multiplier: u32,
}

impl Level {
    /// Build a level from a layout description.
    /// Source row 0 is the top of the board; tiles are flipped so that
    /// internal row 0 is the bottom.
    pub fn new(layout: &LevelLayout) -> Result<Self, LevelLoadError> {
        layout.validate()?;

        let mut tiles = Grid2D::new(NUM_COLUMNS, NUM_ROWS);
        for (source_row, flags) in layout.tiles.iter().enumerate() {
            let row = NUM_ROWS - source_row - 1;
            for (column, &flag) in flags.iter().enumerate() {
                if flag == 1 {
                    tiles.set(column, row, Some(Tile));
                }
            }
        }

        Ok(Self {
            cookies: Grid2D::new(NUM_COLUMNS, NUM_ROWS),
            tiles,
            arena: CookieArena::new(),
            possible_swaps: HashSet::new(),
            target_score: layout.target_score,
            maximum_moves: layout.moves,
            combo_multiplier: 1,
        })
    }

    // ============== Accessors ==============

    /// Cookie occupying (column, row), if any. Panics out of bounds.
    pub fn cookie_at(&self, column: usize, row: usize) -> Option<CookieId> {
        self.cookies.get_copied(column, row)
    }

    /// Resolve a cookie handle to its record
    pub fn cookie(&self, id: CookieId) -> &Cookie {
        self.arena.get(id)
    }

    /// Whether (column, row) is part of the playable board shape
    pub fn has_tile(&self, column: usize, row: usize) -> bool {
        self.tiles.is_occupied(column, row)
    }

    /// The current legal-move set
    pub fn possible_swaps(&self) -> &HashSet<Swap> {
        &self.possible_swaps
    }

    /// Size of the legal-move set (telemetry)
    pub fn possible_swap_count(&self) -> usize {
        self.possible_swaps.len()
    }

    /// Score the driver should aim for
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Move allowance for the level; the driver decrements its own copy
    pub fn maximum_moves(&self) -> u32 {
        self.maximum_moves
    }

    /// Current cascade combo multiplier
    pub fn combo_multiplier(&self) -> u32 {
        self.combo_multiplier
    }

    /// Place a cookie directly, bypassing generation constraints.
    /// Board-authoring hook for tests and tooling; replaces any cookie
    /// already in the cell.
    pub fn place_cookie(&mut self, column: usize, row: usize, kind: CookieType) -> CookieId {
        assert!(
            self.has_tile(column, row),
            "cannot place a cookie on a non-tile cell ({}, {})",
            column,
            row
        );
        let id = self.arena.alloc(column, row, kind);
        self.cookies.set(column, row, Some(id));
        id
    }

    // ============== Board generation ==============

    /// Fill the board with random cookies until at least one legal move
    /// exists, returning every cookie created. Each attempt regenerates
    /// the whole board; the retry cap is a defensive bound only.
    pub fn shuffle(&mut self, rng: &mut SimpleRng) -> Result<Vec<CookieId>, BoardGenerationError> {
        for _ in 0..MAX_SHUFFLE_ATTEMPTS {
            let cookies = self.create_initial_cookies(rng);
            self.detect_possible_swaps();
            if !self.possible_swaps.is_empty() {
                return Ok(cookies);
            }
        }
        Err(BoardGenerationError {
            attempts: MAX_SHUFFLE_ATTEMPTS,
        })
    }

    /// One full-board generation pass: every tile cell gets a random
    /// cookie whose kind does not complete a 3-in-a-row against the two
    /// cells to its left or the two cells below.
    fn create_initial_cookies(&mut self, rng: &mut SimpleRng) -> Vec<CookieId> {
        self.cookies.clear();
        self.arena.clear();

        let mut created = Vec::new();
        for row in 0..NUM_ROWS {
            for column in 0..NUM_COLUMNS {
                if !self.tiles.is_occupied(column, row) {
                    continue;
                }

                let mut kind = random_cookie_type(rng);
                while self.would_complete_run(column, row, kind) {
                    kind = random_cookie_type(rng);
                }

                let id = self.arena.alloc(column, row, kind);
                self.cookies.set(column, row, Some(id));
                created.push(id);
            }
        }
        created
    }

    /// Would placing `kind` at (column, row) finish a horizontal run to
    /// the left or a vertical run below? Cells above and to the right
    /// are not generated yet, so only these two directions matter.
    fn would_complete_run(&self, column: usize, row: usize, kind: CookieType) -> bool {
        (column >= 2
            && self.kind_at(column - 1, row) == Some(kind)
            && self.kind_at(column - 2, row) == Some(kind))
            || (row >= 2
                && self.kind_at(column, row - 1) == Some(kind)
                && self.kind_at(column, row - 2) == Some(kind))
    }

    // ============== Swap legality ==============

    /// Rebuild the legal-move set from scratch: for every occupied cell,
    /// virtually exchange it with its right and upper neighbors and keep
    /// the pair if a chain passes through either swapped cell.
    pub fn detect_possible_swaps(&mut self) {
        let mut set = HashSet::new();

        for row in 0..NUM_ROWS {
            for column in 0..NUM_COLUMNS {
                let Some(cookie) = self.cookies.get_copied(column, row) else {
                    continue;
                };

                if column < NUM_COLUMNS - 1 {
                    if let Some(other) = self.cookies.get_copied(column + 1, row) {
                        // Virtual swap of the grid cells only; the arena
                        // coordinates are untouched and unread here.
                        self.cookies.set(column + 1, row, Some(cookie));
                        self.cookies.set(column, row, Some(other));

                        if self.has_chain_at(column, row) || self.has_chain_at(column + 1, row) {
                            set.insert(Swap::new(cookie, other));
                        }

                        self.cookies.set(column + 1, row, Some(other));
                        self.cookies.set(column, row, Some(cookie));
                    }
                }

                if row < NUM_ROWS - 1 {
                    if let Some(other) = self.cookies.get_copied(column, row + 1) {
                        self.cookies.set(column, row + 1, Some(cookie));
                        self.cookies.set(column, row, Some(other));

                        if self.has_chain_at(column, row) || self.has_chain_at(column, row + 1) {
                            set.insert(Swap::new(cookie, other));
                        }

                        self.cookies.set(column, row + 1, Some(other));
                        self.cookies.set(column, row, Some(cookie));
                    }
                }
            }
        }

        self.possible_swaps = set;
    }

    /// Membership test against the current legal-move set
    pub fn is_possible_swap(&self, swap: &Swap) -> bool {
        self.possible_swaps.contains(swap)
    }

    /// Exchange two cookies' grid cells and stored coordinates.
    /// Does not check legality; callers validate via
    /// [`is_possible_swap`](Self::is_possible_swap) first, or use
    /// [`try_perform_swap`](Self::try_perform_swap).
    pub fn perform_swap(&mut self, swap: &Swap) {
        let a = swap.a();
        let b = swap.b();
        let (a_column, a_row) = {
            let c = self.arena.get(a);
            (c.column, c.row)
        };
        let (b_column, b_row) = {
            let c = self.arena.get(b);
            (c.column, c.row)
        };

        self.cookies.set(a_column, a_row, Some(b));
        self.cookies.set(b_column, b_row, Some(a));

        let cookie_a = self.arena.get_mut(a);
        cookie_a.column = b_column;
        cookie_a.row = b_row;
        let cookie_b = self.arena.get_mut(b);
        cookie_b.column = a_column;
        cookie_b.row = a_row;
    }

    /// Checked variant of [`perform_swap`](Self::perform_swap): rejects
    /// swaps outside the legal-move set without touching the board.
    pub fn try_perform_swap(&mut self, swap: &Swap) -> Result<(), IllegalSwapError> {
        if !self.is_possible_swap(swap) {
            return Err(IllegalSwapError(*swap));
        }
        self.perform_swap(swap);
        Ok(())
    }

    // ============== Match detection ==============

    /// Kind of the cookie occupying (column, row), if any
    fn kind_at(&self, column: usize, row: usize) -> Option<CookieType> {
        self.cookies
            .get_copied(column, row)
            .map(|id| self.arena.get(id).kind)
    }

    /// Localized chain test: does a horizontal or vertical run of 3+
    /// pass through (column, row)? Used for incremental swap-legality
    /// checks only; empty cells never chain.
    fn has_chain_at(&self, column: usize, row: usize) -> bool {
        let Some(kind) = self.kind_at(column, row) else {
            return false;
        };

        let mut horz_length = 1;
        let mut i = column;
        while i > 0 && self.kind_at(i - 1, row) == Some(kind) {
            i -= 1;
            horz_length += 1;
        }
        let mut i = column + 1;
        while i < NUM_COLUMNS && self.kind_at(i, row) == Some(kind) {
            i += 1;
            horz_length += 1;
        }
        if horz_length >= MIN_CHAIN_LENGTH {
            return true;
        }

        let mut vert_length = 1;
        let mut i = row;
        while i > 0 && self.kind_at(column, i - 1) == Some(kind) {
            i -= 1;
            vert_length += 1;
        }
        let mut i = row + 1;
        while i < NUM_ROWS && self.kind_at(column, i) == Some(kind) {
            i += 1;
            vert_length += 1;
        }
        vert_length >= MIN_CHAIN_LENGTH
    }

    /// Left-to-right scan per row; each 3+ run becomes one chain
    /// consuming the entire maximal run, and the scan resumes after it.
    fn detect_horizontal_matches(&self) -> Vec<Chain> {
        let mut result = Vec::new();

        for row in 0..NUM_ROWS {
            let mut column = 0;
            while column + 2 < NUM_COLUMNS {
                let Some(kind) = self.kind_at(column, row) else {
                    column += 1;
                    continue;
                };

                if self.kind_at(column + 1, row) == Some(kind)
                    && self.kind_at(column + 2, row) == Some(kind)
                {
                    let mut chain = Chain::new(ChainKind::Horizontal);
                    while column < NUM_COLUMNS {
                        match self.cookies.get_copied(column, row) {
                            Some(id) if self.arena.get(id).kind == kind => {
                                chain.add_cookie(id);
                                column += 1;
                            }
                            _ => break,
                        }
                    }
                    result.push(chain);
                    continue;
                }

                column += 1;
            }
        }

        result
    }

    /// Bottom-to-top scan per column, mirror of the horizontal scan
    fn detect_vertical_matches(&self) -> Vec<Chain> {
        let mut result = Vec::new();

        for column in 0..NUM_COLUMNS {
            let mut row = 0;
            while row + 2 < NUM_ROWS {
                let Some(kind) = self.kind_at(column, row) else {
                    row += 1;
                    continue;
                };

                if self.kind_at(column, row + 1) == Some(kind)
                    && self.kind_at(column, row + 2) == Some(kind)
                {
                    let mut chain = Chain::new(ChainKind::Vertical);
                    while row < NUM_ROWS {
                        match self.cookies.get_copied(column, row) {
                            Some(id) if self.arena.get(id).kind == kind => {
                                chain.add_cookie(id);
                                row += 1;
                            }
                            _ => break,
                        }
                    }
                    result.push(chain);
                    continue;
                }

                row += 1;
            }
        }

        result
    }

    // ============== Removal, gravity, top-up ==============

    /// Detect every chain on the board, remove its cookies, and score
    /// each chain in order: horizontal chains first, then vertical. A
    /// cookie shared between a horizontal and a vertical chain appears
    /// in both returned chains but its cell is cleared once.
    pub fn remove_matches(&mut self) -> Vec<Chain> {
        let mut horizontal = self.detect_horizontal_matches();
        let mut vertical = self.detect_vertical_matches();

        self.remove_chain_cookies(&horizontal);
        self.remove_chain_cookies(&vertical);

        self.assign_scores(&mut horizontal);
        self.assign_scores(&mut vertical);

        horizontal.append(&mut vertical);
        horizontal
    }

    fn remove_chain_cookies(&mut self, chains: &[Chain]) {
        for chain in chains {
            for &id in chain.cookies() {
                let cookie = self.arena.get(id);
                self.cookies.set(cookie.column, cookie.row, None);
            }
        }
    }

    fn assign_scores(&mut self, chains: &mut [Chain]) {
        for chain in chains {
            chain.assign_score(self.combo_multiplier);
            self.combo_multiplier += 1;
        }
    }

    /// Reset the combo multiplier to 1. The driver calls this when a new
    /// player turn begins, not between cascade steps within a turn.
    pub fn reset_combo_multiplier(&mut self) {
        self.combo_multiplier = 1;
    }

    /// Let cookies fall into the holes below them. Per column, scans
    /// bottom-up; each empty tile cell pulls down the nearest cookie
    /// above it. Returns the moved cookies per column in fill order;
    /// columns with no movement are omitted.
    pub fn fill_holes(&mut self) -> Vec<Vec<CookieId>> {
        let mut columns = Vec::new();

        for column in 0..NUM_COLUMNS {
            let mut fallen: ArrayVec<CookieId, NUM_ROWS> = ArrayVec::new();
            for row in 0..NUM_ROWS {
                if self.tiles.is_occupied(column, row) && !self.cookies.is_occupied(column, row) {
                    for lookup in (row + 1)..NUM_ROWS {
                        if let Some(id) = self.cookies.take(column, lookup) {
                            self.cookies.set(column, row, Some(id));
                            self.arena.get_mut(id).row = row;
                            fallen.push(id);
                            break;
                        }
                    }
                }
            }
            if !fallen.is_empty() {
                columns.push(fallen.to_vec());
            }
        }

        columns
    }

    /// Refill each column from the top. Scans downward while cells are
    /// empty, creating a random cookie per tile cell and avoiding only a
    /// repeat of the kind generated immediately before it in the same
    /// column. Unlike initial generation this may complete 3-in-a-rows;
    /// those count as bonus matches on the next cascade pass. Returns
    /// new cookies per column in top-down creation order; full columns
    /// are omitted.
    pub fn top_up_cookies(&mut self, rng: &mut SimpleRng) -> Vec<Vec<CookieId>> {
        let mut columns = Vec::new();

        for column in 0..NUM_COLUMNS {
            let mut spawned: ArrayVec<CookieId, NUM_ROWS> = ArrayVec::new();
            let mut last_kind: Option<CookieType> = None;

            for row in (0..NUM_ROWS).rev() {
                if self.cookies.is_occupied(column, row) {
                    break;
                }
                if !self.tiles.is_occupied(column, row) {
                    continue;
                }

                let mut kind = random_cookie_type(rng);
                while Some(kind) == last_kind {
                    kind = random_cookie_type(rng);
                }
                last_kind = Some(kind);

                let id = self.arena.alloc(column, row, kind);
                self.cookies.set(column, row, Some(id));
                spawned.push(id);
            }

            if !spawned.is_empty() {
                columns.push(spawned.to_vec());
            }
        }

        columns
    }
}
