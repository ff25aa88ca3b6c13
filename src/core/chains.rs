//! Swap and Chain value types
//!
//! A `Swap` is an unordered candidate move: equality and hashing are
//! symmetric, so the legal-move set never stores the same pair twice.
//! A `Chain` is one maximal matched run found by the board scans.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::core::cookies::CookieId;
use crate::types::{ChainKind, CHAIN_BASE_SCORE};

/// An unordered pair of cookies considered for exchange
#[derive(Debug, Clone, Copy)]
pub struct Swap {
    a: CookieId,
    b: CookieId,
}

impl Swap {
    /// Create a swap between two cookies; order of arguments is irrelevant
    pub fn new(a: CookieId, b: CookieId) -> Self {
        Self { a, b }
    }

    /// First cookie as constructed
    pub fn a(&self) -> CookieId {
        self.a
    }

    /// Second cookie as constructed
    pub fn b(&self) -> CookieId {
        self.b
    }

    /// Order-independent representative of the pair
    fn canonical(&self) -> (CookieId, CookieId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

impl PartialEq for Swap {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Swap {}

impl Hash for Swap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "swap #{} with #{}", self.a.0, self.b.0)
    }
}

/// A matched run of 3+ same-kind cookies
#[derive(Debug, Clone)]
pub struct Chain {
    kind: ChainKind,
    cookies: Vec<CookieId>,
    score: u32,
}

impl Chain {
    /// Create an empty chain of the given orientation
    pub fn new(kind: ChainKind) -> Self {
        Self {
            kind,
            cookies: Vec::new(),
            score: 0,
        }
    }

    /// Append the next cookie along the run (first-to-last order)
    pub fn add_cookie(&mut self, id: CookieId) {
        self.cookies.push(id);
    }

    /// Orientation of the run
    pub fn kind(&self) -> ChainKind {
        self.kind
    }

    /// Members in run order
    pub fn cookies(&self) -> &[CookieId] {
        &self.cookies
    }

    /// Number of cookies in the run
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Whether the chain has no members yet
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Points awarded for this chain; 0 until scored
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score the chain: `(length - 2) * base * combo_multiplier`.
    /// Called exactly once per removal pass.
    pub(crate) fn assign_score(&mut self, combo_multiplier: u32) {
        self.score = (self.len() as u32 - 2) * CHAIN_BASE_SCORE * combo_multiplier;
    }
}

impl PartialEq for Chain {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.cookies == other.cookies
    }
}

impl Eq for Chain {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_swap_equality_is_symmetric() {
        let a = CookieId(3);
        let b = CookieId(17);
        assert_eq!(Swap::new(a, b), Swap::new(b, a));
        assert_ne!(Swap::new(a, b), Swap::new(a, CookieId(4)));
    }

    #[test]
    fn test_swap_hash_is_symmetric() {
        let mut set = HashSet::new();
        set.insert(Swap::new(CookieId(1), CookieId(2)));
        assert!(set.contains(&Swap::new(CookieId(2), CookieId(1))));
        assert!(!set.insert(Swap::new(CookieId(2), CookieId(1))));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_chain_scoring() {
        let mut chain = Chain::new(ChainKind::Horizontal);
        for i in 0..3 {
            chain.add_cookie(CookieId(i));
        }
        chain.assign_score(1);
        assert_eq!(chain.score(), 60);

        let mut long = Chain::new(ChainKind::Vertical);
        for i in 0..5 {
            long.add_cookie(CookieId(i));
        }
        long.assign_score(2);
        assert_eq!(long.score(), (5 - 2) * 60 * 2);
    }

    #[test]
    fn test_chain_order_preserved() {
        let mut chain = Chain::new(ChainKind::Horizontal);
        chain.add_cookie(CookieId(9));
        chain.add_cookie(CookieId(4));
        chain.add_cookie(CookieId(7));
        assert_eq!(chain.cookies(), &[CookieId(9), CookieId(4), CookieId(7)]);
    }
}
