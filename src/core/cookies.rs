//! Cookie entities and the arena that owns them
//!
//! Cookies are identity-bearing: two cookies of the same kind are still
//! distinct pieces. They are stored in an arena and addressed by a stable
//! `CookieId` handle, so sets and maps keyed by a cookie stay valid while
//! its coordinates change. Equality and hashing are on the handle only,
//! never on the mutable position.

use crate::types::CookieType;

/// Stable handle to a cookie in a [`CookieArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CookieId(pub u32);

/// A playable piece: current grid position plus kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cookie {
    pub column: usize,
    pub row: usize,
    pub kind: CookieType,
}

/// Marker for a playable cell in the board layout.
/// Created once at load time, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile;

/// Push-only cookie storage for one generation of a board.
///
/// Removed cookies keep their record so a driver can still resolve the
/// ids inside returned chains; the arena is cleared wholesale when the
/// board is regenerated.
#[derive(Debug, Clone, Default)]
pub struct CookieArena {
    cookies: Vec<Cookie>,
}

impl CookieArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new cookie and return its handle
    pub fn alloc(&mut self, column: usize, row: usize, kind: CookieType) -> CookieId {
        let id = CookieId(self.cookies.len() as u32);
        self.cookies.push(Cookie { column, row, kind });
        id
    }

    /// Borrow the cookie behind a handle
    pub fn get(&self, id: CookieId) -> &Cookie {
        &self.cookies[id.0 as usize]
    }

    /// Mutably borrow the cookie behind a handle
    pub fn get_mut(&mut self, id: CookieId) -> &mut Cookie {
        &mut self.cookies[id.0 as usize]
    }

    /// Number of cookies ever allocated in this generation
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Whether the arena holds no cookies
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Drop every cookie; previously issued handles become invalid
    pub fn clear(&mut self) {
        self.cookies.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_get() {
        let mut arena = CookieArena::new();
        let id = arena.alloc(2, 5, CookieType::Donut);
        let cookie = arena.get(id);
        assert_eq!(cookie.column, 2);
        assert_eq!(cookie.row, 5);
        assert_eq!(cookie.kind, CookieType::Donut);
    }

    #[test]
    fn test_ids_are_stable_across_moves() {
        let mut arena = CookieArena::new();
        let a = arena.alloc(0, 0, CookieType::Croissant);
        let b = arena.alloc(1, 0, CookieType::Croissant);

        // Same kind, different identity.
        assert_ne!(a, b);

        // Moving a cookie does not disturb its handle.
        arena.get_mut(a).row = 8;
        assert_eq!(arena.get(a).row, 8);
        assert_eq!(arena.get(b).row, 0);
    }

    #[test]
    fn test_clear_resets_allocation() {
        let mut arena = CookieArena::new();
        arena.alloc(0, 0, CookieType::Danish);
        arena.clear();
        assert!(arena.is_empty());
        let id = arena.alloc(3, 3, CookieType::Cupcake);
        assert_eq!(id, CookieId(0));
    }
}
