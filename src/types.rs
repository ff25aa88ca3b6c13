//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (fixed 9x9 playfield)
pub const NUM_COLUMNS: usize = 9;
pub const NUM_ROWS: usize = 9;

/// Minimum run length that counts as a chain
pub const MIN_CHAIN_LENGTH: usize = 3;

/// Base point value of a chain: `(length - 2) * CHAIN_BASE_SCORE * combo`
pub const CHAIN_BASE_SCORE: u32 = 60;

/// Cookie kinds (the playable piece colors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookieType {
    Croissant,
    Cupcake,
    Danish,
    Donut,
    Macaroon,
    SugarCookie,
}

impl CookieType {
    /// All kinds, in a fixed order for uniform random selection
    pub const ALL: [CookieType; 6] = [
        CookieType::Croissant,
        CookieType::Cupcake,
        CookieType::Danish,
        CookieType::Donut,
        CookieType::Macaroon,
        CookieType::SugarCookie,
    ];

    /// Number of distinct kinds
    pub const COUNT: usize = Self::ALL.len();

    /// Parse cookie kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "croissant" => Some(CookieType::Croissant),
            "cupcake" => Some(CookieType::Cupcake),
            "danish" => Some(CookieType::Danish),
            "donut" => Some(CookieType::Donut),
            "macaroon" => Some(CookieType::Macaroon),
            "sugarcookie" => Some(CookieType::SugarCookie),
            _ => None,
        }
    }

    /// Convert to camelCase string (wire/report name)
    pub fn as_str(&self) -> &'static str {
        match self {
            CookieType::Croissant => "croissant",
            CookieType::Cupcake => "cupcake",
            CookieType::Danish => "danish",
            CookieType::Donut => "donut",
            CookieType::Macaroon => "macaroon",
            CookieType::SugarCookie => "sugarCookie",
        }
    }
}

/// Orientation of a matched run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainKind {
    Horizontal,
    Vertical,
}

impl ChainKind {
    /// Convert to string (for reports)
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainKind::Horizontal => "horizontal",
            ChainKind::Vertical => "vertical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_type_str_roundtrip() {
        for kind in CookieType::ALL {
            assert_eq!(CookieType::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(CookieType::from_str("waffle"), None);
    }

    #[test]
    fn test_cookie_type_count() {
        assert_eq!(CookieType::COUNT, 6);
    }

    #[test]
    fn test_chain_kind_str() {
        assert_eq!(ChainKind::Horizontal.as_str(), "horizontal");
        assert_eq!(ChainKind::Vertical.as_str(), "vertical");
    }
}
