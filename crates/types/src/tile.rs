//! mjai tile identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tile as written in an mjai log (`"3p"`, `"5sr"`, `"E"`, ...).
///
/// The identifier is kept verbatim so unrecognized strings survive a round
/// trip through the table state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile(String);

/// Tile suit, in canonical display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Manzu,
    Pinzu,
    Souzu,
    Wind,
    Dragon,
}

impl Suit {
    fn from_char(c: u8) -> Option<Self> {
        match c {
            b'm' => Some(Suit::Manzu),
            b'p' => Some(Suit::Pinzu),
            b's' => Some(Suit::Souzu),
            _ => None,
        }
    }
}

impl Tile {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Suit and rank of a recognized tile.
    ///
    /// Honors are ranked by their position in the fixed cycle (`E S W N`,
    /// `P F C`), starting from 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use mjai_replay_types::tile::{Suit, Tile};
    ///
    /// assert_eq!(Tile::new("7s").suit_rank(), Some((Suit::Souzu, 7)));
    /// assert_eq!(Tile::new("5mr").suit_rank(), Some((Suit::Manzu, 5)));
    /// assert_eq!(Tile::new("F").suit_rank(), Some((Suit::Dragon, 2)));
    /// assert_eq!(Tile::new("0m").suit_rank(), None);
    /// ```
    pub fn suit_rank(&self) -> Option<(Suit, u8)> {
        match self.0.as_bytes() {
            [b'E'] => Some((Suit::Wind, 1)),
            [b'S'] => Some((Suit::Wind, 2)),
            [b'W'] => Some((Suit::Wind, 3)),
            [b'N'] => Some((Suit::Wind, 4)),
            [b'P'] => Some((Suit::Dragon, 1)),
            [b'F'] => Some((Suit::Dragon, 2)),
            [b'C'] => Some((Suit::Dragon, 3)),
            [rank @ b'1'..=b'9', suit] => Some((Suit::from_char(*suit)?, rank - b'0')),
            [b'5', suit, b'r'] => Some((Suit::from_char(*suit)?, 5)),
            _ => None,
        }
    }

    /// Red ("aka") five
    pub fn is_red(&self) -> bool {
        matches!(self.0.as_str(), "5mr" | "5pr" | "5sr")
    }

    /// Whether the identifier names one of the 37 distinct mjai tiles
    pub fn is_known(&self) -> bool {
        self.suit_rank().is_some()
    }

    /// The plain counterpart of a red five; any other tile is returned as is.
    pub fn deaka(&self) -> Tile {
        if self.is_red() {
            Tile(self.0[..2].to_string())
        } else {
            self.clone()
        }
    }

    /// Position of the tile in the canonical display order.
    ///
    /// Suits are spaced 20 apart and ranks 2 apart so that a red five lands
    /// directly after the plain five of its suit. Unrecognized tiles have no key.
    pub fn order_key(&self) -> Option<u8> {
        let (suit, rank) = self.suit_rank()?;
        let red = u8::from(self.is_red());
        let key = match suit {
            Suit::Manzu => rank * 2 + red,
            Suit::Pinzu => 20 + rank * 2 + red,
            Suit::Souzu => 40 + rank * 2 + red,
            Suit::Wind => 60 + rank,
            Suit::Dragon => 70 + rank,
        };
        Some(key)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tile {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Tile {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for Tile {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Tile {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
