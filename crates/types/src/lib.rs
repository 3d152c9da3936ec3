//! Shared types for the replayer - tiles, winds, seats and mjai events
//!
//! Everything in here is plain data. The only dependency is `serde`, so the
//! types can be used by the reducer, the renderer and the log loader alike.
//!
//! # Tile notation
//!
//! Tiles use the mjai string notation:
//!
//! | Group | Identifiers |
//! |-------|-------------|
//! | manzu | `1m` .. `9m`, red five `5mr` |
//! | pinzu | `1p` .. `9p`, red five `5pr` |
//! | souzu | `1s` .. `9s`, red five `5sr` |
//! | winds | `E` `S` `W` `N` |
//! | dragons | `P` `F` `C` |
//!
//! Any other string (the hidden-tile marker `?` for instance) is kept verbatim
//! and treated as unrecognized.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_STEP_MS` | 500 | Pacing interval between automatic events |
//! | `MIN_STEP_MS` | 10 | Lower clamp for configured pacing |
//!
//! # Examples
//!
//! ```
//! use mjai_replay_types::{Event, Tile, Wind};
//!
//! let tile = Tile::new("5pr");
//! assert!(tile.is_red());
//! assert_eq!(tile.deaka(), Tile::new("5p"));
//!
//! assert_eq!(Wind::from_str("s"), Some(Wind::South));
//!
//! let ev: Event = serde_json::from_str(r#"{"type":"reach","actor":2}"#).unwrap();
//! assert_eq!(ev.actor(), Some(2));
//! ```

pub mod event;
pub mod tile;

pub use event::Event;
pub use tile::Tile;

use serde::{Deserialize, Serialize};

/// Seat index, 0..=3. Seat 0 is the first seat of the game, not the dealer.
pub type Seat = u8;

/// Number of seats at the table
pub const SEAT_COUNT: usize = 4;

/// Points paid into the pot when a riichi declaration is accepted
pub const RIICHI_DEPOSIT: i32 = 1000;

/// Default pacing interval between automatically applied events
pub const DEFAULT_STEP_MS: u64 = 500;

/// Pacing intervals below this are clamped up
pub const MIN_STEP_MS: u64 = 10;

/// Returns the seat as an array index when it names one of the four seats.
pub fn seat_index(seat: Seat) -> Option<usize> {
    let idx = seat as usize;
    (idx < SEAT_COUNT).then_some(idx)
}

/// Round and seat winds
///
/// The cycle goes: East → South → West → North → East
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wind {
    #[default]
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "N")]
    North,
}

impl Wind {
    /// Parse wind from its tile letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mjai_replay_types::Wind;
    ///
    /// assert_eq!(Wind::from_str("E"), Some(Wind::East));
    /// assert_eq!(Wind::from_str("n"), Some(Wind::North));
    /// assert_eq!(Wind::from_str("P"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "E" => Some(Wind::East),
            "S" => Some(Wind::South),
            "W" => Some(Wind::West),
            "N" => Some(Wind::North),
            _ => None,
        }
    }

    /// Tile letter of the wind
    pub fn as_str(&self) -> &'static str {
        match self {
            Wind::East => "E",
            Wind::South => "S",
            Wind::West => "W",
            Wind::North => "N",
        }
    }

    /// Wind at position `index` of the cycle, wrapping every four steps
    ///
    /// # Examples
    ///
    /// ```
    /// use mjai_replay_types::Wind;
    ///
    /// assert_eq!(Wind::from_index(0), Wind::East);
    /// assert_eq!(Wind::from_index(5), Wind::South);
    /// ```
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Wind::East,
            1 => Wind::South,
            2 => Wind::West,
            _ => Wind::North,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Wind::East => 0,
            Wind::South => 1,
            Wind::West => 2,
            Wind::North => 3,
        }
    }

    /// Next wind in the cycle
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }
}
