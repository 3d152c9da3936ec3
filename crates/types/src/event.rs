//! mjai game events.
//!
//! One variant per `"type"` tag found in an mjai log. Events are facts read
//! from the log and are never modified after parsing.

use serde::{Deserialize, Serialize};

use crate::{Seat, Tile, Wind};

/// A single line of an mjai log.
///
/// Tags this crate does not model deserialize to [`Event::Unknown`] so that a
/// log carrying them still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Game start marker.
    StartGame {
        #[serde(default)]
        aka_flag: bool,
        #[serde(default)]
        kyoku_first: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        names: Option<Vec<String>>,
    },
    /// Round setup with the initial deal.
    StartKyoku {
        bakaze: Wind,
        kyoku: u8,
        honba: u8,
        /// Riichi sticks on the table.
        #[serde(default, alias = "kyoutaku")]
        kyotaku: u8,
        oya: Seat,
        scores: [i32; 4],
        dora_marker: Tile,
        tehais: [Vec<Tile>; 4],
    },
    /// A player draws a tile.
    Tsumo { actor: Seat, pai: Tile },
    /// A player discards a tile.
    Dahai {
        actor: Seat,
        pai: Tile,
        #[serde(default)]
        tsumogiri: bool,
    },
    /// Riichi declaration.
    Reach { actor: Seat },
    /// Riichi deposit accepted.
    ReachAccepted { actor: Seat },
    /// Sequence call on the previous discard.
    Chi {
        actor: Seat,
        target: Seat,
        pai: Tile,
        consumed: Vec<Tile>,
    },
    /// Triplet call on a discard.
    Pon {
        actor: Seat,
        target: Seat,
        pai: Tile,
        consumed: Vec<Tile>,
    },
    /// Open kan on a discard.
    #[serde(alias = "kan")]
    Daiminkan {
        actor: Seat,
        target: Seat,
        pai: Tile,
        consumed: Vec<Tile>,
    },
    /// Closed kan.
    Ankan { actor: Seat, consumed: Vec<Tile> },
    /// Added kan on an existing pon.
    Kakan {
        actor: Seat,
        pai: Tile,
        #[serde(default)]
        consumed: Vec<Tile>,
    },
    /// New dora indicator revealed.
    Dora { dora_marker: Tile },
    /// Win declaration with precomputed results.
    Hora {
        actor: Seat,
        target: Seat,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pai: Option<Tile>,
        #[serde(default, alias = "han", skip_serializing_if = "Option::is_none")]
        fan: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fu: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hora_tehais: Option<Vec<Tile>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scores: Option<[i32; 4]>,
    },
    /// Exhaustive or abortive draw.
    Ryukyoku {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scores: Option<[i32; 4]>,
    },
    /// Round end marker.
    EndKyoku,
    /// Game end marker.
    EndGame {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scores: Option<[i32; 4]>,
    },
    /// Any tag not listed above.
    #[serde(other)]
    Unknown,
}

impl Event {
    /// The seat performing the event, for events that have one
    pub fn actor(&self) -> Option<Seat> {
        match self {
            Event::Tsumo { actor, .. }
            | Event::Dahai { actor, .. }
            | Event::Reach { actor }
            | Event::ReachAccepted { actor }
            | Event::Chi { actor, .. }
            | Event::Pon { actor, .. }
            | Event::Daiminkan { actor, .. }
            | Event::Ankan { actor, .. }
            | Event::Kakan { actor, .. }
            | Event::Hora { actor, .. } => Some(*actor),
            Event::StartGame { .. }
            | Event::StartKyoku { .. }
            | Event::Dora { .. }
            | Event::Ryukyoku { .. }
            | Event::EndKyoku
            | Event::EndGame { .. }
            | Event::Unknown => None,
        }
    }

    /// mjai tag of the event (`"unknown"` for unmodeled tags)
    pub fn kind(&self) -> &'static str {
        match self {
            Event::StartGame { .. } => "start_game",
            Event::StartKyoku { .. } => "start_kyoku",
            Event::Tsumo { .. } => "tsumo",
            Event::Dahai { .. } => "dahai",
            Event::Reach { .. } => "reach",
            Event::ReachAccepted { .. } => "reach_accepted",
            Event::Chi { .. } => "chi",
            Event::Pon { .. } => "pon",
            Event::Daiminkan { .. } => "daiminkan",
            Event::Ankan { .. } => "ankan",
            Event::Kakan { .. } => "kakan",
            Event::Dora { .. } => "dora",
            Event::Hora { .. } => "hora",
            Event::Ryukyoku { .. } => "ryukyoku",
            Event::EndKyoku => "end_kyoku",
            Event::EndGame { .. } => "end_game",
            Event::Unknown => "unknown",
        }
    }

    pub fn is_start_kyoku(&self) -> bool {
        matches!(self, Event::StartKyoku { .. })
    }

    /// Events after which there is nothing more to show for the round
    pub fn ends_round(&self) -> bool {
        matches!(
            self,
            Event::Hora { .. } | Event::Ryukyoku { .. } | Event::EndKyoku | Event::EndGame { .. }
        )
    }
}
