//! Table state - the aggregate the reducer folds events into.
//!
//! A `TableState` is created from a `start_kyoku` event and then threaded by
//! value through [`crate::reducer::apply_event`]. Fields are read through
//! accessors only; nothing outside the reducer can change them.

use arrayvec::ArrayVec;

use crate::tiles::sort_tiles;
use crate::types::{seat_index, Event, Seat, Tile, Wind, SEAT_COUNT};

/// One tile in a discard pile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Discard {
    pub tile: Tile,
    /// Laid sideways because the seat declared riichi on this discard.
    pub sideways: bool,
    /// Discarded straight off the draw.
    pub tsumogiri: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeldKind {
    Chi,
    Pon,
    Daiminkan,
    Ankan,
    Kakan,
}

/// A revealed group of tiles.
///
/// For claimed melds the called tile comes first, followed by the consumed
/// tiles in log order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Meld {
    pub kind: MeldKind,
    /// Seat whose discard was claimed. `None` for closed kans.
    pub from: Option<Seat>,
    pub tiles: ArrayVec<Tile, 4>,
}

impl Meld {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Complete state of one round at the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub(crate) bakaze: Wind,
    pub(crate) kyoku: u8,
    pub(crate) honba: u8,
    pub(crate) kyotaku: u8,
    pub(crate) oya: Seat,
    /// First entry is the round's dora indicator; `dora` events append.
    pub(crate) dora_markers: Vec<Tile>,
    pub(crate) scores: [i32; SEAT_COUNT],
    pub(crate) hands: [Vec<Tile>; SEAT_COUNT],
    pub(crate) discards: [Vec<Discard>; SEAT_COUNT],
    pub(crate) melds: [Vec<Meld>; SEAT_COUNT],
    pub(crate) riichi: [bool; SEAT_COUNT],
    /// Seat whose next discard is the riichi declaration tile.
    pub(crate) declaring_riichi: Option<Seat>,
}

impl TableState {
    /// Build a fresh round from a `start_kyoku` event.
    ///
    /// Returns `None` for any other event.
    pub fn from_start_kyoku(event: &Event) -> Option<Self> {
        let Event::StartKyoku {
            bakaze,
            kyoku,
            honba,
            kyotaku,
            oya,
            scores,
            dora_marker,
            tehais,
        } = event
        else {
            return None;
        };

        Some(Self {
            bakaze: *bakaze,
            kyoku: *kyoku,
            honba: *honba,
            kyotaku: *kyotaku,
            oya: *oya,
            dora_markers: vec![dora_marker.clone()],
            scores: *scores,
            hands: tehais.each_ref().map(|hand| sort_tiles(hand)),
            discards: Default::default(),
            melds: Default::default(),
            riichi: [false; SEAT_COUNT],
            declaring_riichi: None,
        })
    }

    pub fn bakaze(&self) -> Wind {
        self.bakaze
    }

    pub fn kyoku(&self) -> u8 {
        self.kyoku
    }

    pub fn honba(&self) -> u8 {
        self.honba
    }

    /// Riichi sticks on the table
    pub fn kyotaku(&self) -> u8 {
        self.kyotaku
    }

    /// Dealer seat
    pub fn oya(&self) -> Seat {
        self.oya
    }

    pub fn dora_marker(&self) -> Option<&Tile> {
        self.dora_markers.first()
    }

    pub fn dora_markers(&self) -> &[Tile] {
        &self.dora_markers
    }

    pub fn scores(&self) -> &[i32; SEAT_COUNT] {
        &self.scores
    }

    pub fn score(&self, seat: Seat) -> Option<i32> {
        seat_index(seat).map(|i| self.scores[i])
    }

    /// Concealed tiles of `seat`. Empty for seats outside 0..4.
    ///
    /// Sorted, except that a freshly drawn tile stays at the end until the
    /// next discard.
    pub fn hand(&self, seat: Seat) -> &[Tile] {
        seat_index(seat)
            .map(|i| self.hands[i].as_slice())
            .unwrap_or_default()
    }

    pub fn discards(&self, seat: Seat) -> &[Discard] {
        seat_index(seat)
            .map(|i| self.discards[i].as_slice())
            .unwrap_or_default()
    }

    pub fn melds(&self, seat: Seat) -> &[Meld] {
        seat_index(seat)
            .map(|i| self.melds[i].as_slice())
            .unwrap_or_default()
    }

    pub fn riichi(&self, seat: Seat) -> bool {
        seat_index(seat).is_some_and(|i| self.riichi[i])
    }

    pub fn declaring_riichi(&self) -> Option<Seat> {
        self.declaring_riichi
    }

    /// Tiles of `seat` held in hand or shown in melds
    pub fn held_tile_count(&self, seat: Seat) -> usize {
        self.hand(seat).len() + self.melds(seat).iter().map(Meld::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_event() -> Event {
        Event::StartKyoku {
            bakaze: Wind::South,
            kyoku: 2,
            honba: 1,
            kyotaku: 1,
            oya: 1,
            scores: [24000, 26000, 25000, 25000],
            dora_marker: Tile::from("9s"),
            tehais: [
                vec!["E".into(), "1m".into(), "5pr".into()],
                vec!["?".into(), "2s".into()],
                vec![],
                vec!["C".into()],
            ],
        }
    }

    #[test]
    fn test_from_start_kyoku_copies_round_metadata() {
        let state = TableState::from_start_kyoku(&start_event()).unwrap();
        assert_eq!(state.bakaze(), Wind::South);
        assert_eq!(state.kyoku(), 2);
        assert_eq!(state.honba(), 1);
        assert_eq!(state.kyotaku(), 1);
        assert_eq!(state.oya(), 1);
        assert_eq!(state.dora_marker(), Some(&Tile::from("9s")));
        assert_eq!(state.scores(), &[24000, 26000, 25000, 25000]);
    }

    #[test]
    fn test_from_start_kyoku_sorts_hands() {
        let state = TableState::from_start_kyoku(&start_event()).unwrap();
        let hand: Vec<&str> = state.hand(0).iter().map(Tile::as_str).collect();
        assert_eq!(hand, ["1m", "5pr", "E"]);
        let hand: Vec<&str> = state.hand(1).iter().map(Tile::as_str).collect();
        assert_eq!(hand, ["2s", "?"]);
    }

    #[test]
    fn test_from_start_kyoku_starts_clean() {
        let state = TableState::from_start_kyoku(&start_event()).unwrap();
        for seat in 0..4 {
            assert!(state.discards(seat).is_empty());
            assert!(state.melds(seat).is_empty());
            assert!(!state.riichi(seat));
        }
        assert_eq!(state.declaring_riichi(), None);
    }

    #[test]
    fn test_from_start_kyoku_rejects_other_events() {
        assert!(TableState::from_start_kyoku(&Event::EndKyoku).is_none());
    }

    #[test]
    fn test_out_of_range_seat_reads_empty() {
        let state = TableState::from_start_kyoku(&start_event()).unwrap();
        assert!(state.hand(4).is_empty());
        assert!(state.discards(9).is_empty());
        assert_eq!(state.score(4), None);
        assert!(!state.riichi(7));
    }
}
