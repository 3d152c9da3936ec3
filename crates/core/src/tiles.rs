//! Canonical tile ordering for hand display.

use std::cmp::Ordering;

use crate::types::{seat_index, Seat, Tile, Wind, SEAT_COUNT};

/// Compare two tiles by display order.
///
/// manzu < pinzu < souzu < winds < dragons, rank ascending, red five right
/// after the plain five. Unrecognized tiles compare greater than every
/// recognized tile and equal to each other.
pub fn compare_tiles(a: &Tile, b: &Tile) -> Ordering {
    match (a.order_key(), b.order_key()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Return a sorted copy of `tiles`, leaving the input untouched.
///
/// The sort is stable, so unrecognized tiles keep their relative order.
///
/// # Examples
///
/// ```
/// use mjai_replay_core::tiles::sort_tiles;
/// use mjai_replay_core::types::Tile;
///
/// let hand: Vec<Tile> = ["E", "5mr", "?", "3p", "5m", "C"].into_iter().map(Tile::from).collect();
/// let sorted = sort_tiles(&hand);
/// let ids: Vec<&str> = sorted.iter().map(Tile::as_str).collect();
/// assert_eq!(ids, ["5m", "5mr", "3p", "E", "C", "?"]);
/// ```
pub fn sort_tiles(tiles: &[Tile]) -> Vec<Tile> {
    let mut sorted = tiles.to_vec();
    sort_hand(&mut sorted);
    sorted
}

/// Sort a hand in place (stable).
pub fn sort_hand(hand: &mut [Tile]) {
    hand.sort_by(compare_tiles);
}

/// Remove the first tile equal to `tile`. Returns false when there is none.
pub fn remove_tile(hand: &mut Vec<Tile>, tile: &Tile) -> bool {
    match hand.iter().position(|t| t == tile) {
        Some(pos) => {
            hand.remove(pos);
            true
        }
        None => false,
    }
}

/// Seat wind of `seat` when `oya` is the dealer (the dealer sits East).
///
/// # Examples
///
/// ```
/// use mjai_replay_core::tiles::seat_wind;
/// use mjai_replay_core::types::Wind;
///
/// assert_eq!(seat_wind(2, 2), Wind::East);
/// assert_eq!(seat_wind(3, 2), Wind::South);
/// assert_eq!(seat_wind(0, 2), Wind::West);
/// assert_eq!(seat_wind(1, 2), Wind::North);
/// ```
pub fn seat_wind(seat: Seat, oya: Seat) -> Wind {
    let seat = seat_index(seat).unwrap_or(0);
    let oya = seat_index(oya).unwrap_or(0);
    Wind::from_index(seat + SEAT_COUNT - oya)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tiles(ids: &[&str]) -> Vec<Tile> {
        ids.iter().map(|&s| Tile::from(s)).collect()
    }

    fn ids(tiles: &[Tile]) -> Vec<&str> {
        tiles.iter().map(Tile::as_str).collect()
    }

    #[test]
    fn test_suit_order() {
        let hand = tiles(&["1s", "N", "1p", "P", "1m"]);
        assert_eq!(ids(&sort_tiles(&hand)), ["1m", "1p", "1s", "N", "P"]);
    }

    #[test]
    fn test_rank_order_within_suit() {
        let hand = tiles(&["9p", "5pr", "1p", "5p", "6p", "4p"]);
        assert_eq!(ids(&sort_tiles(&hand)), ["1p", "4p", "5p", "5pr", "6p", "9p"]);
    }

    #[test]
    fn test_honor_cycles() {
        let hand = tiles(&["C", "N", "F", "W", "P", "S", "E"]);
        assert_eq!(ids(&sort_tiles(&hand)), ["E", "S", "W", "N", "P", "F", "C"]);
    }

    #[test]
    fn test_unknown_tiles_last_and_stable() {
        let hand = tiles(&["zz", "?", "2m", "x1", "1m"]);
        assert_eq!(ids(&sort_tiles(&hand)), ["1m", "2m", "zz", "?", "x1"]);
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let hand = tiles(&["3s", "1s", "2s"]);
        let _ = sort_tiles(&hand);
        assert_eq!(ids(&hand), ["3s", "1s", "2s"]);
    }

    #[test]
    fn test_remove_tile_first_match_only() {
        let mut hand = tiles(&["3p", "4p", "3p"]);
        assert!(remove_tile(&mut hand, &Tile::from("3p")));
        assert_eq!(ids(&hand), ["4p", "3p"]);
        assert!(!remove_tile(&mut hand, &Tile::from("9m")));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn test_red_five_is_not_plain_five_for_removal() {
        let mut hand = tiles(&["5m", "5mr"]);
        assert!(remove_tile(&mut hand, &Tile::from("5mr")));
        assert_eq!(ids(&hand), ["5m"]);
    }

    #[test]
    fn test_seat_wind_dealer_is_east() {
        for oya in 0..4u8 {
            assert_eq!(seat_wind(oya, oya), Wind::East);
            assert_eq!(seat_wind((oya + 1) % 4, oya), Wind::South);
        }
    }

    const TILE_POOL: &[&str] = &[
        "1m", "2m", "3m", "4m", "5m", "5mr", "6m", "7m", "8m", "9m", "1p", "2p", "3p", "4p",
        "5p", "5pr", "6p", "7p", "8p", "9p", "1s", "2s", "3s", "4s", "5s", "5sr", "6s", "7s",
        "8s", "9s", "E", "S", "W", "N", "P", "F", "C", "?", "bogus",
    ];

    fn hand_strategy() -> impl Strategy<Value = Vec<Tile>> {
        prop::collection::vec(prop::sample::select(TILE_POOL), 0..20)
            .prop_map(|v| v.into_iter().map(Tile::from).collect())
    }

    proptest! {
        #[test]
        fn prop_sort_is_idempotent(hand in hand_strategy()) {
            let once = sort_tiles(&hand);
            prop_assert_eq!(sort_tiles(&once), once);
        }

        #[test]
        fn prop_sort_is_permutation(hand in hand_strategy()) {
            let sorted = sort_tiles(&hand);
            prop_assert_eq!(sorted.len(), hand.len());
            let mut a: Vec<&str> = hand.iter().map(Tile::as_str).collect();
            let mut b: Vec<&str> = sorted.iter().map(Tile::as_str).collect();
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_sorted_is_non_decreasing(hand in hand_strategy()) {
            let sorted = sort_tiles(&hand);
            for pair in sorted.windows(2) {
                prop_assert_ne!(compare_tiles(&pair[0], &pair[1]), Ordering::Greater);
            }
        }
    }
}
