//! State reducer - folds one mjai event into the table state.
//!
//! [`apply_event`] never fails. A log that references a tile missing from a
//! hand, or a seat outside 0..4, is played on a best-effort basis: the missing
//! piece is skipped and everything else still happens. [`anomalies`] reports
//! those conditions without touching the state, so callers can log them.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::table::{Discard, Meld, MeldKind, TableState};
use crate::tiles::{remove_tile, sort_hand};
use crate::types::{seat_index, Event, Seat, Tile, RIICHI_DEPOSIT};

/// Apply `event` to `state` and return the next state.
///
/// `start_kyoku` discards `state` and builds a new round. `start_game`,
/// `end_game`, `end_kyoku`, `hora`, `ryukyoku` and unmodeled tags leave the
/// table unchanged.
pub fn apply_event(state: TableState, event: &Event) -> TableState {
    let mut next = state;

    match event {
        Event::StartKyoku { .. } => {
            if let Some(fresh) = TableState::from_start_kyoku(event) {
                next = fresh;
            }
        }
        Event::Tsumo { actor, pai } => {
            // Drawn tile stays unsorted at the end of the hand.
            if let Some(i) = seat_index(*actor) {
                next.hands[i].push(pai.clone());
            }
        }
        Event::Dahai {
            actor,
            pai,
            tsumogiri,
        } => {
            if let Some(i) = seat_index(*actor) {
                remove_tile(&mut next.hands[i], pai);
                sort_hand(&mut next.hands[i]);
                next.discards[i].push(Discard {
                    tile: pai.clone(),
                    sideways: next.declaring_riichi == Some(*actor),
                    tsumogiri: *tsumogiri,
                });
            }
            next.declaring_riichi = None;
        }
        Event::Reach { actor } => {
            if seat_index(*actor).is_some() {
                next.declaring_riichi = Some(*actor);
            }
        }
        Event::ReachAccepted { actor } => {
            if let Some(i) = seat_index(*actor) {
                next.scores[i] -= RIICHI_DEPOSIT;
                next.riichi[i] = true;
                next.kyotaku = next.kyotaku.saturating_add(1);
            }
        }
        Event::Chi {
            actor,
            target,
            pai,
            consumed,
        } => claim(&mut next, MeldKind::Chi, *actor, *target, pai, consumed),
        Event::Pon {
            actor,
            target,
            pai,
            consumed,
        } => claim(&mut next, MeldKind::Pon, *actor, *target, pai, consumed),
        Event::Daiminkan {
            actor,
            target,
            pai,
            consumed,
        } => claim(&mut next, MeldKind::Daiminkan, *actor, *target, pai, consumed),
        Event::Ankan { actor, consumed } => {
            if let Some(i) = seat_index(*actor) {
                for tile in consumed {
                    remove_tile(&mut next.hands[i], tile);
                }
                sort_hand(&mut next.hands[i]);
                next.melds[i].push(Meld {
                    kind: MeldKind::Ankan,
                    from: None,
                    tiles: meld_tiles(None, consumed),
                });
            }
        }
        Event::Kakan { actor, pai, .. } => {
            if let Some(i) = seat_index(*actor) {
                remove_tile(&mut next.hands[i], pai);
                sort_hand(&mut next.hands[i]);
                if let Some(meld) = next.melds[i]
                    .iter_mut()
                    .find(|m| is_upgradable_pon(m, pai))
                {
                    meld.kind = MeldKind::Kakan;
                    let _ = meld.tiles.try_push(pai.clone());
                }
            }
        }
        Event::Dora { dora_marker } => {
            next.dora_markers.push(dora_marker.clone());
        }
        Event::StartGame { .. }
        | Event::EndGame { .. }
        | Event::EndKyoku
        | Event::Hora { .. }
        | Event::Ryukyoku { .. }
        | Event::Unknown => {}
    }

    next
}

/// Shared transition for chi, pon and daiminkan.
fn claim(
    next: &mut TableState,
    kind: MeldKind,
    actor: Seat,
    target: Seat,
    pai: &Tile,
    consumed: &[Tile],
) {
    let (Some(a), Some(t)) = (seat_index(actor), seat_index(target)) else {
        return;
    };

    for tile in consumed {
        remove_tile(&mut next.hands[a], tile);
    }
    sort_hand(&mut next.hands[a]);

    // The claimed tile is the last discard of the target seat.
    next.discards[t].pop();

    next.melds[a].push(Meld {
        kind,
        from: Some(target),
        tiles: meld_tiles(Some(pai), consumed),
    });
}

fn meld_tiles(called: Option<&Tile>, consumed: &[Tile]) -> ArrayVec<Tile, 4> {
    called
        .into_iter()
        .chain(consumed)
        .take(4)
        .cloned()
        .collect()
}

fn is_upgradable_pon(meld: &Meld, pai: &Tile) -> bool {
    meld.kind == MeldKind::Pon
        && meld
            .tiles
            .first()
            .is_some_and(|t| t.deaka() == pai.deaka())
}

/// A malformed-log condition found while checking an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedEvent {
    #[error("seat {seat} is out of range")]
    SeatOutOfRange { seat: Seat },
    #[error("seat {seat} does not hold {tile}")]
    MissingTile { seat: Seat, tile: Tile },
    #[error("seat {seat} has no discard to claim")]
    EmptyDiscardPile { seat: Seat },
    #[error("seat {seat} has no pon of {tile} to upgrade")]
    NoPonToUpgrade { seat: Seat, tile: Tile },
}

/// List what would be skipped if `event` were applied to `state`.
///
/// The result is empty for a well-formed event.
pub fn anomalies(state: &TableState, event: &Event) -> Vec<MalformedEvent> {
    let mut found = Vec::new();

    match event {
        Event::Tsumo { actor, .. } | Event::Reach { actor } | Event::ReachAccepted { actor } => {
            check_seat(*actor, &mut found);
        }
        Event::Dahai { actor, pai, .. } => {
            if check_seat(*actor, &mut found) {
                check_held(state, *actor, std::slice::from_ref(pai), &mut found);
            }
        }
        Event::Chi {
            actor,
            target,
            consumed,
            ..
        }
        | Event::Pon {
            actor,
            target,
            consumed,
            ..
        }
        | Event::Daiminkan {
            actor,
            target,
            consumed,
            ..
        } => {
            let actor_ok = check_seat(*actor, &mut found);
            let target_ok = check_seat(*target, &mut found);
            if actor_ok && target_ok {
                check_held(state, *actor, consumed, &mut found);
                if state.discards(*target).is_empty() {
                    found.push(MalformedEvent::EmptyDiscardPile { seat: *target });
                }
            }
        }
        Event::Ankan { actor, consumed } => {
            if check_seat(*actor, &mut found) {
                check_held(state, *actor, consumed, &mut found);
            }
        }
        Event::Kakan { actor, pai, .. } => {
            if check_seat(*actor, &mut found) {
                check_held(state, *actor, std::slice::from_ref(pai), &mut found);
                if !state.melds(*actor).iter().any(|m| is_upgradable_pon(m, pai)) {
                    found.push(MalformedEvent::NoPonToUpgrade {
                        seat: *actor,
                        tile: pai.clone(),
                    });
                }
            }
        }
        Event::StartKyoku { .. }
        | Event::StartGame { .. }
        | Event::EndGame { .. }
        | Event::EndKyoku
        | Event::Hora { .. }
        | Event::Ryukyoku { .. }
        | Event::Dora { .. }
        | Event::Unknown => {}
    }

    found
}

fn check_seat(seat: Seat, found: &mut Vec<MalformedEvent>) -> bool {
    if seat_index(seat).is_some() {
        true
    } else {
        found.push(MalformedEvent::SeatOutOfRange { seat });
        false
    }
}

fn check_held(state: &TableState, seat: Seat, tiles: &[Tile], found: &mut Vec<MalformedEvent>) {
    let mut hand = state.hand(seat).to_vec();
    for tile in tiles {
        if !remove_tile(&mut hand, tile) {
            found.push(MalformedEvent::MissingTile {
                seat,
                tile: tile.clone(),
            });
        }
    }
}
