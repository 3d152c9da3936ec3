use mjai_replay::core::{anomalies, LoadError, MalformedEvent, PlaybackController, ReplayLog};
use mjai_replay::types::{Event, Tile};

const TWO_ROUNDS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/two_rounds.mjson");

fn tiles(ids: &[&str]) -> Vec<Tile> {
    ids.iter().map(|&s| Tile::from(s)).collect()
}

/// Tick until `cursor` events have been consumed.
fn play_to(ctl: &mut PlaybackController, cursor: usize) {
    while ctl.cursor() < cursor && !ctl.is_finished() {
        ctl.tick();
    }
}

#[test]
fn loads_fixture_rounds() {
    let log = ReplayLog::from_path(TWO_ROUNDS).unwrap();
    assert_eq!(log.len(), 26);
    assert_eq!(log.round_starts(), &[1, 15]);
    assert!(matches!(log.events()[0], Event::StartGame { .. }));
    assert!(matches!(log.events()[25], Event::EndGame { .. }));
}

#[test]
fn missing_file_reports_path() {
    let err = ReplayLog::from_path("tests/data/no_such_log.mjson").unwrap_err();
    match err {
        LoadError::Io { path, .. } => assert!(path.ends_with("no_such_log.mjson")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn first_round_plays_out() {
    let log = ReplayLog::from_path(TWO_ROUNDS).unwrap();
    let mut ctl = PlaybackController::new(log, None);
    play_to(&mut ctl, 15);

    let state = ctl.state();
    assert_eq!(state.scores(), &[25000, 24000, 25000, 25000]);
    assert_eq!(state.kyotaku(), 1);
    assert!(state.riichi(1));

    // Seat 0 drew 6s for the win; the draw stays at the end of the hand.
    let mut expected = tiles(&[
        "1m", "2m", "3m", "4p", "5p", "6p", "7s", "8s", "9s", "E", "E", "S", "S",
    ]);
    expected.push(Tile::from("6s"));
    assert_eq!(state.hand(0), expected.as_slice());

    assert_eq!(state.discards(1).len(), 1);
    assert!(state.discards(1)[0].sideways);
    assert!(state.discards(2).is_empty());

    assert_eq!(
        state.hand(3),
        tiles(&["5mr", "6m", "7m", "4s", "5s", "6s", "F", "F", "C", "C"]).as_slice()
    );
    assert_eq!(state.melds(3).len(), 1);
    for seat in 1..4 {
        assert_eq!(state.held_tile_count(seat), 13, "seat {seat}");
    }

    match ctl.last_event() {
        Some(Event::EndKyoku) => {}
        other => panic!("unexpected last event: {other:?}"),
    }
}

#[test]
fn second_round_opens_on_its_own_scores() {
    let log = ReplayLog::from_path(TWO_ROUNDS).unwrap();
    let mut ctl = PlaybackController::at_round(log, 1, None).unwrap();
    assert_eq!(ctl.cursor(), 16);
    assert_eq!(ctl.state().honba(), 1);
    assert_eq!(ctl.state().scores(), &[30000, 22000, 24000, 24000]);

    ctl.run_until_blocked();
    assert!(ctl.is_finished());

    let state = ctl.state();
    assert_eq!(state.dora_markers(), tiles(&["9p", "2s"]).as_slice());
    assert_eq!(state.hand(2).len(), 10);
    assert_eq!(state.melds(2)[0].tiles.len(), 4);
    assert_eq!(state.melds(2)[0].from, None);
}

#[test]
fn masked_hand_keeps_unmatched_discard() {
    let log = ReplayLog::from_path(TWO_ROUNDS).unwrap();
    let mut ctl = PlaybackController::at_round(log, 1, None).unwrap();
    play_to(&mut ctl, 19);

    // Seat 1's hand is all "?"; discarding 9s finds nothing to remove.
    let pending = ctl.pending_event().cloned().unwrap();
    assert_eq!(
        anomalies(ctl.state(), &pending),
        vec![MalformedEvent::MissingTile {
            seat: 1,
            tile: Tile::from("9s"),
        }]
    );

    ctl.tick();
    assert_eq!(ctl.state().hand(1).len(), 14);
    assert_eq!(ctl.state().discards(1).len(), 1);
}

#[test]
fn round_out_of_range_is_an_error() {
    let log = ReplayLog::from_path(TWO_ROUNDS).unwrap();
    let err = PlaybackController::at_round(log, 2, None).err().unwrap();
    assert!(matches!(
        err,
        LoadError::RoundOutOfRange {
            requested: 2,
            available: 2
        }
    ));
}
