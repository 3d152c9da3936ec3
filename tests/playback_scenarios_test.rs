//! Whole-log playback scenarios through the facade crate.

use mjai_replay::core::{Discard, PlaybackController, ReplayLog, StepOutcome};
use mjai_replay::types::Tile;

const HAND0: &str = r#"["1m","2m","3m","4m","5m","6m","7m","8m","9m","1p","2p","3p","E"]"#;
const HAND1: &str = r#"["1s","2s","3s","4s","6s","7s","8s","9s","2p","4p","5p","6p","W"]"#;
const HAND2: &str = r#"["3p","7p","8p","9p","1s","1s","2m","2m","S","S","N","P","F"]"#;
const HAND3: &str = r#"["3p","3p","4m","5m","6m","7p","7p","8s","8s","9s","C","C","N"]"#;

fn log(lines: &[&str]) -> ReplayLog {
    let start = format!(
        r#"{{"type":"start_kyoku","bakaze":"E","kyoku":1,"honba":0,"kyotaku":0,"oya":0,"scores":[25000,25000,25000,25000],"dora_marker":"1p","tehais":[{HAND0},{HAND1},{HAND2},{HAND3}]}}"#
    );
    let mut text = start;
    for line in lines {
        text.push('\n');
        text.push_str(line);
    }
    ReplayLog::parse(&text).unwrap()
}

fn sorted_hand0() -> Vec<Tile> {
    serde_json::from_str::<Vec<Tile>>(HAND0).unwrap()
}

#[test]
fn tsumogiri_returns_hand_to_start() {
    let mut ctl = PlaybackController::new(
        log(&[
            r#"{"type":"tsumo","actor":0,"pai":"5s"}"#,
            r#"{"type":"dahai","actor":0,"pai":"5s","tsumogiri":true}"#,
        ]),
        None,
    );
    assert_eq!(ctl.run_until_blocked(), StepOutcome::Finished);

    let state = ctl.state();
    assert_eq!(state.hand(0), sorted_hand0().as_slice());
    assert_eq!(
        state.discards(0),
        &[Discard {
            tile: Tile::from("5s"),
            sideways: false,
            tsumogiri: true,
        }]
    );
    assert_eq!(state.scores(), &[25000; 4]);
}

#[test]
fn riichi_discard_is_sideways_and_deposit_taken_once() {
    let mut ctl = PlaybackController::new(
        log(&[
            r#"{"type":"tsumo","actor":1,"pai":"5s"}"#,
            r#"{"type":"reach","actor":1}"#,
            r#"{"type":"dahai","actor":1,"pai":"2p","tsumogiri":false}"#,
            r#"{"type":"reach_accepted","actor":1}"#,
            r#"{"type":"tsumo","actor":2,"pai":"9m"}"#,
            r#"{"type":"dahai","actor":2,"pai":"9m","tsumogiri":true}"#,
            r#"{"type":"tsumo","actor":1,"pai":"E"}"#,
            r#"{"type":"dahai","actor":1,"pai":"E","tsumogiri":true}"#,
        ]),
        None,
    );
    ctl.run_until_blocked();

    let state = ctl.state();
    let river = state.discards(1);
    assert_eq!(river.len(), 2);
    assert!(river[0].sideways);
    assert!(!river[1].sideways);
    assert!(!state.discards(2)[0].sideways);
    assert_eq!(state.scores()[1], 24000);
    assert!(state.riichi(1));
    assert_eq!(state.kyotaku(), 1);
    assert_eq!(state.declaring_riichi(), None);
}

#[test]
fn pon_takes_the_discard_and_two_tiles() {
    let mut ctl = PlaybackController::new(
        log(&[
            r#"{"type":"tsumo","actor":2,"pai":"6m"}"#,
            r#"{"type":"dahai","actor":2,"pai":"3p","tsumogiri":false}"#,
            r#"{"type":"pon","actor":3,"target":2,"pai":"3p","consumed":["3p","3p"]}"#,
        ]),
        None,
    );
    ctl.run_until_blocked();

    let state = ctl.state();
    assert!(state.discards(2).is_empty());
    assert!(!state.hand(3).contains(&Tile::from("3p")));
    assert_eq!(state.hand(3).len(), 11);
    let meld = &state.melds(3)[0];
    assert_eq!(meld.from, Some(2));
    assert_eq!(meld.tiles.as_slice(), &[Tile::from("3p"), Tile::from("3p"), Tile::from("3p")]);
}

#[test]
fn human_seat_waits_for_matching_tile() {
    let mut ctl = PlaybackController::new(
        log(&[
            r#"{"type":"tsumo","actor":0,"pai":"5s"}"#,
            r#"{"type":"dahai","actor":0,"pai":"E","tsumogiri":false}"#,
            r#"{"type":"tsumo","actor":1,"pai":"1m"}"#,
        ]),
        Some(0),
    );
    let outcome = ctl.run_until_blocked();
    assert_eq!(
        outcome,
        StepOutcome::Awaiting {
            seat: 0,
            tile: Tile::from("E"),
        }
    );

    // Ticks do nothing while the gate is closed.
    let before = ctl.snapshot();
    for _ in 0..5 {
        ctl.tick();
    }
    assert_eq!(ctl.state(), &before);

    assert!(!ctl.submit_discard(&Tile::from("5s")));
    assert!(ctl.submit_discard(&Tile::from("E")));
    assert_eq!(ctl.run_until_blocked(), StepOutcome::Finished);
    assert_eq!(ctl.state().hand(1).len(), 14);
}

#[test]
fn pause_holds_position_until_resumed() {
    let mut ctl = PlaybackController::new(
        log(&[
            r#"{"type":"tsumo","actor":0,"pai":"5s"}"#,
            r#"{"type":"dahai","actor":0,"pai":"5s","tsumogiri":true}"#,
        ]),
        None,
    );
    ctl.pause();
    ctl.pause();
    assert_eq!(ctl.tick(), StepOutcome::Paused);
    assert_eq!(ctl.cursor(), 1);

    ctl.resume();
    assert_eq!(ctl.run_until_blocked(), StepOutcome::Finished);
}
