use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mjai_replay::core::{apply_event, sort_tiles, PlaybackController, ReplayLog, TableState};
use mjai_replay::term::{FrameBuffer, PlaybackView, TableView, Viewport};
use mjai_replay::types::{Event, Tile};

const SUITS: [&str; 3] = ["m", "p", "s"];

/// A round where every seat draws and discards the same tile 18 times.
fn synthetic_log() -> ReplayLog {
    let hand = |seat: usize| -> Vec<String> {
        (0..13)
            .map(|i| format!("{}{}", i % 9 + 1, SUITS[(i + seat) % 3]))
            .collect()
    };
    let start = serde_json::json!({
        "type": "start_kyoku",
        "bakaze": "E",
        "kyoku": 1,
        "honba": 0,
        "kyotaku": 0,
        "oya": 0,
        "scores": [25000, 25000, 25000, 25000],
        "dora_marker": "1p",
        "tehais": [hand(0), hand(1), hand(2), hand(3)],
    });

    let mut lines = vec![start.to_string()];
    for turn in 0..72 {
        let actor = turn % 4;
        let pai = format!("{}{}", turn % 9 + 1, SUITS[turn % 3]);
        lines.push(serde_json::json!({"type": "tsumo", "actor": actor, "pai": pai}).to_string());
        lines.push(
            serde_json::json!({"type": "dahai", "actor": actor, "pai": pai, "tsumogiri": true})
                .to_string(),
        );
    }
    lines.push(r#"{"type":"ryukyoku"}"#.to_string());
    lines.push(r#"{"type":"end_kyoku"}"#.to_string());
    ReplayLog::parse(&lines.join("\n")).unwrap()
}

fn bench_parse(c: &mut Criterion) {
    let text: String = synthetic_log()
        .events()
        .iter()
        .map(|e| serde_json::to_string(e).unwrap() + "\n")
        .collect();

    c.bench_function("parse_round", |b| {
        b.iter(|| ReplayLog::parse(black_box(&text)).unwrap())
    });
}

fn bench_reduce(c: &mut Criterion) {
    let log = synthetic_log();
    let events: &[Event] = log.events();

    c.bench_function("reduce_round", |b| {
        b.iter(|| {
            events
                .iter()
                .fold(TableState::default(), |state, e| apply_event(state, black_box(e)))
        })
    });
}

fn bench_playback(c: &mut Criterion) {
    let log = synthetic_log();

    c.bench_function("playback_round", |b| {
        b.iter(|| {
            let mut ctl = PlaybackController::new(log.clone(), None);
            ctl.run_until_blocked()
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let tiles: Vec<Tile> = ["E", "9s", "5mr", "1p", "C", "5m", "3s", "?", "2m", "N", "7p", "5s", "F", "1m"]
        .into_iter()
        .map(Tile::from)
        .collect();

    c.bench_function("sort_hand", |b| b.iter(|| sort_tiles(black_box(&tiles))));
}

fn bench_render(c: &mut Criterion) {
    let mut ctl = PlaybackController::new(synthetic_log(), None);
    ctl.run_until_blocked();
    let view = TableView::new();
    let mut fb = FrameBuffer::new(100, 40);

    c.bench_function("render_table", |b| {
        b.iter(|| {
            view.render_into(
                &PlaybackView::from_controller(&ctl, None),
                Viewport::new(100, 40),
                &mut fb,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_reduce,
    bench_playback,
    bench_sort,
    bench_render
);
criterion_main!(benches);
