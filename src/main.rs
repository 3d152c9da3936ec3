//! Terminal mjai replayer (default binary).
//!
//! Plays a log back at a fixed pace on a tokio timer and renders the table
//! with the framebuffer renderer. When a human seat is chosen, playback stops
//! at each of that seat's discards until the matching tile is submitted.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mjai_replay::core::config::parse_seat;
use mjai_replay::core::{PlaybackConfig, PlaybackController, ReplayLog};
use mjai_replay::input::{handle_key_event, should_quit, DiscardPicker, ViewerAction};
use mjai_replay::pacer::PlaybackTimer;
use mjai_replay::term::{FrameBuffer, PlaybackView, TableView, TerminalRenderer};

/// Frame interval while nothing else wakes the loop.
const FRAME_MS: u64 = 33;

#[derive(Parser, Debug)]
#[command(name = "mjai-replay", about = "Replay an mjai log in the terminal")]
struct Args {
    /// Line-delimited mjai JSON log
    log: PathBuf,
    /// Round to open (0-based)
    #[arg(long, default_value_t = 0)]
    round: usize,
    /// Seat played by you (0-3 or "none")
    #[arg(long)]
    seat: Option<String>,
    /// Pacing interval in milliseconds
    #[arg(long)]
    step_ms: Option<u64>,
    /// Start with every hand face up
    #[arg(long)]
    reveal: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = PlaybackConfig::from_env();
    if let Some(seat) = args.seat.as_deref() {
        config.human_seat = parse_seat(seat);
    }
    if let Some(step_ms) = args.step_ms {
        config.step_ms = step_ms;
    }
    init_tracing(config.log_path.as_deref())?;

    let log = ReplayLog::from_path(&args.log)
        .with_context(|| format!("loading {}", args.log.display()))?;
    let mut playback = PlaybackController::at_round(log.clone(), args.round, config.human_seat)?;
    if args.reveal {
        playback.toggle_reveal();
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let mut timer = PlaybackTimer::new(
        runtime.handle().clone(),
        config.step(),
        playback.generation(),
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut timer, log, playback);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    timer: &mut PlaybackTimer,
    log: ReplayLog,
    mut playback: PlaybackController,
) -> Result<()> {
    let view = TableView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut picker = DiscardPicker::new();
    let mut was_awaiting = false;

    loop {
        timer.pump(&mut playback);
        timer.sync(&playback);

        let gate = playback.gate();
        let human_hand_len = playback
            .human_seat()
            .map_or(0, |seat| playback.state().hand(seat).len());
        if gate.awaiting && !was_awaiting {
            picker.jump_to_drawn(human_hand_len);
        }
        was_awaiting = gate.awaiting;

        let viewport = TerminalRenderer::viewport()?;
        let cursor = picker.index(human_hand_len).filter(|_| gate.awaiting);
        view.render_into(&PlaybackView::from_controller(&playback, cursor), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(Duration::from_millis(FRAME_MS))? {
            continue;
        }
        let key = match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => key,
            TermEvent::Resize(..) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };
        if should_quit(key) {
            info!(cursor = playback.cursor(), "quit");
            return Ok(());
        }

        // Round the cursor is in, including rounds reached by playing on.
        let round = log
            .round_starts()
            .iter()
            .rposition(|&start| start < playback.cursor())
            .unwrap_or_default();

        match handle_key_event(key) {
            Some(ViewerAction::TogglePause) => {
                playback.toggle_pause();
            }
            Some(ViewerAction::ToggleReveal) => {
                playback.toggle_reveal();
            }
            Some(ViewerAction::CursorLeft) => picker.move_left(human_hand_len),
            Some(ViewerAction::CursorRight) => picker.move_right(human_hand_len),
            Some(ViewerAction::Confirm) => {
                let Some(seat) = playback.human_seat() else {
                    continue;
                };
                let Some(tile) = picker.selected(playback.state().hand(seat)).cloned() else {
                    continue;
                };
                if !playback.submit_discard(&tile) {
                    warn!(seat, tile = %tile, "discard rejected");
                }
            }
            Some(ViewerAction::NextRound) if round + 1 < log.round_count() => {
                playback = reopen(&log, round + 1, &playback)?;
            }
            Some(ViewerAction::PrevRound) if round > 0 => {
                playback = reopen(&log, round - 1, &playback)?;
            }
            _ => {}
        }
    }
}

/// Open `round` in a fresh controller carrying over the viewer settings.
fn reopen(log: &ReplayLog, round: usize, old: &PlaybackController) -> Result<PlaybackController> {
    let mut next = PlaybackController::at_round(log.clone(), round, old.human_seat())?;
    if old.reveal_all() {
        next.toggle_reveal();
    }
    Ok(next)
}
