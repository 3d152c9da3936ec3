//! Playback controller - walks a cursor over the log and folds events in.
//!
//! The controller is driven by [`PlaybackController::tick`], which either a
//! pacing timer or a test calls. A tick applies at most one event. When the
//! next event is a discard by the human seat the controller stops and waits
//! for [`PlaybackController::submit_discard`] with the same tile.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::log::{LoadError, ReplayLog};
use crate::reducer::{anomalies, apply_event};
use crate::table::TableState;
use crate::types::{Event, Seat, Tile};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Timer callback token. Only ticks carrying the controller's own generation
/// are acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tick {
    pub generation: u64,
}

/// Whose turn it is and whether playback waits on input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gate {
    pub awaiting: bool,
    /// Actor of the next event, if it has one.
    pub seat: Option<Seat>,
    /// Tile the human seat must discard to continue.
    pub expected_tile: Option<Tile>,
}

/// Result of a single [`PlaybackController::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// One event was applied.
    Advanced,
    /// Stopped before a discard of the human seat.
    Awaiting { seat: Seat, tile: Tile },
    Paused,
    /// The cursor is past the last event.
    Finished,
}

impl StepOutcome {
    /// Whether the pacing timer should be armed again.
    pub fn rearm(&self) -> bool {
        matches!(self, StepOutcome::Advanced)
    }
}

#[derive(Debug, Clone)]
pub struct PlaybackController {
    generation: u64,
    events: Vec<Event>,
    /// Index of the next event to apply.
    cursor: usize,
    state: TableState,
    human_seat: Option<Seat>,
    paused: bool,
    reveal_all: bool,
    last_applied: Option<usize>,
}

impl PlaybackController {
    /// Open playback at the first round of the log.
    pub fn new(log: ReplayLog, human_seat: Option<Seat>) -> Self {
        let start = log.round_starts().first().copied().unwrap_or_default();
        Self::open(log, start, human_seat)
    }

    /// Open playback at round `round` (0-based) of the log.
    pub fn at_round(
        log: ReplayLog,
        round: usize,
        human_seat: Option<Seat>,
    ) -> Result<Self, LoadError> {
        let start = log.round_start(round)?;
        Ok(Self::open(log, start, human_seat))
    }

    fn open(log: ReplayLog, start: usize, human_seat: Option<Seat>) -> Self {
        let events = log.into_events();
        let state = events
            .get(start)
            .and_then(TableState::from_start_kyoku)
            .unwrap_or_default();
        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);

        info!(
            generation,
            start,
            kyoku = state.kyoku(),
            ?human_seat,
            "opened round"
        );

        Self {
            generation,
            events,
            cursor: start + 1,
            state,
            human_seat,
            paused: false,
            reveal_all: false,
            last_applied: Some(start),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn human_seat(&self) -> Option<Seat> {
        self.human_seat
    }

    /// Display-only flag; never affects the table state.
    pub fn reveal_all(&self) -> bool {
        self.reveal_all
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Owned copy of the current state for a renderer.
    pub fn snapshot(&self) -> TableState {
        self.state.clone()
    }

    /// The most recently applied event (the opening `start_kyoku` at first).
    pub fn last_event(&self) -> Option<&Event> {
        self.last_applied.and_then(|i| self.events.get(i))
    }

    /// The event the next tick would apply.
    pub fn pending_event(&self) -> Option<&Event> {
        self.events.get(self.cursor)
    }

    pub fn gate(&self) -> Gate {
        let Some(event) = self.events.get(self.cursor) else {
            return Gate::default();
        };
        match self.gated(event) {
            Some((seat, tile)) => Gate {
                awaiting: true,
                seat: Some(seat),
                expected_tile: Some(tile.clone()),
            },
            None => Gate {
                awaiting: false,
                seat: event.actor(),
                expected_tile: None,
            },
        }
    }

    /// Apply the next event unless paused, finished or gated.
    pub fn tick(&mut self) -> StepOutcome {
        if self.paused {
            return StepOutcome::Paused;
        }
        let Some(event) = self.events.get(self.cursor) else {
            return StepOutcome::Finished;
        };
        if let Some((seat, tile)) = self.gated(event) {
            debug!(cursor = self.cursor, seat, tile = %tile, "awaiting discard");
            return StepOutcome::Awaiting {
                seat,
                tile: tile.clone(),
            };
        }
        self.advance();
        StepOutcome::Advanced
    }

    /// Tick on behalf of a timer. Ticks from another controller's timer are
    /// ignored and return `None`.
    pub fn on_tick(&mut self, tick: Tick) -> Option<StepOutcome> {
        if tick.generation != self.generation {
            debug!(
                stale = tick.generation,
                current = self.generation,
                "ignoring stale tick"
            );
            return None;
        }
        Some(self.tick())
    }

    /// Tick until something other than `Advanced` comes back.
    pub fn run_until_blocked(&mut self) -> StepOutcome {
        loop {
            let outcome = self.tick();
            if outcome != StepOutcome::Advanced {
                return outcome;
            }
        }
    }

    /// Confirm the gated discard. Returns false, changing nothing, unless
    /// playback is waiting on exactly this tile.
    pub fn submit_discard(&mut self, tile: &Tile) -> bool {
        let accepted = self
            .events
            .get(self.cursor)
            .and_then(|event| self.gated(event))
            .is_some_and(|(_, expected)| expected == tile);

        if !accepted {
            debug!(cursor = self.cursor, tile = %tile, "rejected discard");
            return false;
        }
        self.advance();
        true
    }

    /// Idempotent.
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            info!(cursor = self.cursor, "paused");
        }
    }

    /// Idempotent.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            info!(cursor = self.cursor, "resumed");
        }
    }

    /// Returns the new paused value.
    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
        self.paused
    }

    /// Returns the new reveal value.
    pub fn toggle_reveal(&mut self) -> bool {
        self.reveal_all = !self.reveal_all;
        self.reveal_all
    }

    fn gated<'a>(&self, event: &'a Event) -> Option<(Seat, &'a Tile)> {
        match event {
            Event::Dahai { actor, pai, .. } if Some(*actor) == self.human_seat => {
                Some((*actor, pai))
            }
            _ => None,
        }
    }

    fn advance(&mut self) {
        let Some(event) = self.events.get(self.cursor) else {
            return;
        };

        for problem in anomalies(&self.state, event) {
            warn!(cursor = self.cursor, event = event.kind(), %problem, "malformed event");
        }

        let state = std::mem::take(&mut self.state);
        self.state = apply_event(state, event);
        self.last_applied = Some(self.cursor);
        self.cursor += 1;

        if event.is_start_kyoku() {
            info!(
                cursor = self.cursor,
                kyoku = self.state.kyoku(),
                honba = self.state.honba(),
                "next round"
            );
        }
    }
}
