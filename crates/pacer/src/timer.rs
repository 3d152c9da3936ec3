//! Re-armable one-shot timer delivering [`Tick`]s over a channel.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::core::{PlaybackController, StepOutcome, Tick};

/// Owns at most one pending timer task.
pub struct PlaybackTimer {
    handle: Handle,
    step: Duration,
    generation: u64,
    tx: mpsc::UnboundedSender<Tick>,
    rx: mpsc::UnboundedReceiver<Tick>,
    pending: Option<JoinHandle<()>>,
    /// Set on arm, cleared when the tick is consumed or the timer disarmed.
    armed: bool,
}

impl PlaybackTimer {
    pub fn new(handle: Handle, step: Duration, generation: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            step,
            generation,
            tx,
            rx,
            pending: None,
            armed: false,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Takes effect from the next `arm`.
    pub fn set_step(&mut self, step: Duration) {
        self.step = step;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Schedule one tick after the pacing interval, replacing any pending one.
    pub fn arm(&mut self) {
        self.abort_pending();

        let tx = self.tx.clone();
        let step = self.step;
        let tick = Tick {
            generation: self.generation,
        };
        self.pending = Some(self.handle.spawn(async move {
            tokio::time::sleep(step).await;
            let _ = tx.send(tick);
        }));
        self.armed = true;
        trace!(generation = self.generation, ?step, "timer armed");
    }

    /// Cancel the pending tick, if any.
    pub fn disarm(&mut self) {
        if self.armed {
            trace!(generation = self.generation, "timer disarmed");
        }
        self.abort_pending();
        self.armed = false;
    }

    /// Hand the timer to a new controller. Pending and queued ticks of the
    /// previous one are dropped.
    pub fn rebind(&mut self, generation: u64) {
        self.disarm();
        while self.rx.try_recv().is_ok() {}
        debug!(from = self.generation, to = generation, "timer rebound");
        self.generation = generation;
    }

    /// Next queued tick, without waiting.
    pub fn try_recv(&mut self) -> Option<Tick> {
        let tick = self.rx.try_recv().ok()?;
        self.armed = false;
        Some(tick)
    }

    /// Wait for the next tick.
    pub async fn recv(&mut self) -> Option<Tick> {
        let tick = self.rx.recv().await?;
        self.armed = false;
        Some(tick)
    }

    /// Feed queued ticks to `playback`, re-arming after each applied event.
    ///
    /// Returns the outcome of the last tick the controller accepted.
    pub fn pump(&mut self, playback: &mut PlaybackController) -> Option<StepOutcome> {
        let mut last = None;
        while let Some(tick) = self.try_recv() {
            let Some(outcome) = playback.on_tick(tick) else {
                continue;
            };
            if outcome.rearm() {
                self.arm();
            }
            last = Some(outcome);
        }
        last
    }

    /// Arm or disarm to match the controller: run while it is neither
    /// paused, finished nor waiting on the human seat.
    pub fn sync(&mut self, playback: &PlaybackController) {
        if playback.generation() != self.generation {
            self.rebind(playback.generation());
        }

        let runnable =
            !playback.is_paused() && !playback.is_finished() && !playback.gate().awaiting;
        if !runnable {
            self.disarm();
        } else if !self.armed {
            self.arm();
        }
    }

    fn abort_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for PlaybackTimer {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
