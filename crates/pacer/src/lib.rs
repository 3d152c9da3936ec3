//! Pacer - automatic playback on a tokio timer
//!
//! The core controller only moves when something calls `tick`. This crate
//! supplies that something for interactive use: a one-shot timer that is
//! re-armed after every applied event, so non-human actions play out at a
//! fixed pace.
//!
//! # Lifetime
//!
//! The timer task is owned by [`PlaybackTimer`]:
//!
//! - **Pause**: `disarm` aborts the pending task
//! - **New log**: `rebind` aborts the pending task, drops queued ticks and
//!   adopts the new controller's generation
//! - **Drop**: the pending task is aborted
//!
//! Every tick carries the generation of the controller it was armed for, and
//! the controller ignores ticks that are not its own, so a callback that races
//! a teardown cannot touch a replaced state.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use mjai_replay_core::{PlaybackController, ReplayLog};
//! use mjai_replay_pacer::PlaybackTimer;
//!
//! let rt = tokio::runtime::Runtime::new()?;
//! let log = ReplayLog::from_path("game.mjson")?;
//! let mut playback = PlaybackController::new(log, None);
//! let mut timer = PlaybackTimer::new(rt.handle().clone(), Duration::from_millis(300), playback.generation());
//!
//! loop {
//!     timer.pump(&mut playback);
//!     timer.sync(&playback);
//!     if playback.is_finished() {
//!         break;
//!     }
//!     std::thread::sleep(Duration::from_millis(16));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod timer;

pub use mjai_replay_core as core;
pub use mjai_replay_types as types;

pub use timer::PlaybackTimer;
