//! Core replay logic - pure, deterministic, and testable
//!
//! This crate turns an ordered mjai event log into table states. It has
//! **no dependencies** on terminals, timers or async runtimes:
//!
//! - **Deterministic**: the same log always yields the same sequence of states
//! - **Lenient**: a malformed event skips the missing piece instead of aborting
//! - **Testable**: playback advances through an explicit [`PlaybackController::tick`]
//!
//! # Module Structure
//!
//! - [`tiles`]: canonical display order for hands, seat winds
//! - [`table`]: the [`TableState`] aggregate (hands, discards, melds, riichi, scores)
//! - [`reducer`]: [`apply_event`], the `(state, event) -> state` transition
//! - [`log`]: line-delimited JSON loading into a [`ReplayLog`]
//! - [`playback`]: [`PlaybackController`], cursor, pause and the human turn gate
//! - [`config`]: [`PlaybackConfig`] from environment variables
//!
//! # Event Handling
//!
//! | Event | Effect |
//! |-------|--------|
//! | `start_kyoku` | New table: sorted hands, empty piles and melds |
//! | `tsumo` | Drawn tile appended to the hand, unsorted |
//! | `dahai` | Tile removed, hand re-sorted, discard recorded |
//! | `reach` | Marks the seat's next discard as sideways |
//! | `reach_accepted` | 1000 points paid, riichi flag set, stick added |
//! | `chi` / `pon` / `daiminkan` | Consumed tiles leave the hand, target's last discard is claimed |
//! | `ankan` / `kakan` | Closed kan, pon upgraded to kan |
//! | `dora` | Indicator appended |
//! | others | No change |
//!
//! # Example
//!
//! ```
//! use mjai_replay_core::{PlaybackController, ReplayLog, StepOutcome};
//!
//! let text = r#"{"type":"start_kyoku","bakaze":"E","dora_marker":"1p","kyoku":1,"honba":0,"kyotaku":0,"oya":0,"scores":[25000,25000,25000,25000],"tehais":[["1m"],["2m"],["3m"],["4m"]]}
//! {"type":"tsumo","actor":0,"pai":"5s"}
//! {"type":"dahai","actor":0,"pai":"5s","tsumogiri":true}
//! "#;
//! let log = ReplayLog::parse(text).unwrap();
//!
//! // Seat 0 plays by hand.
//! let mut playback = PlaybackController::new(log, Some(0));
//! assert_eq!(playback.tick(), StepOutcome::Advanced);
//! assert!(matches!(playback.tick(), StepOutcome::Awaiting { seat: 0, .. }));
//!
//! assert!(playback.submit_discard(&"5s".into()));
//! assert_eq!(playback.state().discards(0).len(), 1);
//! assert_eq!(playback.tick(), StepOutcome::Finished);
//! ```

pub mod config;
pub mod log;
pub mod playback;
pub mod reducer;
pub mod table;
pub mod tiles;

pub use mjai_replay_types as types;

// Re-export commonly used types for convenience
pub use config::PlaybackConfig;
pub use log::{LoadError, ReplayLog};
pub use playback::{Gate, PlaybackController, StepOutcome, Tick};
pub use reducer::{anomalies, apply_event, MalformedEvent};
pub use table::{Discard, Meld, MeldKind, TableState};
pub use tiles::{compare_tiles, seat_wind, sort_tiles};
