//! Playback configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MJAI_REPLAY_STEP_MS` | 500 | Delay between automatically applied events |
//! | `MJAI_REPLAY_HUMAN_SEAT` | unset | Seat (0-3) whose discards wait for input; unset or `none` plays every seat automatically |
//! | `MJAI_REPLAY_LOG_PATH` | unset | File that receives tracing output |

use std::time::Duration;

use crate::types::{seat_index, Seat, DEFAULT_STEP_MS, MIN_STEP_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub step_ms: u64,
    pub human_seat: Option<Seat>,
    pub log_path: Option<String>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_ms: DEFAULT_STEP_MS,
            human_seat: None,
            log_path: None,
        }
    }
}

impl PlaybackConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup. Unparsable values fall back to defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let step_ms = lookup("MJAI_REPLAY_STEP_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_STEP_MS);

        let human_seat = lookup("MJAI_REPLAY_HUMAN_SEAT").and_then(|s| parse_seat(&s));

        let log_path = lookup("MJAI_REPLAY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            step_ms,
            human_seat,
            log_path,
        }
    }

    /// Pacing interval, clamped to at least `MIN_STEP_MS`
    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms.max(MIN_STEP_MS))
    }
}

/// Parse a seat number; `none`, empty and out-of-range values yield `None`.
pub fn parse_seat(s: &str) -> Option<Seat> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("none") {
        return None;
    }
    let seat: Seat = s.parse().ok()?;
    seat_index(seat).map(|_| seat)
}
