//! Log loading - line-delimited mjai JSON into typed events.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::types::Event;

/// Reasons a log cannot be opened for playback.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: not a valid mjai event: {source}")]
    Parse {
        /// 1-based line number in the log.
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("log has no start_kyoku event")]
    MissingStartKyoku,
    #[error("round {requested} requested but the log has {available} round(s)")]
    RoundOutOfRange { requested: usize, available: usize },
}

/// A parsed log with at least one `start_kyoku`.
#[derive(Debug, Clone)]
pub struct ReplayLog {
    events: Vec<Event>,
    /// Indices of every `start_kyoku` event, in log order.
    rounds: Vec<usize>,
}

impl ReplayLog {
    /// Parse line-delimited JSON. Blank lines are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use mjai_replay_core::ReplayLog;
    ///
    /// let text = r#"{"type":"start_game"}
    /// {"type":"start_kyoku","bakaze":"E","dora_marker":"1p","kyoku":1,"honba":0,"kyotaku":0,"oya":0,"scores":[25000,25000,25000,25000],"tehais":[[],[],[],[]]}
    /// {"type":"tsumo","actor":0,"pai":"5s"}
    /// "#;
    /// let log = ReplayLog::parse(text).unwrap();
    /// assert_eq!(log.len(), 3);
    /// assert_eq!(log.round_starts(), &[1]);
    /// ```
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let mut events = Vec::new();
        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let event = serde_json::from_str::<Event>(line)
                .map_err(|source| LoadError::Parse { line: n + 1, source })?;
            events.push(event);
        }
        Self::from_events(events)
    }

    /// Read and parse a log file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let log = Self::parse(&text)?;
        info!(
            path = %path.display(),
            events = log.len(),
            rounds = log.round_count(),
            "loaded mjai log"
        );
        Ok(log)
    }

    /// Wrap an already parsed event sequence.
    pub fn from_events(events: Vec<Event>) -> Result<Self, LoadError> {
        let rounds: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, ev)| ev.is_start_kyoku())
            .map(|(i, _)| i)
            .collect();
        if rounds.is_empty() {
            return Err(LoadError::MissingStartKyoku);
        }
        debug!(events = events.len(), rounds = rounds.len(), "indexed log");
        Ok(Self { events, rounds })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Event indices of each round's `start_kyoku`
    pub fn round_starts(&self) -> &[usize] {
        &self.rounds
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Event index of the `start_kyoku` opening round `round` (0-based).
    pub fn round_start(&self, round: usize) -> Result<usize, LoadError> {
        self.rounds
            .get(round)
            .copied()
            .ok_or(LoadError::RoundOutOfRange {
                requested: round,
                available: self.rounds.len(),
            })
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}
