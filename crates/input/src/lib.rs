//! Terminal input module (viewer-facing).
//!
//! Maps `crossterm` key events into [`ViewerAction`]s and keeps the cursor the
//! human seat uses to choose a discard. Nothing here touches the table state;
//! the chosen tile is handed to the playback controller by the caller.

pub mod handler;
pub mod map;

pub use mjai_replay_types as types;

pub use handler::DiscardPicker;
pub use map::{handle_key_event, should_quit, ViewerAction};
