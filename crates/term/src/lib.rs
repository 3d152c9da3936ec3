//! Terminal table renderer.
//!
//! Renders playback snapshots into a simple framebuffer that is flushed to the
//! terminal with `crossterm`. The view is pure and unit-tested; only
//! [`TerminalRenderer`] performs I/O.

pub mod fb;
pub mod renderer;
pub mod table_view;

pub use mjai_replay_core as core;
pub use mjai_replay_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use table_view::{describe, status_line, PlaybackView, TableView, Viewport};
