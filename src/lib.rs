//! mjai log replayer (workspace facade crate).
//!
//! Re-exports the member crates as `mjai_replay::{core,input,pacer,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use mjai_replay_core as core;
pub use mjai_replay_input as input;
pub use mjai_replay_pacer as pacer;
pub use mjai_replay_term as term;
pub use mjai_replay_types as types;
