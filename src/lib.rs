//! Tetris piece supply (workspace facade crate).
//!
//! This package exposes `tetris_supply::{core,input,term,types}` from the
//! dedicated crates under `crates/`, plus the console harness pieces that
//! only the binary needs: configuration, the JSONL journal and the menu loop.

pub use tetris_supply_core as core;
pub use tetris_supply_input as input;
pub use tetris_supply_term as term;
pub use tetris_supply_types as types;

pub mod config;
pub mod journal;
pub mod session;

pub use config::{parse_invocation, Invocation, SupplyConfig};
pub use journal::Journal;
pub use session::run_session;
