//! Console input module (harness-facing).
//!
//! This module is intentionally independent of any terminal library. It maps
//! a line typed at the menu prompt into a [`MenuCommand`] for the running
//! variant and exposes the menu table the renderer shows.

pub mod map;

pub use tetris_supply_types as types;

pub use map::{menu_entries, parse_command, valid_keys_hint, MenuCommand, MenuEntry};
