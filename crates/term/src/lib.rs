//! Console rendering module.
//!
//! This is a small rendering layer for the line-oriented supply console.
//! Views turn supply snapshots into styled [`Frame`]s without touching any
//! stream; the [`ConsoleRenderer`] encodes frames with crossterm and flushes
//! them.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the `[<shape> <id>]` piece format stable for downstream consumers
//! - Allow colour to be switched off without changing the text

pub mod renderer;
pub mod supply_view;
pub mod text;

pub use tetris_supply_core as core;
pub use tetris_supply_input as input;
pub use tetris_supply_types as types;

pub use renderer::{encode_frame_into, encode_line_into, ConsoleRenderer};
pub use supply_view::SupplyView;
pub use text::{piece_color, Frame, Line, Rgb, Span, SpanStyle};
