//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the piece supply.
//! All types are plain values with no I/O, making them usable in any context
//! (core logic, console rendering, the JSON journal).
//!
//! # Reference Sizing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces kept in the next queue |
//! | `RESERVE_CAPACITY` | 3 | Pieces the player may set aside |
//!
//! # Examples
//!
//! ```
//! use tetris_supply_types::{Piece, PieceKind, SupplyAction, Variant};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let piece = Piece::new(7, kind);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! assert!(Variant::Advanced.offers(SupplyAction::Reserve));
//! assert!(!Variant::Basic.offers(SupplyAction::Reserve));
//! ```

use std::fmt;

/// Next-queue capacity in the reference sizing (5 pieces)
pub const QUEUE_CAPACITY: usize = 5;

/// Reserve-stack capacity in the reference sizing (3 pieces)
pub const RESERVE_CAPACITY: usize = 3;


/// The piece shapes offered by the supply
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in the canonical draw-table order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Number of distinct kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Parse piece kind from string (case-insensitive, single symbol)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_supply_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("o"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("z"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'i' => Some(PieceKind::I),
            'o' => Some(PieceKind::O),
            't' => Some(PieceKind::T),
            'l' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Upper-case symbol used on the console.
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One drawable piece: an id plus its shape.
///
/// Ids come from a single counter and are never reused, so two pieces compare
/// equal only if they are the same piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: u32,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(id: u32, kind: PieceKind) -> Self {
        Self { id, kind }
    }
}

/// Console format: `[<shape> <id>]`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Deployment variant of the supply
///
/// - **Basic**: next queue only; the player may play or explicitly insert
/// - **Advanced**: next queue plus reserve stack; play, reserve, use reserved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    Basic,
    #[default]
    Advanced,
}

impl Variant {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "novice" => Some(Variant::Basic),
            "advanced" | "adventurer" => Some(Variant::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Advanced => "advanced",
        }
    }

    /// Whether this variant has a reserve stack.
    pub fn has_reserve(&self) -> bool {
        matches!(self, Variant::Advanced)
    }

    /// Whether `action` is part of this variant's command set.
    pub fn offers(&self, action: SupplyAction) -> bool {
        match action {
            SupplyAction::Play => true,
            SupplyAction::Insert => !self.has_reserve(),
            SupplyAction::Reserve | SupplyAction::UseReserved => self.has_reserve(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player actions that mutate the supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplyAction {
    /// Take the next piece out of the queue and refill it
    Play,
    /// Move the next piece onto the reserve stack and refill the queue
    Reserve,
    /// Consume the top reserved piece (no refill)
    UseReserved,
    /// Append a freshly generated piece to the queue
    Insert,
}

impl SupplyAction {
    /// snake_case name, as written to the journal
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplyAction::Play => "play",
            SupplyAction::Reserve => "reserve",
            SupplyAction::UseReserved => "use_reserved",
            SupplyAction::Insert => "insert",
        }
    }
}

impl fmt::Display for SupplyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected supply operation.
///
/// Every variant is an expected outcome of a player action on a bounded
/// structure. The operation that returns one has not mutated anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SupplyError {
    #[error("the queue is empty")]
    QueueEmpty,

    #[error("the queue is full")]
    QueueFull,

    #[error("the reserve stack is empty")]
    StackEmpty,

    #[error("the reserve stack is full")]
    StackFull,

    #[error("{action} is not available in the {variant} variant")]
    Unavailable {
        action: SupplyAction,
        variant: Variant,
    },

    #[error("the shape set must contain at least one piece kind")]
    EmptyShapeSet,
}

impl SupplyError {
    /// Stable snake_case code, as written to the journal
    pub fn code(&self) -> &'static str {
        match self {
            SupplyError::QueueEmpty => "queue_empty",
            SupplyError::QueueFull => "queue_full",
            SupplyError::StackEmpty => "stack_empty",
            SupplyError::StackFull => "stack_full",
            SupplyError::Unavailable { .. } => "unavailable",
            SupplyError::EmptyShapeSet => "empty_shape_set",
        }
    }
}
