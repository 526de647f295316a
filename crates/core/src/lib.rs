//! Core supply logic - pure, deterministic, and testable
//!
//! This crate holds the piece supply: the next queue, the reserve stack and
//! the controller that moves pieces between them. It has **zero dependencies**
//! on console, terminal or file I/O, making it:
//!
//! - **Deterministic**: same sampler seed produces the same pieces
//! - **Testable**: every capacity and ordering rule is unit tested
//! - **Allocation-free**: all storage is inline and sized by const generics
//!
//! # Module Structure
//!
//! - [`rng`]: shape sampling (`SimpleRng` LCG, `ScriptedShapes` for replays)
//! - [`factory`]: `PieceFactory`, id + sampled shape → piece
//! - [`ring`]: fixed-capacity ring buffer hiding the wraparound arithmetic
//! - [`queue`]: `PieceQueue`, the next-piece FIFO owning the id counter
//! - [`reserve`]: `ReserveStack`, the bounded LIFO of set-aside pieces
//! - [`supply`]: `SupplyController`, play / reserve / use-reserved / insert
//! - [`snapshot`]: copies of controller state for renderers and the journal
//!
//! # Rules
//!
//! - The queue holds at most 5 pieces, the reserve stack at most 3
//!   (reference sizing; both are const parameters).
//! - Ids come from one counter and are never reused.
//! - Play and Reserve refill the queue; using a reserved piece does not.
//! - A rejected action changes nothing.
//!
//! # Example
//!
//! ```
//! use tetris_supply_core::{PieceFactory, SimpleRng, SupplyController};
//! use tetris_supply_types::{SupplyAction, SupplyError};
//!
//! let mut supply: SupplyController<SimpleRng> =
//!     SupplyController::advanced(PieceFactory::new(SimpleRng::new(12345)));
//!
//! let played = supply.apply(SupplyAction::Play).unwrap();
//! assert_eq!(played.piece().id, 0);
//!
//! for _ in 0..3 {
//!     supply.apply(SupplyAction::Reserve).unwrap();
//! }
//! assert_eq!(
//!     supply.apply(SupplyAction::Reserve),
//!     Err(SupplyError::StackFull)
//! );
//! assert_eq!(supply.queue().len(), 5);
//! ```

pub mod factory;
pub mod queue;
pub mod reserve;
pub mod ring;
pub mod rng;
pub mod snapshot;
pub mod supply;

pub use tetris_supply_types as types;

// Re-export commonly used types for convenience
pub use factory::PieceFactory;
pub use queue::PieceQueue;
pub use reserve::ReserveStack;
pub use ring::RingBuffer;
pub use rng::{ScriptedShapes, ShapeSampler, SimpleRng};
pub use snapshot::{SupplySnapshot, SupplyStats, SupplySummary};
pub use supply::{SupplyController, SupplyEvent};
