use arrayvec::ArrayVec;

use crate::types::{Piece, Variant, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Counters of successful actions over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SupplyStats {
    pub played: u32,
    pub reserved: u32,
    pub used_reserved: u32,
    pub inserted: u32,
}

/// Report printed when the player quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupplySummary {
    pub variant: Variant,
    /// Pieces that left the queue, by play or by reserve.
    pub pieces_drawn: u32,
    pub played: u32,
    pub reserved: u32,
    pub used_reserved: u32,
    pub inserted: u32,
    /// Pieces still sitting on the reserve stack.
    pub held_in_reserve: u32,
}

/// Copy of everything a renderer needs, detached from the controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SupplySnapshot<const Q: usize = QUEUE_CAPACITY, const R: usize = RESERVE_CAPACITY> {
    pub variant: Variant,
    /// Front (next to play) to back.
    pub queue: ArrayVec<Piece, Q>,
    /// Top (next to use) to base.
    pub reserve: ArrayVec<Piece, R>,
    pub reserve_enabled: bool,
    pub next_id: u32,
    pub stats: SupplyStats,
}

impl<const Q: usize, const R: usize> SupplySnapshot<Q, R> {
    pub fn clear(&mut self) {
        self.variant = Variant::default();
        self.queue.clear();
        self.reserve.clear();
        self.reserve_enabled = false;
        self.next_id = 0;
        self.stats = SupplyStats::default();
    }

    pub const fn queue_capacity(&self) -> usize {
        Q
    }

    pub const fn reserve_capacity(&self) -> usize {
        R
    }

    pub fn next_piece(&self) -> Option<Piece> {
        self.queue.first().copied()
    }

    pub fn top_reserved(&self) -> Option<Piece> {
        self.reserve.first().copied()
    }
}
