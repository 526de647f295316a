//! Next-piece queue.
//!
//! A bounded FIFO of upcoming pieces that owns the run's id counter. The
//! queue can generate its own replacements through its [`PieceFactory`], but
//! it never does so on its own: refilling after a removal is the
//! controller's decision.

use crate::factory::PieceFactory;
use crate::ring::{Iter, RingBuffer};
use crate::rng::ShapeSampler;
use crate::types::{Piece, SupplyError, QUEUE_CAPACITY};

#[derive(Debug, Clone)]
pub struct PieceQueue<S, const N: usize = QUEUE_CAPACITY> {
    ring: RingBuffer<Piece, N>,
    factory: PieceFactory<S>,
    /// Id for the next generated piece; only ever increases between resets.
    next_id: u32,
}

impl<S: ShapeSampler, const N: usize> PieceQueue<S, N> {
    /// Create an empty queue. Call [`initialize`](Self::initialize) to fill it.
    pub fn new(factory: PieceFactory<S>) -> Self {
        Self {
            ring: RingBuffer::new(),
            factory,
            next_id: 0,
        }
    }

    /// Reset to empty and fill to capacity with ids `0..N`.
    pub fn initialize(&mut self) {
        self.ring.clear();
        self.next_id = 0;
        for _ in 0..N {
            // Cannot fail: the ring was just cleared and we push exactly N.
            if self.enqueue_generated().is_err() {
                break;
            }
        }
        log::trace!("queue initialized with {} pieces", self.ring.len());
    }

    /// Generate a piece with the next id and append it at the tail.
    ///
    /// A full queue is left untouched: no id is consumed and no shape is
    /// sampled.
    pub fn enqueue_generated(&mut self) -> Result<Piece, SupplyError> {
        if self.ring.is_full() {
            return Err(SupplyError::QueueFull);
        }
        let piece = self.factory.generate(self.next_id);
        self.ring
            .push_back(piece)
            .map_err(|_| SupplyError::QueueFull)?;
        self.next_id = self.next_id.wrapping_add(1);
        log::trace!("queue <- {piece} ({}/{N})", self.ring.len());
        Ok(piece)
    }

    /// Remove and return the head. Does not refill.
    pub fn dequeue(&mut self) -> Result<Piece, SupplyError> {
        let piece = self.ring.pop_front().ok_or(SupplyError::QueueEmpty)?;
        log::trace!("queue -> {piece} ({}/{N})", self.ring.len());
        Ok(piece)
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// The piece the next play would take.
    pub fn peek_front(&self) -> Option<&Piece> {
        self.ring.peek_front()
    }

    /// Pieces front to back.
    pub fn iter(&self) -> Iter<'_, Piece, N> {
        self.ring.iter()
    }

    /// Id the next generated piece will get.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}
