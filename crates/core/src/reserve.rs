//! Reserve stack: pieces the player set aside, newest on top.

use arrayvec::ArrayVec;

use crate::types::{Piece, SupplyError, RESERVE_CAPACITY};

/// Bounded LIFO of reserved pieces. Purely passive: it never refills.
#[derive(Debug, Clone, Default)]
pub struct ReserveStack<const N: usize = RESERVE_CAPACITY> {
    pieces: ArrayVec<Piece, N>,
}

impl<const N: usize> ReserveStack<N> {
    pub fn new() -> Self {
        Self {
            pieces: ArrayVec::new(),
        }
    }

    pub fn push(&mut self, piece: Piece) -> Result<(), SupplyError> {
        self.pieces
            .try_push(piece)
            .map_err(|_| SupplyError::StackFull)?;
        log::trace!("reserve <- {piece} ({}/{N})", self.pieces.len());
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Piece, SupplyError> {
        let piece = self.pieces.pop().ok_or(SupplyError::StackEmpty)?;
        log::trace!("reserve -> {piece} ({}/{N})", self.pieces.len());
        Ok(piece)
    }

    pub fn peek_top(&self) -> Option<&Piece> {
        self.pieces.last()
    }

    /// Pieces from the top (most recent) down to the base.
    pub fn iter_top_to_base(&self) -> impl ExactSizeIterator<Item = &Piece> + '_ {
        self.pieces.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pieces.is_full()
    }
}
