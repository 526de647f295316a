//! Piece factory: turns an id handed in by the caller into a piece.

use arrayvec::ArrayVec;

use crate::rng::ShapeSampler;
use crate::types::{Piece, PieceKind, SupplyError};

/// Builds pieces from caller-supplied ids.
///
/// The factory keeps no counter of its own; whoever owns the id sequence
/// (the queue) decides what id comes next. Each call consumes exactly one
/// sample from the shape source.
#[derive(Debug, Clone)]
pub struct PieceFactory<S> {
    sampler: S,
    shapes: ArrayVec<PieceKind, { PieceKind::COUNT }>,
}

impl<S: ShapeSampler> PieceFactory<S> {
    /// Factory drawing uniformly from every kind (`I`, `O`, `T`, `L`).
    pub fn new(sampler: S) -> Self {
        Self {
            sampler,
            shapes: PieceKind::ALL.into_iter().collect(),
        }
    }

    /// Factory restricted to a configured shape set.
    ///
    /// Duplicates are dropped so every listed kind keeps the same weight.
    pub fn with_shapes(sampler: S, shapes: &[PieceKind]) -> Result<Self, SupplyError> {
        let mut set: ArrayVec<PieceKind, { PieceKind::COUNT }> = ArrayVec::new();
        for &kind in shapes {
            if !set.contains(&kind) {
                set.push(kind);
            }
        }
        if set.is_empty() {
            return Err(SupplyError::EmptyShapeSet);
        }
        Ok(Self {
            sampler,
            shapes: set,
        })
    }

    /// Create the piece with the given id.
    pub fn generate(&mut self, id: u32) -> Piece {
        let kind = self.sampler.sample(&self.shapes);
        Piece::new(id, kind)
    }

    pub fn shapes(&self) -> &[PieceKind] {
        &self.shapes
    }
}
