//! RNG module - shape sampling for new pieces
//!
//! The factory never touches a random source directly; it asks a
//! [`ShapeSampler`] for the next kind. Production uses [`SimpleRng`], a small
//! LCG seeded once per run. Tests and scripted sessions use
//! [`ScriptedShapes`], which replays a fixed sequence.

use crate::types::PieceKind;

/// Source of piece shapes.
pub trait ShapeSampler {
    /// Pick one kind out of `shapes`. Callers never pass an empty slice.
    fn sample(&mut self, shapes: &[PieceKind]) -> PieceKind;
}

impl<S: ShapeSampler + ?Sized> ShapeSampler for Box<S> {
    fn sample(&mut self, shapes: &[PieceKind]) -> PieceKind {
        (**self).sample(shapes)
    }
}

impl<S: ShapeSampler + ?Sized> ShapeSampler for &mut S {
    fn sample(&mut self, shapes: &[PieceKind]) -> PieceKind {
        (**self).sample(shapes)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock, for runs without a configured seed.
    pub fn from_time() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(1);
        // Fold the 128-bit timestamp so sub-second changes still matter.
        Self::new((nanos ^ (nanos >> 32)) as u32)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }
}

impl ShapeSampler for SimpleRng {
    fn sample(&mut self, shapes: &[PieceKind]) -> PieceKind {
        let idx = self.next_range(shapes.len() as u32) as usize;
        shapes[idx]
    }
}

/// Deterministic sampler replaying a fixed sequence of kinds, wrapping around.
///
/// Kinds outside the factory's shape set are still returned as scripted; an
/// empty script falls back to the first kind of the set.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    script: Vec<PieceKind>,
    pos: usize,
}

impl ScriptedShapes {
    pub fn new(script: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            script: script.into(),
            pos: 0,
        }
    }

    /// Parse a script such as `"TOLI"`; `None` if any symbol is not a kind.
    pub fn parse(s: &str) -> Option<Self> {
        let script = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(PieceKind::from_char)
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(script))
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

impl ShapeSampler for ScriptedShapes {
    fn sample(&mut self, shapes: &[PieceKind]) -> PieceKind {
        let Some(&kind) = self.script.get(self.pos) else {
            return shapes[0];
        };
        self.pos = (self.pos + 1) % self.script.len();
        kind
    }
}
