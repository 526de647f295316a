//! Supply controller - the player-facing actions
//!
//! One controller owns the run's queue and, in the advanced variant, its
//! reserve stack. Each action is a single step of checks, then mutation, then
//! the conditional refill. A failing check returns before anything changes.
//!
//! # Refill Policy
//!
//! | Action | Leaves | Queue refilled |
//! |--------|--------|----------------|
//! | Play | queue head | yes |
//! | Reserve | queue head → stack | yes |
//! | Use reserved | stack top | no |
//! | Insert | (adds to queue) | n/a |

use crate::factory::PieceFactory;
use crate::queue::PieceQueue;
use crate::reserve::ReserveStack;
use crate::rng::ShapeSampler;
use crate::snapshot::{SupplySnapshot, SupplyStats, SupplySummary};
use crate::types::{
    Piece, SupplyAction, SupplyError, Variant, QUEUE_CAPACITY, RESERVE_CAPACITY,
};

/// What a successful action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyEvent {
    /// `piece` left the queue; `refill` is the piece generated in its place.
    Played { piece: Piece, refill: Option<Piece> },
    /// `piece` moved from the queue onto the reserve stack.
    Reserved { piece: Piece, refill: Option<Piece> },
    /// `piece` came off the reserve stack and left the supply.
    UsedReserved { piece: Piece },
    /// `piece` was generated and appended to the queue.
    Inserted { piece: Piece },
}

impl SupplyEvent {
    pub fn action(&self) -> SupplyAction {
        match self {
            SupplyEvent::Played { .. } => SupplyAction::Play,
            SupplyEvent::Reserved { .. } => SupplyAction::Reserve,
            SupplyEvent::UsedReserved { .. } => SupplyAction::UseReserved,
            SupplyEvent::Inserted { .. } => SupplyAction::Insert,
        }
    }

    /// The piece the action was about.
    pub fn piece(&self) -> Piece {
        match *self {
            SupplyEvent::Played { piece, .. }
            | SupplyEvent::Reserved { piece, .. }
            | SupplyEvent::UsedReserved { piece }
            | SupplyEvent::Inserted { piece } => piece,
        }
    }

    /// The replacement generated by the refill policy, if any.
    pub fn refill(&self) -> Option<Piece> {
        match *self {
            SupplyEvent::Played { refill, .. } | SupplyEvent::Reserved { refill, .. } => refill,
            SupplyEvent::UsedReserved { .. } | SupplyEvent::Inserted { .. } => None,
        }
    }
}

/// Orchestrates play / reserve / use-reserved / insert over one queue and an
/// optional reserve stack.
#[derive(Debug, Clone)]
pub struct SupplyController<S, const Q: usize = QUEUE_CAPACITY, const R: usize = RESERVE_CAPACITY>
{
    variant: Variant,
    queue: PieceQueue<S, Q>,
    reserve: Option<ReserveStack<R>>,
    stats: SupplyStats,
}

impl<S: ShapeSampler, const Q: usize, const R: usize> SupplyController<S, Q, R> {
    /// Build a controller for `variant` and fill the queue.
    pub fn new(variant: Variant, factory: PieceFactory<S>) -> Self {
        let mut queue = PieceQueue::new(factory);
        queue.initialize();
        let reserve = variant.has_reserve().then(ReserveStack::new);
        log::debug!(
            "supply ready: variant={variant} queue={}/{Q} reserve={}",
            queue.len(),
            if reserve.is_some() { R } else { 0 }
        );
        Self {
            variant,
            queue,
            reserve,
            stats: SupplyStats::default(),
        }
    }

    /// Advanced-variant controller (queue + reserve stack).
    pub fn advanced(factory: PieceFactory<S>) -> Self {
        Self::new(Variant::Advanced, factory)
    }

    /// Basic-variant controller (queue only).
    pub fn basic(factory: PieceFactory<S>) -> Self {
        Self::new(Variant::Basic, factory)
    }

    /// Run `action` if this variant offers it.
    pub fn apply(&mut self, action: SupplyAction) -> Result<SupplyEvent, SupplyError> {
        if !self.variant.offers(action) {
            let err = SupplyError::Unavailable {
                action,
                variant: self.variant,
            };
            log::debug!("{action} rejected: {err}");
            return Err(err);
        }
        let result = match action {
            SupplyAction::Play => self.play(),
            SupplyAction::Reserve => self.reserve(),
            SupplyAction::UseReserved => self.use_reserved(),
            SupplyAction::Insert => self.insert(),
        };
        match &result {
            Ok(event) => log::debug!("{action}: {}", event.piece()),
            Err(err) => log::debug!("{action} rejected: {err}"),
        }
        result
    }

    /// Take the head of the queue, then top the queue back up.
    pub fn play(&mut self) -> Result<SupplyEvent, SupplyError> {
        let piece = self.queue.dequeue()?;
        let refill = self.refill()?;
        self.stats.played += 1;
        Ok(SupplyEvent::Played { piece, refill })
    }

    /// Move the head of the queue onto the reserve stack, then top the queue
    /// back up.
    pub fn reserve(&mut self) -> Result<SupplyEvent, SupplyError> {
        let variant = self.variant;
        let Some(stack) = self.reserve.as_mut() else {
            return Err(SupplyError::Unavailable {
                action: SupplyAction::Reserve,
                variant,
            });
        };
        if self.queue.is_empty() {
            return Err(SupplyError::QueueEmpty);
        }
        // Checked before the dequeue so a full stack leaves the queue intact.
        if stack.is_full() {
            return Err(SupplyError::StackFull);
        }
        let piece = self.queue.dequeue()?;
        stack.push(piece)?;
        let refill = self.refill()?;
        self.stats.reserved += 1;
        Ok(SupplyEvent::Reserved { piece, refill })
    }

    /// Consume the top reserved piece. The queue is not refilled.
    pub fn use_reserved(&mut self) -> Result<SupplyEvent, SupplyError> {
        let variant = self.variant;
        let stack = self.reserve.as_mut().ok_or(SupplyError::Unavailable {
            action: SupplyAction::UseReserved,
            variant,
        })?;
        let piece = stack.pop()?;
        self.stats.used_reserved += 1;
        Ok(SupplyEvent::UsedReserved { piece })
    }

    /// Explicitly append a generated piece; rejected when the queue is full.
    pub fn insert(&mut self) -> Result<SupplyEvent, SupplyError> {
        let piece = self.queue.enqueue_generated()?;
        self.stats.inserted += 1;
        Ok(SupplyEvent::Inserted { piece })
    }

    /// Generate one replacement if the queue dropped below capacity.
    fn refill(&mut self) -> Result<Option<Piece>, SupplyError> {
        if self.queue.is_full() {
            return Ok(None);
        }
        self.queue.enqueue_generated().map(Some)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn queue(&self) -> &PieceQueue<S, Q> {
        &self.queue
    }

    /// `None` in the basic variant.
    pub fn reserve_stack(&self) -> Option<&ReserveStack<R>> {
        self.reserve.as_ref()
    }

    pub fn stats(&self) -> SupplyStats {
        self.stats
    }

    /// End-of-run report.
    pub fn summary(&self) -> SupplySummary {
        let queue_len = self.queue.len() as u32;
        SupplySummary {
            variant: self.variant,
            // Every id ever issued is either still queued or left through
            // play/reserve.
            pieces_drawn: self.queue.next_id().saturating_sub(queue_len),
            played: self.stats.played,
            reserved: self.stats.reserved,
            used_reserved: self.stats.used_reserved,
            inserted: self.stats.inserted,
            held_in_reserve: self.reserve.as_ref().map_or(0, |s| s.len() as u32),
        }
    }

    /// Copy the observable state into `out` without allocating.
    pub fn snapshot_into(&self, out: &mut SupplySnapshot<Q, R>) {
        out.clear();
        out.variant = self.variant;
        out.queue.extend(self.queue.iter().copied());
        out.reserve_enabled = self.reserve.is_some();
        if let Some(stack) = &self.reserve {
            out.reserve.extend(stack.iter_top_to_base().copied());
        }
        out.next_id = self.queue.next_id();
        out.stats = self.stats;
    }

    pub fn snapshot(&self) -> SupplySnapshot<Q, R> {
        let mut out = SupplySnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedShapes, SimpleRng};
    use crate::types::PieceKind;

    fn advanced() -> SupplyController<SimpleRng> {
        SupplyController::advanced(PieceFactory::new(SimpleRng::new(12345)))
    }

    fn basic() -> SupplyController<SimpleRng> {
        SupplyController::basic(PieceFactory::new(SimpleRng::new(12345)))
    }

    fn queue_ids<S: ShapeSampler, const Q: usize, const R: usize>(
        c: &SupplyController<S, Q, R>,
    ) -> Vec<u32> {
        c.queue().iter().map(|p| p.id).collect()
    }

    fn stack_ids<S: ShapeSampler, const Q: usize, const R: usize>(
        c: &SupplyController<S, Q, R>,
    ) -> Vec<u32> {
        c.reserve_stack()
            .map(|s| s.iter_top_to_base().map(|p| p.id).collect())
            .unwrap_or_default()
    }

    #[test]
    fn new_controller_starts_full() {
        let c = advanced();
        assert_eq!(queue_ids(&c), [0, 1, 2, 3, 4]);
        assert!(c.reserve_stack().unwrap().is_empty());
        assert!(basic().reserve_stack().is_none());
    }

    #[test]
    fn play_refills_to_capacity() {
        let mut c = advanced();
        let event = c.play().unwrap();
        assert_eq!(event.piece().id, 0);
        assert_eq!(event.refill().map(|p| p.id), Some(5));
        assert_eq!(queue_ids(&c), [1, 2, 3, 4, 5]);
        assert_eq!(c.stats().played, 1);
    }

    #[test]
    fn reserve_moves_head_and_refills() {
        let mut c = advanced();
        let event = c.reserve().unwrap();
        assert!(matches!(event, SupplyEvent::Reserved { .. }));
        assert_eq!(event.piece().id, 0);
        assert_eq!(stack_ids(&c), [0]);
        assert_eq!(queue_ids(&c), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn reserve_with_full_stack_leaves_queue_untouched() {
        let mut c = advanced();
        for _ in 0..RESERVE_CAPACITY {
            c.reserve().unwrap();
        }
        let before = queue_ids(&c);
        let next_id = c.queue().next_id();

        assert_eq!(c.reserve(), Err(SupplyError::StackFull));
        assert_eq!(queue_ids(&c), before);
        assert_eq!(c.queue().next_id(), next_id);
        assert_eq!(stack_ids(&c), [2, 1, 0]);
        assert_eq!(c.stats().reserved, RESERVE_CAPACITY as u32);
    }

    #[test]
    fn use_reserved_does_not_refill() {
        let mut c = advanced();
        c.reserve().unwrap();
        c.reserve().unwrap();
        let before = queue_ids(&c);

        let event = c.use_reserved().unwrap();
        assert_eq!(event, SupplyEvent::UsedReserved { piece: event.piece() });
        assert_eq!(event.piece().id, 1);
        assert_eq!(event.refill(), None);
        assert_eq!(queue_ids(&c), before);
        assert_eq!(stack_ids(&c), [0]);
    }

    #[test]
    fn use_reserved_on_empty_stack_is_rejected() {
        let mut c = advanced();
        for _ in 0..3 {
            assert_eq!(c.use_reserved(), Err(SupplyError::StackEmpty));
        }
        assert_eq!(c.stats(), SupplyStats::default());
        assert_eq!(queue_ids(&c), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn insert_on_full_queue_is_rejected() {
        let mut c = basic();
        assert_eq!(c.insert(), Err(SupplyError::QueueFull));
        assert_eq!(c.queue().next_id(), 5);
        assert_eq!(c.stats().inserted, 0);
    }

    #[test]
    fn basic_play_also_refills() {
        let mut c = basic();
        c.play().unwrap();
        assert!(c.queue().is_full());
        assert_eq!(c.insert(), Err(SupplyError::QueueFull));
    }

    #[test]
    fn apply_rejects_actions_outside_the_variant() {
        let mut b = basic();
        assert_eq!(
            b.apply(SupplyAction::Reserve),
            Err(SupplyError::Unavailable {
                action: SupplyAction::Reserve,
                variant: Variant::Basic,
            })
        );
        assert!(matches!(
            b.apply(SupplyAction::UseReserved),
            Err(SupplyError::Unavailable { .. })
        ));
        assert_eq!(queue_ids(&b), [0, 1, 2, 3, 4]);

        let mut a = advanced();
        assert!(matches!(
            a.apply(SupplyAction::Insert),
            Err(SupplyError::Unavailable { .. })
        ));
        assert!(a.apply(SupplyAction::Play).is_ok());
    }

    #[test]
    fn direct_reserve_calls_on_basic_are_rejected() {
        let mut b = basic();
        assert!(matches!(b.reserve(), Err(SupplyError::Unavailable { .. })));
        assert!(matches!(b.use_reserved(), Err(SupplyError::Unavailable { .. })));
        assert_eq!(queue_ids(&b), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn summary_counts_pieces_that_left_the_queue() {
        let mut c = advanced();
        c.play().unwrap();
        c.play().unwrap();
        c.reserve().unwrap();
        c.use_reserved().unwrap();
        c.reserve().unwrap();

        let summary = c.summary();
        assert_eq!(summary.pieces_drawn, 4);
        assert_eq!(summary.played, 2);
        assert_eq!(summary.reserved, 2);
        assert_eq!(summary.used_reserved, 1);
        assert_eq!(summary.held_in_reserve, 1);
    }

    #[test]
    fn snapshot_mirrors_controller() {
        let mut c: SupplyController<ScriptedShapes> =
            SupplyController::advanced(PieceFactory::new(ScriptedShapes::parse("IOTL").unwrap()));
        c.reserve().unwrap();
        let snap = c.snapshot();
        assert_eq!(snap.variant, Variant::Advanced);
        assert_eq!(snap.queue.iter().map(|p| p.id).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
        assert_eq!(snap.reserve.as_slice(), &[Piece::new(0, PieceKind::I)]);
        assert!(snap.reserve_enabled);
        assert_eq!(snap.next_id, 6);
        assert_eq!(snap.next_piece(), Some(Piece::new(1, PieceKind::O)));
    }

    #[test]
    fn tiny_capacities_still_hold_invariants() {
        let mut c: SupplyController<SimpleRng, 1, 1> =
            SupplyController::advanced(PieceFactory::new(SimpleRng::new(2)));
        assert_eq!(c.reserve().unwrap().piece().id, 0);
        assert_eq!(c.reserve(), Err(SupplyError::StackFull));
        assert_eq!(c.play().unwrap().piece().id, 1);
        assert_eq!(queue_ids(&c), [2]);
    }

    #[test]
    fn play_on_empty_queue_changes_nothing() {
        let mut c: SupplyController<SimpleRng, 0, 1> =
            SupplyController::advanced(PieceFactory::new(SimpleRng::new(3)));
        let before = c.snapshot();
        for _ in 0..3 {
            assert_eq!(c.apply(SupplyAction::Play), Err(SupplyError::QueueEmpty));
        }
        assert_eq!(c.snapshot(), before);
        assert_eq!(c.stats(), SupplyStats::default());
    }

    #[test]
    fn reserve_on_empty_queue_reports_queue_empty() {
        let mut c: SupplyController<SimpleRng, 0, 1> =
            SupplyController::advanced(PieceFactory::new(SimpleRng::new(3)));
        let before = c.snapshot();
        assert_eq!(c.apply(SupplyAction::Reserve), Err(SupplyError::QueueEmpty));
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn queue_empty_is_reported_before_stack_full() {
        // A zero-slot stack is full from the start.
        let mut c: SupplyController<SimpleRng, 0, 0> =
            SupplyController::advanced(PieceFactory::new(SimpleRng::new(3)));
        assert!(c.reserve_stack().unwrap().is_full());
        let before = c.snapshot();
        assert_eq!(c.apply(SupplyAction::Reserve), Err(SupplyError::QueueEmpty));
        assert_eq!(c.snapshot(), before);
    }
}
