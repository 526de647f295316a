//! End-to-end supply scenarios through the facade crate

use tetris_supply::core::{
    PieceFactory, ScriptedShapes, ShapeSampler, SimpleRng, SupplyController, SupplyEvent,
};
use tetris_supply::types::{Piece, PieceKind, SupplyAction, SupplyError, Variant};

fn scripted(variant: Variant) -> SupplyController<ScriptedShapes> {
    SupplyController::new(
        variant,
        PieceFactory::new(ScriptedShapes::parse("IOTL").unwrap()),
    )
}

fn queue_ids<S: ShapeSampler>(c: &SupplyController<S>) -> Vec<u32> {
    c.queue().iter().map(|p| p.id).collect()
}

fn stack_ids<S: ShapeSampler>(c: &SupplyController<S>) -> Vec<u32> {
    c.reserve_stack()
        .unwrap()
        .iter_top_to_base()
        .map(|p| p.id)
        .collect()
}

// ============== Advanced Variant ==============

#[test]
fn test_advanced_reference_scenario() {
    let mut c = scripted(Variant::Advanced);
    assert_eq!(queue_ids(&c), [0, 1, 2, 3, 4]);

    // Play takes id 0 and generates id 5.
    let played = c.apply(SupplyAction::Play).unwrap();
    assert_eq!(
        played,
        SupplyEvent::Played {
            piece: Piece::new(0, PieceKind::I),
            refill: Some(Piece::new(5, PieceKind::O)),
        }
    );
    assert_eq!(queue_ids(&c), [1, 2, 3, 4, 5]);

    // First reserve moves id 1 onto the stack.
    c.apply(SupplyAction::Reserve).unwrap();
    assert_eq!(stack_ids(&c), [1]);
    assert_eq!(queue_ids(&c), [2, 3, 4, 5, 6]);

    // Two more fill the stack.
    c.apply(SupplyAction::Reserve).unwrap();
    c.apply(SupplyAction::Reserve).unwrap();
    assert_eq!(stack_ids(&c), [3, 2, 1]);
    assert_eq!(c.reserve_stack().unwrap().peek_top().map(|p| p.id), Some(3));
    assert_eq!(queue_ids(&c), [4, 5, 6, 7, 8]);

    // A fourth reserve is refused and the queue is untouched.
    assert_eq!(c.apply(SupplyAction::Reserve), Err(SupplyError::StackFull));
    assert_eq!(queue_ids(&c), [4, 5, 6, 7, 8]);
    assert_eq!(c.queue().next_id(), 9);

    // Using a reserved piece pops id 3 and does not refill anything.
    let used = c.apply(SupplyAction::UseReserved).unwrap();
    assert_eq!(used.piece().id, 3);
    assert_eq!(stack_ids(&c), [2, 1]);
    assert_eq!(queue_ids(&c), [4, 5, 6, 7, 8]);
    assert_eq!(c.queue().next_id(), 9);
}

#[test]
fn test_draining_the_reserve() {
    let mut c = scripted(Variant::Advanced);
    for _ in 0..3 {
        c.apply(SupplyAction::Reserve).unwrap();
    }
    let used: Vec<u32> = (0..3)
        .map(|_| c.apply(SupplyAction::UseReserved).unwrap().piece().id)
        .collect();
    assert_eq!(used, [2, 1, 0]);

    for _ in 0..3 {
        assert_eq!(
            c.apply(SupplyAction::UseReserved),
            Err(SupplyError::StackEmpty)
        );
    }
    assert_eq!(stack_ids(&c), Vec::<u32>::new());
    assert!(c.queue().is_full());
}

#[test]
fn test_summary_after_mixed_session() {
    let mut c = scripted(Variant::Advanced);
    for action in [
        SupplyAction::Play,
        SupplyAction::Reserve,
        SupplyAction::Reserve,
        SupplyAction::UseReserved,
        SupplyAction::Play,
        SupplyAction::UseReserved,
        SupplyAction::UseReserved, // empty by now
    ] {
        let _ = c.apply(action);
    }
    let summary = c.summary();
    assert_eq!(summary.pieces_drawn, 4);
    assert_eq!(summary.played, 2);
    assert_eq!(summary.reserved, 2);
    assert_eq!(summary.used_reserved, 2);
    assert_eq!(summary.held_in_reserve, 0);
}

// ============== Basic Variant ==============

#[test]
fn test_basic_play_then_insert_is_rejected() {
    let mut c = scripted(Variant::Basic);
    assert!(c.reserve_stack().is_none());

    c.apply(SupplyAction::Play).unwrap();
    assert_eq!(queue_ids(&c), [1, 2, 3, 4, 5]);

    // Play already topped the queue up, so an explicit insert has no room.
    assert_eq!(c.apply(SupplyAction::Insert), Err(SupplyError::QueueFull));
    assert_eq!(queue_ids(&c), [1, 2, 3, 4, 5]);
}

#[test]
fn test_basic_offers_no_reserve() {
    let mut c = scripted(Variant::Basic);
    for action in [SupplyAction::Reserve, SupplyAction::UseReserved] {
        assert_eq!(
            c.apply(action),
            Err(SupplyError::Unavailable {
                action,
                variant: Variant::Basic
            })
        );
    }
    assert_eq!(queue_ids(&c), [0, 1, 2, 3, 4]);
    assert_eq!(c.stats().played, 0);
}

// ============== Custom Sizing ==============

#[test]
fn test_custom_capacities() {
    let mut c: SupplyController<SimpleRng, 3, 1> =
        SupplyController::advanced(PieceFactory::new(SimpleRng::new(9)));
    assert_eq!(c.queue().capacity(), 3);
    assert_eq!(c.reserve_stack().unwrap().capacity(), 1);

    c.reserve().unwrap();
    assert_eq!(c.reserve(), Err(SupplyError::StackFull));
    let ids: Vec<u32> = c.queue().iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn test_restricted_shape_set() {
    let factory = PieceFactory::with_shapes(SimpleRng::new(77), &[PieceKind::O]).unwrap();
    let mut c: SupplyController<SimpleRng> = SupplyController::advanced(factory);
    for _ in 0..20 {
        c.play().unwrap();
    }
    assert!(c.queue().iter().all(|p| p.kind == PieceKind::O));
}
