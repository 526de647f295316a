//! Property tests for the supply controller.
//!
//! Invariants covered, over random action sequences in both variants:
//! - Queue and reserve sizes never exceed their capacities.
//! - Every piece id ever observed is unique and ids are issued in order.
//! - A rejected action leaves the whole observable state unchanged.
//! - Play and Reserve keep a full queue full; Use-reserved never touches it.

use std::collections::HashSet;

use proptest::prelude::*;
use tetris_supply::core::{PieceFactory, SimpleRng, SupplyController};
use tetris_supply::types::{SupplyAction, Variant, QUEUE_CAPACITY, RESERVE_CAPACITY};

fn action_strategy() -> impl Strategy<Value = SupplyAction> {
    prop_oneof![
        Just(SupplyAction::Play),
        Just(SupplyAction::Reserve),
        Just(SupplyAction::UseReserved),
        Just(SupplyAction::Insert),
    ]
}

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Basic), Just(Variant::Advanced)]
}

proptest! {
    #[test]
    fn capacities_hold_and_ids_stay_unique(
        seed in any::<u32>(),
        variant in variant_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let mut c: SupplyController<SimpleRng> =
            SupplyController::new(variant, PieceFactory::new(SimpleRng::new(seed)));

        let mut seen: HashSet<u32> = c.queue().iter().map(|p| p.id).collect();
        let mut last_issued = c.queue().next_id();

        for action in actions {
            let before = c.snapshot();
            match c.apply(action) {
                Ok(event) => {
                    if let Some(refill) = event.refill() {
                        prop_assert_eq!(refill.id, last_issued);
                        prop_assert!(seen.insert(refill.id), "id {} issued twice", refill.id);
                    }
                    if action == SupplyAction::Insert {
                        prop_assert_eq!(event.piece().id, last_issued);
                        prop_assert!(seen.insert(event.piece().id));
                    }
                    if matches!(action, SupplyAction::Play | SupplyAction::Reserve) {
                        prop_assert_eq!(
                            before.queue.is_full(),
                            c.queue().is_full(),
                            "refill must restore a full queue"
                        );
                    }
                    if action == SupplyAction::UseReserved {
                        let after = c.snapshot();
                        prop_assert_eq!(before.queue.as_slice(), after.queue.as_slice());
                    }
                }
                Err(_) => {
                    prop_assert_eq!(&before, &c.snapshot(), "rejected {:?} mutated state", action);
                }
            }

            last_issued = c.queue().next_id();
            prop_assert!(c.queue().len() <= QUEUE_CAPACITY);
            if let Some(stack) = c.reserve_stack() {
                prop_assert!(stack.len() <= RESERVE_CAPACITY);
            }

            // Queue order is strictly increasing front to back.
            let ids: Vec<u32> = c.queue().iter().map(|p| p.id).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]), "queue out of order: {:?}", ids);
        }
    }

    #[test]
    fn failures_are_idempotent(repeats in 1usize..20) {
        let mut c: SupplyController<SimpleRng> =
            SupplyController::advanced(PieceFactory::new(SimpleRng::new(1)));
        let before = c.snapshot();
        for _ in 0..repeats {
            prop_assert!(c.apply(SupplyAction::UseReserved).is_err());
            prop_assert!(c.apply(SupplyAction::Insert).is_err());
        }
        prop_assert_eq!(before, c.snapshot());
    }
}
