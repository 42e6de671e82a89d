//! # Address Collisions
//!
//! With a hasher that maps every key to one digest, distinct owners and
//! records share an address. Each must stay retrievable, whatever the write
//! order.

#[cfg(test)]
mod tests {
    use crate::fixtures::{reading, update, ConstantHasher, Ledger};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_colliding_owners_in_both_orders() {
        for reverse in [false, true] {
            let ledger = Ledger::with_hasher(Arc::new(ConstantHasher));
            let mut actors = vec![ledger.actor(), ledger.actor()];
            if reverse {
                actors.reverse();
            }

            assert_eq!(
                ledger.addresser().owner_address(&actors[0].public_key()),
                ledger.addresser().owner_address(&actors[1].public_key())
            );

            for (i, actor) in actors.iter().enumerate() {
                ledger
                    .submit(&actor.builder.create_owner(&format!("owner-{i}"), 100).unwrap())
                    .await
                    .unwrap();
            }

            for (i, actor) in actors.iter().enumerate() {
                let owner = ledger.owner(&actor.public_key()).await.unwrap().unwrap();
                assert_eq!(owner.name, format!("owner-{i}"));
            }
            assert_eq!(ledger.context.snapshot().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_colliding_records_keep_independent_histories() {
        let ledger = Ledger::with_hasher(Arc::new(ConstantHasher));
        let alice = ledger.actor();
        ledger
            .submit(&alice.builder.create_owner("Alice", 1).unwrap())
            .await
            .unwrap();

        for id in ["R2", "R1"] {
            ledger
                .submit(&alice.builder.create_record(reading(id, "T", id), 2).unwrap())
                .await
                .unwrap();
        }
        ledger
            .submit(
                &alice
                    .builder
                    .update_record(update("R1", "moved", vec![0, 1, 0]), 3)
                    .unwrap(),
            )
            .await
            .unwrap();

        let r1 = ledger.record("R1").await.unwrap().unwrap();
        let r2 = ledger.record("R2").await.unwrap().unwrap();
        assert_eq!(r1.histories.len(), 2);
        assert_eq!(r2.histories.len(), 1);
        assert_eq!(r2.histories[0].situation, "R2");
    }

    #[tokio::test]
    async fn test_duplicate_check_is_per_key_not_per_address() {
        let ledger = Ledger::with_hasher(Arc::new(ConstantHasher));
        let alice = ledger.actor();
        let bob = ledger.actor();

        ledger
            .submit(&alice.builder.create_owner("Alice", 1).unwrap())
            .await
            .unwrap();
        // Same address, different key: not a duplicate.
        ledger
            .submit(&bob.builder.create_owner("Bob", 2).unwrap())
            .await
            .unwrap();

        assert!(ledger.owner(&alice.public_key()).await.unwrap().is_some());
        assert!(ledger.owner(&bob.public_key()).await.unwrap().is_some());
    }
}
