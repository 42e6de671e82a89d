//! # Atomicity
//!
//! A rejected transaction leaves state bit-for-bit unchanged, and an
//! accepted one issues exactly one write.

#[cfg(test)]
mod tests {
    use crate::fixtures::{reading, update, Ledger};
    use pn_02_transaction_processor::prelude::*;
    use shared_types::{Action, PnrdPayload};

    #[tokio::test]
    async fn test_rejections_write_nothing() {
        let ledger = Ledger::new();
        let alice = ledger.actor();
        let bob = ledger.actor();

        ledger
            .submit(&alice.builder.create_owner("Alice", 1).unwrap())
            .await
            .unwrap();
        ledger
            .submit(&alice.builder.create_record(reading("R1", "T1", "x"), 2).unwrap())
            .await
            .unwrap();

        let before = ledger.context.snapshot();
        let writes = ledger.context.write_count();

        let rejected = vec![
            // Duplicate owner.
            alice.builder.create_owner("Alice again", 3).unwrap(),
            // Unregistered signer.
            bob.builder.create_record(reading("R2", "T2", "x"), 3).unwrap(),
            // Duplicate record id.
            alice.builder.create_record(reading("R1", "T9", "x"), 3).unwrap(),
            // Empty tag.
            alice.builder.create_record(reading("R3", "", "x"), 3).unwrap(),
            // Empty record id.
            alice.builder.create_record(reading("", "T3", "x"), 3).unwrap(),
            // Unregistered receiver.
            alice
                .builder
                .transfer_record("R1", &bob.public_key(), 3)
                .unwrap(),
            // Missing record.
            alice
                .builder
                .update_record(update("R404", "x", vec![1]), 3)
                .unwrap(),
            // Not the owner.
            bob.builder
                .update_record(update("R1", "x", vec![1]), 3)
                .unwrap(),
        ];

        for batch in &rejected {
            let err = ledger.submit(batch).await.unwrap_err();
            assert!(err.is_invalid_transaction(), "unexpected error: {err}");
        }

        assert_eq!(ledger.context.snapshot(), before);
        assert_eq!(ledger.context.write_count(), writes);
    }

    #[tokio::test]
    async fn test_duplicate_owner_keeps_original_entry() {
        let ledger = Ledger::new();
        let alice = ledger.actor();

        ledger
            .submit(&alice.builder.create_owner("Alice", 10).unwrap())
            .await
            .unwrap();
        let err = ledger
            .submit(&alice.builder.create_owner("Mallory", 11).unwrap())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let owner = ledger.owner(&alice.public_key()).await.unwrap().unwrap();
        assert_eq!(owner.name, "Alice");
        assert_eq!(owner.timestamp, 10);
    }

    #[tokio::test]
    async fn test_transfer_records_the_receiving_owner_key() {
        let ledger = Ledger::new();
        let alice = ledger.actor();
        let bob = ledger.actor();

        for (actor, name) in [(&alice, "Alice"), (&bob, "Bob")] {
            ledger
                .submit(&actor.builder.create_owner(name, 1).unwrap())
                .await
                .unwrap();
        }
        ledger
            .submit(&alice.builder.create_record(reading("R1", "T1", "x"), 2).unwrap())
            .await
            .unwrap();

        let batch = alice
            .builder
            .transfer_record("R1", &bob.public_key(), 3)
            .unwrap();
        let writes = ledger.context.write_count();
        ledger.submit(&batch).await.unwrap();
        assert_eq!(ledger.context.write_count(), writes + 1);

        let record = ledger.record("R1").await.unwrap().unwrap();
        let last = record.owners.last().unwrap();
        assert_eq!(last.owner_id, bob.public_key());
        assert_eq!(last.timestamp, 3);
    }

    #[tokio::test]
    async fn test_undecodable_payload_rejected() {
        let ledger = Ledger::new();
        let alice = ledger.actor();
        let mut batch = alice.builder.create_owner("Alice", 1).unwrap();

        let mut payload = PnrdPayload::decode(&batch.transactions[0].payload).unwrap();
        payload.action = Action::UpdateRecord.code();
        batch.transactions[0].payload = payload.encode().unwrap();

        let err = ledger.submit(&batch).await.unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Decode(DecodeError::ActionMismatch { .. })
        ));
        assert_eq!(ledger.context.write_count(), 0);
    }

    #[tokio::test]
    async fn test_store_outage_is_not_a_rejection() {
        let ledger = Ledger::new();
        let alice = ledger.actor();
        ledger.context.set_unavailable(true);

        let err = ledger
            .submit(&alice.builder.create_owner("Alice", 1).unwrap())
            .await
            .unwrap_err();
        assert!(!err.is_invalid_transaction());

        ledger.context.set_unavailable(false);
        ledger
            .submit(&alice.builder.create_owner("Alice", 1).unwrap())
            .await
            .unwrap();
    }
}
