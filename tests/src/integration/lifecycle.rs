//! # Provenance Lifecycle
//!
//! Alice registers, creates a record for a tagged item, hands it to Bob, and
//! Bob records a process step. Alice can no longer touch the record.

#[cfg(test)]
mod tests {
    use crate::fixtures::{reading, update, Ledger};
    use pn_02_transaction_processor::prelude::*;

    #[tokio::test]
    async fn test_alice_to_bob_walkthrough() {
        let ledger = Ledger::new();
        let alice = ledger.actor();
        let bob = ledger.actor();

        // t=1000: Alice registers.
        ledger
            .submit(&alice.builder.create_owner("Alice", 1000).unwrap())
            .await
            .unwrap();

        // t=1001: Alice creates R1 against tag T1.
        ledger
            .submit(
                &alice
                    .builder
                    .create_record(reading("R1", "T1", "produced"), 1001)
                    .unwrap(),
            )
            .await
            .unwrap();

        // t=1002: Bob registers.
        ledger
            .submit(&bob.builder.create_owner("Bob", 1002).unwrap())
            .await
            .unwrap();

        // t=1003: Alice transfers R1 to Bob.
        ledger
            .submit(
                &alice
                    .builder
                    .transfer_record("R1", &bob.public_key(), 1003)
                    .unwrap(),
            )
            .await
            .unwrap();

        // t=1004: Bob records the next process step.
        ledger
            .submit(
                &bob.builder
                    .update_record(update("R1", "assembled", vec![0, 1, 0]), 1004)
                    .unwrap(),
            )
            .await
            .unwrap();

        let record = ledger.record("R1").await.unwrap().unwrap();
        assert_eq!(record.tag_id, "T1");

        let owners: Vec<_> = record
            .owners
            .iter()
            .map(|o| (o.owner_id.clone(), o.timestamp))
            .collect();
        assert_eq!(
            owners,
            vec![(alice.public_key(), 1001), (bob.public_key(), 1003)]
        );
        assert_eq!(record.current_owner().unwrap().owner_id, bob.public_key());

        assert_eq!(record.histories.len(), 2);
        assert_eq!(record.histories[0].situation, "produced");
        assert_eq!(record.histories[0].timestamp, 1001);
        assert_eq!(record.histories[1].situation, "assembled");
        assert_eq!(record.histories[1].timestamp, 1004);
        assert_eq!(record.histories[1].snapshot.token, vec![0, 1, 0]);

        // Alice is no longer the current owner.
        let err = ledger
            .submit(
                &alice
                    .builder
                    .update_record(update("R1", "tampered", vec![0, 0, 1]), 1005)
                    .unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Validation(ValidationError::NotRecordOwner { ref signer, .. })
                if *signer == alice.public_key()
        ));
        assert_eq!(ledger.record("R1").await.unwrap().unwrap(), record);
    }

    #[tokio::test]
    async fn test_transfer_chain_follows_current_owner() {
        let ledger = Ledger::new();
        let a = ledger.actor();
        let b = ledger.actor();

        for (actor, name, ts) in [(&a, "A", 1), (&b, "B", 2)] {
            ledger
                .submit(&actor.builder.create_owner(name, ts).unwrap())
                .await
                .unwrap();
        }
        ledger
            .submit(&a.builder.create_record(reading("R", "T", "new"), 3).unwrap())
            .await
            .unwrap();
        ledger
            .submit(&a.builder.transfer_record("R", &b.public_key(), 4).unwrap())
            .await
            .unwrap();

        // A no longer owns R.
        let err = ledger
            .submit(&a.builder.transfer_record("R", &a.public_key(), 5).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Validation(ValidationError::NotRecordOwner { .. })
        ));

        // B hands it back.
        ledger
            .submit(&b.builder.transfer_record("R", &a.public_key(), 6).unwrap())
            .await
            .unwrap();
        let record = ledger.record("R").await.unwrap().unwrap();
        assert_eq!(record.owners.len(), 3);
        assert!(record.is_owned_by(&a.public_key()));
    }

    #[tokio::test]
    async fn test_updates_append_in_order() {
        let ledger = Ledger::new();
        let alice = ledger.actor();
        ledger
            .submit(&alice.builder.create_owner("Alice", 1).unwrap())
            .await
            .unwrap();
        ledger
            .submit(&alice.builder.create_record(reading("R", "T", "s0"), 2).unwrap())
            .await
            .unwrap();

        for i in 1..=5u64 {
            ledger
                .submit(
                    &alice
                        .builder
                        .update_record(update("R", &format!("s{i}"), vec![i as i64]), 2 + i)
                        .unwrap(),
                )
                .await
                .unwrap();
        }

        let record = ledger.record("R").await.unwrap().unwrap();
        let situations: Vec<_> = record.histories.iter().map(|h| h.situation.as_str()).collect();
        assert_eq!(situations, vec!["s0", "s1", "s2", "s3", "s4", "s5"]);
        assert_eq!(record.owners.len(), 1);
        assert_eq!(record.tag_id, "T");
    }

    #[tokio::test]
    async fn test_back_dated_transfer_leaves_ownership_in_place() {
        let ledger = Ledger::new();
        let alice = ledger.actor();
        let bob = ledger.actor();

        for (actor, name) in [(&alice, "Alice"), (&bob, "Bob")] {
            ledger
                .submit(&actor.builder.create_owner(name, 800).unwrap())
                .await
                .unwrap();
        }
        ledger
            .submit(
                &alice
                    .builder
                    .create_record(reading("R1", "T1", "produced"), 1001)
                    .unwrap(),
            )
            .await
            .unwrap();

        // Accepted and appended, but older than Alice's entry.
        ledger
            .submit(
                &alice
                    .builder
                    .transfer_record("R1", &bob.public_key(), 900)
                    .unwrap(),
            )
            .await
            .unwrap();

        let record = ledger.record("R1").await.unwrap().unwrap();
        assert_eq!(record.owners.len(), 2);
        assert_eq!(record.owners[1].owner_id, bob.public_key());
        assert_eq!(record.current_owner().unwrap().owner_id, alice.public_key());

        let err = ledger
            .submit(
                &bob.builder
                    .update_record(update("R1", "received", vec![0, 1, 0]), 1002)
                    .unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Validation(ValidationError::NotRecordOwner { .. })
        ));

        ledger
            .submit(
                &alice
                    .builder
                    .update_record(update("R1", "assembled", vec![0, 1, 0]), 1002)
                    .unwrap(),
            )
            .await
            .unwrap();
    }
}
