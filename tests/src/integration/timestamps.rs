//! # Timestamp Tolerance
//!
//! Every action rejects a timestamp more than the tolerance ahead of the
//! local clock and accepts anything at or before it.

#[cfg(test)]
mod tests {
    use crate::fixtures::{reading, update, Ledger, NOW};
    use pn_02_transaction_processor::config::DEFAULT_SYNC_TOLERANCE_SECS;
    use pn_02_transaction_processor::prelude::*;

    const TOO_LATE: u64 = NOW + DEFAULT_SYNC_TOLERANCE_SECS + 1;

    fn assert_too_far_ahead(result: Result<(), ApplyError>) {
        assert!(matches!(
            result,
            Err(ApplyError::Validation(ValidationError::TimestampTooFarAhead { timestamp, now, .. }))
                if timestamp == TOO_LATE && now == NOW
        ));
    }

    #[tokio::test]
    async fn test_every_action_enforces_tolerance() {
        let ledger = Ledger::new();
        let alice = ledger.actor();
        let bob = ledger.actor();

        assert_too_far_ahead(
            ledger
                .submit(&alice.builder.create_owner("Alice", TOO_LATE).unwrap())
                .await,
        );
        assert_eq!(ledger.context.write_count(), 0);

        for (actor, name) in [(&alice, "Alice"), (&bob, "Bob")] {
            ledger
                .submit(&actor.builder.create_owner(name, NOW).unwrap())
                .await
                .unwrap();
        }

        assert_too_far_ahead(
            ledger
                .submit(
                    &alice
                        .builder
                        .create_record(reading("R1", "T1", "x"), TOO_LATE)
                        .unwrap(),
                )
                .await,
        );
        ledger
            .submit(&alice.builder.create_record(reading("R1", "T1", "x"), NOW - 1).unwrap())
            .await
            .unwrap();

        assert_too_far_ahead(
            ledger
                .submit(
                    &alice
                        .builder
                        .transfer_record("R1", &bob.public_key(), TOO_LATE)
                        .unwrap(),
                )
                .await,
        );
        assert_too_far_ahead(
            ledger
                .submit(
                    &alice
                        .builder
                        .update_record(update("R1", "y", vec![0, 1, 0]), TOO_LATE)
                        .unwrap(),
                )
                .await,
        );

        let writes = ledger.context.write_count();
        ledger
            .submit(
                &alice
                    .builder
                    .update_record(update("R1", "y", vec![0, 1, 0]), NOW)
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(ledger.context.write_count(), writes + 1);
    }

    #[tokio::test]
    async fn test_boundary_and_clock_advance() {
        let ledger = Ledger::new();
        let alice = ledger.actor();
        let bob = ledger.actor();

        // Exactly at the edge of the window is accepted.
        ledger
            .submit(
                &alice
                    .builder
                    .create_owner("Alice", NOW + DEFAULT_SYNC_TOLERANCE_SECS)
                    .unwrap(),
            )
            .await
            .unwrap();

        let batch = bob.builder.create_owner("Bob", TOO_LATE).unwrap();
        assert!(ledger.submit(&batch).await.is_err());

        // The same transaction becomes valid once local time catches up.
        ledger.clock.advance(1);
        ledger.submit(&batch).await.unwrap();
    }
}
