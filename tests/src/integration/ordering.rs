//! # Ordering Independence
//!
//! Registering distinct owners yields one entry per key whatever the order,
//! and identical input histories produce identical state on every replica.

#[cfg(test)]
mod tests {
    use crate::fixtures::{Actor, Ledger};
    use pn_01_addressing::Addresser;
    use rand::seq::SliceRandom;
    use shared_types::Batch;

    fn registrations(actors: &[Actor]) -> Vec<Batch> {
        actors
            .iter()
            .enumerate()
            .map(|(i, a)| a.builder.create_owner(&format!("owner-{i}"), 500 + i as u64).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_any_order_registers_each_owner_once() {
        let actors: Vec<Actor> = (0..5).map(|_| Actor::new(Addresser::default())).collect();
        let batches = registrations(&actors);
        let mut rng = rand::thread_rng();

        for _ in 0..4 {
            let ledger = Ledger::new();
            let mut order: Vec<&Batch> = batches.iter().collect();
            order.shuffle(&mut rng);

            for batch in order {
                ledger.submit(batch).await.unwrap();
            }

            for (i, actor) in actors.iter().enumerate() {
                let owner = ledger.owner(&actor.public_key()).await.unwrap().unwrap();
                assert_eq!(owner.name, format!("owner-{i}"));
                assert_eq!(owner.public_key, actor.public_key());
            }
            assert_eq!(ledger.context.snapshot().len(), actors.len());
        }
    }

    #[tokio::test]
    async fn test_replicas_converge_bit_for_bit() {
        let actors: Vec<Actor> = (0..3).map(|_| Actor::new(Addresser::default())).collect();
        let batches = registrations(&actors);

        let first = Ledger::new();
        let second = Ledger::new();
        for batch in &batches {
            first.submit(batch).await.unwrap();
            second.submit(batch).await.unwrap();
        }

        assert_eq!(first.context.snapshot(), second.context.snapshot());
    }
}
