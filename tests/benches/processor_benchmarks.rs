//! # PNRD-Net Processor Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | pn-01 Addressing | owner/record address derivation |
//! | shared-types | container decode at growing collision depth |
//! | pn-02 Processor | CREATE_OWNER and UPDATE_RECORD apply |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pn_01_addressing::Addresser;
use pn_tests::fixtures::{reading, update, Ledger};
use shared_types::{Owner, OwnerContainer};
use std::time::Duration;

fn bench_addressing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pn-01-addressing");
    let addresser = Addresser::default();

    group.bench_function("owner_address", |b| {
        b.iter(|| black_box(addresser.owner_address(black_box("02a1b2c3d4e5f6"))))
    });
    group.bench_function("record_address", |b| {
        b.iter(|| black_box(addresser.record_address(black_box("RECORD-000123"))))
    });
    group.finish();
}

fn bench_container_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared-types-container");

    for depth in [1usize, 8, 64] {
        let mut container = OwnerContainer::default();
        for i in 0..depth {
            container.push(Owner {
                public_key: format!("{i:066}"),
                name: format!("owner-{i}"),
                timestamp: i as u64,
            });
        }
        let Ok(bytes) = container.encode() else {
            continue;
        };

        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::new("decode", depth), &bytes, |b, bytes| {
            b.iter(|| black_box(OwnerContainer::decode(bytes).is_ok()))
        });
    }
    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("pn-02-transaction-processor");
    group.measurement_time(Duration::from_secs(5));

    let Ok(runtime) = tokio::runtime::Runtime::new() else {
        return;
    };

    group.bench_function("create_owner", |b| {
        b.iter_batched(
            || {
                let ledger = Ledger::new();
                let batch = ledger.actor().builder.create_owner("bench", 1);
                (ledger, batch)
            },
            |(ledger, batch)| {
                if let Ok(batch) = batch {
                    black_box(runtime.block_on(ledger.submit(&batch)).is_ok());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });

    let ledger = Ledger::new();
    let alice = ledger.actor();
    let setup = async {
        ledger.submit(&alice.builder.create_owner("alice", 1).ok()?).await.ok()?;
        ledger
            .submit(&alice.builder.create_record(reading("R", "T", "s"), 2).ok()?)
            .await
            .ok()
    };
    if runtime.block_on(setup).is_none() {
        return;
    }

    let mut ts = 3u64;
    group.bench_function("update_record", |b| {
        b.iter(|| {
            ts += 1;
            if let Ok(batch) = alice
                .builder
                .update_record(update("R", "step", vec![1, 0, 0]), ts.min(1_000))
            {
                black_box(runtime.block_on(ledger.submit(&batch)).is_ok());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_addressing, bench_container_decode, bench_apply);
criterion_main!(benches);
