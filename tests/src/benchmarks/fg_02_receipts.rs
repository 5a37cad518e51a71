//! # fg-02 Receipt Benchmarks
//!
//! Receipt construction over payloads with growing event lists. Extraction
//! is linear in the number of events.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use fg_02_receipt_reconstruction::{decode, EventExtractor, ReceiptBuilder};
use shared_types::{EventIdentifiers, NetworkConfig, TransactionId};

use crate::fixtures::{event, payload, transfer_events};

pub fn bench_receipts(c: &mut Criterion) {
    let mut group = c.benchmark_group("fg-02-receipt-reconstruction");

    group.bench_function("decode_status", |b| {
        b.iter(|| decode(black_box(4i64).into(), black_box(0)))
    });

    let builder = ReceiptBuilder::new(NetworkConfig::testnet());
    let tx_id = TransactionId::new("ab".repeat(32));
    let identifiers = EventIdentifiers::default();

    for noise in [0usize, 50, 500] {
        // Unrelated events ahead of the transfer force a full scan
        let mut events: Vec<_> = (0..noise)
            .map(|i| {
                event(
                    "A.0ae53cb6e3f42a79.SomeContract.Touched",
                    serde_json::json!({"index": i}),
                )
            })
            .collect();
        events.extend(transfer_events("12.5", "0.00000259"));
        let sealed = payload(4, 0, events);

        group.throughput(Throughput::Elements(sealed.events.len() as u64));
        group.bench_with_input(BenchmarkId::new("build", noise), &sealed, |b, sealed| {
            b.iter(|| builder.build(&tx_id, black_box(sealed)))
        });
        group.bench_with_input(BenchmarkId::new("extract", noise), &sealed, |b, sealed| {
            b.iter(|| {
                let extractor = EventExtractor::new(&sealed.events, &identifiers);
                (
                    extractor.gas_cost(),
                    extractor.sender_address(),
                    extractor.transfer_amount(),
                    extractor.receiver_address(),
                )
            })
        });
    }

    group.finish();
}
