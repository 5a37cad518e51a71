//! # fg-01 Signing Benchmarks
//!
//! - signer construction (key decode)
//! - signing across message sizes
//! - authorize + sign, as done once per role on submission

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use fg_01_transaction_signing::{
    create_signer, AuthorizationFunction, BaseAccount, Signable, SigningFunction,
};
use rand::RngCore;
use shared_types::{AccountAddress, AccountIdentity};
use std::time::Duration;

use crate::fixtures::{SENDER, SENDER_PRIVATE_KEY};

fn identity() -> AccountIdentity {
    let address: AccountAddress = SENDER.parse().expect("fixture address");
    AccountIdentity::new(address, 0)
}

fn random_message_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

pub fn bench_signing(c: &mut Criterion) {
    let mut group = c.benchmark_group("fg-01-transaction-signing");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("create_signer", |b| {
        b.iter(|| create_signer(black_box(SENDER_PRIVATE_KEY), identity()).is_ok())
    });

    let signer = create_signer(SENDER_PRIVATE_KEY, identity()).expect("fixture key");
    for size in [64usize, 512, 4096] {
        let signable = Signable::new(random_message_hex(size));
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("sign", size), &signable, |b, signable| {
            b.iter(|| signer.sign(black_box(signable)).is_ok())
        });
    }

    let signable = Signable::new(random_message_hex(256));
    group.bench_function("authorize_and_sign", |b| {
        b.iter(|| {
            let authorized = signer.authorize(BaseAccount::default());
            authorized.sign(black_box(&signable)).is_ok()
        })
    });

    group.finish();
}
