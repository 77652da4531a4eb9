//! ASCON-Core Comprehensive Criterion Benchmark
//!
//! Statistically rigorous performance measurements across the permutation,
//! sponge, AEAD, and XOF/hash layers.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use ascon_core::aead::{Ascon80pqSiv, KEY_SIZE, NONCE_SIZE};
use ascon_core::permutation::permute;
use ascon_core::state::AsconState;
use ascon_core::xof::{hash, Xof, XofA};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;

// =============================================================================
// BENCHMARK 1: BARE PERMUTATION
// =============================================================================

/// Raw permutation cost, the floor every higher construction builds on.
fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Permutation");

    let mut state = AsconState::new([1, 2, 3, 4, 5]);
    group.bench_function("p12", |b| {
        b.iter(|| permute(black_box(&mut state), 0));
    });
    group.bench_function("p6", |b| {
        b.iter(|| permute(black_box(&mut state), 6));
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 2: HASH / XOF THROUGHPUT
// =============================================================================

/// ASCON-HASH and ASCON-XOF throughput across representative message sizes.
fn bench_hash_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Hash-Throughput");

    let sizes = [
        (16, "16B"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
        (4 * KB, "4KB"),
        (64 * KB, "64KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("ascon-hash", name),
            &input,
            |b, data| b.iter(|| hash(black_box(data))),
        );

        group.bench_with_input(
            criterion::BenchmarkId::new("ascon-xofa-32", name),
            &input,
            |b, data| {
                b.iter(|| {
                    let mut sponge = XofA::init_fixed(32);
                    sponge.absorb(black_box(data));
                    let mut out = [0u8; 32];
                    sponge.squeeze(&mut out);
                    out
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: AEAD ENCRYPT/DECRYPT THROUGHPUT
// =============================================================================

/// ASCON-80pq-SIV encrypt/decrypt throughput, two permutation calls per
/// eight-byte block plus the fixed authentication-pass overhead.
fn bench_aead_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-AEAD-Throughput");

    let key = [0x11u8; KEY_SIZE];
    let nonce = [0x22u8; NONCE_SIZE];
    let cipher = Ascon80pqSiv::new(key);
    let ad = b"associated-data";

    let sizes = [
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
        (16 * KB, "16KB"),
        (64 * KB, "64KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("encrypt", name),
            &input,
            |b, data| b.iter(|| cipher.encrypt(black_box(&nonce), black_box(ad), black_box(data))),
        );

        let ct = cipher.encrypt(&nonce, ad, &input);
        group.bench_with_input(
            criterion::BenchmarkId::new("decrypt", name),
            &ct,
            |b, data| {
                b.iter(|| {
                    cipher
                        .decrypt(black_box(&nonce), black_box(ad), black_box(data))
                        .expect("authentic")
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: INCREMENTAL XOF ABSORB
// =============================================================================

/// Incremental absorption cost for a streaming caller feeding small chunks.
fn bench_incremental_absorb(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Incremental-Absorb");
    group.sample_size(50);

    let test_cases = [
        (64 * KB, 4 * KB, "64KB-4KB-chunks"),
        (64 * KB, 64, "64KB-64B-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let mut input = vec![0u8; total_size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut sponge = Xof::init();
                    for chunk in data.chunks(*chunk_sz) {
                        sponge.absorb(black_box(chunk));
                    }
                    let mut out = [0u8; 32];
                    sponge.squeeze(&mut out);
                    out
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 5: MASKED VS UNMASKED PERMUTATION
// =============================================================================

/// Side-channel-resistant backend overhead relative to the plain backend.
#[cfg(feature = "masked")]
fn bench_masked_permutation(c: &mut Criterion) {
    use ascon_core::masked::{MaskedState, RandomPool};
    use rand::SeedableRng;

    let mut group = c.benchmark_group("5-Masked-Permutation");

    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xa5c0_1234);
    let state = AsconState::new([1, 2, 3, 4, 5]);

    group.bench_function("unmasked-p12", |b| {
        let mut s = state;
        b.iter(|| permute(black_box(&mut s), 0));
    });

    group.bench_function("masked-p12", |b| {
        let mut masked = MaskedState::mask(&state, &mut rng);
        let mut pool = RandomPool::fresh(&mut rng);
        b.iter(|| masked.permute(black_box(0), black_box(&mut pool)));
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_permutation,
    bench_hash_throughput,
    bench_aead_throughput,
    bench_incremental_absorb,
);

#[cfg(feature = "masked")]
criterion_group!(benches_masked, bench_masked_permutation);

#[cfg(feature = "masked")]
criterion_main!(benches, benches_masked);

#[cfg(not(feature = "masked"))]
criterion_main!(benches);
