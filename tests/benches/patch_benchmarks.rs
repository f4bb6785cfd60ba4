//! # Genesis Patch Benchmarks
//!
//! | Stage | Measured |
//! |-------|----------|
//! | Dev key derivation | SHA-256 seed + secp256k1 point + base58 text |
//! | Patch assembly | N slots, sequential vs concurrent |
//! | Serialization | canonical compact / pretty JSON |

use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use genesis_patch::{
    serialize, AssemblerConfig, DevKeyDeriver, GenesisPatchApi, PatchAssembler, Secret,
};
use shared_crypto::{DevKey, DEFAULT_KEY_PREFIX};

// ============================================================================
// Key derivation
// ============================================================================

fn bench_dev_key_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dev-key-derivation");

    group.bench_function("derive_public_key_text", |b| {
        b.iter(|| {
            let key = DevKey::derive(black_box("secret"), black_box("wit-owner-0")).unwrap();
            black_box(key.public_key_text(DEFAULT_KEY_PREFIX))
        })
    });

    group.finish();
}

// ============================================================================
// Patch assembly
// ============================================================================

fn bench_patch_assembly(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let secret = Secret::new("secret").unwrap();

    let mut group = c.benchmark_group("patch-assembly");
    group.measurement_time(Duration::from_secs(10));

    for count in [11u32, 101] {
        group.throughput(Throughput::Elements(u64::from(count)));

        for jobs in [1usize, 8] {
            let assembler = PatchAssembler::with_config(
                Arc::new(DevKeyDeriver::new()),
                AssemblerConfig::default().with_max_concurrent_slots(jobs),
            );

            group.bench_with_input(
                BenchmarkId::new(format!("assemble_jobs_{}", jobs), count),
                &count,
                |b, &count| {
                    b.iter(|| {
                        runtime
                            .block_on(assembler.assemble(&secret, black_box(count)))
                            .unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

// ============================================================================
// Serialization
// ============================================================================

fn bench_serialization(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let secret = Secret::new("secret").unwrap();
    let assembler = PatchAssembler::new(Arc::new(DevKeyDeriver::new()));
    let doc = runtime.block_on(assembler.assemble(&secret, 101)).unwrap();

    let mut group = c.benchmark_group("patch-serialization");

    group.bench_function("compact", |b| {
        b.iter(|| black_box(serialize(&doc, false).unwrap()))
    });
    group.bench_function("pretty", |b| {
        b.iter(|| black_box(serialize(&doc, true).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_dev_key_derivation,
    bench_patch_assembly,
    bench_serialization,
);

criterion_main!(benches);
