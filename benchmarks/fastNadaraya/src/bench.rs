//! Nadaraya-Watson strategy benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Every execution strategy on the same sample
//! - Scalability (1K to 20K points)
//! - Bandwidth, block size and worker count sweeps
//! - Pathological inputs (duplicated and clustered x, very small bandwidth)
//!
//! For scalar row kernels, use `NADARAYA_KERNEL=scalar cargo bench`.
//! For SIMD row kernels, use `NADARAYA_KERNEL=simd cargo bench`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastNadaraya::harness::generate_sample;
use fastNadaraya::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (KernelMode, &'static str) {
    match env::var("NADARAYA_KERNEL").ok().as_deref() {
        Some("simd") => (Simd, "simd"),
        Some("scalar") | _ => (Scalar, "scalar"),
    }
}

fn fit(
    execution: Execution,
    mode: KernelMode,
    x: &[f64],
    y: &[f64],
    bandwidth: f64,
) -> SmoothResult<f64> {
    Nadaraya::new()
        .bandwidth(bandwidth)
        .kernel_mode(mode)
        .execution(execution)
        .build()
        .unwrap()
        .fit(x, y)
        .unwrap()
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Sample of the comparison harness: linear trend plus uniform noise.
fn generate_linear_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>, f64) {
    let sample = generate_sample::<f64>(size, Some(seed)).unwrap();
    (sample.x, sample.y, sample.bandwidth)
}

/// x values drawn from a handful of repeated positions.
fn generate_duplicated_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();

    let x: Vec<f64> = (0..size).map(|_| rng.random_range(0..20) as f64 * 0.05).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 10.0 * xi + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Tight clusters of x separated by wide gaps.
fn generate_clustered_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let jitter = Uniform::new(0.0, 1e-4).unwrap();

    let x: Vec<f64> = (0..size)
        .map(|i| (i % 10) as f64 * 100.0 + jitter.sample(&mut rng))
        .collect();
    let y: Vec<f64> = x.iter().map(|&xi| (xi / 100.0).sin()).collect();
    (x, y)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_strategies(c: &mut Criterion) {
    let (mode, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("strategies_{}", mode_name));
    group.sample_size(20);

    let size = 2000;
    let (x, y, bw) = generate_linear_data(size, 42);
    group.throughput(Throughput::Elements(size as u64));

    for execution in [Sequential, Vectorized, Parallel, Chunked, Pool] {
        group.bench_function(execution.strategy_name(mode), |b| {
            b.iter(|| fit(execution, mode, black_box(&x), black_box(&y), bw))
        });
    }
    group.finish();
}

fn bench_scalability(c: &mut Criterion) {
    let (mode, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(10);

    for size in [1_000, 5_000, 20_000] {
        group.throughput(Throughput::Elements(size as u64));
        let (x, y, bw) = generate_linear_data(size, 42);

        for execution in [Sequential, Parallel] {
            group.bench_with_input(
                BenchmarkId::new(execution.strategy_name(mode), size),
                &size,
                |b, _| b.iter(|| fit(execution, mode, black_box(&x), black_box(&y), bw)),
            );
        }
    }
    group.finish();
}

fn bench_bandwidth(c: &mut Criterion) {
    let (mode, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("bandwidth_{}", mode_name));
    group.sample_size(20);

    let (x, y, _) = generate_linear_data(3000, 42);

    for divisor in [10.0, 100.0, 1000.0] {
        group.bench_with_input(
            BenchmarkId::new("parallel", divisor),
            &divisor,
            |b, &divisor| {
                b.iter(|| {
                    Nadaraya::new()
                        .bandwidth_rule(divisor)
                        .kernel_mode(mode)
                        .build()
                        .unwrap()
                        .fit(black_box(&x), black_box(&y))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_chunk_size(c: &mut Criterion) {
    let (mode, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("chunk_size_{}", mode_name));
    group.sample_size(20);

    let (x, y, bw) = generate_linear_data(4000, 42);

    for chunk in [10, 100, 1000, 4000] {
        group.bench_with_input(BenchmarkId::new("chunked", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                Nadaraya::new()
                    .bandwidth(bw)
                    .kernel_mode(mode)
                    .execution(Chunked)
                    .chunk_size(chunk)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_workers(c: &mut Criterion) {
    let (mode, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("workers_{}", mode_name));
    group.sample_size(20);

    let (x, y, bw) = generate_linear_data(4000, 42);

    for workers in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("pool", workers), &workers, |b, &workers| {
            b.iter(|| {
                Nadaraya::new()
                    .bandwidth(bw)
                    .kernel_mode(mode)
                    .execution(Pool)
                    .workers(workers)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let (mode, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("pathological_{}", mode_name));
    group.sample_size(20);

    let size = 3000;

    // Heavily duplicated x
    let (x_dup, y_dup) = generate_duplicated_data(size, 42);
    group.bench_function("duplicated_x", |b| {
        b.iter(|| fit(Parallel, mode, black_box(&x_dup), black_box(&y_dup), 0.05))
    });

    // Clustered x with most weights underflowing
    let (x_clustered, y_clustered) = generate_clustered_data(size, 42);
    group.bench_function("clustered", |b| {
        b.iter(|| {
            fit(
                Parallel,
                mode,
                black_box(&x_clustered),
                black_box(&y_clustered),
                1e-3,
            )
        })
    });

    // Bandwidth far below the point spacing
    let (x_lin, y_lin, bw) = generate_linear_data(size, 42);
    group.bench_function("tiny_bandwidth", |b| {
        b.iter(|| fit(Parallel, mode, black_box(&x_lin), black_box(&y_lin), bw * 1e-6))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_strategies,
    bench_scalability,
    bench_bandwidth,
    bench_chunk_size,
    bench_workers,
    bench_pathological,
);

criterion_main!(benches);
