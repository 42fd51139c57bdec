#![cfg(feature = "dev")]
//! Tests for the parallel and vectorized execution strategies.
//!
//! ## Test Organization
//!
//! 1. **Consistency** - Every execution agrees with the direct pass
//! 2. **Naming** - Reported strategy names
//! 3. **Inputs** - Slices, vectors, ndarray, strided arrays
//! 4. **Validation** - Workers, chunk size, duplicates

use approx::assert_relative_eq;
use ndarray::{s, Array1};

use fastNadaraya::harness::generate_sample;
use fastNadaraya::internals::engine::executor::{
    build_pool, smooth_pass_chunked, smooth_pass_parallel,
};
use fastNadaraya::internals::engine::vectorized::smooth_pass_vectorized;
use fastNadaraya::prelude::*;
use nadaraya::internals::algorithms::smoothing::{smooth_pass_direct, PassOptions};

fn fit_with(execution: Execution, mode: KernelMode, x: &[f64], y: &[f64], bw: f64) -> Vec<f64> {
    Nadaraya::new()
        .bandwidth(bw)
        .kernel_mode(mode)
        .execution(execution)
        .workers(3)
        .chunk_size(97)
        .build()
        .unwrap()
        .fit(x, y)
        .unwrap()
        .y
}

// ============================================================================
// Consistency Tests
// ============================================================================

/// Every execution agrees with the direct pass at n = 1000.
#[test]
fn test_all_executions_agree_with_direct() {
    let sample = generate_sample::<f64>(1000, Some(42)).unwrap();
    let reference = smooth(&sample.x, &sample.y, sample.bandwidth).unwrap();

    for execution in [Sequential, Vectorized, Parallel, Chunked, Pool] {
        for mode in [Scalar, Simd] {
            let out = fit_with(execution, mode, &sample.x, &sample.y, sample.bandwidth);
            let acc = Accuracy::compare(&out, &reference).unwrap();
            assert!(
                acc.agrees_within(1e-4),
                "{} deviates by {}",
                execution.strategy_name(mode),
                acc.max_relative_deviation
            );
            assert_relative_eq!(acc.mean_percent.unwrap(), 100.0, max_relative = 1e-6);
        }
    }
}

/// Row-parallel scalar passes reproduce the direct pass exactly.
#[test]
fn test_parallel_scalar_is_exact() {
    let sample = generate_sample::<f64>(777, Some(3)).unwrap();
    let bw = sample.bandwidth;
    let options = PassOptions {
        kernel_mode: Scalar,
        block_size: Some(64),
    };

    let mut direct = vec![0.0; sample.len()];
    smooth_pass_direct(&sample.x, &sample.y, bw, &mut direct);

    let mut parallel = vec![0.0; sample.len()];
    smooth_pass_parallel(&sample.x, &sample.y, bw, options, &mut parallel);
    assert_eq!(parallel, direct);

    let mut chunked = vec![0.0; sample.len()];
    smooth_pass_chunked(&sample.x, &sample.y, bw, options, &mut chunked);
    assert_eq!(chunked, direct);
}

/// Chunked pass covers a trailing partial block and blocks larger than n.
#[test]
fn test_chunked_block_boundaries() {
    let sample = generate_sample::<f64>(101, Some(8)).unwrap();
    let bw = sample.bandwidth;

    let mut direct = vec![0.0; sample.len()];
    smooth_pass_direct(&sample.x, &sample.y, bw, &mut direct);

    for block in [1, 10, 100, 101, 5000] {
        let options = PassOptions {
            kernel_mode: Scalar,
            block_size: Some(block),
        };
        let mut out = vec![f64::NAN; sample.len()];
        smooth_pass_chunked(&sample.x, &sample.y, bw, options, &mut out);
        assert_eq!(out, direct, "block size {block}");
    }
}

/// The ndarray pass stays within rounding of the direct pass.
#[test]
fn test_vectorized_pass_close_to_direct() {
    let x = [0.0f64, 0.5, 1.0];
    let y = [0.0f64, 1.0, 2.0];

    let mut direct = [0.0; 3];
    smooth_pass_direct(&x, &y, 0.5, &mut direct);
    let mut vectorized = [0.0; 3];
    smooth_pass_vectorized(&x, &y, 0.5, PassOptions::default(), &mut vectorized);

    for i in 0..3 {
        assert_relative_eq!(vectorized[i], direct[i], max_relative = 1e-12);
    }
    assert_relative_eq!(vectorized[1], 1.0, epsilon = 1e-12);
}

/// f32 samples run on every execution.
#[test]
fn test_f32_executions() {
    let sample = generate_sample::<f32>(300, Some(11)).unwrap();
    let reference = smooth(&sample.x, &sample.y, sample.bandwidth).unwrap();

    for execution in [Vectorized, Parallel, Chunked, Pool] {
        let out = Nadaraya::new()
            .bandwidth(sample.bandwidth)
            .kernel_mode(Simd)
            .execution(execution)
            .build()
            .unwrap()
            .fit(&sample.x, &sample.y)
            .unwrap();
        let acc = Accuracy::compare(&out.y, &reference).unwrap();
        assert!(acc.agrees_within(1e-4));
    }
}

/// Parallel executions are deterministic across calls.
#[test]
fn test_repeated_parallel_fits_identical() {
    let sample = generate_sample::<f64>(500, Some(19)).unwrap();
    let model = Nadaraya::new()
        .bandwidth(sample.bandwidth)
        .execution(Pool)
        .workers(2)
        .build()
        .unwrap();

    let first = model.fit(&sample.x, &sample.y).unwrap();
    let second = model.fit(&sample.x, &sample.y).unwrap();
    assert_eq!(first.y, second.y);
}

/// A subnormal bandwidth gives each row its own value on every execution.
#[test]
fn test_subnormal_bandwidth_all_executions() {
    let x: Vec<f64> = (0..13).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| 3.0 * v - 1.0).collect();

    for execution in [Sequential, Vectorized, Parallel, Chunked, Pool] {
        for mode in [Scalar, Simd] {
            let out = fit_with(execution, mode, &x, &y, 1e-310);
            assert_eq!(out, y, "{}", execution.strategy_name(mode));
        }
    }
}

// ============================================================================
// Naming Tests
// ============================================================================

/// The result reports which strategy produced it.
#[test]
fn test_strategy_names() {
    let x = vec![0.0f64, 0.5, 1.0];
    let y = vec![0.0f64, 1.0, 2.0];

    let cases = [
        (Sequential, Scalar, "direct"),
        (Sequential, Simd, "simd"),
        (Vectorized, Scalar, "vectorized"),
        (Parallel, Scalar, "parallel"),
        (Parallel, Simd, "parallel_simd"),
        (Chunked, Scalar, "chunked"),
        (Chunked, Simd, "chunked_simd"),
        (Pool, Scalar, "pool"),
        (Pool, Simd, "pool_simd"),
    ];
    for (execution, mode, name) in cases {
        let result = Nadaraya::new()
            .bandwidth(0.5)
            .kernel_mode(mode)
            .execution(execution)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap();
        assert_eq!(result.strategy, name);
    }
}

/// Parallel execution is the default; `parallel(false)` is sequential.
#[test]
fn test_parallel_default_and_toggle() {
    let default_model = Nadaraya::<f64>::new().build().unwrap();
    assert_eq!(default_model.execution(), Parallel);
    assert!(default_model.execution().is_parallel());

    let sequential = Nadaraya::<f64>::new().parallel(false).build().unwrap();
    assert_eq!(sequential.execution(), Sequential);
    assert!(!Vectorized.is_parallel());
}

// ============================================================================
// Input Tests
// ============================================================================

/// Slices, vectors and contiguous arrays give the same result.
#[test]
fn test_input_types() {
    let xv = vec![0.0f64, 0.3, 0.6, 0.9];
    let yv = vec![1.0f64, 2.0, 1.5, 3.0];
    let xa = Array1::from_vec(xv.clone());
    let ya = Array1::from_vec(yv.clone());

    let model = Nadaraya::new().bandwidth(0.3).build().unwrap();
    let from_vec = model.fit(&xv, &yv).unwrap();
    let from_slice = model.fit(xv.as_slice(), yv.as_slice()).unwrap();
    let from_array = model.fit(&xa, &ya).unwrap();

    assert_eq!(from_vec.y, from_slice.y);
    assert_eq!(from_vec.y, from_array.y);
}

/// Strided arrays are rejected.
#[test]
fn test_non_contiguous_array_rejected() {
    let x = Array1::from_vec((0..10).map(|i| i as f64).collect());
    let y = Array1::from_vec((0..10).map(|i| i as f64 * 2.0).collect());
    let strided = x.slice(s![..;2]);

    let model = Nadaraya::new().bandwidth(1.0).build().unwrap();
    let err = model.fit(&strided, &y.slice(s![..;2])).unwrap_err();
    assert!(matches!(err, NadarayaError::InvalidInput(_)));
}

/// Data errors surface unchanged from every execution.
#[test]
fn test_data_errors_propagate() {
    for execution in [Parallel, Pool, Vectorized] {
        let model = Nadaraya::<f64>::new()
            .bandwidth(1.0)
            .execution(execution)
            .build()
            .unwrap();
        assert_eq!(
            model.fit(&[1.0, 2.0][..], &[1.0][..]).unwrap_err(),
            NadarayaError::MismatchedInputs { x_len: 2, y_len: 1 }
        );
        assert_eq!(
            model.fit(&[] as &[f64], &[] as &[f64]).unwrap_err(),
            NadarayaError::EmptyInput
        );
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Zero workers or a zero chunk size fail at build time.
#[test]
fn test_invalid_execution_settings() {
    assert_eq!(
        Nadaraya::<f64>::new().workers(0).build().unwrap_err(),
        NadarayaError::InvalidWorkers(0)
    );
    assert_eq!(
        Nadaraya::<f64>::new().chunk_size(0).build().unwrap_err(),
        NadarayaError::InvalidChunkSize { got: 0, min: 1 }
    );
    assert!(matches!(
        build_pool(0).unwrap_err(),
        NadarayaError::InvalidWorkers(0)
    ));
}

/// Execution options set twice are rejected like core options.
#[test]
fn test_duplicate_execution_parameter() {
    let err = Nadaraya::<f64>::new()
        .parallel(true)
        .execution(Chunked)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        NadarayaError::DuplicateParameter {
            parameter: "execution"
        }
    );

    let err = Nadaraya::<f64>::new()
        .bandwidth(0.1)
        .bandwidth(0.2)
        .build()
        .unwrap_err();
    assert!(matches!(err, NadarayaError::DuplicateParameter { .. }));
}

/// A bounded pool has exactly the requested number of threads.
#[test]
fn test_pool_thread_count() {
    let pool = build_pool(3).unwrap();
    assert_eq!(pool.current_num_threads(), 3);
    assert_eq!(pool.install(rayon::current_num_threads), 3);
}
