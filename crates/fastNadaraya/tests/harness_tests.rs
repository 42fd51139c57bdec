#![cfg(feature = "dev")]
//! Tests for the strategy comparison harness.
//!
//! ## Test Organization
//!
//! 1. **Sample** - Generation invariants and reproducibility
//! 2. **Timing** - `measure` and `time_fn`
//! 3. **Registry** - Ordering, lookup, duplicate names
//! 4. **Runs** - Reference handling, failure isolation, report output
//! 5. **Configuration** - Environment parsing

use std::collections::HashMap;
use std::error::Error;

use approx::assert_relative_eq;

use fastNadaraya::harness::sample::count_duplicates;
use fastNadaraya::harness::{
    generate_sample, measure, time_fn, Harness, HarnessConfig, HarnessError, Precision, Registry,
    Sample, DEFAULT_SAMPLES,
};
use fastNadaraya::prelude::*;

fn quiet() -> Harness {
    Harness::new(HarnessConfig::default().verbose(false))
}

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ============================================================================
// Sample Tests
// ============================================================================

/// Generated samples follow the documented shape.
#[test]
fn test_sample_invariants() {
    let sample = generate_sample::<f64>(2000, Some(1)).unwrap();
    assert_eq!(sample.len(), 2000);
    assert_eq!(sample.y.len(), 2000);

    for (&x, &y) in sample.x.iter().zip(sample.y.iter()) {
        assert!((0.0..1.0).contains(&x));
        let noise = y - (100.0 * x + 100.0);
        assert!((-1e-9..1.0 + 1e-9).contains(&noise));
    }

    let lo = sample.x.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = sample.x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_relative_eq!(sample.bandwidth, (hi - lo) / 100.0, max_relative = 1e-12);
    assert!(sample.bandwidth > 0.0);
}

/// The same seed reproduces the sample; different seeds differ.
#[test]
fn test_sample_reproducible() {
    let a = generate_sample::<f32>(100, Some(9)).unwrap();
    let b = generate_sample::<f32>(100, Some(9)).unwrap();
    let c = generate_sample::<f32>(100, Some(10)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a.x, c.x);
}

/// An empty sample is an error.
#[test]
fn test_empty_sample_rejected() {
    let err = generate_sample::<f64>(0, None).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Smoothing(NadarayaError::EmptyInput)
    ));
}

/// Repeated x values are counted.
#[test]
fn test_count_duplicates() {
    assert_eq!(count_duplicates(&[0.3f64, 0.1, 0.3, 0.2, 0.3]), 2);
    assert_eq!(count_duplicates(&[0.1f64, 0.2]), 0);
    assert_eq!(count_duplicates::<f64>(&[]), 0);
}

// ============================================================================
// Timing Tests
// ============================================================================

/// The three-point sample timed through `measure`.
#[test]
fn test_measure_three_points() {
    let x = [0.0f64, 0.5, 1.0];
    let y = [0.0f64, 1.0, 2.0];

    let m = measure(smooth::<f64>, &x, &y, 0.5);
    assert!(m.elapsed_secs() >= 0.0);
    assert!(m.is_ok());

    let s = m.result.unwrap();
    assert_eq!(s.len(), 3);
    assert!((s[1] - 1.0).abs() < (s[0] - 1.0).abs());
    assert!((s[1] - 1.0).abs() < (s[2] - 1.0).abs());
}

/// Errors are captured, not raised.
#[test]
fn test_measure_captures_error() {
    let m = measure(smooth::<f64>, &[0.0, 1.0], &[1.0], 0.5);
    assert!(!m.is_ok());
    assert_eq!(
        m.result.unwrap_err(),
        NadarayaError::MismatchedInputs { x_len: 2, y_len: 1 }
    );

    let m = time_fn("bad", smooth::<f64>, &[0.0, 1.0], &[1.0, 2.0], -1.0, false);
    assert!(matches!(
        m.result,
        Err(NadarayaError::InvalidBandwidth(_))
    ));
}

// ============================================================================
// Registry Tests
// ============================================================================

/// The standard registry lists every strategy with `direct` first.
#[test]
fn test_standard_registry() {
    let registry = Registry::<f64>::standard();
    assert_eq!(
        registry.names(),
        vec![
            "direct",
            "vectorized",
            "simd",
            "parallel",
            "parallel_simd",
            "chunked",
            "pool"
        ]
    );
    assert_eq!(registry.len(), 7);
    assert!(registry.get("pool").is_some());
    assert!(registry.get("missing").is_none());
}

/// Registering a name twice fails and leaves the registry unchanged.
#[test]
fn test_duplicate_registration() {
    let mut registry = Registry::<f64>::new();
    assert!(registry.is_empty());
    registry.register("direct", smooth::<f64>).unwrap();

    let err = registry
        .register("direct", |x: &[f64], _: &[f64], _: f64| Ok(x.to_vec()))
        .unwrap_err();
    assert!(matches!(err, HarnessError::DuplicateStrategy(ref n) if n == "direct"));
    assert_eq!(registry.len(), 1);
}

/// Registered closures can be called through `get`.
#[test]
fn test_registry_get_runs_strategy() {
    let registry = Registry::<f64>::standard();
    let parallel = registry.get("parallel").unwrap();
    let out = parallel(&[0.0, 0.5, 1.0], &[0.0, 1.0, 2.0], 0.5).unwrap();
    let direct = smooth(&[0.0, 0.5, 1.0], &[0.0, 1.0, 2.0], 0.5).unwrap();
    assert_eq!(out, direct);
}

// ============================================================================
// Run Tests
// ============================================================================

/// Every standard strategy agrees with the reference.
#[test]
fn test_standard_run_agrees() {
    let sample = generate_sample::<f64>(1000, Some(42)).unwrap();
    let report = quiet().run(&Registry::standard(), &sample);

    assert_eq!(report.samples, 1000);
    assert_eq!(report.reference.as_deref(), Some("direct"));
    assert_eq!(report.entries.len(), 7);
    assert_eq!(report.failures().count(), 0);

    let reference = report.get("direct").unwrap();
    assert_eq!(reference.accuracy_percent, Some(100.0));
    assert_eq!(reference.max_relative_deviation, Some(0.0));

    for entry in &report.entries {
        assert!(entry.elapsed_secs >= 0.0);
        assert!(entry.max_relative_deviation.unwrap() <= 1e-4, "{}", entry.name);
        assert_relative_eq!(entry.accuracy_percent.unwrap(), 100.0, max_relative = 1e-6);
    }
}

/// A failing strategy is recorded and later strategies still run.
#[test]
fn test_failure_is_isolated() {
    let mut registry = Registry::<f64>::new();
    registry.register("direct", smooth::<f64>).unwrap();
    registry
        .register("broken", |_: &[f64], _: &[f64], _: f64| {
            Err(NadarayaError::InvalidInput("broken".to_string()))
        })
        .unwrap();
    registry
        .register("scaled", |x: &[f64], y: &[f64], bw: f64| {
            smooth(x, y, bw).map(|s| s.iter().map(|v| v * 1.01).collect())
        })
        .unwrap();

    let sample = generate_sample::<f64>(200, Some(5)).unwrap();
    let report = quiet().run(&registry, &sample);

    assert_eq!(report.entries.len(), 3);
    let broken = report.get("broken").unwrap();
    assert!(broken.is_failure());
    assert!(broken.error.as_ref().unwrap().contains("broken"));
    assert_eq!(broken.accuracy_percent, None);

    let scaled = report.get("scaled").unwrap();
    assert!(!scaled.is_failure());
    assert_relative_eq!(scaled.accuracy_percent.unwrap(), 99.0, max_relative = 1e-9);
    assert_relative_eq!(scaled.max_relative_deviation.unwrap(), 0.01, max_relative = 1e-9);
}

/// A panicking strategy is recorded with its message and the run goes on.
#[test]
fn test_panicking_strategy_is_isolated() {
    let mut registry = Registry::<f64>::new();
    registry.register("direct", smooth::<f64>).unwrap();
    registry
        .register(
            "boom",
            |_: &[f64], _: &[f64], _: f64| -> Result<Vec<f64>, NadarayaError> {
                panic!("strategy blew up")
            },
        )
        .unwrap();
    registry
        .register(
            "formatted",
            |x: &[f64], _: &[f64], _: f64| -> Result<Vec<f64>, NadarayaError> {
                panic!("gave up after {} rows", x.len())
            },
        )
        .unwrap();
    registry.register("after", smooth::<f64>).unwrap();

    let sample = generate_sample::<f64>(100, Some(13)).unwrap();
    let report = quiet().run(&registry, &sample);

    assert_eq!(report.entries.len(), 4);
    assert_eq!(report.failures().count(), 2);

    let boom = report.get("boom").unwrap();
    assert_eq!(boom.error.as_deref(), Some("panicked: strategy blew up"));
    assert!(boom.elapsed_secs >= 0.0);
    let formatted = report.get("formatted").unwrap();
    assert_eq!(formatted.error.as_deref(), Some("panicked: gave up after 100 rows"));

    let after = report.get("after").unwrap();
    assert!(!after.is_failure());
    assert_eq!(after.accuracy_percent, Some(100.0));
}

/// When the reference fails no entry carries an accuracy figure.
#[test]
fn test_reference_failure_omits_accuracy() {
    let mut registry = Registry::<f64>::new();
    registry
        .register("reference", |_: &[f64], _: &[f64], _: f64| {
            Err(NadarayaError::ThreadPool("unavailable".to_string()))
        })
        .unwrap();
    registry.register("direct", smooth::<f64>).unwrap();

    let sample = generate_sample::<f64>(50, Some(2)).unwrap();
    let report = quiet().run(&registry, &sample);

    assert!(report.entries[0].is_failure());
    assert!(!report.entries[1].is_failure());
    assert_eq!(report.entries[1].accuracy_percent, None);
}

/// A result of the wrong length is recorded as a failure.
#[test]
fn test_wrong_length_result_is_failure() {
    let mut registry = Registry::<f64>::new();
    registry.register("direct", smooth::<f64>).unwrap();
    registry
        .register("short", |_: &[f64], y: &[f64], _: f64| Ok(y[1..].to_vec()))
        .unwrap();

    let sample = generate_sample::<f64>(20, Some(4)).unwrap();
    let report = quiet().run(&registry, &sample);
    assert!(report.get("short").unwrap().is_failure());
}

/// A constant sample fails every strategy without stopping the run.
#[test]
fn test_constant_sample_fails_each_strategy() {
    let sample = Sample {
        x: vec![0.5f64; 10],
        y: vec![1.0f64; 10],
        bandwidth: 0.0,
    };
    let report = quiet().run(&Registry::standard(), &sample);
    assert_eq!(report.entries.len(), 7);
    assert_eq!(report.failures().count(), 7);
}

/// The report prints one line per strategy and serializes to JSON.
#[test]
fn test_report_display_and_json() {
    let mut registry = Registry::<f64>::new();
    registry.register("direct", smooth::<f64>).unwrap();
    registry
        .register("broken", |_: &[f64], _: &[f64], _: f64| {
            Err(NadarayaError::EmptyInput)
        })
        .unwrap();

    let sample = generate_sample::<f64>(30, Some(6)).unwrap();
    let report = quiet().run(&registry, &sample);

    let shown = report.to_string();
    assert!(shown.contains("Summary:"));
    assert!(shown.contains("direct"));
    assert!(shown.contains("FAILED: "));

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["samples"], 30);
    assert_eq!(json["entries"][0]["name"], "direct");
    assert!(json["entries"][1]["error"].as_str().is_some());
}

/// `execute` writes the JSON report when a path is configured.
#[test]
fn test_execute_writes_report() {
    let path = std::env::temp_dir().join(format!("nadaraya-report-{}.json", std::process::id()));
    let harness = Harness::new(
        HarnessConfig::default()
            .samples(64)
            .seed(3)
            .verbose(false)
            .workers(2)
            .chunk_size(16)
            .report_path(&path),
    );

    let report = harness.execute::<f32>().unwrap();
    assert_eq!(report.samples, 64);
    assert_eq!(report.failures().count(), 0);

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"parallel_simd\""));
    std::fs::remove_file(&path).unwrap();
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Without variables the defaults apply.
#[test]
fn test_config_defaults() {
    let config = HarnessConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, HarnessConfig::default());
    assert_eq!(config.samples, DEFAULT_SAMPLES);
    assert_eq!(config.precision, Precision::F64);
    assert_eq!(config.workers, 4);
    assert_eq!(config.chunk_size, 1000);
    assert!(config.verbose);
    assert!(config.seed.is_none());
}

/// Every variable is parsed.
#[test]
fn test_config_from_variables() {
    let config = HarnessConfig::from_lookup(lookup(&[
        ("NADARAYA_SAMPLES", "1000"),
        ("NADARAYA_SEED", "77"),
        ("NADARAYA_PRECISION", "f32"),
        ("NADARAYA_REPORT", "/tmp/report.json"),
        ("NADARAYA_VERBOSE", "0"),
        ("NADARAYA_WORKERS", "8"),
        ("NADARAYA_CHUNK", " 250 "),
    ]))
    .unwrap();

    assert_eq!(config.samples, 1000);
    assert_eq!(config.seed, Some(77));
    assert_eq!(config.precision, Precision::F32);
    assert_eq!(
        config.report_path.as_deref(),
        Some(std::path::Path::new("/tmp/report.json"))
    );
    assert!(!config.verbose);
    assert_eq!(config.workers, 8);
    assert_eq!(config.chunk_size, 250);
}

/// Unparseable values name the offending variable.
#[test]
fn test_config_invalid_values() {
    for (var, value) in [
        ("NADARAYA_SAMPLES", "many"),
        ("NADARAYA_SEED", "-1"),
        ("NADARAYA_PRECISION", "f16"),
        ("NADARAYA_VERBOSE", "maybe"),
        ("NADARAYA_WORKERS", "4.5"),
    ] {
        let err = HarnessConfig::from_lookup(lookup(&[(var, value)])).unwrap_err();
        match err {
            HarnessError::InvalidConfig { var: got, value: raw } => {
                assert_eq!(got, var);
                assert_eq!(raw, value);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

/// Harness errors chain to their source.
#[test]
fn test_error_source_chain() {
    let err = HarnessError::from(NadarayaError::EmptyInput);
    assert!(err.source().is_some());
    assert!(err.to_string().contains("Smoothing failed"));

    let err = HarnessError::DuplicateStrategy("pool".to_string());
    assert!(err.source().is_none());
    assert!(err.to_string().contains("pool"));
}
