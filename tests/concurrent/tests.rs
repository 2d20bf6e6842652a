use qlnum::{BinaryOp, CompareOp, NumericConfig, NumericKind, Scalar, broadcast};

use super::harness::{ConcurrentTestHarness, TaskResult};

fn mixed_column(len: usize) -> Vec<Scalar> {
    (0..len)
        .map(|i| match i % 5 {
            0 => Scalar::Int8((i % 100) as i8),
            1 => Scalar::Char16(i as u16),
            2 => Scalar::Int64(i as i64 * 1_000_003),
            3 => Scalar::Float64(i as f64 / 7.0),
            _ => Scalar::null(NumericKind::Int32),
        })
        .collect()
}

#[test]
fn test_concurrent_arithmetic_is_deterministic() {
    let harness = ConcurrentTestHarness::new(8);
    let left = mixed_column(500);
    let right: Vec<Scalar> = (1..=500).map(|i| Scalar::Int32(i as i32)).collect();

    let results = harness.run_concurrent(move |config| {
        let sums = broadcast::binary(BinaryOp::Plus, &left, &right, config)?;
        broadcast::binary(BinaryOp::Multiply, &sums, &right, config)
    });
    let metrics = harness.metrics(&results);

    assert_eq!(metrics.total_tasks, 8);
    assert_eq!(metrics.successful_tasks, 8);
    assert_eq!(metrics.failed_tasks, 0);
    assert!(!metrics.divergent_results);
    assert!(metrics.max_concurrent_observed >= 1);
}

#[test]
fn test_concurrent_decimal_division_uses_shared_config() {
    let config = NumericConfig::with_default_scale(12).unwrap();
    let harness = ConcurrentTestHarness::with_config(config, 6);

    let results = harness.run_concurrent(|config| {
        let numerators: Vec<Scalar> = (1..=50)
            .map(|i| Scalar::BigDec(Some(format!("{i}.50").parse().unwrap())))
            .collect();
        broadcast::binary_array_scalar(BinaryOp::Divide, &numerators, &Scalar::Int32(7), config)
    });
    let metrics = harness.metrics(&results);

    assert_eq!(metrics.successful_tasks, 6);
    assert!(!metrics.divergent_results);
    match &results[0] {
        TaskResult::Success(values) => {
            assert_eq!(values[0].to_string(), "0.214285714286");
            assert!(values.iter().all(|v| v.kind() == NumericKind::BigDec));
        }
        TaskResult::Error(e) => panic!("division failed: {e}"),
    }
}

#[test]
fn test_concurrent_comparisons_agree() {
    let harness = ConcurrentTestHarness::new(4);
    let ints: Vec<Scalar> = (0..256).map(|i| Scalar::Int64(i64::MAX - i)).collect();
    let floats: Vec<Scalar> = (0..256).map(|_| Scalar::Float64(9_223_372_036_854_775_808.0)).collect();

    let results = harness.run_concurrent(move |_| {
        let less = broadcast::compare(CompareOp::Less, &ints, &floats)?;
        Ok(less.into_iter().map(|b| Scalar::Int8(b as i8)).collect())
    });
    let metrics = harness.metrics(&results);

    assert!(!metrics.divergent_results);
    match &results[0] {
        TaskResult::Success(values) => assert!(values.iter().all(|v| *v == Scalar::Int8(1))),
        TaskResult::Error(e) => panic!("comparison failed: {e}"),
    }
}

#[test]
fn test_concurrent_errors_are_reported_per_task() {
    let harness = ConcurrentTestHarness::new(3);
    let results = harness.run_concurrent(|config| {
        broadcast::binary(
            BinaryOp::BitOr,
            &[Scalar::Int32(1), Scalar::Float32(2.0)],
            &[Scalar::Int32(1), Scalar::Int32(1)],
            config,
        )
    });
    let metrics = harness.metrics(&results);

    assert_eq!(metrics.failed_tasks, 3);
    assert!(results.iter().all(|r| matches!(r, TaskResult::Error(e) if e.contains("FLOAT32"))));
}
