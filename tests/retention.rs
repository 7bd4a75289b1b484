use std::fs;

use driftbench::retention::{self,DriftParameters};
use driftbench::visualize::plot;
use driftbench::Float;

#[test]
fn test_deterministic_retention_is_invariant() {
    let deterministic = retention::generate_deterministic_retention(retention::STEP_COUNT);

    assert_eq!(deterministic.len(), retention::STEP_COUNT);
    for value in &deterministic {
        assert_eq!(*value, 100.0);
    }
}

#[test]
fn test_stochastic_retention_is_clamped() {
    let parameters = DriftParameters::benchmark_default();
    let stochastic = retention::generate_stochastic_retention(&parameters);

    assert_eq!(stochastic.len(), retention::STEP_COUNT);
    for value in &stochastic {
        assert!(*value >= 0.0);
        assert!(*value <= 100.0);
    }
}

#[test]
fn test_stochastic_retention_is_reproducible() {
    let parameters = DriftParameters::benchmark_default();
    let first = retention::generate_stochastic_retention(&parameters);
    let second = retention::generate_stochastic_retention(&parameters);

    assert_eq!(first, second);
}

#[test]
fn test_decay_without_noise_is_strictly_decreasing() {
    let parameters = DriftParameters {
        noise_std_dev: 0.0,
        ..DriftParameters::benchmark_default()
    };
    let decay = retention::generate_stochastic_retention(&parameters);

    assert_eq!(decay[0], 100.0);
    for step in 1..decay.len() {
        assert!(decay[step] < decay[step - 1]);
    }

    let last: Float = decay[decay.len() - 1];
    assert!((last - 12.9886).abs() < 1e-3);
}

#[test]
fn test_crash_steps_match_benchmark() {
    assert_eq!(retention::CRASH_STEPS, [10,22,35,42]);
    assert_eq!(retention::CRASH_STEPS[0], 10);
}

#[test]
fn test_step_domain_is_consecutive() {
    let steps = retention::generate_steps(retention::STEP_COUNT);

    assert_eq!(steps.len(), 51);
    assert_eq!(steps[0], 0);
    assert_eq!(steps[steps.len() - 1], 50);
    for i in 1..steps.len() {
        assert_eq!(steps[i], steps[i - 1] + 1);
    }
}

#[test]
fn test_benchmark_chart_is_written() {
    let parameters = DriftParameters::benchmark_default();
    let stochastic = retention::generate_stochastic_retention(&parameters);
    let deterministic = retention::generate_deterministic_retention(parameters.step_count);
    let crash_steps = retention::CRASH_STEPS.to_vec();

    let output_folder = std::env::temp_dir();
    let file_name = "driftbench_render_test.png";

    plot::draw_retention_benchmark(&stochastic, &deterministic, &crash_steps, output_folder.to_str().unwrap(), file_name).unwrap();

    let output_path = output_folder.join(file_name);
    let metadata = fs::metadata(&output_path).unwrap();
    assert!(metadata.len() > 0);

    fs::remove_file(&output_path).unwrap();
}
