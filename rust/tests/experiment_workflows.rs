use std::fs;
use std::io::Cursor;

use complexity_lab::report::{
    write_json, write_report, COMPARISON_REPORT_FILE, COURSE_TAG, REPORT_HEADER,
};
use complexity_lab::runner::aggregate;
use complexity_lab::session::{run_comparison, run_study};
use complexity_lab::{
    Algorithm, ChartOutput, ExperimentConfig, ExperimentResult, ExperimentRunner, Session,
    Statistic,
};
use tempfile::tempdir;

fn runner() -> ExperimentRunner {
    let config = ExperimentConfig {
        seed: Some(42),
        trials: 1,
        ..ExperimentConfig::default()
    };
    ExperimentRunner::new(config).unwrap()
}

#[test]
fn test_every_algorithm_produces_one_row_per_size() {
    let mut runner = runner();
    let sizes = [10, 20, 40, 80];

    for algorithm in Algorithm::ALL {
        let result = runner.run_experiment(algorithm, &sizes);
        assert_eq!(result.algorithm(), algorithm);
        assert_eq!(result.sizes(), &sizes);
        assert_eq!(result.times().len(), sizes.len());
        assert_eq!(result.ratios().len(), sizes.len());
        assert_eq!(result.operations().len(), sizes.len());
        assert_eq!(result.ratios()[0], None);
        assert!(result.ratios()[1..].iter().all(|r| r.is_some()));
    }
}

#[test]
fn test_operation_counts_follow_each_class() {
    let mut runner = runner();
    let sizes = [16, 32, 64];

    let access = runner.run_experiment(Algorithm::ArrayAccess, &sizes);
    assert_eq!(access.operations(), &[3, 3, 3]);

    let binary = runner.run_experiment(Algorithm::BinarySearch, &sizes);
    assert_eq!(binary.operations(), &[4, 5, 6]);

    let pairs = runner.run_experiment(Algorithm::FindAllPairs, &sizes);
    assert_eq!(pairs.operations(), &[120, 496, 2016]);

    let linear = runner.run_experiment(Algorithm::LinearSearch, &sizes);
    for (&size, &ops) in linear.sizes().iter().zip(linear.operations()) {
        assert!(ops >= 1 && ops <= size as u64);
    }
}

#[test]
fn test_pair_workload_is_capped() {
    let config = ExperimentConfig {
        seed: Some(3),
        trials: 1,
        pair_size_cap: 20,
        ..ExperimentConfig::default()
    };
    let mut runner = ExperimentRunner::new(config).unwrap();
    let result = runner.run_experiment(Algorithm::FindAllPairs, &[10, 40, 80]);
    // 10 elements, then 20 for both capped sizes
    assert_eq!(result.operations(), &[45, 190, 190]);
}

#[test]
fn test_median_statistic_reaches_the_runner() {
    let config = ExperimentConfig {
        seed: Some(9),
        trials: 5,
        statistic: Statistic::Median,
        ..ExperimentConfig::default()
    };
    let mut runner = ExperimentRunner::new(config).unwrap();
    let summary = runner.run_single_algorithm(Algorithm::LinearSearch, 100);
    assert_eq!(summary.trial_times.len(), 5);
    assert_eq!(
        summary.time,
        aggregate(&summary.trial_times, Statistic::Median)
    );
}

#[test]
fn test_study_writes_named_report() {
    let dir = tempdir().unwrap();
    let mut runner = runner();
    let mut out = Vec::new();

    let outcome = run_study(
        &mut runner,
        Algorithm::LinearSearch,
        &[100, 200, 400],
        dir.path(),
        &mut out,
    )
    .unwrap();

    let report = dir.path().join("linear_search_results.txt");
    assert_eq!(outcome.report.as_deref(), Some(report.as_path()));
    assert!(outcome.chart.is_none());

    let contents = fs::read_to_string(&report).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(REPORT_HEADER));
    assert_eq!(lines.next(), Some(COURSE_TAG));
    assert!(contents.contains("Linear Search"));

    let console = String::from_utf8(out).unwrap();
    assert!(console.contains("Running Linear Search experiments with sizes: [100, 200, 400]"));
    assert!(console.contains("Results saved to"));
}

#[test]
fn test_report_is_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary_search_results.txt");
    let mut runner = runner();

    let first = runner.run_experiment(Algorithm::BinarySearch, &[10, 20, 40, 80, 160]);
    write_report(&path, &[first]).unwrap();
    let second = runner.run_experiment(Algorithm::BinarySearch, &[10, 20, 40]);
    write_report(&path, &[second]).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("     160 |"));
    assert_eq!(contents.matches(REPORT_HEADER).count(), 1);
}

#[test]
fn test_comparison_writes_one_report_and_a_chart() {
    let dir = tempdir().unwrap();
    let mut runner = runner();
    let mut out = Vec::new();

    let outcome = run_comparison(
        &mut runner,
        &[Algorithm::ArrayAccess, Algorithm::LinearSearch],
        &[100, 200, 400],
        dir.path(),
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome.results.len(), 2);
    let contents = fs::read_to_string(dir.path().join(COMPARISON_REPORT_FILE)).unwrap();
    assert!(contents.contains("Array Access"));
    assert!(contents.contains("Linear Search"));

    match outcome.chart {
        Some(ChartOutput::Image(path)) => assert!(path.exists()),
        Some(ChartOutput::Text(text)) => {
            assert!(text.contains("TEXT-BASED PERFORMANCE VISUALIZATION"))
        }
        None => panic!("comparison should always produce a chart"),
    }
}

#[test]
fn test_json_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");
    let mut runner = runner();
    let result = runner.run_experiment(Algorithm::ArrayAccess, &[10, 20, 40]);

    write_json(&path, &[result]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let first = &value[0];
    assert_eq!(first["sizes"], serde_json::json!([10, 20, 40]));
    assert_eq!(first["operations"], serde_json::json!([3, 3, 3]));
    assert!(first["ratios"][0].is_null());
}

#[test]
fn test_json_export_error_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("results.json");
    let mut runner = runner();
    let result = runner.run_experiment(Algorithm::ArrayAccess, &[10, 20, 40]);

    let err = write_json(&path, &[result]).unwrap_err();
    assert!(err.to_string().contains("writing json"));
    assert!(err.to_string().contains("results.json"));
}

#[test]
fn test_interactive_study_session() {
    let dir = tempdir().unwrap();
    let input = Cursor::new(b"1\n3\n4\n400,100,200\n".to_vec());
    let mut session = Session::new(input, Vec::new(), runner(), dir.path().to_path_buf());

    let outcome = session.run().unwrap();
    let results: &[ExperimentResult] = &outcome.results;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].algorithm(), Algorithm::LinearSearch);
    assert_eq!(results[0].sizes(), &[100, 200, 400]);
    assert!(dir.path().join("linear_search_results.txt").exists());

    let console = String::from_utf8(session.into_output()).unwrap();
    assert!(console.contains("ACTIVITY COMPLETE!"));
}
