//! End-to-end report scenarios: dispatch, compute, and render for known packages.

use workouts::config::{ReportConfig, ReportFormat};
use workouts::dispatch::read_package;
use workouts::errors::WorkoutError;
use workouts::models::{ActivityKind, Package};
use workouts::report::format_metrics;
use workouts::samples::default_packages;
use workouts::{ReportSummary, run_report, summarize_package};

fn report_lines(packages: &[Package], config: &ReportConfig) -> (ReportSummary, Vec<String>) {
    let mut out = Vec::new();
    let summary = run_report(packages, config, &mut out).expect("report should run");
    let text = String::from_utf8(out).expect("report should be utf-8");
    (summary, text.lines().map(str::to_string).collect())
}

#[test]
fn test_running_scenario() {
    let metrics = read_package("RUN", &[15000.0, 1.0, 75.0])
        .unwrap()
        .compute()
        .unwrap();

    assert_eq!(
        format_metrics(&metrics),
        "Activity type: Running; Duration: 1.000 h; Distance: 9.750 km; \
         Avg speed: 9.750 km/h; Calories: 797.805."
    );
}

#[test]
fn test_walking_scenario() {
    let metrics = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
        .unwrap()
        .compute()
        .unwrap();

    let speed_mps: f64 = 5.85 * 0.278;
    let expected_calories = (0.035 * 75.0 + (speed_mps.powi(2) / 1.8) * 0.029 * 75.0) * 60.0;
    assert!((metrics.calories_kcal - expected_calories).abs() < 1e-9);

    assert_eq!(
        format_metrics(&metrics),
        "Activity type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
         Avg speed: 5.850 km/h; Calories: 349.252."
    );
}

#[test]
fn test_swimming_scenario() {
    let metrics = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
        .unwrap()
        .compute()
        .unwrap();

    assert_eq!(
        format_metrics(&metrics),
        "Activity type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
         Avg speed: 1.000 km/h; Calories: 336.000."
    );
}

#[test]
fn test_unknown_kind_lists_valid_codes() {
    let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
    match &err {
        WorkoutError::UnknownActivityKind { code, valid } => {
            assert_eq!(code, "XYZ");
            assert_eq!(valid, &vec!["SWM", "RUN", "WLK"]);
        }
        other => panic!("expected UnknownActivityKind, got {other:?}"),
    }
    assert!(err.to_string().contains("SWM, RUN, WLK"));
}

#[test]
fn test_run_with_extra_value() {
    let err = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::InvalidRecordShape {
            kind: ActivityKind::Running,
            expected: 3,
            actual: 4,
        }
    );
}

#[test]
fn test_sample_report_in_input_order() {
    let (summary, lines) = report_lines(&default_packages(), &ReportConfig::default());

    assert_eq!(
        summary,
        ReportSummary {
            processed: 3,
            failed: 0
        }
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Activity type: Swimming;"));
    assert!(lines[1].starts_with("Activity type: Running;"));
    assert!(lines[2].starts_with("Activity type: SportsWalking;"));
}

#[test]
fn test_bad_packages_are_skipped() {
    let packages = vec![
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("XYZ", vec![1.0, 1.0, 1.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0]),
        Package::new("RUN", vec![15000.0, 0.0, 75.0]),
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
    ];

    let (summary, lines) = report_lines(&packages, &ReportConfig::default());

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.failed, 3);
    assert!(lines[0].starts_with("Activity type: Running;"));
    assert!(lines[1].starts_with("Activity type: Swimming;"));
}

#[test]
fn test_json_report() {
    let config = ReportConfig {
        format: ReportFormat::Json,
    };
    let (_, lines) = report_lines(&default_packages(), &config);

    let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(first["activity_label"], "Swimming");
    assert_eq!(first["calories_kcal"], 336.0);
}

#[test]
fn test_report_is_deterministic() {
    let package = Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]);
    let first = format_metrics(&summarize_package(&package).unwrap());
    let second = format_metrics(&summarize_package(&package).unwrap());
    assert_eq!(first, second);
}
