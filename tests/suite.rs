use std::io;
use std::path::Path;

use lapwatch::{ExportConfig, ExportManager, RunConfig, Suite, SuiteError};

const N: u64 = 4096;
const EXPECTED_SUM: u64 = N * (N - 1) / 2;

/// Races an index-based loop against an iterator fold over the same data,
/// the comparison this crate exists to make.
fn summing_suite(config: RunConfig) -> Suite {
    let data: Vec<u64> = (0..N).collect();
    let loop_data = data.clone();

    Suite::with_output(config, Box::new(io::sink()))
        .with_case("index_loop", "n=4096", move || {
            let mut total = 0u64;
            for i in 0..loop_data.len() {
                total += loop_data[i];
            }
            anyhow::ensure!(total == EXPECTED_SUM, "bad sum {total}");
            Ok(())
        })
        .with_case("iterator_sum", "n=4096", move || {
            let total: u64 = data.iter().sum();
            anyhow::ensure!(total == EXPECTED_SUM, "bad sum {total}");
            Ok(())
        })
}

#[test]
fn report_names_a_registered_case() {
    let config = RunConfig {
        warmup: 1,
        iterations: 5,
        export: None,
    };
    let report = summing_suite(config).run().unwrap();

    assert!(
        report.fastest.name == "index_loop" || report.fastest.name == "iterator_sum",
        "unexpected winner {}",
        report.fastest.name
    );
    assert_eq!(report.fastest.args, "n=4096");
    // Warmup runs are not attempts; 2 cases x 5 iterations.
    assert_eq!(report.call_count, 10);
}

#[test]
fn empty_suite_is_rejected() {
    let mut suite = Suite::with_output(RunConfig::default(), Box::new(io::sink()));
    let err = suite.run().unwrap_err();
    assert!(matches!(err, SuiteError::Empty));
}

#[test]
fn failing_case_is_named_in_the_error() {
    let mut suite = Suite::with_output(RunConfig::default(), Box::new(io::sink()))
        .with_case("fine", "", || Ok(()))
        .with_case("broken", "", || Err(anyhow::anyhow!("boom")));

    let err = suite.run().unwrap_err();
    match err {
        SuiteError::Case { name, .. } => assert_eq!(name, "broken"),
        other => panic!("expected a case error, got {other}"),
    }
}

#[test]
fn suite_exports_timing_records_at_the_configured_interval() {
    let temp_dir = tempfile::tempdir().unwrap();
    let export_dir = temp_dir.path().join("records");
    let config = RunConfig {
        warmup: 0,
        iterations: 2,
        export: Some(ExportConfig {
            output_dir: export_dir.clone(),
            interval_calls: 2,
        }),
    };

    let report = summing_suite(config).run().unwrap();
    assert_eq!(report.call_count, 4);

    let expected = export_dir.join("record_00000004.json");
    assert!(exported_paths(&export_dir).contains(&expected));

    let snapshot = ExportManager::load_snapshot(&expected).unwrap();
    assert_eq!(snapshot.completed_calls, 4);
    assert_eq!(snapshot.fastest_name, Some(report.fastest.name));
}

fn exported_paths(dir: &Path) -> Vec<std::path::PathBuf> {
    ExportManager::new(dir, 1).unwrap().list_snapshots().unwrap()
}

#[test]
fn config_file_drives_a_suite_run() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("run.yaml");
    std::fs::write(&config_path, "warmup: 1\niterations: 3\n").unwrap();

    let config = RunConfig::load_from_path(&config_path).unwrap();
    let report = summing_suite(config).run().unwrap();
    assert_eq!(report.call_count, 6);
}
