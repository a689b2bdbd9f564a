use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

const LOG: &str = "\
Begin UBV with config UniversalBatchVerifierConfig { degree_bits: 19, lookup_bits: 18, limb_bits: 88, num_limbs: 3, inner_batch_size: 2, max_num_public_inputs: 4 }
Circuit stats: 900 advice cells, 50 lookup advice cells
   Time: 10.0s
Begin UBV with config UniversalBatchVerifierConfig { degree_bits: 19, lookup_bits: 18, limb_bits: 88, num_limbs: 3, inner_batch_size: 2, max_num_public_inputs: 4 }
   Time: 12.0s
";

#[test]
fn writes_three_tables_with_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("bench.log");
    fs::write(&log, LOG).unwrap();
    let prefix = dir.path().join("results");

    cargo_bin_cmd!("bench-logs")
        .arg(&log)
        .arg(&prefix)
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed 2 runs (1 configurations, 0 outer rows)"));

    let raw = fs::read_to_string(dir.path().join("results_raw.csv")).unwrap();
    assert_eq!(raw.lines().count(), 3);
    let combined = fs::read_to_string(dir.path().join("results_combined.csv")).unwrap();
    assert!(combined.contains(",11.0,,2\n"));
    assert!(dir.path().join("results_processed.csv").exists());
}

#[test]
fn suffixes_come_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("bench.log");
    fs::write(&log, LOG).unwrap();
    let config = dir.path().join("upa.toml");
    fs::write(&config, "[bench]\nraw_suffix = \"-runs.csv\"\n").unwrap();

    cargo_bin_cmd!("bench-logs")
        .arg(&log)
        .arg(dir.path().join("out"))
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(dir.path().join("out-runs.csv").exists());
    assert!(dir.path().join("out_combined.csv").exists());
}

#[test]
fn missing_log_fails() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("bench-logs")
        .arg(dir.path().join("absent.log"))
        .arg(dir.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.log"));
}
