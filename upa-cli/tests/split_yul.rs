use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const VERIFIER: &str = r#"object "plonk_verifier" {
    code {
        datacopy(0, dataoffset("Runtime"), datasize("Runtime"))
        return(0, datasize("Runtime"))
    }
    object "Runtime" {
        code {
            let success := true
            if iszero(success) { revert(0, 0) }
        }
    }
}
"#;

struct Paths {
    _dir: TempDir,
    input: PathBuf,
    creation: PathBuf,
    runtime: PathBuf,
}

fn setup(source: &str) -> Paths {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("verifier.yul");
    fs::write(&input, source).unwrap();
    Paths {
        input,
        creation: dir.path().join("creation.yul"),
        runtime: dir.path().join("runtime.yul"),
        _dir: dir,
    }
}

fn split_cmd(paths: &Paths) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("split-yul");
    cmd.arg(&paths.input).arg(&paths.creation).arg(&paths.runtime);
    cmd
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn writes_both_sections_and_reports_success() {
    let paths = setup(VERIFIER);

    split_cmd(&paths).assert().success().stdout(predicate::str::contains(format!(
        "Code sections successfully written to {} and {}.",
        paths.creation.display(),
        paths.runtime.display()
    )));

    let creation = read(&paths.creation);
    assert!(creation.starts_with("object \"plonk_verifier\" {\n    code {datacopy("));
    assert!(creation.ends_with("\n    }\n}\n}"));

    let runtime = read(&paths.runtime);
    assert!(runtime.starts_with("object \"Runtime\" {\n    code {let success := true"));
    assert!(runtime.contains("if iszero(success) { revert(0, 0) }"));
}

#[test]
fn no_trailing_brace_flag() {
    let paths = setup(VERIFIER);

    split_cmd(&paths).arg("--no-trailing-brace").assert().success();

    assert!(read(&paths.creation).ends_with("return(0, datasize(\"Runtime\"))\n    }\n}"));
    assert!(read(&paths.runtime).ends_with("\n    }\n}"));
}

#[test]
fn mismatch_writes_nothing_and_exits_zero() {
    let paths = setup("object \"plonk_verifier\" {\n    code { }\n}\n");

    split_cmd(&paths)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The Yul code structure does not match the expected pattern.",
        ))
        .stderr(predicate::str::contains("Runtime"));

    assert!(!paths.creation.exists());
    assert!(!paths.runtime.exists());
}

#[test]
fn strict_mismatch_exits_with_failure() {
    let paths = setup("object \"other\" {\n    code { }\n}\n");

    split_cmd(&paths)
        .arg("--strict")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("does not match the expected pattern"));

    assert!(!paths.creation.exists());
}

#[test]
fn strict_from_config_file() {
    let paths = setup("object \"other\" {\n    code { }\n}\n");
    let config = paths.input.with_file_name("upa.toml");
    fs::write(&config, "[split]\nstrict = true\n").unwrap();

    split_cmd(&paths).arg("--config").arg(&config).assert().code(1);
}

#[test]
fn upa_toml_in_working_directory_is_used() {
    let paths = setup("object \"other\" {\n    code { }\n}\n");
    let dir = paths.input.parent().unwrap().to_path_buf();
    fs::write(dir.join("upa.toml"), "[split]\nstrict = true\n").unwrap();

    split_cmd(&paths).current_dir(&dir).assert().code(1);
    split_cmd(&paths).assert().code(0);
}

#[test]
fn config_file_changes_anchors() {
    let paths = setup(&VERIFIER.replace("\"Runtime\"", "\"Verifier_deployed\""));
    let config = paths.input.with_file_name("upa.toml");
    fs::write(&config, "[split]\nruntime_object = \"Verifier_deployed\"\n").unwrap();

    split_cmd(&paths).arg("-c").arg(&config).assert().success();

    assert!(read(&paths.runtime).starts_with("object \"Verifier_deployed\" {"));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let creation = dir.path().join("creation.yul");

    cargo_bin_cmd!("split-yul")
        .arg(dir.path().join("absent.yul"))
        .arg(&creation)
        .arg(dir.path().join("runtime.yul"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.yul"));

    assert!(!creation.exists());
}

#[test]
fn json_report_has_spans() {
    let paths = setup(VERIFIER);

    let output = split_cmd(&paths).arg("--format").arg("json").output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let creation = &report["creation"];
    let start = creation["start"].as_u64().unwrap() as usize;
    let end = creation["end"].as_u64().unwrap() as usize;
    assert_eq!(&VERIFIER[start - 1..start], "{");
    assert_eq!(&VERIFIER[end..end + 1], "}");
    assert!(report["runtime"]["start"].as_u64().unwrap() > end as u64);
}

#[test]
fn missing_positionals_is_a_usage_error() {
    cargo_bin_cmd!("split-yul")
        .arg("only-input.yul")
        .assert()
        .failure()
        .code(2);
}
