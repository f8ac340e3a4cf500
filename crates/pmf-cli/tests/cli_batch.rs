use std::path::PathBuf;
use std::process::{Command, Output};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pmf"))
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

#[test]
fn batch_yaml_text() {
    let input = fixture_path("batch.yaml");
    let out = run(&["batch", "--input", input.to_str().unwrap()]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[0] binomial: P(X = 0) = 0.000977",
            "[1] poisson: P(X = 0) = 0.0497871",
            "[2] hypergeometric: P(X = 5) = 0.0039683",
        ]
    );
}

#[test]
fn batch_json_with_errors() {
    let input = fixture_path("batch_with_errors.json");
    let out = run(&["--format", "json", "batch", "--input", input.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let reports = v.as_array().expect("batch JSON should be an array");
    assert_eq!(reports.len(), 3);

    assert_eq!(reports[0]["ok"], false);
    assert_eq!(reports[0]["errors"].as_array().unwrap().len(), 3);

    assert_eq!(reports[1]["ok"], false);
    assert_eq!(reports[1]["errors"][0], "invalid input");
    assert_eq!(reports[1]["latex"], "\\[\\text{Error: invalid input}\\]");

    assert_eq!(reports[2]["ok"], true);
    assert_eq!(reports[2]["rounded"], "1.00");
    assert_eq!(reports[2]["probability"], "1");
}

#[test]
fn batch_missing_file_fails() {
    let out = run(&["batch", "--input", "/nonexistent/pmf_batch.yaml"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to read"));
}
