use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn bin() -> Command {
    let path = assert_cmd::cargo::cargo_bin!("cpu-energy");
    Command::new(path)
}

fn value_after(line: &str, prefix: &str, suffix: &str) -> f64 {
    line.strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(suffix))
        .unwrap_or_else(|| panic!("unexpected line: {line}"))
        .parse()
        .unwrap()
}

#[test]
fn no_program_prints_usage_and_fails() {
    bin()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("<program> [arguments]"));
}

#[test]
fn nonexistent_program_reports_os_error() {
    bin()
        .arg("/nonexistent/definitely-not-a-program")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Total CPU time").not())
        .stderr(predicate::str::contains("Failed to create the process. Error 2: "))
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn measures_short_command() {
    let assert = bin().args(["sleep", "0"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "{stdout}");
    assert_eq!(lines[0], "Process launched: sleep 0");

    let cpu = value_after(lines[1], "Total CPU time used: ", " seconds");
    let energy = value_after(lines[2], "Estimated energy consumption: ", " Joules");
    assert!(cpu >= 0.0 && cpu.is_finite());
    let expected = cpu * 50.0;
    assert!((energy - expected).abs() <= 1e-9 * expected.abs().max(f64::MIN_POSITIVE));
}

#[test]
fn quotes_arguments_with_spaces_in_launched_line() {
    bin()
        .args(["echo", "hello world", "again"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Process launched: echo \"hello world\" again",
        ))
        .stdout(predicate::str::contains("hello world again\n"));
}

#[test]
fn child_failure_does_not_fail_the_tool() {
    bin()
        .args(["sh", "-c", "exit 7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated energy consumption: "));
}

#[test]
fn json_output_with_custom_watts() {
    let assert = bin()
        .args(["--output", "json", "--watts", "10", "--", "sh", "-c", "exit 4"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["command_line"], "sh -c \"exit 4\"");
    assert_eq!(json["power_w"], 10.0);
    assert_eq!(json["exit_code"], 4);
    let cpu = json["cpu_seconds"].as_f64().unwrap();
    let energy = json["energy_j"].as_f64().unwrap();
    assert!((energy - cpu * 10.0).abs() < 1e-9);
}

#[test]
fn unknown_output_format_fails_before_launch() {
    bin()
        .args(["--output", "yaml", "echo", "should-not-run"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("should-not-run").not())
        .stderr(predicate::str::contains("Unknown output format: yaml"));
}

#[test]
fn repeated_runs_stay_in_range() {
    for _ in 0..2 {
        let assert = bin().args(["true"]).assert().success();
        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let line = stdout.lines().nth(1).unwrap();
        let cpu = value_after(line, "Total CPU time used: ", " seconds");
        assert!(cpu < 0.5);
    }
}

#[test]
fn wall_model_charges_elapsed_time() {
    let assert = bin()
        .args(["--output", "json", "--model", "wall", "sleep", "0.2"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["model"], "wall");
    let wall = json["wall_time_s"].as_f64().unwrap();
    let energy = json["energy_j"].as_f64().unwrap();
    assert!(wall >= 0.2);
    assert!((energy - wall * 50.0).abs() < 1e-9);
}

#[test]
fn default_model_is_cpu() {
    let assert = bin()
        .args(["--output", "json", "true"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["model"], "cpu");
}
