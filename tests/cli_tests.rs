use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Replays a passing event stream and asserts that the command exits
/// successfully with the suite tree and the success total on stdout.
///
/// 回放一个全部通过的事件流，断言命令成功退出，并且标准输出包含套件树和成功汇总。
#[test]
fn test_replay_passing_stream() {
    let mut cmd = Command::cargo_bin("spec-reporter").unwrap();
    cmd.args(["--lang", "en", "replay", "--input", "tests/fixtures/passing.jsonl"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  Calculator\n    addition\n\n      "))
        .stdout(predicate::str::contains("adds two numbers"))
        .stdout(predicate::str::contains("WARN LOG: deprecated API"))
        .stdout(predicate::str::contains("TOTAL: 2 SUCCESS"));
}

/// A run with failures prints the numbered digest and exits with failure.
///
/// 含失败的运行会打印编号摘要，并以失败状态退出。
#[test]
fn test_replay_failing_stream() {
    let mut cmd = Command::cargo_bin("spec-reporter").unwrap();
    cmd.args(["--lang", "en", "replay", "--input", "tests/fixtures/failing.jsonl"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("TOTAL: 2 FAILED, 2 SUCCESS"))
        .stdout(predicate::str::contains("1) adds negative numbers"))
        .stdout(predicate::str::contains("2) divides evenly"))
        .stdout(predicate::str::contains("     Calculator division"))
        .stderr(predicate::str::contains("The test run reported failures."));
}

/// With `--fail-fast` the replay stops at the first failing spec.
///
/// 使用 `--fail-fast` 时，回放在第一个失败的规格处停止。
#[test]
fn test_replay_fail_fast() {
    let mut cmd = Command::cargo_bin("spec-reporter").unwrap();
    cmd.args([
        "--lang",
        "en",
        "replay",
        "--fail-fast",
        "--input",
        "tests/fixtures/failing.jsonl",
    ]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("adds negative numbers"))
        .stdout(predicate::str::contains("divides evenly").not())
        .stdout(predicate::str::contains("TOTAL").not())
        .stderr(predicate::str::contains("failFast"));
}

/// A config file can hide passed specs and override the failure marker.
///
/// 配置文件可以隐藏通过的规格并覆盖失败标记。
#[test]
fn test_replay_with_config_file() {
    let mut cmd = Command::cargo_bin("spec-reporter").unwrap();
    cmd.args([
        "--lang",
        "en",
        "replay",
        "--config",
        "tests/fixtures/quiet.toml",
        "--input",
        "tests/fixtures/failing.jsonl",
    ]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL adds negative numbers"))
        .stdout(predicate::str::contains("adds two numbers").not())
        .stderr(predicate::str::contains("Loaded reporter config"));
}

/// Events can be piped through stdin.
///
/// 事件可以通过标准输入传入。
#[test]
fn test_replay_from_stdin() {
    let events = fs::read_to_string("tests/fixtures/passing.jsonl").unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("spec-reporter").unwrap();
    cmd.args(["--lang", "en", "replay"]).write_stdin(events);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TOTAL: 2 SUCCESS"));
}

/// A malformed event line aborts the replay with its line number.
///
/// 格式错误的事件行会以其行号中止回放。
#[test]
fn test_replay_invalid_event() {
    let mut cmd = Command::cargo_bin("spec-reporter").unwrap();
    cmd.args(["--lang", "en", "replay", "--input", "tests/fixtures/invalid.jsonl"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid host event on line 2"));
}

/// `init` writes a config file that `replay` can load back.
///
/// `init` 写入的配置文件可以被 `replay` 重新加载。
#[test]
fn test_init_writes_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("SpecReporter.toml");

    let mut cmd = Command::cargo_bin("spec-reporter").unwrap();
    cmd.args(["--lang", "en", "init", "--config"]).arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote default reporter config"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("language = \"en\""));
    assert!(content.contains("browser_console_log = true"));

    let mut replay = Command::cargo_bin("spec-reporter").unwrap();
    replay
        .args(["--lang", "en", "replay", "--config"])
        .arg(&path)
        .args(["--input", "tests/fixtures/passing.jsonl"]);
    replay.assert().success();
}

/// `init` refuses to overwrite an existing file unless `--force` is given.
///
/// 除非指定 `--force`，否则 `init` 拒绝覆盖已存在的文件。
#[test]
fn test_init_refuses_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("SpecReporter.toml");
    fs::write(&path, "colors = true\n").unwrap();

    let mut cmd = Command::cargo_bin("spec-reporter").unwrap();
    cmd.args(["--lang", "en", "init", "--config"]).arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "colors = true\n");

    let mut forced = Command::cargo_bin("spec-reporter").unwrap();
    forced
        .args(["--lang", "en", "init", "--force", "--config"])
        .arg(&path);
    forced.assert().success();
    assert!(fs::read_to_string(&path).unwrap().contains("colors = false"));
}
