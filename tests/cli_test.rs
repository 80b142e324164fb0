use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dep-artifacts"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_reads_deps_txt_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("deps.txt"),
        "[INFO]    org.foo:bar:jar:1.0:compile\norg.foo:bar:jar:1.0\n   \n:compile\n",
    )
    .unwrap();

    let output = run_in(&temp_dir, &[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<artifact>\n<id>org.foo:bar:jar:1.0</id>\n<override>true</override>\n<source>true</source>\n<instructions>\n<_noee>true</_noee>\n</instructions>\n</artifact>\n"
    );
}

#[test]
fn test_missing_input_is_reported_but_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(&temp_dir, &[]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("deps.txt"), "stderr: {stderr}");
}

#[test]
fn test_missing_input_fails_when_asked() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(&temp_dir, &["--on-input-error", "fail"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_policy_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("settings.toml"),
        "[error_handling]\non_input_error = \"fail\"\n",
    )
    .unwrap();

    let output = run_in(&temp_dir, &["--config", "settings.toml"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run_in(&temp_dir, &["--config", "settings.toml", "--on-input-error", "report"]);
    assert!(output.status.success());
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("settings.toml"),
        "[error_handling]\non_input_error = \"shrug\"\n",
    )
    .unwrap();

    let output = run_in(&temp_dir, &["--config", "settings.toml"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
