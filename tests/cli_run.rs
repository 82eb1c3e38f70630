use std::path::PathBuf;

use clap::Parser;
use tempfile::{tempdir, tempdir_in};
use waveplan::cli::{CliArgs, Command};
use waveplan::config::default_config_path;
use waveplan::errors::WaveplanError;
use waveplan::{Outcome, run};
use waveplan_test_utils::write_project;

const PROJECT: &str = r#"
[component.auth]
paths = ["src/auth"]

[component.api]
paths = ["src/api"]

[[task]]
id = "T1"
writes = ["auth"]

[[task]]
id = "T2"
reads = ["auth"]
writes = ["api"]
"#;

fn args(parts: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("waveplan").chain(parts.iter().copied()))
        .expect("valid arguments")
}

#[test]
fn test_parse_subcommands() {
    let parsed = args(&["--config", "x.toml", "restart", "--failed", "T1", "--dispatched", "T2", "--dispatched", "T3"]);
    assert_eq!(parsed.config, PathBuf::from("x.toml"));
    match parsed.command {
        Command::Restart { failed, completed, dispatched } => {
            assert_eq!(failed, "T1");
            assert!(completed.is_empty());
            assert_eq!(dispatched, vec!["T2", "T3"]);
        }
        other => panic!("Expected restart command, got: {:?}", other),
    }

    // Global flags are accepted after the subcommand too.
    let parsed = args(&["plan", "--config", "y.toml"]);
    assert_eq!(parsed.config, PathBuf::from("y.toml"));
    assert!(matches!(parsed.command, Command::Plan));
}

#[test]
fn test_config_defaults_to_project_file_in_cwd() {
    let parsed = args(&["plan"]);
    assert_eq!(parsed.config, default_config_path());
    assert_eq!(parsed.config, PathBuf::from("Waveplan.toml"));
}

#[test]
fn test_verify_requires_files() {
    let result = CliArgs::try_parse_from(["waveplan", "verify", "--task", "T1"]);
    assert!(result.is_err());
}

#[test]
fn test_run_plan_and_restart() {
    let dir = tempdir().unwrap();
    let path = write_project(dir.path(), PROJECT).unwrap();
    let config = path.to_str().unwrap();

    assert_eq!(run(args(&["--config", config, "plan"])).unwrap(), Outcome::Clean);
    assert_eq!(
        run(args(&["--config", config, "restart", "--failed", "T1", "--completed", "T2"])).unwrap(),
        Outcome::Clean
    );
}

#[test]
fn test_run_verify_reports_violations() {
    let dir = tempdir().unwrap();
    let path = write_project(dir.path(), PROJECT).unwrap();
    let config = path.to_str().unwrap();
    let inside = dir.path().join("src/auth/login.rs");
    let outside = dir.path().join("src/api/routes.rs");

    assert_eq!(
        run(args(&["--config", config, "verify", "--task", "T1", inside.to_str().unwrap()])).unwrap(),
        Outcome::Clean
    );
    assert_eq!(
        run(args(&["--config", config, "verify", "--task", "T1", outside.to_str().unwrap()])).unwrap(),
        Outcome::Violations
    );
}

#[test]
fn test_run_verify_with_relative_config_path() {
    let cwd = std::env::current_dir().unwrap();
    let dir = tempdir_in(&cwd).unwrap();
    write_project(dir.path(), PROJECT).unwrap();

    let rel = dir.path().strip_prefix(&cwd).unwrap();
    let config = rel.join("Waveplan.toml");
    let config = config.to_str().unwrap();
    let relative_inside = rel.join("src/auth/login.rs");
    let absolute_inside = dir.path().join("src/auth/session.rs");
    let relative_outside = rel.join("src/api/routes.rs");

    assert_eq!(
        run(args(&["--config", config, "verify", "--task", "T1", relative_inside.to_str().unwrap()])).unwrap(),
        Outcome::Clean
    );
    assert_eq!(
        run(args(&["--config", config, "verify", "--task", "T1", absolute_inside.to_str().unwrap()])).unwrap(),
        Outcome::Clean
    );
    assert_eq!(
        run(args(&["--config", config, "verify", "--task", "T1", relative_outside.to_str().unwrap()])).unwrap(),
        Outcome::Violations
    );
}

#[test]
fn test_run_rejects_unknown_task_ids() {
    let dir = tempdir().unwrap();
    let path = write_project(dir.path(), PROJECT).unwrap();
    let config = path.to_str().unwrap();

    match run(args(&["--config", config, "restart", "--failed", "T1", "--dispatched", "T9"])) {
        Err(WaveplanError::TaskNotFound(id)) => assert_eq!(id, "T9"),
        other => panic!("Expected TaskNotFound, got: {:?}", other),
    }
}
