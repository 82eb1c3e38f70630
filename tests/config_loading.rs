use std::path::Path;

use tempfile::tempdir;
use waveplan::config::{ProjectFile, load_and_validate, load_from_path};
use waveplan::dag::plan_schedule;
use waveplan::errors::WaveplanError;
use waveplan::manifest::resolve_owner;
use waveplan_test_utils::builders::ProjectBuilder;
use waveplan_test_utils::write_project;

const PROJECT: &str = r#"
[component.auth]
paths = ["src/auth"]
depends_on = ["core"]
docs = ["docs/auth.md"]

[component.core]
paths = ["src/core", "src/lib.rs"]

[[task]]
id = "T2"
reads = ["auth"]
mutexes = ["port:8080"]

[[task]]
id = "T1"
writes = ["auth"]
"#;

#[test]
fn test_load_project_keeps_task_order_and_resolves_paths() {
    let dir = tempdir().unwrap();
    let path = write_project(dir.path(), PROJECT).unwrap();

    let project = load_and_validate(&path).unwrap();

    let ids: Vec<String> = project.tasks().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["T2", "T1"]);

    let tasks = project.tasks();
    assert!(tasks[0].mutexes.contains("port:8080"));

    let manifest = project.manifest(dir.path());
    assert_eq!(manifest.len(), 2);
    assert_eq!(manifest.component_dependencies("auth"), ["core".to_string()]);
    assert_eq!(
        resolve_owner(&dir.path().join("src/auth/token.rs"), &manifest),
        Some("auth")
    );
    assert_eq!(
        resolve_owner(&dir.path().join("src/lib.rs"), &manifest),
        Some("core")
    );
}

#[test]
fn test_loaded_plan_feeds_the_scheduler() {
    let dir = tempdir().unwrap();
    let path = write_project(dir.path(), PROJECT).unwrap();
    let project = load_and_validate(&path).unwrap();

    let schedule = plan_schedule(&project.tasks()).unwrap();

    // T2 reads before T1 writes: WAR only, so both run together.
    assert_eq!(schedule.waves, vec![vec!["T2", "T1"]]);
}

#[test]
fn test_raw_load_skips_validation() {
    let dir = tempdir().unwrap();
    let path = write_project(
        dir.path(),
        r#"
[[task]]
id = "T1"
writes = ["nowhere"]
"#,
    )
    .unwrap();

    let raw = load_from_path(&path).unwrap();
    assert_eq!(raw.task.len(), 1);
    assert!(ProjectFile::try_from(raw).is_err());
}

fn expect_config_error(contents: &str, needle: &str) {
    let dir = tempdir().unwrap();
    let path = write_project(dir.path(), contents).unwrap();

    match load_and_validate(&path) {
        Err(WaveplanError::ConfigError(msg)) => {
            assert!(msg.contains(needle), "message {:?} lacks {:?}", msg, needle)
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unknown_component_in_task_is_config_error() {
    expect_config_error(
        r#"
[component.auth]
paths = ["src/auth"]

[[task]]
id = "T1"
reads = ["billing"]
"#,
        "unknown component 'billing'",
    );
}

#[test]
fn test_duplicate_task_id_is_config_error() {
    expect_config_error(
        r#"
[component.auth]
paths = ["src/auth"]

[[task]]
id = "T1"

[[task]]
id = "T1"
"#,
        "duplicate task id 'T1'",
    );
}

#[test]
fn test_component_without_paths_is_config_error() {
    expect_config_error(
        r#"
[component.auth]
paths = []
"#,
        "at least one path",
    );
}

#[test]
fn test_shared_path_is_config_error() {
    expect_config_error(
        r#"
[component.auth]
paths = ["src/shared"]

[component.api]
paths = ["src/shared"]
"#,
        "claimed by both",
    );
}

#[test]
fn test_unknown_component_dependency_is_config_error() {
    expect_config_error(
        r#"
[component.auth]
paths = ["src/auth"]
depends_on = ["ghost"]
"#,
        "unknown dependency 'ghost'",
    );
}

#[test]
fn test_empty_project_is_config_error() {
    expect_config_error("", "at least one [component.<name>]");
}

#[test]
fn test_malformed_toml_is_toml_error() {
    let dir = tempdir().unwrap();
    let path = write_project(dir.path(), "[component.auth\npaths = 1").unwrap();

    assert!(matches!(
        load_and_validate(&path),
        Err(WaveplanError::TomlError(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        load_and_validate(Path::new("/definitely/not/here/Waveplan.toml")),
        Err(WaveplanError::IoError(_))
    ));
}

#[test]
fn test_builder_produces_valid_project() {
    let project = ProjectBuilder::new()
        .with_component("core", &["src/core"], &[])
        .with_component("auth", &["src/auth"], &["core"])
        .with_task("T1", &[], &["core"])
        .with_task("T2", &["core"], &["auth"])
        .build();

    let schedule = plan_schedule(&project.tasks()).unwrap();
    assert_eq!(schedule.waves, vec![vec!["T1"], vec!["T2"]]);
}

#[test]
fn test_builder_rejects_self_dependency() {
    let raw = ProjectBuilder::new()
        .with_component("core", &["src/core"], &["core"])
        .raw();

    match ProjectFile::try_from(raw) {
        Err(WaveplanError::ConfigError(msg)) => assert!(msg.contains("itself")),
        other => panic!("Expected ConfigError, got: {:?}", other.map(|_| ())),
    }
}
