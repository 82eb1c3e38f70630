// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod manifest;
pub mod recovery;
pub mod types;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::{ProjectFile, config_root_dir, load_and_validate};
use crate::dag::{Schedule, TaskDefinition, plan_schedule};
use crate::errors::{Result, WaveplanError};
use crate::manifest::{CapabilityViolation, verify_capabilities};
use crate::recovery::{FailedTask, RestartStrategy, derive_restart_strategy};
use crate::types::ExecutionSnapshot;

/// How a CLI invocation ended, when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// `verify` found files outside the task's write scope.
    Violations,
}

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the project file, then runs the requested analysis
/// and prints its report to stdout.
pub fn run(args: CliArgs) -> Result<Outcome> {
    let config_path = args.config;
    let project = load_and_validate(&config_path)?;
    let tasks = project.tasks();
    info!(
        config = %config_path.display(),
        components = project.components().len(),
        tasks = tasks.len(),
        "project loaded"
    );

    match args.command {
        Command::Plan => {
            let schedule = plan_schedule(&tasks)?;
            print!("{}", render_schedule(&schedule));
            Ok(Outcome::Clean)
        }
        Command::Verify { task, files } => {
            let root = config_root_dir(&config_path);
            let violations = verify_files(&project, &tasks, &root, &task, &files)?;
            print!("{}", render_violations(&task, &violations));
            if violations.is_empty() {
                Ok(Outcome::Clean)
            } else {
                Ok(Outcome::Violations)
            }
        }
        Command::Restart {
            failed,
            completed,
            dispatched,
        } => {
            let failed_task = find_task(&tasks, &failed)?;
            for id in completed.iter().chain(dispatched.iter()) {
                find_task(&tasks, id)?;
            }
            let snapshot = ExecutionSnapshot::new(completed, dispatched);
            let strategy =
                derive_restart_strategy(&FailedTask::from(failed_task), &tasks, &snapshot);
            print!("{}", render_strategy(&failed, &strategy));
            Ok(Outcome::Clean)
        }
    }
}

fn find_task<'a>(tasks: &'a [TaskDefinition], id: &str) -> Result<&'a TaskDefinition> {
    tasks
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| WaveplanError::TaskNotFound(id.to_string()))
}

fn verify_files(
    project: &ProjectFile,
    tasks: &[TaskDefinition],
    root: &Path,
    task: &str,
    files: &[PathBuf],
) -> Result<Vec<CapabilityViolation>> {
    let task = find_task(tasks, task)?;
    let cwd = std::env::current_dir()?;
    // Component prefixes and modified files must share the same base.
    let manifest = project.manifest(&cwd.join(root));

    let absolute: Vec<PathBuf> = files
        .iter()
        .map(|f| if f.is_absolute() { f.clone() } else { cwd.join(f) })
        .collect();

    debug!(task = %task.id, files = absolute.len(), "verifying capabilities");
    Ok(verify_capabilities(&absolute, &task.writes, &manifest))
}

/// Human-readable report of hazards, waves and critical path.
pub fn render_schedule(schedule: &Schedule) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "hazards ({}):", schedule.hazards.len());
    for hazard in &schedule.hazards {
        let _ = writeln!(out, "  - {hazard}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "waves ({}):", schedule.waves.len());
    for (i, wave) in schedule.waves.iter().enumerate() {
        let _ = writeln!(out, "  {}: {}", i + 1, wave.join(", "));
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "critical path (length {}): {}",
        schedule.critical_path.length,
        schedule.critical_path.tasks.join(" -> ")
    );
    let _ = writeln!(out, "parallelism: {:.2}", schedule.parallelism());

    out
}

/// Human-readable capability report for one task.
pub fn render_violations(task: &str, violations: &[CapabilityViolation]) -> String {
    let mut out = String::new();
    if violations.is_empty() {
        let _ = writeln!(out, "task '{task}': all modified files are within its write scope");
        return out;
    }

    let _ = writeln!(
        out,
        "task '{task}': {} file(s) outside its write scope:",
        violations.len()
    );
    for violation in violations {
        let _ = writeln!(out, "  - {violation}");
    }
    out
}

/// Human-readable restart decision.
pub fn render_strategy(failed: &str, strategy: &RestartStrategy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "failed task: {failed}");
    let _ = writeln!(out, "strategy: {}", strategy.strategy);
    let _ = writeln!(out, "reason: {}", strategy.reason);
    if !strategy.affected_tasks.is_empty() {
        let _ = writeln!(out, "affected: {}", strategy.affected_tasks.join(", "));
    }
    out
}
