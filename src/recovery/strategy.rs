// src/recovery/strategy.rs

use std::collections::BTreeSet;
use std::fmt;

use tracing::{info, warn};

use crate::dag::TaskDefinition;
use crate::types::{ComponentName, ExecutionSnapshot, TaskId};

/// Recovery action chosen after a task failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestartStrategyKind {
    /// Retry only the failed task.
    IsolatedRetry,
    /// Restart the failed task together with in-flight consumers of its output.
    CascadeRestart,
    /// A finished task already consumed the failed output; hand over to a human.
    Escalate,
}

impl RestartStrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RestartStrategyKind::IsolatedRetry => "isolated_retry",
            RestartStrategyKind::CascadeRestart => "cascade_restart",
            RestartStrategyKind::Escalate => "escalate",
        }
    }
}

impl fmt::Display for RestartStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The recovery decision for one failure, with an operator-facing reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartStrategy {
    pub strategy: RestartStrategyKind,
    pub reason: String,
    /// Tasks that consumed the failed task's output, in task-set order.
    pub affected_tasks: Vec<TaskId>,
}

/// The failed task as the deriver needs it: its id and declared writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedTask {
    pub id: TaskId,
    pub writes: BTreeSet<ComponentName>,
}

impl FailedTask {
    pub fn new<N, I, S>(id: N, writes: I) -> Self
    where
        N: Into<TaskId>,
        I: IntoIterator<Item = S>,
        S: Into<ComponentName>,
    {
        Self {
            id: id.into(),
            writes: writes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&TaskDefinition> for FailedTask {
    fn from(task: &TaskDefinition) -> Self {
        Self {
            id: task.id.clone(),
            writes: task.writes.clone(),
        }
    }
}

/// Decide how to recover from the failure of `failed`.
///
/// A task is *affected* when it is not the failed task, has been completed or
/// dispatched according to `snapshot`, and reads at least one component the
/// failed task writes. The outcome is:
///
/// - `IsolatedRetry` when the failed task writes nothing, or nothing is affected;
/// - `Escalate` when any affected task has already completed;
/// - `CascadeRestart` when every affected task is still in flight.
///
/// Every input maps to exactly one outcome.
pub fn derive_restart_strategy(
    failed: &FailedTask,
    tasks: &[TaskDefinition],
    snapshot: &ExecutionSnapshot,
) -> RestartStrategy {
    let decision = decide(failed, tasks, snapshot);

    match decision.strategy {
        RestartStrategyKind::Escalate => warn!(
            task = %failed.id,
            affected = ?decision.affected_tasks,
            "failure requires escalation"
        ),
        _ => info!(
            task = %failed.id,
            strategy = %decision.strategy,
            affected = ?decision.affected_tasks,
            "restart strategy derived"
        ),
    }

    decision
}

fn decide(
    failed: &FailedTask,
    tasks: &[TaskDefinition],
    snapshot: &ExecutionSnapshot,
) -> RestartStrategy {
    if failed.writes.is_empty() {
        return RestartStrategy {
            strategy: RestartStrategyKind::IsolatedRetry,
            reason: format!(
                "task '{}' declares no writes, so no other task can have consumed its output",
                failed.id
            ),
            affected_tasks: Vec::new(),
        };
    }

    let affected: Vec<&TaskDefinition> = tasks
        .iter()
        .filter(|t| t.id != failed.id)
        .filter(|t| snapshot.has_started(&t.id))
        .filter(|t| !t.reads.is_disjoint(&failed.writes))
        .collect();

    let written = join_quoted(failed.writes.iter());

    if affected.is_empty() {
        return RestartStrategy {
            strategy: RestartStrategyKind::IsolatedRetry,
            reason: format!(
                "no completed or dispatched task reads {} written by '{}'",
                written, failed.id
            ),
            affected_tasks: Vec::new(),
        };
    }

    let affected_ids: Vec<TaskId> = affected.iter().map(|t| t.id.clone()).collect();
    let consumed = |t: &TaskDefinition| join_quoted(t.reads.intersection(&failed.writes));

    let completed: Vec<String> = affected
        .iter()
        .filter(|t| snapshot.is_completed(&t.id))
        .map(|t| format!("'{}' (reads {})", t.id, consumed(*t)))
        .collect();

    if !completed.is_empty() {
        return RestartStrategy {
            strategy: RestartStrategyKind::Escalate,
            reason: format!(
                "completed task(s) {} already consumed output of failed task '{}'; \
                 automatic recovery is unsafe",
                completed.join(", "),
                failed.id
            ),
            affected_tasks: affected_ids,
        };
    }

    let in_flight: Vec<String> = affected
        .iter()
        .map(|t| format!("'{}' (reads {})", t.id, consumed(*t)))
        .collect();

    RestartStrategy {
        strategy: RestartStrategyKind::CascadeRestart,
        reason: format!(
            "dispatched task(s) {} depend on {} written by failed task '{}' and must restart with it",
            in_flight.join(", "),
            written,
            failed.id
        ),
        affected_tasks: affected_ids,
    }
}

fn join_quoted<'a, I: Iterator<Item = &'a String>>(items: I) -> String {
    items
        .map(|s| format!("'{s}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
