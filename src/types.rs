// src/types.rs

use std::collections::BTreeSet;

/// Identifier of a task, unique within a task set.
pub type TaskId = String;

/// Name of a manifest component.
pub type ComponentName = String;

/// Caller-supplied view of execution progress at the moment of a failure.
///
/// The orchestrator owns this state; the scheduler core only reads a snapshot
/// of it. A task id present in both sets is treated as completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionSnapshot {
    pub completed: BTreeSet<TaskId>,
    pub dispatched: BTreeSet<TaskId>,
}

impl ExecutionSnapshot {
    pub fn new<C, D, S>(completed: C, dispatched: D) -> Self
    where
        C: IntoIterator<Item = S>,
        D: IntoIterator<Item = S>,
        S: Into<TaskId>,
    {
        Self {
            completed: completed.into_iter().map(Into::into).collect(),
            dispatched: dispatched.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_completed(&self, task: &str) -> bool {
        self.completed.contains(task)
    }

    /// Whether the task has started at all (completed or dispatched).
    pub fn has_started(&self, task: &str) -> bool {
        self.completed.contains(task) || self.dispatched.contains(task)
    }
}
