// src/dag/task.rs

//! The minimal task shape the scheduler needs.

use std::collections::BTreeSet;

use crate::types::{ComponentName, TaskId};

/// A task as seen by the hazard analysis: an id plus its declared touches.
///
/// `reads`, `writes` and `mutexes` are sets, so duplicates collapse and
/// declaration order does not matter. A component may be both read and
/// written by the same task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefinition {
    pub id: TaskId,
    pub reads: BTreeSet<ComponentName>,
    pub writes: BTreeSet<ComponentName>,
    pub mutexes: BTreeSet<String>,
}

impl TaskDefinition {
    /// Task with no declared touches.
    pub fn new<N: Into<TaskId>>(id: N) -> Self {
        Self {
            id: id.into(),
            reads: BTreeSet::new(),
            writes: BTreeSet::new(),
            mutexes: BTreeSet::new(),
        }
    }

    pub fn with_reads<I, S>(mut self, reads: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ComponentName>,
    {
        self.reads.extend(reads.into_iter().map(Into::into));
        self
    }

    pub fn with_writes<I, S>(mut self, writes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ComponentName>,
    {
        self.writes.extend(writes.into_iter().map(Into::into));
        self
    }

    pub fn with_mutexes<I, S>(mut self, mutexes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mutexes.extend(mutexes.into_iter().map(Into::into));
        self
    }
}
