// src/dag/hazard.rs

//! Pairwise hazard detection between tasks.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::dag::task::TaskDefinition;
use crate::types::TaskId;

/// Classification of a conflict between two tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HazardKind {
    /// Read after write: the source writes a component the target reads.
    Raw,
    /// Write after read: the source reads a component the target writes.
    War,
    /// Write after write: both tasks write the same component.
    Waw,
    /// Both tasks hold the same exclusion token.
    Mutex,
}

impl HazardKind {
    /// Whether this kind of hazard forces the target into a later wave.
    ///
    /// WAR hazards are reported but never separate waves on their own.
    pub fn orders_waves(self) -> bool {
        match self {
            HazardKind::Raw | HazardKind::Waw | HazardKind::Mutex => true,
            HazardKind::War => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HazardKind::Raw => "RAW",
            HazardKind::War => "WAR",
            HazardKind::Waw => "WAW",
            HazardKind::Mutex => "MUTEX",
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ordered conflict record between two tasks.
///
/// For RAW/WAR/WAW hazards `component` is a manifest component name; for
/// MUTEX hazards it holds the shared mutex token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hazard {
    pub kind: HazardKind,
    pub source: TaskId,
    pub target: TaskId,
    pub component: String,
}

impl Hazard {
    pub fn new(
        kind: HazardKind,
        source: impl Into<TaskId>,
        target: impl Into<TaskId>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            source: source.into(),
            target: target.into(),
            component: component.into(),
        }
    }
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} on '{}'",
            self.kind, self.source, self.target, self.component
        )
    }
}

/// Find every hazard among all unordered task pairs.
///
/// For each pair `(a, b)` with `a` before `b` in `tasks`, hazards are emitted
/// in the order RAW, WAR, WAW, MUTEX; within a kind, components are emitted
/// in sorted order. The output is therefore fully determined by the input
/// order.
pub fn detect_hazards(tasks: &[TaskDefinition]) -> Vec<Hazard> {
    let mut hazards = Vec::new();

    for (i, a) in tasks.iter().enumerate() {
        for b in tasks.iter().skip(i + 1) {
            push_shared(&mut hazards, HazardKind::Raw, a, b, &a.writes, &b.reads);
            push_shared(&mut hazards, HazardKind::War, a, b, &a.reads, &b.writes);
            push_shared(&mut hazards, HazardKind::Waw, a, b, &a.writes, &b.writes);
            push_shared(&mut hazards, HazardKind::Mutex, a, b, &a.mutexes, &b.mutexes);
        }
    }

    debug!(
        tasks = tasks.len(),
        hazards = hazards.len(),
        "hazard detection complete"
    );
    hazards
}

fn push_shared(
    out: &mut Vec<Hazard>,
    kind: HazardKind,
    source: &TaskDefinition,
    target: &TaskDefinition,
    left: &BTreeSet<String>,
    right: &BTreeSet<String>,
) {
    for shared in left.intersection(right) {
        out.push(Hazard::new(
            kind,
            source.id.clone(),
            target.id.clone(),
            shared.clone(),
        ));
    }
}

/// Reduce hazards to the distinct unordered task pairs that conflict.
///
/// Pairs are returned in first-seen order, each as `(source, target)` of the
/// first hazard that mentioned them.
pub fn conflicting_pairs(hazards: &[Hazard]) -> Vec<(TaskId, TaskId)> {
    let mut seen: BTreeSet<(&str, &str)> = BTreeSet::new();
    let mut pairs = Vec::new();

    for h in hazards {
        let key = if h.source <= h.target {
            (h.source.as_str(), h.target.as_str())
        } else {
            (h.target.as_str(), h.source.as_str())
        };
        if seen.insert(key) {
            pairs.push((h.source.clone(), h.target.clone()));
        }
    }

    pairs
}
