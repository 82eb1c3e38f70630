// src/dag/critical_path.rs

//! Longest read-after-write chain through a task set.

use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::dag::graph::HazardGraph;
use crate::dag::hazard::{Hazard, HazardKind};
use crate::dag::task::TaskDefinition;
use crate::errors::Result;
use crate::types::TaskId;

/// The longest RAW-dependent chain of tasks.
///
/// `length` counts tasks, not time: a lone task has length 1 and an empty
/// task set has length 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CriticalPath {
    pub tasks: Vec<TaskId>,
    pub length: usize,
}

/// Compute the critical path over the RAW hazards in `hazards`.
///
/// Other hazard kinds are ignored. Ties between chains of equal length are
/// broken in favour of the task that comes first in `tasks`, both for the
/// starting task and at every step along the chain.
pub fn critical_path(tasks: &[TaskDefinition], hazards: &[Hazard]) -> Result<CriticalPath> {
    let graph = HazardGraph::build(tasks, hazards, |kind| kind == HazardKind::Raw)?;
    let order = graph.topological_order()?;
    let n = graph.node_count();

    // chain[i]: number of tasks in the longest chain starting at node i.
    let mut chain = vec![0usize; n];
    let mut next: Vec<Option<NodeIndex>> = vec![None; n];

    for &node in order.iter().rev() {
        let mut best: Option<NodeIndex> = None;
        for succ in graph.successors(node) {
            best = match best {
                Some(current) if !longer(&chain, succ, current) => Some(current),
                _ => Some(succ),
            };
        }
        chain[node.index()] = 1 + best.map_or(0, |b| chain[b.index()]);
        next[node.index()] = best;
    }

    let start = (0..n)
        .map(NodeIndex::new)
        .reduce(|best, candidate| {
            if longer(&chain, candidate, best) {
                candidate
            } else {
                best
            }
        });

    let mut path = Vec::new();
    let mut cursor = start;
    while let Some(node) = cursor {
        path.push(graph.task_id(node).to_string());
        cursor = next[node.index()];
    }

    debug!(length = path.len(), "critical path computed");
    Ok(CriticalPath {
        length: path.len(),
        tasks: path,
    })
}

/// Whether `a` starts a strictly better chain than `b`: longer, or equally
/// long and earlier in task-set order.
fn longer(chain: &[usize], a: NodeIndex, b: NodeIndex) -> bool {
    let (ca, cb) = (chain[a.index()], chain[b.index()]);
    ca > cb || (ca == cb && a.index() < b.index())
}
