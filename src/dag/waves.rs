// src/dag/waves.rs

//! Greedy topological leveling of tasks into parallel waves.

use tracing::debug;

use crate::dag::graph::HazardGraph;
use crate::dag::hazard::{Hazard, HazardKind};
use crate::dag::task::TaskDefinition;
use crate::errors::Result;
use crate::types::TaskId;

/// A set of tasks that may run concurrently, in task-set order.
pub type Wave = Vec<TaskId>;

/// Partition `tasks` into ordered waves.
///
/// RAW, WAW and MUTEX hazards force the target into a strictly later wave
/// than the source. WAR hazards do not constrain placement: a task that reads
/// a component may share a wave with a later task that writes it.
///
/// Each task lands in the earliest wave its constraints allow: wave 0 if it
/// has no constraining predecessor, otherwise one past the latest wave of its
/// predecessors.
///
/// Returns [`WaveplanError::HazardCycle`](crate::errors::WaveplanError::HazardCycle)
/// if the constraining hazards form a cycle, and
/// [`WaveplanError::TaskNotFound`](crate::errors::WaveplanError::TaskNotFound)
/// if a hazard names a task outside `tasks`.
pub fn compute_waves(tasks: &[TaskDefinition], hazards: &[Hazard]) -> Result<Vec<Wave>> {
    let graph = HazardGraph::build(tasks, hazards, HazardKind::orders_waves)?;
    let order = graph.topological_order()?;

    let mut level = vec![0usize; graph.node_count()];
    for node in order {
        level[node.index()] = graph
            .predecessors(node)
            .map(|pred| level[pred.index()] + 1)
            .max()
            .unwrap_or(0);
    }

    let wave_count = level.iter().max().map_or(0, |deepest| deepest + 1);
    let mut waves: Vec<Wave> = vec![Vec::new(); wave_count];
    for (task, &lvl) in tasks.iter().zip(level.iter()) {
        waves[lvl].push(task.id.clone());
    }

    debug!(
        tasks = tasks.len(),
        waves = waves.len(),
        "wave planning complete"
    );
    Ok(waves)
}

/// Index of the wave containing `task`, if any.
pub fn wave_index_of(waves: &[Wave], task: &str) -> Option<usize> {
    waves
        .iter()
        .position(|wave| wave.iter().any(|id| id == task))
}
