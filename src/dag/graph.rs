// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::dag::hazard::{Hazard, HazardKind};
use crate::dag::task::TaskDefinition;
use crate::errors::{Result, WaveplanError};
use crate::types::TaskId;

/// Directed ordering graph derived from a task set and a subset of its hazards.
///
/// Nodes are added in task-set order, so `NodeIndex::index()` is the position
/// of the task in the input slice. Edges run `source -> target` and are
/// deduplicated: several hazards between the same pair collapse into one edge.
#[derive(Debug)]
pub struct HazardGraph<'a> {
    graph: DiGraph<&'a str, ()>,
}

impl<'a> HazardGraph<'a> {
    /// Build a graph from `tasks`, keeping only hazards whose kind passes
    /// `keep`.
    ///
    /// Fails if two tasks share an id or a kept hazard names an unknown task.
    pub fn build<F>(tasks: &'a [TaskDefinition], hazards: &[Hazard], keep: F) -> Result<Self>
    where
        F: Fn(HazardKind) -> bool,
    {
        let mut graph: DiGraph<&'a str, ()> =
            DiGraph::with_capacity(tasks.len(), hazards.len());
        let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(tasks.len());

        for task in tasks {
            let node = graph.add_node(task.id.as_str());
            if index.insert(task.id.as_str(), node).is_some() {
                return Err(WaveplanError::ConfigError(format!(
                    "duplicate task id '{}' in task set",
                    task.id
                )));
            }
        }

        for hazard in hazards.iter().filter(|h| keep(h.kind)) {
            let source = lookup(&index, &hazard.source)?;
            let target = lookup(&index, &hazard.target)?;
            graph.update_edge(source, target, ());
        }

        Ok(Self { graph })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn task_id(&self, node: NodeIndex) -> &'a str {
        self.graph[node]
    }

    /// Direct predecessors: tasks that must precede `node`.
    pub fn predecessors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(node, Direction::Incoming)
    }

    /// Direct successors: tasks that must follow `node`.
    pub fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(node, Direction::Outgoing)
    }

    /// Every task id that sits on a cycle, in task-set order.
    ///
    /// A cycle is a strongly connected component with more than one node, or
    /// a single node with an edge to itself.
    pub fn cyclic_tasks(&self) -> Vec<TaskId> {
        let mut nodes: Vec<NodeIndex> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| {
                scc.len() > 1 || scc.iter().any(|&n| self.graph.contains_edge(n, n))
            })
            .flatten()
            .collect();
        nodes.sort_by_key(|n| n.index());
        nodes
            .into_iter()
            .map(|n| self.graph[n].to_string())
            .collect()
    }

    /// Topological order of all nodes, or a cycle error naming every task
    /// involved in a cycle.
    pub fn topological_order(&self) -> Result<Vec<NodeIndex>> {
        let cyclic = self.cyclic_tasks();
        if !cyclic.is_empty() {
            return Err(WaveplanError::HazardCycle { tasks: cyclic });
        }

        toposort(&self.graph, None).map_err(|cycle| WaveplanError::HazardCycle {
            tasks: vec![self.graph[cycle.node_id()].to_string()],
        })
    }
}

fn lookup(index: &HashMap<&str, NodeIndex>, task: &str) -> Result<NodeIndex> {
    index
        .get(task)
        .copied()
        .ok_or_else(|| WaveplanError::TaskNotFound(task.to_string()))
}
