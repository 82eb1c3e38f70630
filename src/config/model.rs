// src/config/model.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dag::TaskDefinition;
use crate::manifest::{Component, Manifest};

/// Top-level project file as read from TOML, before validation.
///
/// ```toml
/// [component.auth]
/// paths = ["src/auth"]
/// depends_on = ["core"]
///
/// [component.core]
/// paths = ["src/core"]
///
/// [[task]]
/// id = "T1"
/// writes = ["auth"]
///
/// [[task]]
/// id = "T2"
/// reads = ["auth"]
/// mutexes = ["port:8080"]
/// ```
///
/// Tasks are an array of tables so that file order is kept; hazard
/// detection depends on it.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawProjectFile {
    /// All components from `[component.<name>]`.
    #[serde(default)]
    pub component: BTreeMap<String, ComponentConfig>,

    /// All tasks from `[[task]]`, in file order.
    #[serde(default)]
    pub task: Vec<TaskConfig>,
}

/// Validated project file.
///
/// Can only be constructed through `TryFrom<RawProjectFile>` (see
/// `config::validate`), so holding one means the manifest and plan are
/// consistent.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    component: BTreeMap<String, ComponentConfig>,
    task: Vec<TaskConfig>,
}

impl ProjectFile {
    pub(crate) fn new_unchecked(
        component: BTreeMap<String, ComponentConfig>,
        task: Vec<TaskConfig>,
    ) -> Self {
        Self { component, task }
    }

    pub fn components(&self) -> &BTreeMap<String, ComponentConfig> {
        &self.component
    }

    /// Build the manifest, resolving relative component paths against `root`.
    pub fn manifest(&self, root: &Path) -> Manifest {
        Manifest::from_components(self.component.iter().map(|(name, cfg)| Component {
            name: name.clone(),
            paths: cfg.paths.iter().map(|p| root.join(p)).collect(),
            depends_on: cfg.depends_on.clone(),
            docs: cfg.docs.clone(),
        }))
    }

    /// Task definitions in file order.
    pub fn tasks(&self) -> Vec<TaskDefinition> {
        self.task.iter().map(TaskConfig::to_definition).collect()
    }
}

/// `[component.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentConfig {
    /// Path prefixes owned by this component. Must not be empty.
    pub paths: Vec<PathBuf>,

    /// Names of components this one statically depends on.
    #[serde(default)]
    pub depends_on: Vec<String>,

    /// Documentation references; informational only.
    #[serde(default)]
    pub docs: Vec<String>,
}

/// One `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub id: String,

    /// Components this task depends on.
    #[serde(default)]
    pub reads: Vec<String>,

    /// Components this task may modify.
    #[serde(default)]
    pub writes: Vec<String>,

    /// Exclusion tokens (shared ports, external resources, ...).
    #[serde(default)]
    pub mutexes: Vec<String>,
}

impl TaskConfig {
    pub fn to_definition(&self) -> TaskDefinition {
        TaskDefinition::new(self.id.clone())
            .with_reads(self.reads.iter().cloned())
            .with_writes(self.writes.iter().cloned())
            .with_mutexes(self.mutexes.iter().cloned())
    }
}
