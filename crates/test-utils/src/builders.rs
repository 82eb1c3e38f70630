#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use waveplan::config::{ComponentConfig, ProjectFile, RawProjectFile, TaskConfig};
use waveplan::dag::TaskDefinition;
use waveplan::manifest::{Component, Manifest};

/// Builder for `TaskDefinition`s with terse test syntax.
pub struct TaskBuilder {
    task: TaskDefinition,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            task: TaskDefinition::new(id),
        }
    }

    pub fn reads(mut self, component: &str) -> Self {
        self.task.reads.insert(component.to_string());
        self
    }

    pub fn writes(mut self, component: &str) -> Self {
        self.task.writes.insert(component.to_string());
        self
    }

    pub fn mutex(mut self, token: &str) -> Self {
        self.task.mutexes.insert(token.to_string());
        self
    }

    pub fn build(self) -> TaskDefinition {
        self.task
    }
}

/// Builder for an in-memory `Manifest`.
pub struct ManifestBuilder {
    components: Vec<Component>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    pub fn with_component(mut self, name: &str, paths: &[&str]) -> Self {
        self.components
            .push(Component::new(name, paths.iter().map(PathBuf::from)));
        self
    }

    pub fn build(self) -> Manifest {
        Manifest::from_components(self.components)
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a validated `ProjectFile`, mirroring the TOML layout.
pub struct ProjectBuilder {
    project: RawProjectFile,
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self {
            project: RawProjectFile {
                component: BTreeMap::new(),
                task: Vec::new(),
            },
        }
    }

    pub fn with_component(mut self, name: &str, paths: &[&str], depends_on: &[&str]) -> Self {
        self.project.component.insert(
            name.to_string(),
            ComponentConfig {
                paths: paths.iter().map(PathBuf::from).collect(),
                depends_on: depends_on.iter().map(|s| s.to_string()).collect(),
                docs: Vec::new(),
            },
        );
        self
    }

    pub fn with_task(mut self, id: &str, reads: &[&str], writes: &[&str]) -> Self {
        self.project.task.push(TaskConfig {
            id: id.to_string(),
            reads: reads.iter().map(|s| s.to_string()).collect(),
            writes: writes.iter().map(|s| s.to_string()).collect(),
            mutexes: Vec::new(),
        });
        self
    }

    pub fn raw(self) -> RawProjectFile {
        self.project
    }

    pub fn build(self) -> ProjectFile {
        ProjectFile::try_from(self.project).expect("Failed to build valid project from builder")
    }
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}
