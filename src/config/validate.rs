// src/config/validate.rs

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use crate::config::model::{ProjectFile, RawProjectFile};
use crate::errors::{Result, WaveplanError};

impl TryFrom<RawProjectFile> for ProjectFile {
    type Error = WaveplanError;

    fn try_from(raw: RawProjectFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_project(&raw)?;
        Ok(ProjectFile::new_unchecked(raw.component, raw.task))
    }
}

fn validate_raw_project(cfg: &RawProjectFile) -> Result<()> {
    ensure_has_components(cfg)?;
    validate_component_paths(cfg)?;
    validate_component_dependencies(cfg)?;
    validate_task_ids(cfg)?;
    validate_task_touches(cfg)?;
    Ok(())
}

fn ensure_has_components(cfg: &RawProjectFile) -> Result<()> {
    if cfg.component.is_empty() {
        return Err(WaveplanError::ConfigError(
            "project must contain at least one [component.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_component_paths(cfg: &RawProjectFile) -> Result<()> {
    // Identical prefixes in two components leave ownership ambiguous; nested
    // prefixes are fine (longest prefix wins).
    let mut owners: BTreeMap<&PathBuf, &str> = BTreeMap::new();

    for (name, component) in cfg.component.iter() {
        if component.paths.is_empty() {
            return Err(WaveplanError::ConfigError(format!(
                "component '{}' must declare at least one path",
                name
            )));
        }
        for path in component.paths.iter() {
            if path.as_os_str().is_empty() {
                return Err(WaveplanError::ConfigError(format!(
                    "component '{}' declares an empty path",
                    name
                )));
            }
            if let Some(other) = owners.insert(path, name.as_str()) {
                if other != name.as_str() {
                    return Err(WaveplanError::ConfigError(format!(
                        "path {:?} is claimed by both '{}' and '{}'",
                        path, other, name
                    )));
                }
            }
        }
    }
    Ok(())
}

fn validate_component_dependencies(cfg: &RawProjectFile) -> Result<()> {
    for (name, component) in cfg.component.iter() {
        for dep in component.depends_on.iter() {
            if !cfg.component.contains_key(dep) {
                return Err(WaveplanError::ConfigError(format!(
                    "component '{}' has unknown dependency '{}' in `depends_on`",
                    name, dep
                )));
            }
            if dep == name {
                return Err(WaveplanError::ConfigError(format!(
                    "component '{}' cannot depend on itself in `depends_on`",
                    name
                )));
            }
        }
    }
    Ok(())
}

fn validate_task_ids(cfg: &RawProjectFile) -> Result<()> {
    let mut seen = HashSet::new();
    for task in cfg.task.iter() {
        if task.id.trim().is_empty() {
            return Err(WaveplanError::ConfigError(
                "every [[task]] must have a non-empty `id`".to_string(),
            ));
        }
        if !seen.insert(task.id.as_str()) {
            return Err(WaveplanError::ConfigError(format!(
                "duplicate task id '{}'",
                task.id
            )));
        }
    }
    Ok(())
}

fn validate_task_touches(cfg: &RawProjectFile) -> Result<()> {
    for task in cfg.task.iter() {
        let touched = task
            .reads
            .iter()
            .map(|c| ("reads", c))
            .chain(task.writes.iter().map(|c| ("writes", c)));

        for (field, component) in touched {
            if !cfg.component.contains_key(component) {
                return Err(WaveplanError::ConfigError(format!(
                    "task '{}' has unknown component '{}' in `{}`",
                    task.id, component, field
                )));
            }
        }
    }
    Ok(())
}
