// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ProjectFile, RawProjectFile};
use crate::errors::Result;

/// Load a project file from a given path and return the raw `RawProjectFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (unknown components, duplicate task ids, ...). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawProjectFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let project: RawProjectFile = toml::from_str(&contents)?;

    Ok(project)
}

/// Load a project file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde`).
/// - Checks for:
///   - components without paths or with clashing paths,
///   - unknown `depends_on` references,
///   - duplicate or empty task ids,
///   - tasks touching unknown components.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ProjectFile> {
    let raw_project = load_from_path(&path)?;
    let project = ProjectFile::try_from(raw_project)?;
    Ok(project)
}

/// Default project file name, looked up in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Waveplan.toml")
}

/// Directory that relative component paths are resolved against.
///
/// - If the config path has a non-empty parent (e.g. "plans/Waveplan.toml"),
///   that directory is used.
/// - For a bare filename like "Waveplan.toml" we fall back to the current
///   working directory.
pub fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
