// src/config/mod.rs

//! Project file loading and validation.
//!
//! The project file is the manifest and plan provider for the CLI:
//! - `model.rs` defines the TOML-backed data model.
//! - `loader.rs` reads a project file from disk.
//! - `validate.rs` turns a raw file into a validated [`ProjectFile`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{config_root_dir, default_config_path, load_and_validate, load_from_path};
pub use model::{ComponentConfig, ProjectFile, RawProjectFile, TaskConfig};
