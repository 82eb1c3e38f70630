// src/manifest/mod.rs

//! Component manifest plus the two path-based checks built on it.
//!
//! - [`ownership`] maps a file path to the most specific owning component.
//! - [`capability`] checks modified files against a task's write scope.

pub mod capability;
pub mod ownership;

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::types::ComponentName;

pub use capability::{CapabilityViolation, verify_capabilities};
pub use ownership::resolve_owner;

/// A named logical unit of the codebase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: ComponentName,
    /// Filesystem prefixes owned by this component.
    pub paths: Vec<PathBuf>,
    /// Components this one statically depends on.
    pub depends_on: Vec<ComponentName>,
    pub docs: Vec<String>,
}

impl Component {
    pub fn new<N, I, P>(name: N, paths: I) -> Self
    where
        N: Into<ComponentName>,
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            name: name.into(),
            paths: paths.into_iter().map(Into::into).collect(),
            depends_on: Vec::new(),
            docs: Vec::new(),
        }
    }
}

/// Read-only mapping from component name to [`Component`].
///
/// Components are kept in name order, which makes every walk over the
/// manifest deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    components: BTreeMap<ComponentName, Component>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manifest from components, keyed by their names.
    ///
    /// A later component with the same name replaces an earlier one; the
    /// config loader rejects such manifests before they get here.
    pub fn from_components<I: IntoIterator<Item = Component>>(components: I) -> Self {
        Self {
            components: components
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Static `depends_on` list of a component (empty if unknown).
    pub fn component_dependencies(&self, name: &str) -> &[ComponentName] {
        self.components
            .get(name)
            .map(|c| c.depends_on.as_slice())
            .unwrap_or(&[])
    }
}
