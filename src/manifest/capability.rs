// src/manifest/capability.rs

//! After-the-fact check that a task only modified files it was allowed to.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::manifest::Manifest;
use crate::manifest::ownership::resolve_owner;
use crate::types::ComponentName;

/// A modified file that falls outside the task's declared write scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityViolation {
    pub file: PathBuf,
    /// Component that actually owns the file, or `None` if unowned.
    pub owner: Option<ComponentName>,
}

impl fmt::Display for CapabilityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.owner {
            Some(owner) => write!(f, "{} (owned by '{}')", self.file.display(), owner),
            None => write!(f, "{} (no owning component)", self.file.display()),
        }
    }
}

/// Report every modified file whose owner is missing or not in `writes`.
///
/// Violations are returned in the order of `modified`. An empty result means
/// the task stayed inside its declared scope. This never fails: what to do
/// about violations is up to the caller.
pub fn verify_capabilities(
    modified: &[PathBuf],
    writes: &BTreeSet<ComponentName>,
    manifest: &Manifest,
) -> Vec<CapabilityViolation> {
    let violations: Vec<CapabilityViolation> = modified
        .iter()
        .filter_map(|file| {
            let owner = resolve_owner(file, manifest);
            match owner {
                Some(name) if writes.contains(name) => None,
                _ => Some(CapabilityViolation {
                    file: file.clone(),
                    owner: owner.map(str::to_string),
                }),
            }
        })
        .collect();

    if violations.is_empty() {
        debug!(files = modified.len(), "capability check passed");
    } else {
        warn!(
            files = modified.len(),
            violations = violations.len(),
            "files modified outside declared write scope"
        );
    }

    violations
}
