// src/manifest/ownership.rs

use std::path::{Component, Path, PathBuf};

use crate::manifest::Manifest;

/// Return the component owning `file`, or `None` if no component claims it.
///
/// A prefix claims a path when the path equals it or is nested under it,
/// compared component-wise (`/src/auth2` is not under `/src/auth`). Both
/// sides are normalized lexically first, so `/src/api/../auth/x.rs` is under
/// `/src/auth`. Symlinks are not resolved. The longest matching prefix wins.
/// Equal-length matches from different components resolve to the
/// lexicographically first component name.
pub fn resolve_owner<'m>(file: &Path, manifest: &'m Manifest) -> Option<&'m str> {
    let file = normalize(file);
    let mut best: Option<(&'m str, usize)> = None;

    // Components iterate in name order, so a strict `>` keeps the first name
    // on ties.
    for component in manifest.components() {
        for prefix in &component.paths {
            let prefix = normalize(prefix);
            if !file.starts_with(&prefix) {
                continue;
            }
            let len = prefix.components().count();
            match best {
                Some((_, best_len)) if best_len >= len => {}
                _ => best = Some((component.name.as_str(), len)),
            }
        }
    }

    best.map(|(name, _)| name)
}

/// Drop `.` segments and fold `..` into its parent without touching the
/// filesystem. A `..` with nothing to pop is kept, except directly under the
/// root where it is a no-op.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for part in path.components() {
        match part {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(part),
            },
            other => out.push(other),
        }
    }
    out
}
