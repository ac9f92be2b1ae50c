//! Output placement from inheritance chains.
//!
//! A class is written below the directories of its ancestors, root-most
//! first: `Player → Actor → Node2D` places `Player` at `Actor/Player.md`.
//! Engine classes such as `Node2D` add no directory; an `extends` pointing
//! at a script that was not parsed adds one final directory named after
//! that script.

use crate::error::ResolveError;
use crate::registry::ClassRegistry;
use std::path::{Path, PathBuf};

const SCRIPT_EXTENSION: &str = ".gd";
const PROJECT_ROOT_PREFIX: &str = "res://";

/// Where one class ends up, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Registry name, used as the file stem.
    pub name: String,
    pub dir: PathBuf,
}

impl Placement {
    pub fn file_path(&self, extension: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, extension))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Append the directory the script lives in below the ancestor chain.
    pub mirror_source_dirs: bool,
}

/// Place every registered class.
pub fn resolve_all(
    registry: &ClassRegistry,
    options: ResolveOptions,
) -> Result<Vec<Placement>, ResolveError> {
    registry
        .iter()
        .map(|(name, _)| resolve(registry, name, options))
        .collect()
}

/// Place one registered class. Unknown names get an empty ancestor chain.
pub fn resolve(
    registry: &ClassRegistry,
    name: &str,
    options: ResolveOptions,
) -> Result<Placement, ResolveError> {
    let mut dir: PathBuf = ancestor_segments(registry, name)?.iter().collect();

    if options.mirror_source_dirs {
        if let Some(parent) = registry
            .get(name)
            .and_then(|doc| Path::new(&doc.file_path).parent())
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            dir.push(parent);
        }
    }

    Ok(Placement {
        name: name.to_string(),
        dir,
    })
}

/// Ancestor directory names for `name`, root-most first.
pub fn ancestor_segments(registry: &ClassRegistry, name: &str) -> Result<Vec<String>, ResolveError> {
    let mut chain = vec![name.to_string()];
    let mut segments = Vec::new();
    let mut base = registry
        .get(name)
        .map(|doc| doc.extends.clone())
        .unwrap_or_default();

    while !base.is_empty() {
        let ancestor = if registry.contains(&base) {
            base.clone()
        } else {
            match normalize_script_ref(&base) {
                Some(script) if registry.contains(&script) => script,
                Some(script) => {
                    // A script outside the parsed set ends the walk.
                    segments.push(script);
                    break;
                }
                None => break,
            }
        };
        if chain.contains(&ancestor) {
            chain.push(ancestor);
            return Err(ResolveError::Cycle {
                class: name.to_string(),
                chain,
            });
        }

        segments.push(ancestor.clone());
        base = registry
            .get(&ancestor)
            .map(|doc| doc.extends.clone())
            .unwrap_or_default();
        chain.push(ancestor);
    }

    segments.reverse();
    Ok(segments)
}

/// `"res://actors/actor.gd"` → `actors-actor.gd`. `None` when `reference`
/// is not a script path.
pub fn normalize_script_ref(reference: &str) -> Option<String> {
    let unquoted = reference.replace(['"', '\''], "");
    if !unquoted.ends_with(SCRIPT_EXTENSION) {
        return None;
    }
    let relative = unquoted
        .strip_prefix(PROJECT_ROOT_PREFIX)
        .unwrap_or(&unquoted);
    Some(relative.replace('/', "-"))
}
