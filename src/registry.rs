//! Parsed classes keyed by the name they are documented under.
//!
//! Named classes use their `class_name`; anonymous scripts get a name built
//! from their project-relative path (`enemies/slime.gd` → `enemies-slime.gd`).

use crate::error::RegistryError;
use crate::model::ClassDocument;
use std::collections::BTreeMap;
use tracing::warn;

/// What to do when two scripts resolve to the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Later script replaces the earlier one (logged).
    #[default]
    Overwrite,
    /// Refuse the later script.
    Reject,
}

#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: BTreeMap<String, ClassDocument>,
    policy: CollisionPolicy,
}

impl ClassRegistry {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            classes: BTreeMap::new(),
            policy,
        }
    }

    /// Register `doc` under `name`. Under [`CollisionPolicy::Overwrite`] the
    /// replaced document is returned so callers can report it.
    pub fn insert(
        &mut self,
        name: String,
        doc: ClassDocument,
    ) -> Result<Option<ClassDocument>, RegistryError> {
        if let Some(previous) = self.classes.get(&name) {
            match self.policy {
                CollisionPolicy::Reject => {
                    return Err(RegistryError::Collision {
                        name,
                        previous: previous.file_path.clone(),
                        current: doc.file_path,
                    });
                }
                CollisionPolicy::Overwrite => {
                    warn!(
                        name = name.as_str(),
                        previous = previous.file_path.as_str(),
                        current = doc.file_path.as_str(),
                        "class name declared twice, keeping the later script"
                    );
                }
            }
        }
        Ok(self.classes.insert(name, doc))
    }

    pub fn get(&self, name: &str) -> Option<&ClassDocument> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassDocument)> {
        self.classes.iter().map(|(name, doc)| (name.as_str(), doc))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Name a class is registered under: its `class_name`, or the path-based
/// name when it has none.
pub fn resolved_name(doc: &ClassDocument) -> String {
    doc.name
        .clone()
        .unwrap_or_else(|| path_based_name(&doc.file_path))
}

/// "enemies/slime.gd" → "enemies-slime.gd"
pub fn path_based_name(relative_path: &str) -> String {
    relative_path
        .split(['/', '\\'])
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("-")
}
