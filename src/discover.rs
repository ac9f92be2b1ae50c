//! Script discovery inside a Godot project.
//!
//! Every `*.gd` file below the project root is collected, except those in
//! `addons/` (third-party plugins) and in the script-templates directory.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

const ADDONS_DIR: &str = "addons";

/// Project-relative paths of all documentable scripts, sorted.
pub fn discover_scripts(project: &Path, script_templates: &Path) -> Result<Vec<PathBuf>> {
    // glob yields `./a.gd` as `a.gd`, so a leading `.` must not reach the
    // prefix and exclusion checks.
    let project = strip_cur_dir(project);
    let pattern = if project.as_os_str().is_empty() {
        "**/*.gd".to_string()
    } else {
        format!("{}/**/*.gd", glob::Pattern::escape(&project.to_string_lossy()))
    };
    let excluded = [project.join(ADDONS_DIR), project.join(script_templates)];

    let mut scripts = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("invalid glob pattern: {}", pattern))? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                debug!("unreadable entry while scanning: {}", e);
                continue;
            }
        };
        if !path.is_file() || excluded.iter().any(|dir| path.starts_with(dir)) {
            continue;
        }
        let relative = path
            .strip_prefix(&project)
            .with_context(|| format!("{} is outside {}", path.display(), project.display()))?;
        scripts.push(relative.to_path_buf());
    }

    // Sort for deterministic output
    scripts.sort();
    scripts.dedup();
    Ok(scripts)
}

/// `project` without leading `.` components; empty for the current directory.
fn strip_cur_dir(project: &Path) -> PathBuf {
    project
        .components()
        .skip_while(|c| matches!(c, Component::CurDir))
        .collect()
}

/// Forward-slash form of a project-relative path, as stored in documents.
pub fn source_label(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "extends Node\n").unwrap();
    }

    #[test]
    fn skips_addons_and_templates() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.gd");
        touch(dir.path(), "actors/player.gd");
        touch(dir.path(), "addons/plugin/plugin.gd");
        touch(dir.path(), "script_templates/Node/default.gd");
        touch(dir.path(), "readme.txt");

        let found = discover_scripts(dir.path(), Path::new("script_templates")).unwrap();
        assert_eq!(
            found,
            vec![PathBuf::from("actors/player.gd"), PathBuf::from("main.gd")]
        );
    }

    #[test]
    fn custom_template_dir() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "tpl/x.gd");
        touch(dir.path(), "script_templates/y.gd");

        let found = discover_scripts(dir.path(), Path::new("tpl")).unwrap();
        assert_eq!(found, vec![PathBuf::from("script_templates/y.gd")]);
    }

    #[test]
    fn relative_project_path() {
        let dir = TempDir::new_in(".").unwrap();
        touch(dir.path(), "a/x.gd");
        touch(dir.path(), "addons/p/p.gd");
        assert!(dir.path().starts_with("."));

        let found = discover_scripts(dir.path(), Path::new("script_templates")).unwrap();
        assert_eq!(found, vec![PathBuf::from("a/x.gd")]);
    }

    #[test]
    fn cur_dir_is_stripped() {
        assert_eq!(strip_cur_dir(Path::new(".")), PathBuf::new());
        assert_eq!(strip_cur_dir(Path::new("./sub/")), PathBuf::from("sub"));
        assert_eq!(strip_cur_dir(Path::new("/abs/p")), PathBuf::from("/abs/p"));
    }

    #[test]
    fn label_uses_forward_slashes() {
        assert_eq!(source_label(Path::new("a/b/c.gd")), "a/b/c.gd");
    }
}
