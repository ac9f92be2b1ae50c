//! gddoc: generate per-class documentation from an annotated Godot project.
//!
//! `gddoc -p path/to/project -o docs/classes`
//!
//! Every script outside `addons/` and the script-templates directory is
//! parsed; each class is written to `<output>/<ancestors>/<name>.md`.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use gddoc::hierarchy::{self, Placement, ResolveOptions};
use gddoc::registry::{self, ClassRegistry, CollisionPolicy};
use gddoc::render::{self, Renderer};
use gddoc::{discover, parser};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};

#[derive(Parser)]
#[command(
    name = "gddoc",
    about = "Generate markdown documentation files for the GDScript classes of a Godot project"
)]
struct Cli {
    /// Path to the Godot project with gd scripts [default: current directory]
    #[arg(short = 'p', long)]
    project: Option<PathBuf>,

    /// Directory to save generated files to [default: ./gd_docs]
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Template file used for markdown output instead of the built-in one
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// Script templates directory, relative to the project directory
    #[arg(short = 's', long, default_value = "script_templates")]
    script_templates: PathBuf,

    /// Only document scripts that declare a class_name
    #[arg(short = 'n', long)]
    named_only: bool,

    /// Do not ask before clearing a non-empty output directory
    #[arg(short = 'i', long)]
    ignore_warnings: bool,

    /// Output format: markdown (default) or json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Fail when two scripts resolve to the same class name
    #[arg(long)]
    strict_names: bool,

    /// Also mirror each script's own directory below its ancestors
    #[arg(long)]
    mirror_dirs: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    run(&cli)
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let project = cli.project.clone().unwrap_or_else(|| cwd.clone());
    let output_dir = cli.output.clone().unwrap_or_else(|| cwd.join("gd_docs"));

    // Parse and place every class before the old output is cleared.
    let template = cli
        .template
        .as_deref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("failed to read template: {}", path.display()))
        })
        .transpose()?;
    let renderer = render::create_renderer(&cli.format, template)?;

    let policy = if cli.strict_names {
        CollisionPolicy::Reject
    } else {
        CollisionPolicy::Overwrite
    };
    let registry = collect_classes(&project, &cli.script_templates, cli.named_only, policy)?;

    let options = ResolveOptions {
        mirror_source_dirs: cli.mirror_dirs,
    };
    let placements = hierarchy::resolve_all(&registry, options)?;

    if !prepare_output(&output_dir, cli.ignore_warnings)? {
        eprintln!("Exiting");
        return Ok(());
    }

    write_documents(&registry, &placements, renderer.as_ref(), &output_dir)
}

/// Make sure `output_dir` exists and is empty. Returns `false` when the user
/// declines clearing it.
fn prepare_output(output_dir: &Path, ignore_warnings: bool) -> Result<bool> {
    let non_empty = output_dir.is_dir()
        && fs::read_dir(output_dir)
            .with_context(|| format!("failed to read directory: {}", output_dir.display()))?
            .next()
            .is_some();

    if non_empty {
        if !ignore_warnings && !confirm_wipe(output_dir)? {
            return Ok(false);
        }
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("failed to clear {}", output_dir.display()))?;
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;
    Ok(true)
}

fn confirm_wipe(output_dir: &Path) -> Result<bool> {
    let mut stderr = io::stderr();
    writeln!(
        stderr,
        "Output directory {} is non-empty. If you continue, all of its contents will be deleted.",
        output_dir.display()
    )?;
    writeln!(stderr, "Do you want to continue? y/n")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read answer")?;
    Ok(answer.trim() == "y")
}

/// Parse every script of the project into a registry.
fn collect_classes(
    project: &Path,
    script_templates: &Path,
    named_only: bool,
    policy: CollisionPolicy,
) -> Result<ClassRegistry> {
    let mut registry = ClassRegistry::new(policy);

    for relative in discover::discover_scripts(project, script_templates)? {
        let label = discover::source_label(&relative);
        let full = project.join(&relative);
        let source = fs::read_to_string(&full)
            .with_context(|| format!("failed to read {}", full.display()))?;

        let doc = match parser::parse(&label, &source) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("skipping {}", e);
                continue;
            }
        };
        if named_only && doc.name.is_none() {
            debug!("skipping unnamed class {}", label);
            continue;
        }

        let name = registry::resolved_name(&doc);
        registry.insert(name, doc)?;
    }

    info!(classes = registry.len(), "parsed project {}", project.display());
    Ok(registry)
}

fn write_documents(
    registry: &ClassRegistry,
    placements: &[Placement],
    renderer: &dyn Renderer,
    output_dir: &Path,
) -> Result<()> {
    for placement in placements {
        let Some(doc) = registry.get(&placement.name) else {
            continue;
        };
        let out_path = output_dir.join(placement.file_path(renderer.file_extension()));
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }

        let output = renderer.render(doc)?;
        fs::write(&out_path, output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!("wrote {}", out_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["gddoc"]);
        assert_eq!(cli.script_templates, PathBuf::from("script_templates"));
        assert_eq!(cli.format, "markdown");
        assert!(!cli.named_only && !cli.ignore_warnings && !cli.strict_names);
    }

    #[test]
    fn prepare_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("docs");
        assert!(prepare_output(&out, false).unwrap());
        assert!(out.is_dir());
    }

    #[test]
    fn prepare_clears_when_warnings_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("stale.md"), "old").unwrap();
        assert!(prepare_output(dir.path(), true).unwrap());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
