//! # Generate Command
//!
//! Write `manifest.json` for a Hytale plugin from `plugin.toml`.
//!
//! ## Functionality
//!
//! - Reads `[project]` metadata and `[manifest]` configuration
//! - Applies command-line / environment overrides
//! - Normalizes the result and writes `<output_directory>/manifest.json`
//!
//! ## Example
//!
//! ```bash
//! # Generate for the current project
//! hytale-manifest generate
//!
//! # Override the version from CI
//! HYTALE_MANIFEST_VERSION=1.4.2 hytale-manifest generate ./my-plugin
//! ```

pub mod args;

use colored::Colorize;
use std::path::{Path, PathBuf};

pub use args::{GenerateArgs, ManifestOverrides};

use crate::builder::build_manifest;
use crate::errors::HytaleError;
use crate::types::manifest_input::ManifestInput;
use crate::types::plugin_toml::PluginToml;
use crate::utils::Utils;
use crate::writer::{write_manifest, MANIFEST_FILE};

/// Load the configuration for a project and resolve it into builder input.
///
/// Returns the project root alongside the input so callers can print paths
/// relative to it.
pub fn resolve_input(
    path: &str,
    config: Option<&Path>,
    overrides: &ManifestOverrides,
) -> Result<(PathBuf, ManifestInput), HytaleError> {
    let project_path = Path::new(path);
    let project_root = match project_path.canonicalize() {
        Ok(p) => p,
        Err(_) => project_path.to_path_buf(),
    };

    let mut plugin_toml = match config {
        Some(file) => PluginToml::load_from_file(file)?,
        None => PluginToml::load_from_dir(&project_root)?,
    };
    plugin_toml.manifest = std::mem::take(&mut plugin_toml.manifest).overlay(overrides.to_section());

    let input = plugin_toml.to_input(&project_root);
    Ok((project_root, input))
}

/// Run the generate command
///
/// ## Steps
///
/// 1. Load `plugin.toml` and apply overrides
/// 2. Validate the input
/// 3. Build the manifest
/// 4. Write it (or print it with `--dry-run`)
pub fn run(args: GenerateArgs) -> Result<(), HytaleError> {
    let (project_root, input) = resolve_input(&args.path, args.config.as_deref(), &args.overrides)?;
    input.validate()?;
    let manifest = build_manifest(&input);

    if args.dry_run {
        println!("{}", manifest.to_json()?);
        return Ok(());
    }

    println!("{}", "Generating manifest...".bold().cyan());
    println!();

    let plugin = match (manifest.name.as_deref(), manifest.version.as_deref()) {
        (Some(name), Some(version)) => format!("{} v{}", name, version),
        (Some(name), None) => name.to_string(),
        (None, _) => "<unnamed>".to_string(),
    };
    println!("  {} Plugin: {}", "•".cyan(), plugin.bold());
    println!(
        "  {} Output: {}",
        "•".cyan(),
        input.output_directory.display().to_string().dimmed()
    );
    println!();

    let target = input.output_directory.join(MANIFEST_FILE);
    let op = Utils::op_for(&target);
    let written = write_manifest(&manifest, &input.output_directory)?;
    Utils::print_status(&Utils::display_relative(&target, &project_root), op);

    println!();
    println!("{} Generated manifest file at {}", "✓".green(), written.display());
    Ok(())
}
