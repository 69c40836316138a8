use clap::Args;
use colored::Colorize;
use std::path::Path;

use crate::errors::HytaleError;
use crate::types::manifest_input::DEFAULT_SERVER_VERSION;
use crate::types::plugin_toml::{PluginToml, PLUGIN_TOML};
use crate::utils::Utils;

/// Arguments for the init command
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Path to initialize the project
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: String,

    /// Project group (default: "com.example")
    #[arg(long)]
    pub group: Option<String>,

    /// Project name (default: folder name)
    #[arg(long)]
    pub name: Option<String>,

    /// Project version (default: "1.0.0")
    #[arg(long = "plugin-version")]
    pub plugin_version: Option<String>,

    /// Main class (default: "<group>.Main")
    #[arg(long)]
    pub main: Option<String>,

    /// Force overwrite existing plugin.toml
    #[arg(short, long)]
    pub force: bool,
}

/// Run the init command: write a starter `plugin.toml`.
pub fn run(args: InitArgs) -> Result<(), HytaleError> {
    let project_path = Path::new(&args.path);
    let target = project_path.join(PLUGIN_TOML);
    if target.exists() && !args.force {
        return Err(HytaleError::AlreadyExists(target));
    }

    let folder_name = project_path
        .canonicalize()
        .unwrap_or_else(|_| project_path.to_path_buf())
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "my-plugin".to_string());

    let group = args.group.unwrap_or_else(|| "com.example".to_string());
    let main = args.main.unwrap_or_else(|| format!("{}.Main", group));
    let mut plugin_toml = PluginToml::new(
        group,
        args.name.unwrap_or(folder_name),
        args.plugin_version.unwrap_or_else(|| "1.0.0".to_string()),
        main,
    );
    plugin_toml.manifest.server_version = Some(DEFAULT_SERVER_VERSION.to_string());

    let op = Utils::op_for(&target);
    plugin_toml.write_to_dir(project_path)?;
    Utils::print_status(PLUGIN_TOML, op);

    println!();
    println!("{} Initialized plugin project at {}", "✓".green(), project_path.display());
    println!("  {} Run {} to write manifest.json", "•".cyan(), "hytale-manifest generate".bold());
    Ok(())
}
