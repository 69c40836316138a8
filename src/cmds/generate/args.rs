use clap::Args;
use std::path::PathBuf;

use crate::types::manifest::DependencyMapPolicy;
use crate::types::plugin_toml::ManifestSection;

/// Per-field overrides. Each flag can also be set through its environment
/// variable (a `.env` file in the working directory is loaded at startup).
#[derive(Args, Debug, Default, Clone)]
pub struct ManifestOverrides {
    /// Plugin group
    #[arg(long, env = "HYTALE_MANIFEST_GROUP")]
    pub group: Option<String>,

    /// Plugin name
    #[arg(long, env = "HYTALE_MANIFEST_NAME")]
    pub name: Option<String>,

    /// Plugin version
    #[arg(long = "plugin-version", env = "HYTALE_MANIFEST_VERSION")]
    pub plugin_version: Option<String>,

    /// Plugin description
    #[arg(long, env = "HYTALE_MANIFEST_DESCRIPTION")]
    pub description: Option<String>,

    /// Plugin website
    #[arg(long, env = "HYTALE_MANIFEST_WEBSITE")]
    pub website: Option<String>,

    /// Fully qualified main class
    #[arg(long, env = "HYTALE_MANIFEST_MAIN")]
    pub main: Option<String>,

    /// Supported server version (default: "*")
    #[arg(long, env = "HYTALE_MANIFEST_SERVER_VERSION")]
    pub server_version: Option<String>,

    /// Whether the plugin is disabled by default
    #[arg(long, env = "HYTALE_MANIFEST_DISABLED_BY_DEFAULT", value_name = "BOOL")]
    pub disabled_by_default: Option<bool>,

    /// Whether the plugin includes an asset pack
    #[arg(long, env = "HYTALE_MANIFEST_INCLUDES_ASSET_PACK", value_name = "BOOL")]
    pub includes_asset_pack: Option<bool>,

    /// Output directory (default: target/classes)
    #[arg(short, long, env = "HYTALE_MANIFEST_OUTPUT_DIRECTORY")]
    pub output_directory: Option<PathBuf>,

    /// Leave empty dependency maps out of the manifest instead of writing `{}`
    #[arg(long)]
    pub omit_empty_dependencies: bool,
}

impl ManifestOverrides {
    pub fn to_section(&self) -> ManifestSection {
        ManifestSection {
            group: self.group.clone(),
            name: self.name.clone(),
            version: self.plugin_version.clone(),
            description: self.description.clone(),
            website: self.website.clone(),
            main: self.main.clone(),
            server_version: self.server_version.clone(),
            disabled_by_default: self.disabled_by_default,
            includes_asset_pack: self.includes_asset_pack,
            output_directory: self.output_directory.clone(),
            dependency_maps: self
                .omit_empty_dependencies
                .then_some(DependencyMapPolicy::OmitEmpty),
            ..Default::default()
        }
    }
}

/// Arguments for the generate command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Path to the project (default: current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Configuration file (default: <PATH>/plugin.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ManifestOverrides,

    /// Print the manifest to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}
