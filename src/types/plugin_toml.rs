pub mod implementations;
pub mod sections;

pub use sections::*;

use serde::{Deserialize, Serialize};

pub const PLUGIN_TOML: &str = "plugin.toml";

/// PluginToml: the project description the manifest is generated from.
///
/// `[project]` carries build metadata that doubles as defaults, `[manifest]`
/// carries the plugin-specific configuration and explicit overrides.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PluginToml {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub manifest: ManifestSection,
    #[serde(skip)]
    pub raw: String,
}

// Ignore raw document in comparison.
impl PartialEq for PluginToml {
    fn eq(&self, other: &Self) -> bool {
        self.project == other.project && self.manifest == other.manifest
    }
}

impl Eq for PluginToml {}
