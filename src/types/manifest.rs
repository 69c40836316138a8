use serde::{Deserialize, Serialize};

use crate::types::author::AuthorInfo;
use crate::types::dependency::DependencyMap;

/// Whether empty dependency maps are written as `{}` or left out.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyMapPolicy {
    #[default]
    Always,
    OmitEmpty,
}

/// The `manifest.json` document read by the server's plugin loader.
///
/// Field order here is the key order in the written file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<AuthorInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencyMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_dependencies: Option<DependencyMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_before: Option<DependencyMap>,
    #[serde(default)]
    pub disabled_by_default: bool,
    #[serde(default)]
    pub includes_asset_pack: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
}

impl Manifest {
    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
