use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::author::AuthorInfo;
use crate::types::dependency::DependencySpec;
use crate::types::manifest::DependencyMapPolicy;

/// `[manifest]` section
///
/// Every key is optional. Unset string keys fall back to `[project]`,
/// `server_version` falls back to `"*"` and `output_directory` to
/// `target/classes` (relative to the project directory).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ManifestSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_by_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes_asset_pack: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_maps: Option<DependencyMapPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<AuthorInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<DependencySpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_dependencies: Option<Vec<DependencySpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_before: Option<Vec<DependencySpec>>,
}

impl ManifestSection {
    /// Layer `top` over `self`; any key set in `top` wins.
    pub fn overlay(self, top: ManifestSection) -> ManifestSection {
        ManifestSection {
            group: top.group.or(self.group),
            name: top.name.or(self.name),
            version: top.version.or(self.version),
            description: top.description.or(self.description),
            website: top.website.or(self.website),
            main: top.main.or(self.main),
            server_version: top.server_version.or(self.server_version),
            disabled_by_default: top.disabled_by_default.or(self.disabled_by_default),
            includes_asset_pack: top.includes_asset_pack.or(self.includes_asset_pack),
            output_directory: top.output_directory.or(self.output_directory),
            dependency_maps: top.dependency_maps.or(self.dependency_maps),
            authors: top.authors.or(self.authors),
            dependencies: top.dependencies.or(self.dependencies),
            optional_dependencies: top.optional_dependencies.or(self.optional_dependencies),
            load_before: top.load_before.or(self.load_before),
        }
    }
}
