use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::*;
use crate::errors::PluginTomlError;
use crate::types::dependency::find_empty_name;
use crate::types::manifest_input::{ManifestInput, DEFAULT_OUTPUT_DIRECTORY, DEFAULT_SERVER_VERSION};

impl PluginToml {
    pub fn new(group: String, name: String, version: String, main: String) -> Self {
        let mut pt = Self::default();
        pt.project.group = Some(group);
        pt.project.name = Some(name);
        pt.project.version = Some(version);
        pt.manifest.main = Some(main);
        pt
    }

    pub fn from_string(raw: String) -> Result<Self, PluginTomlError> {
        let document = toml_edit::DocumentMut::from_str(&raw)
            .map_err(PluginTomlError::TomlSyntax)?;
        let pt: PluginToml = toml_edit::de::from_document(document)
            .map_err(PluginTomlError::TomlSchema)?;
        pt.check_dependency_names()?;
        Ok(Self { raw, ..pt })
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn load_from_dir(dir_path: &Path) -> Result<Self, PluginTomlError> {
        Self::load_from_file(&dir_path.join(PLUGIN_TOML))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, PluginTomlError> {
        if !path.exists() {
            return Err(PluginTomlError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(PluginTomlError::EmptyFile);
        }
        Self::from_string(content)
    }

    pub fn write_to_dir(&self, dir_path: &Path) -> Result<PathBuf, PluginTomlError> {
        std::fs::create_dir_all(dir_path)?;
        let file_path = dir_path.join(PLUGIN_TOML);
        std::fs::write(&file_path, self.to_toml()?)?;
        Ok(file_path)
    }

    fn check_dependency_names(&self) -> Result<(), PluginTomlError> {
        let lists = [
            ("dependencies", &self.manifest.dependencies),
            ("optional_dependencies", &self.manifest.optional_dependencies),
            ("load_before", &self.manifest.load_before),
        ];
        for (list, specs) in lists {
            if let Some(index) = specs.as_deref().and_then(find_empty_name) {
                return Err(PluginTomlError::EmptyDependencyName { list, index });
            }
        }
        Ok(())
    }

    /// Resolve every default and produce the builder input.
    ///
    /// A relative `output_directory` is taken relative to `project_root`.
    pub fn to_input(&self, project_root: &Path) -> ManifestInput {
        let project = &self.project;
        let manifest = &self.manifest;

        let output_directory = manifest
            .output_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIRECTORY));

        ManifestInput {
            group: manifest.group.clone().or_else(|| project.group.clone()),
            name: manifest.name.clone().or_else(|| project.name.clone()),
            version: manifest.version.clone().or_else(|| project.version.clone()),
            description: manifest.description.clone().or_else(|| project.description.clone()),
            website: manifest.website.clone().or_else(|| project.url.clone()),
            main: manifest.main.clone(),
            server_version: Some(
                manifest
                    .server_version
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SERVER_VERSION.to_string()),
            ),
            authors: manifest.authors.clone().unwrap_or_default(),
            developers: project.developers.clone(),
            contributors: project.contributors.clone(),
            dependencies: manifest.dependencies.clone().unwrap_or_default(),
            optional_dependencies: manifest.optional_dependencies.clone().unwrap_or_default(),
            load_before: manifest.load_before.clone().unwrap_or_default(),
            disabled_by_default: manifest.disabled_by_default.unwrap_or(false),
            includes_asset_pack: manifest.includes_asset_pack.unwrap_or(false),
            dependency_maps: manifest.dependency_maps.unwrap_or_default(),
            output_directory: resolve_against_project(project_root, output_directory),
        }
    }
}

/// Relative paths are joined onto the project root, absolute ones kept.
pub fn resolve_against_project(project_root: &Path, p: PathBuf) -> PathBuf {
    if p.is_absolute() {
        p
    } else {
        project_root.join(p)
    }
}

