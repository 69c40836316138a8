use std::path::PathBuf;

use crate::errors::ManifestError;
use crate::types::author::AuthorInfo;
use crate::types::dependency::{find_empty_name, DependencySpec};
use crate::types::manifest::DependencyMapPolicy;
use crate::types::plugin_toml::sections::project::Person;

pub const DEFAULT_SERVER_VERSION: &str = "*";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "target/classes";

/// Everything needed to produce one manifest, with defaults already resolved.
///
/// String fields are kept as given (including empty strings); the builder
/// decides what is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestInput {
    pub group: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub main: Option<String>,
    pub server_version: Option<String>,
    pub authors: Vec<AuthorInfo>,
    pub developers: Vec<Person>,
    pub contributors: Vec<Person>,
    pub dependencies: Vec<DependencySpec>,
    pub optional_dependencies: Vec<DependencySpec>,
    pub load_before: Vec<DependencySpec>,
    pub disabled_by_default: bool,
    pub includes_asset_pack: bool,
    pub dependency_maps: DependencyMapPolicy,
    pub output_directory: PathBuf,
}

impl Default for ManifestInput {
    fn default() -> Self {
        ManifestInput {
            group: None,
            name: None,
            version: None,
            description: None,
            website: None,
            main: None,
            server_version: Some(DEFAULT_SERVER_VERSION.to_string()),
            authors: Vec::new(),
            developers: Vec::new(),
            contributors: Vec::new(),
            dependencies: Vec::new(),
            optional_dependencies: Vec::new(),
            load_before: Vec::new(),
            disabled_by_default: false,
            includes_asset_pack: false,
            dependency_maps: DependencyMapPolicy::default(),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
        }
    }
}

impl ManifestInput {
    /// The three dependency lists with the config key each one comes from
    pub fn dependency_lists(&self) -> [(&'static str, &[DependencySpec]); 3] {
        [
            ("dependencies", &self.dependencies),
            ("optional_dependencies", &self.optional_dependencies),
            ("load_before", &self.load_before),
        ]
    }

    /// Reject input that cannot describe a loadable plugin.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.main.is_none() {
            return Err(ManifestError::MissingMain);
        }
        for (list, specs) in self.dependency_lists() {
            if let Some(index) = find_empty_name(specs) {
                return Err(ManifestError::EmptyDependencyName { list, index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let input = ManifestInput::default();
        assert_eq!(input.server_version.as_deref(), Some("*"));
        assert_eq!(input.output_directory, PathBuf::from("target/classes"));
        assert!(!input.disabled_by_default);
        assert!(!input.includes_asset_pack);
        assert_eq!(input.dependency_maps, DependencyMapPolicy::Always);
    }

    #[test]
    fn test_validate_requires_main() {
        let input = ManifestInput::default();
        assert!(matches!(input.validate(), Err(ManifestError::MissingMain)));

        let input = ManifestInput {
            main: Some("com.example.Main".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_dependency_name() {
        let input = ManifestInput {
            main: Some("com.example.Main".to_string()),
            load_before: vec![DependencySpec::new("other", "1.0"), DependencySpec::new("", "1.0")],
            ..Default::default()
        };
        assert!(matches!(
            input.validate(),
            Err(ManifestError::EmptyDependencyName { list: "load_before", index: 1 })
        ));
    }
}
