use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginTomlError {
	#[error("TOML syntax error: {0}")]
	TomlSyntax(#[from] toml_edit::TomlError),
	#[error("TOML schema error: {0}")]
	TomlSchema(#[from] toml_edit::de::Error),
	#[error("TOML serialization error: {0}")]
	TomlSer(#[from] toml::ser::Error),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("plugin.toml not found: {}", .0.display())]
	NotFound(PathBuf),
	#[error("plugin.toml is empty")]
	EmptyFile,
	#[error("Dependency #{index} in [manifest.{list}] has an empty name")]
	EmptyDependencyName { list: &'static str, index: usize },
}
