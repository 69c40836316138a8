use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide error type to avoid `Box<dyn Error>` in public APIs.
#[derive(Error, Debug)]
pub enum HytaleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("{0}")]
    Manifest(#[from] crate::errors::ManifestError),

    #[error("PluginToml error: {0}")]
    PluginToml(#[from] crate::errors::PluginTomlError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("File already exists: {} (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}
