// Central error aggregation module. This file defines the crate-wide `HytaleError`
// and re-exports commonly used error types under `crate::errors::*`.
pub mod hytale;
pub mod manifest;
pub mod plugin_toml;

pub use manifest::ManifestError;
pub use plugin_toml::PluginTomlError;

pub use hytale::HytaleError;
pub type Result<T> = std::result::Result<T, HytaleError>;
