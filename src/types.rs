pub mod author;
pub mod dependency;
pub mod manifest;
pub mod manifest_input;
pub mod plugin_toml;

pub use author::AuthorInfo;
pub use dependency::{DependencyMap, DependencySpec};
pub use manifest::{DependencyMapPolicy, Manifest};
pub use manifest_input::ManifestInput;
pub use plugin_toml::PluginToml;
