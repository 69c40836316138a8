// Declare submodules
pub mod manifest;
pub mod project;

// Re-export main types
pub use manifest::ManifestSection;
pub use project::{Person, ProjectSection};
