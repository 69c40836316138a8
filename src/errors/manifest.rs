use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a `ManifestInput` into `manifest.json`.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Could not create output directory: {}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing manifest file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing required field: main")]
    MissingMain,

    #[error("Dependency #{index} in `{list}` has an empty name")]
    EmptyDependencyName { list: &'static str, index: usize },
}
