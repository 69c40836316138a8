//! Generate the `manifest.json` a Hytale server reads to load a plugin.
//!
//! Metadata comes from a `plugin.toml` (or a hand-built [`ManifestInput`]),
//! is normalized by [`builder::build_manifest`] and written by
//! [`writer::write_manifest`].
//!
//! ```no_run
//! use hytale_manifest::types::ManifestInput;
//!
//! let input = ManifestInput {
//!     group: Some("io.example".into()),
//!     name: Some("Plugin".into()),
//!     version: Some(env!("CARGO_PKG_VERSION").into()),
//!     main: Some("com.example.Main".into()),
//!     ..Default::default()
//! };
//! let path = hytale_manifest::generate_manifest(&input)?;
//! println!("wrote {}", path.display());
//! # Ok::<(), hytale_manifest::errors::ManifestError>(())
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod cmds;
pub mod errors;
pub mod types;
pub mod utils;
pub mod writer;

use crate::errors::ManifestError;
use crate::types::ManifestInput;

/// Validate, build and write in one step.
pub fn generate_manifest(input: &ManifestInput) -> Result<PathBuf, ManifestError> {
    input.validate()?;
    let manifest = builder::build_manifest(input);
    writer::write_manifest(&manifest, &input.output_directory)
}
