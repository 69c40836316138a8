use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::ManifestError;
use crate::types::manifest::Manifest;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Write `manifest` to `<output_directory>/manifest.json`.
///
/// The directory is created (with parents) when it is not already a
/// directory. Any existing manifest is overwritten. Returns the absolute
/// path of the written file.
pub fn write_manifest(manifest: &Manifest, output_directory: &Path) -> Result<PathBuf, ManifestError> {
    if !output_directory.is_dir() {
        fs::create_dir_all(output_directory).map_err(|source| ManifestError::DirectoryCreation {
            path: output_directory.to_path_buf(),
            source,
        })?;
    }

    let manifest_file = output_directory.join(MANIFEST_FILE);
    write_json(manifest, &manifest_file).map_err(|source| ManifestError::Write {
        path: manifest_file.clone(),
        source,
    })?;

    Ok(absolute(&manifest_file))
}

fn write_json(manifest: &Manifest, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, manifest)?;
    writer.flush()
}

fn absolute(path: &Path) -> PathBuf {
    match path.canonicalize() {
        Ok(p) => p,
        Err(_) => std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
    }
}
