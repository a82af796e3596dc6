use std::io;
use std::path::{Path, PathBuf};

use rfa_core::StructureFile;
use rfa_logging::rfa_warn;
use thiserror::Error;

const STRUCTURE_EXTENSION: &str = "pdb";

#[derive(Debug, Error)]
pub enum FileError {
    #[error("{path:?} has no file name")]
    NoFileName { path: PathBuf },
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Extension hint only; contents are never inspected.
pub fn has_structure_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(STRUCTURE_EXTENSION))
}

/// Reads a local file into the `(filename, bytes)` pair the form expects.
pub async fn read_structure_file(path: &Path) -> Result<StructureFile, FileError> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| FileError::NoFileName {
            path: path.to_path_buf(),
        })?;

    let bytes = tokio::fs::read(path).await.map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !has_structure_extension(&filename) {
        rfa_warn!("{} does not look like a PDB file", filename);
    }
    Ok(StructureFile::new(filename, bytes))
}
