//! Requirements source file

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Requirements file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read requirements file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the whole requirements file as text
pub fn read_requirements(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound(path.to_path_buf())
        } else {
            SourceError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
