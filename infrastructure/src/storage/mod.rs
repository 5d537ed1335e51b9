//! Filesystem adapters for the requirements source and pipeline artifacts

mod artifacts;
mod source;

pub use artifacts::FsArtifactStore;
pub use source::{SourceError, read_requirements};
