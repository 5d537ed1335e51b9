//! Filesystem artifact store
//!
//! Step artifacts go to a working directory that is emptied when the store
//! is opened; releases go to a separate directory that is never cleared.

use clarifier_application::ports::artifact_store::{
    ArtifactError, ArtifactStore, release_file_name, step_file_name,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// [`ArtifactStore`] backed by two directories
pub struct FsArtifactStore {
    artifacts_dir: PathBuf,
    release_dir: PathBuf,
    step: AtomicUsize,
}

impl FsArtifactStore {
    /// Open the store, clearing any artifacts left by a previous run.
    pub fn open(
        artifacts_dir: impl Into<PathBuf>,
        release_dir: impl Into<PathBuf>,
    ) -> Result<Self, ArtifactError> {
        let artifacts_dir = artifacts_dir.into();
        let prepare = |source| ArtifactError::Prepare {
            path: artifacts_dir.clone(),
            source,
        };
        if artifacts_dir.exists() {
            fs::remove_dir_all(&artifacts_dir).map_err(prepare)?;
        }
        fs::create_dir_all(&artifacts_dir).map_err(prepare)?;
        debug!("Cleared artifact directory {}", artifacts_dir.display());

        Ok(Self {
            artifacts_dir,
            release_dir: release_dir.into(),
            step: AtomicUsize::new(0),
        })
    }

    pub fn artifacts_dir(&self) -> &Path {
        &self.artifacts_dir
    }

    pub fn release_dir(&self) -> &Path {
        &self.release_dir
    }
}

impl ArtifactStore for FsArtifactStore {
    fn save_step(&self, suffix: &str, content: &str) -> Result<PathBuf, ArtifactError> {
        let step = self.step.fetch_add(1, Ordering::SeqCst) + 1;
        let path = self.artifacts_dir.join(step_file_name(step, suffix));
        fs::write(&path, content).map_err(|source| ArtifactError::Write {
            path: path.clone(),
            source,
        })?;
        info!("Saved artifact {}", path.display());
        Ok(path)
    }

    fn next_release_version(&self, stem: &str, extensions: &[&str]) -> u32 {
        let mut version = 1;
        while extensions
            .iter()
            .any(|ext| self.release_path(stem, version, ext).exists())
        {
            version += 1;
        }
        version
    }

    fn release_path(&self, stem: &str, version: u32, extension: &str) -> PathBuf {
        self.release_dir
            .join(release_file_name(stem, version, extension))
    }

    fn write_release(&self, path: &Path, content: &str) -> Result<(), ArtifactError> {
        let write_error = |source| ArtifactError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, content).map_err(write_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_clears_previous_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = dir.path().join("agent_outputs");
        fs::create_dir_all(&artifacts).unwrap();
        fs::write(artifacts.join("001_old.txt"), "stale").unwrap();

        let store = FsArtifactStore::open(&artifacts, dir.path()).unwrap();

        assert!(store.artifacts_dir().exists());
        assert_eq!(fs::read_dir(&artifacts).unwrap().count(), 0);
    }

    #[test]
    fn test_save_step_numbers_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::open(dir.path().join("out"), dir.path()).unwrap();

        let first = store.save_step("original_requirements.txt", "A").unwrap();
        let second = store.save_step("high_level_requirements.txt", "B").unwrap();

        assert_eq!(first.file_name().unwrap(), "001_original_requirements.txt");
        assert_eq!(second.file_name().unwrap(), "002_high_level_requirements.txt");
        assert_eq!(fs::read_to_string(second).unwrap(), "B");
    }

    #[test]
    fn test_release_version_skips_either_extension() {
        let dir = tempfile::tempdir().unwrap();
        let releases = dir.path().join("dist");
        let store = FsArtifactStore::open(dir.path().join("out"), &releases).unwrap();
        assert_eq!(store.next_release_version("requirements", &["txt", "md"]), 1);

        store
            .write_release(&store.release_path("requirements", 1, "txt"), "v1")
            .unwrap();
        store
            .write_release(&store.release_path("requirements", 2, "md"), "v2")
            .unwrap();

        assert_eq!(store.next_release_version("requirements", &["txt", "md"]), 3);
        assert_eq!(
            fs::read_to_string(releases.join("requirements_v2.md")).unwrap(),
            "v2"
        );
    }

    #[test]
    fn test_releases_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::open(dir.path().join("out"), dir.path()).unwrap();
        store
            .write_release(&store.release_path("requirements", 1, "md"), "v1")
            .unwrap();
        drop(store);

        let store = FsArtifactStore::open(dir.path().join("out"), dir.path()).unwrap();
        assert_eq!(store.next_release_version("requirements", &["txt", "md"]), 2);
    }
}
