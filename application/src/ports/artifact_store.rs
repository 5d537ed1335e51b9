//! Artifact store port
//!
//! Every pipeline step persists a snapshot of what it produced. Snapshots
//! are new files named `NNN_<suffix>`, where `NNN` is a zero-padded step
//! counter that advances once per artifact. Released documents go to a
//! separate location under a version number that never overwrites an
//! existing release.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Errors from the artifact store. These are fatal for the run.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to prepare artifact directory {path}: {source}")]
    Prepare {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write artifact {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Format the file name of the `step`-th artifact
pub fn step_file_name(step: usize, suffix: &str) -> String {
    format!("{:03}_{}", step, suffix)
}

/// Format the file name of a released document
pub fn release_file_name(stem: &str, version: u32, extension: &str) -> String {
    format!("{}_v{}.{}", stem, version, extension)
}

/// Port for persisting pipeline artifacts
pub trait ArtifactStore: Send + Sync {
    /// Persist `content` as the next numbered artifact and return its path.
    fn save_step(&self, suffix: &str, content: &str) -> Result<PathBuf, ArtifactError>;

    /// Lowest version `N >= 1` for which no `<stem>_vN.<ext>` exists for any
    /// of `extensions`.
    fn next_release_version(&self, stem: &str, extensions: &[&str]) -> u32;

    /// Path a released document with this version would be written to.
    fn release_path(&self, stem: &str, version: u32, extension: &str) -> PathBuf;

    /// Write a released document.
    fn write_release(&self, path: &Path, content: &str) -> Result<(), ArtifactError>;
}

/// In-memory artifact store for tests and dry runs.
#[derive(Default)]
pub struct InMemoryArtifactStore {
    steps: Mutex<Vec<(String, String)>>,
    releases: Mutex<BTreeMap<PathBuf, String>>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the saved step artifacts, in order
    pub fn step_names(&self) -> Vec<String> {
        self.steps
            .lock()
            .map(|steps| steps.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default()
    }

    /// Content of the step artifact named `name`
    pub fn step_content(&self, name: &str) -> Option<String> {
        self.steps.lock().ok().and_then(|steps| {
            steps
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, content)| content.clone())
        })
    }

    /// Released documents keyed by path
    pub fn releases(&self) -> BTreeMap<PathBuf, String> {
        self.releases
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl ArtifactStore for InMemoryArtifactStore {
    fn save_step(&self, suffix: &str, content: &str) -> Result<PathBuf, ArtifactError> {
        let mut steps = self.steps.lock().unwrap_or_else(|e| e.into_inner());
        let name = step_file_name(steps.len() + 1, suffix);
        steps.push((name.clone(), content.to_string()));
        Ok(PathBuf::from(name))
    }

    fn next_release_version(&self, stem: &str, extensions: &[&str]) -> u32 {
        let releases = self.releases.lock().unwrap_or_else(|e| e.into_inner());
        let mut version = 1;
        while extensions
            .iter()
            .any(|ext| releases.contains_key(&self.release_path(stem, version, ext)))
        {
            version += 1;
        }
        version
    }

    fn release_path(&self, stem: &str, version: u32, extension: &str) -> PathBuf {
        PathBuf::from(release_file_name(stem, version, extension))
    }

    fn write_release(&self, path: &Path, content: &str) -> Result<(), ArtifactError> {
        self.releases
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_file_name_is_zero_padded() {
        assert_eq!(step_file_name(1, "original_requirements.txt"), "001_original_requirements.txt");
        assert_eq!(step_file_name(42, "x.md"), "042_x.md");
        assert_eq!(step_file_name(1000, "x.md"), "1000_x.md");
    }

    #[test]
    fn test_release_file_name() {
        assert_eq!(release_file_name("requirements", 3, "md"), "requirements_v3.md");
    }

    #[test]
    fn test_in_memory_counter_advances_per_artifact() {
        let store = InMemoryArtifactStore::new();
        store.save_step("a.txt", "A").unwrap();
        store.save_step("b.txt", "B").unwrap();
        assert_eq!(store.step_names(), vec!["001_a.txt", "002_b.txt"]);
        assert_eq!(store.step_content("002_b.txt").as_deref(), Some("B"));
    }

    #[test]
    fn test_in_memory_release_version_skips_existing() {
        let store = InMemoryArtifactStore::new();
        assert_eq!(store.next_release_version("requirements", &["txt", "md"]), 1);

        let path = store.release_path("requirements", 1, "md");
        store.write_release(&path, "v1").unwrap();
        assert_eq!(store.next_release_version("requirements", &["txt", "md"]), 2);
    }
}
