//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
///
/// # Example
///
/// ```toml
/// [output]
/// artifacts_dir = "agent_outputs"   # numbered snapshots, cleared every run
/// release_dir = "."                 # requirements_vN.md
/// write_final_requirements = false  # also release requirements_vN.txt
/// color = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Directory for the numbered step artifacts
    pub artifacts_dir: String,
    /// Directory for versioned released documents
    pub release_dir: String,
    /// Release the final detailed requirements as `requirements_vN.txt`
    pub write_final_requirements: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: "agent_outputs".to_string(),
            release_dir: ".".to_string(),
            write_final_requirements: false,
            color: true,
        }
    }
}
