//! Input configuration from TOML (`[input]` section)

use serde::{Deserialize, Serialize};

/// Raw input configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInputConfig {
    /// Path of the requirements file to clarify
    pub path: String,
}

impl Default for FileInputConfig {
    fn default() -> Self {
        Self {
            path: "requirements.txt".to_string(),
        }
    }
}
