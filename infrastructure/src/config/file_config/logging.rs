//! Logging configuration from TOML (`[logging]` section)

use clarifier_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for run logs and transcripts
    pub dir: String,
    /// Minimum level written to the run log file
    pub level: String,
    /// Write the JSONL conversation transcript next to the run log
    pub transcript: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            dir: "logs".to_string(),
            level: "info".to_string(),
            transcript: true,
        }
    }
}

impl FileLoggingConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        if VALID_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Vec::new();
        }
        vec![ConfigIssue::warning(
            ConfigIssueCode::InvalidEnumValue {
                field: "logging.level".to_string(),
                value: self.level.clone(),
                valid_values: VALID_LEVELS.iter().map(|l| l.to_string()).collect(),
            },
            format!(
                "logging.level: unknown value '{}', falling back to 'info'",
                self.level
            ),
        )]
    }
}
