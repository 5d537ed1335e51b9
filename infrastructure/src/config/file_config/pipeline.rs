//! Pipeline configuration from TOML (`[pipeline]` section)

use clarifier_domain::{ConfigIssue, ConfigIssueCode, Stage};
use serde::{Deserialize, Serialize};

/// Raw pipeline configuration from TOML
///
/// # Example
///
/// ```toml
/// [pipeline]
/// stages = ["extract", "clarify", "finalize", "standardize"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    /// Stage names in execution order
    pub stages: Vec<String>,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        Self {
            stages: Stage::default_sequence()
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        }
    }
}

impl FilePipelineConfig {
    /// Unknown stage names are warnings: the pipeline runs up to them and halts there.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.stages.is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "pipeline.stages".to_string(),
                },
                "pipeline.stages is empty; only the original requirements will be saved",
            ));
        }
        for name in &self.stages {
            if name.parse::<Stage>().is_err() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "pipeline.stages".to_string(),
                        value: name.clone(),
                        valid_values: Stage::default_sequence()
                            .iter()
                            .map(|s| s.as_str().to_string())
                            .collect(),
                    },
                    format!(
                        "pipeline.stages: unknown stage '{}', the pipeline will halt there",
                        name
                    ),
                ));
            }
        }
        issues
    }
}
