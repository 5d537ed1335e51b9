//! Clarification loop configuration from TOML (`[clarification]` section)

use clarifier_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_MAX_ITERATIONS};
use serde::{Deserialize, Serialize};

/// Upper bound above which a round budget is reported as suspicious
const MAX_REASONABLE_ITERATIONS: usize = 100;

/// Raw clarification configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClarificationConfig {
    /// Maximum number of clarification rounds
    pub max_iterations: usize,
}

impl Default for FileClarificationConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl FileClarificationConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let code = || ConfigIssueCode::OutOfRange {
            field: "clarification.max_iterations".to_string(),
            value: self.max_iterations.to_string(),
        };
        if self.max_iterations == 0 {
            vec![ConfigIssue::error(
                code(),
                "clarification.max_iterations must be at least 1",
            )]
        } else if self.max_iterations > MAX_REASONABLE_ITERATIONS {
            vec![ConfigIssue::warning(
                code(),
                format!(
                    "clarification.max_iterations = {} is unusually high",
                    self.max_iterations
                ),
            )]
        } else {
            Vec::new()
        }
    }
}
