//! Per-agent model configuration from TOML (`[models]` section)

use clarifier_domain::{AgentRole, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Model used when neither a role override nor a default is given
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Per-agent model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// default = "gpt-4o"
/// clarifier = "gpt-4o-mini"      # overrides the default for one agent
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model for every agent without an override
    pub default: String,
    pub reader: Option<String>,
    pub clarifier: Option<String>,
    pub finalizer: Option<String>,
    pub standardizer: Option<String>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_MODEL.to_string(),
            reader: None,
            clarifier: None,
            finalizer: None,
            standardizer: None,
        }
    }
}

impl FileModelsConfig {
    fn role_override(&self, role: AgentRole) -> Option<&String> {
        match role {
            AgentRole::Reader => self.reader.as_ref(),
            AgentRole::Clarifier => self.clarifier.as_ref(),
            AgentRole::Finalizer => self.finalizer.as_ref(),
            AgentRole::Standardizer => self.standardizer.as_ref(),
        }
    }

    /// Resolve the model for `role`: override, then default, then [`DEFAULT_MODEL`]
    pub fn model_for(&self, role: AgentRole) -> String {
        self.role_override(role)
            .filter(|m| !m.trim().is_empty())
            .or(Some(&self.default).filter(|m| !m.trim().is_empty()))
            .map(|m| m.trim().to_string())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    /// Apply one model to every agent (the `--model` flag)
    pub fn override_all(&mut self, model: impl Into<String>) {
        self.default = model.into();
        self.reader = None;
        self.clarifier = None;
        self.finalizer = None;
        self.standardizer = None;
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.default.trim().is_empty() {
            issues.push(empty_model("default"));
        }
        for role in AgentRole::ALL {
            if self.role_override(role).is_some_and(|m| m.trim().is_empty()) {
                issues.push(empty_model(role.as_str()));
            }
        }
        issues
    }
}

fn empty_model(field: &str) -> ConfigIssue {
    ConfigIssue::warning(
        ConfigIssueCode::EmptyValue {
            field: format!("models.{}", field),
        },
        format!("models.{}: model name is empty, using the fallback", field),
    )
}
