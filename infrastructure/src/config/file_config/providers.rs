//! Provider configuration from TOML (`[providers]` section)

use clarifier_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// OpenAI-compatible API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the API (can be overridden for compatible servers).
    pub base_url: String,
    /// Max tokens per response; omitted from requests when unset.
    pub max_tokens: Option<u32>,
    /// Sampling temperature; omitted from requests when unset.
    pub temperature: Option<f32>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries for rate limits, server errors and transport failures.
    pub max_retries: u32,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            max_tokens: None,
            temperature: None,
            timeout_secs: 120,
            max_retries: 3,
        }
    }
}

impl FileOpenAiConfig {
    /// The direct key if set, otherwise the value of `api_key_env`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "providers.openai.timeout_secs".to_string(),
                    value: "0".to_string(),
                },
                "providers.openai.timeout_secs cannot be 0",
            ));
        }
        if let Some(temperature) = self.temperature
            && !(0.0..=2.0).contains(&temperature)
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "providers.openai.temperature".to_string(),
                    value: temperature.to_string(),
                },
                format!(
                    "providers.openai.temperature = {} is outside 0.0..=2.0",
                    temperature
                ),
            ));
        }
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "providers.openai.base_url".to_string(),
                },
                "providers.openai.base_url cannot be empty",
            ));
        }
        issues
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub openai: FileOpenAiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_key_wins_over_env() {
        let config = FileOpenAiConfig {
            api_key: Some("sk-direct".to_string()),
            api_key_env: "CLARIFIER_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-direct"));
    }

    #[test]
    fn test_missing_key_resolves_to_none() {
        let config = FileOpenAiConfig {
            api_key_env: "CLARIFIER_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_none());
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let config = FileOpenAiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
