//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section defaults independently.

mod clarification;
mod input;
mod logging;
mod models;
mod output;
mod pipeline;
mod providers;

pub use clarification::FileClarificationConfig;
pub use input::FileInputConfig;
pub use logging::FileLoggingConfig;
pub use models::{DEFAULT_MODEL, FileModelsConfig};
pub use output::FileOutputConfig;
pub use pipeline::FilePipelineConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};

use clarifier_application::PipelineParams;
use clarifier_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Requirements source
    pub input: FileInputConfig,
    /// Artifact and release locations
    pub output: FileOutputConfig,
    /// Clarification loop settings
    pub clarification: FileClarificationConfig,
    /// Stage order
    pub pipeline: FilePipelineConfig,
    /// Run log and transcript settings
    pub logging: FileLoggingConfig,
    /// Per-agent model selection
    pub models: FileModelsConfig,
    /// Provider settings (API endpoint and credentials)
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.clarification.validate());
        issues.extend(self.pipeline.validate());
        issues.extend(self.logging.validate());
        issues.extend(self.models.validate());
        issues.extend(self.providers.openai.validate());
        issues
    }

    /// Parameters for the pipeline use case
    pub fn pipeline_params(&self) -> PipelineParams {
        PipelineParams::default()
            .with_stages(self.pipeline.stages.iter().cloned())
            .with_max_iterations(self.clarification.max_iterations)
            .with_write_final_requirements(self.output.write_final_requirements)
    }
}
