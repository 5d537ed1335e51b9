//! Pipeline parameters for the run use case.
//!
//! [`PipelineParams`] groups the static parameters that steer
//! [`RunPipelineUseCase`](crate::use_cases::run_pipeline::RunPipelineUseCase).
//! These come from the file config but are application-layer concerns.

use clarifier_domain::{DEFAULT_MAX_ITERATIONS, Stage};
use serde::{Deserialize, Serialize};

/// Stem of the released document file names (`requirements_v<N>.<ext>`)
pub const RELEASE_STEM: &str = "requirements";

/// Pipeline control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Stage names in execution order. Kept as raw strings so that an
    /// unknown name is reported where the pipeline reaches it.
    pub stages: Vec<String>,
    /// Clarification round budget.
    pub max_iterations: usize,
    /// Also write `requirements_v<N>.txt` after the finalize stage.
    pub write_final_requirements: bool,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            stages: Stage::default_sequence()
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            write_final_requirements: false,
        }
    }
}

impl PipelineParams {
    // ==================== Builder Methods ====================

    pub fn with_stages<I, S>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stages = stages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_write_final_requirements(mut self, enabled: bool) -> Self {
        self.write_final_requirements = enabled;
        self
    }
}
