//! Run Pipeline use case
//!
//! Sequences the configured stages over one requirements document and
//! persists every intermediate snapshot:
//!
//! | Stage         | Agent        | Artifact                               |
//! |---------------|--------------|----------------------------------------|
//! | (start)       | -            | `original_requirements.txt`            |
//! | `extract`     | Reader       | `high_level_requirements.txt`          |
//! | `clarify`     | Clarifier    | per-round questions and updates        |
//! | `finalize`    | Finalizer    | `final_detailed_requirements.txt`      |
//! | `standardize` | Standardizer | `requirements.txt` + `requirements_vN.md` |

use crate::config::{PipelineParams, RELEASE_STEM};
use crate::ports::agent_gateway::AgentGateway;
use crate::ports::artifact_store::{ArtifactError, ArtifactStore};
use crate::ports::conversation_logger::{ConversationEvent, STAGE_COMPLETED};
use crate::ports::interaction::InteractionPort;
use crate::ports::progress::{NoProgress, PipelineProgress};
use crate::use_cases::agent_runner::AgentRunner;
use crate::use_cases::assemble_document::DocumentAssembler;
use crate::use_cases::clarify_requirements::{ClarifyError, ClarifyRequirementsUseCase};
use clarifier_domain::{AgentRole, ClarificationOutcome, DocumentStage, PromptTemplate, Stage};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Extensions that share one release version number
const RELEASE_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Errors that abort the pipeline (filesystem failures only)
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Clarify(#[from] ClarifyError),
}

/// Why the pipeline stopped before the end of the stage list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineHalt {
    /// A configured stage name did not resolve to a stage
    UnknownStage(String),
    /// The agent leading `stage` failed
    AgentFailed { stage: Stage, error: String },
}

impl std::fmt::Display for PipelineHalt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineHalt::UnknownStage(name) => write!(f, "Agent {} not found", name),
            PipelineHalt::AgentFailed { stage, error } => {
                write!(f, "{} stage failed: {}", stage, error)
            }
        }
    }
}

/// How a stage ended when it did not hit a filesystem error
enum StageStatus {
    Done,
    AgentFailed(String),
}

/// Input for the RunPipeline use case
#[derive(Debug, Clone)]
pub struct PipelineInput {
    /// Path of the requirements file, as shown to the Reader
    pub source_path: String,
    /// Original requirements text
    pub original: String,
}

impl PipelineInput {
    pub fn new(source_path: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            original: original.into(),
        }
    }
}

/// Result of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineOutcome {
    pub stages_completed: Vec<Stage>,
    pub clarification: Option<ClarificationOutcome>,
    pub final_document: Option<String>,
    pub standardized_document: Option<String>,
    /// Versioned documents written to the release location
    pub release_paths: Vec<PathBuf>,
    /// Version `N` shared by the `.txt` and `.md` releases of this run
    pub release_version: Option<u32>,
    pub halted_on: Option<PipelineHalt>,
}

impl PipelineOutcome {
    pub fn completed(&self) -> bool {
        self.halted_on.is_none()
    }
}

/// Use case for running the requirements pipeline
pub struct RunPipelineUseCase<G: AgentGateway + 'static> {
    runner: AgentRunner<G>,
    assembler: DocumentAssembler<G>,
    clarify: ClarifyRequirementsUseCase<G>,
    artifacts: Arc<dyn ArtifactStore>,
    params: PipelineParams,
}

impl<G: AgentGateway + 'static> RunPipelineUseCase<G> {
    pub fn new(
        runner: AgentRunner<G>,
        interaction: Arc<dyn InteractionPort>,
        artifacts: Arc<dyn ArtifactStore>,
        params: PipelineParams,
    ) -> Self {
        Self {
            assembler: DocumentAssembler::new(runner.clone()),
            clarify: ClarifyRequirementsUseCase::new(
                runner.clone(),
                interaction,
                artifacts.clone(),
            ),
            runner,
            artifacts,
            params,
        }
    }

    /// Execute the pipeline with default (no-op) progress
    pub async fn execute(&self, input: PipelineInput) -> Result<PipelineOutcome, PipelineError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the pipeline with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: PipelineInput,
        progress: &dyn PipelineProgress,
    ) -> Result<PipelineOutcome, PipelineError> {
        info!("Starting the planning process");
        self.artifacts
            .save_step(DocumentStage::Original.artifact_name(), &input.original)?;

        let mut outcome = PipelineOutcome::default();
        let mut current = input.original.clone();

        for name in &self.params.stages {
            let stage: Stage = match name.parse() {
                Ok(stage) => stage,
                Err(_) => {
                    let halt = PipelineHalt::UnknownStage(name.clone());
                    error!("{}", halt);
                    outcome.halted_on = Some(halt);
                    break;
                }
            };

            progress.on_stage_start(stage);
            info!("Stage {} ({})", stage, stage.agent());

            let status = match stage {
                Stage::Extract => self.extract(&input, &mut current, progress).await?,
                Stage::Clarify => {
                    let clarification = self
                        .clarify
                        .execute_with_progress(&current, self.params.max_iterations, progress)
                        .await?;
                    current = clarification.document.clone();
                    outcome.clarification = Some(clarification);
                    StageStatus::Done
                }
                Stage::Finalize => self.finalize(&input, &mut outcome, progress).await?,
                Stage::Standardize => self.standardize(&current, &mut outcome, progress).await?,
            };

            if let StageStatus::AgentFailed(error) = status {
                let halt = PipelineHalt::AgentFailed { stage, error };
                error!("{}", halt);
                outcome.halted_on = Some(halt);
                break;
            }

            progress.on_stage_complete(stage);
            outcome.stages_completed.push(stage);
            self.runner.conversation_logger().log(ConversationEvent::new(
                STAGE_COMPLETED,
                json!({ "stage": stage.as_str() }),
            ));
        }

        Ok(outcome)
    }

    /// Reader extracts high-level requirements; the original text stands in
    /// when the agent fails.
    async fn extract(
        &self,
        input: &PipelineInput,
        current: &mut String,
        progress: &dyn PipelineProgress,
    ) -> Result<StageStatus, PipelineError> {
        *current = match self
            .runner
            .run(
                AgentRole::Reader,
                "Reading requirements file",
                PromptTemplate::extract_request(&input.source_path),
                progress,
            )
            .await
        {
            Ok(high_level) => high_level,
            Err(e) => {
                warn!("Extraction failed, using the original requirements: {}", e);
                input.original.clone()
            }
        };
        self.artifacts
            .save_step(DocumentStage::HighLevel.artifact_name(), current)?;
        Ok(StageStatus::Done)
    }

    /// Version of this run's releases, picked on first use
    fn release_version(&self, outcome: &mut PipelineOutcome) -> u32 {
        *outcome.release_version.get_or_insert_with(|| {
            self.artifacts
                .next_release_version(RELEASE_STEM, &RELEASE_EXTENSIONS)
        })
    }

    /// Finalizer builds the final document from the original text and
    /// every clarification answered so far.
    async fn finalize(
        &self,
        input: &PipelineInput,
        outcome: &mut PipelineOutcome,
        progress: &dyn PipelineProgress,
    ) -> Result<StageStatus, PipelineError> {
        let records = outcome
            .clarification
            .as_ref()
            .map(|c| c.records.as_slice())
            .unwrap_or_default();

        let final_document = match self
            .assembler
            .final_assembly(&input.original, records, progress)
            .await
        {
            Ok(doc) => doc,
            Err(e) => return Ok(StageStatus::AgentFailed(e.to_string())),
        };
        self.artifacts
            .save_step(DocumentStage::Final.artifact_name(), &final_document)?;

        let version = self.release_version(outcome);
        let path = self.artifacts.release_path(RELEASE_STEM, version, "txt");
        if self.params.write_final_requirements {
            self.artifacts.write_release(&path, &final_document)?;
            outcome.release_paths.push(path.clone());
            info!("Final detailed requirements saved to {}", path.display());
        } else {
            info!(
                "Final detailed requirements version path: {} (not written)",
                path.display()
            );
        }

        outcome.final_document = Some(final_document);
        Ok(StageStatus::Done)
    }

    /// Standardizer rewrites the final document (or the current one when
    /// finalize did not run) and releases it as the next `.md` version.
    async fn standardize(
        &self,
        current: &str,
        outcome: &mut PipelineOutcome,
        progress: &dyn PipelineProgress,
    ) -> Result<StageStatus, PipelineError> {
        let source = outcome.final_document.as_deref().unwrap_or(current);
        let standardized = match self.assembler.standardize(source, progress).await {
            Ok(doc) => doc,
            Err(e) => return Ok(StageStatus::AgentFailed(e.to_string())),
        };
        self.artifacts
            .save_step(DocumentStage::Standardized.artifact_name(), &standardized)?;

        let version = self.release_version(outcome);
        let path = self.artifacts.release_path(RELEASE_STEM, version, "md");
        self.artifacts.write_release(&path, &standardized)?;
        info!("IEEE 830 compliant requirements saved to {}", path.display());

        outcome.release_paths.push(path);
        outcome.standardized_document = Some(standardized);
        Ok(StageStatus::Done)
    }
}
