//! Application layer for req-clarifier
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{PipelineParams, RELEASE_STEM};
pub use ports::{
    agent_gateway::{AgentGateway, GatewayError},
    artifact_store::{ArtifactError, ArtifactStore, InMemoryArtifactStore},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    interaction::{FirstOptionInteraction, InteractionError, InteractionPort},
    progress::{NoProgress, PipelineProgress},
    tool_executor::{ToolError, ToolExecutorPort},
};
pub use use_cases::agent_runner::AgentRunner;
pub use use_cases::assemble_document::DocumentAssembler;
pub use use_cases::clarify_requirements::{ClarifyError, ClarifyRequirementsUseCase};
pub use use_cases::run_pipeline::{
    PipelineError, PipelineHalt, PipelineInput, PipelineOutcome, RunPipelineUseCase,
};
