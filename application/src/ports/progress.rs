//! Progress notification port
//!
//! Defines the interface for reporting progress while the pipeline runs.

use clarifier_domain::{AgentRole, Stage, TerminationReason};

/// Callback for progress updates during a pipeline run
///
/// Implementations live in the presentation layer. All methods default to
/// no-ops so adapters only override what they display.
pub trait PipelineProgress: Send + Sync {
    /// Called when a pipeline stage starts
    fn on_stage_start(&self, _stage: Stage) {}

    /// Called when a pipeline stage finishes
    fn on_stage_complete(&self, _stage: Stage) {}

    /// Called right before an agent request is sent
    fn on_agent_start(&self, _role: AgentRole) {}

    /// Called when an agent request returns
    fn on_agent_complete(&self, _role: AgentRole, _success: bool) {}

    /// Called when a clarification round has new questions to ask
    fn on_round_start(&self, _round: usize, _max_rounds: usize, _questions: usize) {}

    /// Called when the clarification loop exits
    fn on_clarification_end(&self, _rounds: usize, _reason: TerminationReason) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PipelineProgress for NoProgress {}
