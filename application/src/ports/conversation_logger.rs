//! Port for the structured run transcript.
//!
//! Defines the [`ConversationLogger`] trait for recording pipeline events
//! (agent runs, parsed questions, completed rounds and stages) as
//! machine-readable records.
//!
//! This is separate from `tracing`-based operation logs: tracing produces the
//! human-readable run log, while this port captures the full prompts and
//! replies of a run (JSONL).

use serde_json::Value;

/// Event type for one agent invocation (prompt and reply)
pub const AGENT_RUN: &str = "agent_run";
/// Event type for a parsed Clarifier reply
pub const QUESTIONS_PARSED: &str = "questions_parsed";
/// Event type for a finished clarification round
pub const ROUND_COMPLETED: &str = "round_completed";
/// Event type for a finished pipeline stage
pub const STAGE_COMPLETED: &str = "stage_completed";

/// A structured transcript event.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. The adapter adds the timestamp when writing.
pub struct ConversationEvent {
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events.
///
/// The `log` method is synchronous and non-fallible; a failing transcript
/// must never interrupt the pipeline.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when the transcript is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
