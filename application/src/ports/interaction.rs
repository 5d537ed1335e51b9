//! Interaction port for collecting clarification answers.
//!
//! This module defines the port (interface) the clarification loop uses to
//! put questions to the user and to ask whether another round should run.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`InteractionPort`] - defined here in application layer
//! - **Adapter**: `ConsoleInteraction` - implemented in presentation layer
//!
//! # Flow
//!
//! ```text
//! Clarifier reply parsed
//!        ↓
//! InteractionPort::ask()  (once per new question)
//!        ↓
//! Reader merges the round's answers
//!        ↓
//! InteractionPort::confirm_continue()  (if rounds remain)
//! ```
//!
//! # Built-in Implementations
//!
//! - [`FirstOptionInteraction`] - answers with the first option, never stops early

use async_trait::async_trait;
use thiserror::Error;

/// Answer used by [`FirstOptionInteraction`] for questions without options
pub const UNDECIDED_ANSWER: &str = "To be decided";

/// Error type for interaction operations.
///
/// Invalid input is never an error: adapters re-prompt until they get a
/// usable answer. These variants cover the cases where no answer can ever
/// be obtained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// Input stream ended (e.g. Ctrl+D or closed pipe).
    #[error("Input closed")]
    Closed,
    /// Terminal read or write failure.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Port for putting clarification questions to a user.
///
/// # Implementations
///
/// - **Interactive (CLI)**: `ConsoleInteraction` in presentation layer
/// - **Unattended**: [`FirstOptionInteraction`]
#[async_trait]
pub trait InteractionPort: Send + Sync {
    /// Ask one question and return the answer.
    ///
    /// With options, a valid 1-based index selects that option's text; any
    /// other non-empty input is returned verbatim. Empty input re-prompts.
    async fn ask(&self, question: &str, options: &[String]) -> Result<String, InteractionError>;

    /// Ask whether to run another clarification round after `completed_round`.
    async fn confirm_continue(&self, completed_round: usize) -> Result<bool, InteractionError>;
}

/// Unattended implementation for batch runs.
///
/// Picks the first option of every question (or [`UNDECIDED_ANSWER`] for
/// open questions) and always continues, so the loop runs until the
/// Clarifier has nothing new or the iteration budget is spent.
pub struct FirstOptionInteraction;

#[async_trait]
impl InteractionPort for FirstOptionInteraction {
    async fn ask(&self, _question: &str, options: &[String]) -> Result<String, InteractionError> {
        Ok(options
            .first()
            .cloned()
            .unwrap_or_else(|| UNDECIDED_ANSWER.to_string()))
    }

    async fn confirm_continue(&self, _completed_round: usize) -> Result<bool, InteractionError> {
        Ok(true)
    }
}
