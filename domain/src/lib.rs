//! Domain layer for req-clarifier
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Clarification loop
//!
//! A requirements document is refined by repeated rounds in which the
//! Clarifier agent raises questions, the user answers them, and the Reader
//! agent folds the answers back into the document:
//!
//! - [`parse_clarification_response`]: the `Question:` / numbered-option grammar
//! - [`ClarificationSession`]: iteration budget, seen questions, answer records
//!
//! ## Agents
//!
//! Agents are data-only [`AgentProfile`]s (Reader, Clarifier, Finalizer,
//! Standardizer) bound to one reply-generation capability.

pub mod agent;
pub mod clarification;
pub mod config;
pub mod conversation;
pub mod core;
pub mod pipeline;
pub mod prompt;
pub mod tool;

// Re-export commonly used types
pub use agent::{AgentProfile, AgentRole};
pub use clarification::{
    ClarificationOutcome, ClarificationQuestion, ClarificationRecord, ClarificationSession,
    DEFAULT_MAX_ITERATIONS, NO_FURTHER_CLARIFICATION, TerminationReason,
    parse_clarification_response, render_records,
};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use conversation::{Message, Role};
pub use core::error::DomainError;
pub use pipeline::{DocumentStage, RequirementDocument, Stage};
pub use prompt::{AgentInstructions, PromptTemplate};
pub use tool::{READ_REQUIREMENTS_TOOL, ToolBinding, ToolCall, ToolParameter};
