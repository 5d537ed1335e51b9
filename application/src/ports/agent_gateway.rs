//! Agent gateway port
//!
//! Defines the single capability every agent variant is bound to: given an
//! agent profile and a conversation, produce a reply.

use async_trait::async_trait;
use clarifier_domain::{AgentProfile, Message};
use thiserror::Error;

/// Errors that can occur during agent gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Tool loop exceeded {0} rounds")]
    ToolLoopExceeded(usize),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for agent replies
///
/// The gateway is stateless: every call is a fresh request built from the
/// profile instructions and the given messages. Implementations own retries
/// and timeouts. Adapters live in the infrastructure layer.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Run `agent` over `messages` and return the final reply text
    async fn run(&self, agent: &AgentProfile, messages: &[Message]) -> Result<String, GatewayError>;
}
