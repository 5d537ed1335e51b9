//! Tool executor port
//!
//! Executes tool calls requested by an agent while the gateway is producing
//! a reply. Tool failures are reported back to the agent as text; they never
//! abort the pipeline.

use async_trait::async_trait;
use clarifier_domain::ToolCall;
use thiserror::Error;

/// Errors that can occur while executing a tool call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// Port for executing agent tool calls
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Execute `call` and return its textual output
    async fn execute(&self, call: &ToolCall) -> Result<String, ToolError>;
}
