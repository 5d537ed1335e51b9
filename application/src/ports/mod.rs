//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod agent_gateway;
pub mod artifact_store;
pub mod conversation_logger;
pub mod interaction;
pub mod progress;
pub mod tool_executor;
