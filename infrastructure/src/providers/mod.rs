//! Agent gateway providers

pub mod openai;

pub use openai::{MAX_TOOL_ROUNDS, OpenAiAgentGateway};
