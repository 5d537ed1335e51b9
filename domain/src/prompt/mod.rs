//! Prompt text for agents.
//!
//! - [`agent::AgentInstructions`]: system instructions per agent variant
//! - [`template::PromptTemplate`]: user prompts per pipeline step

pub mod agent;
pub mod template;

pub use agent::AgentInstructions;
pub use template::PromptTemplate;
