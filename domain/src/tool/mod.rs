//! Tools an agent profile may call while producing a reply.

pub mod entities;

pub use entities::{READ_REQUIREMENTS_TOOL, ToolBinding, ToolCall, ToolParameter};
