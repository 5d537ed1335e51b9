//! Agent profiles
//!
//! An agent is nothing more than an instruction profile bound to the single
//! reply-generation capability exposed by the gateway. Profiles are plain
//! data; the four variants differ only in their identity, instructions and
//! tool bindings.

use crate::prompt::AgentInstructions;
use crate::tool::ToolBinding;
use serde::{Deserialize, Serialize};

/// Which agent variant a profile describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    /// Extracts high-level requirements and merges round clarifications
    Reader,
    /// Finds ambiguities and emits questions with options
    Clarifier,
    /// Builds the final document from the original text and every answer
    Finalizer,
    /// Rewrites the final document into the IEEE 830 outline
    Standardizer,
}

impl AgentRole {
    pub const ALL: [AgentRole; 4] = [
        AgentRole::Reader,
        AgentRole::Clarifier,
        AgentRole::Finalizer,
        AgentRole::Standardizer,
    ];

    /// Short identifier used in configuration keys
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Reader => "reader",
            AgentRole::Clarifier => "clarifier",
            AgentRole::Finalizer => "finalizer",
            AgentRole::Standardizer => "standardizer",
        }
    }

    /// Human-readable agent name used in logs
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentRole::Reader => "Reader Agent",
            AgentRole::Clarifier => "Clarification Agent",
            AgentRole::Finalizer => "Finalizer Agent",
            AgentRole::Standardizer => "IEEE 830 Requirements Writer",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Data-only description of an agent (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub role: AgentRole,
    pub name: String,
    pub instructions: String,
    pub tools: Vec<ToolBinding>,
}

impl AgentProfile {
    pub fn new(role: AgentRole, instructions: impl Into<String>) -> Self {
        Self {
            role,
            name: role.display_name().to_string(),
            instructions: instructions.into(),
            tools: Vec::new(),
        }
    }

    pub fn with_tool(mut self, tool: ToolBinding) -> Self {
        self.tools.push(tool);
        self
    }

    /// The built-in profile for `role`
    pub fn for_role(role: AgentRole) -> Self {
        match role {
            AgentRole::Reader => Self::new(role, AgentInstructions::reader())
                .with_tool(ToolBinding::read_requirements()),
            AgentRole::Clarifier => Self::new(role, AgentInstructions::clarifier()),
            // The finalizer shares the reader's instructions; only the prompt framing differs
            AgentRole::Finalizer => Self::new(role, AgentInstructions::reader()),
            AgentRole::Standardizer => Self::new(role, AgentInstructions::standardizer()),
        }
    }

    pub fn has_tools(&self) -> bool {
        !self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_reader_has_tools() {
        assert!(AgentProfile::for_role(AgentRole::Reader).has_tools());
        assert!(!AgentProfile::for_role(AgentRole::Clarifier).has_tools());
        assert!(!AgentProfile::for_role(AgentRole::Finalizer).has_tools());
        assert!(!AgentProfile::for_role(AgentRole::Standardizer).has_tools());
    }

    #[test]
    fn test_finalizer_reuses_reader_instructions() {
        let reader = AgentProfile::for_role(AgentRole::Reader);
        let finalizer = AgentProfile::for_role(AgentRole::Finalizer);
        assert_eq!(reader.instructions, finalizer.instructions);
        assert_ne!(reader.name, finalizer.name);
    }
}
