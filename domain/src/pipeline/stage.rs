//! Pipeline stages and document snapshots

use crate::agent::AgentRole;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A step of the requirements pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Reader extracts high-level requirements from the source file
    Extract,
    /// Clarification loop over the high-level requirements
    Clarify,
    /// Final document from the original text and every answer
    Finalize,
    /// IEEE 830 restructuring of the final document
    Standardize,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::Clarify => "clarify",
            Stage::Finalize => "finalize",
            Stage::Standardize => "standardize",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Extract => "Extract",
            Stage::Clarify => "Clarify",
            Stage::Finalize => "Finalize",
            Stage::Standardize => "Standardize",
        }
    }

    /// The agent leading this stage
    pub fn agent(&self) -> AgentRole {
        match self {
            Stage::Extract => AgentRole::Reader,
            Stage::Clarify => AgentRole::Clarifier,
            Stage::Finalize => AgentRole::Finalizer,
            Stage::Standardize => AgentRole::Standardizer,
        }
    }

    /// Full pipeline order
    pub fn default_sequence() -> Vec<Stage> {
        vec![
            Stage::Extract,
            Stage::Clarify,
            Stage::Finalize,
            Stage::Standardize,
        ]
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Stage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "extract" | "read" => Ok(Stage::Extract),
            "clarify" | "clarification" => Ok(Stage::Clarify),
            "finalize" | "final" => Ok(Stage::Finalize),
            "standardize" | "ieee830" | "ieee-830" => Ok(Stage::Standardize),
            _ => Err(DomainError::UnknownStage(s.trim().to_string())),
        }
    }
}

/// Life-cycle position of a requirements document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStage {
    Original,
    HighLevel,
    Clarified,
    Final,
    Standardized,
}

impl DocumentStage {
    /// Artifact suffix for the snapshot of this stage
    pub fn artifact_name(&self) -> &'static str {
        match self {
            DocumentStage::Original => "original_requirements.txt",
            DocumentStage::HighLevel => "high_level_requirements.txt",
            DocumentStage::Clarified => "clarified_requirements.md",
            DocumentStage::Final => "final_detailed_requirements.txt",
            DocumentStage::Standardized => "requirements.txt",
        }
    }
}

/// Immutable snapshot of the document at a given stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementDocument {
    pub stage: DocumentStage,
    pub content: String,
}

impl RequirementDocument {
    pub fn new(stage: DocumentStage, content: impl Into<String>) -> Self {
        Self {
            stage,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_parse_accepts_aliases() {
        assert_eq!("extract".parse::<Stage>().unwrap(), Stage::Extract);
        assert_eq!(" Clarify ".parse::<Stage>().unwrap(), Stage::Clarify);
        assert_eq!("final".parse::<Stage>().unwrap(), Stage::Finalize);
        assert_eq!("IEEE830".parse::<Stage>().unwrap(), Stage::Standardize);
    }

    #[test]
    fn test_unknown_stage() {
        assert_eq!(
            "review".parse::<Stage>().unwrap_err(),
            DomainError::UnknownStage("review".to_string())
        );
    }

    #[test]
    fn test_default_sequence_order() {
        let names: Vec<_> = Stage::default_sequence()
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(names, vec!["extract", "clarify", "finalize", "standardize"]);
    }

    #[test]
    fn test_stage_agents() {
        assert_eq!(Stage::Extract.agent(), AgentRole::Reader);
        assert_eq!(Stage::Standardize.agent(), AgentRole::Standardizer);
    }
}
