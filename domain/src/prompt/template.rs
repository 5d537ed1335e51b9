//! User prompt templates for each pipeline step

use crate::clarification::{ClarificationRecord, NO_FURTHER_CLARIFICATION, render_records};

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Ask the Reader to load and summarize the source document
    pub fn extract_request(source_path: &str) -> String {
        format!(
            "Please read the requirements from {} and extract high-level requirements.",
            source_path
        )
    }

    /// Ask the Clarifier for questions in the parseable question/option format
    pub fn clarification_request(context: &str) -> String {
        format!(
            r#"Please identify all ambiguous or vague requirements that need clarification.
Provide clear questions and possible options for clarification for each one.
Ensure your response is strictly formatted as follows, with no additional text:

Question 1: [Your question here]
1. [Option 1]
2. [Option 2]
3. [Option 3]

... and so on.

Do not include any introductions, explanations, or closing remarks.
If nothing is ambiguous, reply only with: {}

Current requirements:
{}"#,
            NO_FURTHER_CLARIFICATION, context
        )
    }

    /// Merge one round of answers into the current document
    pub fn round_update(document: &str, round: &[ClarificationRecord]) -> String {
        format!(
            r#"Based on the current requirements and the new clarifications provided, generate an updated version of the requirements document.
Incorporate all the clarifications into the appropriate sections of the requirements without dropping any existing content.

Current Requirements:
{}

New Clarifications:
{}

Please provide a well-structured, updated requirements document that incorporates this new information."#,
            document,
            render_records(round)
        )
    }

    /// Build the final document from the original text and every answer
    pub fn final_assembly(original: &str, records: &[ClarificationRecord]) -> String {
        format!(
            r#"Based on the initial requirements and the clarifications provided, generate a comprehensive and detailed final requirements document.
Incorporate all the clarifications into the appropriate sections of the requirements.

Initial Requirements:
{}

Clarifications:
{}

Please provide a well-structured, detailed requirements document that incorporates all this information."#,
            original,
            render_records(records)
        )
    }

    /// Restructure the final document into the IEEE 830 outline
    pub fn standardization(final_document: &str) -> String {
        format!(
            r#"Based on the final requirements provided, generate a comprehensive IEEE 830 compliant software requirements specification document.
Ensure that the document follows the structure and guidelines of the IEEE 830 standard.

Final Requirements:
{}

Please provide a well-structured, detailed IEEE 830 compliant requirements document."#,
            final_document
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_request_names_path() {
        let prompt = PromptTemplate::extract_request("requirements.txt");
        assert!(prompt.contains("requirements.txt"));
    }

    #[test]
    fn test_clarification_request_pins_format() {
        let prompt = PromptTemplate::clarification_request("The system shall be fast.");
        assert!(prompt.contains("Question 1: [Your question here]"));
        assert!(prompt.contains("1. [Option 1]"));
        assert!(prompt.contains(NO_FURTHER_CLARIFICATION));
        assert!(prompt.ends_with("The system shall be fast."));
    }

    #[test]
    fn test_round_update_contains_document_and_answers() {
        let round = vec![ClarificationRecord::new("What does 'fast' mean?", "<100ms")];
        let prompt = PromptTemplate::round_update("Current doc", &round);
        assert!(prompt.contains("Current Requirements:\nCurrent doc"));
        assert!(prompt.contains("Question: What does 'fast' mean?\nAnswer: <100ms"));
    }

    #[test]
    fn test_final_assembly_uses_initial_framing() {
        let prompt = PromptTemplate::final_assembly("Original", &[]);
        assert!(prompt.contains("Initial Requirements:\nOriginal"));
        assert!(!prompt.contains("Current Requirements"));
    }

    #[test]
    fn test_standardization_mentions_standard() {
        let prompt = PromptTemplate::standardization("Final doc");
        assert!(prompt.contains("IEEE 830"));
        assert!(prompt.contains("Final doc"));
    }
}
