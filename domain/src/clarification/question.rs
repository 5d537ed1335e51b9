//! Clarification question and record value objects

use serde::{Deserialize, Serialize};

/// A question raised by the Clarifier agent (Value Object)
///
/// The question text is the uniqueness key: two questions with the same
/// text are the same question, whatever their options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarificationQuestion {
    pub text: String,
    pub options: Vec<String>,
}

impl ClarificationQuestion {
    pub fn new(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// A question without suggested answers
    pub fn open(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Resolve a 1-based option index to the option text
    pub fn option(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }
}

/// A question together with the answer the user gave (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarificationRecord {
    pub question: String,
    pub answer: String,
}

impl ClarificationRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Render records as `Question: ...\nAnswer: ...` blocks separated by blank lines.
///
/// This is the format every prompt uses to hand clarifications to an agent.
pub fn render_records(records: &[ClarificationRecord]) -> String {
    records
        .iter()
        .map(|r| format!("Question: {}\nAnswer: {}", r.question, r.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_is_one_based() {
        let q = ClarificationQuestion::new(
            "What does 'fast' mean?",
            vec!["<100ms".to_string(), "<1s".to_string()],
        );
        assert_eq!(q.option(1), Some("<100ms"));
        assert_eq!(q.option(2), Some("<1s"));
        assert_eq!(q.option(0), None);
        assert_eq!(q.option(3), None);
    }

    #[test]
    fn test_open_question_has_no_options() {
        assert!(!ClarificationQuestion::open("Who are the users?").has_options());
    }

    #[test]
    fn test_render_records() {
        let records = vec![
            ClarificationRecord::new("Q1?", "A1"),
            ClarificationRecord::new("Q2?", "A2"),
        ];
        assert_eq!(
            render_records(&records),
            "Question: Q1?\nAnswer: A1\n\nQuestion: Q2?\nAnswer: A2"
        );
    }

    #[test]
    fn test_render_no_records_is_empty() {
        assert_eq!(render_records(&[]), "");
    }
}
