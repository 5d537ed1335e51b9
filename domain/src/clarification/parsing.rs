//! Clarifier reply parsing.
//!
//! The Clarifier agent is instructed to answer in a fixed line format:
//!
//! ```text
//! Question 1: What does 'fast' mean?
//! 1. Under 100ms
//! 2) Under 1s
//! ```
//!
//! The grammar is deliberately loose and must stay exactly as the prompt
//! describes it:
//!
//! | Line (trimmed) | Meaning |
//! |----------------|---------|
//! | starts with `Question` | question header, text after the first `:` |
//! | digit then `.` or `)` | option of the current question |
//! | anything else | ignored |
//!
//! A reply containing [`NO_FURTHER_CLARIFICATION`] anywhere parses to nothing.

use super::question::ClarificationQuestion;

/// Sentinel the Clarifier emits when the document holds no more ambiguity.
pub const NO_FURTHER_CLARIFICATION: &str = "No further clarification needed";

const QUESTION_MARKER: &str = "Question";

/// Parse a Clarifier reply into questions, preserving source order.
///
/// Never fails: unparsable replies simply yield an empty list.
///
/// # Examples
///
/// ```
/// use clarifier_domain::clarification::parsing::parse_clarification_response;
///
/// let questions = parse_clarification_response("Question 1: Which OS?\n1. Linux\n2) macOS");
/// assert_eq!(questions.len(), 1);
/// assert_eq!(questions[0].text, "Which OS?");
/// assert_eq!(questions[0].options, vec!["Linux", "macOS"]);
/// ```
pub fn parse_clarification_response(response: &str) -> Vec<ClarificationQuestion> {
    if response.contains(NO_FURTHER_CLARIFICATION) {
        return Vec::new();
    }

    let mut questions = Vec::new();
    let mut current: Option<ClarificationQuestion> = None;

    for line in response.lines().map(str::trim) {
        if line.starts_with(QUESTION_MARKER) {
            flush(&mut questions, current.take());
            current = Some(ClarificationQuestion::open(question_text(line)));
        } else if let Some(option) = option_text(line) {
            // Options before the first header have no owner and are dropped
            if let Some(question) = current.as_mut() {
                question.options.push(option.to_string());
            }
        }
    }
    flush(&mut questions, current);

    questions
}

fn flush(questions: &mut Vec<ClarificationQuestion>, question: Option<ClarificationQuestion>) {
    if let Some(question) = question
        && !question.text.is_empty()
    {
        questions.push(question);
    }
}

fn question_text(line: &str) -> &str {
    match line.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => line,
    }
}

/// Return the option text if `line` is an option line.
///
/// Only the first two characters are inspected, so `10. foo` is not an
/// option: its second character is `0`.
fn option_text(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    let first = chars.next()?;
    let second = chars.next()?;
    if !first.is_ascii_digit() || !matches!(second, '.' | ')') {
        return None;
    }
    // The first `.` or `)` is the second character, which sits at byte 1
    Some(line[2..].trim())
}
