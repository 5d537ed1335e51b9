//! Clarification session (loop state)
//!
//! A [`ClarificationSession`] lives for exactly one clarification stage. It
//! owns the iteration budget, the append-only answer records, the set of
//! question texts already offered, and the current document text.

use super::question::{ClarificationQuestion, ClarificationRecord, render_records};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default number of clarification rounds
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Why a clarification session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The iteration budget is spent
    IterationLimit,
    /// The Clarifier returned the sentinel or nothing parsable
    NoQuestions,
    /// Every parsed question had been asked before
    OnlyDuplicates,
    /// The user declined another round
    UserStopped,
    /// The Clarifier call failed
    AgentUnavailable,
    /// User input is no longer available (end of input)
    InputClosed,
}

impl TerminationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationReason::IterationLimit => "iteration_limit",
            TerminationReason::NoQuestions => "no_questions",
            TerminationReason::OnlyDuplicates => "only_duplicates",
            TerminationReason::UserStopped => "user_stopped",
            TerminationReason::AgentUnavailable => "agent_unavailable",
            TerminationReason::InputClosed => "input_closed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TerminationReason::IterationLimit => "maximum number of clarification rounds reached",
            TerminationReason::NoQuestions => {
                "no clarifications needed or unable to parse questions"
            }
            TerminationReason::OnlyDuplicates => "no new clarifications needed",
            TerminationReason::UserStopped => "stopped by user",
            TerminationReason::AgentUnavailable => "clarifier agent unavailable",
            TerminationReason::InputClosed => "user input closed",
        }
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Loop state of one clarification stage (Entity)
#[derive(Debug, Clone)]
pub struct ClarificationSession {
    iteration: usize,
    max_iterations: usize,
    records: Vec<ClarificationRecord>,
    seen: HashSet<String>,
    document: String,
}

impl ClarificationSession {
    /// Start a session over `document` with a budget of `max_iterations` rounds.
    pub fn new(document: impl Into<String>, max_iterations: usize) -> Result<Self, DomainError> {
        if max_iterations == 0 {
            return Err(DomainError::EmptyIterationBudget);
        }
        Ok(Self {
            iteration: 0,
            max_iterations,
            records: Vec::new(),
            seen: HashSet::new(),
            document: document.into(),
        })
    }

    /// Advance to the next round.
    ///
    /// Returns the new 1-based round number, or `None` when the budget is spent.
    pub fn begin_round(&mut self) -> Option<usize> {
        if self.iteration >= self.max_iterations {
            return None;
        }
        self.iteration += 1;
        Some(self.iteration)
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Whether another round may start after the current one
    pub fn has_remaining_rounds(&self) -> bool {
        self.iteration < self.max_iterations
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn replace_document(&mut self, document: impl Into<String>) {
        self.document = document.into();
    }

    pub fn records(&self) -> &[ClarificationRecord] {
        &self.records
    }

    pub fn has_seen(&self, question: &str) -> bool {
        self.seen.contains(question)
    }

    /// Text handed to the Clarifier: the current document followed by every
    /// answered question so far.
    pub fn clarifier_context(&self) -> String {
        if self.records.is_empty() {
            self.document.clone()
        } else {
            format!(
                "{}\n\nPrevious Clarifications:\n{}",
                self.document,
                render_records(&self.records)
            )
        }
    }

    /// Keep only questions never offered before and mark them as seen.
    ///
    /// Marking happens here, before any answer is collected, so a question
    /// is never offered twice even if its round is abandoned. Repeats inside
    /// the same batch are dropped as well.
    pub fn admit_new(&mut self, questions: Vec<ClarificationQuestion>) -> Vec<ClarificationQuestion> {
        questions
            .into_iter()
            .filter(|q| self.seen.insert(q.text.clone()))
            .collect()
    }

    /// Append an answered question to the session records.
    pub fn record(&mut self, record: ClarificationRecord) {
        self.records.push(record);
    }

    /// Close the session.
    pub fn finish(self, reason: TerminationReason) -> ClarificationOutcome {
        ClarificationOutcome {
            document: self.document,
            records: self.records,
            rounds: self.iteration,
            reason,
        }
    }
}

/// Result of a finished clarification session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarificationOutcome {
    /// Document after the last successful round update
    pub document: String,
    /// Every answered question, in the order asked
    pub records: Vec<ClarificationRecord>,
    /// Number of generation rounds performed
    pub rounds: usize,
    pub reason: TerminationReason,
}
