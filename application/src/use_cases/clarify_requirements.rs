//! Clarify Requirements use case
//!
//! The clarification loop: repeated rounds of question generation,
//! deduplication, user interaction and document update under a bounded
//! iteration budget.
//!
//! ```text
//! GENERATING ──(new questions)──▶ INTERACTING ──(continue)──▶ GENERATING
//!     │                               │
//!     └──(none / duplicates / error)──┴──(stop / limit / EOF)──▶ TERMINATED
//! ```

use crate::ports::agent_gateway::AgentGateway;
use crate::ports::artifact_store::{ArtifactError, ArtifactStore};
use crate::ports::conversation_logger::{ConversationEvent, QUESTIONS_PARSED, ROUND_COMPLETED};
use crate::ports::interaction::{InteractionError, InteractionPort};
use crate::ports::progress::{NoProgress, PipelineProgress};
use crate::use_cases::agent_runner::AgentRunner;
use crate::use_cases::assemble_document::DocumentAssembler;
use clarifier_domain::{
    AgentRole, ClarificationOutcome, ClarificationQuestion, ClarificationRecord,
    ClarificationSession, DomainError, PromptTemplate, TerminationReason,
    parse_clarification_response,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors that abort the clarification loop
#[derive(Error, Debug)]
pub enum ClarifyError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// Answers collected in one round, and whether input closed midway
struct RoundAnswers {
    records: Vec<ClarificationRecord>,
    closed: bool,
}

/// Use case for the clarification loop
pub struct ClarifyRequirementsUseCase<G: AgentGateway + 'static> {
    runner: AgentRunner<G>,
    assembler: DocumentAssembler<G>,
    interaction: Arc<dyn InteractionPort>,
    artifacts: Arc<dyn ArtifactStore>,
}

impl<G: AgentGateway + 'static> ClarifyRequirementsUseCase<G> {
    pub fn new(
        runner: AgentRunner<G>,
        interaction: Arc<dyn InteractionPort>,
        artifacts: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            assembler: DocumentAssembler::new(runner.clone()),
            runner,
            interaction,
            artifacts,
        }
    }

    /// Execute the loop with default (no-op) progress
    pub async fn execute(
        &self,
        document: &str,
        max_iterations: usize,
    ) -> Result<ClarificationOutcome, ClarifyError> {
        self.execute_with_progress(document, max_iterations, &NoProgress)
            .await
    }

    /// Run clarification rounds over `document` until a termination condition.
    ///
    /// Agent failures end or skip a round; only artifact failures are errors.
    pub async fn execute_with_progress(
        &self,
        document: &str,
        max_iterations: usize,
        progress: &dyn PipelineProgress,
    ) -> Result<ClarificationOutcome, ClarifyError> {
        let mut session = ClarificationSession::new(document, max_iterations)?;
        info!("Starting clarification loop ({} rounds max)", max_iterations);

        let reason = loop {
            let Some(round) = session.begin_round() else {
                info!("Maximum number of clarification loops reached.");
                break TerminationReason::IterationLimit;
            };

            let reply = match self
                .runner
                .run(
                    AgentRole::Clarifier,
                    &format!("Identifying ambiguities (Loop {})", round),
                    PromptTemplate::clarification_request(&session.clarifier_context()),
                    progress,
                )
                .await
            {
                Ok(reply) => reply,
                Err(e) => {
                    warn!("Clarifier unavailable in loop {}: {}", round, e);
                    break TerminationReason::AgentUnavailable;
                }
            };
            info!("Clarification content: {}", reply);
            self.artifacts
                .save_step(&format!("clarification_loop_{}_questions.txt", round), &reply)?;

            let parsed = parse_clarification_response(&reply);
            self.log_parsed(round, &parsed);
            if parsed.is_empty() {
                warn!("No clarifications needed or unable to parse questions.");
                break TerminationReason::NoQuestions;
            }

            let new_questions = session.admit_new(parsed);
            if new_questions.is_empty() {
                info!("No new clarifications needed.");
                break TerminationReason::OnlyDuplicates;
            }

            info!(
                "Clarification Loop {} - {} question(s)",
                round,
                new_questions.len()
            );
            progress.on_round_start(round, session.max_iterations(), new_questions.len());

            let RoundAnswers {
                records: round_records,
                closed,
            } = self.collect_answers(&new_questions).await;
            for record in &round_records {
                session.record(record.clone());
            }
            if closed {
                break TerminationReason::InputClosed;
            }

            match self
                .assembler
                .round_update(session.document(), &round_records, round, progress)
                .await
            {
                Ok(updated) => session.replace_document(updated),
                Err(e) => warn!(
                    "Round {} update failed, keeping previous requirements: {}",
                    round, e
                ),
            }
            self.artifacts.save_step(
                &format!(
                    "clarification_loop_{}_updated_high_level_requirements.md",
                    round
                ),
                session.document(),
            )?;

            self.runner.conversation_logger().log(ConversationEvent::new(
                ROUND_COMPLETED,
                json!({
                    "round": round,
                    "answers": round_records,
                    "total_records": session.records().len(),
                }),
            ));

            if session.has_remaining_rounds() {
                match self.interaction.confirm_continue(round).await {
                    Ok(true) => {}
                    Ok(false) => {
                        info!("User chose to stop clarifications after loop {}", round);
                        break TerminationReason::UserStopped;
                    }
                    Err(e) => {
                        warn!("Could not read continuation answer: {}", e);
                        break TerminationReason::InputClosed;
                    }
                }
            }
        };

        info!(
            "Clarification loop finished after {} round(s): {}",
            session.iteration(),
            reason
        );
        progress.on_clarification_end(session.iteration(), reason);
        Ok(session.finish(reason))
    }

    /// Ask every new question in order, stopping early if input closes.
    async fn collect_answers(&self, questions: &[ClarificationQuestion]) -> RoundAnswers {
        let mut records = Vec::with_capacity(questions.len());
        for question in questions {
            match self.interaction.ask(&question.text, &question.options).await {
                Ok(answer) => records.push(ClarificationRecord::new(question.text.clone(), answer)),
                Err(e) => {
                    match e {
                        InteractionError::Closed => {
                            warn!("Input closed while asking: {}", question.text)
                        }
                        InteractionError::IoError(_) => error!("Interaction failed: {}", e),
                    }
                    return RoundAnswers {
                        records,
                        closed: true,
                    };
                }
            }
        }
        RoundAnswers {
            records,
            closed: false,
        }
    }

    fn log_parsed(&self, round: usize, parsed: &[ClarificationQuestion]) {
        let texts: Vec<&str> = parsed.iter().map(|q| q.text.as_str()).collect();
        info!("Parsed questions: {:?}", texts);
        self.runner.conversation_logger().log(ConversationEvent::new(
            QUESTIONS_PARSED,
            json!({ "round": round, "questions": parsed }),
        ));
    }
}
