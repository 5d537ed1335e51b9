//! Document assembler
//!
//! Feeds clarifications and document content into an agent to produce a
//! revised document. Every call is a fresh request; nothing is cached.

use crate::ports::agent_gateway::{AgentGateway, GatewayError};
use crate::ports::progress::PipelineProgress;
use crate::use_cases::agent_runner::AgentRunner;
use clarifier_domain::{AgentRole, ClarificationRecord, PromptTemplate};

/// Produces revised documents through the Reader, Finalizer and Standardizer
pub struct DocumentAssembler<G: AgentGateway + 'static> {
    runner: AgentRunner<G>,
}

impl<G: AgentGateway + 'static> Clone for DocumentAssembler<G> {
    fn clone(&self) -> Self {
        Self {
            runner: self.runner.clone(),
        }
    }
}

impl<G: AgentGateway + 'static> DocumentAssembler<G> {
    pub fn new(runner: AgentRunner<G>) -> Self {
        Self { runner }
    }

    /// Merge the answers of one round into the current document (Reader)
    pub async fn round_update(
        &self,
        document: &str,
        round_records: &[ClarificationRecord],
        round: usize,
        progress: &dyn PipelineProgress,
    ) -> Result<String, GatewayError> {
        self.runner
            .run(
                AgentRole::Reader,
                &format!(
                    "Updating high-level requirements based on clarifications (Loop {})",
                    round
                ),
                PromptTemplate::round_update(document, round_records),
                progress,
            )
            .await
    }

    /// Build the final document from the original text and every answer (Finalizer)
    pub async fn final_assembly(
        &self,
        original: &str,
        records: &[ClarificationRecord],
        progress: &dyn PipelineProgress,
    ) -> Result<String, GatewayError> {
        self.runner
            .run(
                AgentRole::Finalizer,
                "Generating final detailed requirements",
                PromptTemplate::final_assembly(original, records),
                progress,
            )
            .await
    }

    /// Restructure the final document into the IEEE 830 outline (Standardizer)
    pub async fn standardize(
        &self,
        final_document: &str,
        progress: &dyn PipelineProgress,
    ) -> Result<String, GatewayError> {
        self.runner
            .run(
                AgentRole::Standardizer,
                "Generating IEEE 830 compliant requirements",
                PromptTemplate::standardization(final_document),
                progress,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::testing::ScriptedGateway;
    use std::sync::Arc;

    fn assembler(gateway: &Arc<ScriptedGateway>) -> DocumentAssembler<ScriptedGateway> {
        DocumentAssembler::new(AgentRunner::new(gateway.clone()))
    }

    #[tokio::test]
    async fn test_round_update_goes_to_reader() {
        let gateway = Arc::new(ScriptedGateway::new().reply(AgentRole::Reader, "updated"));
        let round = vec![ClarificationRecord::new("Q?", "A")];

        let doc = assembler(&gateway)
            .round_update("current", &round, 1, &NoProgress)
            .await
            .unwrap();

        assert_eq!(doc, "updated");
        let call = &gateway.calls_for(AgentRole::Reader)[0];
        assert!(call.messages[0].content.contains("Current Requirements:\ncurrent"));
        assert!(call.messages[0].content.contains("Question: Q?\nAnswer: A"));
    }

    #[tokio::test]
    async fn test_final_assembly_uses_finalizer_identity() {
        let gateway = Arc::new(ScriptedGateway::new().reply(AgentRole::Finalizer, "final"));

        assembler(&gateway)
            .final_assembly("original", &[], &NoProgress)
            .await
            .unwrap();

        let call = &gateway.calls()[0];
        assert_eq!(call.profile.role, AgentRole::Finalizer);
        assert_eq!(call.profile.name, "Finalizer Agent");
        assert!(!call.profile.has_tools());
        assert!(call.messages[0].content.contains("Initial Requirements:\noriginal"));
    }

    #[tokio::test]
    async fn test_standardize_propagates_failure() {
        let gateway = Arc::new(ScriptedGateway::new().fail(AgentRole::Standardizer, "down"));

        let err = assembler(&gateway)
            .standardize("final", &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::RequestFailed(_)));
    }
}
