//! Agent runner
//!
//! Every agent invocation in the pipeline goes through [`AgentRunner`]. It
//! builds the agent profile, sends one fresh conversation to the gateway,
//! and records the action in the run log (framed by separator lines) and in
//! the transcript.

use crate::ports::agent_gateway::{AgentGateway, GatewayError};
use crate::ports::conversation_logger::{
    AGENT_RUN, ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::PipelineProgress;
use clarifier_domain::core::string::summarize;
use clarifier_domain::{AgentProfile, AgentRole, Message};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Width of the separator framing an agent action in the run log
pub const ACTION_SEPARATOR_WIDTH: usize = 120;

/// Lines written to the run log for one agent action
pub fn action_log_lines(agent: &str, action: &str, result: Option<&str>) -> Vec<String> {
    let separator = "-".repeat(ACTION_SEPARATOR_WIDTH);
    let mut lines = vec![separator.clone(), format!("{} - Action: {}", agent, action)];
    if let Some(result) = result.filter(|r| !r.is_empty()) {
        lines.push(format!("{} - Result: {}", agent, result));
    }
    lines.push(separator);
    lines
}

fn log_agent_action(agent: &str, action: &str, result: Option<&str>) {
    for line in action_log_lines(agent, action, result) {
        info!("{}", line);
    }
}

/// Runs one agent request with logging
pub struct AgentRunner<G: AgentGateway + 'static> {
    gateway: Arc<G>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: AgentGateway + 'static> Clone for AgentRunner<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl<G: AgentGateway + 'static> AgentRunner<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Set the transcript logger
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn conversation_logger(&self) -> &Arc<dyn ConversationLogger> {
        &self.conversation_logger
    }

    /// Send `prompt` to the agent playing `role` and return its reply.
    ///
    /// `action` is a short description used in the run log.
    pub async fn run(
        &self,
        role: AgentRole,
        action: &str,
        prompt: String,
        progress: &dyn PipelineProgress,
    ) -> Result<String, GatewayError> {
        let profile = AgentProfile::for_role(role);
        log_agent_action(&profile.name, action, None);
        info!("Calling {}", profile.name);
        debug!(agent = %profile.name, prompt_len = prompt.len(), "Sending prompt");

        progress.on_agent_start(role);
        let messages = [Message::user(prompt)];
        let result = self.gateway.run(&profile, &messages).await;
        progress.on_agent_complete(role, result.is_ok());

        match &result {
            Ok(reply) => {
                debug!(agent = %profile.name, reply = %summarize(reply, 200), "Reply received");
                log_agent_action(&profile.name, action, Some(reply));
                self.conversation_logger.log(ConversationEvent::new(
                    AGENT_RUN,
                    json!({
                        "agent": profile.name,
                        "role": role.as_str(),
                        "action": action,
                        "prompt": messages[0].content,
                        "reply": reply,
                        "success": true,
                    }),
                ));
            }
            Err(e) => {
                error!("{} failed: {}", profile.name, e);
                self.conversation_logger.log(ConversationEvent::new(
                    AGENT_RUN,
                    json!({
                        "agent": profile.name,
                        "role": role.as_str(),
                        "action": action,
                        "prompt": messages[0].content,
                        "error": e.to_string(),
                        "success": false,
                    }),
                ));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::testing::{RecordingLogger, ScriptedGateway};
    use clarifier_domain::Role;

    #[test]
    fn test_action_log_lines_frame_the_action() {
        let lines = action_log_lines("Reader Agent", "Reading requirements file", None);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "-".repeat(120));
        assert_eq!(lines[1], "Reader Agent - Action: Reading requirements file");
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn test_action_log_lines_with_result() {
        let lines = action_log_lines("Reader Agent", "Extract", Some("High-level doc"));
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "Reader Agent - Result: High-level doc");
    }

    #[tokio::test]
    async fn test_run_sends_single_user_message_with_profile() {
        let gateway = Arc::new(ScriptedGateway::new().reply(AgentRole::Reader, "summary"));
        let runner = AgentRunner::new(gateway.clone());

        let reply = runner
            .run(AgentRole::Reader, "Extract", "Please read".into(), &NoProgress)
            .await
            .unwrap();

        assert_eq!(reply, "summary");
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].profile.role, AgentRole::Reader);
        assert!(calls[0].profile.has_tools());
        assert_eq!(calls[0].messages.len(), 1);
        assert_eq!(calls[0].messages[0].role, Role::User);
        assert_eq!(calls[0].messages[0].content, "Please read");
    }

    #[tokio::test]
    async fn test_run_logs_transcript_event_on_failure() {
        let gateway = Arc::new(ScriptedGateway::new());
        let logger = Arc::new(RecordingLogger::default());
        let runner = AgentRunner::new(gateway).with_conversation_logger(logger.clone());

        let result = runner
            .run(AgentRole::Clarifier, "Clarify", "prompt".into(), &NoProgress)
            .await;

        assert!(result.is_err());
        let events = logger.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, AGENT_RUN);
        assert_eq!(events[0].1["success"], false);
        assert_eq!(events[0].1["role"], "clarifier");
    }
}
