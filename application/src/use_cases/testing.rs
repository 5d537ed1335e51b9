//! Scripted port implementations shared by the use case tests

use crate::ports::agent_gateway::{AgentGateway, GatewayError};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::interaction::{InteractionError, InteractionPort};
use async_trait::async_trait;
use clarifier_domain::{AgentProfile, AgentRole, Message};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// One request received by [`ScriptedGateway`]
#[derive(Debug, Clone)]
pub struct GatewayCall {
    pub profile: AgentProfile,
    pub messages: Vec<Message>,
}

/// Gateway replying from per-role queues. An exhausted queue fails the call.
#[derive(Default)]
pub struct ScriptedGateway {
    replies: Mutex<HashMap<AgentRole, VecDeque<Result<String, String>>>>,
    calls: Mutex<Vec<GatewayCall>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, role: AgentRole, text: &str) -> Self {
        self.push(role, Ok(text.to_string()))
    }

    pub fn fail(self, role: AgentRole, message: &str) -> Self {
        self.push(role, Err(message.to_string()))
    }

    fn push(self, role: AgentRole, entry: Result<String, String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(role)
            .or_default()
            .push_back(entry);
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, role: AgentRole) -> Vec<GatewayCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.profile.role == role)
            .collect()
    }
}

#[async_trait]
impl AgentGateway for ScriptedGateway {
    async fn run(&self, agent: &AgentProfile, messages: &[Message]) -> Result<String, GatewayError> {
        self.calls.lock().unwrap().push(GatewayCall {
            profile: agent.clone(),
            messages: messages.to_vec(),
        });
        self.replies
            .lock()
            .unwrap()
            .get_mut(&agent.role)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| Err(format!("no scripted reply for {}", agent.role.as_str())))
            .map_err(GatewayError::RequestFailed)
    }
}

/// Interaction answering from a script; an exhausted script reports `Closed`.
#[derive(Default)]
pub struct ScriptedInteraction {
    answers: Mutex<VecDeque<String>>,
    continues: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<(String, Vec<String>)>>,
    confirmations: Mutex<Vec<usize>>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(self, answers: &[&str]) -> Self {
        self.answers
            .lock()
            .unwrap()
            .extend(answers.iter().map(|a| a.to_string()));
        self
    }

    pub fn continues(self, decisions: &[bool]) -> Self {
        self.continues.lock().unwrap().extend(decisions.iter().copied());
        self
    }

    pub fn asked(&self) -> Vec<(String, Vec<String>)> {
        self.asked.lock().unwrap().clone()
    }

    pub fn confirmations(&self) -> Vec<usize> {
        self.confirmations.lock().unwrap().clone()
    }
}

#[async_trait]
impl InteractionPort for ScriptedInteraction {
    async fn ask(&self, question: &str, options: &[String]) -> Result<String, InteractionError> {
        self.asked
            .lock()
            .unwrap()
            .push((question.to_string(), options.to_vec()));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(InteractionError::Closed)
    }

    async fn confirm_continue(&self, completed_round: usize) -> Result<bool, InteractionError> {
        self.confirmations.lock().unwrap().push(completed_round);
        self.continues
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(InteractionError::Closed)
    }
}

/// Transcript logger keeping every event in memory
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<(&'static str, Value)>>,
}

impl RecordingLogger {
    pub fn events(&self) -> Vec<(&'static str, Value)> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        self.events().into_iter().map(|(t, _)| t).collect()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
