//! OpenAI-compatible agent gateway
//!
//! Sends each agent run as a chat completion request
//! (`POST {base_url}/v1/chat/completions`). The profile instructions become
//! the system message; tool bindings become function tools. When the model
//! asks for tool calls they are executed through the bound
//! [`ToolExecutorPort`] and the request is re-sent, up to
//! [`MAX_TOOL_ROUNDS`] times.

use crate::config::{FileModelsConfig, FileOpenAiConfig};
use async_trait::async_trait;
use clarifier_application::{AgentGateway, GatewayError, ToolExecutorPort};
use clarifier_domain::{AgentProfile, Message, ToolCall};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Tool-call round trips allowed in one agent run
pub const MAX_TOOL_ROUNDS: usize = 4;

/// Base delay of the exponential retry backoff
const BACKOFF_BASE_MS: u64 = 500;

// ==================== Wire types ====================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [WireMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "no_tools")]
    tools: &'a [WireTool],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<WireToolCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl WireMessage {
    fn text(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    fn tool_result(call_id: &str, output: String) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(output),
            tool_calls: Vec::new(),
            tool_call_id: Some(call_id.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type", default = "function_kind")]
    kind: String,
    function: WireFunctionCall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    /// JSON-encoded arguments
    arguments: String,
}

#[derive(Debug, Serialize)]
struct WireTool {
    #[serde(rename = "type")]
    kind: &'static str,
    function: WireFunction,
}

#[derive(Debug, Serialize)]
struct WireFunction {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: WireMessage,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn no_tools(tools: &&[WireTool]) -> bool {
    tools.is_empty()
}

fn function_kind() -> String {
    "function".to_string()
}

// ==================== Request/response mapping ====================

/// System message from the profile, then the conversation
fn build_messages(agent: &AgentProfile, messages: &[Message]) -> Vec<WireMessage> {
    std::iter::once(WireMessage::text("system", &agent.instructions))
        .chain(
            messages
                .iter()
                .map(|m| WireMessage::text(m.role.as_str(), &m.content)),
        )
        .collect()
}

fn tool_definitions(agent: &AgentProfile) -> Vec<WireTool> {
    agent
        .tools
        .iter()
        .map(|tool| WireTool {
            kind: "function",
            function: WireFunction {
                name: tool.name.clone(),
                description: tool.description.clone(),
                parameters: tool.parameters_schema(),
            },
        })
        .collect()
}

/// First choice of a successful response body
fn parse_reply(body: &str) -> Result<WireMessage, GatewayError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| GatewayError::InvalidResponse("No choices in response".to_string()))
}

/// Human-readable message for a failed response
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(error) => format!("API error ({}): {}", status, error.error.message),
        Err(_) => format!("API error ({}): {}", status, body),
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Delay before retry number `attempt` (0-based)
fn backoff(attempt: u32) -> Duration {
    Duration::from_millis(BACKOFF_BASE_MS.saturating_mul(1u64 << attempt.min(16)))
}

fn tool_call_from_wire(call: &WireToolCall) -> Result<ToolCall, String> {
    let arguments = if call.function.arguments.trim().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(&call.function.arguments)
            .map_err(|e| format!("Error: invalid tool arguments: {}", e))?
    };
    Ok(ToolCall::new(&call.id, &call.function.name, arguments))
}

// ==================== Gateway ====================

/// [`AgentGateway`] for OpenAI-compatible chat completion APIs
pub struct OpenAiAgentGateway {
    http: Client,
    api_key: String,
    base_url: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    max_retries: u32,
    models: FileModelsConfig,
    tool_executor: Option<Arc<dyn ToolExecutorPort>>,
}

impl OpenAiAgentGateway {
    /// Build the gateway from the `[providers.openai]` and `[models]` sections.
    ///
    /// Fails when no API key can be resolved.
    pub fn from_config(
        provider: &FileOpenAiConfig,
        models: &FileModelsConfig,
    ) -> Result<Self, GatewayError> {
        let api_key = provider.resolve_api_key().ok_or_else(|| {
            GatewayError::Configuration(format!(
                "no API key: set {} or providers.openai.api_key",
                provider.api_key_env
            ))
        })?;
        let http = Client::builder()
            .timeout(Duration::from_secs(provider.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            base_url: provider.base_url.trim_end_matches('/').to_string(),
            max_tokens: provider.max_tokens,
            temperature: provider.temperature,
            max_retries: provider.max_retries,
            models: models.clone(),
            tool_executor: None,
        })
    }

    /// Bind the executor for tool calls requested by agents
    pub fn with_tool_executor(mut self, executor: Arc<dyn ToolExecutorPort>) -> Self {
        self.tool_executor = Some(executor);
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// Send one request, retrying rate limits, server errors and transport failures
    async fn send(&self, request: &ChatRequest<'_>) -> Result<WireMessage, GatewayError> {
        let url = self.endpoint();
        let mut attempt = 0;
        loop {
            let failure = match self
                .http
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(request)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    match response.text().await {
                        Ok(body) if status.is_success() => return parse_reply(&body),
                        Ok(body) => {
                            let message = error_message(status, &body);
                            if !is_retryable(status) {
                                return Err(GatewayError::RequestFailed(message));
                            }
                            GatewayError::RequestFailed(message)
                        }
                        Err(e) => GatewayError::ConnectionError(format!(
                            "Failed to read response: {}",
                            e
                        )),
                    }
                }
                Err(e) => GatewayError::ConnectionError(format!("HTTP request failed: {}", e)),
            };

            if attempt >= self.max_retries {
                return Err(failure);
            }
            let delay = backoff(attempt);
            attempt += 1;
            warn!(
                "{}; retrying in {}ms ({}/{})",
                failure,
                delay.as_millis(),
                attempt,
                self.max_retries
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Run the requested tool calls; failures become text for the model
    async fn execute_tools(
        &self,
        executor: &Arc<dyn ToolExecutorPort>,
        calls: &[WireToolCall],
    ) -> Vec<WireMessage> {
        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            let output = match tool_call_from_wire(call) {
                Ok(tool_call) => match executor.execute(&tool_call).await {
                    Ok(output) => output,
                    Err(e) => format!("Error: {}", e),
                },
                Err(message) => message,
            };
            debug!(tool = %call.function.name, output_len = output.len(), "Tool call finished");
            results.push(WireMessage::tool_result(&call.id, output));
        }
        results
    }
}

#[async_trait]
impl AgentGateway for OpenAiAgentGateway {
    async fn run(&self, agent: &AgentProfile, messages: &[Message]) -> Result<String, GatewayError> {
        let model = self.models.model_for(agent.role);
        let tools = tool_definitions(agent);
        let mut conversation = build_messages(agent, messages);
        debug!(agent = %agent.name, model = %model, "Sending chat completion");

        for round in 0..=MAX_TOOL_ROUNDS {
            let reply = self
                .send(&ChatRequest {
                    model: &model,
                    messages: &conversation,
                    max_tokens: self.max_tokens,
                    temperature: self.temperature,
                    tools: &tools,
                })
                .await?;

            if reply.tool_calls.is_empty() {
                return reply.content.ok_or_else(|| {
                    GatewayError::InvalidResponse("Reply has no content".to_string())
                });
            }

            let Some(executor) = &self.tool_executor else {
                return Err(GatewayError::InvalidResponse(
                    "Agent requested a tool but no tool executor is bound".to_string(),
                ));
            };
            if round == MAX_TOOL_ROUNDS {
                break;
            }

            let results = self.execute_tools(executor, &reply.tool_calls).await;
            conversation.push(reply);
            conversation.extend(results);
        }

        Err(GatewayError::ToolLoopExceeded(MAX_TOOL_ROUNDS))
    }
}
