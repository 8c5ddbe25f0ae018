//! Language-chat backends.

use crate::error::ConverseError;
use crate::persona::{persona_for, system_prompt};
use arkonis_data::{ChatTurn, PersonaContext};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[async_trait]
pub trait Converser: Send + Sync {
    /// Produces the agent's reply to `message`. `history` holds prior turns only.
    async fn converse(
        &self,
        context: &PersonaContext,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, ConverseError>;
}

/// Offline converser answering from the persona sheet and live council state.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicConverser;

#[async_trait]
impl Converser for HeuristicConverser {
    async fn converse(
        &self,
        context: &PersonaContext,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, ConverseError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ConverseError::EmptyReply);
        }
        let agent = &context.agent;
        let persona = persona_for(agent.model);
        let continuity = if history.is_empty() {
            String::new()
        } else {
            format!(" Continuing our exchange of {} turns.", history.len())
        };

        Ok(format!(
            "{} {} reporting as {}.{continuity} Under {} the council tracks {} verified threats and {} active blocks at {:.1}% coherence. On \"{message}\": my current task is {}, running at {:.1}% efficiency.",
            persona.signature,
            agent.name(),
            agent.role,
            context.directive,
            context.memory.verified_threats,
            context.memory.active_blocks,
            context.memory.global_coherence * 100.0,
            agent.current_task,
            agent.efficiency,
        ))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    system: String,
    history: &'a [ChatTurn],
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    text: Option<String>,
}

/// JSON-over-HTTP chat backend with retry and exponential backoff.
#[derive(Debug, Clone)]
pub struct HttpConverser {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    max_retries: u32,
    initial_backoff: Duration,
    timeout: Duration,
}

impl HttpConverser {
    const MAX_RETRIES: u32 = 3;
    const INITIAL_BACKOFF_MS: u64 = 1000;
    const REQUEST_TIMEOUT_SECS: u64 = 30;

    #[must_use]
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            max_retries: Self::MAX_RETRIES,
            initial_backoff: Duration::from_millis(Self::INITIAL_BACKOFF_MS),
            timeout: Duration::from_secs(Self::REQUEST_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_retries(mut self, max_retries: u32, initial_backoff: Duration) -> Self {
        self.max_retries = max_retries.max(1);
        self.initial_backoff = initial_backoff;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn send_once(&self, request: &ChatRequest<'_>) -> Result<String, ConverseError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConverseError::Upstream {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: ChatResponse = response.json().await?;
        body.text
            .filter(|text| !text.trim().is_empty())
            .ok_or(ConverseError::EmptyReply)
    }
}

#[async_trait]
impl Converser for HttpConverser {
    async fn converse(
        &self,
        context: &PersonaContext,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, ConverseError> {
        let request = ChatRequest {
            model: &self.model,
            system: system_prompt(context),
            history,
            message,
        };

        let mut last_error = None;
        for attempt in 0..self.max_retries {
            match self.send_once(&request).await {
                Ok(text) => return Ok(text),
                Err(err) if err.is_transient() && attempt + 1 < self.max_retries => {
                    tracing::warn!(attempt, error = %err, "Chat request failed, retrying");
                    last_error = Some(err);
                    let backoff = self.initial_backoff * 2_u32.pow(attempt);
                    tokio::time::sleep(backoff).await;
                }
                Err(err) => return Err(err),
            }
        }

        Err(last_error.unwrap_or_else(|| ConverseError::Transport("no attempt made".to_string())))
    }
}
