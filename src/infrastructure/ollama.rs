//! Ollama client for text generation
//!
//! Talks to an OpenAI-compatible chat completions endpoint. Every fault
//! (timeout, quota rejection, transport error, empty reply) maps onto
//! `OllamaError`, which the pipeline treats as a stage fallback trigger.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{CollaboratorPort, GenerateRequest, GenerateResponse};

/// Default per-request timeout; a timed-out call is just another failure
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, thiserror::Error)]
pub enum OllamaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("Empty response from model")]
    EmptyResponse,
}

/// Client for an Ollama server's OpenAI-compatible API
pub struct OllamaClient {
    client: Client,
    base_url: String,
    default_model: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(base_url: &str, default_model: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_model: default_model.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check if the server is available
    pub async fn health_check(&self) -> Result<(), OllamaError> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .timeout(self.timeout)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(OllamaError::Api(format!(
                "health check returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatCompletionMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatCompletionMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait::async_trait]
impl CollaboratorPort for OllamaClient {
    type Error = OllamaError;

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, Self::Error> {
        let mut messages = Vec::new();
        if let Some(system_prompt) = request.system_prompt {
            messages.push(ChatCompletionMessage {
                role: "system",
                content: system_prompt,
            });
        }
        messages.push(ChatCompletionMessage {
            role: "user",
            content: request.prompt,
        });

        let body = ChatCompletionRequest {
            model: request.model.unwrap_or_else(|| self.default_model.clone()),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_output_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            // Applied per request so the bound holds even if the builder
            // fell back to the default client.
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(OllamaError::Api(format!("{status}: {error_text}")));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(OllamaError::EmptyResponse)?;

        Ok(GenerateResponse {
            content,
            model: completion.model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = OllamaClient::new("http://localhost:11434/v1/", "llama3");
        assert_eq!(client.base_url, "http://localhost:11434/v1");
    }

    #[tokio::test]
    async fn generate_times_out_against_an_unresponsive_server() {
        // Bound but never accept, so the request hangs until the timeout.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let client = OllamaClient::new(&format!("http://{addr}"), "llama3")
            .with_timeout(Duration::from_millis(100));
        let started = std::time::Instant::now();
        let result = client.generate(GenerateRequest::new("hello")).await;

        assert!(matches!(result, Err(OllamaError::Http(_))));
        assert!(started.elapsed() < Duration::from_secs(5));
        drop(listener);
    }
}
