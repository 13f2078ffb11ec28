// src/providers/openai.rs

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::OpenAIConfig;
use crate::errors::{GenError, Result};
use crate::providers::{ChatProvider, ChatRequest};

/// A provider for interacting with OpenAI-compatible chat completion APIs.
pub struct OpenAIProvider {
    client: Client,
    config: OpenAIConfig,
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

impl OpenAIProvider {
    /// Creates a new `OpenAIProvider`.
    pub fn new(client: Client, config: OpenAIConfig) -> Self {
        Self { client, config }
    }

    /// Builds the shared HTTP client from the config and wraps it.
    pub fn from_config(config: OpenAIConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?, config))
    }
}

#[async_trait]
impl ChatProvider for OpenAIProvider {
    /// Calls the chat completions endpoint and returns the first choice's text and latency.
    async fn complete(&self, request: &ChatRequest<'_>) -> Result<(String, u64)> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| GenError::Authentication {
            status: StatusCode::UNAUTHORIZED.as_u16(),
            body: "OPENAI_API_KEY is not set".to_string(),
        })?;

        let url = format!("{}/chat/completions", self.config.api_base.trim_end_matches('/'));

        log::info!("📡 Calling OpenAI: {} with model: {}", url, request.model);

        let body = OpenAIRequest {
            model: request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: request.system,
                },
                Message {
                    role: "user",
                    content: request.user,
                },
            ],
            temperature: request.temperature,
        };

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 OpenAI response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenError::Authentication {
                    status: status.as_u16(),
                    body: error_body,
                },
                StatusCode::TOO_MANY_REQUESTS => GenError::RateLimited { body: error_body },
                _ => GenError::Api {
                    status: status.as_u16(),
                    body: error_body,
                },
            });
        }

        let raw = resp.text().await?;
        let openai_resp: OpenAIResponse = serde_json::from_str(&raw)
            .map_err(|e| GenError::MalformedResponse(format!("{}: {}", e, raw)))?;

        let choice = openai_resp
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenError::MalformedResponse("No choices in response".to_string()))?;

        let output = choice
            .message
            .content
            .ok_or_else(|| GenError::MalformedResponse("First choice has no text content".to_string()))?;

        Ok((output, latency_ms))
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let body = OpenAIRequest {
            model: "gpt-4o-mini",
            messages: vec![
                Message { role: "system", content: "sys" },
                Message { role: "user", content: "hello" },
            ],
            temperature: 0.3,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hello");
        assert!((value["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_response_with_null_content_deserializes() {
        let resp: OpenAIResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#).unwrap();
        assert!(resp.choices[0].message.content.is_none());
    }

    #[actix_rt::test]
    async fn test_missing_key_fails_before_any_request() {
        // Nothing listens here; reaching the network would surface as Transport instead.
        let provider = OpenAIProvider::new(
            Client::new(),
            OpenAIConfig {
                api_base: "http://127.0.0.1:9".to_string(),
                api_key: None,
                timeout: None,
            },
        );
        let request = ChatRequest {
            model: "gpt-4o-mini",
            system: "sys",
            user: "hi",
            temperature: 0.3,
        };

        let err = provider.complete(&request).await.unwrap_err();
        assert!(matches!(err, GenError::Authentication { status: 401, .. }));
    }
}
