//! # Feature: Completion Client
//!
//! Single-shot calls to the OpenAI Responses API (`POST /responses`). One request per
//! user message, bounded by a timeout, no retries.
//!
//! - **Version**: 1.1.1
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.1: A single deadline covers the whole exchange
//! - 1.1.0: Fall back to the structured `output` array when `output_text` is absent
//! - 1.0.0: Initial release

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;

use super::CompletionError;
use crate::core::Config;

/// Longest provider error body echoed back to the user
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Anything that can turn instructions plus user input into generated text
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, instructions: &str, input: &str) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Option<Vec<OutputItem>>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    content: Option<Vec<ContentPart>>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String, base_url: String, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("seller-assistant/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            config.openai_base_url.clone(),
            config.openai_timeout_secs,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, instructions: &str, input: &str) -> Result<String, CompletionError> {
        if self.api_key.is_empty() {
            return Err(CompletionError::MissingApiKey);
        }

        let url = format!("{}/responses", self.base_url);
        let body = ResponsesRequest {
            model: &self.model,
            instructions,
            input,
        };

        debug!(
            "POST {url} | Model: {} | Instructions: {} chars | Input: {} chars",
            self.model,
            instructions.len(),
            input.len()
        );

        let call = async {
            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, reqwest::Error>((status, text))
        };

        // The whole exchange, body included, shares one deadline
        let (status, text) = match timeout(Duration::from_secs(self.timeout_secs), call).await {
            Err(_) => {
                return Err(CompletionError::Timeout {
                    secs: self.timeout_secs,
                })
            }
            Ok(Err(e)) => return Err(CompletionError::Transport(e)),
            Ok(Ok(pair)) => pair,
        };

        if !status.is_success() {
            return Err(CompletionError::Provider {
                status: status.as_u16(),
                message: provider_error_message(&text),
            });
        }

        let parsed: ResponsesResponse =
            serde_json::from_str(&text).map_err(|e| CompletionError::Malformed(e.to_string()))?;

        let output = extract_output_text(&parsed).ok_or(CompletionError::EmptyOutput)?;
        debug!("Got response: {} chars", output.len());
        Ok(output)
    }
}

/// Generated text from a Responses API body.
///
/// Prefers the `output_text` convenience field and otherwise joins every
/// `output_text` part of the `message` items. Blank text counts as absent.
fn extract_output_text(response: &ResponsesResponse) -> Option<String> {
    if let Some(text) = &response.output_text {
        if !text.trim().is_empty() {
            return Some(text.clone());
        }
    }

    let joined: String = response
        .output
        .iter()
        .flatten()
        .filter(|item| item.kind == "message")
        .flat_map(|item| item.content.iter().flatten())
        .filter(|part| part.kind == "output_text")
        .filter_map(|part| part.text.as_deref())
        .collect();

    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// `error.message` from a provider error body, or the raw body truncated
fn provider_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}
