// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! LLM client abstraction for summary generation

use crate::config::{InsightConfig, Provider};
use crate::error::{SummaryError, SummaryResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Trait for LLM clients that answer structured generation requests
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Send a prompt and get JSON text matching the request schema
    async fn generate(&self, request: GenerationRequest) -> Result<LLMResponse, LLMError>;

    /// Get model name
    fn model_name(&self) -> &str;
}

/// A single structured generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    /// JSON Schema (lowercase type names) the response text must satisfy
    pub response_schema: Value,
}

/// Response from LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    pub content: String,
    pub usage: TokenUsage,
    pub model: String,
}

/// Token usage information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Errors from LLM clients
#[derive(Debug, Error)]
pub enum LLMError {
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Unauthorized: check the API key")]
    Unauthorized,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for LLMError {
    /// Request URLs are stripped so nothing sensitive reaches the logs.
    fn from(e: reqwest::Error) -> Self {
        LLMError::Http(e.without_url())
    }
}

/// Map a non-success response onto an [`LLMError`].
async fn status_error(response: reqwest::Response) -> LLMError {
    let status = response.status();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LLMError::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => LLMError::RateLimitExceeded,
        _ => LLMError::ApiError {
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        },
    }
}

/// Google Gemini client implementation
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: GEMINI_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Rewrite a JSON Schema into Gemini's OpenAPI subset: upper-case type names,
/// no `additionalProperties`.
fn gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => map
            .iter()
            .filter(|(key, _)| key.as_str() != "additionalProperties")
            .map(|(key, value)| {
                let value = match (key.as_str(), value) {
                    ("type", Value::String(name)) => Value::String(name.to_uppercase()),
                    _ => gemini_schema(value),
                };
                (key.clone(), value)
            })
            .collect::<serde_json::Map<_, _>>()
            .into(),
        Value::Array(items) => Value::Array(items.iter().map(gemini_schema).collect()),
        other => other.clone(),
    }
}

#[async_trait]
impl LLMClient for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<LLMResponse, LLMError> {
        let body = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": request.prompt }]
                }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": gemini_schema(&request.response_schema)
            }
        });

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, request.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let response_data: Value = response.json().await?;

        // Missing text comes back empty and is rejected when the summary is parsed
        let content: String = response_data["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        let usage_data = &response_data["usageMetadata"];
        let usage = TokenUsage {
            prompt_tokens: usage_data["promptTokenCount"].as_u64().unwrap_or(0) as u32,
            completion_tokens: usage_data["candidatesTokenCount"].as_u64().unwrap_or(0) as u32,
            total_tokens: usage_data["totalTokenCount"].as_u64().unwrap_or(0) as u32,
        };

        Ok(LLMResponse {
            content,
            usage,
            model: request.model,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// OpenAI client implementation
pub struct OpenAIClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAIClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: OPENAI_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl LLMClient for OpenAIClient {
    async fn generate(&self, request: GenerationRequest) -> Result<LLMResponse, LLMError> {
        let body = serde_json::json!({
            "model": request.model,
            "messages": [
                {
                    "role": "user",
                    "content": request.prompt
                }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "daily_summary",
                    "strict": true,
                    "schema": request.response_schema
                }
            }
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let response_data: Value = response.json().await?;

        let content = response_data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(LLMError::InvalidResponse("Missing content".to_string()))?
            .to_string();

        let usage_data = &response_data["usage"];
        let usage = TokenUsage {
            prompt_tokens: usage_data["prompt_tokens"].as_u64().unwrap_or(0) as u32,
            completion_tokens: usage_data["completion_tokens"].as_u64().unwrap_or(0) as u32,
            total_tokens: usage_data["total_tokens"].as_u64().unwrap_or(0) as u32,
        };

        Ok(LLMResponse {
            content,
            usage,
            model: request.model,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Build the client selected by `config`.
pub fn build_client(config: &InsightConfig) -> SummaryResult<Arc<dyn LLMClient>> {
    let api_key = config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            SummaryError::Config(format!("no API key configured for {}", config.provider))
        })?;
    let model = config.model().to_string();

    tracing::debug!(provider = %config.provider, model = %model, "Building LLM client");

    let client: Arc<dyn LLMClient> = match config.provider {
        Provider::Gemini => {
            let mut client = GeminiClient::new(api_key, model);
            if let Some(base_url) = &config.base_url {
                client = client.with_base_url(base_url.clone());
            }
            Arc::new(client)
        }
        Provider::OpenAI => {
            let mut client = OpenAIClient::new(api_key, model);
            if let Some(base_url) = &config.base_url {
                client = client.with_base_url(base_url.clone());
            }
            Arc::new(client)
        }
    };

    Ok(client)
}
