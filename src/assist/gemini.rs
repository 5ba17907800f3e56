//! Gemini `generateContent` over REST.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    assist::client::{GenerateRequest, GenerativeClient},
    foundation::error::{StudioError, StudioResult},
};

pub struct GeminiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> StudioResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(StudioError::validation("Gemini API key cannot be empty"));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StudioError::remote(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

fn build_body(request: &GenerateRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: request.prompt.clone(),
            }],
        }],
        generation_config: request.response_schema.clone().map(|schema| GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        }),
    }
}

/// Text of the first candidate, or an error for blocked/empty responses.
fn response_text(body: &str) -> StudioResult<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| StudioError::remote(format!("failed to parse response: {e}")))?;

    if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(StudioError::remote(format!(
            "content blocked by safety filters: {reason}"
        )));
    }

    let candidate = parsed
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or_else(|| StudioError::remote("no candidates returned"))?;

    Ok(candidate
        .content
        .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
        .unwrap_or_default())
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) => format!(
            "Gemini API error ({status}; status={}): {}",
            err.error.status.as_deref().unwrap_or("unknown"),
            err.error.message
        ),
        Err(_) => format!("Gemini API error ({status}): {body}"),
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> StudioResult<String> {
        let url = self.endpoint(&request.model);
        let body = build_body(&request);
        tracing::debug!(
            model = %request.model,
            json = request.response_schema.is_some(),
            "gemini request"
        );

        // Key goes in a header so it never shows up in logged URLs.
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| StudioError::remote(format!("request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StudioError::remote(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(StudioError::remote(error_message(status, &text)));
        }
        response_text(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assist/gemini.rs"]
mod tests;
