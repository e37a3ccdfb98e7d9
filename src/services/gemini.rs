//! Gemini REST client implementing the [`LanguageModel`] seam.

use crate::config::GeminiConfig;
use crate::services::language_model::{LanguageModel, LanguageModelError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, config: &GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        })
    }
}

/// Pull the first candidate's text out of a `generateContent` response.
fn completion_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .find_map(|part| part.text)
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LanguageModelError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        debug!(model = %self.model, prompt_chars = prompt.len(), "Calling Gemini");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LanguageModelError::Status { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        completion_text(parsed).ok_or(LanguageModelError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = GeminiClient::request_body("Identify the city");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Identify the city");
    }

    #[test]
    fn test_completion_text_extraction() {
        let body = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [ { "text": "tokyo" } ],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }
            ],
            "modelVersion": "gemini-2.5-flash"
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(completion_text(parsed).as_deref(), Some("tokyo"));
    }

    #[test]
    fn test_empty_candidates_yield_no_text() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(completion_text(parsed).is_none());
    }
}
