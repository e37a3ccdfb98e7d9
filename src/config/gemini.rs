//! Gemini API configuration.

use std::env;

/// Configuration for the Gemini generative-language API
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; a missing key is surfaced as a request-level error, never a
    /// process-level one
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl GeminiConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let base_url = env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url);
        let model = env::var("GEMINI_MODEL").unwrap_or(defaults.model);

        Self {
            api_key,
            base_url,
            model,
        }
    }
}
