//! Narrow seam for the hosted language model.
//!
//! Both intent extraction and response synthesis go through this single
//! prompt-in, text-out interface, so tests can substitute a deterministic
//! stub for the hosted model.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum LanguageModelError {
    #[error("language model request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("language model returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("language model response carried no text")]
    EmptyCompletion,
}

/// A generative-text completion dependency: one prompt in, one completion out.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LanguageModelError>;
}
