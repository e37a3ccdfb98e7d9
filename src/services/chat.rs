//! Chat turn orchestration: intent extraction, weather grounding, synthesis.

use crate::config::{GeminiConfig, WeatherSourcesConfig};
use crate::models::{ChatMetadata, ChatResponse};
use crate::services::gemini::GeminiClient;
use crate::services::language_model::{LanguageModel, LanguageModelError};
use crate::services::weather::WeatherFetcher;
use std::sync::Arc;
use tracing::{debug, info};

/// The sentinel completion meaning "no city in this message"
const NO_CITY_SENTINEL: &str = "none";

/// Errors a chat turn can surface to the handler.
///
/// Weather lookup failures never appear here; they are absorbed into the
/// grounding payload upstream.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    #[error(transparent)]
    Model(#[from] LanguageModelError),
}

/// Orchestrates a single chat turn.
///
/// The language model is a trait object so tests can script its completions;
/// `model` is `None` when no API key is configured, which every turn reports
/// as a request-level error.
#[derive(Clone)]
pub struct ChatService {
    model: Option<Arc<dyn LanguageModel>>,
    weather: WeatherFetcher,
}

impl ChatService {
    pub fn new(model: Option<Arc<dyn LanguageModel>>, weather: WeatherFetcher) -> Self {
        Self { model, weather }
    }

    /// Build the service from process environment configuration.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        let gemini = GeminiConfig::from_env();
        let model: Option<Arc<dyn LanguageModel>> = gemini
            .api_key
            .clone()
            .map(|key| Arc::new(GeminiClient::new(key, &gemini)) as Arc<dyn LanguageModel>);

        let weather = WeatherFetcher::new(&WeatherSourcesConfig::from_env())?;
        Ok(Self::new(model, weather))
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    /// Run one chat turn for a validated, non-empty message.
    pub async fn handle(&self, message: &str) -> Result<ChatResponse, ChatError> {
        let model = self.model.as_ref().ok_or(ChatError::MissingApiKey)?;

        let completion = model.generate(&extraction_prompt(message)).await?;
        let city = city_from_completion(&completion);

        match city {
            Some(city) => {
                info!(city = %city, "City detected, grounding response in weather data");
                let lookup = self.weather.lookup(&city).await;
                let weather_data = lookup.as_prompt_payload();

                let response = model
                    .generate(&grounded_prompt(message, &weather_data))
                    .await?;

                Ok(ChatResponse {
                    response,
                    metadata: Some(ChatMetadata { city, weather_data }),
                })
            }
            None => {
                debug!("No city detected, answering directly");
                let response = model.generate(message).await?;

                Ok(ChatResponse {
                    response,
                    metadata: None,
                })
            }
        }
    }
}

/// Instruction template for the city-extraction call.
fn extraction_prompt(message: &str) -> String {
    format!(
        "Identify the city name in this text: \"{message}\". Respond with ONLY the city name. \
        If no city is mentioned, respond with '{NO_CITY_SENTINEL}'."
    )
}

/// Instruction template for the grounded synthesis call.
fn grounded_prompt(message: &str, weather_data: &str) -> String {
    format!(
        "User asked: \"{message}\". We found this weather data: {weather_data}. \
        Please provide a friendly and natural response incorporating this data."
    )
}

/// Normalize the extraction completion into a control-flow decision.
///
/// The model's free text is trimmed and lowercased; the exact sentinel or a
/// blank completion means "no city". Anything else is taken at face value,
/// so a hallucinated name simply leads to a failed geocoding lookup.
fn city_from_completion(completion: &str) -> Option<String> {
    let city = completion.trim().to_lowercase();
    if city == NO_CITY_SENTINEL || city.is_empty() {
        None
    } else {
        Some(city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_normalization() {
        assert_eq!(city_from_completion("Tokyo\n"), Some("tokyo".to_string()));
        assert_eq!(city_from_completion("  NEW YORK "), Some("new york".to_string()));
        assert_eq!(city_from_completion("none"), None);
        assert_eq!(city_from_completion("None\n"), None);
        assert_eq!(city_from_completion("   "), None);
    }

    #[test]
    fn test_extraction_prompt_embeds_message_and_sentinel() {
        let prompt = extraction_prompt("What is the weather in Tokyo?");
        assert!(prompt.contains("\"What is the weather in Tokyo?\""));
        assert!(prompt.contains("respond with 'none'"));
    }

    #[test]
    fn test_grounded_prompt_embeds_weather_payload() {
        let prompt = grounded_prompt("Weather in Tokyo?", "Error fetching data.");
        assert!(prompt.contains("\"Weather in Tokyo?\""));
        assert!(prompt.contains("We found this weather data: Error fetching data."));
    }
}
