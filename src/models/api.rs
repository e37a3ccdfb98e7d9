//! Request and response models for the API endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Request body for the chat endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ChatRequest {
    /// The user's message (e.g., "What is the weather in Tokyo?")
    pub message: Option<String>,
}

/// Weather context attached to a chat response when a city was detected.
///
/// `weather_data` carries the same text that was embedded in the synthesis
/// prompt: either a compact JSON object with `location`, `temp`, and `wind`,
/// or one of the fixed lookup-failure strings. Clients are expected to try
/// to parse it and skip their weather widget when parsing fails.
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMetadata {
    /// Lowercased city name as extracted from the message
    pub city: String,
    /// Weather payload text, or a lookup-failure sentinel string
    pub weather_data: String,
}

/// Response model for the chat endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ChatResponse {
    /// Natural-language reply produced by the language model
    pub response: String,
    /// Present only when the triggering message named a city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ChatMetadata>,
}

/// Error body returned by all non-2xx responses
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_omitted_when_absent() {
        let response = ChatResponse {
            response: "Sure, here's a joke.".to_string(),
            metadata: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn test_metadata_uses_camel_case_on_the_wire() {
        let response = ChatResponse {
            response: "It's 21°C in Tokyo right now.".to_string(),
            metadata: Some(ChatMetadata {
                city: "tokyo".to_string(),
                weather_data: "Error fetching data.".to_string(),
            }),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["metadata"]["city"], "tokyo");
        assert_eq!(json["metadata"]["weatherData"], "Error fetching data.");
    }

    #[test]
    fn test_chat_request_tolerates_missing_message() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.message.is_none());
    }
}
