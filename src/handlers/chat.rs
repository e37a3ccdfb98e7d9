//! Chat endpoint handler.

use crate::{
    models::{ChatRequest, ChatResponse, ErrorResponse},
    services::chat::{ChatError, ChatService},
};
use actix_web::{HttpResponse, web};
use paperclip::actix::api_v2_operation;
use tracing::error;

/// Chat endpoint
///
/// Accepts a natural-language message. When the message names a city, the
/// reply is grounded in a live weather lookup and the response carries
/// `metadata` describing the lookup; otherwise the message is answered
/// directly and no metadata is attached.
#[api_v2_operation(
    summary = "Chat Endpoint",
    description = "Answers a natural-language message. Messages that name a city receive a reply grounded in current weather data, plus metadata with the detected city and the raw weather payload. Lookup failures still produce a 200 response; the metadata then carries a fixed error string instead of weather JSON.",
    tags("Chat"),
    responses(
        (status = 200, description = "Successful response", body = ChatResponse),
        (status = 400, description = "Bad Request - Missing or empty message"),
        (status = 500, description = "Internal Server Error - Missing API key or model failure")
    )
)]
pub async fn chat(service: web::Data<ChatService>, body: web::Json<ChatRequest>) -> HttpResponse {
    // Credential check comes first and short-circuits before any network
    // call, so a misconfigured deployment fails the same way on every turn.
    if !service.is_configured() {
        return HttpResponse::InternalServerError().json(ErrorResponse::new(
            "Gemini API key is not configured inside .env",
        ));
    }

    let message = body.message.as_deref().unwrap_or("");
    if message.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Message is required"));
    }

    match service.handle(message).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ChatError::MissingApiKey) => HttpResponse::InternalServerError().json(
            ErrorResponse::new("Gemini API key is not configured inside .env"),
        ),
        Err(e) => {
            // The upstream cause stays in the logs; the client only sees a
            // generic failure.
            error!(error = %e, "Chat turn failed");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to process message"))
        }
    }
}
