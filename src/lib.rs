//! Weather Agent API - a conversational weather Q&A service
//!
//! A small Actix Web API that answers natural-language weather questions by
//! chaining a language model with two public data services:
//! - A Gemini call classifies whether the message names a city
//! - Nominatim geocodes the city, Open-Meteo supplies current conditions
//! - A second Gemini call phrases the reply, grounded in the fetched data
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Data structures and request/response models
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `middleware/` - Custom middleware for cross-cutting concerns
//! - `services/` - External clients and the chat turn orchestration
//! - `config/` - Configuration structures and environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use weather_agent_api::{ChatService, create_base_app};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let service = ChatService::from_env().expect("HTTP client construction failed");
//!     let app = create_base_app(service);
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

// Re-export commonly used types and functions for convenience
pub use config::{GeminiConfig, WeatherSourcesConfig};
pub use handlers::{chat, create_base_app, create_openapi_spec, health, index};
pub use middleware::RequestIdMiddleware;
pub use models::{
    ChatMetadata, ChatRequest, ChatResponse, ErrorResponse, HealthResponse, WeatherLookup,
    WeatherSnapshot,
};
pub use services::{
    ChatError, ChatService, CurrentConditions, ForecastClient, ForecastError, GeminiClient,
    GeocodedPlace, GeocodingClient, GeocodingError, LanguageModel, LanguageModelError,
    WeatherFetcher,
};
