//! Business logic and service layer modules.
//!
//! This module contains the core of the application: the external service
//! clients, the weather fetch orchestrator, and the chat turn service.

pub mod chat;
pub mod forecast;
pub mod gemini;
pub mod geocoding;
pub mod language_model;
pub mod weather;

pub use chat::*;
pub use forecast::*;
pub use gemini::*;
pub use geocoding::*;
pub use language_model::*;
pub use weather::*;
