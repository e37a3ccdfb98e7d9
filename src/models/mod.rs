//! Data models and schemas for the Weather Agent API.
//!
//! This module contains all the data structures used throughout the
//! application, including request/response models and the internal weather
//! lookup types.

pub mod api;
pub mod weather;

pub use api::*;
pub use weather::*;
