//! Configuration structures and loading utilities.
//!
//! This module contains all configuration structures used by the application,
//! including environment variable loading and default values.

pub mod gemini;
pub mod weather;

pub use gemini::*;
pub use weather::*;
