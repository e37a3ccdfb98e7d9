//! Internal weather lookup result types.

use serde::{Deserialize, Serialize};

/// Current conditions for a resolved location.
///
/// Only constructed when both the geocoding and forecast calls succeed.
/// Values are pre-formatted display strings because the payload exists to be
/// embedded in a synthesis prompt and echoed back as response metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Canonical display name from the geocoder (e.g., "Tokyo, Japan")
    pub location: String,
    /// Temperature with unit suffix (e.g., "21.4°C")
    pub temp: String,
    /// Wind speed with unit suffix (e.g., "12 km/h")
    pub wind: String,
}

/// Outcome of the geocode-then-forecast chain for a city.
///
/// The distinction between "no such place" and "a call failed" is carried
/// internally, but collapses to two fixed human-readable strings at the
/// prompt/metadata boundary to match the established wire contract.
#[derive(Debug, Clone)]
pub enum WeatherLookup {
    Found(WeatherSnapshot),
    NotFound { city: String },
    Failed,
}

impl WeatherLookup {
    /// Render the lookup as the text embedded in the synthesis prompt and
    /// returned in `metadata.weatherData`.
    pub fn as_prompt_payload(&self) -> String {
        match self {
            WeatherLookup::Found(snapshot) => {
                // WeatherSnapshot has no non-serializable fields, so this
                // cannot fail in practice.
                serde_json::to_string(snapshot).unwrap_or_else(|_| "Error fetching data.".into())
            }
            WeatherLookup::NotFound { city } => {
                format!("Could not find coordinates for {city}.")
            }
            WeatherLookup::Failed => "Error fetching data.".to_string(),
        }
    }
}
