//! Geocoding client backed by a Nominatim-compatible search endpoint.

use crate::config::WeatherSourcesConfig;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// A place resolved from a free-text name
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub lat: f64,
    pub lon: f64,
    /// Canonical display name (e.g., "Tokyo, Japan")
    pub display_name: String,
}

/// Nominatim search result entry. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

/// Errors from the geocoding call.
///
/// A place that simply isn't found is not an error; `resolve` reports that
/// as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("geocoding service returned status {0}")]
    Status(u16),
}

/// Client for the external geocoding service
#[derive(Clone)]
pub struct GeocodingClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeocodingClient {
    /// Create a client with the identifying User-Agent the service requires
    pub fn new(config: &WeatherSourcesConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.geocoding_base_url.clone(),
        })
    }

    /// Resolve a free-text place name to coordinates and a display name.
    ///
    /// Returns `Ok(None)` when the service has no match for the name, or
    /// when the result set is malformed. Only transport-level problems and
    /// non-2xx statuses are errors.
    pub async fn resolve(&self, city: &str) -> Result<Option<GeocodedPlace>, GeocodingError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodingError::Status(response.status().as_u16()));
        }

        let places: Vec<NominatimPlace> = match response.json().await {
            Ok(places) => places,
            Err(e) if e.is_decode() => {
                debug!(city = %city, error = %e, "Unexpected geocoding payload, treating as no match");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(places.into_iter().next().and_then(place_from_result))
    }
}

/// Convert a raw search result into a typed place, discarding entries with
/// unparsable coordinates.
fn place_from_result(place: NominatimPlace) -> Option<GeocodedPlace> {
    let lat = place.lat.parse().ok()?;
    let lon = place.lon.parse().ok()?;

    Some(GeocodedPlace {
        lat,
        lon,
        display_name: place.display_name,
    })
}
