//! Forecast client backed by an Open-Meteo-compatible endpoint.

use crate::config::WeatherSourcesConfig;
use serde::Deserialize;
use std::time::Duration;

/// Current conditions for a coordinate pair, as the service reports them
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in °C
    pub temperature: f64,
    /// Wind speed in km/h
    pub windspeed: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentConditions,
}

#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("forecast request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("forecast service returned status {0}")]
    Status(u16),
}

/// Client for the external forecast service
#[derive(Clone)]
pub struct ForecastClient {
    client: reqwest::Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(config: &WeatherSourcesConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.forecast_base_url.clone(),
        })
    }

    /// Fetch current weather for a coordinate pair.
    ///
    /// Only the current-weather fields are requested; a successful response
    /// is trusted to carry them.
    pub async fn current_conditions(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CurrentConditions, ForecastError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true",
            self.base_url, lat, lon
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ForecastError::Status(response.status().as_u16()));
        }

        let forecast: ForecastResponse = response.json().await?;
        Ok(forecast.current_weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forecast_response() {
        let body = r#"{
            "latitude": 35.7,
            "longitude": 139.75,
            "current_weather": {
                "temperature": 21.4,
                "windspeed": 11.6,
                "winddirection": 170,
                "weathercode": 2,
                "time": "2024-05-01T09:00"
            }
        }"#;

        let forecast: ForecastResponse = serde_json::from_str(body).unwrap();
        assert!((forecast.current_weather.temperature - 21.4).abs() < 1e-9);
        assert!((forecast.current_weather.windspeed - 11.6).abs() < 1e-9);
    }
}
