//! Configuration for the geocoding and forecast data sources.

use std::env;

/// Endpoints and client settings for the two weather data sources
#[derive(Clone)]
pub struct WeatherSourcesConfig {
    /// Nominatim-compatible geocoding endpoint
    pub geocoding_base_url: String,
    /// Open-Meteo-compatible forecast endpoint
    pub forecast_base_url: String,
    /// Identifying User-Agent, mandatory per the Nominatim usage policy
    pub user_agent: String,
    /// Connect/read timeout applied to outbound calls
    pub timeout_secs: u64,
}

impl Default for WeatherSourcesConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: "https://nominatim.openstreetmap.org".to_string(),
            forecast_base_url: "https://api.open-meteo.com".to_string(),
            user_agent: "weather-agent-api/0.1".to_string(),
            timeout_secs: 10,
        }
    }
}

impl WeatherSourcesConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let geocoding_base_url =
            env::var("GEOCODING_BASE_URL").unwrap_or(defaults.geocoding_base_url);
        let forecast_base_url =
            env::var("FORECAST_BASE_URL").unwrap_or(defaults.forecast_base_url);
        let user_agent = env::var("WEATHER_USER_AGENT").unwrap_or(defaults.user_agent);

        let timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        Self {
            geocoding_base_url,
            forecast_base_url,
            user_agent,
            timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WeatherSourcesConfig::default();
        assert_eq!(config.geocoding_base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(!config.user_agent.is_empty());
    }
}
