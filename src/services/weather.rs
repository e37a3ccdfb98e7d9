//! Weather fetch orchestration: geocode a city name, then fetch conditions.

use crate::config::WeatherSourcesConfig;
use crate::models::{WeatherLookup, WeatherSnapshot};
use crate::services::forecast::ForecastClient;
use crate::services::geocoding::GeocodingClient;
use tracing::{error, info};

/// Composes the geocoding and forecast clients into a single
/// "fetch weather for city" operation.
///
/// The operation never fails at the type level: every failure mode collapses
/// into a `WeatherLookup` variant so the chat turn can proceed and the
/// synthesis prompt always has something to say about the lookup.
#[derive(Clone)]
pub struct WeatherFetcher {
    geocoder: GeocodingClient,
    forecast: ForecastClient,
}

impl WeatherFetcher {
    pub fn new(config: &WeatherSourcesConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            geocoder: GeocodingClient::new(config)?,
            forecast: ForecastClient::new(config)?,
        })
    }

    /// Look up current weather for a free-text city name.
    pub async fn lookup(&self, city: &str) -> WeatherLookup {
        let place = match self.geocoder.resolve(city).await {
            Ok(Some(place)) => place,
            Ok(None) => {
                info!(city = %city, "Geocoder found no match");
                return WeatherLookup::NotFound {
                    city: city.to_string(),
                };
            }
            Err(e) => {
                error!(city = %city, error = %e, "Geocoding call failed");
                return WeatherLookup::Failed;
            }
        };

        match self.forecast.current_conditions(place.lat, place.lon).await {
            Ok(conditions) => WeatherLookup::Found(WeatherSnapshot {
                location: place.display_name,
                temp: format!("{}°C", conditions.temperature),
                wind: format!("{} km/h", conditions.windspeed),
            }),
            Err(e) => {
                error!(city = %city, error = %e, "Forecast call failed");
                WeatherLookup::Failed
            }
        }
    }
}
