//! Open-Meteo weather client.
//!
//! Two chained GET requests per lookup: geocoding (`name`, `count=1`) and
//! forecast (`latitude`, `longitude`, `current_weather=true`). No retry,
//! no timeout override, no caching between calls; a repeated city is
//! re-geocoded every time.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::config::WeatherConfig;

use super::error::WeatherError;

/// Outcome of a weather lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherLookup {
    /// The upstream `current_weather` object, verbatim.
    Current(Value),

    /// The geocoding endpoint returned no match for the city. A normal
    /// outcome, not an error.
    CityNotFound,
}

/// Shape of the geocoding response we consume. Everything else in the
/// payload is ignored.
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingMatch>,
}

#[derive(Debug, Deserialize)]
struct GeocodingMatch {
    latitude: f64,
    longitude: f64,
}

/// Shape of the forecast response we consume.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<Value>,
}

/// Client for the Open-Meteo geocoding and forecast endpoints.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    /// Build a client with a reusable connection pool and the transport's
    /// default timeouts.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("weather-notes-server/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// Look up current weather for a city name.
    ///
    /// Network and decoding failures propagate as [`WeatherError`]; the
    /// caller decides how to surface them.
    pub async fn lookup(&self, city: &str) -> Result<WeatherLookup, WeatherError> {
        info!("Resolving city: {}", city);

        let geo: GeocodingResponse = self
            .http
            .get(&self.config.geocoding_url)
            .query(&[("name", city), ("count", "1")])
            .send()
            .await?
            .json()
            .await?;

        let Some(hit) = geo.results.first() else {
            debug!("No geocoding results for '{}'", city);
            return Ok(WeatherLookup::CityNotFound);
        };

        debug!(
            "Geocoded '{}' to ({}, {})",
            city, hit.latitude, hit.longitude
        );

        let forecast: ForecastResponse = self
            .http
            .get(&self.config.forecast_url)
            .query(&[
                ("latitude", hit.latitude.to_string()),
                ("longitude", hit.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        forecast
            .current_weather
            .map(WeatherLookup::Current)
            .ok_or(WeatherError::MissingCurrentWeather)
    }
}
