//! Weather-specific error types.

use thiserror::Error;

/// Errors that can occur during a weather lookup.
///
/// These are the unexpected failures; a city that does not resolve is a
/// normal outcome and is modeled as
/// [`WeatherLookup::CityNotFound`](super::WeatherLookup::CityNotFound)
/// instead.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be built or a request failed.
    #[error("Weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The forecast response did not contain a `current_weather` block.
    #[error("Forecast response is missing the current_weather block")]
    MissingCurrentWeather,
}
