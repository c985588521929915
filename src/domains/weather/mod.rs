//! Weather domain module.
//!
//! A thin client for the Open-Meteo public APIs: a geocoding call resolves
//! a city name to coordinates, a forecast call fetches current weather for
//! those coordinates. The upstream `current_weather` object is passed
//! through verbatim; this crate defines no weather schema of its own.

mod client;
mod error;

pub use client::{WeatherClient, WeatherLookup};
pub use error::WeatherError;
