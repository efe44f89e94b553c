//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Preference configuration handling
//! - Location resolution (IP lookup, with a geocoding fallback)
//! - The hourly forecast provider abstraction
//! - Weather analysis: temperature bands, trend detection, rain advisory
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

use std::time::Duration;

pub mod analysis;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod provider;
pub mod units;

pub use analysis::{RainAdvisory, RainLevel, Report, Trend, analyze};
pub use config::Config;
pub use error::{ForecastError, LocationError};
pub use location::{Geocoder, IpLocator};
pub use model::{ForecastSeries, HourlySample, Location};
pub use provider::{ForecastProvider, open_meteo::OpenMeteoProvider};
pub use units::{TempBand, TemperatureUnit, Thresholds};

/// Timeout applied to every outbound request in the pipeline.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Build the HTTP client shared by all collaborators. Constructed once per
/// run and cloned into each of them (clones share the connection pool).
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}
