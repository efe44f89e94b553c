use async_trait::async_trait;
use std::fmt::Debug;

use crate::{TemperatureUnit, error::ForecastError, model::ForecastSeries};

pub mod open_meteo;

pub const MAX_FORECAST_HOURS: u32 = 168;

/// Reject out-of-range durations before any network call is made.
pub fn validate_hours(hours: u32) -> Result<(), ForecastError> {
    if hours == 0 || hours > MAX_FORECAST_HOURS {
        return Err(ForecastError::InvalidDuration(hours));
    }
    Ok(())
}

/// A source of hourly forecasts. One implementation talks to Open-Meteo;
/// tests substitute their own.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Fetch `hours` (1..=168) of hourly forecast for the given coordinates,
    /// with temperatures in `unit`. Index 0 of the result is the current hour.
    async fn hourly(
        &self,
        latitude: f64,
        longitude: f64,
        unit: TemperatureUnit,
        hours: u32,
    ) -> Result<ForecastSeries, ForecastError>;
}
