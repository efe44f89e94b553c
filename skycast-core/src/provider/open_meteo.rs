//! Open-Meteo hourly forecast provider.
//!
//! Requests parallel per-hour temperature and precipitation-probability
//! series, with the timezone auto-detected from the coordinates.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    TemperatureUnit,
    error::ForecastError,
    model::{ForecastSeries, HourlySample},
    provider::{ForecastProvider, validate_hours},
};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Time format used by Open-Meteo's hourly series, e.g. `2026-08-27T15:00`.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    endpoint: String,
}

impl OpenMeteoProvider {
    pub fn new(http: Client) -> Self {
        Self::with_endpoint(http, FORECAST_URL)
    }

    pub fn with_endpoint(http: Client, endpoint: impl Into<String>) -> Self {
        Self { http, endpoint: endpoint.into() }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlyData,
}

#[derive(Debug, Deserialize)]
struct HourlyData {
    #[serde(default)]
    time: Vec<String>,
    #[serde(rename = "temperature_2m", default)]
    temperature: Vec<f64>,
    #[serde(rename = "precipitation_probability", default)]
    rain_chance: Vec<i64>,
}

impl HourlyData {
    fn into_series(self) -> Option<ForecastSeries> {
        let mut samples = Vec::with_capacity(self.temperature.len());

        for (i, &temperature) in self.temperature.iter().enumerate() {
            // A missing probability for an hour counts as no rain.
            let rain_chance =
                self.rain_chance.get(i).copied().unwrap_or(0).clamp(0, 100) as u8;
            let time = self
                .time
                .get(i)
                .and_then(|t| NaiveDateTime::parse_from_str(t, TIME_FORMAT).ok());

            samples.push(HourlySample { time, temperature, rain_chance });
        }

        ForecastSeries::new(samples)
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn hourly(
        &self,
        latitude: f64,
        longitude: f64,
        unit: TemperatureUnit,
        hours: u32,
    ) -> Result<ForecastSeries, ForecastError> {
        validate_hours(hours)?;

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("hourly", "temperature_2m,precipitation_probability".to_string()),
                ("forecast_hours", hours.to_string()),
                ("timezone", "auto".to_string()),
                ("temperature_unit", unit.api_name().to_string()),
            ])
            .send()
            .await
            .map_err(|e| ForecastError::Unavailable(format!("forecast request failed: {e}")))?;

        let status = res.status();
        if !status.is_success() {
            return Err(ForecastError::Unavailable(format!(
                "forecast service returned status {status}"
            )));
        }

        let parsed: ForecastResponse = res.json().await.map_err(|e| {
            ForecastError::Unavailable(format!("invalid forecast payload: {e}"))
        })?;

        tracing::debug!(latitude, longitude, hours, unit = %unit, "fetched hourly forecast");

        parsed.hourly.into_series().ok_or_else(|| {
            ForecastError::Unavailable("response contained an empty temperature series".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> OpenMeteoProvider {
        OpenMeteoProvider::with_endpoint(Client::new(), format!("{}/v1/forecast", server.uri()))
    }

    #[tokio::test]
    async fn fetches_and_zips_the_hourly_series() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("temperature_unit", "celsius"))
            .and(query_param("forecast_hours", "4"))
            .and(query_param("timezone", "auto"))
            .and(query_param("hourly", "temperature_2m,precipitation_probability"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "hourly": {
                    "time": ["2026-08-27T15:00", "2026-08-27T16:00", "2026-08-27T17:00", "2026-08-27T18:00"],
                    "temperature_2m": [18.0, 19.0, 24.0, 25.0],
                    "precipitation_probability": [10, 70, 20, 5]
                }
            })))
            .mount(&server)
            .await;

        let series = provider(&server)
            .hourly(47.6, -122.3, TemperatureUnit::Celsius, 4)
            .await
            .unwrap();

        assert_eq!(series.len(), 4);
        assert_eq!(series.current().temperature, 18.0);
        assert_eq!(series.current().rain_chance, 10);
        assert_eq!(series.samples()[1].rain_chance, 70);
        assert!(series.current().time.is_some());
    }

    #[tokio::test]
    async fn invalid_duration_fails_without_a_network_call() {
        let server = MockServer::start().await;
        // No mock mounted: any request would come back as Unavailable.
        let provider = provider(&server);

        for hours in [0, 200] {
            let err = provider
                .hourly(47.6, -122.3, TemperatureUnit::Fahrenheit, hours)
                .await
                .unwrap_err();
            assert!(matches!(err, ForecastError::InvalidDuration(h) if h == hours));
        }
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn max_duration_is_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("forecast_hours", "168"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "hourly": {
                    "time": ["2026-08-27T15:00"],
                    "temperature_2m": [20.0],
                    "precipitation_probability": [0]
                }
            })))
            .mount(&server)
            .await;

        let series = provider(&server)
            .hourly(47.6, -122.3, TemperatureUnit::Fahrenheit, 168)
            .await
            .unwrap();
        assert_eq!(series.len(), 1);
    }

    #[tokio::test]
    async fn empty_temperature_series_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "hourly": { "time": [], "temperature_2m": [], "precipitation_probability": [] }
            })))
            .mount(&server)
            .await;

        let err = provider(&server)
            .hourly(47.6, -122.3, TemperatureUnit::Celsius, 4)
            .await
            .unwrap_err();
        assert!(matches!(err, ForecastError::Unavailable(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = provider(&server)
            .hourly(47.6, -122.3, TemperatureUnit::Celsius, 4)
            .await
            .unwrap_err();
        assert!(matches!(err, ForecastError::Unavailable(_)));
    }

    #[test]
    fn missing_probabilities_default_to_zero_and_clamp() {
        let hourly = HourlyData {
            time: vec![],
            temperature: vec![10.0, 11.0, 12.0],
            rain_chance: vec![120, -5],
        };
        let series = hourly.into_series().unwrap();
        let chances: Vec<u8> = series.samples().iter().map(|s| s.rain_chance).collect();
        assert_eq!(chances, vec![100, 0, 0]);
    }
}
