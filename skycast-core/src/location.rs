//! Location resolution: an IP-based lookup for the automatic path and a
//! free-text geocoder for the manual fallback.

use reqwest::Client;
use serde::Deserialize;

use crate::{error::LocationError, model::Location};

pub const IP_LOOKUP_URL: &str = "https://ipinfo.io/json";
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Split a combined `"lat,lon"` field into two floats.
///
/// Kept as a standalone function: this is the one fragile dependency on the
/// IP service's payload format, so format breakage surfaces here with a
/// dedicated error instead of leaking into callers.
pub fn parse_lat_lon(raw: &str) -> Result<(f64, f64), LocationError> {
    let mut parts = raw.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(LocationError::MalformedCoordinates(raw.to_string()));
    };

    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| LocationError::MalformedCoordinates(raw.to_string()))?;
    let lon = lon
        .trim()
        .parse::<f64>()
        .map_err(|_| LocationError::MalformedCoordinates(raw.to_string()))?;

    Ok((lat, lon))
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    #[serde(default)]
    city: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    loc: String,
}

/// Automatic path: ask an IP-geolocation service where this machine is.
#[derive(Debug, Clone)]
pub struct IpLocator {
    http: Client,
    endpoint: String,
}

impl IpLocator {
    pub fn new(http: Client) -> Self {
        Self::with_endpoint(http, IP_LOOKUP_URL)
    }

    pub fn with_endpoint(http: Client, endpoint: impl Into<String>) -> Self {
        Self { http, endpoint: endpoint.into() }
    }

    pub async fn locate(&self) -> Result<Location, LocationError> {
        let res = self.http.get(&self.endpoint).send().await.map_err(|e| {
            LocationError::ServiceUnavailable(format!("IP lookup request failed: {e}"))
        })?;

        let status = res.status();
        if !status.is_success() {
            return Err(LocationError::ServiceUnavailable(format!(
                "IP lookup returned status {status}"
            )));
        }

        let body: IpLookupResponse = res.json().await.map_err(|e| {
            LocationError::ServiceUnavailable(format!("invalid IP lookup payload: {e}"))
        })?;

        let (latitude, longitude) = parse_lat_lon(&body.loc)?;
        tracing::debug!(city = %body.city, latitude, longitude, "resolved location from IP");

        Ok(Location { city: body.city, region: body.region, latitude, longitude })
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingCandidate {
    latitude: f64,
    longitude: f64,
    admin1: Option<String>,
}

/// Manual fallback path: resolve a free-text city name to coordinates.
#[derive(Debug, Clone)]
pub struct Geocoder {
    http: Client,
    endpoint: String,
}

impl Geocoder {
    pub fn new(http: Client) -> Self {
        Self::with_endpoint(http, GEOCODING_URL)
    }

    pub fn with_endpoint(http: Client, endpoint: impl Into<String>) -> Self {
        Self { http, endpoint: endpoint.into() }
    }

    /// Resolve `city` to a [`Location`].
    ///
    /// The returned `city` field is the caller's literal input, not the
    /// geocoder's canonical name; region and coordinates come from the
    /// first candidate.
    pub async fn resolve(&self, city: &str) -> Result<Location, LocationError> {
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("name", city), ("count", "5"), ("language", "en"), ("format", "json")])
            .send()
            .await
            .map_err(|e| {
                LocationError::ServiceUnavailable(format!("geocoding request failed: {e}"))
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(LocationError::ServiceUnavailable(format!(
                "geocoding service returned status {status}"
            )));
        }

        let body: GeocodingResponse = res.json().await.map_err(|e| {
            LocationError::ServiceUnavailable(format!("invalid geocoding payload: {e}"))
        })?;

        let first = body
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| LocationError::NoResultsFound(city.to_string()))?;

        tracing::debug!(
            city,
            latitude = first.latitude,
            longitude = first.longitude,
            "geocoded city name"
        );

        Ok(Location {
            city: city.to_string(),
            region: first.admin1.unwrap_or_default(),
            latitude: first.latitude,
            longitude: first.longitude,
        })
    }
}
