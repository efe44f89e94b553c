use thiserror::Error;

/// Failures while resolving the user's location.
///
/// The automatic (IP-based) path is recoverable: the caller may fall back
/// to asking for a city name. A failure on the manual path too is terminal.
#[derive(Debug, Error)]
pub enum LocationError {
    /// Transport failure, non-success status, or an unreadable payload.
    #[error("location service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The combined "lat,lon" field did not yield two parsable numbers.
    #[error("could not parse coordinates from {0:?}: expected \"lat,lon\"")]
    MalformedCoordinates(String),

    /// The geocoder returned an empty candidate list for the given city.
    #[error("no results found for city: {0}")]
    NoResultsFound(String),
}

/// Failures while fetching the hourly forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Rejected before any network call is made.
    #[error("forecast duration must be between 1 and 168 hours, got {0}")]
    InvalidDuration(u32),

    /// Transport failure, malformed body, or an empty temperature series.
    #[error("forecast unavailable: {0}")]
    Unavailable(String),
}
