use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A resolved place. Built once per run, by exactly one of the two
/// resolution strategies, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One hour of forecast data.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    /// Local wall-clock time reported by the forecast service, when it
    /// could be parsed.
    pub time: Option<NaiveDateTime>,
    pub temperature: f64,
    /// Precipitation probability in percent, 0..=100.
    pub rain_chance: u8,
}

/// Ordered hourly samples. Index 0 is "now", index n is n hours out.
///
/// Guaranteed non-empty: the constructor rejects an empty series, so
/// `current()` is always valid.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    samples: Vec<HourlySample>,
}

impl ForecastSeries {
    pub fn new(samples: Vec<HourlySample>) -> Option<Self> {
        if samples.is_empty() { None } else { Some(Self { samples }) }
    }

    /// The sample for the current hour.
    pub fn current(&self) -> &HourlySample {
        &self.samples[0]
    }

    pub fn samples(&self) -> &[HourlySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
}
