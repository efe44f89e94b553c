use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Base thresholds, always defined in Celsius.
const FREEZING_CELSIUS: f64 = 5.0;
const COLD_CELSIUS: f64 = 10.0;
const COOL_CELSIUS: f64 = 15.0;
const MILD_CELSIUS: f64 = 20.0;

/// Minimum swing (in Celsius) considered a significant temperature change.
const CHANGE_CELSIUS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Wire value expected by the forecast service.
    pub fn api_name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: celsius/c, fahrenheit/f."
            )),
        }
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert a temperature *difference* to Fahrenheit. Deltas get no +32 offset.
pub fn delta_to_fahrenheit(delta: f64) -> f64 {
    delta * 9.0 / 5.0
}

/// Temperature band for the current conditions, coldest first.
///
/// The advisory phrase and the renderer's color both key off this enum, so
/// classification and presentation cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TempBand {
    Freezing,
    Cold,
    Cool,
    Mild,
    Hot,
}

impl TempBand {
    pub fn advice(&self) -> &'static str {
        match self {
            TempBand::Freezing => "Freezing! Bundle up",
            TempBand::Cold => "Proper jacket weather, maybe gloves",
            TempBand::Cool => "Classic hoodie/light jacket zone",
            TempBand::Mild => "Good weather, maybe just a light layer",
            TempBand::Hot => "T-shirt weather!",
        }
    }
}

/// Classification boundaries in the active unit, ascending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub freezing: f64,
    pub cold: f64,
    pub cool: f64,
    pub mild: f64,
    pub change: f64,
}

impl Thresholds {
    pub fn for_unit(unit: TemperatureUnit) -> Self {
        match unit {
            TemperatureUnit::Celsius => Self {
                freezing: FREEZING_CELSIUS,
                cold: COLD_CELSIUS,
                cool: COOL_CELSIUS,
                mild: MILD_CELSIUS,
                change: CHANGE_CELSIUS,
            },
            TemperatureUnit::Fahrenheit => Self {
                freezing: celsius_to_fahrenheit(FREEZING_CELSIUS),
                cold: celsius_to_fahrenheit(COLD_CELSIUS),
                cool: celsius_to_fahrenheit(COOL_CELSIUS),
                mild: celsius_to_fahrenheit(MILD_CELSIUS),
                change: delta_to_fahrenheit(CHANGE_CELSIUS),
            },
        }
    }

    /// Upper bounds paired with their bands, ascending. Anything above the
    /// last bound is `Hot`.
    pub fn bands(&self) -> [(f64, TempBand); 4] {
        [
            (self.freezing, TempBand::Freezing),
            (self.cold, TempBand::Cold),
            (self.cool, TempBand::Cool),
            (self.mild, TempBand::Mild),
        ]
    }

    /// Pick the lowest band whose upper bound is at or above `temp`.
    pub fn classify(&self, temp: f64) -> TempBand {
        for (bound, band) in self.bands() {
            if temp <= bound {
                return band;
            }
        }
        TempBand::Hot
    }
}
