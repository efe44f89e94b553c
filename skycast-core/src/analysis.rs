//! Weather analysis: pure functions from a forecast series to a structured
//! report. No I/O here; everything is unit-testable.

use crate::{
    model::ForecastSeries,
    units::{TempBand, Thresholds},
};

/// Rain probability (percent) above which we call for an umbrella.
pub const HIGH_RAIN_CHANCE: u8 = 60;
/// Rain probability (percent) above which a jacket is worth keeping handy.
pub const MODERATE_RAIN_CHANCE: u8 = 30;

/// How the temperature moves over the forecast window, relative to now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trend {
    /// Both a significant rise and a significant drop ahead.
    Swing,
    /// Significant rise only; `delta` is the change threshold being crossed.
    Rise { delta: f64 },
    /// Significant drop only.
    Drop { delta: f64 },
    /// Neither direction moves by the change threshold.
    Steady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainLevel {
    High,
    Moderate,
    Dry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainAdvisory {
    pub level: RainLevel,
    /// Hours from now at which the maximum probability first occurs.
    pub peak_hour: usize,
    pub peak_chance: u8,
}

/// Everything the renderer needs, derived once and consumed immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub current_temp: f64,
    pub band: TempBand,
    pub trend: Trend,
    pub rain: RainAdvisory,
    /// The requested forecast window, echoed into the trend/rain sentences.
    pub hours: u32,
}

/// Analyze a forecast series against thresholds in the same unit.
pub fn analyze(series: &ForecastSeries, thresholds: &Thresholds, hours: u32) -> Report {
    let current_temp = series.current().temperature;
    let band = thresholds.classify(current_temp);

    let mut min = current_temp;
    let mut max = current_temp;
    for sample in series.samples() {
        if sample.temperature < min {
            min = sample.temperature;
        }
        if sample.temperature > max {
            max = sample.temperature;
        }
    }

    let rise = max - current_temp >= thresholds.change;
    let drop = current_temp - min >= thresholds.change;
    let trend = match (rise, drop) {
        (true, true) => Trend::Swing,
        (true, false) => Trend::Rise { delta: thresholds.change },
        (false, true) => Trend::Drop { delta: thresholds.change },
        (false, false) => Trend::Steady,
    };

    // First occurrence wins on ties: only a strictly greater value moves the peak.
    let mut peak_chance = 0u8;
    let mut peak_hour = 0usize;
    for (hour, sample) in series.samples().iter().enumerate() {
        if sample.rain_chance > peak_chance {
            peak_chance = sample.rain_chance;
            peak_hour = hour;
        }
    }

    let level = if peak_chance > HIGH_RAIN_CHANCE {
        RainLevel::High
    } else if peak_chance > MODERATE_RAIN_CHANCE {
        RainLevel::Moderate
    } else {
        RainLevel::Dry
    };

    Report {
        current_temp,
        band,
        trend,
        rain: RainAdvisory { level, peak_hour, peak_chance },
        hours,
    }
}
