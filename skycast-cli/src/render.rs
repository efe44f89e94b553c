//! Turn an analysis report into the printed weather summary.
//!
//! Color is presentation only: the plain renderer emits byte-identical
//! sentences minus the escape codes.

use crossterm::style::{Attribute, Color, Stylize};

use skycast_core::{Location, RainAdvisory, RainLevel, Report, TempBand, TemperatureUnit, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Plain,
    Ansi,
}

/// Fixed band-to-color mapping, cold to hot. Keyed off the same enum the
/// analyzer classifies with, so the two can never disagree.
fn band_style(band: TempBand) -> (Color, bool) {
    match band {
        TempBand::Freezing => (Color::Blue, true),
        TempBand::Cold => (Color::Cyan, false),
        TempBand::Cool => (Color::Green, true),
        TempBand::Mild => (Color::Yellow, false),
        TempBand::Hot => (Color::Red, true),
    }
}

fn paint(text: &str, band: TempBand, mode: ColorMode) -> String {
    match mode {
        ColorMode::Plain => text.to_string(),
        ColorMode::Ansi => {
            let (color, bold) = band_style(band);
            let styled = text.with(color);
            let styled = if bold { styled.attribute(Attribute::Bold) } else { styled };
            styled.to_string()
        }
    }
}

pub fn render(
    location: &Location,
    report: &Report,
    unit: TemperatureUnit,
    mode: ColorMode,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Here's the current weather condition report for {}, {}:\n",
        location.city, location.region
    ));
    out.push_str(&format!("{}\n", paint(report.band.advice(), report.band, mode)));
    out.push_str(&format!("{}\n", trend_line(report, unit)));

    let temp = format!("{:.1}{}", report.current_temp, unit.symbol());
    out.push_str(&format!("Current temperature: {}\n", paint(&temp, report.band, mode)));

    out.push_str(&format!("{}\n", rain_line(&report.rain)));

    out
}

fn trend_line(report: &Report, unit: TemperatureUnit) -> String {
    let hours = report.hours;
    match report.trend {
        Trend::Swing => format!("temp will change significantly in next {hours} hours"),
        Trend::Drop { delta } => {
            format!("temp will drop {delta:.0}{} in the next {hours} hours", unit.symbol())
        }
        Trend::Rise { delta } => {
            format!("it'll get {delta:.0}{} hotter in the next {hours} hours", unit.symbol())
        }
        Trend::Steady => format!("temp will be around the same in the next {hours} hours"),
    }
}

fn rain_line(rain: &RainAdvisory) -> String {
    match rain.level {
        RainLevel::High if rain.peak_hour == 0 => {
            "Definitely bring an umbrella! Very likely to rain right now".to_string()
        }
        RainLevel::High => format!(
            "Definitely bring an umbrella! Very likely to rain in {} hours",
            rain.peak_hour
        ),
        RainLevel::Moderate if rain.peak_hour == 0 => {
            "Might rain now - maybe keep a jacket handy.".to_string()
        }
        RainLevel::Moderate => {
            format!("Might rain in {} hours - maybe keep a jacket handy.", rain.peak_hour)
        }
        RainLevel::Dry => "No rain expected.".to_string(),
    }
}
