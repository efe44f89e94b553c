use anyhow::Context;
use clap::Parser;
use inquire::Text;
use std::io::IsTerminal;

use skycast_core::{
    Config, ForecastProvider, Geocoder, IpLocator, Location, OpenMeteoProvider, TemperatureUnit,
    Thresholds, analyze, provider::validate_hours,
};

use crate::render::{self, ColorMode};

const DEFAULT_HOURS: u32 = 4;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Hourly weather report for wherever you are")]
pub struct Cli {
    /// Temperature unit: "celsius"/"c" or "fahrenheit"/"f".
    #[arg(short, long)]
    pub unit: Option<TemperatureUnit>,

    /// Number of hours to forecast (1-168).
    #[arg(short = 'd', long)]
    pub hours: Option<u32>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Persist the chosen unit and hours as future defaults.
    #[arg(long)]
    pub save_defaults: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load().context("Failed to load configuration")?;

        // Flag beats config file beats built-in default.
        let unit = self.unit.or(config.unit).unwrap_or_default();
        let hours = self.hours.or(config.hours).unwrap_or(DEFAULT_HOURS);

        // Checked up front so a bad --hours never triggers a network call.
        validate_hours(hours)?;

        if self.save_defaults {
            let prefs = Config { unit: Some(unit), hours: Some(hours) };
            prefs.save().context("Failed to save default preferences")?;
        }

        let http = skycast_core::http_client().context("Failed to build HTTP client")?;

        let location = resolve_location(&http).await?;

        let provider = OpenMeteoProvider::new(http);
        let series = provider
            .hourly(location.latitude, location.longitude, unit, hours)
            .await
            .context("Failed to fetch the hourly forecast")?;

        let thresholds = Thresholds::for_unit(unit);
        let report = analyze(&series, &thresholds, hours);

        let mode = if self.no_color || !std::io::stdout().is_terminal() {
            ColorMode::Plain
        } else {
            ColorMode::Ansi
        };
        print!("{}", render::render(&location, &report, unit, mode));

        Ok(())
    }
}

/// Try the automatic IP-based path first; fall back to asking for a city
/// name. Failure on the fallback too is terminal for the run.
async fn resolve_location(http: &reqwest::Client) -> anyhow::Result<Location> {
    let locator = IpLocator::new(http.clone());
    match locator.locate().await {
        Ok(location) => Ok(location),
        Err(err) => {
            eprintln!("Could not determine your location automatically: {err}");
            eprintln!("Let's try this manually...");

            let city = Text::new("City name:")
                .with_help_message("e.g. 'Seattle', 'Boston', 'Tokyo'")
                .prompt()
                .context("Failed to read city name")?;

            let geocoder = Geocoder::new(http.clone());
            geocoder
                .resolve(city.trim())
                .await
                .context("Unable to determine location. Please try again later")
        }
    }
}
