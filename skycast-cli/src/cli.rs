use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{Confirm, CustomType, Text};
use skycast_core::{
    Config, ForecastResolver, HomeLocation, Location, LocationQuery, WeatherError, render,
};

use crate::display;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the weather card for a city, or for the configured home location.
    Show {
        /// City name; when omitted, the saved home location is used.
        city: Option<String>,

        /// Print the card descriptor as JSON instead of the rendered card.
        #[arg(long)]
        json: bool,
    },

    /// Interactively set the home location used when no city is given.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Show { city, json } => show(city, json).await,
            Command::Configure => configure().await,
        }
    }
}

/// One resolve → fetch → render chain. Any failure aborts it; nothing is
/// written to the terminal on error beyond the final message.
async fn show(city: Option<String>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let resolver = ForecastResolver::open_meteo(&config)?;

    let query = match city {
        Some(name) => LocationQuery::City(name),
        None => LocationQuery::Device,
    };
    tracing::debug!(?query, "starting forecast chain");

    let record = resolver.resolve(&query).await?;
    let card = render(&record);

    if json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        display::print_card(&card);
    }

    Ok(())
}

async fn configure() -> Result<()> {
    let mut config = Config::load()?;
    let resolver = ForecastResolver::open_meteo(&config)?;

    let city = Text::new("Home city:")
        .with_help_message("Used when `skycast show` is run without a city")
        .prompt()?;

    let location = match resolver
        .resolve_location(&LocationQuery::City(city.trim().to_string()))
        .await
    {
        Ok(location) => location,
        Err(WeatherError::CityNotFound(name)) => {
            println!("No match found for '{name}'; enter coordinates instead.");
            prompt_coordinates(&city)?
        }
        Err(err) => return Err(err.into()),
    };

    let shown = location.name.clone().unwrap_or_else(|| city.clone());
    let save = Confirm::new(&format!(
        "Save {} ({:.4}, {:.4}) as your home location?",
        shown, location.latitude, location.longitude
    ))
    .with_default(true)
    .prompt()?;

    if !save {
        println!("Nothing saved.");
        return Ok(());
    }

    config.set_home(HomeLocation {
        name: location.name,
        latitude: location.latitude,
        longitude: location.longitude,
    });
    config.save()?;
    println!("Home location saved to {}", Config::config_file_path()?.display());

    Ok(())
}

fn prompt_coordinates(city: &str) -> Result<Location> {
    let latitude = CustomType::<f64>::new("Latitude:")
        .with_error_message("Enter a decimal number like 50.45")
        .prompt()?;
    let longitude = CustomType::<f64>::new("Longitude:")
        .with_error_message("Enter a decimal number like 30.52")
        .prompt()?;

    Ok(Location {
        latitude,
        longitude,
        name: Some(city.trim().to_string()),
    })
}
