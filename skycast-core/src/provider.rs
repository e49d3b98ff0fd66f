use crate::{
    config::Config,
    error::{LocationError, WeatherError},
    model::{ForecastRecord, Location},
    provider::open_meteo::OpenMeteoClient,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Resolves a free-text city name to coordinates.
#[async_trait]
pub trait GeocodeProvider: Send + Sync + Debug {
    async fn resolve_city(&self, name: &str) -> Result<Location, WeatherError>;
}

/// Fetches the combined current/hourly/daily forecast for a location.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(&self, location: &Location) -> Result<ForecastRecord, WeatherError>;
}

/// Device-location capability. Implementations may fail with
/// [`LocationError::PermissionDenied`] or [`LocationError::Unavailable`].
#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    async fn locate(&self) -> Result<Location, LocationError>;
}

/// Where a forecast interaction starts from.
#[derive(Debug, Clone)]
pub enum LocationQuery {
    /// Free-text city name, geocoded before the fetch.
    City(String),
    /// Whatever the location provider reports.
    Device,
}

/// Runs the resolve → fetch chain behind the three provider seams.
///
/// One call per interaction; a failure anywhere aborts the chain without a
/// retry.
#[derive(Debug)]
pub struct ForecastResolver {
    geocoder: Box<dyn GeocodeProvider>,
    forecasts: Box<dyn ForecastProvider>,
    locator: Box<dyn LocationProvider>,
}

impl ForecastResolver {
    pub fn new(
        geocoder: Box<dyn GeocodeProvider>,
        forecasts: Box<dyn ForecastProvider>,
        locator: Box<dyn LocationProvider>,
    ) -> Self {
        Self { geocoder, forecasts, locator }
    }

    /// Production wiring: Open-Meteo for geocoding and forecasts, the saved
    /// home location as the device-location capability.
    pub fn open_meteo(config: &Config) -> Result<Self, WeatherError> {
        let client = OpenMeteoClient::new()?;
        Ok(Self::new(
            Box::new(client.clone()),
            Box::new(client),
            Box::new(ConfigLocationProvider::new(config)),
        ))
    }

    /// Resolve the query to coordinates without fetching anything else.
    pub async fn resolve_location(&self, query: &LocationQuery) -> Result<Location, WeatherError> {
        let location = match query {
            LocationQuery::City(name) => self.geocoder.resolve_city(name).await?,
            LocationQuery::Device => self.locator.locate().await?,
        };

        tracing::debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            name = location.name.as_deref(),
            "resolved location"
        );

        Ok(location)
    }

    /// Resolve the query to a location, then fetch its forecast.
    pub async fn resolve(&self, query: &LocationQuery) -> Result<ForecastRecord, WeatherError> {
        let location = self.resolve_location(query).await?;
        self.forecasts.fetch_forecast(&location).await
    }
}

/// CLI stand-in for browser geolocation: reports the home location saved by
/// `skycast configure`, or [`LocationError::Unavailable`] when none is set.
#[derive(Debug)]
pub struct ConfigLocationProvider {
    home: Option<Location>,
}

impl ConfigLocationProvider {
    pub fn new(config: &Config) -> Self {
        Self { home: config.home_location() }
    }
}

#[async_trait]
impl LocationProvider for ConfigLocationProvider {
    async fn locate(&self) -> Result<Location, LocationError> {
        self.home.clone().ok_or(LocationError::Unavailable)
    }
}
