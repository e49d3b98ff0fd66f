use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    error::WeatherError,
    model::{CurrentWeather, DailySeries, ForecastRecord, HourlySeries, Location},
};

use super::{ForecastProvider, GeocodeProvider};

const GEOCODE_BASE: &str = "https://geocoding-api.open-meteo.com";
const FORECAST_BASE: &str = "https://api.open-meteo.com";

const HOURLY_FIELDS: &str =
    "temperature_2m,apparent_temperature,precipitation,relative_humidity_2m,windspeed_10m,weathercode";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weathercode,precipitation_sum";

/// Wall-clock format of Open-Meteo timestamps under `timezone=auto`.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Keyless Open-Meteo client backing both resolver seams: the geocoding
/// search and the forecast fetch.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    geocode_base: String,
    forecast_base: String,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_base_urls(GEOCODE_BASE, FORECAST_BASE)
    }

    /// Base URLs are injectable so tests can point the client at a mock
    /// server.
    pub fn with_base_urls(
        geocode_base: impl Into<String>,
        forecast_base: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            geocode_base: geocode_base.into(),
            forecast_base: forecast_base.into(),
        })
    }

    async fn geocode(&self, name: &str) -> Result<Location, WeatherError> {
        tracing::debug!(city = name, "geocoding");

        let url = format!("{}/v1/search", self.geocode_base);
        let res = self
            .http
            .get(&url)
            .query(&[("name", name), ("count", "1")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(WeatherError::Status { status, body: truncate_body(&body) });
        }

        let parsed: GeocodeResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::Parse(format!("geocoding response: {e}")))?;

        let first = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::CityNotFound(name.to_string()))?;

        let display_name = match first.country {
            Some(country) => format!("{}, {}", first.name, country),
            None => first.name,
        };

        Ok(Location {
            latitude: first.latitude,
            longitude: first.longitude,
            name: Some(display_name),
        })
    }

    async fn forecast(&self, location: &Location) -> Result<ForecastRecord, WeatherError> {
        tracing::debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            "fetching forecast"
        );

        let url = format!("{}/v1/forecast", self.forecast_base);
        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("current_weather", "true".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(WeatherError::Status { status, body: truncate_body(&body) });
        }

        let parsed: ForecastResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::Parse(format!("forecast response: {e}")))?;

        parsed.into_record()
    }
}

#[async_trait]
impl GeocodeProvider for OpenMeteoClient {
    async fn resolve_city(&self, name: &str) -> Result<Location, WeatherError> {
        self.geocode(name).await
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    async fn fetch_forecast(&self, location: &Location) -> Result<ForecastRecord, WeatherError> {
        self.forecast(location).await
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    latitude: f64,
    longitude: f64,
    name: String,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: OmCurrentWeather,
    hourly: OmHourly,
    daily: OmDaily,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    weathercode: i32,
    time: String,
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    apparent_temperature: Vec<f64>,
    precipitation: Vec<f64>,
    relative_humidity_2m: Vec<f64>,
    windspeed_10m: Vec<f64>,
    weathercode: Vec<i32>,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weathercode: Vec<i32>,
    precipitation_sum: Vec<f64>,
}

impl ForecastResponse {
    /// Convert the wire shape into the domain record, rejecting misaligned
    /// series so the invariant holds for every record leaving this module.
    fn into_record(self) -> Result<ForecastRecord, WeatherError> {
        let hourly = HourlySeries {
            time: self
                .hourly
                .time
                .iter()
                .map(|t| parse_local_time(t))
                .collect::<Result<_, _>>()?,
            temperature: self.hourly.temperature_2m,
            apparent_temperature: self.hourly.apparent_temperature,
            precipitation: self.hourly.precipitation,
            humidity: self.hourly.relative_humidity_2m,
            wind_speed: self.hourly.windspeed_10m,
            weather_code: self.hourly.weathercode,
        };
        if !hourly.is_aligned() {
            return Err(WeatherError::Parse(
                "hourly series lengths do not match".to_string(),
            ));
        }

        let daily = DailySeries {
            time: self
                .daily
                .time
                .iter()
                .map(|d| parse_local_date(d))
                .collect::<Result<_, _>>()?,
            temperature_max: self.daily.temperature_2m_max,
            temperature_min: self.daily.temperature_2m_min,
            precipitation_sum: self.daily.precipitation_sum,
            weather_code: self.daily.weathercode,
        };
        if !daily.is_aligned() {
            return Err(WeatherError::Parse(
                "daily series lengths do not match".to_string(),
            ));
        }

        Ok(ForecastRecord {
            current: CurrentWeather {
                temperature: self.current_weather.temperature,
                weather_code: self.current_weather.weathercode,
                time: parse_local_time(&self.current_weather.time)?,
            },
            hourly,
            daily,
        })
    }
}

fn parse_local_time(raw: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(raw, TIME_FORMAT)
        .map_err(|e| WeatherError::Parse(format!("timestamp '{raw}': {e}")))
}

fn parse_local_date(raw: &str) -> Result<NaiveDate, WeatherError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| WeatherError::Parse(format!("date '{raw}': {e}")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
