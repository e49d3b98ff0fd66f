use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Geographic point produced by geocoding or by a location provider.
///
/// Ephemeral: resolved once per interaction and handed straight to the
/// forecast fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable place name, when the source knows one.
    pub name: Option<String>,
}

/// The `current_weather` block of a forecast.
///
/// `time` is local wall-clock at the forecast location (the API resolves the
/// timezone), and is the reference instant for every nearest-hour lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weather_code: i32,
    pub time: NaiveDateTime,
}

/// Hourly forecast series, index-aligned: entry `i` of every vector describes
/// the same hour `time[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<NaiveDateTime>,
    pub temperature: Vec<f64>,
    pub apparent_temperature: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub humidity: Vec<f64>,
    pub wind_speed: Vec<f64>,
    pub weather_code: Vec<i32>,
}

impl HourlySeries {
    /// All parallel vectors share the length of `time`.
    pub fn is_aligned(&self) -> bool {
        let n = self.time.len();
        self.temperature.len() == n
            && self.apparent_temperature.len() == n
            && self.precipitation.len() == n
            && self.humidity.len() == n
            && self.wind_speed.len() == n
            && self.weather_code.len() == n
    }
}

/// Daily forecast series, index-aligned like [`HourlySeries`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    pub temperature_max: Vec<f64>,
    pub temperature_min: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    pub weather_code: Vec<i32>,
}

impl DailySeries {
    pub fn is_aligned(&self) -> bool {
        let n = self.time.len();
        self.temperature_max.len() == n
            && self.temperature_min.len() == n
            && self.precipitation_sum.len() == n
            && self.weather_code.len() == n
    }
}

/// Combined current/hourly/daily structure returned by one forecast fetch.
///
/// Immutable once built; discarded after a single render pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub current: CurrentWeather,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}
