//! Presentation mapper: turns a [`ForecastRecord`] into a [`CardUpdate`]
//! descriptor, leaving the actual display surface to a thin adapter.
//!
//! Everything here is a pure transform. The reference instant for the
//! nearest-hour lookup is the record's own current-weather timestamp, not the
//! device clock, so the card stays correct across timezones.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::classify::{Backdrop, Condition, DayPart};
use crate::model::ForecastRecord;

/// Maximum entries in the hourly strip.
pub const HOURLY_STRIP_LEN: usize = 12;
/// Maximum entries in the weekly strip.
pub const WEEKLY_STRIP_LEN: usize = 7;

/// One tile of the hourly strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyEntry {
    /// 12-hour time label, e.g. "3 PM".
    pub label: String,
    pub icon: &'static str,
    /// Rounded to the nearest integer degree.
    pub temperature: i32,
}

/// One row of the weekly strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyEntry {
    /// Short weekday label, e.g. "Mon".
    pub weekday: String,
    pub icon: &'static str,
    /// Rounded daily maximum.
    pub temperature: i32,
}

/// Everything one render pass writes to the display surface, each field a
/// named sink. Built whole or not at all: a failed fetch never produces a
/// partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardUpdate {
    /// Current temperature, one decimal, degree symbol.
    pub temperature: String,
    pub description: &'static str,
    /// "High: x° Low: y°" from the first daily entry, `-` when absent.
    pub high_low: String,
    pub icon: &'static str,
    pub backdrop: Backdrop,
    pub feels_like: String,
    /// First daily precipitation sum, one decimal, trailing inch mark.
    pub precipitation: String,
    pub humidity: String,
    pub wind: String,
    pub hourly: Vec<HourlyEntry>,
    pub weekly: Vec<DailyEntry>,
}

/// Index of the timestamp closest to `reference`, ties going to the earlier
/// entry. `None` only when `times` is empty.
pub fn nearest_hour_index(times: &[NaiveDateTime], reference: NaiveDateTime) -> Option<usize> {
    times
        .iter()
        .enumerate()
        .min_by_key(|(_, t)| (**t - reference).num_seconds().abs())
        .map(|(index, _)| index)
}

/// Up to [`HOURLY_STRIP_LEN`] consecutive entries starting at the first hourly
/// index whose local hour equals the current local hour. Empty when no hour
/// matches; clipped at the end of the series.
pub fn hourly_strip(record: &ForecastRecord) -> Vec<HourlyEntry> {
    let current_hour = record.current.time.hour();
    let Some(start) = record
        .hourly
        .time
        .iter()
        .position(|t| t.hour() == current_hour)
    else {
        return Vec::new();
    };

    record.hourly.time[start..]
        .iter()
        .take(HOURLY_STRIP_LEN)
        .enumerate()
        .map(|(offset, time)| {
            let index = start + offset;
            let condition = Condition::from_code(record.hourly.weather_code[index]);
            HourlyEntry {
                label: time.format("%-I %p").to_string(),
                icon: condition.icon(DayPart::from_hour(time.hour())),
                temperature: record.hourly.temperature[index].round() as i32,
            }
        })
        .collect()
}

/// Up to [`WEEKLY_STRIP_LEN`] daily entries with day-variant icons.
pub fn weekly_strip(record: &ForecastRecord) -> Vec<DailyEntry> {
    record
        .daily
        .time
        .iter()
        .zip(&record.daily.temperature_max)
        .zip(&record.daily.weather_code)
        .take(WEEKLY_STRIP_LEN)
        .map(|((date, max), code)| DailyEntry {
            weekday: date.format("%a").to_string(),
            icon: Condition::from_code(*code).icon(DayPart::Day),
            temperature: max.round() as i32,
        })
        .collect()
}

/// Derive the full card from one forecast record.
pub fn render(record: &ForecastRecord) -> CardUpdate {
    let reference = record.current.time;
    let part = DayPart::from_hour(reference.hour());
    let condition = Condition::from_code(record.current.weather_code);
    let nearest = nearest_hour_index(&record.hourly.time, reference);

    let high = first_or_dash(&record.daily.temperature_max);
    let low = first_or_dash(&record.daily.temperature_min);

    let feels_like = nearest.map_or_else(
        || "-".to_string(),
        |i| format!("{:.1}°", record.hourly.apparent_temperature[i]),
    );
    let humidity = nearest.map_or_else(
        || "-".to_string(),
        |i| format!("{}%", record.hourly.humidity[i].round() as i32),
    );
    let wind = nearest.map_or_else(
        || "-".to_string(),
        |i| format!("{} km/h", record.hourly.wind_speed[i].round() as i32),
    );
    let precipitation = match record.daily.precipitation_sum.first() {
        Some(sum) => format!("{sum:.1}\""),
        None => "-\"".to_string(),
    };

    CardUpdate {
        temperature: format!("{:.1}°", record.current.temperature),
        description: condition.description(),
        high_low: format!("High: {high}° Low: {low}°"),
        icon: condition.icon(part),
        backdrop: condition.backdrop(part),
        feels_like,
        precipitation,
        humidity,
        wind,
        hourly: hourly_strip(record),
        weekly: weekly_strip(record),
    }
}

fn first_or_dash(values: &[f64]) -> String {
    values.first().map_or_else(|| "-".to_string(), ToString::to_string)
}
