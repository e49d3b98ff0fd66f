//! Thin terminal adapter: the only side-effecting consumer of a
//! [`CardUpdate`]. Formatting is kept separate from printing so the card text
//! can be asserted on without a display.

use skycast_core::CardUpdate;

/// Terminal glyph for an icon class.
fn glyph(icon: &str) -> &'static str {
    match icon {
        "fa-sun" => "☀",
        "fa-moon" => "☾",
        "fa-cloud" => "☁",
        "fa-cloud-moon" => "☾☁",
        "fa-smog" => "🌫",
        "fa-cloud-rain" => "🌧",
        "fa-snowflake" => "❄",
        "fa-cloud-bolt" => "⛈",
        _ => "☀",
    }
}

/// Build the human-readable card, one line per sink.
pub fn format_card(card: &CardUpdate) -> String {
    let mut out = String::new();

    out.push_str(&format!("  {}  {}\n", glyph(card.icon), card.description));
    out.push_str(&format!("  {}\n", card.temperature));
    out.push_str(&format!("  {}\n", card.high_low));
    out.push('\n');
    out.push_str(&format!(
        "  Feels like {}   Precipitation {}   Humidity {}   Wind {}\n",
        card.feels_like, card.precipitation, card.humidity, card.wind
    ));
    out.push_str(&format!("  Backdrop: {}\n", card.backdrop.asset()));

    if !card.hourly.is_empty() {
        out.push_str("\n  Next hours:\n");
        for entry in &card.hourly {
            out.push_str(&format!(
                "    {:>5}  {}  {}°\n",
                entry.label,
                glyph(entry.icon),
                entry.temperature
            ));
        }
    }

    if !card.weekly.is_empty() {
        out.push_str("\n  This week:\n");
        for entry in &card.weekly {
            out.push_str(&format!(
                "    {}  {}  {}°\n",
                entry.weekday,
                glyph(entry.icon),
                entry.temperature
            ));
        }
    }

    out
}

pub fn print_card(card: &CardUpdate) {
    print!("{}", format_card(card));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use skycast_core::{CurrentWeather, DailySeries, ForecastRecord, HourlySeries, render};

    fn record() -> ForecastRecord {
        let day = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        ForecastRecord {
            current: CurrentWeather {
                temperature: 21.3,
                weather_code: 61,
                time: day.and_hms_opt(11, 0, 0).unwrap(),
            },
            hourly: HourlySeries {
                time: (10..14).map(|h| day.and_hms_opt(h, 0, 0).unwrap()).collect(),
                temperature: vec![20.1, 21.3, 22.0, 22.4],
                apparent_temperature: vec![19.0, 20.1, 20.8, 21.0],
                precipitation: vec![0.0, 0.2, 0.1, 0.0],
                humidity: vec![55.0, 56.0, 52.0, 50.0],
                wind_speed: vec![11.0, 12.4, 13.1, 12.0],
                weather_code: vec![3, 61, 61, 3],
            },
            daily: DailySeries {
                time: vec![day, day.succ_opt().unwrap()],
                temperature_max: vec![24.1, 22.8],
                temperature_min: vec![17.2, 16.0],
                precipitation_sum: vec![0.3, 0.0],
                weather_code: vec![61, 3],
            },
        }
    }

    #[test]
    fn every_icon_class_has_a_glyph() {
        for icon in [
            "fa-sun",
            "fa-moon",
            "fa-cloud",
            "fa-cloud-moon",
            "fa-smog",
            "fa-cloud-rain",
            "fa-snowflake",
            "fa-cloud-bolt",
        ] {
            assert!(!glyph(icon).is_empty());
        }
        // Unrecognized classes fall back to the default sun.
        assert_eq!(glyph("fa-other"), "☀");
    }

    #[test]
    fn formatted_card_writes_every_sink() {
        let text = format_card(&render(&record()));

        assert!(text.contains("21.3°"));
        assert!(text.contains("Rainy"));
        assert!(text.contains("High: 24.1° Low: 17.2°"));
        assert!(text.contains("Feels like 20.1°"));
        assert!(text.contains("Precipitation 0.3\""));
        assert!(text.contains("Humidity 56%"));
        assert!(text.contains("Wind 12 km/h"));
        assert!(text.contains("assets/rainy.jpg"));
        assert!(text.contains("Next hours:"));
        assert!(text.contains("11 AM"));
        assert!(text.contains("This week:"));
        assert!(text.contains("Thu"));
    }

    #[test]
    fn empty_strips_are_omitted() {
        let mut rec = record();
        rec.hourly = HourlySeries {
            time: vec![],
            temperature: vec![],
            apparent_temperature: vec![],
            precipitation: vec![],
            humidity: vec![],
            wind_speed: vec![],
            weather_code: vec![],
        };
        rec.daily = DailySeries {
            time: vec![],
            temperature_max: vec![],
            temperature_min: vec![],
            precipitation_sum: vec![],
            weather_code: vec![],
        };

        let text = format_card(&render(&rec));
        assert!(!text.contains("Next hours:"));
        assert!(!text.contains("This week:"));
    }
}
