use serde::{Deserialize, Serialize};

/// Weather condition categories mapped from WMO codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Clear,
    Cloudy,
    Foggy,
    Rainy,
    Snowy,
    Thunderstorm,
    Unknown,
}

/// Whether the local hour counts as day or night for icon/backdrop purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Day,
    Night,
}

impl DayPart {
    /// Night runs from after 18:00 through 05:00 inclusive.
    pub fn from_hour(hour: u32) -> Self {
        if hour > 18 || hour <= 5 { Self::Night } else { Self::Day }
    }
}

/// Background image choice for the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backdrop {
    Night,
    Sunny,
    Cloudy,
    Foggy,
    Rainy,
    Snowfall,
    Lightning,
}

impl Backdrop {
    /// Asset path the display surface loads for this backdrop.
    pub fn asset(self) -> &'static str {
        match self {
            Self::Night => "assets/night.jpg",
            Self::Sunny => "assets/sunny.jpg",
            Self::Cloudy => "assets/cloudy.jpg",
            Self::Foggy => "assets/foggy.jpg",
            Self::Rainy => "assets/rainy.jpg",
            Self::Snowfall => "assets/snowfall.jpg",
            Self::Lightning => "assets/lightning.jpg",
        }
    }
}

impl Condition {
    /// Classify a WMO weather code.
    ///
    /// Total: every integer maps somewhere, unlisted codes to `Unknown`.
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::Cloudy,
            45 | 48 => Self::Foggy,
            51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => Self::Rainy,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snowy,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Clear => "Clear Sky",
            Self::Cloudy => "Cloudy",
            Self::Foggy => "Foggy",
            Self::Rainy => "Rainy",
            Self::Snowy => "Snowy",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    /// Icon class for the display surface. Clear and Cloudy swap to moon
    /// variants at night; everything else is the same around the clock.
    pub fn icon(self, part: DayPart) -> &'static str {
        match (self, part) {
            (Self::Clear, DayPart::Night) => "fa-moon",
            (Self::Cloudy, DayPart::Night) => "fa-cloud-moon",
            (Self::Clear, DayPart::Day) => "fa-sun",
            (Self::Cloudy, DayPart::Day) => "fa-cloud",
            (Self::Foggy, _) => "fa-smog",
            (Self::Rainy, _) => "fa-cloud-rain",
            (Self::Snowy, _) => "fa-snowflake",
            (Self::Thunderstorm, _) => "fa-cloud-bolt",
            (Self::Unknown, _) => "fa-sun",
        }
    }

    /// Backdrop for the card, defaulting to sunny for unknown codes.
    pub fn backdrop(self, part: DayPart) -> Backdrop {
        match (self, part) {
            (Self::Clear | Self::Cloudy, DayPart::Night) => Backdrop::Night,
            (Self::Clear, DayPart::Day) => Backdrop::Sunny,
            (Self::Cloudy, DayPart::Day) => Backdrop::Cloudy,
            (Self::Foggy, _) => Backdrop::Foggy,
            (Self::Rainy, _) => Backdrop::Rainy,
            (Self::Snowy, _) => Backdrop::Snowfall,
            (Self::Thunderstorm, _) => Backdrop::Lightning,
            (Self::Unknown, _) => Backdrop::Sunny,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_code() {
        assert_eq!(Condition::from_code(0), Condition::Clear);
    }

    #[test]
    fn cloudy_codes() {
        for code in [1, 2, 3] {
            assert_eq!(Condition::from_code(code), Condition::Cloudy);
        }
    }

    #[test]
    fn foggy_codes() {
        for code in [45, 48] {
            assert_eq!(Condition::from_code(code), Condition::Foggy);
        }
    }

    #[test]
    fn rainy_codes() {
        for code in [51, 53, 55, 61, 63, 65, 80, 81, 82] {
            assert_eq!(Condition::from_code(code), Condition::Rainy);
        }
    }

    #[test]
    fn snowy_codes() {
        for code in [71, 73, 75, 77, 85, 86] {
            assert_eq!(Condition::from_code(code), Condition::Snowy);
        }
    }

    #[test]
    fn thunderstorm_codes() {
        for code in [95, 96, 99] {
            assert_eq!(Condition::from_code(code), Condition::Thunderstorm);
        }
    }

    #[test]
    fn every_known_code_is_not_unknown() {
        let known = [
            0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73, 75, 77, 80, 81, 82, 85, 86, 95,
            96, 99,
        ];
        for code in known {
            assert_ne!(Condition::from_code(code), Condition::Unknown, "code {code}");
        }
    }

    #[test]
    fn unlisted_codes_are_unknown() {
        for code in [-1, 4, 44, 56, 57, 66, 67, 100, 999] {
            assert_eq!(Condition::from_code(code), Condition::Unknown, "code {code}");
        }
    }

    #[test]
    fn night_starts_after_eighteen() {
        assert_eq!(DayPart::from_hour(18), DayPart::Day);
        assert_eq!(DayPart::from_hour(19), DayPart::Night);
        assert_eq!(DayPart::from_hour(23), DayPart::Night);
        assert_eq!(DayPart::from_hour(0), DayPart::Night);
        assert_eq!(DayPart::from_hour(5), DayPart::Night);
        assert_eq!(DayPart::from_hour(6), DayPart::Day);
    }

    #[test]
    fn moon_variants_only_for_clear_and_cloudy() {
        assert_eq!(Condition::Clear.icon(DayPart::Night), "fa-moon");
        assert_eq!(Condition::Cloudy.icon(DayPart::Night), "fa-cloud-moon");
        assert_eq!(Condition::Rainy.icon(DayPart::Night), "fa-cloud-rain");
        assert_eq!(Condition::Foggy.icon(DayPart::Night), "fa-smog");
        assert_eq!(Condition::Unknown.icon(DayPart::Night), "fa-sun");
    }

    #[test]
    fn night_backdrop_only_for_clear_and_cloudy() {
        assert_eq!(Condition::Clear.backdrop(DayPart::Night), Backdrop::Night);
        assert_eq!(Condition::Cloudy.backdrop(DayPart::Night), Backdrop::Night);
        assert_eq!(Condition::Snowy.backdrop(DayPart::Night), Backdrop::Snowfall);
        assert_eq!(Condition::Unknown.backdrop(DayPart::Night), Backdrop::Sunny);
    }

    #[test]
    fn backdrop_assets_exist_for_all_variants() {
        for backdrop in [
            Backdrop::Night,
            Backdrop::Sunny,
            Backdrop::Cloudy,
            Backdrop::Foggy,
            Backdrop::Rainy,
            Backdrop::Snowfall,
            Backdrop::Lightning,
        ] {
            assert!(backdrop.asset().starts_with("assets/"));
        }
    }
}
