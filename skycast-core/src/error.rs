use reqwest::StatusCode;

/// Failures of the device-location capability.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("no location available. Hint: run `skycast configure` to set a home location")]
    Unavailable,
}

/// Anything that can abort a resolve → fetch → render chain.
///
/// None of these are retried; the caller surfaces the message and stops.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("no match found for city '{0}'")]
    CityNotFound(String),
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed forecast payload: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_not_found_names_the_city() {
        let err = WeatherError::CityNotFound("Zzzzz".to_string());
        assert!(err.to_string().contains("Zzzzz"));
    }

    #[test]
    fn unavailable_location_hints_at_configure() {
        let err = WeatherError::from(LocationError::Unavailable);
        assert!(err.to_string().contains("skycast configure"));
    }
}
