use thiserror::Error;

/// Failures of the fetch pipeline. All are fatal to the current fetch;
/// nothing is retried automatically.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("geocode lookup failed: HTTP {status}")]
    GeoLookupFailed { status: u16 },
    #[error("location not found for city '{city}'")]
    LocationNotFound { city: String },
    #[error("current weather lookup failed: HTTP {status}")]
    WeatherLookupFailed { status: u16 },
    #[error("forecast lookup failed: HTTP {status}")]
    ForecastLookupFailed { status: u16 },
    #[error("provider payload missing field '{field}'")]
    MissingField { field: &'static str },
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}
