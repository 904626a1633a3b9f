//! Canned provider for tests: fixed payloads per endpoint plus call
//! counters, so pipeline sequencing and cache behavior can be asserted
//! without any network.

use super::error::WeatherError;
use super::provider::WeatherProvider;
use super::types::*;
use crate::config::Config;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// 2025-01-01T00:00:00Z
const JAN1: i64 = 1_735_689_600;

pub enum UpstreamOutcome<T> {
    Payload(T),
    Status(u16),
}

pub struct StubProvider {
    pub geocode: UpstreamOutcome<Vec<GeocodeEntry>>,
    pub current: UpstreamOutcome<CurrentWeatherResponse>,
    pub forecast: UpstreamOutcome<ForecastResponse>,
    pub geocode_calls: Arc<AtomicUsize>,
    pub weather_calls: Arc<AtomicUsize>,
    pub forecast_calls: Arc<AtomicUsize>,
}

impl StubProvider {
    /// A provider where every endpoint answers with plausible London data.
    pub fn healthy() -> Self {
        Self {
            geocode: UpstreamOutcome::Payload(vec![london()]),
            current: UpstreamOutcome::Payload(sample_current()),
            forecast: UpstreamOutcome::Payload(sample_forecast()),
            geocode_calls: Arc::new(AtomicUsize::new(0)),
            weather_calls: Arc::new(AtomicUsize::new(0)),
            forecast_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn geocode(&self, _query: &str, _limit: u32) -> Result<Vec<GeocodeEntry>, WeatherError> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        match &self.geocode {
            UpstreamOutcome::Payload(entries) => Ok(entries.clone()),
            UpstreamOutcome::Status(status) => {
                Err(WeatherError::GeoLookupFailed { status: *status })
            }
        }
    }

    async fn current_weather(
        &self,
        _lat: f64,
        _lon: f64,
    ) -> Result<CurrentWeatherResponse, WeatherError> {
        self.weather_calls.fetch_add(1, Ordering::SeqCst);
        match &self.current {
            UpstreamOutcome::Payload(payload) => Ok(payload.clone()),
            UpstreamOutcome::Status(status) => {
                Err(WeatherError::WeatherLookupFailed { status: *status })
            }
        }
    }

    async fn forecast(&self, _lat: f64, _lon: f64) -> Result<ForecastResponse, WeatherError> {
        self.forecast_calls.fetch_add(1, Ordering::SeqCst);
        match &self.forecast {
            UpstreamOutcome::Payload(payload) => Ok(payload.clone()),
            UpstreamOutcome::Status(status) => {
                Err(WeatherError::ForecastLookupFailed { status: *status })
            }
        }
    }
}

pub fn london() -> GeocodeEntry {
    GeocodeEntry {
        name: "London".to_string(),
        local_names: None,
        lat: 51.5073,
        lon: -0.1276,
        country: Some("GB".to_string()),
        state: Some("England".to_string()),
    }
}

pub fn sample_current() -> CurrentWeatherResponse {
    CurrentWeatherResponse {
        main: MainMetrics {
            temp: 20.0,
            feels_like: 19.4,
            temp_min: 17.8,
            temp_max: 21.6,
            pressure: 1016,
            humidity: 72,
        },
        weather: vec![WeatherCondition {
            main: "Clouds".to_string(),
            description: "broken clouds".to_string(),
        }],
        wind: Wind { speed: 10.0 },
    }
}

/// Five days of 3-hour slots, two per day; the reducer should keep three.
pub fn sample_forecast() -> ForecastResponse {
    let list = (0..10)
        .map(|slot| ForecastItem {
            dt: JAN1 + slot * 12 * 3600,
            main: MainMetrics {
                temp: 15.0,
                feels_like: 14.0,
                temp_min: 11.0 + slot as f64,
                temp_max: 18.0 + slot as f64,
                pressure: 1012,
                humidity: 65,
            },
            weather: vec![WeatherCondition {
                main: "Rain".to_string(),
                description: "light rain".to_string(),
            }],
        })
        .collect();
    ForecastResponse { list }
}

pub fn test_config() -> Config {
    Config {
        openweather_api_key: "test-key".to_string(),
        openweather_api_url: "http://127.0.0.1:0/data/2.5".to_string(),
        openweather_geo_url: "http://127.0.0.1:0/geo/1.0".to_string(),
        weather_cache_ttl_secs: 60,
        search_cache_ttl_secs: 60,
        bind_addr: "127.0.0.1:0".to_string(),
    }
}
