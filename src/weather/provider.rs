use super::error::WeatherError;
use super::types::{CurrentWeatherResponse, ForecastResponse, GeocodeEntry};
use async_trait::async_trait;

/// Seam between the service and the upstream weather provider. The three
/// calls mirror the provider's read-only endpoints; implementations map
/// non-success statuses to the matching `WeatherError` variant.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn geocode(&self, query: &str, limit: u32) -> Result<Vec<GeocodeEntry>, WeatherError>;

    async fn current_weather(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CurrentWeatherResponse, WeatherError>;

    async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastResponse, WeatherError>;
}
