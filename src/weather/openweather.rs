use super::error::WeatherError;
use super::provider::WeatherProvider;
use super::types::{CurrentWeatherResponse, ForecastResponse, GeocodeEntry};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct OpenWeatherClient {
    client: Client,
    config: Config,
}

impl OpenWeatherClient {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .user_agent("WeatherApiServer/1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Issue a GET, mapping a non-success status through `on_status` so each
    /// endpoint reports its own `WeatherError` variant.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
        on_status: fn(u16) -> WeatherError,
    ) -> Result<T, WeatherError> {
        let response = self.client.get(url).query(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(on_status(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn geocode(&self, query: &str, limit: u32) -> Result<Vec<GeocodeEntry>, WeatherError> {
        let url = format!("{}/direct", self.config.openweather_geo_url);
        self.get_json(
            &url,
            &[
                ("q", query),
                ("limit", &limit.to_string()),
                ("appid", &self.config.openweather_api_key),
            ],
            |status| WeatherError::GeoLookupFailed { status },
        )
        .await
    }

    async fn current_weather(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CurrentWeatherResponse, WeatherError> {
        let url = format!("{}/weather", self.config.openweather_api_url);
        self.get_json(
            &url,
            &[
                ("lat", &lat.to_string()),
                ("lon", &lon.to_string()),
                ("units", "metric"),
                ("appid", &self.config.openweather_api_key),
            ],
            |status| WeatherError::WeatherLookupFailed { status },
        )
        .await
    }

    async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastResponse, WeatherError> {
        let url = format!("{}/forecast", self.config.openweather_api_url);
        self.get_json(
            &url,
            &[
                ("lat", &lat.to_string()),
                ("lon", &lon.to_string()),
                ("units", "metric"),
                ("appid", &self.config.openweather_api_key),
            ],
            |status| WeatherError::ForecastLookupFailed { status },
        )
        .await
    }
}
