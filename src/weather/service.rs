use super::cache::{hashed_key, TtlCache};
use super::error::WeatherError;
use super::format::build_report;
use super::provider::WeatherProvider;
use super::types::{CitySearchResult, Location, WeatherReport};
use crate::config::Config;
use std::sync::Arc;
use std::time::Duration;

const CACHE_CAPACITY: u64 = 1000;

/// Facade over the upstream provider: fetch-and-normalize pipeline plus city
/// search, both behind a TTL cache.
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    weather_cache: TtlCache<WeatherReport>,
    search_cache: TtlCache<Vec<CitySearchResult>>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>, config: &Config) -> Self {
        Self {
            provider,
            weather_cache: TtlCache::new(
                CACHE_CAPACITY,
                Duration::from_secs(config.weather_cache_ttl_secs),
            ),
            search_cache: TtlCache::new(
                CACHE_CAPACITY,
                Duration::from_secs(config.search_cache_ttl_secs),
            ),
        }
    }

    /// Cached weather report for a city. Any upstream failure aborts the
    /// whole fetch and propagates; partial reports are never produced.
    pub async fn weather_for_city(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let key = hashed_key("weather_", city);
        self.weather_cache
            .get_or_compute(key, || self.fetch_report(city))
            .await
    }

    /// The pipeline behind the cache: geocode, then current weather, then
    /// forecast, then normalize. Strictly sequential, no retries.
    async fn fetch_report(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let candidates = self.provider.geocode(city, 1).await?;
        let found = candidates
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound {
                city: city.to_string(),
            })?;

        let location = Location {
            name: found.name,
            country: found.country.unwrap_or_default(),
            lat: found.lat,
            lon: found.lon,
        };

        let current = self.provider.current_weather(location.lat, location.lon).await?;
        let forecast = self.provider.forecast(location.lat, location.lon).await?;

        build_report(&current, &forecast, location)
    }

    /// Cached city search, up to 5 candidates. Fail-open: an upstream
    /// failure is logged here (the caller never sees it) and yields an empty
    /// list, which is cached like any other result.
    pub async fn search_cities(&self, query: &str) -> Vec<CitySearchResult> {
        let key = hashed_key("city_search_", query);
        let result: Result<_, WeatherError> = self
            .search_cache
            .get_or_compute(key, || async {
                match self.provider.geocode(query, 5).await {
                    Ok(entries) => Ok(entries
                        .into_iter()
                        .map(|entry| CitySearchResult {
                            name: entry.name,
                            region: entry.state.unwrap_or_default(),
                            country: entry.country.unwrap_or_default(),
                            lat: entry.lat,
                            lon: entry.lon,
                        })
                        .collect()),
                    Err(err) => {
                        tracing::error!(query, error = %err, "city search upstream failed");
                        Ok(Vec::new())
                    }
                }
            })
            .await;
        result.unwrap_or_default()
    }
}
