use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub openweather_api_key: String,
    pub openweather_api_url: String,
    pub openweather_geo_url: String,
    pub weather_cache_ttl_secs: u64,
    pub search_cache_ttl_secs: u64,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            openweather_api_key: env::var("OPENWEATHER_API_KEY")
                .map_err(|_| anyhow::anyhow!("OPENWEATHER_API_KEY not set"))?,
            openweather_api_url: env::var("OPENWEATHER_API_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5".to_string()),
            openweather_geo_url: env::var("OPENWEATHER_GEO_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org/geo/1.0".to_string()),
            weather_cache_ttl_secs: env_u64("WEATHER_CACHE_TTL_SECS", 30 * 60)?,
            search_cache_ttl_secs: env_u64("SEARCH_CACHE_TTL_SECS", 24 * 60 * 60)?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}

fn env_u64(name: &str, default: u64) -> anyhow::Result<u64> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be an integer number of seconds", name)),
        Err(_) => Ok(default),
    }
}
