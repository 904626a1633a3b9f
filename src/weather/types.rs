use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- Provider payloads (OpenWeather wire shapes) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeEntry {
    pub name: String,
    pub local_names: Option<HashMap<String, String>>,
    pub lat: f64,
    pub lon: f64,
    pub country: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: MainMetrics,
    pub weather: Vec<WeatherCondition>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainMetrics {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i64,
    pub humidity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
}

/// One 3-hour slot of the 5-day forecast endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastItem {
    pub dt: i64,
    pub main: MainMetrics,
    pub weather: Vec<WeatherCondition>,
}

// --- Normalized output shapes ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: ConditionSummary,
    pub humidity: i64,
    pub wind_kph: f64,
    pub feels_like: f64,
    pub pressure: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar date "YYYY-MM-DD", derived from the slot's epoch in UTC.
    pub date: String,
    pub temp_max: f64,
    pub temp_min: f64,
    pub condition: ConditionSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSection {
    pub daily: Vec<DailyForecast>,
}

/// The unit returned to callers and the unit stored in cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: Location,
    pub current: CurrentConditions,
    pub forecast: ForecastSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitySearchResult {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}
