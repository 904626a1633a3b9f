use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::weather::service::WeatherService;
use crate::weather::types::{CitySearchResult, WeatherReport};

const MAX_INPUT_LEN: usize = 100;
const MIN_SEARCH_LEN: usize = 2;
const PROVIDER_DOCS_URL: &str = "https://openweathermap.org/api";

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CitySearchQuery {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

type ErrorResponse = (StatusCode, Json<Value>);

fn bad_request(message: &str) -> ErrorResponse {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>, ErrorResponse> {
    let city = params.city.as_deref().map(str::trim).unwrap_or("");
    if city.is_empty() || city.chars().count() > MAX_INPUT_LEN {
        return Err(bad_request("city must be 1-100 characters"));
    }

    match state.service.weather_for_city(city).await {
        Ok(report) => Ok(Json(report)),
        Err(err) => {
            // Clients get the uniform body; the detail stays in the logs.
            tracing::error!(city, error = %err, "weather fetch failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "Weather data unavailable",
                    "docs": PROVIDER_DOCS_URL,
                })),
            ))
        }
    }
}

pub async fn search_cities(
    State(state): State<AppState>,
    Query(params): Query<CitySearchQuery>,
) -> Result<Json<Vec<CitySearchResult>>, ErrorResponse> {
    let query = params.query.as_deref().map(str::trim).unwrap_or("");
    if query.chars().count() < MIN_SEARCH_LEN || query.chars().count() > MAX_INPUT_LEN {
        return Err(bad_request("query must be 2-100 characters"));
    }

    Ok(Json(state.service.search_cities(query).await))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weather", get(get_weather))
        .route("/cities/search", get(search_cities))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
