use super::condition::map_condition;
use super::error::WeatherError;
use super::types::*;

/// One 3-hour forecast slot, flattened to the fields the daily reducer needs.
#[derive(Debug, Clone)]
pub struct ForecastEntry {
    pub epoch_seconds: i64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub condition_main: String,
    pub condition_description: String,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn celsius_to_fahrenheit(temp_c: f64) -> f64 {
    round1(temp_c * 9.0 / 5.0 + 32.0)
}

pub fn wind_ms_to_kph(speed_ms: f64) -> f64 {
    round1(speed_ms * 3.6)
}

/// Collapse chronological 3-hour slots into at most 3 unique calendar days.
///
/// The calendar date is derived from the slot epoch in UTC. If the input is
/// not chronologically sorted (the provider's always is), output order
/// follows first appearance, not calendar order.
pub fn reduce_daily(entries: &[ForecastEntry]) -> Vec<DailyForecast> {
    let mut daily: Vec<DailyForecast> = Vec::new();

    for entry in entries {
        if daily.len() >= 3 {
            break;
        }
        let date = match chrono::DateTime::from_timestamp(entry.epoch_seconds, 0) {
            Some(ts) => ts.format("%Y-%m-%d").to_string(),
            None => continue,
        };
        if daily.iter().any(|day| day.date == date) {
            continue;
        }
        daily.push(DailyForecast {
            date,
            temp_max: entry.temp_max,
            temp_min: entry.temp_min,
            condition: ConditionSummary {
                text: entry.condition_description.clone(),
                icon: map_condition(&entry.condition_main).to_string(),
            },
        });
    }

    daily
}

/// Assemble the normalized report from the two provider payloads and the
/// geocoded location.
pub fn build_report(
    current: &CurrentWeatherResponse,
    forecast: &ForecastResponse,
    location: Location,
) -> Result<WeatherReport, WeatherError> {
    let current_condition = current
        .weather
        .first()
        .ok_or(WeatherError::MissingField { field: "weather[0]" })?;

    let entries = forecast
        .list
        .iter()
        .map(|item| {
            let condition = item.weather.first().ok_or(WeatherError::MissingField {
                field: "list[].weather[0]",
            })?;
            Ok(ForecastEntry {
                epoch_seconds: item.dt,
                temp_max: item.main.temp_max,
                temp_min: item.main.temp_min,
                condition_main: condition.main.clone(),
                condition_description: condition.description.clone(),
            })
        })
        .collect::<Result<Vec<_>, WeatherError>>()?;

    Ok(WeatherReport {
        current: CurrentConditions {
            temp_c: current.main.temp,
            temp_f: celsius_to_fahrenheit(current.main.temp),
            condition: ConditionSummary {
                text: current_condition.description.clone(),
                icon: map_condition(&current_condition.main).to_string(),
            },
            humidity: current.main.humidity,
            wind_kph: wind_ms_to_kph(current.wind.speed),
            feels_like: current.main.feels_like,
            pressure: current.main.pressure,
        },
        forecast: ForecastSection {
            daily: reduce_daily(&entries),
        },
        location,
    })
}
