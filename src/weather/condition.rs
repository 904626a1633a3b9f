/// Map an OpenWeather condition group (the `weather[0].main` string) to the
/// fixed icon vocabulary the frontend knows about.
///
/// Unrecognized groups fall back to "sunny". That default is inherited
/// behavior and kept on purpose; see DESIGN.md.
pub fn map_condition(raw: &str) -> &'static str {
    match raw.to_lowercase().as_str() {
        "clear" => "sunny",
        "clouds" => "cloudy",
        "rain" => "rainy",
        "snow" => "snowy",
        "thunderstorm" => "thunderstorm",
        "drizzle" => "drizzle",
        "mist" | "smoke" | "haze" | "fog" => "foggy",
        _ => "sunny",
    }
}
