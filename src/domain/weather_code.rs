use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// WMO weather interpretation code as reported by Open-Meteo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub i64);

// See https://open-meteo.com/en/docs#weather_variable_documentation
const DESCRIPTIONS: [(i64, &str); 28] = [
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snow fall"),
    (73, "Moderate snow fall"),
    (75, "Heavy snow fall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

impl WeatherCode {
    pub fn description(&self) -> &'static str {
        DESCRIPTIONS
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, description)| *description)
            .unwrap_or("Unknown")
    }

    pub fn icon(&self) -> &'static str {
        match self.0 {
            0 => "☀️",
            1..=3 => "⛅",
            45..=48 => "🌫️",
            51..=67 => "🌧️",
            71..=86 => "❄️",
            95.. => "⛈️",
            _ => "❓",
        }
    }
}

impl Display for WeatherCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon(), self.description())
    }
}
