use crate::domain::WeatherCode;
use crate::extensions::compass_ext::wind_direction;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

// API: https://open-meteo.com/en/docs
#[derive(Clone, Debug, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
    pub current_units: CurrentUnits,
    pub current: Current,
    pub daily_units: DailyUnits,
    pub daily: Daily,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CurrentUnits {
    pub temperature_2m: String,
    pub relative_humidity_2m: String,
    pub wind_speed_10m: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Current {
    pub time: String,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub weather_code: WeatherCode,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: Option<f64>,
}

impl Current {
    pub fn weather_code(&self) -> WeatherCode {
        self.weather_code
    }

    pub fn wind_direction(&self) -> &'static str {
        wind_direction(self.wind_direction_10m)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DailyUnits {
    pub temperature_2m_max: String,
    pub temperature_2m_min: String,
}

/// Daily values come as parallel arrays indexed by day.
#[derive(Clone, Debug, Deserialize)]
pub struct Daily {
    pub time: Vec<String>,
    pub weather_code: Vec<WeatherCode>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub weather_code: WeatherCode,
    pub temperature_max: f64,
    pub temperature_min: f64,
}

impl Daily {
    /// Combines the arrays into one forecast per day, stopping at the shortest array.
    pub fn days(&self) -> Vec<DayForecast> {
        self.time
            .iter()
            .zip(&self.weather_code)
            .zip(self.temperature_2m_max.iter().zip(&self.temperature_2m_min))
            .filter_map(|((time, weather_code), (max, min))| match NaiveDate::parse_from_str(time, "%Y-%m-%d") {
                Ok(date) => Some(DayForecast {
                    date,
                    weather_code: *weather_code,
                    temperature_max: *max,
                    temperature_min: *min,
                }),
                Err(e) => {
                    warn!("⚠️ Skipping forecast day with invalid date '{}': {}", time, e);
                    None
                }
            })
            .collect()
    }
}
