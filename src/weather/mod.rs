mod client;
mod forecast_response;

pub use client::{WeatherClient, WeatherClientError};
pub use forecast_response::{Current, CurrentUnits, Daily, DailyUnits, DayForecast, ForecastResponse};
