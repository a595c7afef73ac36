use crate::app_config::AppConfig;
use crate::domain::GeoLocation;
use crate::weather::ForecastResponse;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{error, info, instrument};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m,wind_direction_10m";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    url: String,
}

impl WeatherClient {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        WeatherClient {
            client,
            url: config.weather().url().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches current conditions and the daily forecast. Failures are logged and returned to the caller.
    #[instrument(skip(self))]
    pub async fn forecast(&self, location: &GeoLocation) -> Result<ForecastResponse, WeatherClientError> {
        info!("🌦️ Retrieving weather forecast...");

        let forecast = self
            .fetch_forecast(location)
            .await
            .inspect_err(|e| error!("❌ Weather forecast failed: {}", e))?;

        info!("🌦️ Retrieving weather forecast... OK, {} days", forecast.daily.time.len());
        Ok(forecast)
    }

    async fn fetch_forecast(&self, location: &GeoLocation) -> Result<ForecastResponse, WeatherClientError> {
        let response = self
            .client
            .get(format!("{}/v1/forecast", self.url))
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherClientError::UnexpectedStatus(response.status()));
        }

        Ok(response.json::<ForecastResponse>().await?)
    }
}

#[derive(Error, Debug)]
pub enum WeatherClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("weather service responded with status {0}")]
    UnexpectedStatus(StatusCode),
}
