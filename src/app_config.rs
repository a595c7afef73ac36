use crate::domain::{GeoLocation, ZeroCoordinates};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    location: GeoLocation,
    http: Http,
    radio: Radio,
    weather: Weather,
    geocoding: Geocoding,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("RADIOCAST").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn http(&self) -> &Http {
        &self.http
    }

    pub fn radio(&self) -> &Radio {
        &self.radio
    }

    pub fn weather(&self) -> &Weather {
        &self.weather
    }

    pub fn geocoding(&self) -> &Geocoding {
        &self.geocoding
    }
}

#[derive(Debug, Deserialize)]
pub struct Http {
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    user_agent: String,
}

impl Http {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Debug, Deserialize)]
pub struct Radio {
    url: String,
    limit: u32,
    #[serde(default)]
    zero_coordinates: ZeroCoordinates,
}

impl Radio {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn zero_coordinates(&self) -> ZeroCoordinates {
        self.zero_coordinates
    }
}

#[derive(Debug, Deserialize)]
pub struct Weather {
    url: String,
}

impl Weather {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocoding {
    url: String,
}

impl Geocoding {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                location: GeoLocation::new(51.8615899, 4.3580323),
                http: Http {
                    timeout: Duration::from_secs(5),
                    user_agent: "radiocast-test".to_string(),
                },
                radio: Radio {
                    url: "https://radio.url".to_string(),
                    limit: 100,
                    zero_coordinates: ZeroCoordinates::Missing,
                },
                weather: Weather {
                    url: "https://weather.url".to_string(),
                },
                geocoding: Geocoding {
                    url: "https://geocoding.url".to_string(),
                },
            },
        }
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.config.http.user_agent = user_agent.to_string();
        self
    }

    pub fn radio_url(mut self, url: String) -> Self {
        self.config.radio.url = url;
        self
    }

    pub fn radio_limit(mut self, limit: u32) -> Self {
        self.config.radio.limit = limit;
        self
    }

    pub fn weather_url(mut self, url: String) -> Self {
        self.config.weather.url = url;
        self
    }

    pub fn geocoding_url(mut self, url: String) -> Self {
        self.config.geocoding.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
