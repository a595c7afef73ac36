use crate::app_config::AppConfig;
use crate::domain::lookup::PlaceResolver;
use crate::domain::{GeoLocation, Place};
use crate::geocode::nominatim_response::NominatimResponse;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{error, info, instrument};

#[derive(Debug, Clone)]
pub struct ReverseGeocodeClient {
    client: Client,
    url: String,
}

impl ReverseGeocodeClient {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        ReverseGeocodeClient {
            client,
            url: config.geocoding().url().trim_end_matches('/').to_string(),
        }
    }

    #[instrument(skip(self))]
    pub async fn try_reverse_geocode(&self, location: &GeoLocation) -> Result<Place, GeocodeClientError> {
        info!("🗺️ Resolving place name...");

        let response = self
            .client
            .get(format!("{}/reverse", self.url))
            .query(&[
                ("format", "json".to_string()),
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeClientError::UnexpectedStatus(response.status()));
        }

        let place = response
            .json::<NominatimResponse>()
            .await?
            .into_place()
            .ok_or(GeocodeClientError::MissingAddress)?;

        info!("🗺️ Resolving place name... OK, {}", place.name);
        Ok(place)
    }
}

#[async_trait]
impl PlaceResolver for ReverseGeocodeClient {
    async fn reverse_geocode(&self, location: &GeoLocation) -> Place {
        match self.try_reverse_geocode(location).await {
            Ok(place) => place,
            Err(e) => {
                error!("❌ Reverse geocoding failed: {}", e);
                Place::unknown()
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum GeocodeClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("geocoding service responded with status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("geocoding response has no address")]
    MissingAddress,
}
