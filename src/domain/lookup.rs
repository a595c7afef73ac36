use crate::domain::{GeoLocation, Place, Station};
use async_trait::async_trait;

/// Station search that never fails, an empty result covers both "nothing found" and "lookup failed".
#[async_trait]
pub trait StationDirectory: Send + Sync {
    async fn search_by_country(&self, country_code: &str) -> Vec<Station>;
    async fn search_by_state(&self, country_code: &str, state: &str) -> Vec<Station>;
}

/// Reverse geocoding that falls back to [`Place::unknown`] on failure.
#[async_trait]
pub trait PlaceResolver: Send + Sync {
    async fn reverse_geocode(&self, location: &GeoLocation) -> Place;
}
