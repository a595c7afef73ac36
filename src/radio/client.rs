use crate::app_config::AppConfig;
use crate::domain::Station;
use crate::domain::lookup::StationDirectory;
use crate::radio::StationQuery;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{error, info, instrument};

#[derive(Debug, Clone)]
pub struct RadioDirectoryClient {
    client: Client,
    url: String,
    limit: u32,
}

impl RadioDirectoryClient {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        RadioDirectoryClient {
            client,
            url: config.radio().url().trim_end_matches('/').to_string(),
            limit: config.radio().limit(),
        }
    }

    #[instrument(skip(self), fields(country_code = %query.country_code, state = query.state.as_deref().unwrap_or("")))]
    pub async fn try_search(&self, query: &StationQuery) -> Result<Vec<Station>, RadioClientError> {
        info!("📻 Searching radio stations...");

        let response = self
            .client
            .get(format!("{}/json/stations/search", self.url))
            .query(&query.params(self.limit))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RadioClientError::UnexpectedStatus(response.status()));
        }

        let stations = response.json::<Vec<Station>>().await?;
        info!("📻 Searching radio stations... OK, {} found", stations.len());

        Ok(stations)
    }

    async fn search_or_empty(&self, query: StationQuery) -> Vec<Station> {
        match self.try_search(&query).await {
            Ok(stations) => stations,
            Err(e) => {
                error!(country_code = %query.country_code, state = ?query.state, "❌ Radio directory search failed: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl StationDirectory for RadioDirectoryClient {
    async fn search_by_country(&self, country_code: &str) -> Vec<Station> {
        self.search_or_empty(StationQuery::country(country_code)).await
    }

    async fn search_by_state(&self, country_code: &str, state: &str) -> Vec<Station> {
        self.search_or_empty(StationQuery::state(country_code, state)).await
    }
}

#[derive(Error, Debug)]
pub enum RadioClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("radio directory responded with status {0}")]
    UnexpectedStatus(StatusCode),
}
