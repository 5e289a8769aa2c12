//! HTTP implementation of the upstream sources

use async_trait::async_trait;
use gst_common::model::{CatalogEnchant, CharacterSpecializations, Snapshot};
use gst_common::{Bracket, BuildConfig};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{FetchError, GearSource, ProfileSource};

const USER_AGENT: &str = concat!("gst-build/", env!("CARGO_PKG_VERSION"));

/// Fetches snapshots, the enchant catalog and character profiles over HTTP
///
/// Requests are issued one at a time by the pipeline; there is no retry.
pub struct HttpSource {
    http_client: reqwest::Client,
    config: BuildConfig,
}

impl HttpSource {
    pub fn new(config: &BuildConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url = %url, "GET");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(FetchError::ApiError(status.as_u16(), error_text));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GearSource for HttpSource {
    async fn fetch_snapshot(&self, bracket: &Bracket) -> Result<Snapshot, FetchError> {
        let url = self.config.snapshot_url(&bracket.snapshot_file());
        info!(bracket = %bracket, url = %url, "Fetching snapshot");

        let snapshot: Snapshot = self.get_json(&url).await?;
        info!(bracket = %bracket, specs = snapshot.len(), "Snapshot received");
        Ok(snapshot)
    }

    async fn fetch_enchant_catalog(&self) -> Result<Vec<CatalogEnchant>, FetchError> {
        let url = &self.config.enchant_catalog_url;
        info!(url = %url, "Fetching enchantment catalog");
        self.get_json(url).await
    }
}

#[async_trait]
impl ProfileSource for HttpSource {
    fn profile_base(&self) -> &str {
        &self.config.talent_api_base
    }

    async fn fetch_specializations(
        &self,
        url: &str,
    ) -> Result<CharacterSpecializations, FetchError> {
        self.get_json(url).await
    }
}
