/// TMDB API provider
///
/// API Flow:
/// 1. Trending: /trending/{kind}/day → ranked list of titles
/// 2. Availability: /{kind}/{id}/watch/providers → providers keyed by region
///
/// Both endpoints authenticate with the `api_key` query parameter.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{CatalogItem, MediaKind, TrendingResponse, WatchProvidersResponse},
    services::providers::CatalogProvider,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tmdb_api_key.clone(), config.tmdb_api_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Issues an authenticated GET and decodes the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.url(path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                path = %path,
                status = %status,
                body = %body,
                "TMDB request failed"
            );
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn fetch_trending(&self, kind: MediaKind) -> AppResult<Vec<CatalogItem>> {
        let path = format!("/trending/{}/day", kind.path_segment());
        let trending: TrendingResponse = self.get(&path).await?;

        tracing::info!(
            kind = %kind,
            results = trending.results.len(),
            provider = self.name(),
            "Trending feed fetched"
        );

        Ok(trending.results)
    }

    async fn fetch_watch_providers(
        &self,
        kind: MediaKind,
        id: u64,
    ) -> AppResult<WatchProvidersResponse> {
        let path = format!("/{}/{}/watch/providers", kind.path_segment(), id);
        let availability: WatchProvidersResponse = self.get(&path).await?;

        tracing::debug!(
            kind = %kind,
            title_id = id,
            regions = availability.results.len(),
            provider = self.name(),
            "Watch providers fetched"
        );

        Ok(availability)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
