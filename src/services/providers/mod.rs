/// Catalog data provider abstraction
///
/// The pipeline only needs two calls from the remote catalog: the daily
/// trending feed and per-title watch providers. Keeping them behind a trait lets
/// the filter and resolver be exercised against a mock.
use crate::{
    error::AppResult,
    models::{CatalogItem, MediaKind, WatchProvidersResponse},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for catalog data providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the first page of the daily trending feed, in ranking order
    async fn fetch_trending(&self, kind: MediaKind) -> AppResult<Vec<CatalogItem>>;

    /// Fetch watch-provider availability for one title, all regions
    async fn fetch_watch_providers(
        &self,
        kind: MediaKind,
        id: u64,
    ) -> AppResult<WatchProvidersResponse>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
