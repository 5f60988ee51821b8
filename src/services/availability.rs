use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    error::AppResult,
    models::{MediaKind, ProviderEntry, RegionAvailability},
    services::providers::CatalogProvider,
};

/// Resolves the streaming providers for a title in one region.
///
/// Results are memoized per (kind, id) for the lifetime of the resolver, so a
/// title checked by the trending filter is not fetched again when its record
/// is built. A resolver is meant to live for exactly one run.
pub struct ProviderResolver {
    provider: Arc<dyn CatalogProvider>,
    region: String,
    cache: HashMap<(MediaKind, u64), Vec<String>>,
}

impl ProviderResolver {
    pub fn new(provider: Arc<dyn CatalogProvider>, region: impl Into<String>) -> Self {
        Self {
            provider,
            region: region.into(),
            cache: HashMap::new(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Provider names for a title (checks cache first)
    ///
    /// An empty list means the title is not available in the region at any
    /// tier; transport and API failures are returned as errors.
    pub async fn resolve(&mut self, kind: MediaKind, id: u64) -> AppResult<Vec<String>> {
        if let Some(cached) = self.cache.get(&(kind, id)) {
            tracing::debug!(kind = %kind, title_id = id, "Provider cache hit");
            return Ok(cached.clone());
        }

        let response = self.provider.fetch_watch_providers(kind, id).await?;
        let providers = response
            .results
            .get(&self.region)
            .map(select_providers)
            .unwrap_or_default();

        tracing::debug!(
            kind = %kind,
            title_id = id,
            region = %self.region,
            providers = ?providers,
            "Providers resolved"
        );

        self.cache.insert((kind, id), providers.clone());
        Ok(providers)
    }
}

/// Picks the first tier with any entries: subscription, then purchase, then
/// rental.
///
/// Tiers are never merged. Names keep source order, blanks are dropped and
/// duplicates are removed by first occurrence. A chosen tier whose entries are
/// all nameless yields an empty list; later tiers are not consulted.
pub fn select_providers(availability: &RegionAvailability) -> Vec<String> {
    [&availability.flatrate, &availability.buy, &availability.rent]
        .into_iter()
        .filter_map(|tier| tier.as_deref())
        .find(|entries| !entries.is_empty())
        .map(unique_names)
        .unwrap_or_default()
}

fn unique_names(entries: &[ProviderEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter_map(|entry| entry.provider_name.as_deref())
        .filter(|name| !name.trim().is_empty())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
