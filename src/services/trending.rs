use crate::{
    error::AppResult,
    models::{CatalogItem, MediaKind},
    services::{availability::ProviderResolver, providers::CatalogProvider},
};

/// A trending entry that is streamable in the resolver's region
#[derive(Debug, Clone, PartialEq)]
pub struct AvailableTitle {
    pub id: u64,
    pub item: CatalogItem,
    pub providers: Vec<String>,
}

/// Walks the daily trending feed in ranking order and keeps the first `limit`
/// titles that have at least one provider.
///
/// Stops resolving as soon as `limit` titles are kept. Returning fewer than
/// `limit` titles is not an error.
pub async fn fetch_available_titles(
    provider: &dyn CatalogProvider,
    resolver: &mut ProviderResolver,
    kind: MediaKind,
    limit: usize,
) -> AppResult<Vec<AvailableTitle>> {
    if limit == 0 {
        return Ok(Vec::new());
    }

    let feed = provider.fetch_trending(kind).await?;
    let feed_len = feed.len();
    let mut kept = Vec::with_capacity(limit.min(feed_len));

    for item in feed {
        let Some(id) = item.id else {
            tracing::warn!(
                kind = %kind,
                title = ?item.display_title(kind),
                "Skipping trending item without id"
            );
            continue;
        };

        let providers = resolver.resolve(kind, id).await?;
        if providers.is_empty() {
            tracing::debug!(kind = %kind, title_id = id, "No providers in region, skipping");
            continue;
        }

        kept.push(AvailableTitle {
            id,
            item,
            providers,
        });

        if kept.len() == limit {
            break;
        }
    }

    tracing::info!(
        kind = %kind,
        region = %resolver.region(),
        feed = feed_len,
        kept = kept.len(),
        limit,
        "Trending titles filtered"
    );

    Ok(kept)
}
