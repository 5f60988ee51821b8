use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    models::Snapshot,
    services::{
        availability::ProviderResolver,
        providers::CatalogProvider,
        record_builder::RecordBuilder,
        snapshot::{SnapshotProfile, SnapshotWriter, WrittenSnapshot},
        trending::fetch_available_titles,
    },
};

/// Fetches, filters and renders one snapshot.
///
/// Nothing is written unless every request succeeded, so a failed run leaves
/// the previous files untouched.
pub async fn run_snapshot(
    provider: Arc<dyn CatalogProvider>,
    config: &Config,
    writer: &SnapshotWriter,
    profile: &SnapshotProfile,
) -> AppResult<WrittenSnapshot> {
    let mut resolver = ProviderResolver::new(provider.clone(), config.region.clone());

    let titles = fetch_available_titles(
        provider.as_ref(),
        &mut resolver,
        profile.kind,
        config.trending_limit,
    )
    .await?;

    let builder = RecordBuilder::new(
        profile.kind,
        config.tmdb_image_base.clone(),
        profile.launch_links,
    );
    let records = titles.into_iter().map(|title| builder.build(title)).collect();
    let snapshot = Snapshot::new(profile.kind, &config.region, records)
        .with_launch_links(profile.launch_links);

    writer.write(profile, &snapshot).await
}

/// Runs one snapshot per configured media kind, in order
pub async fn run(
    provider: Arc<dyn CatalogProvider>,
    config: &Config,
) -> AppResult<Vec<WrittenSnapshot>> {
    let writer = SnapshotWriter::new(&config.output_dir)?;
    let mut written = Vec::with_capacity(config.media_kinds.len());

    for kind in &config.media_kinds {
        let profile = SnapshotProfile::for_kind(*kind);
        tracing::info!(
            kind = %kind,
            provider = provider.name(),
            limit = config.trending_limit,
            "Building snapshot"
        );
        written.push(run_snapshot(provider.clone(), config, &writer, &profile).await?);
    }

    Ok(written)
}
