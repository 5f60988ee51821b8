use std::sync::Arc;

use trending_snapshot::{
    config::Config,
    services::{self, TmdbProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let provider = Arc::new(TmdbProvider::from_config(&config));

    let written = services::run(provider, &config).await?;
    for snapshot in &written {
        tracing::info!(
            json = %snapshot.json_path.display(),
            html = %snapshot.html_path.display(),
            "Snapshot updated successfully"
        );
    }

    Ok(())
}
