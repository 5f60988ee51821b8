use std::path::PathBuf;

use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{provider_catalog, DisplayRecord, MediaKind, Snapshot},
};

/// Output layout for one media kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotProfile {
    pub kind: MediaKind,
    pub json_file: &'static str,
    pub html_file: &'static str,
    /// Adds the "Launch" column with LG webOS deep links
    pub launch_links: bool,
}

impl SnapshotProfile {
    pub fn for_kind(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Tv => Self {
                kind,
                json_file: "data.json",
                html_file: "index.html",
                launch_links: false,
            },
            MediaKind::Movie => Self {
                kind,
                json_file: "movies.json",
                html_file: "movies.html",
                launch_links: true,
            },
        }
    }

    fn heading(&self) -> &'static str {
        match self.kind {
            MediaKind::Tv => "Top Streaming Shows",
            MediaKind::Movie => "Top Streaming Movies",
        }
    }

    fn column_label(&self) -> &'static str {
        match self.kind {
            MediaKind::Tv => "Show",
            MediaKind::Movie => "Movie",
        }
    }

    fn date_label(&self) -> &'static str {
        match self.kind {
            MediaKind::Tv => "First aired",
            MediaKind::Movie => "Release date",
        }
    }
}

/// Paths of the files written for one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSnapshot {
    pub json_path: PathBuf,
    pub html_path: PathBuf,
}

const PAGE_TEMPLATE: &str = "snapshot_page";

/// Renders snapshots and writes them into one output directory.
///
/// The page template is parsed once, in strict mode, when the writer is built.
pub struct SnapshotWriter {
    output_dir: PathBuf,
    template_engine: Handlebars<'static>,
}

impl SnapshotWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(
                PAGE_TEMPLATE,
                include_str!("../../templates/snapshot.html.hbs"),
            )
            .map_err(|e| AppError::Template(format!("Failed to register page template: {}", e)))?;

        Ok(Self {
            output_dir: output_dir.into(),
            template_engine: handlebars,
        })
    }

    /// Writes the JSON document, then the HTML page. Both are plain overwrites.
    pub async fn write(
        &self,
        profile: &SnapshotProfile,
        snapshot: &Snapshot,
    ) -> AppResult<WrittenSnapshot> {
        let json = render_json(snapshot)?;
        let html = self.render_html(profile, snapshot)?;

        let json_path = self.output_dir.join(profile.json_file);
        let html_path = self.output_dir.join(profile.html_file);

        tokio::fs::write(&json_path, json).await?;
        tokio::fs::write(&html_path, html).await?;

        tracing::info!(
            json = %json_path.display(),
            html = %html_path.display(),
            records = snapshot.records.len(),
            "Snapshot written"
        );

        Ok(WrittenSnapshot {
            json_path,
            html_path,
        })
    }

    /// Renders a self-contained page with one row per record, in snapshot order
    pub fn render_html(&self, profile: &SnapshotProfile, snapshot: &Snapshot) -> AppResult<String> {
        self.template_engine
            .render(PAGE_TEMPLATE, &page_context(profile, snapshot))
            .map_err(|e| {
                AppError::Template(format!("Failed to render {}: {}", profile.html_file, e))
            })
    }
}

pub fn render_json(snapshot: &Snapshot) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(snapshot)?;
    json.push('\n');
    Ok(json)
}

// Strict mode rejects missing keys, so optional values are passed as null.
fn page_context(profile: &SnapshotProfile, snapshot: &Snapshot) -> Value {
    let rows: Vec<Value> = snapshot
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| row_context(index + 1, record))
        .collect();

    json!({
        "heading": profile.heading(),
        "source": snapshot.source,
        "region": snapshot.region,
        "updated": snapshot.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        "column_label": profile.column_label(),
        "date_label": profile.date_label(),
        "launch_links": profile.launch_links,
        "rows": rows,
    })
}

fn row_context(rank: usize, record: &DisplayRecord) -> Value {
    let icons: Vec<Value> = record
        .providers
        .iter()
        .filter_map(|provider| {
            provider_catalog::icon_for(provider)
                .map(|file| json!({ "file": file, "provider": provider }))
        })
        .collect();

    json!({
        "rank": rank,
        "id": record.id,
        "title": record.title,
        "date": record.date,
        "overview": record.overview,
        "poster_url": record.poster_url,
        "rating": record.rating_label(),
        "icons": icons,
        "launch_app_id": record.launch_app_id,
    })
}
