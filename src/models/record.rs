use chrono::{DateTime, SecondsFormat, Utc};
use serde::{ser::SerializeStruct, Serialize, Serializer};

use super::MediaKind;

/// Placeholder shown when a title has no rating
pub const RATING_PLACEHOLDER: &str = "—";

pub const SOURCE_LABEL: &str = "TMDB";

/// Flat, display-ready view of one trending title
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub id: u64,
    pub title: String,
    /// Overview, already truncated for display
    pub overview: String,
    /// Rating rounded to one decimal; `None` when TMDB reports zero or nothing
    pub rating: Option<f64>,
    /// Air or release date, `Unknown` when absent
    pub date: String,
    pub poster_url: Option<String>,
    pub tmdb_url: String,
    pub providers: Vec<String>,
    pub launch_app_id: Option<String>,
}

impl DisplayRecord {
    /// Rating as shown in the HTML table
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => format!("{:.1}", rating),
            None => RATING_PLACEHOLDER.to_string(),
        }
    }
}

/// One run's output for a single media kind
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub generated_at: DateTime<Utc>,
    pub source: &'static str,
    pub region: String,
    pub kind: MediaKind,
    /// Whether records carry `launch_app_id`
    pub launch_links: bool,
    pub records: Vec<DisplayRecord>,
}

impl Snapshot {
    pub fn new(kind: MediaKind, region: &str, records: Vec<DisplayRecord>) -> Self {
        Self {
            generated_at: Utc::now(),
            source: SOURCE_LABEL,
            region: region.to_string(),
            kind,
            launch_links: false,
            records,
        }
    }

    pub fn with_launch_links(mut self, launch_links: bool) -> Self {
        self.launch_links = launch_links;
        self
    }
}

// The record list lives under a kind-specific key ("shows" / "movies"),
// which derive(Serialize) cannot express.
impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let records: Vec<RecordEntry<'_>> = self
            .records
            .iter()
            .map(|record| RecordEntry {
                record,
                kind: self.kind,
                launch_links: self.launch_links,
            })
            .collect();

        let mut state = serializer.serialize_struct("Snapshot", 5)?;
        state.serialize_field(
            "generated_at",
            &self
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        state.serialize_field("source", self.source)?;
        state.serialize_field("region", &self.region)?;
        state.serialize_field("type", &self.kind)?;
        state.serialize_field(self.kind.collection_key(), &records)?;
        state.end()
    }
}

/// A record as written to JSON: the date sits under the kind's own key and
/// the launch id only appears on pages with launch links.
struct RecordEntry<'a> {
    record: &'a DisplayRecord,
    kind: MediaKind,
    launch_links: bool,
}

impl Serialize for RecordEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = self.record;
        let len = if self.launch_links { 9 } else { 8 };

        let mut state = serializer.serialize_struct("DisplayRecord", len)?;
        state.serialize_field("id", &record.id)?;
        state.serialize_field("title", &record.title)?;
        state.serialize_field("overview", &record.overview)?;
        state.serialize_field("rating", &record.rating)?;
        state.serialize_field(self.kind.date_key(), &record.date)?;
        state.serialize_field("poster_url", &record.poster_url)?;
        state.serialize_field("tmdb_url", &record.tmdb_url)?;
        state.serialize_field("providers", &record.providers)?;
        if self.launch_links {
            state.serialize_field("launch_app_id", &record.launch_app_id)?;
        } else {
            state.skip_field("launch_app_id")?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(rating: Option<f64>) -> DisplayRecord {
        DisplayRecord {
            id: 603,
            title: "The Matrix".to_string(),
            overview: "Neo learns the truth.".to_string(),
            rating,
            date: "1999-03-31".to_string(),
            poster_url: None,
            tmdb_url: "https://www.themoviedb.org/movie/603".to_string(),
            providers: vec!["Max".to_string()],
            launch_app_id: Some("com.webos.app.hbomax".to_string()),
        }
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(record(Some(7.9)).rating_label(), "7.9");
        assert_eq!(record(Some(8.0)).rating_label(), "8.0");
        assert_eq!(record(None).rating_label(), "—");
    }

    #[test]
    fn test_snapshot_serialization_uses_kind_key() {
        let mut snapshot = Snapshot::new(MediaKind::Movie, "US", vec![record(None)])
            .with_launch_links(true);
        snapshot.generated_at = Utc.with_ymd_and_hms(2026, 10, 18, 6, 30, 0).unwrap();

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["generated_at"], "2026-10-18T06:30:00Z");
        assert_eq!(value["source"], "TMDB");
        assert_eq!(value["region"], "US");
        assert_eq!(value["type"], "movie");
        assert_eq!(value["movies"][0]["title"], "The Matrix");
        assert!(value["movies"][0]["rating"].is_null());
        assert_eq!(value["movies"][0]["release_date"], "1999-03-31");
        assert!(value["movies"][0].get("date").is_none());
        assert_eq!(value["movies"][0]["launch_app_id"], "com.webos.app.hbomax");
        assert!(value.get("shows").is_none());
    }

    #[test]
    fn test_tv_snapshot_uses_shows_key() {
        let snapshot = Snapshot::new(MediaKind::Tv, "US", vec![]);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["type"], "tv");
        assert_eq!(value["shows"], serde_json::json!([]));
    }

    #[test]
    fn test_tv_records_use_air_date_and_omit_launch_id() {
        let snapshot = Snapshot::new(MediaKind::Tv, "US", vec![record(Some(9.1))]);
        let value = serde_json::to_value(&snapshot).unwrap();

        let show = &value["shows"][0];
        assert_eq!(show["first_air_date"], "1999-03-31");
        assert_eq!(show["rating"], 9.1);
        assert!(show.get("release_date").is_none());
        assert!(show.get("launch_app_id").is_none());
    }
}
