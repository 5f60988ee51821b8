use crate::{
    models::{provider_catalog, DisplayRecord, MediaKind},
    services::trending::AvailableTitle,
};

pub const OVERVIEW_MAX_CHARS: usize = 260;
pub const OVERVIEW_ELLIPSIS: char = '…';
pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_DATE: &str = "Unknown";

const TMDB_WEB_URL: &str = "https://www.themoviedb.org";

/// Normalizes trending titles into display records
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    kind: MediaKind,
    image_base: String,
    launch_links: bool,
}

impl RecordBuilder {
    pub fn new(kind: MediaKind, image_base: impl Into<String>, launch_links: bool) -> Self {
        Self {
            kind,
            image_base: image_base.into(),
            launch_links,
        }
    }

    pub fn build(&self, title: AvailableTitle) -> DisplayRecord {
        let AvailableTitle {
            id,
            item,
            providers,
        } = title;

        let poster_url = item
            .poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", self.image_base, path));

        // Only the first provider is consulted, even if it has no app.
        let launch_app_id = if self.launch_links {
            providers
                .first()
                .and_then(|p| provider_catalog::launch_app_for(p))
                .map(str::to_string)
        } else {
            None
        };

        DisplayRecord {
            id,
            title: item
                .display_title(self.kind)
                .unwrap_or(UNKNOWN_TITLE)
                .to_string(),
            overview: truncate_overview(item.overview.as_deref().unwrap_or_default()),
            rating: round_rating(item.vote_average),
            date: item.date(self.kind).unwrap_or(UNKNOWN_DATE).to_string(),
            poster_url,
            tmdb_url: format!("{}/{}/{}", TMDB_WEB_URL, self.kind.path_segment(), id),
            providers,
            launch_app_id,
        }
    }
}

/// Cuts an overview to [`OVERVIEW_MAX_CHARS`] characters, marking the cut
pub fn truncate_overview(overview: &str) -> String {
    if overview.chars().count() <= OVERVIEW_MAX_CHARS {
        return overview.to_string();
    }
    let mut truncated: String = overview.chars().take(OVERVIEW_MAX_CHARS).collect();
    truncated.push(OVERVIEW_ELLIPSIS);
    truncated
}

/// Rounds to one decimal; zero and missing ratings mean "not rated"
pub fn round_rating(vote_average: Option<f64>) -> Option<f64> {
    vote_average
        .filter(|v| v.is_finite() && *v != 0.0)
        .and_then(|v| format!("{:.1}", v).parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogItem;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

    fn movie(providers: &[&str]) -> AvailableTitle {
        AvailableTitle {
            id: 603,
            item: CatalogItem {
                id: Some(603),
                title: Some("The Matrix".to_string()),
                overview: Some("A hacker learns the truth.".to_string()),
                vote_average: Some(8.216),
                release_date: Some("1999-03-31".to_string()),
                poster_path: Some("/matrix.jpg".to_string()),
                ..Default::default()
            },
            providers: providers.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_build_movie_record() {
        let builder = RecordBuilder::new(MediaKind::Movie, IMAGE_BASE, true);
        let record = builder.build(movie(&["Max", "Hulu"]));

        assert_eq!(record.id, 603);
        assert_eq!(record.title, "The Matrix");
        assert_eq!(record.rating, Some(8.2));
        assert_eq!(record.date, "1999-03-31");
        assert_eq!(
            record.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/matrix.jpg")
        );
        assert_eq!(record.tmdb_url, "https://www.themoviedb.org/movie/603");
        assert_eq!(record.providers, vec!["Max", "Hulu"]);
        assert_eq!(record.launch_app_id.as_deref(), Some("com.webos.app.hbomax"));
    }

    #[test]
    fn test_build_tv_record_with_missing_fields() {
        let builder = RecordBuilder::new(MediaKind::Tv, IMAGE_BASE, false);
        let record = builder.build(AvailableTitle {
            id: 1399,
            item: CatalogItem {
                id: Some(1399),
                poster_path: Some(String::new()),
                ..Default::default()
            },
            providers: vec!["Netflix".to_string()],
        });

        assert_eq!(record.title, "Unknown Title");
        assert_eq!(record.overview, "");
        assert_eq!(record.rating, None);
        assert_eq!(record.rating_label(), "—");
        assert_eq!(record.date, "Unknown");
        assert_eq!(record.poster_url, None);
        assert_eq!(record.tmdb_url, "https://www.themoviedb.org/tv/1399");
        assert_eq!(record.launch_app_id, None);
    }

    #[test]
    fn test_tv_title_uses_name_fields() {
        let builder = RecordBuilder::new(MediaKind::Tv, IMAGE_BASE, false);
        let record = builder.build(AvailableTitle {
            id: 1,
            item: CatalogItem {
                title: Some("Ignored".to_string()),
                original_name: Some("Squid Game".to_string()),
                first_air_date: Some("2021-09-17".to_string()),
                ..Default::default()
            },
            providers: vec!["Netflix".to_string()],
        });
        assert_eq!(record.title, "Squid Game");
        assert_eq!(record.date, "2021-09-17");
    }

    #[test]
    fn test_launch_links_disabled() {
        let builder = RecordBuilder::new(MediaKind::Movie, IMAGE_BASE, false);
        assert_eq!(builder.build(movie(&["Netflix"])).launch_app_id, None);
    }

    #[test]
    fn test_launch_uses_first_provider_only() {
        let builder = RecordBuilder::new(MediaKind::Movie, IMAGE_BASE, true);
        assert_eq!(builder.build(movie(&["AMC+", "Netflix"])).launch_app_id, None);
        assert_eq!(
            builder.build(movie(&["Peacock", "Netflix"])).launch_app_id,
            None
        );
    }

    #[test]
    fn test_truncate_overview_boundary() {
        let exact = "a".repeat(260);
        assert_eq!(truncate_overview(&exact), exact);

        let long = "b".repeat(261);
        let truncated = truncate_overview(&long);
        assert_eq!(truncated, format!("{}…", "b".repeat(260)));
        assert_eq!(truncated.chars().count(), 261);
    }

    #[test]
    fn test_truncate_overview_counts_chars_not_bytes() {
        let overview = "é".repeat(261);
        let truncated = truncate_overview(&overview);
        assert!(truncated.starts_with(&"é".repeat(260)));
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_overview(&"é".repeat(260)), "é".repeat(260));
    }

    #[test]
    fn test_round_rating() {
        assert_eq!(round_rating(Some(7.86)), Some(7.9));
        assert_eq!(round_rating(Some(6.0)), Some(6.0));
        assert_eq!(round_rating(Some(0.0)), None);
        assert_eq!(round_rating(None), None);
        assert_eq!(round_rating(Some(f64::NAN)), None);
        // Rounds the stored binary value, so halves below the cut go down
        assert_eq!(round_rating(Some(7.35)), Some(7.3));
        assert_eq!(round_rating(Some(7.25)), Some(7.2));
        assert_eq!(round_rating(Some(5.55)), Some(5.5));
    }
}
