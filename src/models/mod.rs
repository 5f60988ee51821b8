use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display, str::FromStr};

pub mod provider_catalog;
pub mod record;

pub use record::{DisplayRecord, Snapshot};

/// Kind of catalog entry a snapshot is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Tv,
    Movie,
}

impl MediaKind {
    /// Path segment used by the TMDB API and website
    pub fn path_segment(&self) -> &'static str {
        match self {
            MediaKind::Tv => "tv",
            MediaKind::Movie => "movie",
        }
    }

    /// Key the record list is stored under in the JSON snapshot
    pub fn collection_key(&self) -> &'static str {
        match self {
            MediaKind::Tv => "shows",
            MediaKind::Movie => "movies",
        }
    }

    /// Key the date is stored under in each JSON record
    pub fn date_key(&self) -> &'static str {
        match self {
            MediaKind::Tv => "first_air_date",
            MediaKind::Movie => "release_date",
        }
    }
}

impl FromStr for MediaKind {
    type Err = String;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tv" => Ok(MediaKind::Tv),
            "movie" => Ok(MediaKind::Movie),
            other => Err(format!("unknown media kind '{}'", other)),
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Response from GET /trending/{kind}/day
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub results: Vec<CatalogItem>,
}

/// A single trending entry. TV entries carry `name`/`first_air_date`,
/// movie entries carry `title`/`release_date`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl CatalogItem {
    /// Display title for the given kind, falling back to the original title
    pub fn display_title(&self, kind: MediaKind) -> Option<&str> {
        let (primary, original) = match kind {
            MediaKind::Tv => (&self.name, &self.original_name),
            MediaKind::Movie => (&self.title, &self.original_title),
        };
        non_empty(primary).or_else(|| non_empty(original))
    }

    /// First-air date for TV, release date for movies
    pub fn date(&self, kind: MediaKind) -> Option<&str> {
        match kind {
            MediaKind::Tv => non_empty(&self.first_air_date),
            MediaKind::Movie => non_empty(&self.release_date),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Response from GET /{kind}/{id}/watch/providers, keyed by region code
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchProvidersResponse {
    #[serde(default)]
    pub results: HashMap<String, RegionAvailability>,
}

/// Availability tiers for one region
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RegionAvailability {
    #[serde(default)]
    pub flatrate: Option<Vec<ProviderEntry>>,
    #[serde(default)]
    pub buy: Option<Vec<ProviderEntry>>,
    #[serde(default)]
    pub rent: Option<Vec<ProviderEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProviderEntry {
    #[serde(default)]
    pub provider_name: Option<String>,
}

#[cfg(test)]
impl ProviderEntry {
    pub fn named(name: &str) -> Self {
        Self {
            provider_name: Some(name.to_string()),
        }
    }
}
