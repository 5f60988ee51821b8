use std::path::PathBuf;

use serde::{de, Deserialize, Deserializer};

use crate::{
    error::{AppError, AppResult},
    models::MediaKind,
};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key, sent as the `api_key` query parameter
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Prefix joined with a poster path to form the poster URL
    #[serde(default = "default_tmdb_image_base")]
    pub tmdb_image_base: String,

    /// Country code used for availability lookups
    #[serde(default = "default_region")]
    pub region: String,

    /// Maximum number of titles kept per snapshot
    #[serde(default = "default_trending_limit")]
    pub trending_limit: usize,

    /// Directory the snapshot files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Media kinds to snapshot, in run order
    #[serde(
        default = "default_media_kinds",
        deserialize_with = "deserialize_media_kinds"
    )]
    pub media_kinds: Vec<MediaKind>,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_base() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_region() -> String {
    "US".to_string()
}

fn default_trending_limit() -> usize {
    10
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_media_kinds() -> Vec<MediaKind> {
    vec![MediaKind::Tv, MediaKind::Movie]
}

/// Comma-separated kinds, e.g. `tv, Movie`; blank items are ignored
fn deserialize_media_kinds<'de, D>(deserializer: D) -> Result<Vec<MediaKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.split(',')
        .filter(|item| !item.trim().is_empty())
        .map(|item| item.parse::<MediaKind>().map_err(de::Error::custom))
        .collect()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.tmdb_api_key.trim().is_empty() {
            return Err(AppError::Config(
                "TMDB_API_KEY environment variable is not set".to_string(),
            ));
        }
        if self.region.trim().is_empty() {
            return Err(AppError::Config("REGION cannot be empty".to_string()));
        }
        Ok(())
    }
}
