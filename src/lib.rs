//! Builds a static "what's trending and streamable" page from TMDB.
//!
//! Each run fetches the daily trending feed per media kind, keeps the titles
//! that have a subscription, purchase or rental provider in the configured
//! region, and writes a JSON snapshot plus an HTML page.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
