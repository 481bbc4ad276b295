// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// What to fetch and how to filter it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub listing_url: String,
    /// Per-entity page; `{entity}` is replaced verbatim by the identifier.
    pub entity_url_tmpl: String,
    /// Messages are kept only when their count is strictly greater than this.
    pub threshold: u64,
    /// Transport timeout per request. `None` leaves the client default.
    pub timeout: Option<Duration>,
    /// Sleep between entity requests.
    pub request_pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            entity_url_tmpl: ENTITY_URL_TMPL.to_string(),
            threshold: DEFAULT_THRESHOLD,
            timeout: None,
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl ScrapeOptions {
    pub fn entity_url(&self, entity: &str) -> String {
        self.entity_url_tmpl.replace(ENTITY_PLACEHOLDER, entity)
    }
}

/// Where the two documents go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub transcripts_path: PathBuf,
    pub sorted_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            transcripts_path: PathBuf::from(DEFAULT_TRANSCRIPTS_FILE),
            sorted_path: PathBuf::from(DEFAULT_SORTED_FILE),
        }
    }
}
