// src/config/consts.rs

// Net config
pub const LISTING_URL: &str = "https://chisel.weirdgloop.org/dialogue/";
pub const ENTITY_URL_TMPL: &str = "https://chisel.weirdgloop.org/dialogue/npcs/{entity}";
pub const ENTITY_PLACEHOLDER: &str = "{entity}";
pub const USER_AGENT: &str = concat!("dialogue_scrape/", env!("CARGO_PKG_VERSION"));

// Scrape
pub const DEFAULT_THRESHOLD: u64 = 15;
pub const REQUEST_PAUSE_MS: u64 = 0; // sequential already; raise to be polite

// Documents
pub const TRANSCRIPT_FIELD: &str = "transcript";
pub const DEFAULT_TRANSCRIPTS_FILE: &str = "transcripts.json";
pub const DEFAULT_SORTED_FILE: &str = "transcripts_sorted.json";
pub const JSON_INDENT: &[u8] = b"    ";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "info";
