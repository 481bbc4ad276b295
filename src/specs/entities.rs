// src/specs/entities.rs
//! Entity Lister: the NPC index page.
//!
//! One table, one NPC per data row, name in the first column. Row order is
//! kept and nothing is deduplicated. Any failure here is fatal for the run,
//! since there is nothing to iterate without it.

use crate::config::options::ScrapeOptions;
use crate::core::Fetch;
use crate::error::{Result, ScrapeError};

use super::rows::parse_rows;

pub fn list_entities(fetcher: &dyn Fetch, opts: &ScrapeOptions) -> Result<Vec<String>> {
    let url = &opts.listing_url;
    let doc = fetcher.fetch(url)?;
    parse_entities(&doc, url)
}

/// Offline half of [`list_entities`]; `url` is only used for error context.
pub fn parse_entities(doc: &str, url: &str) -> Result<Vec<String>> {
    let rows = parse_rows(doc)
        .ok_or_else(|| ScrapeError::parse(format!("NPC table not found at {url}")))?;

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.into_iter().next().ok_or_else(|| {
                ScrapeError::parse(format!("NPC table row {} at {url} has no cells", i + 1))
            })
        })
        .collect()
}
