// src/specs/dialogue.rs
//! Dialogue Fetcher: one NPC page → `message -> occurrence count`.
//!
//! Page shape: first table, header row, then `<td>message</td><td>count</td>`
//! rows with comma-grouped counts (`1,234`).
//!
//! Outcomes:
//! - `Ok(Some(table))`: page read fine.
//! - `Ok(None)`: the request failed or the page has no table. Logged here;
//!   the caller records "no dialogue" and moves on.
//! - `Err(Parse)`: a row is short or a count is not a number. Never coerced,
//!   a bogus count would skew the frequency filter.

use indexmap::IndexMap;

use crate::config::options::ScrapeOptions;
use crate::core::Fetch;
use crate::core::sanitize::parse_count;
use crate::error::{Result, ScrapeError};

use super::rows::parse_rows;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogueTable {
    /// Raw message text → count, in first-seen row order.
    /// A repeated message keeps its first position and takes the later count.
    pub lines: IndexMap<String, u64>,
    /// Sum of `chars().count()` over every row read, repeats included.
    pub total_chars: usize,
}

pub fn fetch_dialogue(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    entity: &str,
) -> Result<Option<DialogueTable>> {
    let url = opts.entity_url(entity);
    let doc = match fetcher.fetch(&url) {
        Ok(doc) => doc,
        Err(e) => {
            logw!("HTTP request failed while scraping '{entity}': {e}");
            return Ok(None);
        }
    };

    let table = parse_dialogue(&doc, entity, &url)?;
    if table.is_none() {
        logw!("Could not find dialog for '{entity}' at {url}");
    }
    Ok(table)
}

/// Offline half of [`fetch_dialogue`]. `entity`/`url` only feed error messages.
pub fn parse_dialogue(doc: &str, entity: &str, url: &str) -> Result<Option<DialogueTable>> {
    let Some(rows) = parse_rows(doc) else {
        return Ok(None);
    };

    let mut table = DialogueTable::default();
    for (i, row) in rows.into_iter().enumerate() {
        let mut cells = row.into_iter();
        let (Some(message), Some(count_raw)) = (cells.next(), cells.next()) else {
            return Err(ScrapeError::parse(format!(
                "'{entity}' ({url}) row {}: expected message and count cells",
                i + 1
            )));
        };

        let count = parse_count(&count_raw).ok_or_else(|| {
            ScrapeError::parse(format!(
                "'{entity}' ({url}) row {}: malformed count {count_raw:?}",
                i + 1
            ))
        })?;

        table.total_chars += message.chars().count();
        table.lines.insert(message, count);
    }

    Ok(Some(table))
}
