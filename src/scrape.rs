// src/scrape.rs
// Aggregator: drives the NPC loop, filters by threshold, builds the document.
use std::{thread, time::{Duration, Instant}};

use crate::{
    config::options::ScrapeOptions,
    core::{Fetch, sanitize::normalize_key},
    error::Result,
    progress::Progress,
    specs::{DialogueTable, fetch_dialogue, list_entities},
    store::{KeyedLines, TranscriptDocument},
};

/// Counters for one run. Rendered by `report`, never printed from here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// NPCs on the listing page.
    pub entities_total: usize,
    /// NPCs whose page was requested. Equals `entities_total` after a full run.
    pub entities_attempted: usize,
    /// NPCs whose page had a dialogue table.
    pub entities_succeeded: usize,
    /// NPCs recorded with no dialogue.
    pub entities_failed: usize,
    /// Lines that passed the threshold and made it into the document.
    pub messages_kept: usize,
    /// Characters over every row read, filtered or not.
    pub total_chars: usize,
    pub listing_elapsed: Duration,
    pub scrape_elapsed: Duration,
}

/// Keep lines with `count > threshold`, keyed by their normalized form.
///
/// Collisions: the line processed last, in source row order, wins.
pub fn filter_lines(table: &DialogueTable, threshold: u64) -> KeyedLines {
    let mut out = KeyedLines::new();
    for (message, &count) in &table.lines {
        if count > threshold {
            out.insert(normalize_key(message), message.clone());
        }
    }
    out
}

/// Full scrape: list NPCs, fetch each one in order, filter, assemble.
///
/// A listing failure aborts. A failed NPC fetch is recorded as empty dialogue.
/// A malformed count on an NPC page aborts, so a bad parse never reaches disk.
pub fn collect_transcripts(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(TranscriptDocument, RunStats)> {
    let mut stats = RunStats::default();

    let t0 = Instant::now();
    let entities = list_entities(fetcher, opts)?;
    stats.listing_elapsed = t0.elapsed();
    stats.entities_total = entities.len();
    logf!(
        "NPC scraping done: {} NPCs in {:.2}s",
        entities.len(),
        stats.listing_elapsed.as_secs_f64()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} NPCs to scrape.", entities.len()));
        p.begin(entities.len());
    }

    let mut doc = TranscriptDocument::default();
    let t1 = Instant::now();

    for (i, entity) in entities.iter().enumerate() {
        if i > 0 && !opts.request_pause.is_zero() {
            thread::sleep(opts.request_pause);
        }
        stats.entities_attempted += 1;

        let lines = match fetch_dialogue(fetcher, opts, entity)? {
            Some(table) => {
                stats.entities_succeeded += 1;
                stats.total_chars += table.total_chars;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(entity, table.total_chars, stats.total_chars);
                }
                filter_lines(&table, opts.threshold)
            }
            None => {
                stats.entities_failed += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(entity);
                }
                KeyedLines::new()
            }
        };
        stats.messages_kept += lines.len();
        logd!("'{entity}': kept {} lines", lines.len());

        // Duplicate NPC rows on the listing collapse onto one entry, last fetch wins
        doc.transcript.insert(entity.clone(), lines);
    }

    stats.scrape_elapsed = t1.elapsed();
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok((doc, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, u64)]) -> DialogueTable {
        let mut t = DialogueTable::default();
        for (m, c) in rows {
            t.total_chars += m.chars().count();
            t.lines.insert(m.to_string(), *c);
        }
        t
    }

    #[test]
    fn threshold_is_exclusive() {
        let t = table(&[("at", 15), ("above", 16), ("below", 2)]);
        let kept = filter_lines(&t, 15);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept.get("above").map(String::as_str), Some("above"));
    }

    #[test]
    fn custom_threshold() {
        let t = table(&[("a", 1), ("b", 0)]);
        assert_eq!(filter_lines(&t, 0).len(), 1);
        assert_eq!(filter_lines(&t, 1).len(), 0);
    }

    #[test]
    fn collision_last_row_wins() {
        let t = table(&[("Hi there", 20), ("Other", 40), ("hi, there!", 30)]);
        let kept = filter_lines(&t, 15);
        assert_eq!(kept.get("hithere").map(String::as_str), Some("hi, there!"));
        // Key keeps the position of its first insertion
        let keys: Vec<_> = kept.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["hithere", "other"]);
    }

    #[test]
    fn filtered_collision_does_not_overwrite() {
        let t = table(&[("Hi there", 20), ("hi there", 3)]);
        let kept = filter_lines(&t, 15);
        assert_eq!(kept.get("hithere").map(String::as_str), Some("Hi there"));
    }
}
