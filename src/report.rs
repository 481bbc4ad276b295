// src/report.rs
use std::path::Path;

use crate::scrape::RunStats;

/// End-of-run summary, one line per entry.
pub fn summary(stats: &RunStats, path: &Path, bytes: u64) -> Vec<String> {
    vec![
        format!("NPC scraping done. Time elapsed: {:.2} seconds.", stats.listing_elapsed.as_secs_f64()),
        format!("Done scraping. Time elapsed: {:.2} seconds.", stats.scrape_elapsed.as_secs_f64()),
        format!(
            "NPCs with dialogue: {} ({} without), lines kept: {}",
            stats.entities_succeeded, stats.entities_failed, stats.messages_kept
        ),
        format!("Total characters: {}", stats.total_chars),
        format!("Transcripts saved to {}", path.display()),
        format!("File size: {bytes} bytes"),
        format!("Total scrapes done: {}/{}", stats.entities_attempted, stats.entities_total),
    ]
}
