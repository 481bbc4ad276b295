// src/store.rs
//! The two on-disk documents.
//!
//! `transcripts.json` (written by a scrape run):
//! ```json
//! { "transcript": { "<npc>": { "<normalized key>": "<raw message>" } } }
//! ```
//! NPCs and keys keep insertion order. Unknown top-level fields are rejected.
//!
//! `transcripts_sorted.json` (written by `reorder`):
//! ```json
//! { "<npc>": ["<normalized key>", "..."] }
//! ```
//! NPCs and keys in code-point order.
use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::file::{read_json, write_json_pretty};

/// normalized key → raw message
pub type KeyedLines = IndexMap<String, String>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptDocument {
    pub transcript: IndexMap<String, KeyedLines>,
}

impl TranscriptDocument {
    pub fn entity_count(&self) -> usize {
        self.transcript.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortedTranscriptDocument {
    pub entities: BTreeMap<String, Vec<String>>,
}

pub fn save_transcripts(doc: &TranscriptDocument, path: &Path) -> Result<u64> {
    let bytes = write_json_pretty(path, doc)?;
    logf!("Saved {} NPCs to {} ({bytes} bytes)", doc.entity_count(), path.display());
    Ok(bytes)
}

pub fn load_transcripts(path: &Path) -> Result<TranscriptDocument> {
    read_json(path)
}

pub fn save_sorted(doc: &SortedTranscriptDocument, path: &Path) -> Result<u64> {
    write_json_pretty(path, doc)
}

pub fn load_sorted(path: &Path) -> Result<SortedTranscriptDocument> {
    read_json(path)
}
