// src/reorder.rs
// Post-process pass: transcripts.json → transcripts_sorted.json.
// Runs standalone; never touches the input file.

use std::path::Path;

use crate::error::Result;
use crate::store::{self, SortedTranscriptDocument, TranscriptDocument};

/// Drop the raw messages and sort everything that's left.
///
/// Keys come out of a map, so each NPC's list is already duplicate-free;
/// no dedup is applied on top of the sort.
pub fn sort_transcripts(doc: &TranscriptDocument) -> SortedTranscriptDocument {
    let entities = doc
        .transcript
        .iter()
        .map(|(npc, lines)| {
            let mut keys: Vec<String> = lines.keys().cloned().collect();
            keys.sort_unstable();
            (npc.clone(), keys)
        })
        .collect();
    SortedTranscriptDocument { entities }
}

impl SortedTranscriptDocument {
    /// Sort an already-sorted document again. A no-op on anything
    /// `sort_transcripts` produced.
    pub fn resorted(mut self) -> Self {
        for keys in self.entities.values_mut() {
            keys.sort_unstable();
        }
        self
    }
}

/// Load `input`, sort it, write `output`. Returns the sorted document and
/// the number of bytes written.
pub fn reorder_file(input: &Path, output: &Path) -> Result<(SortedTranscriptDocument, u64)> {
    let doc = store::load_transcripts(input)?;
    let sorted = sort_transcripts(&doc);
    let bytes = store::save_sorted(&sorted, output)?;
    logf!(
        "Sorted {} NPCs from {} into {} ({bytes} bytes)",
        sorted.entities.len(),
        input.display(),
        output.display()
    );
    Ok((sorted, bytes))
}
