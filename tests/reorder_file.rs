// tests/reorder_file.rs
//
// The sort pass as a separate run over a persisted document.
//
use std::fs;

use dialogue_scrape::ScrapeError;
use dialogue_scrape::reorder::{reorder_file, sort_transcripts};
use dialogue_scrape::store::{self, KeyedLines, TranscriptDocument};

const INPUT: &str = r#"{
    "transcript": {
        "Zed": {
            "zzz": "Zzz...",
            "hello": "Hello!",
            "aye": "Aye."
        },
        "Amy": {},
        "Bob": {
            "hellothere": "Hello there!"
        }
    }
}"#;

#[test]
fn writes_sorted_document_and_keeps_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("transcripts.json");
    let output = dir.path().join("transcripts_sorted.json");
    fs::write(&input, INPUT).unwrap();

    let (sorted, bytes) = reorder_file(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&input).unwrap(), INPUT);
    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(bytes, text.len() as u64);
    assert_eq!(
        text,
        "{\n    \"Amy\": [],\n    \"Bob\": [\n        \"hellothere\"\n    ],\n    \"Zed\": [\n        \"aye\",\n        \"hello\",\n        \"zzz\"\n    ]\n}"
    );
    assert_eq!(store::load_sorted(&output).unwrap(), sorted);
}

#[test]
fn strict_order_and_no_duplicates() {
    let mut doc = TranscriptDocument::default();
    for npc in ["delta", "Alpha", "charlie", "Bravo"] {
        let lines: KeyedLines = ["k3", "k1", "k2", "k1"]
            .iter()
            .map(|k| (k.to_string(), npc.to_string()))
            .collect();
        doc.transcript.insert(npc.to_string(), lines);
    }

    let sorted = sort_transcripts(&doc);
    let npcs: Vec<_> = sorted.entities.keys().collect();
    assert!(npcs.windows(2).all(|w| w[0] < w[1]));
    for keys in sorted.entities.values() {
        assert_eq!(keys, &vec!["k1", "k2", "k3"]);
    }
    assert_eq!(sorted.clone().resorted(), sorted);
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = reorder_file(&dir.path().join("absent.json"), &dir.path().join("out.json")).unwrap_err();
    assert!(matches!(err, ScrapeError::Io { .. }));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn malformed_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("transcripts.json");
    for bad in ["not json", r#"{"Bob": {}}"#, r#"{"transcript": {"Bob": ["x"]}}"#] {
        fs::write(&input, bad).unwrap();
        let err = reorder_file(&input, &dir.path().join("out.json")).unwrap_err();
        assert!(matches!(err, ScrapeError::Json { .. }), "{bad}");
    }
}
