// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific readers for the dialogue site. Each spec knows *where the data
//! lives in the HTML* and how to shape it; none of them cache, filter by
//! threshold or write files.
//!
//! ```text
//! scrape::collect_transcripts → specs::entities::list_entities
//!                             → specs::dialogue::fetch_dialogue (per NPC)
//!                                   ↘ specs::rows::parse_rows
//! ```
//!
//! Every spec has an offline `parse_*` half so it can be tested against saved
//! markup without a network.
pub mod dialogue;
pub mod entities;
pub mod rows;

pub use dialogue::{DialogueTable, fetch_dialogue};
pub use entities::list_entities;
