// src/lib.rs
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod file;
pub mod progress;
pub mod reorder;
pub mod report;
pub mod scrape;
pub mod store;
pub mod translate;

pub use error::{Result, ScrapeError};
