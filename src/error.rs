// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything the pipeline can fail with.
///
/// `Fetch` covers transport and status failures, `Parse` covers missing tables
/// and malformed fields, `Io`/`Json` cover the local documents.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("parse error: {context}")]
    Parse { context: String },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed document {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ScrapeError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch { url: url.into(), reason: reason.to_string() }
    }

    pub fn parse(context: impl Into<String>) -> Self {
        Self::Parse { context: context.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
