// src/translate.rs
// Standalone text translation via the Google mobile translate page.
// Shares nothing with the scrape pipeline beyond the transport and HTML helpers.

use std::sync::LazyLock;

use reqwest::Url;
use scraper::Selector;

use crate::core::Fetch;
use crate::core::html::{first_text, parse_document};
use crate::error::{Result, ScrapeError};

const TRANSLATE_URL: &str = "https://translate.google.com/m";

// Current layout first, then the older `t0` block.
static RESULT: LazyLock<[Selector; 2]> = LazyLock::new(|| {
    [
        Selector::parse("div.result-container").expect("invalid selector: result-container"),
        Selector::parse("div.t0").expect("invalid selector: t0"),
    ]
});

pub fn build_url(text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
    Url::parse_with_params(
        TRANSLATE_URL,
        &[("sl", source_lang), ("tl", target_lang), ("q", text)],
    )
    .map(String::from)
    .map_err(|e| ScrapeError::parse(format!("bad translate URL: {e}")))
}

/// Text of the result container, entities decoded. `None` if the page has none.
pub fn extract_translation(doc: &str) -> Option<String> {
    let html = parse_document(doc);
    RESULT.iter().find_map(|sel| first_text(&html, sel))
}

pub fn translate(
    fetcher: &dyn Fetch,
    text: &str,
    source_lang: &str,
    target_lang: &str,
) -> Result<String> {
    let url = build_url(text, source_lang, target_lang)?;
    logd!("translate {source_lang} -> {target_lang}: {url}");
    let doc = fetcher.fetch(&url)?;
    extract_translation(&doc)
        .ok_or_else(|| ScrapeError::parse(format!("no translation found in response from {url}")))
}
