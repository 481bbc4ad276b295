// src/bin/translate.rs
// Usage: translate <text> <source_lang> <target_lang>
use color_eyre::eyre::{Result, eyre};
use dialogue_scrape::{core::HttpFetcher, log, translate};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [text, source_lang, target_lang] = args.as_slice() else {
        return Err(eyre!("Usage: translate <text> <source_lang> <target_lang>"));
    };

    let fetcher = HttpFetcher::new(None)?;
    let translated = translate::translate(&fetcher, text, source_lang, target_lang)?;
    println!("Translated text: {translated}");
    Ok(())
}
