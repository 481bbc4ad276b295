// src/cli.rs
use std::{path::PathBuf, time::Duration};

use color_eyre::eyre::{Result, WrapErr, bail, eyre};

use crate::{
    config::{
        consts::{DEFAULT_SORTED_FILE, DEFAULT_TRANSCRIPTS_FILE, ENTITY_PLACEHOLDER},
        options::{AppOptions, ExportOptions, ScrapeOptions},
    },
    core::HttpFetcher,
    file::resolve_out_path,
    progress::ConsoleProgress,
    reorder, report, scrape, specs, store,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Scrape(AppOptions),
    Sort(ExportOptions),
    List(ScrapeOptions),
    Help,
}

pub fn run() -> Result<()> {
    let cmd = parse_args(std::env::args().skip(1))?;
    execute(cmd)
}

pub fn execute(cmd: Command) -> Result<()> {
    match cmd {
        Command::Help => {
            println!("{}", include_str!("cli_help.txt"));
            Ok(())
        }
        Command::List(opts) => {
            let fetcher = HttpFetcher::new(opts.timeout)?;
            for name in specs::list_entities(&fetcher, &opts)? {
                println!("{name}");
            }
            Ok(())
        }
        Command::Scrape(opts) => {
            let fetcher = HttpFetcher::new(opts.scrape.timeout)?;
            let mut progress = ConsoleProgress::default();
            let (doc, stats) = scrape::collect_transcripts(&fetcher, &opts.scrape, Some(&mut progress))
                .wrap_err("scrape aborted")?;

            let path = &opts.export.transcripts_path;
            let bytes = store::save_transcripts(&doc, path)?;
            for line in report::summary(&stats, path, bytes) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Sort(export) => {
            reorder::reorder_file(&export.transcripts_path, &export.sorted_path)?;
            println!("Sorted JSON saved to '{}'.", export.sorted_path.display());
            Ok(())
        }
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut args = args.into_iter();
    let sub = args.next().unwrap_or_else(|| "scrape".to_string());

    let mut opts = AppOptions::default();

    let kind = match sub.as_str() {
        "scrape" | "sort" | "list" => sub.clone(),
        "-h" | "--help" | "help" => return Ok(Command::Help),
        other => bail!("Unknown command: {other}"),
    };

    while let Some(a) = args.next() {
        match (kind.as_str(), a.as_str()) {
            (_, "-h" | "--help") => return Ok(Command::Help),
            ("scrape" | "sort", "-o" | "--out") => {
                let v = value_for(&a, &mut args)?;
                if kind == "scrape" {
                    opts.export.transcripts_path = resolve_out_path(&v, DEFAULT_TRANSCRIPTS_FILE);
                } else {
                    opts.export.sorted_path = resolve_out_path(&v, DEFAULT_SORTED_FILE);
                }
            }
            ("sort", "-i" | "--in") => {
                opts.export.transcripts_path = PathBuf::from(value_for(&a, &mut args)?);
            }
            ("scrape", "--threshold") => {
                let v = value_for(&a, &mut args)?;
                opts.scrape.threshold = v.parse().wrap_err_with(|| format!("Bad threshold: {v}"))?;
            }
            ("scrape", "--pause") => {
                let v = value_for(&a, &mut args)?;
                let ms: u64 = v.parse().wrap_err_with(|| format!("Bad pause: {v}"))?;
                opts.scrape.request_pause = Duration::from_millis(ms);
            }
            ("scrape" | "list", "--timeout") => {
                let v = value_for(&a, &mut args)?;
                let secs: f64 = v.parse().wrap_err_with(|| format!("Bad timeout: {v}"))?;
                if !(secs.is_finite() && secs > 0.0) {
                    bail!("Timeout must be a positive number of seconds");
                }
                opts.scrape.timeout = Some(Duration::from_secs_f64(secs));
            }
            ("scrape" | "list", "--listing-url") => {
                opts.scrape.listing_url = value_for(&a, &mut args)?;
            }
            ("scrape", "--entity-url") => {
                let v = value_for(&a, &mut args)?;
                if !v.contains(ENTITY_PLACEHOLDER) {
                    bail!("--entity-url must contain {ENTITY_PLACEHOLDER}");
                }
                opts.scrape.entity_url_tmpl = v;
            }
            _ => bail!("Unknown arg for {kind}: {a}"),
        }
    }

    Ok(match kind.as_str() {
        "scrape" => Command::Scrape(opts),
        "list" => Command::List(opts.scrape),
        _ => Command::Sort(opts.export),
    })
}

fn value_for(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String> {
    args.next().ok_or_else(|| eyre!("Missing value for {flag}"))
}
