//! get-data subcommand - fetch the population page and append its countries

use anyhow::{Context, Result};
use clap::Args;
use indicatif::ProgressBar;

use popstat_core::ProgressContext;
use popstat_db::Store;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct GetDataArgs {
    /// Page to load (http(s) URL or local file); overrides config
    #[arg(short, long)]
    pub url: Option<String>,

    /// DuckDB database file; overrides config
    #[arg(short, long)]
    pub database: Option<String>,
}

pub fn run(args: GetDataArgs, config: &Config, progress: &ProgressContext) -> Result<()> {
    let url = args.url.unwrap_or_else(|| config.source.url.clone());
    let database = args
        .database
        .unwrap_or_else(|| config.database.path.clone());

    let (stored, skipped) = with_spinner(progress.stage_line("fetch"), |pb| {
        pb.set_message(url.clone());
        log::info!("Fetching {url}");
        let html = popstat_core::fetch_document(&url, &config.http.fetch_config())
            .with_context(|| format!("Failed to fetch {url}"))?;
        log::debug!("Fetched {} bytes", html.len());

        pb.set_prefix("extract");
        let extraction = popstat_extract::extract_with(&html, &config.source.layout);
        if extraction.table_found && extraction.is_empty() {
            log::warn!("Table found but no rows could be extracted");
        }

        pb.set_prefix("store");
        pb.set_message(database.clone());
        let mut store = Store::open(&database)?;
        let stored = store.append(&extraction.records)?;
        Ok((stored, extraction.diagnostics.len()))
    })?;

    log::info!("Stored {stored} countries in {database} ({skipped} rows skipped)");
    println!("Loaded {stored} countries ({skipped} rows skipped)");
    Ok(())
}

/// Run `f` with the spinner on screen, clearing it whether or not `f` fails.
fn with_spinner<T>(pb: ProgressBar, f: impl FnOnce(&ProgressBar) -> Result<T>) -> Result<T> {
    let result = f(&pb);
    pb.finish_and_clear();
    result
}
