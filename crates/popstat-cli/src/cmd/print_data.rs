//! print-data subcommand - per-region population statistics

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use comfy_table::{
    Cell, CellAlignment, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};

use popstat_core::{ABSENT, RegionSummary, fmt_num};
use popstat_db::Store;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct PrintDataArgs {
    /// DuckDB database file; overrides config
    #[arg(short, long)]
    pub database: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One value per line, regions separated by a dashed rule
    Plain,
    Table,
    Json,
}

pub fn run(args: PrintDataArgs, config: &Config) -> Result<()> {
    let database = args
        .database
        .unwrap_or_else(|| config.database.path.clone());

    let store = Store::open(&database)?;
    let summaries = store.region_summaries()?;
    drop(store);
    log::debug!("{} regions in {database}", summaries.len());

    if summaries.is_empty() {
        log::info!("No countries stored in {database}");
    }

    match args.format {
        OutputFormat::Plain => print!("{}", render_plain(&summaries)),
        OutputFormat::Table => {
            if !summaries.is_empty() {
                println!("{}", render_table(&summaries));
            }
        }
        OutputFormat::Json => println!("{}", render_json(&summaries)?),
    }
    Ok(())
}

/// Six lines per region followed by a 40-dash separator.
pub fn render_plain(summaries: &[RegionSummary]) -> String {
    let mut out = String::new();
    for s in summaries {
        for line in [
            s.region.clone(),
            s.total_population.to_string(),
            s.largest_country().to_string(),
            s.largest_population(),
            s.smallest_country().to_string(),
            s.smallest_population(),
            "-".repeat(40),
        ] {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

pub fn render_table(summaries: &[RegionSummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Region").fg(Color::Cyan),
            Cell::new("Total").fg(Color::Cyan),
            Cell::new("Largest").fg(Color::Cyan),
            Cell::new("Population").fg(Color::Cyan),
            Cell::new("Smallest").fg(Color::Cyan),
            Cell::new("Population").fg(Color::Cyan),
        ]);

    let population_cell = |p: Option<u64>| match p {
        Some(p) => Cell::new(fmt_num(p)).set_alignment(CellAlignment::Right),
        None => Cell::new(ABSENT).fg(Color::DarkGrey),
    };

    for s in summaries {
        table.add_row(vec![
            Cell::new(&s.region),
            Cell::new(fmt_num(s.total_population)).set_alignment(CellAlignment::Right),
            Cell::new(s.largest_country()),
            population_cell(s.largest.as_ref().map(|c| c.population)),
            Cell::new(s.smallest_country()),
            population_cell(s.smallest.as_ref().map(|c| c.population)),
        ]);
    }
    table
}

pub fn render_json(summaries: &[RegionSummary]) -> Result<String> {
    serde_json::to_string_pretty(summaries).context("Failed to serialize region summaries")
}
