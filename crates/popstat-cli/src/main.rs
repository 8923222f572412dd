//! popstat - country population loader and regional report
//!
//! `get-data` fetches the UN population table and appends its countries to
//! a DuckDB file; `print-data` reports per-region totals and extremes.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "popstat")]
#[command(about = "Load country populations and report them by region")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./popstat.toml or ~/.config/popstat/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the population page and append its countries to the database
    GetData(cmd::get_data::GetDataArgs),
    /// Print population totals and extremes per region
    PrintData(cmd::print_data::PrintDataArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let progress = popstat_core::ProgressContext::new();

    // Logging:
    //   TTY:     quiet (warn) unless --debug  — spinner shows activity
    //   non-TTY: info unless --debug          — logs are the only progress indicator
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = is_tty && !cli.debug;
    popstat_core::init_logging(quiet, cli.debug, multi);

    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Command::GetData(args) => cmd::get_data::run(args, &config, &progress),
        Command::PrintData(args) => cmd::print_data::run(args, &config),
        Command::Config => {
            use comfy_table::{
                Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            let layout = &config.source.layout;
            table.add_row(vec!["Database", config.database.path.as_str()]);
            table.add_row(vec!["Source URL", config.source.url.as_str()]);
            table.add_row(vec!["Table class", layout.table_class.as_str()]);
            table.add_row(vec![
                "Header rows".to_string(),
                layout.header_rows.to_string(),
            ]);
            table.add_row(vec![
                "Columns (name/pop/region)".to_string(),
                format!(
                    "{}/{}/{}",
                    layout.name_column, layout.population_column, layout.region_column
                ),
            ]);
            table.add_row(vec![
                "HTTP timeout".to_string(),
                format!("{}s", config.http.timeout_secs),
            ]);
            table.add_row(vec!["User agent", config.http.user_agent.as_str()]);

            eprintln!("\n{table}");
            Ok(())
        }
    }
}
