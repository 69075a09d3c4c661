//! Outbreak CLI
//!
//! Command-line interface over the Outbreak library:
//! - Ranked country table
//! - Daily-change chart
//! - Summary tiles
//! - Country list
//! - Default config generation

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use outbreak::config::{generate_default_config, Config};
use outbreak::dashboard::{ChartData, Dashboard, SummaryTile};
use outbreak::logging;
use outbreak::model::{CountrySnapshot, Counts};
use outbreak::source::DiseaseShClient;
use outbreak::transform::{format_compact, pretty_print_stat, pretty_print_today};

/// Width of the longest chart bar, in characters
const BAR_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "outbreak")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pandemic statistics in the terminal")]
#[command(long_about = "Outbreak fetches current and historical case counts from disease.sh.\nRank countries, chart daily changes and check summary tiles.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Countries ranked by total, highest first
    Table {
        /// Metric to rank by (cases, recovered, deaths)
        #[arg(short, long)]
        metric: Option<String>,
        /// Rows to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Daily changes over the lookback window
    Chart {
        /// "worldwide" or a country name / ISO code
        #[arg(short = 'C', long)]
        country: Option<String>,
        /// Metric to chart (cases, recovered, deaths)
        #[arg(short, long)]
        metric: Option<String>,
    },

    /// Today and total for every metric
    Summary {
        /// "worldwide" or a country name / ISO code
        #[arg(short = 'C', long)]
        country: Option<String>,
    },

    /// List selectable countries
    Countries,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Wrote default config to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    logging::init(&config.logging);

    let source = Arc::new(DiseaseShClient::new(config.source.clone())?);
    let dashboard = Dashboard::new(source, config.dashboard.clone(), config.source.lookback_days);

    match cli.command {
        Commands::Table { metric, limit } => {
            let selection = dashboard.resolve(None, metric.as_deref())?;
            let mut rows = dashboard.table(selection.metric).await?;
            rows.truncate(limit);

            match cli.format {
                OutputFormat::Json => print_json(&rows)?,
                OutputFormat::Table => print_ranked(&rows, &selection.metric.to_string(), |c| {
                    pretty_print_stat(c.counts.total(selection.metric), dashboard.placeholder())
                }),
            }
        }

        Commands::Chart { country, metric } => {
            let selection = dashboard.resolve(country.as_deref(), metric.as_deref())?;
            let chart = dashboard.chart(&selection).await?;

            match cli.format {
                OutputFormat::Json => print_json(&chart)?,
                OutputFormat::Table => print_chart(&chart),
            }
        }

        Commands::Summary { country } => {
            let selection = dashboard.resolve(country.as_deref(), None)?;
            let current = dashboard.current(&selection.scope).await?;
            let counts = current.counts();
            let tiles = SummaryTile::build_all(counts, selection.metric, dashboard.placeholder());

            match cli.format {
                OutputFormat::Json => print_json(&tiles)?,
                OutputFormat::Table => {
                    print_tiles(current.display_name(), counts, &tiles, dashboard.placeholder())
                }
            }
        }

        Commands::Countries => {
            let options = dashboard.countries().await?;

            match cli.format {
                OutputFormat::Json => print_json(&options)?,
                OutputFormat::Table => {
                    println!("{:<40} {}", "Name", "Value");
                    println!("{}", "-".repeat(52));
                    for option in &options {
                        println!("{:<40} {}", option.name, option.value);
                    }
                }
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_ranked(rows: &[CountrySnapshot], column: &str, value: impl Fn(&CountrySnapshot) -> String) {
    if rows.is_empty() {
        println!("No countries reported");
        return;
    }

    println!("{:>4}  {:<32} {:>15}", "#", "Country", column);
    println!("{}", "-".repeat(53));

    for (i, row) in rows.iter().enumerate() {
        println!("{:>4}  {:<32} {:>15}", i + 1, row.name, value(row));
    }
}

fn print_chart(chart: &ChartData) {
    println!("{}", chart.label);

    if chart.is_empty() {
        println!("No data");
        return;
    }

    let peak = chart
        .points
        .iter()
        .map(|p| p.y.unsigned_abs())
        .max()
        .unwrap_or(0)
        .max(1);

    for (point, tooltip) in chart.points.iter().zip(&chart.tooltips) {
        let len = (point.y.unsigned_abs() as u128 * BAR_WIDTH as u128 / peak as u128) as usize;
        let bar = if point.y < 0 { "-" } else { "#" }.repeat(len);
        println!(
            "{:<10} {:>8} {:<width$} {}",
            point.x,
            format_compact(point.y),
            bar,
            tooltip,
            width = BAR_WIDTH
        );
    }
}

fn print_tiles(scope: &str, counts: &Counts, tiles: &[SummaryTile], placeholder: &str) {
    println!("Outbreak: {}", scope);
    println!("{:<20} {:>15} {:>15}", "", "Today", "Total");
    println!("{}", "-".repeat(52));

    for tile in tiles {
        let today = pretty_print_today(counts.today(tile.metric), placeholder);
        println!("{:<20} {:>15} {:>15}", tile.title, today, tile.total);
    }
}
