// chartgen: generate synthetic prediction-market chart data from the command line
use anyhow::Context;
use chart_engine::candles::convert_line_to_candlestick_data;
use chart_engine::config::ChartSettings;
use chart_engine::data::{write_candles_csv, write_series_csv, MarketCatalog};
use chart_engine::synth::ChartDataGenerator;
use chart_engine::time_range::{get_visible_time_range, visible_points};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use shared::models::{Series, TimePeriod};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chartgen", about = "Synthetic prediction-market chart data")]
struct Cli {
    /// JSON settings file; defaults apply to missing keys
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full history chart for a demo card
    Card {
        id: String,
        /// Aggregate into OHLC candles
        #[arg(long)]
        candles: bool,
        #[arg(long)]
        hours_per_candle: Option<u32>,
        /// Only emit points visible in this zoom period (15m, 1h, 6h, 1d, All)
        #[arg(long)]
        period: Option<TimePeriod>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Short sparkline ending near VALUE
    Sparkline {
        value: f64,
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        volatility: Option<f64>,
    },
    /// Visible range for a zoom period
    Range {
        period: TimePeriod,
        /// Latest point, unix seconds; defaults to now
        #[arg(long)]
        latest: Option<i64>,
    },
    /// List demo cards, optionally filtered by a search query
    Cards {
        #[arg(long)]
        query: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Serialize)]
struct CardSummary<'a> {
    id: &'a str,
    title: &'a str,
    provider: &'a str,
    yes: f64,
    no: f64,
}

fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn zoom(series: Vec<Series>, period: TimePeriod) -> Vec<Series> {
    series
        .into_iter()
        .map(|mut s| {
            if let Some(latest) = s.data.last().map(|p| p.time) {
                let range = get_visible_time_range(period, latest);
                s.data = visible_points(&s.data, range).to_vec();
            }
            s
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => ChartSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => ChartSettings::default(),
    };

    let mut generator = match cli.seed {
        Some(seed) => ChartDataGenerator::with_seed(settings, seed),
        None => ChartDataGenerator::new(settings),
    };

    match cli.command {
        Command::Card { id, candles, hours_per_candle, period, format } => {
            let catalog = MarketCatalog::with_demo_cards();
            let card = catalog.require(&id)?;
            info!(card_id = %card.id, title = %card.title, "Generating chart");

            let mut series = generator.card_chart(card);
            if let Some(period) = period {
                series = zoom(series, period);
            }

            if candles {
                let hours = hours_per_candle.unwrap_or(generator.settings().hours_per_candle);
                let candle_series = convert_line_to_candlestick_data(&series, hours);
                match format {
                    OutputFormat::Json => write_json(&candle_series)?,
                    OutputFormat::Csv => {
                        write_candles_csv(io::stdout().lock(), &candle_series)?;
                    }
                }
            } else {
                match format {
                    OutputFormat::Json => write_json(&series)?,
                    OutputFormat::Csv => {
                        write_series_csv(io::stdout().lock(), &series)?;
                    }
                }
            }
        }
        Command::Sparkline { value, days, volatility } => {
            let days = days.unwrap_or(generator.settings().sparkline_days);
            let volatility = volatility.unwrap_or(generator.settings().sparkline_volatility);
            write_json(&generator.sparkline_with(value, days, volatility))?;
        }
        Command::Range { period, latest } => {
            let latest = latest.unwrap_or_else(|| generator.now().timestamp());
            write_json(&get_visible_time_range(period, latest))?;
        }
        Command::Cards { query } => {
            let catalog = MarketCatalog::with_demo_cards();
            let cards = match query.as_deref() {
                Some(q) => catalog.search(q),
                None => catalog.all().iter().collect(),
            };
            let summaries: Vec<CardSummary> = cards
                .iter()
                .map(|c| CardSummary {
                    id: &c.id,
                    title: &c.title,
                    provider: c.provider.as_str(),
                    yes: c.yes_percentage,
                    no: c.no_percentage,
                })
                .collect();
            write_json(&summaries)?;
        }
    }

    Ok(())
}
