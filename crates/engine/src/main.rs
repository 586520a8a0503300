use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use engine::dashboards::d400_operations_overview::{
    report, DashboardSession, RandomSeriesGenerator, SeriesRepository,
};
use engine::shared::{config, logging};

#[derive(Parser)]
#[command(name = "engine")]
#[command(about = "Operations dashboard: resolve a window/granularity selection", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the one next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Reporting window in days: 7, 30 or 90
    #[arg(long)]
    window: Option<u32>,
    /// Revenue granularity: daily, weekly or monthly
    #[arg(long)]
    granularity: Option<String>,
    /// Seed for the synthetic daily series (overrides config)
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = config::load_config(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.generator.seed = cli.seed;
    }
    logging::init_tracing(&config.logging)?;
    tracing::info!(
        min_value = config.generator.min_value,
        max_value = config.generator.max_value,
        seeded = config.generator.seed.is_some(),
        "configuration loaded"
    );

    let mut generator = RandomSeriesGenerator::from_config(&config.generator)?;
    let repository = Arc::new(SeriesRepository::build(&mut generator));
    let mut session = DashboardSession::new(repository);

    // window first: selecting it resets granularity
    if let Some(days) = cli.window {
        session
            .on_raw_window(days)
            .context("--window rejected")?;
    }
    if let Some(code) = cli.granularity.as_deref() {
        let before = session.state();
        session
            .on_raw_granularity(code)
            .context("--granularity rejected")?;
        if session.state() == before && before.granularity().code() != code {
            tracing::warn!(
                granularity = code,
                window = before.window().days(),
                "granularity not available for this window, showing daily"
            );
        }
    }

    let view = session.view();
    match cli.format {
        OutputFormat::Text => print!("{}", report::build_report(&view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    Ok(())
}
