//! CLI entry point for the gloom picks enrichment tool.
//!
//! One subcommand per marketplace; each takes the downloaded export and
//! writes the full data report plus the top-picks report.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gloom_picks::marketplace::Marketplace;
use gloom_picks::pipeline::{PipelineConfig, run};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gloom_picks")]
#[command(about = "Enrich marketplace listings with rarity data and pick the best deals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a MagicEden export (`{"results": [...]}`); the export is removed afterwards
    MagicEden(RunArgs),
    /// Process a Solanart export (`[...]`)
    Solanart(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Path to the downloaded export JSON
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Directory holding gloom-moonrank.json and glooms.db [default: zzz for MagicEden, data for Solanart]
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Moonrank JSON file, overrides the one in the data directory
    #[arg(long)]
    moonrank: Option<PathBuf>,

    /// Rarity SQLite store, overrides the one in the data directory
    #[arg(long)]
    rarity_db: Option<PathBuf>,

    /// Directory the CSV reports are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Do not remove the export after a successful run
    #[arg(long, default_value_t = false)]
    keep_input: bool,
}

impl RunArgs {
    fn into_config(self, marketplace: Marketplace) -> PipelineConfig {
        let mut config =
            PipelineConfig::new(marketplace, self.input).with_output_dir(self.output_dir);
        if let Some(dir) = self.data_dir {
            config = config.with_data_dir(dir);
        }
        if let Some(path) = self.moonrank {
            config = config.with_moonrank_path(path);
        }
        if let Some(path) = self.rarity_db {
            config = config.with_rarity_db_path(path);
        }
        if self.keep_input {
            config = config.keep_input();
        }
        config
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gloom_picks.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gloom_picks.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = match cli.command {
        Commands::MagicEden(args) => args.into_config(Marketplace::MagicEden),
        Commands::Solanart(args) => args.into_config(Marketplace::Solanart),
    };

    let summary = run(&config)?;

    info!(
        initial = summary.initial,
        processed = summary.processed,
        matched = summary.matched,
        picks = summary.picks,
        input_removed = summary.input_removed,
        "Run complete"
    );

    Ok(())
}
