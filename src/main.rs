//! CLI entry point for the track_trends tool.
//!
//! Loads a track dataset once, computes the dashboard aggregates, and then
//! writes them as JSON, CSV tables, or rendered SVG charts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use track_trends::{
    DashboardConfig, load_dashboard,
    output::{print_pretty, print_summary, write_json, write_matrix, write_records},
    render::write_site,
};

const DEFAULT_SOURCE: &str = "data/spotify_data_clean.csv";

#[derive(Parser)]
#[command(name = "track_trends")]
#[command(about = "Aggregate and chart a music track dataset", long_about = None)]
struct Cli {
    /// JSON file overriding year range, genre count, and chart sizes
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute all aggregates and write them to a JSON file
    Analyze {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL", default_value = DEFAULT_SOURCE)]
        source: String,

        /// JSON file to write the dashboard to
        #[arg(short, long, default_value = "dashboard.json")]
        output: PathBuf,
    },
    /// Write each aggregate as a CSV table
    Export {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL", default_value = DEFAULT_SOURCE)]
        source: String,

        /// Directory to write the CSV files into
        #[arg(short = 'd', long, default_value = "out")]
        output_dir: PathBuf,
    },
    /// Render the three charts as SVG plus an HTML page
    Render {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL", default_value = DEFAULT_SOURCE)]
        source: String,

        /// Directory to write the SVG and HTML files into
        #[arg(short = 'd', long, default_value = "site")]
        output_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/track_trends.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("track_trends.log"));

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
    let config = DashboardConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze { source, output } => analyze(&source, &output, &config).await?,
        Commands::Export { source, output_dir } => export(&source, &output_dir, &config).await?,
        Commands::Render { source, output_dir } => {
            let dashboard = load_dashboard(&source, &config).await?;
            let written = write_site(&dashboard, &config, &output_dir)?;
            info!(
                index = %output_dir.join("index.html").display(),
                files = written.len(),
                "Dashboard page ready"
            );
        }
    }

    Ok(())
}

/// Computes the dashboard and writes it as a single JSON document.
#[tracing::instrument(skip(output, config), fields(output = %output.display()))]
async fn analyze(source: &str, output: &Path, config: &DashboardConfig) -> Result<()> {
    let dashboard = load_dashboard(source, config).await?;

    print_pretty(&dashboard);
    print_summary(&dashboard);
    write_json(output, &dashboard)?;

    info!("Dashboard written");
    Ok(())
}

/// Writes the scatter points, yearly explicit stats, and genre matrix as CSV.
#[tracing::instrument(skip(output_dir, config), fields(output_dir = %output_dir.display()))]
async fn export(source: &str, output_dir: &Path, config: &DashboardConfig) -> Result<()> {
    let dashboard = load_dashboard(source, config).await?;

    std::fs::create_dir_all(output_dir)?;
    write_records(output_dir.join("scatter.csv"), &dashboard.scatter)?;
    write_records(
        output_dir.join("explicit_by_year.csv"),
        &dashboard.explicit_by_year,
    )?;
    write_matrix(output_dir.join("genre_stream.csv"), &dashboard.genre_stream)?;

    info!(
        points = dashboard.scatter.len(),
        years = dashboard.explicit_by_year.len(),
        genres = dashboard.genre_stream.genres.len(),
        "CSV tables exported"
    );
    Ok(())
}
