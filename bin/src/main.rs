//! tickbar CLI - Reproducible OHLCV bars from raw tick files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "tickbar")]
#[command(about = "Build OHLCV bars from raw tick files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of per-day tick files (*.csv with Timestamp,Price,Size columns)
    #[arg(short, long, default_value = "data", global = true)]
    data: PathBuf,

    /// Trading session open (HH:MM:SS); earlier ticks are dropped
    #[arg(long, default_value = "09:30:00", global = true)]
    open: String,

    /// Trading session close (HH:MM:SS, inclusive); later ticks are dropped
    #[arg(long, default_value = "16:00:00", global = true)]
    close: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build bars for one interval and time range
    Bars {
        /// Bar interval, e.g. 1m, 90s, 1h30m, 1d
        #[arg(short, long)]
        interval: String,

        /// Range start (YYYY-MM-DD HH:MM:SS, inclusive)
        #[arg(short, long)]
        start: String,

        /// Range end (YYYY-MM-DD HH:MM:SS, exclusive)
        #[arg(short, long)]
        end: String,

        /// Output file path. Defaults to ohlcv_<interval>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Build bars for every request in a JSON jobs file
    Batch {
        /// JSON array of {"interval", "start", "end", "output"?} requests
        jobs: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Maximum requests built concurrently
        #[arg(long, default_value = "4")]
        parallel: usize,
    },

    /// Clean the tick files and report what was dropped
    Clean {
        /// Also write the cleaned ticks to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format for cleaned ticks
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },
}

/// Installs the log subscriber; `RUST_LOG` overrides the flag-derived level.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let session = commands::parse_session(&cli.open, &cli.close)?;

    // Without a command, rebuild the standard set of RTH bars.
    let Some(command) = cli.command else {
        return commands::batch::reference_run(&cli.data, session, cli.quiet).await;
    };

    match command {
        Commands::Bars {
            interval,
            start,
            end,
            output,
            format,
        } => commands::bars::bars(
            &cli.data, session, &interval, &start, &end, output, format, cli.quiet,
        ),
        Commands::Batch {
            jobs,
            format,
            parallel,
        } => commands::batch::batch(&cli.data, session, &jobs, format, parallel, cli.quiet).await,
        Commands::Clean { output, format } => {
            commands::clean::clean(&cli.data, session, output, format, cli.quiet)
        }
    }
}
