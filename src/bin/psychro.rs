//! Command-line psychrometric reports.
//!
//! - `psychro state`: the full property report for one sample.
//! - `psychro batch`: derived states for every row of a station file, as CSV.

#[path = "psychro/commands.rs"]
mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Psychrometric properties of moist air.
#[derive(Parser)]
#[command(name = "psychro")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Psychrometric properties of moist air", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the state of a single sample
    State(commands::state::StateArgs),
    /// Compute states for every row of a station file
    Batch(commands::batch::BatchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::State(args) => commands::state::execute(&args),
        Commands::Batch(args) => commands::batch::execute(&args),
    }
}
