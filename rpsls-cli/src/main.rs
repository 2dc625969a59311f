//! RPSLS CLI - Command-line interface
//!
//! Commands:
//! - play: Play against the adaptive opponent on the console
//! - auto: Run a scripted player against the opponent
//! - benchmark: Compare the active and deactivated opponent across styles

mod auto_cmd;
mod benchmark;
mod play_cmd;
mod report;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rpsls")]
#[command(about = "Rock-Paper-Scissors-Lizard-Spock against a pattern-inferring opponent")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively on the console
    Play(play_cmd::PlayArgs),
    /// Play a scripted player against the opponent
    Auto(auto_cmd::AutoArgs),
    /// Measure the opponent's win rate against every scripted style
    Benchmark(benchmark::BenchmarkArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so console play stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Auto(args) => auto_cmd::run(args, cli.seed),
        Commands::Benchmark(args) => benchmark::run(args, cli.seed),
    }
}
