//! Benchmark command - opponent effectiveness against every scripted style
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: report_results()
//! - Level 3: print_json_results(), print_text_results()
//! - Level 4: argument types

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use rpsls_tournament::{run_effectiveness, standard_styles, EffectivenessRow};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct BenchmarkArgs {
    /// Rounds per match
    #[arg(long, default_value = "10000", value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run benchmark command
pub fn run(args: BenchmarkArgs, seed: Option<u64>) -> Result<()> {
    let styles = standard_styles();
    let start = Instant::now();

    let rows = run_effectiveness(&styles, args.rounds, seed);

    tracing::info!(
        "Benchmark finished: {} matches in {:.2?}",
        rows.len() * 2,
        start.elapsed()
    );

    report_results(&rows, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn report_results(rows: &[EffectivenessRow], args: &BenchmarkArgs) -> Result<()> {
    if args.json {
        print_json_results(rows)
    } else {
        print_text_results(rows, args.rounds);
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - OUTPUT
// ============================================================================

fn print_json_results(rows: &[EffectivenessRow]) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonRow {
        style: String,
        active_win_rate: f64,
        deactivated_win_rate: f64,
        improvement: f64,
    }

    let output: Vec<JsonRow> = rows
        .iter()
        .map(|row| JsonRow {
            style: row.style.to_string(),
            active_win_rate: row.active.opponent_win_rate(),
            deactivated_win_rate: row.deactivated.opponent_win_rate(),
            improvement: row.improvement(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize benchmark")?;
    println!("{}", json);
    Ok(())
}

fn print_text_results(rows: &[EffectivenessRow], rounds: u32) {
    println!("\n=== Opponent Effectiveness ({} rounds per match) ===", rounds);
    println!("Win rates are over non-draw rounds.\n");
    println!("{:<20} {:>10} {:>12} {:>10}", "Style", "Active", "Deactivated", "Gain");
    for row in rows {
        println!(
            "{:<20} {:>9.2}% {:>11.2}% {:>+9.2}",
            row.style.to_string(),
            row.active.opponent_win_rate(),
            row.deactivated.opponent_win_rate(),
            row.improvement()
        );
    }
}
