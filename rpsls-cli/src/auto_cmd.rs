//! Auto command - a scripted player against the opponent
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), report_results()
//! - Level 3: print_json_results(), print_text_results()
//! - Level 4: argument types

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use rpsls_core::BrainMode;
use rpsls_tournament::{play_match, MatchConfig, MatchResult, PlayerStyle};

use crate::report::{write_round, write_summary};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    Repeater,
    Rotator,
    Reflector,
    Randomizer,
    Mixer,
}

#[derive(Args)]
pub struct AutoArgs {
    /// Throwing style of the scripted player
    #[arg(long, value_enum, default_value = "randomizer")]
    pub style: StyleArg,

    /// Rounds the scripted player plays before ending the match
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Rounds the mixer keeps a method before switching (mixer only)
    #[arg(long, default_value = "25", value_parser = clap::value_parser!(u32).range(1..))]
    pub phase_length: u32,

    /// Disable pattern inference; the opponent throws at random
    #[arg(long)]
    pub no_ai: bool,

    /// Print every round
    #[arg(long)]
    pub show_rounds: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run auto command
pub fn run(args: AutoArgs, seed: Option<u64>) -> Result<()> {
    let config = build_config(&args, seed);

    tracing::info!(
        "Starting scripted match: {} for {} rounds ({:?})",
        config.style,
        config.rounds,
        config.brain
    );

    let result = play_match(&config);
    report_results(&result, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_config(args: &AutoArgs, seed: Option<u64>) -> MatchConfig {
    let style = match args.style {
        StyleArg::Repeater => PlayerStyle::Repeater,
        StyleArg::Rotator => PlayerStyle::Rotator,
        StyleArg::Reflector => PlayerStyle::Reflector,
        StyleArg::Randomizer => PlayerStyle::Randomizer,
        StyleArg::Mixer => PlayerStyle::Mixer {
            phase_length: args.phase_length,
        },
    };
    let brain = if args.no_ai {
        BrainMode::Deactivated
    } else {
        BrainMode::Active
    };

    let config = MatchConfig::new(style, args.rounds).with_brain(brain);
    match seed {
        Some(s) => config.with_seed(s),
        None => config,
    }
}

fn report_results(result: &MatchResult, args: &AutoArgs) -> Result<()> {
    if args.json {
        print_json_results(result, args.show_rounds)
    } else {
        print_text_results(result, args.show_rounds)
    }
}

// ============================================================================
// LEVEL 3 - OUTPUT
// ============================================================================

fn print_json_results(result: &MatchResult, show_rounds: bool) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        style: String,
        brain: BrainMode,
        rounds: usize,
        player_wins: usize,
        opponent_wins: usize,
        draws: usize,
        opponent_win_rate: f64,
        agent_decisions: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        history: Option<&'a [rpsls_core::Round]>,
    }

    let output = JsonOutput {
        style: result.style.to_string(),
        brain: result.brain,
        rounds: result.tally.total(),
        player_wins: result.tally.player_wins,
        opponent_wins: result.tally.opponent_wins,
        draws: result.tally.draws,
        opponent_win_rate: result.opponent_win_rate(),
        agent_decisions: result.agent_decisions,
        history: show_rounds.then(|| result.history.rounds()),
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

fn print_text_results(result: &MatchResult, show_rounds: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if show_rounds {
        for round in result.history.iter() {
            write_round(&mut out, round)?;
        }
    }

    writeln!(out, "\n=== Scripted Match ===")?;
    writeln!(out, "Player style:     {}", result.style)?;
    writeln!(out, "Opponent brain:   {:?}", result.brain)?;
    writeln!(out, "Agent decisions:  {}", result.agent_decisions)?;
    write_summary(&mut out, &result.tally)?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
