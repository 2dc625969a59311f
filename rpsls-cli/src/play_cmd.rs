//! Play command - interactive console game
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_console() - the round loop
//! - Level 3: read_throw() - prompting and input validation
//! - Level 4: welcome banner

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use rand::Rng;

use rpsls_core::{EngineConfig, InferenceEngine, Session, Throw};

use crate::report::{write_round, write_summary};

/// Typed instead of a throw to end the game
const SENTINEL: &str = "z";

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Disable pattern inference; the opponent throws at random
    #[arg(long)]
    pub no_ai: bool,
}

/// What the player typed
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Throw(Throw),
    Quit,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let config = if args.no_ai {
        EngineConfig::deactivated()
    } else {
        EngineConfig::active()
    };
    let engine = match seed {
        Some(s) => InferenceEngine::seeded(config, s),
        None => InferenceEngine::from_entropy(config),
    };

    tracing::info!("Starting console game ({:?})", engine.config().brain);

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_console(Session::new(engine), stdin.lock(), stdout.lock())
}

// ============================================================================
// LEVEL 2 - ROUND LOOP
// ============================================================================

/// Play until the sentinel or end of input, then print the summary
fn play_console<R: Rng, I: BufRead, W: Write>(
    mut session: Session<R>,
    mut input: I,
    mut out: W,
) -> Result<()> {
    write_welcome(&mut out).context("Failed to write welcome")?;

    loop {
        // Fixed before the player is asked
        session.commit_opponent();

        let throw = match read_throw(&mut input, &mut out)? {
            Input::Throw(t) => t,
            Input::Quit => break,
        };

        let round = session.submit_player(throw);
        write_round(&mut out, &round).context("Failed to write round")?;
    }

    if session.round_count() > 0 {
        write_summary(&mut out, &session.history().tally()).context("Failed to write summary")?;
    }
    out.flush()?;
    Ok(())
}

// ============================================================================
// LEVEL 3 - INPUT
// ============================================================================

/// Prompt until a valid throw or the sentinel; end of input quits
fn read_throw<I: BufRead, W: Write>(input: &mut I, out: &mut W) -> Result<Input> {
    loop {
        writeln!(out, "Make a throw.")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            return Ok(Input::Quit);
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case(SENTINEL) {
            return Ok(Input::Quit);
        }

        match line.parse::<Throw>() {
            Ok(throw) => return Ok(Input::Throw(throw)),
            Err(e) => {
                tracing::debug!("Rejected input: {}", e);
                writeln!(out, "Throw is invalid. You must enter either r, p, s, l, or k.")?;
            }
        }
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn write_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Play Rock Paper Scissors Lizard Spock against an adaptive opponent.")?;
    writeln!(out, "\"Scissors cuts Paper covers Rock crushes")?;
    writeln!(out, "Lizard poisons Spock smashes Scissors")?;
    writeln!(out, "decapitates Lizard eats Paper disproves")?;
    writeln!(out, "Spock vaporizes Rock crushes Scissors.\"")?;
    writeln!(out, "Enter r for rock, p for paper, s for scissors,")?;
    writeln!(out, "l for lizard, k for spock, or {} to stop.", SENTINEL)
}

// ============================================================================
// TESTS
// ============================================================================
