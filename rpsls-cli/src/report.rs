//! Shared text reporting

use std::io::{self, Write};

use rpsls_core::{Outcome, Round, Tally};

/// Describe one finished round from the player's side
pub fn write_round<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Your opponent threw {}.", round.opponent)?;
    writeln!(out, "You threw {}.", round.player)?;
    let verdict = match round.outcome {
        Outcome::PlayerWins => "You won.",
        Outcome::OpponentWins => "You lost.",
        Outcome::Draw => "Draw.",
    };
    writeln!(out, "{}", verdict)?;
    writeln!(out, "(Your opponent threw first. It did not cheat.)")
}

/// Final summary of a match
pub fn write_summary<W: Write>(out: &mut W, tally: &Tally) -> io::Result<()> {
    let total = tally.total();
    writeln!(out)?;
    writeln!(out, "-------")?;
    writeln!(out, "Out of the {} rounds,", total)?;
    writeln!(
        out,
        "you won {} rounds ({:.2}%),",
        tally.player_wins,
        tally.percent_of_total(tally.player_wins)
    )?;
    writeln!(
        out,
        "lost {} rounds ({:.2}%),",
        tally.opponent_wins,
        tally.percent_of_total(tally.opponent_wins)
    )?;
    writeln!(
        out,
        "and played {} draws ({:.2}%).",
        tally.draws,
        tally.percent_of_total(tally.draws)
    )?;

    if tally.decisive() == 0 {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(
        out,
        "You won {:.2}% of the non-draw rounds, your opponent won {:.2}%.",
        tally.player_decisive_rate(),
        tally.opponent_decisive_rate()
    )?;
    if tally.player_decisive_rate() < 40.0 {
        writeln!(out)?;
        writeln!(out, "You won substantially less than half of the time.")?;
    }
    Ok(())
}
