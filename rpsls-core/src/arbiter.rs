//! Arbiter - decides rounds and records them

use crate::record::{MatchHistory, Outcome, Round};
use crate::throws::Throw;

/// Resolves throws against the relation table and is the only writer of
/// the match history.
#[derive(Clone, Copy, Debug, Default)]
pub struct Arbiter;

impl Arbiter {
    pub fn new() -> Self {
        Self
    }

    /// Decide a round. Pure; touches no history.
    pub fn resolve(opponent: Throw, player: Throw) -> Outcome {
        if opponent.prey().contains(&player) {
            Outcome::OpponentWins
        } else if opponent.predators().contains(&player) {
            Outcome::PlayerWins
        } else {
            Outcome::Draw
        }
    }

    /// Append a decided round to the history.
    ///
    /// The stored outcome always agrees with the relation table; a claimed
    /// outcome that contradicts it is replaced and logged.
    pub fn record_round(
        &self,
        history: &mut MatchHistory,
        opponent: Throw,
        player: Throw,
        outcome: Outcome,
    ) -> Round {
        let resolved = Self::resolve(opponent, player);
        if resolved != outcome {
            tracing::warn!(
                "Rejected outcome {:?} for {} vs {}; recording {:?}",
                outcome,
                opponent,
                player,
                resolved
            );
        }
        let round = Round {
            opponent,
            player,
            outcome: resolved,
        };
        history.push(round);
        round
    }

    /// Resolve and record in one step
    pub fn decide_and_record(
        &self,
        history: &mut MatchHistory,
        opponent: Throw,
        player: Throw,
    ) -> Round {
        let outcome = Self::resolve(opponent, player);
        self.record_round(history, opponent, player, outcome)
    }
}
