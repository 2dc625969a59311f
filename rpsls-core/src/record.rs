//! Round records and the append-only match history

use serde::{Deserialize, Serialize};

use crate::error::{Result, RpslsError};
use crate::throws::Throw;

/// Round outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    OpponentWins,
    PlayerWins,
    Draw,
}

impl Outcome {
    /// Outcome seen from the other side of the table
    pub fn inverse(self) -> Self {
        match self {
            Outcome::OpponentWins => Outcome::PlayerWins,
            Outcome::PlayerWins => Outcome::OpponentWins,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

/// A resolved exchange. Only the arbiter creates these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub opponent: Throw,
    pub player: Throw,
    pub outcome: Outcome,
}

/// Ordered log of completed rounds, oldest first
#[derive(Clone, Debug, Default, Serialize)]
pub struct MatchHistory {
    rounds: Vec<Round>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a round. Write access is reserved for the arbiter.
    pub(crate) fn push(&mut self, round: Round) {
        self.rounds.push(round);
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Round by chronological index
    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    pub fn last_round(&self) -> Result<&Round> {
        self.back(0)
    }

    /// Round `steps` places before the most recent one (`0` = most recent)
    pub fn back(&self, steps: usize) -> Result<&Round> {
        let recorded = self.rounds.len();
        if steps >= recorded {
            return Err(RpslsError::EmptyHistory {
                needed: steps + 1,
                recorded,
            });
        }
        Ok(&self.rounds[recorded - 1 - steps])
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter()
    }

    /// Count outcomes over the whole match
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for round in &self.rounds {
            match round.outcome {
                Outcome::PlayerWins => tally.player_wins += 1,
                Outcome::OpponentWins => tally.opponent_wins += 1,
                Outcome::Draw => tally.draws += 1,
            }
        }
        tally
    }
}

/// Outcome counts for a match
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.player_wins + self.opponent_wins + self.draws
    }

    pub fn decisive(&self) -> usize {
        self.player_wins + self.opponent_wins
    }

    /// Percentage of all rounds
    pub fn percent_of_total(&self, count: usize) -> f64 {
        percent(count, self.total())
    }

    /// Player's share of the non-draw rounds, in percent
    pub fn player_decisive_rate(&self) -> f64 {
        percent(self.player_wins, self.decisive())
    }

    /// Opponent's share of the non-draw rounds, in percent
    pub fn opponent_decisive_rate(&self) -> f64 {
        percent(self.opponent_wins, self.decisive())
    }
}

fn percent(count: usize, of: usize) -> f64 {
    if of == 0 {
        0.0
    } else {
        count as f64 / of as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(opponent: Throw, player: Throw, outcome: Outcome) -> Round {
        Round {
            opponent,
            player,
            outcome,
        }
    }

    #[test]
    fn test_empty_history() {
        let history = MatchHistory::new();
        assert_eq!(history.round_count(), 0);
        assert!(history.round(0).is_none());
        assert_eq!(
            history.last_round(),
            Err(RpslsError::EmptyHistory {
                needed: 1,
                recorded: 0
            })
        );
    }

    #[test]
    fn test_back_indexes_from_latest() {
        let mut history = MatchHistory::new();
        history.push(round(Throw::Rock, Throw::Paper, Outcome::PlayerWins));
        history.push(round(Throw::Spock, Throw::Spock, Outcome::Draw));

        assert_eq!(history.last_round().map(|r| r.opponent), Ok(Throw::Spock));
        assert_eq!(history.back(1).map(|r| r.player), Ok(Throw::Paper));
        assert!(matches!(
            history.back(2),
            Err(RpslsError::EmptyHistory { needed: 3, recorded: 2 })
        ));
        assert_eq!(history.round(0).map(|r| r.outcome), Some(Outcome::PlayerWins));
    }

    #[test]
    fn test_tally_rates() {
        let mut history = MatchHistory::new();
        history.push(round(Throw::Rock, Throw::Scissors, Outcome::OpponentWins));
        history.push(round(Throw::Rock, Throw::Lizard, Outcome::OpponentWins));
        history.push(round(Throw::Rock, Throw::Paper, Outcome::PlayerWins));
        history.push(round(Throw::Rock, Throw::Rock, Outcome::Draw));

        let tally = history.tally();
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.decisive(), 3);
        assert_eq!(tally.percent_of_total(tally.draws), 25.0);
        assert!((tally.opponent_decisive_rate() - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(Tally::default().player_decisive_rate(), 0.0);
    }

    #[test]
    fn test_round_json() {
        let r = round(Throw::Spock, Throw::Lizard, Outcome::PlayerWins);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"opponent":"Spock","player":"Lizard","outcome":"PlayerWins"}"#
        );
        let back: Round = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
