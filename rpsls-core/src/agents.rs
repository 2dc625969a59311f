//! Pattern agents - one per hypothesis about the player's behaviour
//!
//! Every agent is scored on the last two recorded rounds: it looks at the
//! round before last, predicts what the player threw in the last round, and
//! keeps a streak of consecutive correct predictions. When asked, it suggests
//! the throw that beats the player's next throw under its hypothesis.

use serde::{Deserialize, Serialize};

use crate::record::Round;
use crate::throws::Throw;

/// The three hypotheses the engine tracks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    /// Player keeps repeating the same throw
    FixedRepeat,
    /// Player steps through Rock -> Paper -> Scissors -> Lizard -> Spock
    CyclicRotation,
    /// Player copies the opponent's previous throw
    MirrorLag,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [
        AgentKind::FixedRepeat,
        AgentKind::CyclicRotation,
        AgentKind::MirrorLag,
    ];

    /// Rank used to break streak ties (higher wins)
    pub fn priority(self) -> u8 {
        match self {
            AgentKind::FixedRepeat => 0,
            AgentKind::CyclicRotation => 1,
            AgentKind::MirrorLag => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AgentKind::FixedRepeat => "fixed-repeat",
            AgentKind::CyclicRotation => "cyclic-rotation",
            AgentKind::MirrorLag => "mirror-lag",
        }
    }
}

/// A hypothesis tracker with its correctness streak
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternAgent {
    kind: AgentKind,
    streak: u32,
}

impl PatternAgent {
    pub fn new(kind: AgentKind) -> Self {
        Self { kind, streak: 0 }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub(crate) fn bump_streak(&mut self) {
        self.streak += 1;
    }

    pub(crate) fn reset_streak(&mut self) {
        self.streak = 0;
    }

    /// Guess the player's most recent throw from the round before it.
    ///
    /// `second_to_last` must be the match history's second-to-last entry
    /// (`MatchHistory::back(1)`). The mirror-lag agent reads only that
    /// recorded round's opponent throw, so none of the agents can peek at
    /// the throw being predicted.
    pub fn predict_last_player_throw(&self, second_to_last: &Round) -> Throw {
        match self.kind {
            AgentKind::FixedRepeat => second_to_last.player,
            AgentKind::CyclicRotation => second_to_last.player.next_in_cycle(),
            AgentKind::MirrorLag => second_to_last.opponent,
        }
    }

    /// Throw that beats the player's next throw if the hypothesis holds.
    /// `last` is the history's last entry (`MatchHistory::last_round`).
    pub fn suggest_counter(&self, last: &Round) -> Throw {
        let expected = match self.kind {
            AgentKind::FixedRepeat => last.player,
            AgentKind::CyclicRotation => last.player.next_in_cycle(),
            AgentKind::MirrorLag => last.opponent,
        };
        expected.predator()
    }
}
