//! Match session - owns the history and sequences each round
//!
//! The opponent always commits its throw before the player's throw is
//! submitted, so the engine only ever sees completed rounds.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::arbiter::Arbiter;
use crate::engine::{Decision, EngineConfig, InferenceEngine};
use crate::record::{MatchHistory, Round};
use crate::throws::Throw;

pub struct Session<R = ChaCha8Rng> {
    history: MatchHistory,
    arbiter: Arbiter,
    engine: InferenceEngine<R>,
    pending: Option<Decision>,
}

impl Session<ChaCha8Rng> {
    pub fn seeded(config: EngineConfig, seed: u64) -> Self {
        Self::new(InferenceEngine::seeded(config, seed))
    }

    pub fn from_entropy(config: EngineConfig) -> Self {
        Self::new(InferenceEngine::from_entropy(config))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(engine: InferenceEngine<R>) -> Self {
        Self {
            history: MatchHistory::new(),
            arbiter: Arbiter::new(),
            engine,
            pending: None,
        }
    }

    /// Fix the opponent's throw for the coming round.
    ///
    /// Repeated calls before the player submits return the same decision.
    pub fn commit_opponent(&mut self) -> Decision {
        if let Some(decision) = self.pending {
            return decision;
        }
        let decision = self.engine.next_decision(&self.history);
        self.pending = Some(decision);
        decision
    }

    /// Resolve the player's throw against the committed opponent throw
    /// and record the round
    pub fn submit_player(&mut self, player: Throw) -> Round {
        let opponent = match self.pending.take() {
            Some(decision) => decision,
            None => self.engine.next_decision(&self.history),
        };
        self.arbiter
            .decide_and_record(&mut self.history, opponent.throw, player)
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn engine(&self) -> &InferenceEngine<R> {
        &self.engine
    }

    pub fn round_count(&self) -> usize {
        self.history.round_count()
    }
}
