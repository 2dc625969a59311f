//! Inference engine - picks the opponent's throws
//!
//! After each completed round every pattern agent is re-scored against the
//! player's latest throw. The agent with the longest streak of correct
//! predictions decides the next throw; streak ties go to the higher-ranked
//! agent (mirror-lag, then cyclic-rotation, then fixed-repeat). With no
//! verified pattern, or during the two warm-up rounds, the throw is uniform.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::agents::{AgentKind, PatternAgent};
use crate::error::Result;
use crate::record::MatchHistory;
use crate::throws::Throw;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Rounds played at random before any agent has enough history
pub const WARM_UP_ROUNDS: usize = 2;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Whether the engine uses pattern inference at all
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrainMode {
    #[default]
    Active,
    /// Baseline: every throw is uniform random
    Deactivated,
}

/// Engine configuration
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    pub brain: BrainMode,
}

impl EngineConfig {
    pub fn active() -> Self {
        Self {
            brain: BrainMode::Active,
        }
    }

    pub fn deactivated() -> Self {
        Self {
            brain: BrainMode::Deactivated,
        }
    }

    pub fn with_brain(mut self, brain: BrainMode) -> Self {
        self.brain = brain;
        self
    }
}

/// Where a throw came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    WarmUp,
    /// No agent has a live streak
    Fallback,
    Agent(AgentKind),
    Deactivated,
}

/// A chosen throw and its provenance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub throw: Throw,
    pub source: Source,
}

// ============================================================================
// INFERENCE ENGINE
// ============================================================================

pub struct InferenceEngine<R = ChaCha8Rng> {
    config: EngineConfig,
    agents: [PatternAgent; 3],
    /// History length at the last analysis
    analyzed_through: usize,
    rng: R,
}

impl InferenceEngine<ChaCha8Rng> {
    pub fn seeded(config: EngineConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: EngineConfig) -> Self {
        Self::new(config, ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> InferenceEngine<R> {
    pub fn new(config: EngineConfig, rng: R) -> Self {
        Self {
            config,
            agents: AgentKind::ALL.map(PatternAgent::new),
            analyzed_through: 0,
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn agents(&self) -> &[PatternAgent] {
        &self.agents
    }

    pub fn agent(&self, kind: AgentKind) -> &PatternAgent {
        &self.agents[kind as usize]
    }

    /// Re-score every agent on the last two recorded rounds
    pub fn analyze(&mut self, history: &MatchHistory) -> Result<()> {
        let before = *history.back(1)?;
        let last = *history.back(0)?;

        for agent in &mut self.agents {
            let predicted = agent.predict_last_player_throw(&before);
            if predicted == last.player {
                agent.bump_streak();
            } else {
                agent.reset_streak();
            }
            tracing::trace!(
                "{}: predicted {}, player threw {}, streak {}",
                agent.kind().name(),
                predicted,
                last.player,
                agent.streak()
            );
        }

        self.analyzed_through = history.round_count();
        Ok(())
    }

    /// Agent with the strictly longest live streak, ties broken by priority
    pub fn leader(&self) -> Option<AgentKind> {
        self.agents
            .iter()
            .filter(|a| a.streak() > 0)
            .max_by_key(|a| (a.streak(), a.kind().priority()))
            .map(PatternAgent::kind)
    }

    /// Throw suggested by the current leader, or a uniform throw if none
    pub fn suggest(&mut self, history: &MatchHistory) -> Result<Decision> {
        let Some(kind) = self.leader() else {
            return Ok(Decision {
                throw: self.random_throw(),
                source: Source::Fallback,
            });
        };

        let last = history.last_round()?;
        Ok(Decision {
            throw: self.agent(kind).suggest_counter(last),
            source: Source::Agent(kind),
        })
    }

    /// Choose the opponent's next throw, honouring the warm-up rule.
    ///
    /// Agents are re-scored at most once per recorded round, so asking
    /// twice on the same history gives the same streaks.
    pub fn next_decision(&mut self, history: &MatchHistory) -> Decision {
        if self.config.brain == BrainMode::Deactivated {
            return Decision {
                throw: self.random_throw(),
                source: Source::Deactivated,
            };
        }

        let recorded = history.round_count();
        if recorded < WARM_UP_ROUNDS {
            return Decision {
                throw: self.random_throw(),
                source: Source::WarmUp,
            };
        }

        let analyzed = if self.analyzed_through == recorded {
            Ok(())
        } else {
            self.analyze(history)
        };

        let decision = match analyzed.and_then(|()| self.suggest(history)) {
            Ok(decision) => decision,
            Err(e) => {
                tracing::warn!("Falling back to random throw: {}", e);
                Decision {
                    throw: self.random_throw(),
                    source: Source::Fallback,
                }
            }
        };

        tracing::debug!(
            "Round {}: throwing {} ({:?})",
            recorded + 1,
            decision.throw,
            decision.source
        );
        decision
    }

    pub fn next_throw(&mut self, history: &MatchHistory) -> Throw {
        self.next_decision(history).throw
    }

    /// Uniform throw among the five
    pub fn random_throw(&mut self) -> Throw {
        Throw::from_index(self.rng.gen_range(0..Throw::ALL.len()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
