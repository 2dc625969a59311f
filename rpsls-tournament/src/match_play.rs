//! Match play - a scripted player against the engine
//!
//! Level 2 - Phase-level implementation

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rpsls_core::{BrainMode, EngineConfig, InferenceEngine, MatchHistory, Session, Source, Tally};
use serde::Serialize;

use crate::config::{MatchConfig, PlayerStyle};
use crate::players::ScriptedPlayer;

/// Result of a scripted match
#[derive(Clone, Debug, Serialize)]
pub struct MatchResult {
    pub style: PlayerStyle,
    pub brain: BrainMode,
    pub tally: Tally,
    /// Rounds whose opponent throw came from a pattern agent
    pub agent_decisions: usize,
    #[serde(skip)]
    pub history: MatchHistory,
}

impl MatchResult {
    /// Opponent's share of the non-draw rounds, in percent
    pub fn opponent_win_rate(&self) -> f64 {
        self.tally.opponent_decisive_rate()
    }
}

/// Play `config.rounds` rounds and collect the outcome
pub fn play_match(config: &MatchConfig) -> MatchResult {
    let (engine_rng, player_rng) = create_rngs(config.seed);
    let engine = InferenceEngine::new(
        EngineConfig::default().with_brain(config.brain),
        engine_rng,
    );
    let mut session = Session::new(engine);
    let mut player = ScriptedPlayer::new(config.style, player_rng);
    let mut agent_decisions = 0;

    tracing::debug!(
        "Starting match: {} (favourite {}) for {} rounds ({:?})",
        player.style(),
        player.favourite(),
        config.rounds,
        config.brain
    );

    for _ in 0..config.rounds {
        let decision = session.commit_opponent();
        if matches!(decision.source, Source::Agent(_)) {
            agent_decisions += 1;
        }
        let throw = player.next_throw(session.history());
        session.submit_player(throw);
    }

    let history = session.history().clone();
    let tally = history.tally();

    tracing::info!(
        "Match vs {} ({:?}): opponent {} / player {} / draws {}",
        config.style,
        config.brain,
        tally.opponent_wins,
        tally.player_wins,
        tally.draws
    );

    MatchResult {
        style: player.style(),
        brain: config.brain,
        tally,
        agent_decisions,
        history,
    }
}

/// Independent generators for the engine and the player
fn create_rngs(seed: Option<u64>) -> (ChaCha8Rng, ChaCha8Rng) {
    match seed {
        Some(s) => (
            ChaCha8Rng::seed_from_u64(s),
            ChaCha8Rng::seed_from_u64(s.wrapping_add(1)),
        ),
        None => (ChaCha8Rng::from_entropy(), ChaCha8Rng::from_entropy()),
    }
}
