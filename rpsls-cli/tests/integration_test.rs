//! Integration tests for the RPSLS opponent
//!
//! Tests the full stack: relation table, arbiter, session, engine and
//! scripted players

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rpsls_core::{
    AgentKind, Arbiter, BrainMode, EngineConfig, InferenceEngine, MatchHistory, Outcome, Session,
    Source, Throw, WARM_UP_ROUNDS,
};
use rpsls_tournament::{play_match, MatchConfig, PlayerStyle, ScriptedPlayer};

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Play a scripted player against a seeded session
fn scripted_session(style: PlayerStyle, rounds: usize, seed: u64) -> Session {
    let mut session = Session::seeded(EngineConfig::default(), seed);
    let mut player = ScriptedPlayer::seeded(style, seed.wrapping_add(100));
    for _ in 0..rounds {
        session.commit_opponent();
        let throw = player.next_throw(session.history());
        session.submit_player(throw);
    }
    session
}

// ============================================================================
// RELATION TABLE
// ============================================================================

#[test]
fn test_every_throw_has_two_prey_and_two_predators() {
    for t in Throw::ALL {
        let beaten: Vec<_> = Throw::ALL.iter().filter(|&&o| t.beats(o)).collect();
        let beating: Vec<_> = Throw::ALL.iter().filter(|&&o| o.beats(t)).collect();
        assert_eq!(beaten.len(), 2, "{}", t);
        assert_eq!(beating.len(), 2, "{}", t);
    }
}

#[test]
fn test_end_to_end_outcomes() {
    let mut history = MatchHistory::new();
    let arbiter = Arbiter::new();

    let a = arbiter.decide_and_record(&mut history, Throw::Rock, Throw::Scissors);
    let b = arbiter.decide_and_record(&mut history, Throw::Rock, Throw::Spock);
    let c = arbiter.decide_and_record(&mut history, Throw::Lizard, Throw::Lizard);

    assert_eq!(a.outcome, Outcome::OpponentWins);
    assert_eq!(b.outcome, Outcome::PlayerWins);
    assert_eq!(c.outcome, Outcome::Draw);
    assert_eq!(history.round_count(), 3);
    assert_eq!(history.round(1), Some(&b));
}

#[test]
fn test_record_round_appends_in_order() {
    let mut history = MatchHistory::new();
    let arbiter = Arbiter::new();
    for (i, t) in Throw::ALL.iter().enumerate() {
        let outcome = Arbiter::resolve(*t, Throw::Paper);
        arbiter.record_round(&mut history, *t, Throw::Paper, outcome);
        assert_eq!(history.round_count(), i + 1);
    }
    let opponents: Vec<_> = history.iter().map(|r| r.opponent).collect();
    assert_eq!(opponents, Throw::ALL.to_vec());
}

// ============================================================================
// ENGINE AGAINST SCRIPTED STYLES
// ============================================================================

#[test]
fn test_engine_beats_repeater() {
    let session = scripted_session(PlayerStyle::Repeater, 300, 1);
    let tally = session.history().tally();
    assert!(tally.opponent_decisive_rate() > 98.0, "{:?}", tally);
}

#[test]
fn test_engine_beats_rotator() {
    let session = scripted_session(PlayerStyle::Rotator, 300, 2);
    let late = &session.history().rounds()[5..];
    assert!(late.iter().all(|r| r.outcome == Outcome::OpponentWins));
}

#[test]
fn test_engine_beats_reflector() {
    let session = scripted_session(PlayerStyle::Reflector, 300, 3);
    let late = &session.history().rounds()[5..];
    assert!(late.iter().all(|r| r.outcome == Outcome::OpponentWins));
    assert_eq!(session.engine().leader(), Some(AgentKind::MirrorLag));
}

#[test]
fn test_randomizer_stays_near_even() {
    let config = MatchConfig::new(PlayerStyle::Randomizer, 20_000).with_seed(4);
    let result = play_match(&config);
    let rate = result.opponent_win_rate();
    assert!((44.0..56.0).contains(&rate), "rate {}", rate);
}

#[test]
fn test_slow_mixer_mostly_beaten() {
    let mixer = PlayerStyle::Mixer { phase_length: 25 };
    let active = play_match(&MatchConfig::new(mixer, 5_000).with_seed(5));
    let baseline = play_match(
        &MatchConfig::new(mixer, 5_000)
            .with_brain(BrainMode::Deactivated)
            .with_seed(5),
    );
    assert!(active.opponent_win_rate() > baseline.opponent_win_rate() + 15.0);
}

// ============================================================================
// WARM-UP AND INJECTED RANDOMNESS
// ============================================================================

#[test]
fn test_first_rounds_are_warm_up() {
    let mut session = Session::seeded(EngineConfig::default(), 6);
    for _ in 0..WARM_UP_ROUNDS {
        assert_eq!(session.commit_opponent().source, Source::WarmUp);
        session.submit_player(Throw::Paper);
    }
    assert_ne!(session.commit_opponent().source, Source::WarmUp);
}

#[test]
fn test_injected_rng_reproduces_match() {
    let play = |seed: u64| {
        let engine =
            InferenceEngine::new(EngineConfig::default(), ChaCha8Rng::seed_from_u64(seed));
        let mut session = Session::new(engine);
        let mut player = ScriptedPlayer::seeded(PlayerStyle::Mixer { phase_length: 3 }, seed);
        for _ in 0..200 {
            session.commit_opponent();
            let throw = player.next_throw(session.history());
            session.submit_player(throw);
        }
        session.history().rounds().to_vec()
    };
    assert_eq!(play(8), play(8));
}
