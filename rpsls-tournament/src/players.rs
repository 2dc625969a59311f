//! Scripted players used to drive traffic against the engine
//!
//! Each player sees only the completed rounds, never the opponent's
//! committed throw for the current round.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rpsls_core::{MatchHistory, Throw};

use crate::config::PlayerStyle;

/// Throwing methods a mixer can switch between
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Repeat,
    Rotate,
    Reflect,
    Randomize,
}

const MIXER_METHODS: [Method; 4] = [
    Method::Repeat,
    Method::Rotate,
    Method::Reflect,
    Method::Randomize,
];

pub struct ScriptedPlayer {
    style: PlayerStyle,
    rng: ChaCha8Rng,
    /// Throw the repeat method sticks to, drawn once
    favourite: Throw,
    /// Next position in the rotation cycle
    rotation: usize,
    /// Mixer: active method and rounds left before switching
    method: Method,
    rounds_before_change: u32,
}

impl ScriptedPlayer {
    pub fn new(style: PlayerStyle, mut rng: ChaCha8Rng) -> Self {
        let favourite = Throw::from_index(rng.gen_range(0..Throw::ALL.len()));
        Self {
            style,
            rng,
            favourite,
            rotation: 0,
            method: Method::Randomize,
            rounds_before_change: 0,
        }
    }

    pub fn seeded(style: PlayerStyle, seed: u64) -> Self {
        Self::new(style, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn style(&self) -> PlayerStyle {
        self.style
    }

    pub fn favourite(&self) -> Throw {
        self.favourite
    }

    /// Produce this round's throw
    pub fn next_throw(&mut self, history: &MatchHistory) -> Throw {
        let method = match self.style {
            PlayerStyle::Repeater => Method::Repeat,
            PlayerStyle::Rotator => Method::Rotate,
            PlayerStyle::Reflector => Method::Reflect,
            PlayerStyle::Randomizer => Method::Randomize,
            PlayerStyle::Mixer { phase_length } => self.mixer_method(phase_length),
        };
        self.throw_with(method, history)
    }

    fn mixer_method(&mut self, phase_length: u32) -> Method {
        if self.rounds_before_change == 0 {
            self.method = MIXER_METHODS[self.rng.gen_range(0..MIXER_METHODS.len())];
            self.rounds_before_change = phase_length.max(1);
            tracing::trace!("Mixer switched to {:?}", self.method);
        }
        self.rounds_before_change -= 1;
        self.method
    }

    fn throw_with(&mut self, method: Method, history: &MatchHistory) -> Throw {
        match method {
            Method::Repeat => self.favourite,
            Method::Rotate => {
                let throw = Throw::from_index(self.rotation);
                self.rotation = (self.rotation + 1) % Throw::ALL.len();
                throw
            }
            Method::Reflect => match history.last_round() {
                Ok(last) => last.opponent,
                Err(_) => self.random_throw(),
            },
            Method::Randomize => self.random_throw(),
        }
    }

    fn random_throw(&mut self) -> Throw {
        Throw::from_index(self.rng.gen_range(0..Throw::ALL.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpsls_core::Arbiter;

    fn play(player: &mut ScriptedPlayer, opponent: &[Throw]) -> Vec<Throw> {
        let mut history = MatchHistory::new();
        let arbiter = Arbiter::new();
        opponent
            .iter()
            .map(|&o| {
                let p = player.next_throw(&history);
                arbiter.decide_and_record(&mut history, o, p);
                p
            })
            .collect()
    }

    #[test]
    fn test_repeater_sticks_to_favourite() {
        let mut player = ScriptedPlayer::seeded(PlayerStyle::Repeater, 1);
        let favourite = player.favourite();
        let throws = play(&mut player, &[Throw::Rock; 8]);
        assert!(throws.iter().all(|&t| t == favourite));
    }

    #[test]
    fn test_rotator_cycles_from_rock() {
        use Throw::*;
        let mut player = ScriptedPlayer::seeded(PlayerStyle::Rotator, 1);
        let throws = play(&mut player, &[Rock; 7]);
        assert_eq!(throws, vec![Rock, Paper, Scissors, Lizard, Spock, Rock, Paper]);
    }

    #[test]
    fn test_reflector_copies_previous_opponent() {
        use Throw::*;
        let mut player = ScriptedPlayer::seeded(PlayerStyle::Reflector, 1);
        let opponent = [Lizard, Spock, Paper, Paper, Rock];
        let throws = play(&mut player, &opponent);
        assert_eq!(&throws[1..], &opponent[..4]);
    }

    #[test]
    fn test_randomizer_covers_all_throws() {
        let mut player = ScriptedPlayer::seeded(PlayerStyle::Randomizer, 4);
        let throws = play(&mut player, &[Throw::Rock; 200]);
        for t in Throw::ALL {
            assert!(throws.contains(&t), "{} never thrown", t);
        }
    }

    #[test]
    fn test_mixer_holds_method_for_phase() {
        let mut player = ScriptedPlayer::seeded(PlayerStyle::Mixer { phase_length: 5 }, 8);
        let mut history = MatchHistory::new();
        let arbiter = Arbiter::new();
        let mut methods = Vec::new();

        for _ in 0..20 {
            let p = player.next_throw(&history);
            methods.push(player.method);
            arbiter.decide_and_record(&mut history, Throw::Spock, p);
        }

        for phase in methods.chunks(5) {
            assert!(phase.iter().all(|&m| m == phase[0]), "{:?}", phase);
        }
    }

    #[test]
    fn test_same_seed_same_throws() {
        let style = PlayerStyle::Mixer { phase_length: 2 };
        let mut a = ScriptedPlayer::seeded(style, 77);
        let mut b = ScriptedPlayer::seeded(style, 77);
        assert_eq!(
            play(&mut a, &[Throw::Paper; 30]),
            play(&mut b, &[Throw::Paper; 30])
        );
    }
}
