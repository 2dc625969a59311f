//! Configuration structures for scripted matches
//!
//! Level 4 - Configuration

use std::fmt;

use rpsls_core::BrainMode;
use serde::{Deserialize, Serialize};

/// How a scripted player picks its throws
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStyle {
    /// Picks one throw at random, then repeats it forever
    Repeater,
    /// Rock, Paper, Scissors, Lizard, Spock, Rock, ...
    Rotator,
    /// Copies the opponent's previous throw
    Reflector,
    /// Uniform random every round
    Randomizer,
    /// Switches to a random one of the four methods above every `phase_length` rounds
    Mixer { phase_length: u32 },
}

impl PlayerStyle {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerStyle::Repeater => "repeater",
            PlayerStyle::Rotator => "rotator",
            PlayerStyle::Reflector => "reflector",
            PlayerStyle::Randomizer => "randomizer",
            PlayerStyle::Mixer { .. } => "mixer",
        }
    }
}

impl fmt::Display for PlayerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerStyle::Mixer { phase_length } => {
                write!(f, "mixer (phase {})", phase_length)
            }
            other => f.write_str(other.name()),
        }
    }
}

/// Scripted match configuration
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Style of the scripted player
    pub style: PlayerStyle,
    /// Lifespan of the scripted player, in rounds
    pub rounds: u32,
    /// Whether the opponent uses pattern inference
    pub brain: BrainMode,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            style: PlayerStyle::Randomizer,
            rounds: 100,
            brain: BrainMode::Active,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn new(style: PlayerStyle, rounds: u32) -> Self {
        Self {
            style,
            rounds,
            ..Default::default()
        }
    }

    pub fn with_brain(mut self, brain: BrainMode) -> Self {
        self.brain = brain;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
