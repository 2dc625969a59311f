//! RPSLS Tournament - scripted players against the adaptive opponent
//!
//! This crate provides the test-traffic infrastructure:
//! - Scripted player styles (repeater, rotator, reflector, randomizer, mixer)
//! - Scripted matches with a fixed lifespan
//! - The effectiveness benchmark (active vs deactivated brain)
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_effectiveness (orchestration)
//! - Level 2: play_match (phases)
//! - Level 3: ScriptedPlayer::next_throw (steps)
//! - Level 4: configuration

mod config;
mod effectiveness;
mod match_play;
mod players;

pub use config::{MatchConfig, PlayerStyle};
pub use effectiveness::{run_effectiveness, standard_styles, EffectivenessRow};
pub use match_play::{play_match, MatchResult};
pub use players::ScriptedPlayer;
