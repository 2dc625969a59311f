//! RPSLS Core - Rock-Paper-Scissors-Lizard-Spock engine
//!
//! This crate provides the game logic and the adaptive opponent:
//! - Throws and the fixed non-transitive relation table
//! - Round records and the append-only match history
//! - The arbiter that decides and records rounds
//! - Pattern agents (fixed-repeat, cyclic-rotation, mirror-lag)
//! - The inference engine that arbitrates between them
//! - A match session tying the pieces together

pub mod agents;
pub mod arbiter;
pub mod engine;
pub mod error;
pub mod record;
pub mod session;
pub mod throws;

// Re-exports for convenient access
pub use agents::{AgentKind, PatternAgent};
pub use arbiter::Arbiter;
pub use engine::{BrainMode, Decision, EngineConfig, InferenceEngine, Source, WARM_UP_ROUNDS};
pub use error::{Result, RpslsError};
pub use record::{MatchHistory, Outcome, Round, Tally};
pub use session::Session;
pub use throws::{Throw, RELATIONS};
