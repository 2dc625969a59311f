//! Effectiveness benchmark - active vs deactivated brain per style
//!
//! Level 1 - Orchestration

use rayon::prelude::*;
use rpsls_core::BrainMode;
use serde::Serialize;

use crate::config::{MatchConfig, PlayerStyle};
use crate::match_play::{play_match, MatchResult};

/// The styles compared by default (mixer at three phase lengths)
pub fn standard_styles() -> Vec<PlayerStyle> {
    vec![
        PlayerStyle::Repeater,
        PlayerStyle::Rotator,
        PlayerStyle::Reflector,
        PlayerStyle::Randomizer,
        PlayerStyle::Mixer { phase_length: 25 },
        PlayerStyle::Mixer { phase_length: 3 },
        PlayerStyle::Mixer { phase_length: 2 },
    ]
}

/// One style, played against both brains
#[derive(Clone, Debug, Serialize)]
pub struct EffectivenessRow {
    pub style: PlayerStyle,
    pub active: MatchResult,
    pub deactivated: MatchResult,
}

impl EffectivenessRow {
    /// Percentage points the active brain gains over random play
    pub fn improvement(&self) -> f64 {
        self.active.opponent_win_rate() - self.deactivated.opponent_win_rate()
    }
}

/// Play every style against both brains, styles in parallel
pub fn run_effectiveness(
    styles: &[PlayerStyle],
    rounds: u32,
    seed: Option<u64>,
) -> Vec<EffectivenessRow> {
    tracing::info!(
        "Running effectiveness benchmark: {} styles x {} rounds",
        styles.len(),
        rounds
    );

    styles
        .par_iter()
        .enumerate()
        .map(|(i, &style)| {
            // Each match gets its own pair of seeds
            let base = seed.map(|s| s.wrapping_add(i as u64 * 4));
            let active = play_match(&match_config(style, rounds, BrainMode::Active, base));
            let deactivated = play_match(&match_config(
                style,
                rounds,
                BrainMode::Deactivated,
                base.map(|s| s.wrapping_add(2)),
            ));
            EffectivenessRow {
                style,
                active,
                deactivated,
            }
        })
        .collect()
}

fn match_config(
    style: PlayerStyle,
    rounds: u32,
    brain: BrainMode,
    seed: Option<u64>,
) -> MatchConfig {
    let config = MatchConfig::new(style, rounds).with_brain(brain);
    match seed {
        Some(s) => config.with_seed(s),
        None => config,
    }
}
