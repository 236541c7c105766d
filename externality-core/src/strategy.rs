//! Automated players and headless play-throughs.

use serde::Serialize;

use crate::config::GameConfig;
use crate::history::HistoryTotals;
use crate::scoring::{self, Evaluation};
use crate::{clamp_production, GameState, RoundRecord};

/// A player that picks a production quantity each round.
pub trait ProductionStrategy {
    /// Display name.
    fn name(&self) -> &'static str;

    /// Quantity to produce in the current round of `state`.
    ///
    /// Out-of-range answers are clamped to `[0, max_production]` before
    /// settlement.
    fn choose(&mut self, state: &GameState) -> u32;
}

/// The quantity in `[0, max]` with the highest `score`. Lower quantities
/// win ties.
pub fn best_quantity(max: u32, score: impl Fn(u32) -> f64) -> u32 {
    let mut best = 0;
    let mut best_score = score(0);
    for quantity in 1..=max {
        let current = score(quantity);
        if current > best_score {
            best = quantity;
            best_score = current;
        }
    }
    best
}

/// Result of a full headless play-through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub strategy: &'static str,
    pub rounds: Vec<RoundRecord>,
    pub totals: HistoryTotals,
    pub social_welfare: f64,
    pub evaluation: Evaluation,
}

/// Play every round of a fresh game with `strategy`.
pub fn play_game(strategy: &mut dyn ProductionStrategy, config: GameConfig) -> SimulationReport {
    let mut state = GameState::new(config);

    while !state.is_finished() {
        let max = state.config().max_production;
        let choice = clamp_production(i64::from(strategy.choose(&state)), max);
        state.set_production(i64::from(choice));
        if let Err(err) = state.submit() {
            // unreachable while the loop guard holds
            log::error!("{} could not settle: {err}", strategy.name());
            break;
        }
    }

    log::info!(
        "{} finished {} rounds with social welfare {:.1}",
        strategy.name(),
        state.round_history().len(),
        state.social_welfare()
    );

    SimulationReport {
        strategy: strategy.name(),
        rounds: state.round_history().to_vec(),
        totals: HistoryTotals::from_records(state.round_history()),
        social_welfare: state.social_welfare(),
        evaluation: scoring::evaluate(&state),
    }
}
