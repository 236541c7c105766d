//! Economic model for a negative-externality classroom game.
//!
//! A firm picks a production quantity each round. Production earns private
//! profit but emits pollution that accumulates into a stock; society is
//! charged for the whole stock every round. The game tracks both sides and
//! reports social welfare (total profit minus total social cost).

pub mod config;
pub mod economics;
pub mod error;
pub mod history;
pub mod scoring;
pub mod strategy;

use serde::Serialize;

pub use config::{GameConfig, GradingConfig};
pub use error::{ConfigError, GameError};
pub use history::HistoryTotals;
pub use scoring::{Evaluation, Grade};
pub use strategy::{play_game, ProductionStrategy, SimulationReport};

/// Outcome of one settled round. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundRecord {
    pub round: u32,
    pub production: u32,
    pub profit: f64,
    /// Pollution emitted this round only.
    pub pollution: f64,
    /// Cost of the accumulated pollution stock at the end of this round.
    pub social_cost: f64,
}

impl RoundRecord {
    /// This round's contribution to social welfare.
    pub fn net_welfare(&self) -> f64 {
        self.profit - self.social_cost
    }
}

/// Forward-looking metrics for an unsubmitted production choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preview {
    pub profit: f64,
    /// Pollution stock including this round's emissions.
    pub pollution_total: f64,
    pub social_cost: f64,
    /// Social welfare if the choice were settled now.
    pub welfare: f64,
}

/// State of one play-through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    round: u32,
    production: u32,
    cumulative_pollution: f64,
    total_profit: f64,
    total_social_cost: f64,
    social_welfare: f64,
    round_history: Vec<RoundRecord>,
    config: GameConfig,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            round: 1,
            production: 0,
            cumulative_pollution: 0.0,
            total_profit: 0.0,
            total_social_cost: 0.0,
            social_welfare: 0.0,
            round_history: Vec::new(),
            config,
        }
    }

    /// Start over with the same configuration; history is discarded.
    pub fn restart(&mut self) {
        log::info!("restarting game ({} rounds)", self.config.total_rounds);
        *self = Self::new(self.config.clone());
    }

    /// Round about to be played; `total_rounds + 1` once finished.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Round number for display, capped at the last round.
    pub fn display_round(&self) -> u32 {
        self.round.min(self.config.total_rounds)
    }

    pub fn total_rounds(&self) -> u32 {
        self.config.total_rounds
    }

    pub fn rounds_remaining(&self) -> u32 {
        self.config
            .total_rounds
            .saturating_add(1)
            .saturating_sub(self.round)
    }

    pub fn is_finished(&self) -> bool {
        self.round > self.config.total_rounds
    }

    /// Pending choice for the current round.
    pub fn production(&self) -> u32 {
        self.production
    }

    /// Store a pending choice, clamped to `[0, max_production]`.
    pub fn set_production(&mut self, raw: i64) -> u32 {
        self.production = clamp_production(raw, self.config.max_production);
        self.production
    }

    pub fn cumulative_pollution(&self) -> f64 {
        self.cumulative_pollution
    }

    pub fn total_profit(&self) -> f64 {
        self.total_profit
    }

    pub fn total_social_cost(&self) -> f64 {
        self.total_social_cost
    }

    pub fn social_welfare(&self) -> f64 {
        self.social_welfare
    }

    /// Settled rounds, oldest first.
    pub fn round_history(&self) -> &[RoundRecord] {
        &self.round_history
    }

    pub fn round_data(&self, round: u32) -> Option<&RoundRecord> {
        self.round_history.iter().find(|record| record.round == round)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Settle the pending production choice.
    pub fn submit(&mut self) -> Result<RoundRecord, GameError> {
        let production = self.production;
        settle_round(self, production)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// A fresh default play-through.
pub fn reset() -> GameState {
    GameState::default()
}

/// Clamp a raw player input into `[0, max]`.
pub fn clamp_production(raw: i64, max: u32) -> u32 {
    raw.clamp(0, i64::from(max)) as u32
}

/// Map a slider position (0.0 = left edge, 1.0 = right edge) to a quantity.
pub fn production_from_fraction(fraction: f64, max: u32) -> u32 {
    if !fraction.is_finite() {
        return 0;
    }
    clamp_production((fraction * f64::from(max)) as i64, max)
}

/// Settle a round at `production` units and advance the game.
///
/// `production` is expected to be clamped by the caller already. Once every
/// round has been played the call is rejected and `state` is left unchanged.
pub fn settle_round(state: &mut GameState, production: u32) -> Result<RoundRecord, GameError> {
    if state.is_finished() {
        log::warn!(
            "rejected settlement at round {} of {}",
            state.round,
            state.config.total_rounds
        );
        return Err(GameError::GameOver {
            round: state.round,
            total_rounds: state.config.total_rounds,
        });
    }

    let config = &state.config;
    let profit = economics::profit(production, config);
    let pollution = economics::pollution(production, config);
    state.cumulative_pollution += pollution;
    let social_cost = economics::social_cost(state.cumulative_pollution, config);

    let record = RoundRecord {
        round: state.round,
        production,
        profit,
        pollution,
        social_cost,
    };
    state.round_history.push(record.clone());

    state.total_profit += profit;
    state.total_social_cost += social_cost;
    state.social_welfare = state.total_profit - state.total_social_cost;

    log::debug!(
        "round {} settled: production={} profit={:.1} pollution={:.1} social_cost={:.1} welfare={:.1}",
        record.round,
        production,
        profit,
        pollution,
        social_cost,
        state.social_welfare
    );

    state.round += 1;
    state.production = 0;

    Ok(record)
}

/// Preview settling the pending production choice, without mutating state.
pub fn estimate_current_round(state: &GameState) -> Preview {
    estimate_for(state, state.production)
}

/// Preview settling `production` units, without mutating state.
pub fn estimate_for(state: &GameState, production: u32) -> Preview {
    let config = &state.config;
    let profit = economics::profit(production, config);
    let pollution_total = state.cumulative_pollution + economics::pollution(production, config);
    let social_cost = economics::social_cost(pollution_total, config);
    let welfare = (state.total_profit + profit) - (state.total_social_cost + social_cost);

    Preview {
        profit,
        pollution_total,
        social_cost,
        welfare,
    }
}
