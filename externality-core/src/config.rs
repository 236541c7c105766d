//! Tunable parameters for a play-through.
//!
//! Defaults reproduce the classroom model: five rounds, two units of profit
//! per unit produced, convex pollution `p * (1 + p / 100)` and a social cost
//! of 1.2 per unit of accumulated pollution.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Economy parameters and end-of-game grading heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rounds in one play-through.
    pub total_rounds: u32,
    /// Upper bound of the production choice (lower bound is always 0).
    pub max_production: u32,
    /// Private profit earned per unit produced.
    pub profit_per_unit: f64,
    /// Divisor in the convex pollution curve `p * (1 + p / scale)`.
    pub pollution_scale: f64,
    /// Monetized harm per unit of accumulated pollution.
    pub social_cost_rate: f64,
    pub grading: GradingConfig,
}

impl GameConfig {
    pub const DEFAULT_TOTAL_ROUNDS: u32 = 5;
    pub const DEFAULT_MAX_PRODUCTION: u32 = 100;
    pub const DEFAULT_PROFIT_PER_UNIT: f64 = 2.0;
    pub const DEFAULT_POLLUTION_SCALE: f64 = 100.0;
    pub const DEFAULT_SOCIAL_COST_RATE: f64 = 1.2;

    /// Automated players scan every round and every quantity.
    pub const MAX_TOTAL_ROUNDS: u32 = 1000;
    pub const MAX_PRODUCTION_LIMIT: u32 = 10_000;

    pub fn new() -> Self {
        Self {
            total_rounds: Self::DEFAULT_TOTAL_ROUNDS,
            max_production: Self::DEFAULT_MAX_PRODUCTION,
            profit_per_unit: Self::DEFAULT_PROFIT_PER_UNIT,
            pollution_scale: Self::DEFAULT_POLLUTION_SCALE,
            social_cost_rate: Self::DEFAULT_SOCIAL_COST_RATE,
            grading: GradingConfig::default(),
        }
    }

    pub fn with_total_rounds(total_rounds: u32) -> Self {
        Self {
            total_rounds,
            ..Self::new()
        }
    }

    /// Parse a JSON document; missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        log::info!(
            "loaded config from {}: {} rounds, social cost rate {}",
            path.display(),
            config.total_rounds,
            config.social_cost_rate
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=Self::MAX_TOTAL_ROUNDS).contains(&self.total_rounds) {
            return Err(ConfigError::Invalid(format!(
                "total_rounds must be between 1 and {}, got {}",
                Self::MAX_TOTAL_ROUNDS,
                self.total_rounds
            )));
        }
        if !(1..=Self::MAX_PRODUCTION_LIMIT).contains(&self.max_production) {
            return Err(ConfigError::Invalid(format!(
                "max_production must be between 1 and {}, got {}",
                Self::MAX_PRODUCTION_LIMIT,
                self.max_production
            )));
        }
        for (name, value) in [
            ("profit_per_unit", self.profit_per_unit),
            ("social_cost_rate", self.social_cost_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if !self.pollution_scale.is_finite() || self.pollution_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "pollution_scale must be a finite positive number, got {}",
                self.pollution_scale
            )));
        }
        self.grading.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Heuristics for the end-of-game verdict.
///
/// None of these are derived from the model; they map final welfare onto a
/// 0-100 scale and bucket it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    /// Added to social welfare before scaling.
    pub baseline_offset: f64,
    /// Welfare range that maps onto 100 percent.
    pub span: f64,
    /// Percent strictly above which the result is excellent.
    pub excellent_above: f64,
    pub good_above: f64,
    pub pass_above: f64,
    /// Per-round quantity suggested to the player on the end screen.
    pub optimal_production_hint: u32,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            baseline_offset: 500.0,
            span: 1000.0,
            excellent_above: 80.0,
            good_above: 60.0,
            pass_above: 40.0,
            optimal_production_hint: 60,
        }
    }
}

impl GradingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.span.is_finite() || self.span == 0.0 {
            return Err(ConfigError::Invalid(
                "grading.span must be finite and non-zero".to_string(),
            ));
        }
        if !self.baseline_offset.is_finite() {
            return Err(ConfigError::Invalid(
                "grading.baseline_offset must be finite".to_string(),
            ));
        }
        if !(self.excellent_above >= self.good_above && self.good_above >= self.pass_above) {
            return Err(ConfigError::Invalid(format!(
                "grade thresholds must be ordered excellent >= good >= pass, got {} / {} / {}",
                self.excellent_above, self.good_above, self.pass_above
            )));
        }
        Ok(())
    }
}
