//! Closed-form round economics.

use crate::config::GameConfig;

/// Private profit for producing `production` units.
pub fn profit(production: u32, config: &GameConfig) -> f64 {
    f64::from(production) * config.profit_per_unit
}

/// Pollution emitted by producing `production` units.
///
/// Convex in production: every extra unit pollutes more than the last.
pub fn pollution(production: u32, config: &GameConfig) -> f64 {
    let p = f64::from(production);
    p * (1.0 + p / config.pollution_scale)
}

/// Social cost charged for the pollution stock accumulated so far.
pub fn social_cost(cumulative_pollution: f64, config: &GameConfig) -> f64 {
    cumulative_pollution * config.social_cost_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_production_is_free() {
        let config = GameConfig::default();
        assert_eq!(profit(0, &config), 0.0);
        assert_eq!(pollution(0, &config), 0.0);
    }

    #[test]
    fn full_production_doubles_pollution() {
        let config = GameConfig::default();
        assert_eq!(profit(100, &config), 200.0);
        assert_eq!(pollution(100, &config), 200.0);
    }

    #[test]
    fn pollution_never_decreases_with_production() {
        let config = GameConfig::default();
        let mut previous = pollution(0, &config);
        for p in 1..=100 {
            let current = pollution(p, &config);
            assert!(current >= previous, "pollution fell at {p}");
            previous = current;
        }
    }

    #[test]
    fn marginal_pollution_rises() {
        let config = GameConfig::default();
        let first = pollution(11, &config) - pollution(10, &config);
        let later = pollution(91, &config) - pollution(90, &config);
        assert!(later > first);
    }

    #[test]
    fn social_cost_scales_the_stock() {
        let config = GameConfig::default();
        assert!((social_cost(96.0, &config) - 115.2).abs() < 1e-9);
    }
}
