use externality_core::economics::{pollution, profit};
use externality_core::strategy::best_quantity;
use externality_core::{GameState, ProductionStrategy};

/// PlannerStrategy plays the role of a social planner.
///
/// Pollution settled now stays in the stock and is charged again in every
/// remaining round, so the planner weighs this round's emissions by the
/// number of rounds left (including the current one) before comparing them
/// against private profit.
pub struct PlannerStrategy;

impl ProductionStrategy for PlannerStrategy {
    fn name(&self) -> &'static str {
        "planner"
    }

    fn choose(&mut self, state: &GameState) -> u32 {
        let config = state.config();
        let charges = f64::from(state.rounds_remaining());
        best_quantity(config.max_production, |quantity| {
            profit(quantity, config)
                - config.social_cost_rate * charges * pollution(quantity, config)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use externality_core::{play_game, GameConfig};

    #[test]
    fn holds_back_until_the_last_round() {
        let mut strategy = PlannerStrategy;
        let report = play_game(&mut strategy, GameConfig::default());
        let productions: Vec<_> = report.rounds.iter().map(|r| r.production).collect();
        assert_eq!(productions, vec![0, 0, 0, 0, 33]);
    }

    #[test]
    fn ends_with_positive_welfare() {
        let mut strategy = PlannerStrategy;
        let report = play_game(&mut strategy, GameConfig::default());
        assert!((report.social_welfare - 13.332).abs() < 1e-6);
    }

    #[test]
    fn cheap_pollution_allows_production_early() {
        let mut config = GameConfig::default();
        config.social_cost_rate = 0.1;
        let mut strategy = PlannerStrategy;
        let report = play_game(&mut strategy, config);
        assert!(report.rounds[0].production > 0);
        assert!(report.rounds[0].production <= report.rounds[4].production);
    }
}
