//! Name-to-strategy lookup for headless play.

use clap::ValueEnum;
use externality_core::{GameConfig, ProductionStrategy};
use greedy_strategy::GreedyStrategy;
use myopic_strategy::MyopicStrategy;
use planner_strategy::PlannerStrategy;
use random_strategy::RandomStrategy;
use steady_strategy::SteadyStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Always produce at capacity
    Greedy,
    /// Produce the suggested quantity every round
    Steady,
    /// Maximize this round's previewed welfare
    Myopic,
    /// Maximize welfare over the remaining rounds
    Planner,
    /// Uniformly random quantity
    Random,
}

impl StrategyKind {
    pub fn build(self, config: &GameConfig, seed: u64) -> Box<dyn ProductionStrategy> {
        match self {
            StrategyKind::Greedy => Box::new(GreedyStrategy),
            StrategyKind::Steady => Box::new(SteadyStrategy::from_hint(config)),
            StrategyKind::Myopic => Box::new(MyopicStrategy),
            StrategyKind::Planner => Box::new(PlannerStrategy),
            StrategyKind::Random => Box::new(RandomStrategy::new(seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_builds_a_matching_strategy() {
        let config = GameConfig::default();
        for kind in StrategyKind::value_variants() {
            let strategy = kind.build(&config, 1);
            let expected = kind.to_possible_value().unwrap();
            assert_eq!(strategy.name(), expected.get_name());
        }
    }
}
