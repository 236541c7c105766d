use externality_core::{GameState, ProductionStrategy};

/// GreedyStrategy ignores the externality entirely and produces at full
/// capacity every round, maximizing private profit.
pub struct GreedyStrategy;

impl ProductionStrategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&mut self, state: &GameState) -> u32 {
        state.config().max_production
    }
}
