use externality_core::{GameConfig, GameState, ProductionStrategy};

/// SteadyStrategy produces the same quantity every round.
pub struct SteadyStrategy {
    quantity: u32,
}

impl SteadyStrategy {
    pub fn new(quantity: u32) -> Self {
        Self { quantity }
    }

    /// Follow the per-round quantity suggested on the end screen.
    pub fn from_hint(config: &GameConfig) -> Self {
        Self::new(config.grading.optimal_production_hint)
    }
}

impl ProductionStrategy for SteadyStrategy {
    fn name(&self) -> &'static str {
        "steady"
    }

    fn choose(&mut self, _state: &GameState) -> u32 {
        self.quantity
    }
}
