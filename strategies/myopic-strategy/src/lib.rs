use externality_core::strategy::best_quantity;
use externality_core::{estimate_for, GameState, ProductionStrategy};

/// MyopicStrategy reads the live preview and picks whatever quantity makes
/// social welfare highest right now.
///
/// It does account for pollution, but only charges it once: it never sees
/// that this round's emissions stay in the stock and are charged again in
/// every later round.
pub struct MyopicStrategy;

impl ProductionStrategy for MyopicStrategy {
    fn name(&self) -> &'static str {
        "myopic"
    }

    fn choose(&mut self, state: &GameState) -> u32 {
        best_quantity(state.config().max_production, |quantity| {
            estimate_for(state, quantity).welfare
        })
    }
}
