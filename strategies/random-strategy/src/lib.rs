use externality_core::{GameState, ProductionStrategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// RandomStrategy picks a uniformly random quantity every round.
///
/// Seeded, so a given seed always replays the same game.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        log::debug!("random strategy seeded with {seed}");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ProductionStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, state: &GameState) -> u32 {
        self.rng.gen_range(0..=state.config().max_production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use externality_core::{play_game, GameConfig};

    #[test]
    fn same_seed_replays_the_same_game() {
        let first = play_game(&mut RandomStrategy::new(7), GameConfig::default());
        let second = play_game(&mut RandomStrategy::new(7), GameConfig::default());
        assert_eq!(first, second);
    }

    #[test]
    fn choices_stay_in_range() {
        let mut config = GameConfig::with_total_rounds(50);
        config.max_production = 10;
        let report = play_game(&mut RandomStrategy::new(42), config);
        assert_eq!(report.rounds.len(), 50);
        assert!(report.rounds.iter().all(|r| r.production <= 10));
    }
}
