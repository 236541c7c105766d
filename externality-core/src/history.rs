//! Aggregates over the settled-round history.

use serde::Serialize;

use crate::RoundRecord;

/// Column sums over a round history, as shown in the results table.
///
/// `social_cost` sums the per-round stock charges, so it equals the state's
/// `total_social_cost` rather than the cost of the final stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HistoryTotals {
    pub rounds: u32,
    pub production: u64,
    pub profit: f64,
    pub pollution: f64,
    pub social_cost: f64,
}

impl HistoryTotals {
    pub fn from_records(records: &[RoundRecord]) -> Self {
        let mut totals = Self::default();
        for record in records {
            totals.record(record);
        }
        totals
    }

    pub fn record(&mut self, record: &RoundRecord) {
        self.rounds += 1;
        self.production += u64::from(record.production);
        self.profit += record.profit;
        self.pollution += record.pollution;
        self.social_cost += record.social_cost;
    }

    pub fn net_welfare(&self) -> f64 {
        self.profit - self.social_cost
    }

    pub fn average_production(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.production as f64 / f64::from(self.rounds)
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "production: {}, profit: {:.1}, pollution: {:.1}, social cost: {:.1}",
            self.production, self.profit, self.pollution, self.social_cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{reset, settle_round};

    #[test]
    fn empty_history_sums_to_zero() {
        let totals = HistoryTotals::from_records(&[]);
        assert_eq!(totals, HistoryTotals::default());
        assert_eq!(totals.average_production(), 0.0);
    }

    #[test]
    fn totals_agree_with_state_accumulators() {
        let mut state = reset();
        for p in [50, 50, 10] {
            settle_round(&mut state, p).unwrap();
        }
        let totals = HistoryTotals::from_records(state.round_history());

        assert_eq!(totals.rounds, 3);
        assert_eq!(totals.production, 110);
        assert!((totals.profit - state.total_profit()).abs() < 1e-9);
        assert!((totals.pollution - state.cumulative_pollution()).abs() < 1e-9);
        assert!((totals.social_cost - state.total_social_cost()).abs() < 1e-9);
        assert!((totals.net_welfare() - state.social_welfare()).abs() < 1e-9);
        assert!((totals.average_production() - 110.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn describe_lists_every_column() {
        let totals = HistoryTotals {
            rounds: 2,
            production: 100,
            profit: 200.0,
            pollution: 150.0,
            social_cost: 270.0,
        };
        assert_eq!(
            totals.describe(),
            "production: 100, profit: 200.0, pollution: 150.0, social cost: 270.0"
        );
    }
}
