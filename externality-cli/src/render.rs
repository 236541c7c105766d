//! Plain-text views over the game state.

use externality_core::scoring::{self, best_round, worst_round};
use externality_core::{
    estimate_current_round, GameState, HistoryTotals, RoundRecord, SimulationReport,
};

const BAR_WIDTH: usize = 30;

/// Round counter with a segment per round.
pub fn round_progress(state: &GameState) -> String {
    let total = state.total_rounds();
    let played = state.round_history().len() as u32;
    let bar: String = (0..total)
        .map(|i| if i < played { '#' } else { '-' })
        .collect();
    let status = if state.is_finished() {
        "finished"
    } else {
        "in progress"
    };
    format!(
        "Round {}/{} [{}] {}",
        state.display_round(),
        total,
        bar,
        status
    )
}

/// Live preview for the pending production choice.
pub fn metric_cards(state: &GameState) -> String {
    let preview = estimate_current_round(state);
    let mut out = format!(
        "Planned production: {} units (0-{})\n",
        state.production(),
        state.config().max_production
    );
    let cards = [
        ("Private profit", preview.profit, "direct revenue for the firm"),
        ("Social cost", preview.social_cost, "environmental damage from pollution"),
        ("Social welfare", preview.welfare, "overall welfare of society"),
    ];
    for (title, value, description) in cards {
        out.push_str(&format!("  {:<15} ${:>9.1}   {}\n", title, value, description));
    }
    out
}

/// Everything shown while a round is being decided.
pub fn status(state: &GameState) -> String {
    format!(
        "{}\n{}How many units will you produce this round? (0-{}, or a percentage like 40%)\n",
        round_progress(state),
        metric_cards(state),
        state.config().max_production
    )
}

pub fn settled(record: &RoundRecord) -> String {
    format!(
        "Round {} settled: produced {} units, profit ${:.1}, pollution {:.1}, social cost ${:.1}\n",
        record.round, record.production, record.profit, record.pollution, record.social_cost
    )
}

fn bar(value: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize
    } else {
        0
    };
    format!("{}{}", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

/// Production and social cost per round, each scaled to at least 100.
pub fn history_chart(history: &[RoundRecord]) -> String {
    let mut out = String::from("History\n");
    if history.is_empty() {
        out.push_str("  no rounds played yet\n");
        return out;
    }

    let max_production = history
        .iter()
        .map(|r| f64::from(r.production))
        .fold(100.0, f64::max);
    let max_cost = history.iter().map(|r| r.social_cost).fold(100.0, f64::max);

    for record in history {
        out.push_str(&format!(
            "  round {:<3} production  |{}| {}\n",
            record.round,
            bar(f64::from(record.production), max_production),
            record.production
        ));
        out.push_str(&format!(
            "            social cost |{}| {:.1}\n",
            bar(record.social_cost, max_cost),
            record.social_cost
        ));
    }
    out
}

fn table_row(
    label: &str,
    production: u64,
    profit: f64,
    pollution: f64,
    social_cost: f64,
) -> String {
    format!(
        "{:<7}{:>12}{:>12.1}{:>12.1}{:>14.1}\n",
        label, production, profit, pollution, social_cost
    )
}

/// Per-round rows followed by a totals row.
pub fn history_table(history: &[RoundRecord]) -> String {
    let mut out = format!(
        "{:<7}{:>12}{:>12}{:>12}{:>14}\n",
        "Round", "Production", "Profit", "Pollution", "Social cost"
    );
    if history.is_empty() {
        out.push_str("no rounds played yet\n");
        return out;
    }

    for record in history {
        out.push_str(&table_row(
            &record.round.to_string(),
            u64::from(record.production),
            record.profit,
            record.pollution,
            record.social_cost,
        ));
    }

    let totals = HistoryTotals::from_records(history);
    out.push_str(&table_row(
        "Total",
        totals.production,
        totals.profit,
        totals.pollution,
        totals.social_cost,
    ));
    out
}

/// Final results panel.
pub fn game_over(state: &GameState) -> String {
    let evaluation = scoring::evaluate(state);
    let mut out = format!(
        "Game over - final results\n  Total profit:      ${:.1}\n  Total social cost: ${:.1}\n  Social welfare:    ${:.1}\n  Score: {:.1}% ({})\n  {}\n",
        state.total_profit(),
        state.total_social_cost(),
        state.social_welfare(),
        evaluation.welfare_percent,
        evaluation.grade,
        evaluation.message
    );
    if let (Some(best), Some(worst)) = (
        best_round(state.round_history()),
        worst_round(state.round_history()),
    ) {
        out.push_str(&format!(
            "  Best round: {} ({:+.1}), worst round: {} ({:+.1})\n",
            best.round,
            best.net_welfare(),
            worst.round,
            worst.net_welfare()
        ));
    }
    out.push_str(&format!("  {}\n", evaluation.hint));
    out
}

/// Text report for a headless play-through.
pub fn simulation_summary(report: &SimulationReport) -> String {
    format!(
        "Strategy: {}\n{}\nTotals: {}\nAverage production: {:.1} units per round\nSocial welfare: ${:.1} ({:.1}%, {})\n{}\n",
        report.strategy,
        history_table(&report.rounds),
        report.totals.describe(),
        report.totals.average_production(),
        report.social_welfare,
        report.evaluation.welfare_percent,
        report.evaluation.grade,
        report.evaluation.message
    )
}

/// Ranking of headless play-throughs, best social welfare first.
pub fn comparison(reports: &[SimulationReport]) -> String {
    let mut ranked: Vec<&SimulationReport> = reports.iter().collect();
    ranked.sort_by(|a, b| b.social_welfare.total_cmp(&a.social_welfare));

    let mut out = format!(
        "{:<6}{:<10}{:>12}{:>12}{:>14}{:>12}  {}\n",
        "Rank", "Strategy", "Production", "Profit", "Social cost", "Welfare", "Grade"
    );
    for (rank, report) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:<6}{:<10}{:>12}{:>12.1}{:>14.1}{:>12.1}  {}\n",
            rank + 1,
            report.strategy,
            report.totals.production,
            report.totals.profit,
            report.totals.social_cost,
            report.social_welfare,
            report.evaluation.grade
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use externality_core::{reset, settle_round};

    #[test]
    fn progress_marks_played_rounds() {
        let mut state = reset();
        settle_round(&mut state, 10).unwrap();
        settle_round(&mut state, 10).unwrap();
        assert_eq!(round_progress(&state), "Round 3/5 [##---] in progress");
    }

    #[test]
    fn progress_caps_round_when_finished() {
        let mut state = reset();
        for _ in 0..5 {
            settle_round(&mut state, 0).unwrap();
        }
        assert_eq!(round_progress(&state), "Round 5/5 [#####] finished");
    }

    #[test]
    fn cards_show_preview_values() {
        let mut state = reset();
        state.set_production(60);
        let cards = metric_cards(&state);
        assert!(cards.contains("Planned production: 60 units"));
        assert!(cards.contains("$    120.0"));
        assert!(cards.contains("$    115.2"));
        assert!(cards.contains("$      4.8"));
    }

    #[test]
    fn empty_history_has_placeholder() {
        assert!(history_chart(&[]).contains("no rounds played yet"));
        assert!(history_table(&[]).contains("no rounds played yet"));
    }

    #[test]
    fn table_ends_with_totals() {
        let mut state = reset();
        settle_round(&mut state, 50).unwrap();
        settle_round(&mut state, 50).unwrap();
        let table = history_table(state.round_history());
        let last = table.lines().last().unwrap();
        assert!(last.starts_with("Total"));
        assert!(last.contains("100"));
        assert!(last.contains("200.0"));
        assert!(last.contains("150.0"));
        assert!(last.contains("270.0"));
    }

    #[test]
    fn chart_scales_to_largest_cost() {
        let mut state = reset();
        settle_round(&mut state, 100).unwrap();
        let chart = history_chart(state.round_history());
        let full = format!("|{}|", "#".repeat(BAR_WIDTH));
        // production 100 and the largest cost both fill the bar
        assert_eq!(chart.matches(&full).count(), 2);
    }

    #[test]
    fn comparison_ranks_by_welfare() {
        use crate::roster::StrategyKind;
        use externality_core::{play_game, GameConfig};

        let config = GameConfig::default();
        let reports: Vec<_> = [StrategyKind::Greedy, StrategyKind::Planner]
            .iter()
            .map(|kind| play_game(kind.build(&config, 0).as_mut(), config.clone()))
            .collect();
        let ranking = comparison(&reports);
        let rows: Vec<&str> = ranking.lines().skip(1).collect();
        assert!(rows[0].starts_with("1     planner"));
        assert!(rows[1].starts_with("2     greedy"));
    }

    #[test]
    fn simulation_summary_lists_totals_and_average() {
        use crate::roster::StrategyKind;
        use externality_core::{play_game, GameConfig};

        let config = GameConfig::default();
        let report = play_game(
            StrategyKind::Planner.build(&config, 0).as_mut(),
            config.clone(),
        );
        let summary = simulation_summary(&report);
        assert!(summary.starts_with("Strategy: planner\n"));
        assert!(summary.contains("Totals: production: 33, profit: 66.0"));
        assert!(summary.contains("Average production: 6.6 units per round"));
        assert!(summary.contains("(pass)"));
    }

    #[test]
    fn game_over_panel_reports_grade() {
        let mut state = reset();
        for _ in 0..5 {
            settle_round(&mut state, 60).unwrap();
        }
        let panel = game_over(&state);
        assert!(panel.contains("Social welfare:    $-1128.0"));
        assert!(panel.contains("(fail)"));
        assert!(panel.contains("about 60 units"));
        assert!(panel.contains("Best round: 1"));
    }
}
