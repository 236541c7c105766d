//! End-of-game evaluation.

use std::fmt;

use serde::Serialize;

use crate::config::GradingConfig;
use crate::{GameState, RoundRecord};

/// Verdict bucket for final social welfare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Excellent,
    Good,
    Pass,
    Fail,
}

impl Grade {
    pub fn message(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent! You maximized social welfare.",
            Grade::Good => "Good! Close to the social optimum.",
            Grade::Pass => "Pass. Balance private profit against social cost.",
            Grade::Fail => "Fail. Overproduction led to market failure.",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Excellent => write!(f, "excellent"),
            Grade::Good => write!(f, "good"),
            Grade::Pass => write!(f, "pass"),
            Grade::Fail => write!(f, "fail"),
        }
    }
}

/// Scored summary shown on the game-over screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub welfare_percent: f64,
    pub grade: Grade,
    pub message: &'static str,
    pub hint: String,
}

/// Map social welfare onto the 0-100 grading scale (not clamped).
pub fn welfare_percent(social_welfare: f64, grading: &GradingConfig) -> f64 {
    (social_welfare + grading.baseline_offset) / grading.span * 100.0
}

pub fn grade(social_welfare: f64, grading: &GradingConfig) -> Grade {
    let percent = welfare_percent(social_welfare, grading);
    if percent > grading.excellent_above {
        Grade::Excellent
    } else if percent > grading.good_above {
        Grade::Good
    } else if percent > grading.pass_above {
        Grade::Pass
    } else {
        Grade::Fail
    }
}

pub fn evaluate(state: &GameState) -> Evaluation {
    let grading = &state.config().grading;
    let welfare = state.social_welfare();
    let grade = grade(welfare, grading);
    Evaluation {
        welfare_percent: welfare_percent(welfare, grading),
        grade,
        message: grade.message(),
        hint: format!(
            "Suggested strategy: produce about {} units per round.",
            grading.optimal_production_hint
        ),
    }
}

/// The round that added the most to social welfare. Earlier rounds win ties.
pub fn best_round(history: &[RoundRecord]) -> Option<&RoundRecord> {
    history.iter().reduce(|best, record| {
        if record.net_welfare() > best.net_welfare() {
            record
        } else {
            best
        }
    })
}

/// The round that cost society the most. Earlier rounds win ties.
pub fn worst_round(history: &[RoundRecord]) -> Option<&RoundRecord> {
    history.iter().reduce(|worst, record| {
        if record.net_welfare() < worst.net_welfare() {
            record
        } else {
            worst
        }
    })
}
