//! End-of-session data-quality scoring.

use leftturn_core::ResponseRecord;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Two of three attention checks.
pub const DEFAULT_MIN_PASS_RATE: f64 = 0.67;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttentionCheckResult {
    pub passed: bool,
    pub total_checks: usize,
    pub correct_checks: usize,
    /// `1.0` when no checks were answered.
    pub pass_rate: f64,
}

pub fn score_attention_checks(logs: &[ResponseRecord]) -> AttentionCheckResult {
    score_attention_checks_with(logs, DEFAULT_MIN_PASS_RATE)
}

/// Scores only the records whose scene is an attention check.
pub fn score_attention_checks_with(
    logs: &[ResponseRecord],
    min_pass_rate: f64,
) -> AttentionCheckResult {
    let (total_checks, correct_checks) = logs
        .iter()
        .filter(|r| r.is_attention_check())
        .fold((0, 0), |(total, correct), r| {
            (total + 1, correct + usize::from(r.is_correct()))
        });
    let pass_rate = if total_checks == 0 {
        1.0
    } else {
        correct_checks as f64 / total_checks as f64
    };
    let result = AttentionCheckResult {
        passed: whole_percent(pass_rate) >= whole_percent(min_pass_rate),
        total_checks,
        correct_checks,
        pass_rate,
    };
    info!(
        total_checks,
        correct_checks,
        pass_rate,
        passed = result.passed,
        "scored attention checks"
    );
    result
}

// Rates are compared as rounded percentages, so 2/3 meets 0.67.
fn whole_percent(rate: f64) -> i64 {
    (rate * 100.0).round() as i64
}

/// Overall response accuracy for the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// Rounded to a whole percent; `0` when there are no responses.
    pub accuracy_percent: u32,
}

pub fn summarize_accuracy(logs: &[ResponseRecord]) -> AccuracySummary {
    let total = logs.len();
    let correct = logs.iter().filter(|r| r.is_correct()).count();
    let accuracy_percent = if total == 0 {
        0
    } else {
        whole_percent(correct as f64 / total as f64) as u32
    };
    AccuracySummary {
        total,
        correct,
        incorrect: total - correct,
        accuracy_percent,
    }
}
