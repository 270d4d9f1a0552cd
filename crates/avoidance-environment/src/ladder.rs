//! Tiered metric scoring shared by the weather and terrain assessors.

use avoidance_core::config::Ladder;
use avoidance_core::constants::*;
use avoidance_core::enums::{RiskLevel, Severity};

/// Recommendation templates for one metric.
pub struct MetricAdvice {
    /// Emitted when the metric scores at or above the critical cut.
    pub critical: &'static str,
    /// Emitted when the metric scores at or above the caution cut.
    pub caution: &'static str,
}

/// Closing recommendation per overall level. LOW and NONE have none.
pub struct LevelAdvice {
    pub critical: &'static str,
    pub high: &'static str,
    pub medium: &'static str,
}

/// Score a raw value against a ladder: 1.0, 0.8, 0.6, 0.4 or 0.2.
///
/// A NaN reading scores as critical.
pub fn score(ladder: &Ladder, value: f64) -> f64 {
    if value.is_nan() {
        return SCORE_CRITICAL;
    }
    let worse = |threshold: f64| match ladder.severity {
        Severity::HigherIsWorse => value > threshold,
        Severity::LowerIsWorse => value < threshold,
    };
    let [critical, high, medium, low] = ladder.tiers;
    if worse(critical) {
        SCORE_CRITICAL
    } else if worse(high) {
        SCORE_HIGH
    } else if worse(medium) {
        SCORE_MEDIUM
    } else if worse(low) {
        SCORE_LOW
    } else {
        SCORE_MINIMAL
    }
}

/// Score a reading that is already a [0, 1] index. NaN scores as critical.
pub fn index_score(value: f64) -> f64 {
    if value.is_nan() {
        SCORE_CRITICAL
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Slack for summation error when a mean lands exactly on a cut point.
const CUT_TOLERANCE: f64 = 1e-9;

/// Risk level for a mean score (cut points 0.8 / 0.6 / 0.4 / 0.2, inclusive).
pub fn level_for_score(score: f64) -> RiskLevel {
    let score = score + CUT_TOLERANCE;
    if score >= SCORE_HIGH {
        RiskLevel::Critical
    } else if score >= SCORE_MEDIUM {
        RiskLevel::High
    } else if score >= SCORE_LOW {
        RiskLevel::Medium
    } else if score >= SCORE_MINIMAL {
        RiskLevel::Low
    } else {
        RiskLevel::None
    }
}

/// Arithmetic mean. Empty input is zero.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Append the metric's critical or caution template, if its score warrants one.
pub fn advise(score: f64, advice: &MetricAdvice, out: &mut Vec<String>) {
    if score >= RECOMMEND_CRITICAL_SCORE {
        out.push(advice.critical.to_string());
    } else if score >= RECOMMEND_CAUTION_SCORE {
        out.push(advice.caution.to_string());
    }
}

/// Closing recommendation for an overall level.
pub fn closing_advice(level: RiskLevel, advice: &LevelAdvice) -> Option<&'static str> {
    match level {
        RiskLevel::Critical => Some(advice.critical),
        RiskLevel::High => Some(advice.high),
        RiskLevel::Medium => Some(advice.medium),
        RiskLevel::Low | RiskLevel::None => None,
    }
}
