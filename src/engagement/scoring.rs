//! Readiness score, overall plan grade and rating bands

use serde::{Deserialize, Serialize};

use super::ScenarioEngagement;
use crate::heuristics::{GRADE_WEIGHTS, INDUSTRY_TARGETS, READINESS_WEIGHTS};

fn clamp_pct(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Composite 0-100 retirement readiness score
///
/// A 10% contribution rate earns the full contribution score. Each component
/// is clamped into [0, 100] before weighting.
pub fn readiness_score(participation_pct: f64, contribution_pct: f64, match_utilization_pct: f64) -> u32 {
    let w = &READINESS_WEIGHTS;
    let participation = clamp_pct(participation_pct);
    let contribution = clamp_pct(contribution_pct / w.contribution_ceiling_pct * 100.0);
    let match_utilization = clamp_pct(match_utilization_pct);

    let score = participation * w.participation
        + contribution * w.contribution
        + match_utilization * w.match_utilization;
    score.round() as u32
}

/// Share of a target met, capped at 100
fn attainment(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 100.0;
    }
    clamp_pct(current / target * 100.0)
}

/// Weighted 0-100 grade against the industry targets
pub fn overall_grade(metrics: &ScenarioEngagement) -> u32 {
    let t = &INDUSTRY_TARGETS;
    let w = &GRADE_WEIGHTS;

    let score = attainment(metrics.participation_pct, t.participation) * w.participation
        + attainment(metrics.avg_contribution_pct, t.contribution) * w.contribution
        + attainment(metrics.match_utilization_pct, t.match_utilization) * w.match_utilization
        + attainment(metrics.readiness_score as f64, t.readiness) * w.readiness;
    score.round() as u32
}

/// Qualitative rating for an overall grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RatingBand {
    RequiresAttention,
    NeedsImprovement,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl RatingBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            RatingBand::Excellent
        } else if score >= 80 {
            RatingBand::VeryGood
        } else if score >= 70 {
            RatingBand::Good
        } else if score >= 60 {
            RatingBand::Fair
        } else if score >= 50 {
            RatingBand::NeedsImprovement
        } else {
            RatingBand::RequiresAttention
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatingBand::Excellent => "Excellent",
            RatingBand::VeryGood => "Very Good",
            RatingBand::Good => "Good",
            RatingBand::Fair => "Fair",
            RatingBand::NeedsImprovement => "Needs Improvement",
            RatingBand::RequiresAttention => "Requires Attention",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RatingBand::Excellent => "Outstanding performance across all key metrics",
            RatingBand::VeryGood => "Strong foundation with minor enhancement opportunities",
            RatingBand::Good => "Solid performance with clear improvement potential",
            RatingBand::Fair => "Average performance with significant enhancement opportunities",
            RatingBand::NeedsImprovement => "Below industry standards - strategic enhancements recommended",
            RatingBand::RequiresAttention => "Comprehensive plan review and improvements needed",
        }
    }
}

/// Readiness gauge coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessBand {
    Strong,
    Moderate,
    Weak,
}

impl ReadinessBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 75 {
            ReadinessBand::Strong
        } else if score >= 60 {
            ReadinessBand::Moderate
        } else {
            ReadinessBand::Weak
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engagement(participation: f64, contribution: f64, match_util: f64) -> ScenarioEngagement {
        ScenarioEngagement::new(participation, contribution, match_util)
    }

    #[test]
    fn test_readiness_weights() {
        // 60*0.4 + 40*0.35 + 40*0.25 = 24 + 14 + 10
        assert_eq!(readiness_score(60.0, 4.0, 40.0), 48);
        // 10% contribution is the ceiling
        assert_eq!(readiness_score(0.0, 20.0, 0.0), 35);
        assert_eq!(readiness_score(100.0, 10.0, 100.0), 100);
        assert_eq!(readiness_score(0.0, 0.0, 0.0), 0);
    }

    #[test]
    fn test_readiness_clamps_components() {
        assert_eq!(readiness_score(250.0, 40.0, 180.0), 100);
        assert_eq!(readiness_score(-20.0, -5.0, -1.0), 0);
        assert_eq!(readiness_score(f64::NAN, 10.0, 100.0), 60);
    }

    #[test]
    fn test_overall_grade_caps_each_metric() {
        let perfect = engagement(100.0, 15.0, 100.0);
        assert_eq!(overall_grade(&perfect), 100);

        // 60/85, 4/8, 40/90, readiness 48/75
        let weak = engagement(60.0, 4.0, 40.0);
        assert_eq!(weak.readiness_score, 48);
        let expected: f64 = (60.0 / 85.0 * 100.0) * 0.3
            + 50.0 * 0.25
            + (40.0 / 90.0 * 100.0) * 0.25
            + (48.0 / 75.0 * 100.0) * 0.2;
        assert_eq!(overall_grade(&weak), expected.round() as u32);
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(RatingBand::from_score(95), RatingBand::Excellent);
        assert_eq!(RatingBand::from_score(90), RatingBand::Excellent);
        assert_eq!(RatingBand::from_score(89), RatingBand::VeryGood);
        assert_eq!(RatingBand::from_score(70), RatingBand::Good);
        assert_eq!(RatingBand::from_score(60), RatingBand::Fair);
        assert_eq!(RatingBand::from_score(50), RatingBand::NeedsImprovement);
        assert_eq!(RatingBand::from_score(49), RatingBand::RequiresAttention);
        assert_eq!(RatingBand::NeedsImprovement.label(), "Needs Improvement");
    }

    #[test]
    fn test_readiness_gauge_bands() {
        assert_eq!(ReadinessBand::from_score(75), ReadinessBand::Strong);
        assert_eq!(ReadinessBand::from_score(74), ReadinessBand::Moderate);
        assert_eq!(ReadinessBand::from_score(59), ReadinessBand::Weak);
    }
}
