//! Engagement scoring model
//!
//! Scores participation, contribution adequacy and match capture for the
//! Current plan and for the AutoEnroll and Enhanced alternatives. Scenario
//! figures come from the same `ScenarioResolver` the projection engine uses,
//! so the two views never drift apart.

mod scoring;
mod demographics;
mod journey;
mod gaps;
mod recommendations;

pub use scoring::{overall_grade, readiness_score, RatingBand, ReadinessBand};
pub use demographics::{demographic_insights, AgeBandInsight};
pub use journey::{behavioral_journey, JourneyStage};
pub use gaps::{
    classify, gap_analysis, priority_improvements, Metric, MetricGap, PriorityImprovement, Severity,
};
pub use recommendations::{
    recommendations, scenario_recommendations, GapType, ImpactTier, Recommendation,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plan::PlanParameters;
use crate::scenario::{ScenarioId, ScenarioResolver};

/// Engagement figures for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEngagement {
    pub participation_pct: f64,
    pub avg_contribution_pct: f64,
    pub match_utilization_pct: f64,
    pub readiness_score: u32,
}

impl ScenarioEngagement {
    pub fn new(participation_pct: f64, avg_contribution_pct: f64, match_utilization_pct: f64) -> Self {
        Self {
            participation_pct,
            avg_contribution_pct,
            match_utilization_pct,
            readiness_score: readiness_score(participation_pct, avg_contribution_pct, match_utilization_pct),
        }
    }
}

/// Change in each metric between two scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementPotential {
    pub participation_pct: f64,
    pub avg_contribution_pct: f64,
    pub match_utilization_pct: f64,
    pub readiness_score: i32,
}

impl ImprovementPotential {
    pub fn between(from: &ScenarioEngagement, to: &ScenarioEngagement) -> Self {
        Self {
            participation_pct: to.participation_pct - from.participation_pct,
            avg_contribution_pct: to.avg_contribution_pct - from.avg_contribution_pct,
            match_utilization_pct: to.match_utilization_pct - from.match_utilization_pct,
            readiness_score: to.readiness_score as i32 - from.readiness_score as i32,
        }
    }
}

/// Full engagement picture for a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMetrics {
    pub current: ScenarioEngagement,
    pub auto_enroll: ScenarioEngagement,
    pub enhanced: ScenarioEngagement,
    pub demographics: Vec<AgeBandInsight>,
    pub journey: Vec<JourneyStage>,
}

impl EngagementMetrics {
    /// Figures for a scored scenario; contribution-only scenarios are not scored
    pub fn scenario(&self, scenario: ScenarioId) -> Option<&ScenarioEngagement> {
        match scenario {
            ScenarioId::Current => Some(&self.current),
            ScenarioId::AutoEnroll => Some(&self.auto_enroll),
            ScenarioId::Enhanced => Some(&self.enhanced),
            _ => None,
        }
    }

    /// What switching to auto-enrollment would gain over today
    pub fn improvement_potential(&self) -> ImprovementPotential {
        ImprovementPotential::between(&self.current, &self.auto_enroll)
    }
}

/// Scores a plan against the industry targets
#[derive(Debug, Clone, Default)]
pub struct EngagementModel {
    resolver: ScenarioResolver,
}

impl EngagementModel {
    pub fn new(resolver: ScenarioResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ScenarioResolver {
        &self.resolver
    }

    /// Score the Current, AutoEnroll and Enhanced scenarios
    pub fn score(&self, params: &PlanParameters) -> Result<EngagementMetrics> {
        self.resolver.validate(params)?;

        let metrics = EngagementMetrics {
            current: self.scenario_engagement(ScenarioId::Current, params),
            auto_enroll: self.scenario_engagement(ScenarioId::AutoEnroll, params),
            enhanced: self.scenario_engagement(ScenarioId::Enhanced, params),
            demographics: demographic_insights(params.avg_age_years),
            journey: behavioral_journey(params),
        };

        debug!(
            "readiness current {} / auto-enroll {} / enhanced {}",
            metrics.current.readiness_score,
            metrics.auto_enroll.readiness_score,
            metrics.enhanced.readiness_score
        );

        Ok(metrics)
    }

    pub fn scenario_engagement(&self, scenario: ScenarioId, params: &PlanParameters) -> ScenarioEngagement {
        let outcome = self.resolver.outcome(scenario, params);
        ScenarioEngagement::new(
            outcome.participation_pct,
            outcome.rates.employee_contrib_rate_pct,
            outcome.rates.match_utilization_pct,
        )
    }
}

/// Whole-dollar amount with thousands separators, e.g. `12,345`
///
/// Same grouping as an en-US locale string with no fraction digits.
pub fn format_dollars(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
