//! Report assembly
//!
//! Runs the requested scenarios, scores engagement and gathers everything a
//! presentation layer renders into one serializable `PlanReport`.

mod comparison;
mod insights;

pub use comparison::{
    balance_deltas, comparison_table, ComparisonCell, ComparisonRow, ScenarioBalance, ScenarioDelta,
    SummaryCards, YearDelta,
};
pub use insights::{projection_insights, PlanAssetComparison, ProjectionInsight};

use log::info;
use serde::{Deserialize, Serialize};

use crate::engagement::{
    gap_analysis, overall_grade, priority_improvements, recommendations, scenario_recommendations,
    EngagementMetrics, EngagementModel, MetricGap, PriorityImprovement, RatingBand, ReadinessBand,
    Recommendation,
};
use crate::error::Result;
use crate::plan::PlanParameters;
use crate::projection::{PlanAssetProjection, ProjectionConfig, ProjectionResult};
use crate::scenario::{FeatureConfig, ScenarioId, ScenarioProjection, ScenarioResolver, ScenarioRunner};

/// Overall grade and rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCard {
    pub overall_grade: u32,
    pub rating: RatingBand,
    pub rating_label: String,
    pub rating_description: String,
    pub readiness_band: ReadinessBand,
}

impl ReportCard {
    pub fn from_metrics(metrics: &EngagementMetrics) -> Self {
        let grade = overall_grade(&metrics.current);
        let rating = RatingBand::from_score(grade);
        Self {
            overall_grade: grade,
            rating,
            rating_label: rating.label().to_string(),
            rating_description: rating.description().to_string(),
            readiness_band: ReadinessBand::from_score(metrics.current.readiness_score),
        }
    }
}

/// Recommendations for one what-if view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioView {
    pub scenario: ScenarioId,
    pub recommendations: Vec<Recommendation>,
}

/// Everything computed for one plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub plan: PlanParameters,
    pub projections: Vec<ScenarioProjection>,
    pub deltas: Vec<ScenarioDelta>,
    pub summary_cards: SummaryCards,
    pub comparison_table: Vec<ComparisonRow>,
    pub engagement: EngagementMetrics,
    pub gaps: Vec<MetricGap>,
    pub report_card: ReportCard,
    pub priority_improvements: Vec<PriorityImprovement>,
    pub recommendations: Vec<Recommendation>,
    pub scenario_views: Vec<ScenarioView>,
    pub plan_assets: PlanAssetComparison,
    pub estimated_total_fee_pct: f64,
}

impl PlanReport {
    pub fn projection(&self, scenario: ScenarioId) -> Option<&ProjectionResult> {
        self.projections
            .iter()
            .find(|p| p.scenario == scenario)
            .map(|p| &p.result)
    }
}

/// Builds `PlanReport`s from a shared resolver so projections and
/// engagement figures agree
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    runner: ScenarioRunner,
    engagement: EngagementModel,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembler whose Enhanced scenario uses the given feature override
    pub fn with_features(features: FeatureConfig) -> Self {
        let resolver = ScenarioResolver::with_features(features);
        Self {
            runner: ScenarioRunner::with_resolver(resolver.clone()),
            engagement: EngagementModel::new(resolver),
        }
    }

    pub fn with_config(mut self, config: ProjectionConfig) -> Self {
        self.runner = self.runner.with_config(config);
        self
    }

    /// Assemble a report for the requested scenarios
    ///
    /// Current is always projected, first, since every comparison is made
    /// against it. Duplicate requests are ignored.
    pub fn assemble(&self, params: &PlanParameters, scenarios: &[ScenarioId]) -> Result<PlanReport> {
        self.runner.resolver().validate(params)?;

        let mut requested = vec![ScenarioId::Current];
        for &scenario in scenarios {
            if !requested.contains(&scenario) {
                requested.push(scenario);
            }
        }

        let projections = self.runner.run_all(params, &requested)?;
        let current = &projections[0].result;

        let deltas: Vec<ScenarioDelta> = projections
            .iter()
            .skip(1)
            .map(|p| ScenarioDelta {
                scenario: p.scenario,
                years: balance_deltas(current, &p.result),
            })
            .collect();

        let engagement = self.engagement.score(params)?;
        let plan_assets = self.plan_assets(params, &projections, &engagement)?;

        let scenario_views: Vec<ScenarioView> = [ScenarioId::AutoEnroll, ScenarioId::Enhanced]
            .iter()
            .map(|&scenario| ScenarioView {
                scenario,
                recommendations: scenario_recommendations(&engagement, scenario, params),
            })
            .collect();

        let report = PlanReport {
            plan: params.clone(),
            summary_cards: SummaryCards::from_projections(&projections),
            comparison_table: comparison_table(&projections),
            deltas,
            gaps: gap_analysis(&engagement.current),
            report_card: ReportCard::from_metrics(&engagement),
            priority_improvements: priority_improvements(&engagement.current, params),
            recommendations: recommendations(&engagement, params),
            scenario_views,
            plan_assets,
            estimated_total_fee_pct: params
                .fee_structure
                .estimated_total_fee_pct(params.participants as f64, params.avg_salary),
            engagement,
            projections,
        };

        info!(
            "report assembled: {} scenarios, grade {} ({})",
            report.projections.len(),
            report.report_card.overall_grade,
            report.report_card.rating_label
        );

        Ok(report)
    }

    fn plan_assets(
        &self,
        params: &PlanParameters,
        projections: &[ScenarioProjection],
        engagement: &EngagementMetrics,
    ) -> Result<PlanAssetComparison> {
        let current = PlanAssetProjection::from_projection(
            &projections[0].result,
            engagement.current.participation_pct,
            params.eligible_employees,
        );

        let enhanced_result = match projections.iter().find(|p| p.scenario == ScenarioId::Enhanced) {
            Some(p) => p.result.clone(),
            None => self.runner.run(params, ScenarioId::Enhanced)?.result,
        };
        let enhanced = PlanAssetProjection::from_projection(
            &enhanced_result,
            engagement.enhanced.participation_pct,
            params.eligible_employees,
        );

        Ok(PlanAssetComparison::new(current, enhanced))
    }
}
