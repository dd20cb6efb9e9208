//! Plan-asset comparison between the plan as it stands and the Enhanced design

use serde::{Deserialize, Serialize};

use crate::engagement::format_dollars;
use crate::heuristics::INSIGHT_THRESHOLDS;
use crate::projection::{PlanAssetPoint, PlanAssetProjection};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInsight {
    pub title: String,
    pub description: String,
}

/// Current and Enhanced plan assets side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanAssetComparison {
    pub current: PlanAssetProjection,
    pub enhanced: PlanAssetProjection,
    /// Enhanced minus Current total assets at the horizon
    pub asset_improvement: f64,
    /// Improvement as a percentage of Current; 0 when Current holds nothing
    pub improvement_pct: f64,
    pub insights: Vec<ProjectionInsight>,
}

impl PlanAssetComparison {
    pub fn new(current: PlanAssetProjection, enhanced: PlanAssetProjection) -> Self {
        let (asset_improvement, improvement_pct) = match (current.last(), enhanced.last()) {
            (Some(c), Some(e)) => (e.total_assets - c.total_assets, pct_change(c.total_assets, e.total_assets)),
            _ => (0.0, 0.0),
        };
        let insights = projection_insights(&current, &enhanced);

        Self {
            current,
            enhanced,
            asset_improvement,
            improvement_pct,
            insights,
        }
    }
}

fn pct_change(from: f64, to: f64) -> f64 {
    if from <= 0.0 {
        0.0
    } else {
        (to - from) / from * 100.0
    }
}

/// Narrative insights for the Enhanced design
///
/// Empty when the design changes too little to matter.
pub fn projection_insights(
    current: &PlanAssetProjection,
    enhanced: &PlanAssetProjection,
) -> Vec<ProjectionInsight> {
    let th = &INSIGHT_THRESHOLDS;
    let (cur_end, enh_end): (&PlanAssetPoint, &PlanAssetPoint) = match (current.last(), enhanced.last()) {
        (Some(c), Some(e)) => (c, e),
        _ => return Vec::new(),
    };
    let horizon = cur_end.year;
    let mut insights = Vec::new();

    let asset_growth = enh_end.total_assets - cur_end.total_assets;
    let growth_pct = pct_change(cur_end.total_assets, enh_end.total_assets);
    if growth_pct > th.asset_growth_pct {
        insights.push(ProjectionInsight {
            title: "Significant Asset Growth Potential".to_string(),
            description: format!(
                "Plan feature improvements could increase total plan assets by ${:.1} million ({:.1}%) over {} years, demonstrating substantial long-term value.",
                asset_growth / 1_000_000.0,
                growth_pct,
                horizon
            ),
        });
    }

    let balance_growth = enh_end.avg_balance - cur_end.avg_balance;
    let balance_growth_pct = pct_change(cur_end.avg_balance, enh_end.avg_balance);
    if balance_growth_pct > th.per_participant_pct {
        insights.push(ProjectionInsight {
            title: "Employee Retirement Outcome Improvement".to_string(),
            description: format!(
                "On average, each participant could have ${} more ({:.1}% increase) in their retirement account after {} years with these plan improvements.",
                format_dollars(balance_growth),
                balance_growth_pct,
                horizon
            ),
        });
    }

    if let (Some(cur_early), Some(enh_early)) = (current.at(th.early_year), enhanced.at(th.early_year)) {
        let early_pct = pct_change(cur_early.total_assets, enh_early.total_assets);
        if early_pct > th.early_growth_pct {
            insights.push(ProjectionInsight {
                title: "Compound Growth Acceleration".to_string(),
                description: format!(
                    "The improvements show accelerating benefits over time, with {:.1}% more assets after {} years growing to {:.1}% more after {} years due to compound growth effects.",
                    early_pct, th.early_year, growth_pct, horizon
                ),
            });
        }
    }

    insights
}
