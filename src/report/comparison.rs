//! Scenario-versus-Current balance comparisons

use serde::{Deserialize, Serialize};

use crate::projection::ProjectionResult;
use crate::scenario::{ScenarioId, ScenarioProjection};

/// Balance of one scenario in one year, against Current
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearDelta {
    pub year: u32,
    pub balance: f64,
    pub delta_vs_current: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDelta {
    pub scenario: ScenarioId,
    pub years: Vec<YearDelta>,
}

/// Per-year ending-balance differences, matched up by projection year
pub fn balance_deltas(current: &ProjectionResult, other: &ProjectionResult) -> Vec<YearDelta> {
    other
        .annual
        .iter()
        .map(|r| {
            let baseline = current.balance_at(r.year).unwrap_or(0.0);
            YearDelta {
                year: r.year,
                balance: r.ending_balance,
                delta_vs_current: r.ending_balance - baseline,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioBalance {
    pub scenario: ScenarioId,
    pub balance: f64,
}

/// Headline figures at the top of the balance page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCards {
    pub starting_balance: f64,
    pub horizon_years: u32,
    pub final_balances: Vec<ScenarioBalance>,
    /// Highest-ending scenario and its gain over Current
    pub best_case: Option<ScenarioBalance>,
}

impl SummaryCards {
    pub fn from_projections(projections: &[ScenarioProjection]) -> Self {
        let current = projections.iter().find(|p| p.scenario == ScenarioId::Current);
        let current_final = current.map(|p| p.result.final_balance()).unwrap_or(0.0);

        let final_balances: Vec<ScenarioBalance> = projections
            .iter()
            .map(|p| ScenarioBalance {
                scenario: p.scenario,
                balance: p.result.final_balance(),
            })
            .collect();

        let best_case = final_balances
            .iter()
            .filter(|b| b.scenario != ScenarioId::Current)
            .max_by(|a, b| a.balance.total_cmp(&b.balance))
            .map(|best| ScenarioBalance {
                scenario: best.scenario,
                balance: best.balance - current_final,
            });

        Self {
            starting_balance: current
                .or_else(|| projections.first())
                .map(|p| p.result.starting_balance())
                .unwrap_or(0.0),
            horizon_years: projections.first().map(|p| p.result.horizon_years()).unwrap_or(0),
            final_balances,
            best_case,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonCell {
    pub scenario: ScenarioId,
    pub balance: f64,
    pub delta_vs_current: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub year: u32,
    pub cells: Vec<ComparisonCell>,
}

/// Balance per scenario at each sampled chart year
pub fn comparison_table(projections: &[ScenarioProjection]) -> Vec<ComparisonRow> {
    let current = match projections.iter().find(|p| p.scenario == ScenarioId::Current) {
        Some(current) => current,
        None => return Vec::new(),
    };

    current
        .result
        .chart
        .iter()
        .map(|point| ComparisonRow {
            year: point.year,
            cells: projections
                .iter()
                .filter_map(|p| {
                    let balance = p.result.balance_at(point.year)?;
                    Some(ComparisonCell {
                        scenario: p.scenario,
                        balance,
                        delta_vs_current: balance - point.balance,
                    })
                })
                .collect(),
        })
        .collect()
}
