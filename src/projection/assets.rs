//! Plan-level asset projection built from the average-account projection

use serde::{Deserialize, Serialize};

use super::cashflows::ProjectionResult;

/// Total plan assets at one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanAssetPoint {
    pub year: u32,
    pub total_assets: f64,
    pub avg_balance: f64,
    pub participants: f64,
}

/// Average balance scaled up by an effective headcount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanAssetProjection {
    pub participants: f64,
    pub points: Vec<PlanAssetPoint>,
}

impl PlanAssetProjection {
    /// Scale a projection by the participation rate applied to the eligible
    /// population, never more people than are eligible
    pub fn from_projection(
        projection: &ProjectionResult,
        participation_pct: f64,
        eligible_employees: u32,
    ) -> Self {
        let eligible = eligible_employees as f64;
        let participants = (participation_pct / 100.0 * eligible).clamp(0.0, eligible);

        let points = projection
            .annual
            .iter()
            .map(|r| PlanAssetPoint {
                year: r.year,
                total_assets: r.ending_balance * participants,
                avg_balance: r.ending_balance,
                participants,
            })
            .collect();

        Self {
            participants,
            points,
        }
    }

    pub fn at(&self, year: u32) -> Option<&PlanAssetPoint> {
        self.points.iter().find(|p| p.year == year)
    }

    pub fn last(&self) -> Option<&PlanAssetPoint> {
        self.points.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::YearRecord;

    fn projection() -> ProjectionResult {
        let mut result = ProjectionResult::new();
        result.add_year(YearRecord::snapshot(10_000.0));
        result.add_year(YearRecord {
            year: 1,
            starting_balance: 10_000.0,
            contributions: 1_000.0,
            investment_growth: 500.0,
            fees: 0.0,
            ending_balance: 11_500.0,
        });
        result
    }

    #[test]
    fn test_scales_by_effective_headcount() {
        let assets = PlanAssetProjection::from_projection(&projection(), 40.0, 200);
        assert_eq!(assets.participants, 80.0);
        assert_eq!(assets.at(1).unwrap().total_assets, 11_500.0 * 80.0);
        assert_eq!(assets.last().unwrap().avg_balance, 11_500.0);
    }

    #[test]
    fn test_headcount_capped_at_eligible() {
        let assets = PlanAssetProjection::from_projection(&projection(), 130.0, 50);
        assert_eq!(assets.participants, 50.0);
    }
}
