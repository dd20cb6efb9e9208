//! Participant behavioral journey

use serde::{Deserialize, Serialize};

use crate::heuristics::JOURNEY_TARGETS;
use crate::plan::PlanParameters;

/// One stage of the journey: where the plan is against where it could be
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStage {
    pub stage: String,
    pub current: f64,
    pub potential: f64,
}

impl JourneyStage {
    fn new(stage: &str, current: f64, potential: f64) -> Self {
        Self {
            stage: stage.to_string(),
            current,
            potential,
        }
    }
}

pub fn behavioral_journey(params: &PlanParameters) -> Vec<JourneyStage> {
    let t = &JOURNEY_TARGETS;
    vec![
        JourneyStage::new("Enrollment", params.participation_rate_pct(), t.enrollment),
        JourneyStage::new(
            "Initial Contribution",
            params.employee_contrib_rate_pct,
            t.initial_contribution,
        ),
        JourneyStage::new("Match Awareness", params.participants_max_match_pct, t.match_awareness),
        JourneyStage::new(
            "Optimization",
            params.participants_max_match_pct * t.optimization_share,
            t.optimization,
        ),
        JourneyStage::new("Long-term Planning", t.long_term_planning_current, t.long_term_planning),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_journey_stages() {
        let params = PlanParameters {
            eligible_employees: 100,
            participants: 70,
            employee_contrib_rate_pct: 5.0,
            participants_max_match_pct: 60.0,
            ..Default::default()
        };
        let stages = behavioral_journey(&params);
        let names: Vec<&str> = stages.iter().map(|s| s.stage.as_str()).collect();
        assert_eq!(
            names,
            ["Enrollment", "Initial Contribution", "Match Awareness", "Optimization", "Long-term Planning"]
        );

        assert_relative_eq!(stages[0].current, 70.0);
        assert_eq!(stages[0].potential, 95.0);
        assert_eq!(stages[1].current, 5.0);
        assert_relative_eq!(stages[3].current, 48.0, epsilon = 1e-12);
        assert_eq!(stages[4].current, 45.0);
        assert_eq!(stages[4].potential, 75.0);
    }
}
