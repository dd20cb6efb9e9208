//! Priority-ordered recommendation list
//!
//! Rules fire in a fixed order and number themselves as they go, so the same
//! plan always yields the same list.

use serde::{Deserialize, Serialize};

use super::{format_dollars, EngagementMetrics, ScenarioEngagement};
use crate::heuristics::{INDUSTRY_TARGETS, RECOMMENDATION_TRIGGERS};
use crate::plan::{EnrollmentMethod, PlanParameters};
use crate::scenario::ScenarioId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactTier {
    Critical,
    High,
    Medium,
    Enhancement,
    /// Describes a what-if view rather than an action
    Scenario,
}

impl ImpactTier {
    pub fn label(self) -> &'static str {
        match self {
            ImpactTier::Critical => "Critical",
            ImpactTier::High => "High",
            ImpactTier::Medium => "Medium",
            ImpactTier::Enhancement => "Enhancement",
            ImpactTier::Scenario => "Scenario",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GapType {
    Participation,
    Match,
    Contribution,
    Engagement,
    Demographic,
    Overall,
    Optimization,
    Scenario,
    Remaining,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: u32,
    pub title: String,
    pub description: String,
    pub impact: ImpactTier,
    pub gap_type: GapType,
}

/// Accumulates recommendations with consecutive priorities
struct RecommendationList {
    items: Vec<Recommendation>,
}

impl RecommendationList {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn push(&mut self, title: &str, description: String, impact: ImpactTier, gap_type: GapType) {
        self.items.push(Recommendation {
            priority: self.items.len() as u32 + 1,
            title: title.to_string(),
            description,
            impact,
            gap_type,
        });
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Unclaimed match dollars per year for a match-utilization shortfall
fn unused_match_dollars(shortfall_pct: f64, params: &PlanParameters) -> f64 {
    shortfall_pct / 100.0 * params.participant_payroll() * params.employer_match_max_pct / 100.0
}

/// Recommendations for the plan as it stands today
pub fn recommendations(metrics: &EngagementMetrics, params: &PlanParameters) -> Vec<Recommendation> {
    let t = &INDUSTRY_TARGETS;
    let triggers = &RECOMMENDATION_TRIGGERS;
    let current = &metrics.current;

    let participation_gap = current.participation_pct - t.participation;
    let contrib_gap = current.avg_contribution_pct - t.contribution;
    let match_gap = current.match_utilization_pct - t.match_utilization;
    let readiness_gap = current.readiness_score as f64 - t.readiness;

    let opt_in = params.enrollment_method == EnrollmentMethod::OptIn;
    let mut list = RecommendationList::new();

    if opt_in && participation_gap < -triggers.participation_critical_gap {
        let increase = metrics.auto_enroll.participation_pct - current.participation_pct;
        let new_participants = (increase / 100.0 * params.eligible_employees as f64).round();
        list.push(
            "CRITICAL: Implement Auto-Enrollment",
            format!(
                "Your participation rate is {:.1} points below industry target. Auto-enrollment could add {} participants and increase participation by {:.1} points, moving you from {:.1}% to {:.1}%.",
                participation_gap.abs(),
                new_participants,
                increase,
                current.participation_pct,
                metrics.auto_enroll.participation_pct
            ),
            ImpactTier::Critical,
            GapType::Participation,
        );
    } else if opt_in && participation_gap < 0.0 {
        let increase = metrics.auto_enroll.participation_pct - current.participation_pct;
        list.push(
            "Implement Auto-Enrollment",
            format!(
                "Close the {:.1}-point participation gap with auto-enrollment. This could increase participation by {:.1} percentage points.",
                participation_gap.abs(),
                increase
            ),
            ImpactTier::High,
            GapType::Participation,
        );
    }

    if match_gap < -triggers.match_critical_gap {
        let unused = unused_match_dollars(-match_gap, params);
        list.push(
            "CRITICAL: Emergency Match Education Campaign",
            format!(
                "Only {:.1}% of participants maximize their match ({:.1} points below target). Employees are leaving approximately ${} in match dollars on the table annually.",
                current.match_utilization_pct,
                match_gap.abs(),
                format_dollars(unused)
            ),
            ImpactTier::Critical,
            GapType::Match,
        );
    } else if match_gap < 0.0 {
        let unused = unused_match_dollars(-match_gap, params);
        list.push(
            "Enhance Match Communication Strategy",
            format!(
                "Close the {:.1}-point match utilization gap. Targeted education could help recover ${} in unused match dollars annually.",
                match_gap.abs(),
                format_dollars(unused)
            ),
            ImpactTier::High,
            GapType::Match,
        );
    }

    if contrib_gap < -triggers.contribution_critical_gap {
        let additional = params.participant_payroll() * contrib_gap.abs() / 100.0;
        list.push(
            "CRITICAL: Address Contribution Inadequacy",
            format!(
                "Average contribution rate is {:.1} points below the {}% retirement adequacy target. Auto-escalation and education could help participants save an additional ${} annually.",
                contrib_gap.abs(),
                t.contribution,
                format_dollars(additional)
            ),
            ImpactTier::Critical,
            GapType::Contribution,
        );
    } else if contrib_gap < 0.0 {
        list.push(
            "Boost Contribution Rates",
            format!(
                "Average contributions are {:.1} points below target. Consider auto-escalation and contribution rate education campaigns.",
                contrib_gap.abs()
            ),
            ImpactTier::High,
            GapType::Contribution,
        );
    }

    if !params.auto_escalation_enabled && contrib_gap < 0.0 {
        list.push(
            "Add Auto-Escalation Feature",
            format!(
                "Auto-escalation can increase average contribution rates by 2-3 percentage points over time, helping close your {:.1}-point contribution gap.",
                contrib_gap.abs()
            ),
            ImpactTier::High,
            GapType::Contribution,
        );
    }

    if params.investment_options_count > triggers.menu_streamline_above {
        list.push(
            "Streamline Investment Menu",
            format!(
                "Your plan offers {} investment options. Research shows 10-12 options optimize engagement while reducing choice paralysis. This could improve overall engagement scores.",
                params.investment_options_count
            ),
            ImpactTier::Medium,
            GapType::Engagement,
        );
    }

    if params.avg_age_years < triggers.young_workforce_age && (participation_gap < 0.0 || contrib_gap < 0.0) {
        list.push(
            "Target Younger Employee Engagement",
            format!(
                "Your younger workforce (avg age {}) shows typical engagement challenges. Implement mobile-first communication, student loan assistance, and compound growth education to address participation and contribution gaps.",
                params.avg_age_years
            ),
            ImpactTier::Medium,
            GapType::Demographic,
        );
    }

    if params.avg_tenure_years < triggers.short_tenure_years && participation_gap < 0.0 {
        list.push(
            "Address High Turnover Impact",
            format!(
                "Short average tenure ({} years) limits engagement. Consider immediate vesting and intensive new hire engagement to improve your {:.1}-point participation gap.",
                params.avg_tenure_years,
                participation_gap.abs()
            ),
            ImpactTier::Medium,
            GapType::Demographic,
        );
    }

    if readiness_gap < -triggers.readiness_gap {
        list.push(
            "Comprehensive Readiness Improvement Plan",
            format!(
                "Overall retirement readiness score is {} points below target. Implement a multi-faceted approach addressing the gaps identified above to improve long-term outcomes.",
                readiness_gap.abs()
            ),
            ImpactTier::High,
            GapType::Overall,
        );
    }

    if list.is_empty() {
        list.push(
            "Plan Performing Well - Optimization Opportunities",
            "Your plan meets or exceeds industry targets. Consider advanced features like managed accounts, financial wellness programs, or retirement income planning to maintain leadership position.".to_string(),
            ImpactTier::Enhancement,
            GapType::Optimization,
        );
    }

    list.items
}

/// Recommendations for a what-if view
///
/// AutoEnroll and Enhanced describe the scenario and whatever gaps it leaves
/// open. Every other scenario gets the plan's own list.
pub fn scenario_recommendations(
    metrics: &EngagementMetrics,
    scenario: ScenarioId,
    params: &PlanParameters,
) -> Vec<Recommendation> {
    let data: &ScenarioEngagement = match scenario {
        ScenarioId::AutoEnroll => &metrics.auto_enroll,
        ScenarioId::Enhanced => &metrics.enhanced,
        _ => return recommendations(metrics, params),
    };

    let t = &INDUSTRY_TARGETS;
    let contrib_gap = data.avg_contribution_pct - t.contribution;
    let match_gap = data.match_utilization_pct - t.match_utilization;
    let mut list = RecommendationList::new();

    if scenario == ScenarioId::AutoEnroll {
        let added = ((data.participation_pct - metrics.current.participation_pct) / 100.0
            * params.eligible_employees as f64)
            .round();
        list.push(
            "Auto-Enrollment Implementation",
            format!(
                "This scenario shows the impact of implementing auto-enrollment. Participation would increase to {:.1}%, adding approximately {} new participants.",
                data.participation_pct, added
            ),
            ImpactTier::Scenario,
            GapType::Scenario,
        );
    } else {
        list.push(
            "Enhanced Engagement Program",
            format!(
                "This scenario combines auto-enrollment with behavioral enhancements. Participation would reach {:.1}% with improved contribution rates and match utilization.",
                data.participation_pct
            ),
            ImpactTier::Scenario,
            GapType::Scenario,
        );
    }

    let program = if scenario == ScenarioId::AutoEnroll {
        "auto-enrollment"
    } else {
        "enhanced engagement"
    };

    if contrib_gap < 0.0 {
        list.push(
            "Further Contribution Improvements Needed",
            format!(
                "Even with {}, average contributions would be {:.1} points below target. Consider additional auto-escalation features.",
                program,
                contrib_gap.abs()
            ),
            ImpactTier::Medium,
            GapType::Remaining,
        );
    }

    if match_gap < 0.0 {
        list.push(
            "Match Education Still Needed",
            format!(
                "Match utilization would improve but remain {:.1} points below target. Continue targeted match education campaigns.",
                match_gap.abs()
            ),
            ImpactTier::Medium,
            GapType::Remaining,
        );
    }

    if list.len() == 1 {
        list.push(
            "Excellent Results",
            "This scenario achieves or exceeds most industry targets. Focus on maintaining these improvements and monitoring ongoing engagement.".to_string(),
            ImpactTier::Enhancement,
            GapType::Success,
        );
    }

    list.items
}
