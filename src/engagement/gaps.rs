//! Gap analysis against industry targets and the per-metric improvement plan

use serde::{Deserialize, Serialize};

use super::{format_dollars, ScenarioEngagement};
use crate::heuristics::{
    SeverityThresholds, CONTRIBUTION_SEVERITY, INDUSTRY_TARGETS, MATCH_SEVERITY,
    PARTICIPATION_SEVERITY, READINESS_SEVERITY,
};
use crate::plan::{EnrollmentMethod, PlanParameters};

/// Engagement metric tracked against an industry target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Participation,
    Contribution,
    MatchUtilization,
    Readiness,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Participation,
        Metric::Contribution,
        Metric::MatchUtilization,
        Metric::Readiness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Participation => "Employee Participation",
            Metric::Contribution => "Average Savings Rate",
            Metric::MatchUtilization => "Match Participation",
            Metric::Readiness => "Retirement Readiness",
        }
    }

    pub fn target(self) -> f64 {
        match self {
            Metric::Participation => INDUSTRY_TARGETS.participation,
            Metric::Contribution => INDUSTRY_TARGETS.contribution,
            Metric::MatchUtilization => INDUSTRY_TARGETS.match_utilization,
            Metric::Readiness => INDUSTRY_TARGETS.readiness,
        }
    }

    pub fn thresholds(self) -> SeverityThresholds {
        match self {
            Metric::Participation => PARTICIPATION_SEVERITY,
            Metric::Contribution => CONTRIBUTION_SEVERITY,
            Metric::MatchUtilization => MATCH_SEVERITY,
            Metric::Readiness => READINESS_SEVERITY,
        }
    }

    fn current(self, metrics: &ScenarioEngagement) -> f64 {
        match self {
            Metric::Participation => metrics.participation_pct,
            Metric::Contribution => metrics.avg_contribution_pct,
            Metric::MatchUtilization => metrics.match_utilization_pct,
            Metric::Readiness => metrics.readiness_score as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    OnTarget,
    Moderate,
    High,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::OnTarget => "On Target",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// Severity of a signed gap (current - target)
pub fn classify(gap: f64, thresholds: SeverityThresholds) -> Severity {
    if gap >= 0.0 {
        return Severity::OnTarget;
    }
    let shortfall = -gap;
    match thresholds.critical {
        Some(critical) if shortfall > critical => Severity::Critical,
        _ if shortfall > thresholds.high => Severity::High,
        _ => Severity::Moderate,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricGap {
    pub metric: Metric,
    pub current: f64,
    pub target: f64,
    /// current - target; negative when below target
    pub gap: f64,
    pub severity: Severity,
}

impl MetricGap {
    pub fn measure(metric: Metric, metrics: &ScenarioEngagement) -> Self {
        let current = metric.current(metrics);
        let target = metric.target();
        let gap = current - target;
        Self {
            metric,
            current,
            target,
            gap,
            severity: classify(gap, metric.thresholds()),
        }
    }
}

/// Gap against every industry target, in fixed metric order
pub fn gap_analysis(metrics: &ScenarioEngagement) -> Vec<MetricGap> {
    Metric::ALL
        .iter()
        .map(|&metric| MetricGap::measure(metric, metrics))
        .collect()
}

/// Improvement card for one metric below target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityImprovement {
    pub metric: Metric,
    pub current: f64,
    pub target: f64,
    /// Points below target
    pub shortfall: f64,
    pub urgency: Severity,
    pub impact: String,
    pub action_plan: String,
    pub strategies: Vec<String>,
}

/// Improvement cards for participation, savings rate and match capture
///
/// Readiness is left to the recommendation list. An empty result means the
/// plan meets every target.
pub fn priority_improvements(
    metrics: &ScenarioEngagement,
    params: &PlanParameters,
) -> Vec<PriorityImprovement> {
    [Metric::Participation, Metric::Contribution, Metric::MatchUtilization]
        .iter()
        .map(|&metric| MetricGap::measure(metric, metrics))
        .filter(|gap| gap.gap < 0.0)
        .map(|gap| improvement(&gap, params))
        .collect()
}

fn improvement(gap: &MetricGap, params: &PlanParameters) -> PriorityImprovement {
    let shortfall = -gap.gap;
    let payroll = params.participant_payroll();

    let (impact, action_plan, strategies) = match gap.metric {
        Metric::Participation => {
            let people = (shortfall / 100.0 * params.eligible_employees as f64).round();
            let action_plan = match gap.severity {
                Severity::Critical => format!(
                    "Your participation rate is {:.1} points below industry standards. This represents {} employees not participating in retirement savings.",
                    shortfall, people
                ),
                Severity::High => format!(
                    "Participation is {:.1} points below target. {} additional employees could benefit from plan participation.",
                    shortfall, people
                ),
                _ => format!(
                    "Close to target but {:.1} points below industry benchmark. {} more participants would reach excellence standards.",
                    shortfall, people
                ),
            };
            let strategies = match params.enrollment_method {
                EnrollmentMethod::OptIn => [
                    "Implement auto-enrollment",
                    "Enhance new hire enrollment process",
                    "Targeted employee education campaigns",
                ],
                EnrollmentMethod::AutoEnroll => [
                    "Improve enrollment communication",
                    "Address participation barriers",
                    "Enhanced onboarding process",
                ],
            };
            (
                format!("{} additional participants", people),
                action_plan,
                strategies.to_vec(),
            )
        }
        Metric::Contribution => {
            let savings = payroll * shortfall / 100.0;
            let action_plan = match gap.severity {
                Severity::High => format!(
                    "Average savings rate is {:.1} points below the {}% adequacy target. Employees may not be saving enough for retirement.",
                    shortfall, gap.target
                ),
                _ => format!(
                    "Savings rate is {:.1} points below target. Small improvements could significantly impact retirement outcomes.",
                    shortfall
                ),
            };
            let strategies = if params.auto_escalation_enabled {
                [
                    "Increase default contribution rates",
                    "Enhanced contribution rate education",
                    "Salary increase campaigns",
                ]
            } else {
                [
                    "Implement auto-escalation",
                    "Contribution rate education",
                    "Annual enrollment campaigns",
                ]
            };
            (
                format!("${} additional annual savings", format_dollars(savings)),
                action_plan,
                strategies.to_vec(),
            )
        }
        Metric::MatchUtilization => {
            let unused = shortfall / 100.0 * payroll * params.employer_match_max_pct / 100.0;
            let action_plan = match gap.severity {
                Severity::Critical => format!(
                    "Only {:.1}% of participants maximize their employer match. Employees are leaving significant \"free money\" on the table.",
                    gap.current
                ),
                Severity::High => format!(
                    "Match participation is {:.1} points below target. Enhanced education could help employees capture more employer contributions.",
                    shortfall
                ),
                _ => format!(
                    "Close to target but {:.1} points below optimal match utilization.",
                    shortfall
                ),
            };
            (
                format!("${} potential additional match utilization", format_dollars(unused)),
                action_plan,
                vec![
                    "Enhanced match education campaigns",
                    "Contribution calculators and tools",
                    "Personalized match statements",
                    "Annual match optimization reviews",
                ],
            )
        }
        Metric::Readiness => {
            let action_plan = match gap.severity {
                Severity::Critical | Severity::High => format!(
                    "Retirement readiness scores {:.0} against a target of {:.0}. Participation, savings rate and match capture all feed this score.",
                    gap.current, gap.target
                ),
                _ => format!(
                    "Readiness is {:.0} points below target. Small gains in savings rate or match capture would close it.",
                    shortfall
                ),
            };
            (
                format!("{:.0} readiness points to target", shortfall),
                action_plan,
                vec![
                    "Retirement income projections on statements",
                    "Savings rate and match education",
                    "Review plan design defaults",
                ],
            )
        }
    };

    PriorityImprovement {
        metric: gap.metric,
        current: gap.current,
        target: gap.target,
        shortfall,
        urgency: gap.severity,
        impact,
        action_plan,
        strategies: strategies.into_iter().map(String::from).collect(),
    }
}
