//! Policy scenarios and the effective rates each one implies

mod features;
mod resolver;
mod runner;

pub use features::FeatureConfig;
pub use resolver::{menu_multiplier, vesting_multiplier, ScenarioOutcome, ScenarioResolver};
pub use runner::{ScenarioProjection, ScenarioRunner};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alternative plan policies compared against the status quo
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScenarioId {
    Current,
    TenPercentContribution,
    FifteenPercentContribution,
    OptimizedMatch,
    AutoEnroll,
    /// Custom feature configuration applied on top of the plan
    Enhanced,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 6] = [
        ScenarioId::Current,
        ScenarioId::TenPercentContribution,
        ScenarioId::FifteenPercentContribution,
        ScenarioId::OptimizedMatch,
        ScenarioId::AutoEnroll,
        ScenarioId::Enhanced,
    ];

    /// Scenarios shown on the balance comparison page
    pub const BALANCE_COMPARISON: [ScenarioId; 4] = [
        ScenarioId::Current,
        ScenarioId::TenPercentContribution,
        ScenarioId::FifteenPercentContribution,
        ScenarioId::AutoEnroll,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScenarioId::Current => "Current Plan (Status Quo)",
            ScenarioId::TenPercentContribution => "10% Employee Contribution",
            ScenarioId::FifteenPercentContribution => "15% Employee Contribution",
            ScenarioId::OptimizedMatch => "Optimized Match",
            ScenarioId::AutoEnroll => "Auto-Enrollment",
            ScenarioId::Enhanced => "Enhanced Engagement",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ScenarioId::Current => "current",
            ScenarioId::TenPercentContribution => "tenPercent",
            ScenarioId::FifteenPercentContribution => "fifteenPercent",
            ScenarioId::OptimizedMatch => "optimizedMatch",
            ScenarioId::AutoEnroll => "autoEnroll",
            ScenarioId::Enhanced => "enhanced",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScenarioId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioId::ALL
            .iter()
            .copied()
            .find(|id| id.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown scenario '{}'", s))
    }
}

/// Contribution and match-capture rates used for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveRates {
    pub employee_contrib_rate_pct: f64,
    pub match_utilization_pct: f64,
}

impl EffectiveRates {
    pub fn new(employee_contrib_rate_pct: f64, match_utilization_pct: f64) -> Self {
        Self {
            employee_contrib_rate_pct,
            match_utilization_pct,
        }
    }
}
