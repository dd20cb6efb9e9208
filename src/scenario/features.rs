//! Feature configuration override behind the Enhanced scenario

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plan::{percentage, EnrollmentMethod, PlanParameters, VestingSchedule};

/// Plan-design changes a sponsor is considering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureConfig {
    pub auto_enroll: bool,
    pub default_auto_rate_pct: f64,
    pub auto_escalate: bool,
    pub max_escalation_rate_pct: f64,
    /// Maximum matched contribution under the proposed formula
    pub match_formula_pct: f64,
    pub vesting_schedule: VestingSchedule,
    pub investment_options: u32,
}

impl FeatureConfig {
    /// Configuration that leaves the plan exactly as it is today
    pub fn from_plan(params: &PlanParameters) -> Self {
        Self {
            auto_enroll: params.enrollment_method == EnrollmentMethod::AutoEnroll,
            default_auto_rate_pct: params.default_auto_contrib_rate_pct,
            auto_escalate: params.auto_escalation_enabled,
            max_escalation_rate_pct: if params.max_auto_escalation_rate_pct > 0.0 {
                params.max_auto_escalation_rate_pct
            } else {
                10.0
            },
            match_formula_pct: params.employer_match_max_pct,
            vesting_schedule: params.vesting_schedule,
            investment_options: params.investment_options_count,
        }
    }

    /// Merge the override onto a plan, producing the derived parameter set
    pub fn apply(&self, params: &PlanParameters) -> PlanParameters {
        PlanParameters {
            enrollment_method: if self.auto_enroll {
                EnrollmentMethod::AutoEnroll
            } else {
                EnrollmentMethod::OptIn
            },
            default_auto_contrib_rate_pct: self.default_auto_rate_pct,
            auto_escalation_enabled: self.auto_escalate,
            max_auto_escalation_rate_pct: self.max_escalation_rate_pct,
            employer_match_max_pct: self.match_formula_pct,
            vesting_schedule: self.vesting_schedule,
            investment_options_count: self.investment_options,
            ..params.clone()
        }
    }

    /// Reject override rates outside [0, 100]
    pub fn validate(&self) -> Result<()> {
        percentage("defaultAutoRatePct", self.default_auto_rate_pct)?;
        percentage("maxEscalationRatePct", self.max_escalation_rate_pct)?;
        percentage("matchFormulaPct", self.match_formula_pct)?;
        Ok(())
    }

    /// Parse and validate an override document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let features: Self = serde_json::from_str(json)?;
        features.validate()?;
        Ok(features)
    }
}
