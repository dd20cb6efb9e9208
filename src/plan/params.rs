//! Plan-level parameters consumed by every engine

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::fees::{FeeStructure, FeesPaidBy, PlanFeeModel};

/// How new hires enter the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnrollmentMethod {
    #[default]
    OptIn,
    AutoEnroll,
}

impl EnrollmentMethod {
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "opt-in" => Some(EnrollmentMethod::OptIn),
            "auto-enroll" => Some(EnrollmentMethod::AutoEnroll),
            _ => None,
        }
    }
}

/// Employer contribution vesting policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VestingSchedule {
    #[default]
    Immediate,
    TwoYear,
    ThreeYear,
    Graded,
}

impl VestingSchedule {
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "immediate" => Some(VestingSchedule::Immediate),
            "2-year" => Some(VestingSchedule::TwoYear),
            "3-year" => Some(VestingSchedule::ThreeYear),
            "graded" => Some(VestingSchedule::Graded),
            _ => None,
        }
    }
}

/// Immutable per-run plan description
///
/// All `*_pct` fields are whole-number percentages (6.0 means 6%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanParameters {
    pub eligible_employees: u32,
    pub participants: u32,
    pub avg_salary: f64,
    pub avg_account_balance: f64,
    pub investment_return_pct: f64,
    pub employee_contrib_rate_pct: f64,
    pub employer_contrib_rate_pct: f64,
    pub employer_match_max_pct: f64,
    /// Share of participants contributing enough to capture the full match
    pub participants_max_match_pct: f64,
    pub auto_escalation_enabled: bool,
    pub max_auto_escalation_rate_pct: f64,
    pub enrollment_method: EnrollmentMethod,
    pub default_auto_contrib_rate_pct: f64,
    pub vesting_schedule: VestingSchedule,
    pub investment_options_count: u32,
    pub avg_tenure_years: f64,
    pub avg_age_years: u32,
    pub fee_structure: FeeStructure,
    pub fees_paid_by: FeesPaidBy,
}

impl Default for PlanParameters {
    fn default() -> Self {
        Self {
            eligible_employees: 0,
            participants: 0,
            avg_salary: 0.0,
            avg_account_balance: 0.0,
            investment_return_pct: 0.0,
            employee_contrib_rate_pct: 0.0,
            employer_contrib_rate_pct: 0.0,
            employer_match_max_pct: 0.0,
            participants_max_match_pct: 0.0,
            auto_escalation_enabled: false,
            max_auto_escalation_rate_pct: 0.0,
            enrollment_method: EnrollmentMethod::OptIn,
            default_auto_contrib_rate_pct: 3.0,
            vesting_schedule: VestingSchedule::Immediate,
            investment_options_count: 12,
            avg_tenure_years: 5.0,
            avg_age_years: 42,
            fee_structure: FeeStructure::default(),
            fees_paid_by: FeesPaidBy::Employer,
        }
    }
}

impl PlanParameters {
    /// Reject degenerate inputs before any simulation runs
    pub fn validate(&self) -> Result<()> {
        if self.participants > self.eligible_employees {
            return Err(PlanError::invalid(
                "participants",
                format!(
                    "{} participants exceed {} eligible employees",
                    self.participants, self.eligible_employees
                ),
            ));
        }

        non_negative("avgSalary", self.avg_salary)?;
        non_negative("avgAccountBalance", self.avg_account_balance)?;
        non_negative("avgTenureYears", self.avg_tenure_years)?;

        // A full loss is the floor; anything beyond is not a return
        if !self.investment_return_pct.is_finite() || self.investment_return_pct < -100.0 {
            return Err(PlanError::invalid(
                "investmentReturnPct",
                format!("{} is not a usable annual return", self.investment_return_pct),
            ));
        }

        percentage("employeeContribRatePct", self.employee_contrib_rate_pct)?;
        percentage("employerContribRatePct", self.employer_contrib_rate_pct)?;
        percentage("employerMatchMaxPct", self.employer_match_max_pct)?;
        percentage("participantsMaxMatchPct", self.participants_max_match_pct)?;
        percentage("maxAutoEscalationRatePct", self.max_auto_escalation_rate_pct)?;
        percentage("defaultAutoContribRatePct", self.default_auto_contrib_rate_pct)?;

        if let Some(category) = self.fee_structure.first_invalid() {
            return Err(PlanError::invalid(
                "feeStructure",
                format!("{:?} fee must be a non-negative amount", category),
            ));
        }

        Ok(())
    }

    /// Current participation as a percentage of eligible employees
    pub fn participation_rate_pct(&self) -> f64 {
        if self.eligible_employees == 0 {
            0.0
        } else {
            self.participants as f64 / self.eligible_employees as f64 * 100.0
        }
    }

    /// Annual payroll of participating employees
    pub fn participant_payroll(&self) -> f64 {
        self.participants as f64 * self.avg_salary
    }

    pub fn fee_model(&self) -> PlanFeeModel {
        PlanFeeModel::new(self.fee_structure.clone(), self.fees_paid_by)
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlanError::invalid(field, format!("{} must be a non-negative amount", value)));
    }
    Ok(())
}

pub(crate) fn percentage(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(PlanError::invalid(field, format!("{} is outside [0, 100]", value)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::{FeeCategory, FeeSpec};

    fn valid_plan() -> PlanParameters {
        PlanParameters {
            eligible_employees: 200,
            participants: 120,
            avg_salary: 60_000.0,
            avg_account_balance: 50_000.0,
            investment_return_pct: 7.0,
            employee_contrib_rate_pct: 4.0,
            employer_contrib_rate_pct: 2.0,
            employer_match_max_pct: 4.0,
            participants_max_match_pct: 50.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_plan_passes() {
        assert!(valid_plan().validate().is_ok());
        assert!(PlanParameters::default().validate().is_ok());
    }

    #[test]
    fn test_participants_exceeding_eligible_rejected() {
        let plan = PlanParameters { participants: 201, ..valid_plan() };
        let err = plan.validate().unwrap_err();
        assert!(matches!(err, PlanError::InvalidParameter { ref field, .. } if field == "participants"));
    }

    #[test]
    fn test_percentage_out_of_range_rejected() {
        let plan = PlanParameters { participants_max_match_pct: 120.0, ..valid_plan() };
        assert!(plan.validate().is_err());

        let plan = PlanParameters { employee_contrib_rate_pct: -1.0, ..valid_plan() };
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_non_finite_amounts_rejected() {
        let plan = PlanParameters { avg_salary: f64::NAN, ..valid_plan() };
        assert!(plan.validate().is_err());

        let plan = PlanParameters { investment_return_pct: f64::INFINITY, ..valid_plan() };
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_negative_fee_rejected() {
        let plan = PlanParameters {
            fee_structure: FeeStructure::new()
                .with(FeeCategory::Tpa, FeeSpec::FlatPlusPerHead { flat: -10.0, per_head: 0.0 }),
            ..valid_plan()
        };
        assert!(plan.validate().unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_participation_rate_guards_zero_eligible() {
        assert_eq!(PlanParameters::default().participation_rate_pct(), 0.0);
        assert!((valid_plan().participation_rate_pct() - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_enum_config_spellings() {
        assert_eq!(EnrollmentMethod::from_config("auto-enroll"), Some(EnrollmentMethod::AutoEnroll));
        assert_eq!(VestingSchedule::from_config("2-year"), Some(VestingSchedule::TwoYear));
        assert_eq!(VestingSchedule::from_config("5-year"), None);
    }
}
