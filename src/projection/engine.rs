//! Core projection engine: monthly compounding of the average account

use log::debug;

use super::cashflows::{ChartPoint, ProjectionResult, YearRecord};
use super::returns::effective_return_pct;
use super::state::ProjectionState;
use crate::fees::FeeModel;
use crate::heuristics::{CHART_INTERVAL_YEARS, DEFAULT_HORIZON_YEARS};
use crate::plan::PlanParameters;
use crate::scenario::EffectiveRates;

const MONTHS_PER_YEAR: u32 = 12;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Number of years to project after the initial snapshot
    pub horizon_years: u32,

    /// Spacing of the sampled chart series
    pub chart_interval_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            chart_interval_years: CHART_INTERVAL_YEARS,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project the average participant balance under the given rates
    ///
    /// Parameters are expected to have passed `PlanParameters::validate`.
    pub fn project(
        &self,
        rates: &EffectiveRates,
        params: &PlanParameters,
        fees: &dyn FeeModel,
    ) -> ProjectionResult {
        let mut result = ProjectionResult::new();
        let mut state = ProjectionState::new(params.avg_account_balance, rates.employee_contrib_rate_pct);

        result.add_year(YearRecord::snapshot(state.balance));

        for _ in 1..=self.config.horizon_years {
            state.advance_year();
            let row = self.project_year(rates, params, fees, &mut state);
            result.add_year(row);
        }

        result.chart = self.sample_chart(&result.annual);
        result.effective_return_pct = effective_return_pct(
            params.avg_account_balance,
            result.final_balance(),
            self.config.horizon_years,
        );

        debug!(
            "projected {} years: {:.2} -> {:.2} ({:.3}% effective)",
            self.config.horizon_years,
            params.avg_account_balance,
            result.final_balance(),
            result.effective_return_pct
        );

        result
    }

    /// Escalate, compound twelve months, then deduct the year's fees
    fn project_year(
        &self,
        rates: &EffectiveRates,
        params: &PlanParameters,
        fees: &dyn FeeModel,
        state: &mut ProjectionState,
    ) -> YearRecord {
        let starting_balance = state.balance;

        if params.auto_escalation_enabled {
            state.escalate(params.max_auto_escalation_rate_pct);
        }

        let monthly_salary = params.avg_salary / MONTHS_PER_YEAR as f64;
        let monthly_return = params.investment_return_pct / 100.0 / MONTHS_PER_YEAR as f64;
        let employee = state.employee_rate_pct / 100.0 * monthly_salary;
        let employer = employer_monthly_contribution(state.employee_rate_pct, rates, params);

        for _month in 0..MONTHS_PER_YEAR {
            state.contribute(employee + employer);
            state.credit_return(monthly_return);
        }

        // Every participant is assumed to hold the average balance
        let participants = params.participants as f64;
        let total_plan_assets = state.balance * participants;
        let fee = fees.annual_fee_per_participant(total_plan_assets, participants);
        state.balance -= fee;

        YearRecord {
            year: state.year,
            starting_balance,
            contributions: state.ytd_contributions,
            investment_growth: state.ytd_growth,
            fees: fee,
            ending_balance: state.balance,
        }
    }

    fn sample_chart(&self, annual: &[YearRecord]) -> Vec<ChartPoint> {
        let interval = self.config.chart_interval_years.max(1);
        let horizon = self.config.horizon_years;

        annual
            .iter()
            .filter(|r| r.year % interval == 0 || r.year == horizon)
            .map(ChartPoint::from)
            .collect()
    }
}

/// Base employer contribution plus the match actually captured
///
/// The match only applies to the part of the employee rate under the match
/// ceiling, scaled by the share of participants who capture it.
pub fn employer_monthly_contribution(
    employee_rate_pct: f64,
    rates: &EffectiveRates,
    params: &PlanParameters,
) -> f64 {
    let monthly_salary = params.avg_salary / MONTHS_PER_YEAR as f64;
    let base = params.employer_contrib_rate_pct / 100.0 * monthly_salary;
    let matched_rate = employee_rate_pct.min(params.employer_match_max_pct);
    let matched = matched_rate / 100.0 * (rates.match_utilization_pct / 100.0) * monthly_salary;
    base + matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::{FeeCategory, FeeSpec, FeeStructure, FeesPaidBy, NoFees, PlanFeeModel};
    use approx::assert_relative_eq;

    fn plan() -> PlanParameters {
        PlanParameters {
            eligible_employees: 150,
            participants: 100,
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

    fn current_rates() -> EffectiveRates {
        EffectiveRates::new(4.0, 50.0)
    }

    #[test]
    fn test_year_zero_is_snapshot() {
        let result = ProjectionEngine::default().project(&current_rates(), &plan(), &NoFees);

        assert_eq!(result.annual.len(), 26);
        let first = &result.annual[0];
        assert_eq!(first.year, 0);
        assert_eq!(first.starting_balance, 50_000.0);
        assert_eq!(first.ending_balance, 50_000.0);
        assert_eq!(first.contributions, 0.0);
        assert_eq!(first.investment_growth, 0.0);
    }

    #[test]
    fn test_balance_identity_each_year() {
        let params = PlanParameters {
            fee_structure: FeeStructure::new()
                .with(FeeCategory::Investment, FeeSpec::BasisPoints { value: 50.0 })
                .with(FeeCategory::Tpa, FeeSpec::FlatPlusPerHead { flat: 2_000.0, per_head: 40.0 }),
            fees_paid_by: FeesPaidBy::Employee,
            ..plan()
        };
        let result = ProjectionEngine::default().project(&current_rates(), &params, &params.fee_model());

        for r in &result.annual {
            let expected = r.starting_balance + r.contributions + r.investment_growth - r.fees;
            assert_relative_eq!(r.ending_balance, expected, max_relative = 1e-12);
        }
        for pair in result.annual.windows(2) {
            assert_eq!(pair[1].starting_balance, pair[0].ending_balance);
        }
    }

    #[test]
    fn test_first_year_contributions() {
        // employee 4% + base 2% + match min(4,4) * 50% = 8% of 60,000
        let result = ProjectionEngine::default().project(&current_rates(), &plan(), &NoFees);
        assert_relative_eq!(result.annual[1].contributions, 4_800.0, epsilon = 1e-9);
    }

    #[test]
    fn test_match_limited_by_employee_rate() {
        let params = PlanParameters { employer_contrib_rate_pct: 0.0, employer_match_max_pct: 6.0, ..plan() };
        let rates = EffectiveRates::new(3.0, 100.0);
        // only 3% of salary is matched
        let monthly = employer_monthly_contribution(3.0, &rates, &params);
        assert_relative_eq!(monthly, 0.03 * 5_000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_auto_escalation_applied_before_first_year() {
        let params = PlanParameters {
            auto_escalation_enabled: true,
            max_auto_escalation_rate_pct: 6.0,
            employer_contrib_rate_pct: 0.0,
            participants_max_match_pct: 0.0,
            ..plan()
        };
        let rates = EffectiveRates::new(4.0, 0.0);
        let result = ProjectionEngine::default().project(&rates, &params, &NoFees);

        // year 1 at 5%, year 2 onwards capped at 6%
        assert_relative_eq!(result.annual[1].contributions, 3_000.0, epsilon = 1e-9);
        assert_relative_eq!(result.annual[2].contributions, 3_600.0, epsilon = 1e-9);
        assert_relative_eq!(result.annual[25].contributions, 3_600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_chart_samples_every_five_years() {
        let result = ProjectionEngine::default().project(&current_rates(), &plan(), &NoFees);
        let years: Vec<u32> = result.chart.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![0, 5, 10, 15, 20, 25]);
        assert_eq!(result.chart[5].balance, result.final_balance());
    }

    #[test]
    fn test_chart_includes_horizon_when_off_interval() {
        let engine = ProjectionEngine::new(ProjectionConfig { horizon_years: 12, chart_interval_years: 5 });
        let result = engine.project(&current_rates(), &plan(), &NoFees);
        let years: Vec<u32> = result.chart.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![0, 5, 10, 12]);
    }

    #[test]
    fn test_zero_participants_charge_no_fees() {
        let params = PlanParameters {
            participants: 0,
            fee_structure: FeeStructure::new().with(FeeCategory::Investment, FeeSpec::BasisPoints { value: 100.0 }),
            ..plan()
        };
        let result = ProjectionEngine::default().project(&current_rates(), &params, &params.fee_model());
        assert!(result.annual.iter().all(|r| r.fees == 0.0));
        assert!(result.final_balance().is_finite());
    }

    #[test]
    fn test_fees_reduce_final_balance() {
        let params = plan();
        let fee_model = PlanFeeModel::new(
            FeeStructure::new().with(FeeCategory::Investment, FeeSpec::BasisPoints { value: 75.0 }),
            FeesPaidBy::Employer,
        );
        let with_fees = ProjectionEngine::default().project(&current_rates(), &params, &fee_model);
        let without = ProjectionEngine::default().project(&current_rates(), &params, &NoFees);

        assert!(with_fees.final_balance() < without.final_balance());
        // 75bp of the pre-fee year-end balance
        let y1 = &with_fees.annual[1];
        let pre_fee = y1.starting_balance + y1.contributions + y1.investment_growth;
        assert_relative_eq!(y1.fees, pre_fee * 0.0075, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_starting_balance_has_zero_effective_return() {
        let params = PlanParameters { avg_account_balance: 0.0, ..plan() };
        let result = ProjectionEngine::default().project(&current_rates(), &params, &NoFees);
        assert_eq!(result.effective_return_pct, 0.0);
        assert!(result.final_balance() > 0.0);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let engine = ProjectionEngine::default();
        let a = engine.project(&current_rates(), &plan(), &NoFees);
        let b = engine.project(&current_rates(), &plan(), &NoFees);
        assert_eq!(a, b);
    }
}
