//! Scenario resolver: one rule per scenario, shared by the projection engine
//! and the engagement model

use log::warn;
use serde::{Deserialize, Serialize};

use super::{EffectiveRates, FeatureConfig, ScenarioId};
use crate::error::Result;
use crate::heuristics::{AUTO_ENROLL, CONTRIBUTION_SCENARIOS, FEATURE_EFFECTS};
use crate::plan::{EnrollmentMethod, PlanParameters, VestingSchedule};

/// Participation plus effective rates for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub participation_pct: f64,
    pub rates: EffectiveRates,
}

/// Maps a scenario identifier and plan to effective rates
#[derive(Debug, Clone, Default)]
pub struct ScenarioResolver {
    /// Override for the Enhanced scenario; defaults to the plan's own design
    features: Option<FeatureConfig>,
}

impl ScenarioResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_features(features: FeatureConfig) -> Self {
        Self {
            features: Some(features),
        }
    }

    pub fn features_for(&self, params: &PlanParameters) -> FeatureConfig {
        self.features
            .clone()
            .unwrap_or_else(|| FeatureConfig::from_plan(params))
    }

    /// Validate the plan, the feature override and the plan it derives
    ///
    /// Every entry point that resolves scenarios calls this first.
    pub fn validate(&self, params: &PlanParameters) -> Result<()> {
        params.validate()?;
        if let Some(features) = &self.features {
            features.validate()?;
            features.apply(params).validate()?;
        }
        Ok(())
    }

    /// Effective contribution and match-utilization rates for a scenario
    pub fn resolve(&self, scenario: ScenarioId, params: &PlanParameters) -> EffectiveRates {
        let base_match = params.participants_max_match_pct;

        match scenario {
            ScenarioId::Current => {
                EffectiveRates::new(params.employee_contrib_rate_pct, base_match)
            }
            ScenarioId::TenPercentContribution => EffectiveRates::new(
                CONTRIBUTION_SCENARIOS.ten_percent_rate,
                (base_match + CONTRIBUTION_SCENARIOS.ten_percent_match_boost).min(100.0),
            ),
            ScenarioId::FifteenPercentContribution => EffectiveRates::new(
                CONTRIBUTION_SCENARIOS.fifteen_percent_rate,
                (base_match + CONTRIBUTION_SCENARIOS.fifteen_percent_match_boost).min(100.0),
            ),
            ScenarioId::OptimizedMatch => EffectiveRates::new(
                params.employer_match_max_pct,
                CONTRIBUTION_SCENARIOS.optimized_match_utilization,
            ),
            ScenarioId::AutoEnroll => match params.enrollment_method {
                EnrollmentMethod::AutoEnroll => EffectiveRates::new(
                    params
                        .employee_contrib_rate_pct
                        .max(params.default_auto_contrib_rate_pct * AUTO_ENROLL.existing_default_rate_mult),
                    (base_match + AUTO_ENROLL.existing_match_boost).min(100.0),
                ),
                EnrollmentMethod::OptIn => EffectiveRates::new(
                    params.default_auto_contrib_rate_pct,
                    (base_match * AUTO_ENROLL.switch_match_mult).min(100.0),
                ),
            },
            ScenarioId::Enhanced => self.enhanced(params).rates,
        }
    }

    /// Participation and rates for a scenario, as seen by the engagement model
    pub fn outcome(&self, scenario: ScenarioId, params: &PlanParameters) -> ScenarioOutcome {
        if scenario == ScenarioId::Enhanced {
            return self.enhanced(params);
        }

        let current = params.participation_rate_pct();
        let participation_pct = match (scenario, params.enrollment_method) {
            (ScenarioId::AutoEnroll, EnrollmentMethod::OptIn) => auto_enroll_participation(current),
            _ => current,
        };

        ScenarioOutcome {
            participation_pct,
            rates: self.resolve(scenario, params),
        }
    }

    /// Enhanced scenario: the feature override merged onto the plan, with each
    /// design change applied as a multiplier on today's behavior
    fn enhanced(&self, base: &PlanParameters) -> ScenarioOutcome {
        let derived = self.features_for(base).apply(base);
        let fx = &FEATURE_EFFECTS;

        let enabling_auto_enroll = derived.enrollment_method == EnrollmentMethod::AutoEnroll
            && base.enrollment_method == EnrollmentMethod::OptIn;
        let removing_auto_enroll = derived.enrollment_method == EnrollmentMethod::OptIn
            && base.enrollment_method == EnrollmentMethod::AutoEnroll;

        let mut participation = base.participation_rate_pct();
        if enabling_auto_enroll {
            participation = auto_enroll_participation(participation);
        } else if removing_auto_enroll {
            participation /= fx.auto_enroll_participation_mult;
        }
        participation *= vesting_multiplier(derived.vesting_schedule);
        participation *= menu_multiplier(derived.investment_options_count);
        if participation > 100.0 {
            warn!("enhanced participation {:.1}% capped at 100%", participation);
            participation = 100.0;
        }

        let mut contribution = base.employee_contrib_rate_pct;
        if derived.enrollment_method == EnrollmentMethod::AutoEnroll {
            contribution = contribution.max(derived.default_auto_contrib_rate_pct);
        }
        if derived.auto_escalation_enabled && !base.auto_escalation_enabled {
            contribution = (contribution + fx.auto_escalate_contrib_boost).min(100.0);
        }

        let mut match_utilization = base.participants_max_match_pct;
        if enabling_auto_enroll {
            match_utilization = (match_utilization * fx.auto_enroll_match_mult).min(100.0);
        }
        if derived.employer_match_max_pct > base.employer_match_max_pct {
            match_utilization = (match_utilization * fx.richer_match_formula_mult).min(100.0);
        }

        ScenarioOutcome {
            participation_pct: participation,
            rates: EffectiveRates::new(contribution, match_utilization),
        }
    }
}

fn auto_enroll_participation(current_pct: f64) -> f64 {
    (current_pct * FEATURE_EFFECTS.auto_enroll_participation_mult)
        .min(FEATURE_EFFECTS.auto_enroll_participation_cap)
}

/// Participation effect of the vesting schedule
pub fn vesting_multiplier(schedule: VestingSchedule) -> f64 {
    match schedule {
        VestingSchedule::Immediate => FEATURE_EFFECTS.vesting_immediate_mult,
        VestingSchedule::TwoYear => FEATURE_EFFECTS.vesting_two_year_mult,
        VestingSchedule::ThreeYear => FEATURE_EFFECTS.vesting_three_year_mult,
        VestingSchedule::Graded => FEATURE_EFFECTS.vesting_graded_mult,
    }
}

/// Participation effect of the investment menu size
pub fn menu_multiplier(options: u32) -> f64 {
    let fx = &FEATURE_EFFECTS;
    if (fx.menu_sweet_spot_min..=fx.menu_sweet_spot_max).contains(&options) {
        fx.menu_sweet_spot_mult
    } else if options > fx.menu_overloaded_above {
        fx.menu_overloaded_mult
    } else {
        1.0
    }
}
