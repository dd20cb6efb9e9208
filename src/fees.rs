//! Plan fee structures and per-participant fee drag

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::heuristics::{TOTAL_FEE_PCT_CEILING, TOTAL_FEE_PCT_FLOOR};

/// Service-provider fee categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeeCategory {
    RecordKeeper,
    Advisor,
    Tpa,
    Investment,
    Audit,
}

impl FeeCategory {
    pub const ALL: [FeeCategory; 5] = [
        FeeCategory::RecordKeeper,
        FeeCategory::Advisor,
        FeeCategory::Tpa,
        FeeCategory::Investment,
        FeeCategory::Audit,
    ];

    /// Investment fees come out of participant accounts whatever the plan's policy
    pub fn always_employee_borne(self) -> bool {
        self == FeeCategory::Investment
    }
}

/// How a single fee category is charged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FeeSpec {
    /// Percentage of total plan assets, in basis points
    BasisPoints { value: f64 },
    /// Fixed dollar amount plus a dollar amount per participant
    FlatPlusPerHead { flat: f64, per_head: f64 },
}

impl FeeSpec {
    /// Raw annual dollar fee for the whole plan
    pub fn annual_amount(&self, total_plan_assets: f64, participant_count: f64) -> f64 {
        match *self {
            FeeSpec::BasisPoints { value } => (value / 10_000.0) * total_plan_assets,
            FeeSpec::FlatPlusPerHead { flat, per_head } => flat + per_head * participant_count,
        }
    }

    fn is_valid(&self) -> bool {
        match *self {
            FeeSpec::BasisPoints { value } => value.is_finite() && value >= 0.0,
            FeeSpec::FlatPlusPerHead { flat, per_head } => {
                flat.is_finite() && per_head.is_finite() && flat >= 0.0 && per_head >= 0.0
            }
        }
    }
}

/// Who pays the non-investment fees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeesPaidBy {
    #[default]
    Employer,
    Employee,
    Split,
}

impl FeesPaidBy {
    /// Share of non-investment fees charged to participants
    pub fn allocation_factor(self) -> f64 {
        match self {
            FeesPaidBy::Employee => 1.0,
            FeesPaidBy::Split => 0.5,
            FeesPaidBy::Employer => 0.0,
        }
    }

    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "employer" => Some(FeesPaidBy::Employer),
            "employee" => Some(FeesPaidBy::Employee),
            "split" => Some(FeesPaidBy::Split),
            _ => None,
        }
    }
}

/// Fee specification for each category the plan is charged for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeStructure {
    pub fees: BTreeMap<FeeCategory, FeeSpec>,
}

impl FeeStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: FeeCategory, spec: FeeSpec) -> Self {
        self.fees.insert(category, spec);
        self
    }

    pub fn get(&self, category: FeeCategory) -> Option<&FeeSpec> {
        self.fees.get(&category)
    }

    /// First category holding a negative or non-finite amount
    pub fn first_invalid(&self) -> Option<FeeCategory> {
        self.fees
            .iter()
            .find(|(_, spec)| !spec.is_valid())
            .map(|(category, _)| *category)
    }

    /// Annual fee per participant actually borne by participants
    ///
    /// Investment fees are always employee-borne; the remaining categories are
    /// allocated by `paid_by`. Returns 0 for zero or negative headcounts.
    pub fn annual_fee_per_participant(
        &self,
        total_plan_assets: f64,
        participant_count: f64,
        paid_by: FeesPaidBy,
    ) -> f64 {
        if participant_count <= 0.0 {
            return 0.0;
        }

        let mut investment_fee = 0.0;
        let mut other_fees = 0.0;
        for (category, spec) in &self.fees {
            let amount = spec.annual_amount(total_plan_assets, participant_count);
            if category.always_employee_borne() {
                investment_fee += amount;
            } else {
                other_fees += amount;
            }
        }

        let employee_borne = investment_fee + other_fees * paid_by.allocation_factor();
        employee_borne / participant_count
    }

    /// Blended all-in fee estimate as a percentage of assets
    ///
    /// Dollar-denominated fees are expressed against total payroll, which is the
    /// same rough conversion plan sponsors see on fee disclosures.
    pub fn estimated_total_fee_pct(&self, participants: f64, avg_salary: f64) -> f64 {
        let payroll = participants * avg_salary;
        let total: f64 = self
            .fees
            .values()
            .map(|spec| match *spec {
                FeeSpec::BasisPoints { value } => value / 100.0,
                FeeSpec::FlatPlusPerHead { flat, per_head } => {
                    if payroll > 0.0 {
                        (flat + per_head * participants) / payroll * 100.0
                    } else {
                        0.0
                    }
                }
            })
            .sum();

        total.clamp(TOTAL_FEE_PCT_FLOOR, TOTAL_FEE_PCT_CEILING)
    }
}

/// Source of the annual per-participant fee deducted by the projection engine
pub trait FeeModel {
    fn annual_fee_per_participant(&self, total_plan_assets: f64, participant_count: f64) -> f64;
}

/// Fee model driven by the plan's fee structure and allocation policy
#[derive(Debug, Clone)]
pub struct PlanFeeModel {
    pub structure: FeeStructure,
    pub paid_by: FeesPaidBy,
}

impl PlanFeeModel {
    pub fn new(structure: FeeStructure, paid_by: FeesPaidBy) -> Self {
        Self { structure, paid_by }
    }
}

impl FeeModel for PlanFeeModel {
    fn annual_fee_per_participant(&self, total_plan_assets: f64, participant_count: f64) -> f64 {
        self.structure
            .annual_fee_per_participant(total_plan_assets, participant_count, self.paid_by)
    }
}

/// Zero-fee model
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFees;

impl FeeModel for NoFees {
    fn annual_fee_per_participant(&self, _total_plan_assets: f64, _participant_count: f64) -> f64 {
        0.0
    }
}
