//! Load plan parameters from the persisted setup blob
//!
//! The setup form stores its fields as a flat key/value map with camelCase keys
//! and string values. The same map can arrive as a JSON object or as one row of
//! a CSV file with those keys as headers.

use super::{EnrollmentMethod, PlanParameters, VestingSchedule};
use crate::error::{PlanError, Result};
use crate::fees::{FeeCategory, FeeSpec, FeeStructure, FeesPaidBy};
use csv::Reader;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::path::Path;

/// Raw setup blob
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupData {
    values: BTreeMap<String, String>,
}

impl SetupData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl ToString) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build from a JSON object; numbers, booleans and strings are all accepted
    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let values = map
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => if b { "yes".into() } else { "no".into() },
                    _ => return None,
                };
                Some((key, text))
            })
            .collect();
        Ok(Self { values })
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    fn number(&self, key: &str, default: f64) -> Result<f64> {
        match self.text(key) {
            None => Ok(default),
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| PlanError::Parse { field: key.to_string(), value: raw.to_string() }),
        }
    }

    /// Whole count; fractional input such as `150.0` is truncated
    fn count(&self, key: &str, default: u32) -> Result<u32> {
        if self.text(key).is_none() {
            return Ok(default);
        }
        let value = self.number(key, 0.0)?.trunc();
        if value < 0.0 || value > u32::MAX as f64 {
            return Err(PlanError::invalid(key, format!("{} is not a valid count", value)));
        }
        Ok(value as u32)
    }

    fn choice<T>(&self, key: &str, default: T, parse: fn(&str) -> Option<T>) -> Result<T> {
        match self.text(key) {
            None => Ok(default),
            Some(raw) => parse(raw).ok_or_else(|| PlanError::Parse {
                field: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    /// Fee with a selectable type (`basisPoints` or `flatPerHead`)
    fn typed_fee(&self, prefix: &str) -> Result<Option<FeeSpec>> {
        let type_key = format!("{}FeeType", prefix);
        match self.text(&type_key) {
            None => Ok(None),
            Some("basisPoints") => Ok(Some(FeeSpec::BasisPoints {
                value: self.number(&format!("{}BasisPointsFee", prefix), 0.0)?,
            })),
            Some("flatPerHead") => Ok(Some(FeeSpec::FlatPlusPerHead {
                flat: self.number(&format!("{}FlatFee", prefix), 0.0)?,
                per_head: self.number(&format!("{}PerHeadFee", prefix), 0.0)?,
            })),
            Some(other) => Err(PlanError::Parse { field: type_key, value: other.to_string() }),
        }
    }

    fn fee_structure(&self) -> Result<FeeStructure> {
        let mut fees = FeeStructure::new();

        if let Some(spec) = self.typed_fee("recordKeeper")? {
            fees = fees.with(FeeCategory::RecordKeeper, spec);
        }
        if let Some(spec) = self.typed_fee("advisor")? {
            fees = fees.with(FeeCategory::Advisor, spec);
        }

        // TPA is always flat + per head, investment and audit always basis points
        fees = fees
            .with(FeeCategory::Tpa, FeeSpec::FlatPlusPerHead {
                flat: self.number("tpaFlatFee", 0.0)?,
                per_head: self.number("tpaPerHeadFee", 0.0)?,
            })
            .with(FeeCategory::Investment, FeeSpec::BasisPoints {
                value: self.number("investmentBasisPointsFee", 0.0)?,
            })
            .with(FeeCategory::Audit, FeeSpec::BasisPoints {
                value: self.number("auditBasisPointsFee", 0.0)?,
            });

        Ok(fees)
    }

    /// Parse and validate into plan parameters
    pub fn to_parameters(&self) -> Result<PlanParameters> {
        let params = PlanParameters {
            eligible_employees: self.count("eligibleEmployees", 0)?,
            participants: self.count("participants", 0)?,
            avg_salary: self.number("avgSalary", 0.0)?,
            avg_account_balance: self.number("avgAccountBalance", 0.0)?,
            investment_return_pct: self.number("investmentReturn", 0.0)?,
            employee_contrib_rate_pct: self.number("employeeContribRate", 0.0)?,
            employer_contrib_rate_pct: self.number("employerContribRate", 0.0)?,
            employer_match_max_pct: self.number("employer401kMatch", 0.0)?,
            participants_max_match_pct: self.number("participantsMaxMatch", 0.0)?,
            auto_escalation_enabled: self.choice("autoEscalation", false, parse_yes_no)?,
            max_auto_escalation_rate_pct: self.number("maxAutoEscalationRate", 0.0)?,
            enrollment_method: self.choice("enrollmentMethod", EnrollmentMethod::OptIn, EnrollmentMethod::from_config)?,
            default_auto_contrib_rate_pct: self.number("defaultAutoContribRate", 3.0)?,
            vesting_schedule: self.choice("vestingSchedule", VestingSchedule::Immediate, VestingSchedule::from_config)?,
            investment_options_count: self.count("investmentOptions", 12)?,
            avg_tenure_years: self.number("avgTenure", 5.0)?,
            avg_age_years: self.count("avgAge", 42)?,
            fee_structure: self.fee_structure()?,
            fees_paid_by: self.choice("feesPaidBy", FeesPaidBy::Employer, FeesPaidBy::from_config)?,
        };

        params.validate()?;
        Ok(params)
    }
}

fn parse_yes_no(value: &str) -> Option<bool> {
    match value {
        "yes" | "true" => Some(true),
        "no" | "false" => Some(false),
        _ => None,
    }
}

/// Load a single plan from a JSON setup blob on disk
pub fn load_plan_json<P: AsRef<Path>>(path: P) -> Result<PlanParameters> {
    let json = std::fs::read_to_string(path)?;
    let setup = SetupData::from_json_str(&json)?;
    if setup.is_empty() {
        return Err(PlanError::invalid("setup", "no setup data found"));
    }
    setup.to_parameters()
}

/// Load every plan row from a CSV file
pub fn load_plans_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PlanParameters>> {
    load_plans_from_reader(File::open(path)?)
}

/// Load plan rows from any reader (e.g., string buffer, network stream)
pub fn load_plans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<PlanParameters>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut plans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: HashMap<String, String> = result?;
        let setup = SetupData { values: row.into_iter().collect() };
        plans.push(setup.to_parameters()?);
    }

    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETUP_JSON: &str = r#"{
        "eligibleEmployees": "150",
        "participants": "100",
        "avgSalary": "60000",
        "avgAccountBalance": 50000,
        "investmentReturn": "7",
        "employeeContribRate": "4",
        "employerContribRate": "2",
        "employer401kMatch": "4",
        "participantsMaxMatch": "50",
        "autoEscalation": "yes",
        "maxAutoEscalationRate": "10",
        "enrollmentMethod": "opt-in",
        "defaultAutoContribRate": "",
        "vestingSchedule": "3-year",
        "feesPaidBy": "split",
        "recordKeeperFeeType": "flatPerHead",
        "recordKeeperFlatFee": "2000",
        "recordKeeperPerHeadFee": "45",
        "advisorFeeType": "basisPoints",
        "advisorBasisPointsFee": "25",
        "investmentBasisPointsFee": "60"
    }"#;

    #[test]
    fn test_parse_setup_blob() {
        let params = SetupData::from_json_str(SETUP_JSON).unwrap().to_parameters().unwrap();

        assert_eq!(params.eligible_employees, 150);
        assert_eq!(params.participants, 100);
        assert_eq!(params.avg_account_balance, 50_000.0);
        assert!(params.auto_escalation_enabled);
        assert_eq!(params.vesting_schedule, VestingSchedule::ThreeYear);
        assert_eq!(params.fees_paid_by, FeesPaidBy::Split);
        // empty string falls back to the default
        assert_eq!(params.default_auto_contrib_rate_pct, 3.0);
        assert_eq!(params.investment_options_count, 12);
        assert_eq!(params.avg_age_years, 42);

        assert_eq!(
            params.fee_structure.get(FeeCategory::RecordKeeper),
            Some(&FeeSpec::FlatPlusPerHead { flat: 2_000.0, per_head: 45.0 })
        );
        assert_eq!(
            params.fee_structure.get(FeeCategory::Advisor),
            Some(&FeeSpec::BasisPoints { value: 25.0 })
        );
        assert_eq!(
            params.fee_structure.get(FeeCategory::Investment),
            Some(&FeeSpec::BasisPoints { value: 60.0 })
        );
    }

    #[test]
    fn test_unparseable_value_is_invalid_parameter() {
        let setup = SetupData::new()
            .set("eligibleEmployees", 10)
            .set("avgSalary", "sixty thousand");
        let err = setup.to_parameters().unwrap_err();
        assert!(matches!(err, PlanError::Parse { ref field, .. } if field == "avgSalary"));
    }

    #[test]
    fn test_negative_count_rejected() {
        let setup = SetupData::new().set("participants", -3);
        assert!(setup.to_parameters().unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_fractional_count_truncated() {
        let json = r#"{ "eligibleEmployees": 150.0, "participants": "99.7", "investmentOptions": 18 }"#;
        let params = SetupData::from_json_str(json).unwrap().to_parameters().unwrap();
        assert_eq!(params.eligible_employees, 150);
        assert_eq!(params.participants, 99);
        assert_eq!(params.investment_options_count, 18);
    }

    #[test]
    fn test_participants_over_eligible_rejected() {
        let setup = SetupData::new().set("eligibleEmployees", 10).set("participants", 11);
        assert!(setup.to_parameters().is_err());
    }

    #[test]
    fn test_unknown_enum_rejected() {
        let setup = SetupData::new().set("enrollmentMethod", "mandatory");
        assert!(setup.to_parameters().is_err());
    }

    #[test]
    fn test_load_plans_from_csv_reader() {
        let data = "eligibleEmployees,participants,avgSalary,employeeContribRate,enrollmentMethod\n\
                    100,80,55000,5,auto-enroll\n\
                    40,10,42000,3,opt-in\n";
        let plans = load_plans_from_reader(data.as_bytes()).unwrap();

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].enrollment_method, EnrollmentMethod::AutoEnroll);
        assert_eq!(plans[1].participants, 10);
        assert_eq!(plans[1].employee_contrib_rate_pct, 3.0);
    }
}
