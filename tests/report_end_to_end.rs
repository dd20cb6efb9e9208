//! Setup blob in, assembled report out

use plan_projection::engagement::{ImpactTier, Severity};
use plan_projection::plan::load_plans_from_reader;
use plan_projection::{FeatureConfig, PlanError, ReportAssembler, ScenarioId, SetupData};

const SETUP_JSON: &str = r#"{
    "eligibleEmployees": "250",
    "participants": "150",
    "avgSalary": "58000",
    "avgAccountBalance": "42000",
    "investmentReturn": "6.5",
    "employeeContribRate": "5",
    "employerContribRate": "1",
    "employer401kMatch": "4",
    "participantsMaxMatch": "55",
    "autoEscalation": "no",
    "enrollmentMethod": "opt-in",
    "vestingSchedule": "graded",
    "investmentOptions": "28",
    "avgAge": "38",
    "avgTenure": "4",
    "feesPaidBy": "employee",
    "recordKeeperFeeType": "flatPerHead",
    "recordKeeperFlatFee": "5000",
    "recordKeeperPerHeadFee": "40",
    "investmentBasisPointsFee": "45"
}"#;

#[test]
fn test_report_from_setup_blob() {
    let params = SetupData::from_json_str(SETUP_JSON).unwrap().to_parameters().unwrap();
    let report = ReportAssembler::new().assemble(&params, &ScenarioId::ALL).unwrap();

    assert_eq!(report.projections.len(), 6);
    assert_eq!(report.deltas.len(), 5);
    assert_eq!(report.comparison_table.len(), 6);
    assert!(report.projection(ScenarioId::Current).unwrap().annual[1].fees > 0.0);

    // 60% participation is 25 points short of 85%
    assert_eq!(report.gaps[0].gap, -25.0);
    assert_eq!(report.gaps[0].severity, Severity::Critical);
    assert_eq!(report.recommendations[0].title, "CRITICAL: Implement Auto-Enrollment");
    assert_eq!(report.recommendations[0].impact, ImpactTier::Critical);
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.title == "Streamline Investment Menu"));

    assert!(report.estimated_total_fee_pct >= 0.25 && report.estimated_total_fee_pct <= 2.5);
    assert!(report.report_card.overall_grade <= 100);
}

#[test]
fn test_report_serializes_to_json() {
    let params = SetupData::from_json_str(SETUP_JSON).unwrap().to_parameters().unwrap();
    let report = ReportAssembler::new()
        .assemble(&params, &[ScenarioId::AutoEnroll])
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["projections"][0]["result"]["annual"].is_array());
    assert_eq!(json["plan"]["eligibleEmployees"], 250);
    assert!(json["reportCard"]["ratingDescription"].is_string());
}

#[test]
fn test_feature_override_shapes_enhanced_view() {
    let params = SetupData::from_json_str(SETUP_JSON).unwrap().to_parameters().unwrap();
    let features = FeatureConfig {
        auto_enroll: true,
        default_auto_rate_pct: 6.0,
        auto_escalate: true,
        investment_options: 12,
        ..FeatureConfig::from_plan(&params)
    };
    let report = ReportAssembler::with_features(features)
        .assemble(&params, &[ScenarioId::Enhanced])
        .unwrap();

    let enhanced = report.projection(ScenarioId::Enhanced).unwrap();
    let current = report.projection(ScenarioId::Current).unwrap();
    assert!(enhanced.final_balance() > current.final_balance());
    assert!(report.engagement.enhanced.participation_pct > report.engagement.current.participation_pct);
    assert!(report.plan_assets.asset_improvement > 0.0);
}

#[test]
fn test_csv_rows_become_reports() {
    let csv = "\
eligibleEmployees,participants,avgSalary,avgAccountBalance,investmentReturn,employeeContribRate,employer401kMatch,participantsMaxMatch,enrollmentMethod
100,80,50000,20000,6,6,4,70,auto-enroll
300,90,45000,8000,5,3,3,35,opt-in
";
    let plans = load_plans_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(plans.len(), 2);

    let assembler = ReportAssembler::new();
    for plan in &plans {
        let report = assembler.assemble(plan, &ScenarioId::BALANCE_COMPARISON).unwrap();
        assert_eq!(report.projections.len(), 4);
    }
}

#[test]
fn test_inconsistent_plan_is_rejected() {
    let setup = SetupData::new()
        .set("eligibleEmployees", 50)
        .set("participants", 80);
    let err = setup.to_parameters().unwrap_err();
    assert!(matches!(err, PlanError::InvalidParameter { .. }));
}

#[test]
fn test_unparseable_value_is_rejected() {
    let setup = SetupData::new()
        .set("eligibleEmployees", 50)
        .set("avgSalary", "sixty thousand");
    let err = setup.to_parameters().unwrap_err();
    assert!(err.is_invalid_parameter());
}

const FEATURES_JSON: &str = r#"{
    "autoEnroll": true,
    "defaultAutoRatePct": 6.0,
    "autoEscalate": true,
    "maxEscalationRatePct": 10.0,
    "matchFormulaPct": 5.0,
    "vestingSchedule": "Immediate",
    "investmentOptions": 12
}"#;

#[test]
fn test_feature_document_loads() {
    let features = FeatureConfig::from_json_str(FEATURES_JSON).unwrap();
    assert!(features.auto_enroll);
    assert_eq!(features.match_formula_pct, 5.0);
}

#[test]
fn test_out_of_range_default_rate_in_feature_document() {
    let json = FEATURES_JSON.replace("\"defaultAutoRatePct\": 6.0", "\"defaultAutoRatePct\": 250.0");
    let err = FeatureConfig::from_json_str(&json).unwrap_err();
    assert!(matches!(err, PlanError::InvalidParameter { ref field, .. } if field == "defaultAutoRatePct"));
}

#[test]
fn test_negative_match_formula_in_feature_document() {
    let json = FEATURES_JSON.replace("\"matchFormulaPct\": 5.0", "\"matchFormulaPct\": -40.0");
    let err = FeatureConfig::from_json_str(&json).unwrap_err();
    assert!(matches!(err, PlanError::InvalidParameter { ref field, .. } if field == "matchFormulaPct"));
}

#[test]
fn test_invalid_override_blocks_report() {
    let params = SetupData::from_json_str(SETUP_JSON).unwrap().to_parameters().unwrap();
    let features = FeatureConfig {
        auto_enroll: true,
        default_auto_rate_pct: 250.0,
        match_formula_pct: -40.0,
        ..FeatureConfig::from_plan(&params)
    };
    let err = ReportAssembler::with_features(features)
        .assemble(&params, &[ScenarioId::Enhanced])
        .unwrap_err();
    assert!(err.is_invalid_parameter());
}
