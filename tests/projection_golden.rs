//! End-to-end projection checks against reference values

use approx::assert_relative_eq;
use plan_projection::fees::NoFees;
use plan_projection::{
    EffectiveRates, PlanParameters, ProjectionEngine, ScenarioId, ScenarioResolver, ScenarioRunner,
};

fn reference_plan() -> PlanParameters {
    PlanParameters {
        eligible_employees: 120,
        participants: 100,
        avg_salary: 60_000.0,
        avg_account_balance: 50_000.0,
        investment_return_pct: 7.0,
        employee_contrib_rate_pct: 4.0,
        employer_contrib_rate_pct: 2.0,
        employer_match_max_pct: 4.0,
        participants_max_match_pct: 50.0,
        auto_escalation_enabled: false,
        ..Default::default()
    }
}

#[test]
fn test_current_scenario_golden_master() {
    // $400/month deposited, then 7%/12 credited, for 300 months
    let projection = ScenarioRunner::new()
        .run(&reference_plan(), ScenarioId::Current)
        .unwrap();
    let result = &projection.result;

    assert_eq!(result.annual.len(), 26);
    assert_relative_eq!(result.annual[1].ending_balance, 58_600.454_191_010_44, max_relative = 1e-4);
    assert_relative_eq!(result.balance_at(10).unwrap(), 170_120.856_358_873_9, max_relative = 1e-4);
    assert_relative_eq!(result.final_balance(), 612_189.754_958_033_7, max_relative = 1e-4);
    assert_relative_eq!(result.effective_return_pct, 10.539_282_711_458_476, max_relative = 1e-4);
}

#[test]
fn test_starting_balance_and_non_negative_end() {
    let params = reference_plan();
    let projections = ScenarioRunner::new().run_all(&params, &ScenarioId::ALL).unwrap();

    for p in &projections {
        assert_eq!(p.result.annual[0].starting_balance, params.avg_account_balance);
        assert!(p.result.annual[25].ending_balance >= 0.0, "{} ended negative", p.scenario);
    }
}

#[test]
fn test_higher_contribution_never_lowers_final_balance() {
    let params = reference_plan();
    let engine = ProjectionEngine::default();

    let mut previous = 0.0;
    for rate in [0.0, 2.0, 4.0, 6.0, 10.0, 15.0] {
        let result = engine.project(&EffectiveRates::new(rate, 50.0), &params, &params.fee_model());
        assert!(result.final_balance() >= previous, "rate {}% lowered the balance", rate);
        previous = result.final_balance();
    }
}

#[test]
fn test_projection_is_bit_identical_on_rerun() {
    let params = reference_plan();
    let rates = ScenarioResolver::new().resolve(ScenarioId::AutoEnroll, &params);
    let engine = ProjectionEngine::default();

    let first = engine.project(&rates, &params, &NoFees);
    let second = engine.project(&rates, &params, &NoFees);
    assert_eq!(first, second);
}

#[test]
fn test_parallel_batch_matches_single_runs() {
    let params = reference_plan();
    let runner = ScenarioRunner::new();
    let batch = runner.run_all(&params, &ScenarioId::ALL).unwrap();

    for p in &batch {
        let single = runner.run(&params, p.scenario).unwrap();
        assert_eq!(single.result, p.result);
    }
}

#[test]
fn test_auto_enroll_rates_for_opt_in_plan() {
    let params = PlanParameters {
        participants_max_match_pct: 40.0,
        default_auto_contrib_rate_pct: 3.0,
        ..reference_plan()
    };
    let rates = ScenarioResolver::new().resolve(ScenarioId::AutoEnroll, &params);
    assert_relative_eq!(rates.employee_contrib_rate_pct, 3.0);
    assert_relative_eq!(rates.match_utilization_pct, 72.0, epsilon = 1e-9);
}

#[test]
fn test_scenarios_rank_as_expected() {
    let params = reference_plan();
    let runner = ScenarioRunner::new();
    let final_of = |id| runner.run(&params, id).unwrap().result.final_balance();

    let current = final_of(ScenarioId::Current);
    let ten = final_of(ScenarioId::TenPercentContribution);
    let fifteen = final_of(ScenarioId::FifteenPercentContribution);
    assert!(ten > current);
    assert!(fifteen > ten);
}
