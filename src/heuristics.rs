//! Heuristic constant table
//!
//! Every behavioral multiplier, cap, target and threshold used by the scenario
//! resolver, the engagement model and the report lives here. The values are
//! illustrative heuristics, not fitted to participant data.

/// Fixed-rate contribution scenarios
pub struct ContributionScenarioConfig {
    pub ten_percent_rate: f64,
    pub ten_percent_match_boost: f64,
    pub fifteen_percent_rate: f64,
    pub fifteen_percent_match_boost: f64,
    pub optimized_match_utilization: f64,
}

pub const CONTRIBUTION_SCENARIOS: ContributionScenarioConfig = ContributionScenarioConfig {
    ten_percent_rate: 10.0,
    ten_percent_match_boost: 30.0,
    fifteen_percent_rate: 15.0,
    fifteen_percent_match_boost: 40.0,
    optimized_match_utilization: 100.0,
};

/// Auto-enrollment scenario
pub struct AutoEnrollConfig {
    /// Default-rate uplift for plans that already auto-enroll
    pub existing_default_rate_mult: f64,
    /// Match utilization points added for plans that already auto-enroll
    pub existing_match_boost: f64,
    /// Match utilization multiplier when switching to auto-enrollment
    pub switch_match_mult: f64,
}

pub const AUTO_ENROLL: AutoEnrollConfig = AutoEnrollConfig {
    existing_default_rate_mult: 1.2,
    existing_match_boost: 25.0,
    switch_match_mult: 1.8,
};

/// Participation / contribution / match effects of plan features
pub struct FeatureEffects {
    pub auto_enroll_participation_mult: f64,
    pub auto_enroll_participation_cap: f64,
    pub auto_enroll_match_mult: f64,
    pub auto_escalate_contrib_boost: f64,
    pub richer_match_formula_mult: f64,
    pub vesting_immediate_mult: f64,
    pub vesting_two_year_mult: f64,
    pub vesting_three_year_mult: f64,
    pub vesting_graded_mult: f64,
    pub menu_sweet_spot_min: u32,
    pub menu_sweet_spot_max: u32,
    pub menu_sweet_spot_mult: f64,
    pub menu_overloaded_above: u32,
    pub menu_overloaded_mult: f64,
}

pub const FEATURE_EFFECTS: FeatureEffects = FeatureEffects {
    auto_enroll_participation_mult: 2.8,
    auto_enroll_participation_cap: 95.0,
    auto_enroll_match_mult: 1.4,
    auto_escalate_contrib_boost: 1.5,
    richer_match_formula_mult: 1.1,
    vesting_immediate_mult: 1.15,
    vesting_two_year_mult: 1.05,
    vesting_three_year_mult: 1.0,
    vesting_graded_mult: 0.9,
    menu_sweet_spot_min: 10,
    menu_sweet_spot_max: 15,
    menu_sweet_spot_mult: 1.1,
    menu_overloaded_above: 25,
    menu_overloaded_mult: 0.9,
};

/// Readiness score weights
pub struct ReadinessWeights {
    pub participation: f64,
    pub contribution: f64,
    pub match_utilization: f64,
    /// Contribution rate scoring the full 100 points
    pub contribution_ceiling_pct: f64,
}

pub const READINESS_WEIGHTS: ReadinessWeights = ReadinessWeights {
    participation: 0.4,
    contribution: 0.35,
    match_utilization: 0.25,
    contribution_ceiling_pct: 10.0,
};

/// Industry best-practice targets
pub struct IndustryTargets {
    pub participation: f64,
    pub contribution: f64,
    pub match_utilization: f64,
    pub readiness: f64,
}

pub const INDUSTRY_TARGETS: IndustryTargets = IndustryTargets {
    participation: 85.0,
    contribution: 8.0,
    match_utilization: 90.0,
    readiness: 75.0,
};

/// Overall grade weights
pub struct GradeWeights {
    pub participation: f64,
    pub contribution: f64,
    pub match_utilization: f64,
    pub readiness: f64,
}

pub const GRADE_WEIGHTS: GradeWeights = GradeWeights {
    participation: 0.30,
    contribution: 0.25,
    match_utilization: 0.25,
    readiness: 0.20,
};

/// Gap severity cut-offs in points below target.
/// `critical: None` means the metric never escalates past High.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityThresholds {
    pub critical: Option<f64>,
    pub high: f64,
}

pub const PARTICIPATION_SEVERITY: SeverityThresholds = SeverityThresholds {
    critical: Some(20.0),
    high: 10.0,
};

pub const CONTRIBUTION_SEVERITY: SeverityThresholds = SeverityThresholds {
    critical: None,
    high: 3.0,
};

pub const MATCH_SEVERITY: SeverityThresholds = SeverityThresholds {
    critical: Some(15.0),
    high: 5.0,
};

pub const READINESS_SEVERITY: SeverityThresholds = SeverityThresholds {
    critical: Some(20.0),
    high: 10.0,
};

/// Age band reference table: (label, lower age inclusive, upper age exclusive,
/// participation when the workforce average falls in the band, participation
/// otherwise, average contribution %)
pub const AGE_BANDS: [(&str, u32, u32, f64, f64, f64); 5] = [
    ("20-29", 0, 30, 45.0, 35.0, 4.2),
    ("30-39", 30, 40, 72.0, 65.0, 6.1),
    ("40-49", 40, 50, 85.0, 78.0, 8.3),
    ("50-59", 50, 60, 92.0, 85.0, 11.2),
    ("60+", 60, u32::MAX, 95.0, 88.0, 13.8),
];

/// Behavioral journey potentials
pub struct JourneyTargets {
    pub enrollment: f64,
    pub initial_contribution: f64,
    pub match_awareness: f64,
    pub optimization: f64,
    pub long_term_planning: f64,
    /// Share of match maximizers assumed to have optimized further
    pub optimization_share: f64,
    /// Fixed observed value for long-term planning
    pub long_term_planning_current: f64,
}

pub const JOURNEY_TARGETS: JourneyTargets = JourneyTargets {
    enrollment: 95.0,
    initial_contribution: 6.0,
    match_awareness: 90.0,
    optimization: 85.0,
    long_term_planning: 75.0,
    optimization_share: 0.8,
    long_term_planning_current: 45.0,
};

/// Recommendation triggers
pub struct RecommendationTriggers {
    pub participation_critical_gap: f64,
    pub match_critical_gap: f64,
    pub contribution_critical_gap: f64,
    pub readiness_gap: f64,
    pub menu_streamline_above: u32,
    pub young_workforce_age: u32,
    pub short_tenure_years: f64,
}

pub const RECOMMENDATION_TRIGGERS: RecommendationTriggers = RecommendationTriggers {
    participation_critical_gap: 10.0,
    match_critical_gap: 15.0,
    contribution_critical_gap: 3.0,
    readiness_gap: 10.0,
    menu_streamline_above: 20,
    young_workforce_age: 35,
    short_tenure_years: 3.0,
};

/// Projection insight thresholds (percent improvement, Enhanced vs Current)
pub struct InsightThresholds {
    pub asset_growth_pct: f64,
    pub per_participant_pct: f64,
    pub early_growth_pct: f64,
    pub early_year: u32,
}

pub const INSIGHT_THRESHOLDS: InsightThresholds = InsightThresholds {
    asset_growth_pct: 10.0,
    per_participant_pct: 5.0,
    early_growth_pct: 5.0,
    early_year: 10,
};

/// Bounds for the blended total-fee estimate (percent of assets)
pub const TOTAL_FEE_PCT_FLOOR: f64 = 0.25;
pub const TOTAL_FEE_PCT_CEILING: f64 = 2.5;

/// Default projection horizon
pub const DEFAULT_HORIZON_YEARS: u32 = 25;

/// Spacing of the sampled chart series
pub const CHART_INTERVAL_YEARS: u32 = 5;
