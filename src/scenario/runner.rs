//! Scenario runner for batch projections
//!
//! Validates the plan and any feature override once, then runs any number of scenarios against it.
//! Scenarios are independent, so batches are evaluated in parallel and
//! returned in request order.

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{EffectiveRates, ScenarioId, ScenarioResolver};
use crate::error::Result;
use crate::plan::PlanParameters;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Projection of one scenario together with the rates that drove it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioProjection {
    pub scenario: ScenarioId,
    pub rates: EffectiveRates,
    pub result: ProjectionResult,
}

/// Resolver plus engine configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let projections = runner.run_all(&params, &ScenarioId::BALANCE_COMPARISON)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    resolver: ScenarioResolver,
    config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Runner with the default horizon and the plan's own feature configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: ScenarioResolver) -> Self {
        Self {
            resolver,
            config: ProjectionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ProjectionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn resolver(&self) -> &ScenarioResolver {
        &self.resolver
    }

    /// Run a single scenario
    pub fn run(&self, params: &PlanParameters, scenario: ScenarioId) -> Result<ScenarioProjection> {
        self.resolver.validate(params)?;
        Ok(self.run_validated(params, scenario))
    }

    /// Run several scenarios for the same plan
    pub fn run_all(
        &self,
        params: &PlanParameters,
        scenarios: &[ScenarioId],
    ) -> Result<Vec<ScenarioProjection>> {
        self.resolver.validate(params)?;
        info!("projecting {} scenarios", scenarios.len());

        Ok(scenarios
            .par_iter()
            .map(|&scenario| self.run_validated(params, scenario))
            .collect())
    }

    fn run_validated(&self, params: &PlanParameters, scenario: ScenarioId) -> ScenarioProjection {
        let rates = self.resolver.resolve(scenario, params);
        debug!(
            "{}: employee {:.2}%, match utilization {:.2}%",
            scenario, rates.employee_contrib_rate_pct, rates.match_utilization_pct
        );

        let engine = ProjectionEngine::new(self.config.clone());
        let result = engine.project(&rates, params, &params.fee_model());

        ScenarioProjection {
            scenario,
            rates,
            result,
        }
    }
}
