//! Plan Projection - retirement plan balance projection and engagement analysis
//!
//! This library provides:
//! - Monthly-compounded projections of the average participant account
//! - Scenario resolution for contribution, match and plan-design alternatives
//! - Fee modeling (basis points, flat plus per-head, employer/employee split)
//! - Engagement scoring, gap analysis and recommendations
//! - Report assembly for a presentation layer

pub mod error;
pub mod heuristics;
pub mod fees;
pub mod plan;
pub mod scenario;
pub mod projection;
pub mod engagement;
pub mod report;

// Re-export commonly used types
pub use error::{PlanError, Result};
pub use fees::{FeeModel, FeeStructure, FeesPaidBy, PlanFeeModel};
pub use plan::{PlanParameters, SetupData};
pub use scenario::{EffectiveRates, FeatureConfig, ScenarioId, ScenarioResolver, ScenarioRunner};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, YearRecord};
pub use engagement::{EngagementMetrics, EngagementModel};
pub use report::{PlanReport, ReportAssembler};
