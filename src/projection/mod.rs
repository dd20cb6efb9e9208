//! Balance projection engine for the average participant account

mod state;
mod engine;
mod cashflows;
mod returns;
mod assets;

pub use state::ProjectionState;
pub use engine::{employer_monthly_contribution, ProjectionConfig, ProjectionEngine};
pub use cashflows::{ChartPoint, ProjectionResult, ProjectionSummary, YearRecord};
pub use returns::effective_return_pct;
pub use assets::{PlanAssetPoint, PlanAssetProjection};
