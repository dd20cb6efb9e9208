//! Plan parameters and the setup blob they are loaded from

mod params;
pub mod loader;

pub use params::{EnrollmentMethod, PlanParameters, VestingSchedule};
pub(crate) use params::percentage;
pub use loader::{load_plan_json, load_plans_csv, load_plans_from_reader, SetupData};
