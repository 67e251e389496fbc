//! Investment plan data, persistence and goal import

mod data;
pub mod loader;

pub use data::{checked_months, InvestmentPlan, MAX_HORIZON_YEARS};
pub use loader::{load_goals_csv, load_goals_from_reader, load_snapshot, save_snapshot, PlanSnapshot};
