//! Compound Planner - compound-interest projections and life-goal planning
//!
//! This library provides:
//! - Future-value projection under monthly compounding with monthly contributions
//! - Year-by-year projection series for charts and tables
//! - A sorted life-goal book with affordability analysis
//! - Required-contribution solving and strategy recommendations
//! - Batch scenario runs, JSON snapshots and CSV/JSON report export
//!
//! All engine operations are pure functions over plain values.

pub mod error;
pub mod config;
pub mod plan;
pub mod projection;
pub mod goals;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::{PlannerError, Result};
pub use config::PlannerConfig;
pub use plan::{InvestmentPlan, PlanSnapshot};
pub use projection::{build_series, project_future_value, ProjectionPoint, ProjectionSummary};
pub use goals::{
    analyze_goals, solve_required_monthly_contribution, GoalAnalysis, GoalBook, GoalId, LifeGoal,
    Recommendation,
};
pub use scenario::{ScenarioResult, ScenarioRunner};
pub use report::ReportData;
