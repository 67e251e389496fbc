//! Projection engine: future value, series and rate helpers

mod engine;
mod series;
mod rates;

pub use engine::{
    annuity_factor, contribution_value, growth_factor, growth_path, lump_sum_value,
    project_future_value, GrowthPath,
};
pub(crate) use engine::{checked_value_after_months, value_after_months};
pub use series::{build_series, summarize, ProjectionPoint, ProjectionSummary};
pub use rates::{exact_doubling_years, implied_annual_rate, rule_of_72};
