//! Planner configuration
//!
//! Defaults can be overridden through environment variables:
//!   PLANNER_ROUNDING_UNIT, PLANNER_SERIES_STEP, PLANNER_DEFAULT_RATE

use log::warn;
use serde::{Deserialize, Serialize};
use std::env;

/// Default rounding unit for recommended contributions
pub const DEFAULT_ROUNDING_UNIT: f64 = 10_000.0;

/// Rate assumed for goal views when the caller has none (7%)
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 7.0;

/// Configuration shared by the solver, series builder and reports
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Recommended monthly contributions are rounded up to a multiple of this
    pub rounding_unit: f64,

    /// Sampling step for projection series, in whole years
    pub series_step_years: u32,

    /// Fallback annual rate (percent)
    pub default_rate_percent: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            rounding_unit: DEFAULT_ROUNDING_UNIT,
            series_step_years: 1,
            default_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
        }
    }
}

impl PlannerConfig {
    /// Defaults with any valid environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from a key lookup. Unparseable or out-of-range values
    /// are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("PLANNER_ROUNDING_UNIT") {
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => self.rounding_unit = v,
                _ => warn!("ignoring PLANNER_ROUNDING_UNIT={:?}", raw),
            }
        }

        if let Some(raw) = lookup("PLANNER_SERIES_STEP") {
            match raw.trim().parse::<u32>() {
                Ok(v) if v > 0 => self.series_step_years = v,
                _ => warn!("ignoring PLANNER_SERIES_STEP={:?}", raw),
            }
        }

        if let Some(raw) = lookup("PLANNER_DEFAULT_RATE") {
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => self.default_rate_percent = v,
                _ => warn!("ignoring PLANNER_DEFAULT_RATE={:?}", raw),
            }
        }

        self
    }
}
