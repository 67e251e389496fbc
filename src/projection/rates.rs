//! Rate helpers: doubling time and the rate needed to reach a target
//!
//! The implied-rate search mirrors the usual IRR fallback: bracket, then bisect
//! on the monthly rate until the bracket is narrower than the tolerance.

use log::debug;

use super::engine::value_after_months;
use crate::error::{ensure_non_negative, PlannerError, Result};
use crate::plan::{checked_months, InvestmentPlan};

/// Upper bound for the implied-rate search (percent per year)
const MAX_SEARCH_RATE_PERCENT: f64 = 100.0;

/// Rule of 72 estimate of doubling time in years
pub fn rule_of_72(annual_rate_percent: f64) -> Result<f64> {
    ensure_positive_rate(annual_rate_percent)?;
    Ok(72.0 / annual_rate_percent)
}

/// Exact doubling time in years under monthly compounding
pub fn exact_doubling_years(annual_rate_percent: f64) -> Result<f64> {
    ensure_positive_rate(annual_rate_percent)?;
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    Ok(std::f64::consts::LN_2 / (12.0 * monthly_rate.ln_1p()))
}

fn ensure_positive_rate(annual_rate_percent: f64) -> Result<()> {
    ensure_non_negative("annual_rate_percent", annual_rate_percent)?;
    if annual_rate_percent == 0.0 {
        return Err(PlannerError::invalid(
            "annual_rate_percent",
            "money never doubles at a zero rate",
        ));
    }
    Ok(())
}

/// Smallest annual rate (percent) at which the plan reaches `target` after
/// `horizon_years`, keeping amounts fixed
///
/// Returns `Some(0.0)` when the target is met without growth and `None` when
/// even the search ceiling falls short.
pub fn implied_annual_rate(
    plan: &InvestmentPlan,
    target: f64,
    horizon_years: f64,
) -> Result<Option<f64>> {
    plan.validate()?;
    ensure_non_negative("target", target)?;
    ensure_non_negative("horizon_years", horizon_years)?;

    let months = checked_months("horizon_years", horizon_years)?;
    let value_at = |rate_percent: f64| value_after_months(&plan.with_rate(rate_percent), months);

    if value_at(0.0) >= target {
        return Ok(Some(0.0));
    }
    if value_at(MAX_SEARCH_RATE_PERCENT) < target {
        debug!(
            "target {:.2} unreachable below {}% in {} months",
            target, MAX_SEARCH_RATE_PERCENT, months
        );
        return Ok(None);
    }

    let tolerance = 1e-10;
    let max_iterations = 200;
    let mut low = 0.0_f64;
    let mut high = MAX_SEARCH_RATE_PERCENT;

    for _ in 0..max_iterations {
        let mid = (low + high) / 2.0;
        if value_at(mid) >= target {
            high = mid;
        } else {
            low = mid;
        }
        if high - low < tolerance {
            break;
        }
    }

    Ok(Some(high))
}
