//! Closed-form future-value engine (monthly compounding, end-of-month contributions)

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, PlannerError, Result};
use crate::plan::{checked_months, InvestmentPlan};

/// Monthly rates below this take the linear path
const ZERO_RATE_TOLERANCE: f64 = 1e-10;

/// Which formula applies to the contribution stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthPath {
    /// Ordinary annuity: m * ((1+r)^n - 1) / r
    Compound,
    /// Rate of zero (or too small to register): contributions simply sum, m * n
    Linear,
}

/// Classify the plan's rate
pub fn growth_path(plan: &InvestmentPlan) -> GrowthPath {
    if plan.monthly_rate().abs() < ZERO_RATE_TOLERANCE {
        GrowthPath::Linear
    } else {
        GrowthPath::Compound
    }
}

/// (1 + r)^months
pub fn growth_factor(monthly_rate: f64, months: u32) -> f64 {
    (1.0 + monthly_rate).powf(months as f64)
}

/// ((1 + r)^months - 1) / r, the value of one unit paid at the end of each
/// month. Computed through `exp_m1` so small rates keep their precision.
pub fn annuity_factor(monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate.abs() < ZERO_RATE_TOLERANCE {
        months as f64
    } else {
        (months as f64 * monthly_rate.ln_1p()).exp_m1() / monthly_rate
    }
}

/// Future value of the initial lump sum after `months`
pub fn lump_sum_value(plan: &InvestmentPlan, months: u32) -> f64 {
    plan.initial_amount * growth_factor(plan.monthly_rate(), months)
}

/// Future value of `months` end-of-month contributions
pub fn contribution_value(plan: &InvestmentPlan, months: u32) -> f64 {
    if plan.monthly_contribution <= 0.0 || months == 0 {
        return 0.0;
    }
    plan.monthly_contribution * annuity_factor(plan.monthly_rate(), months)
}

/// Total value after a whole number of months. Inputs are assumed valid.
pub(crate) fn value_after_months(plan: &InvestmentPlan, months: u32) -> f64 {
    if months == 0 {
        return plan.initial_amount;
    }
    lump_sum_value(plan, months) + contribution_value(plan, months)
}

/// `value_after_months`, failing when the result overflows
pub(crate) fn checked_value_after_months(plan: &InvestmentPlan, months: u32) -> Result<f64> {
    let value = value_after_months(plan, months);
    if !value.is_finite() {
        return Err(PlannerError::invalid(
            "annual_rate_percent",
            format!(
                "{}% over {} months overflows the projected value",
                plan.annual_rate_percent, months
            ),
        ));
    }
    Ok(value)
}

/// Project the plan's total value `at_year` years from now
///
/// `at_year` is converted to months by rounding `at_year * 12`; zero or
/// negative offsets return the initial amount unchanged.
pub fn project_future_value(plan: &InvestmentPlan, at_year: f64) -> Result<f64> {
    plan.validate()?;
    ensure_finite("at_year", at_year)?;

    let months = checked_months("at_year", at_year)?;
    let value = checked_value_after_months(plan, months)?;
    trace!(
        "projected {:.2} at {} months ({:?} path)",
        value,
        months,
        growth_path(plan)
    );
    Ok(value)
}
