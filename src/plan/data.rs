//! Investment plan value type

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_non_negative, PlannerError, Result};

/// Longest horizon any operation accepts (12,000 months)
pub const MAX_HORIZON_YEARS: f64 = 1_000.0;

/// Fixed-rate, fixed-contribution investment plan
///
/// Field aliases accept the names used by older saved plans
/// (`monthlyInvestment`, `interestRate`, `period`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPlan {
    /// Lump sum invested at time zero
    pub initial_amount: f64,

    /// Contribution added at the end of each month
    #[serde(alias = "monthlyInvestment")]
    pub monthly_contribution: f64,

    /// Nominal annual rate in percent (7.0 = 7%), compounded monthly
    #[serde(alias = "interestRate")]
    pub annual_rate_percent: f64,

    /// Projection horizon in years
    #[serde(alias = "period")]
    pub horizon_years: f64,
}

impl InvestmentPlan {
    pub fn new(
        initial_amount: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        horizon_years: f64,
    ) -> Self {
        Self {
            initial_amount,
            monthly_contribution,
            annual_rate_percent,
            horizon_years,
        }
    }

    /// Periodic (monthly) rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Horizon converted to whole months
    pub fn horizon_months(&self) -> u32 {
        years_to_months(self.horizon_years)
    }

    /// Copy of this plan with a different monthly contribution
    pub fn with_monthly_contribution(&self, monthly_contribution: f64) -> Self {
        Self {
            monthly_contribution,
            ..*self
        }
    }

    /// Copy of this plan with a different annual rate
    pub fn with_rate(&self, annual_rate_percent: f64) -> Self {
        Self {
            annual_rate_percent,
            ..*self
        }
    }

    /// Total principal paid in after `months`
    pub fn principal_after(&self, months: u32) -> f64 {
        self.initial_amount + self.monthly_contribution * months as f64
    }

    /// Check that all fields are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("initial_amount", self.initial_amount)?;
        ensure_non_negative("monthly_contribution", self.monthly_contribution)?;
        ensure_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        ensure_non_negative("horizon_years", self.horizon_years)?;
        checked_months("horizon_years", self.horizon_years)?;
        Ok(())
    }
}

/// `years_to_months` for caller-supplied horizons: non-finite values and
/// horizons beyond `MAX_HORIZON_YEARS` are `InvalidArgument`
pub fn checked_months(field: &'static str, years: f64) -> Result<u32> {
    ensure_finite(field, years)?;
    if years > MAX_HORIZON_YEARS {
        return Err(PlannerError::invalid(
            field,
            format!("must be at most {} years, got {}", MAX_HORIZON_YEARS, years),
        ));
    }
    Ok(years_to_months(years))
}

/// Convert a (possibly fractional) year count to whole months.
/// Non-positive input gives zero. Unbounded; see `checked_months`.
pub fn years_to_months(years: f64) -> u32 {
    if years <= 0.0 {
        0
    } else {
        (years * 12.0).round() as u32
    }
}
