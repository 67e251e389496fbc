//! Year-by-year projection series and summary figures

use serde::{Deserialize, Serialize};

use super::rates::{exact_doubling_years, rule_of_72};
use super::engine::checked_value_after_months;
use crate::error::{PlannerError, Result};
use crate::plan::InvestmentPlan;

/// One sample of a projection series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year_offset: u32,
    pub principal_contributed: f64,
    pub total_value: f64,
}

impl ProjectionPoint {
    /// Growth on top of the principal paid in
    pub fn profit(&self) -> f64 {
        self.total_value - self.principal_contributed
    }
}

/// Build a series sampled every `step_years` from year 0 through the last
/// whole year of the plan's horizon. The final year is always included.
pub fn build_series(plan: &InvestmentPlan, step_years: u32) -> Result<Vec<ProjectionPoint>> {
    plan.validate()?;
    if step_years == 0 {
        return Err(PlannerError::invalid("step_years", "must be > 0"));
    }

    let last_year = plan.horizon_months() / 12;
    let mut years: Vec<u32> = (0..=last_year).step_by(step_years as usize).collect();
    if years.last() != Some(&last_year) {
        years.push(last_year);
    }

    years.into_iter().map(|year| point_at(plan, year)).collect()
}

fn point_at(plan: &InvestmentPlan, year: u32) -> Result<ProjectionPoint> {
    let months = year * 12;
    Ok(ProjectionPoint {
        year_offset: year,
        principal_contributed: plan.principal_after(months),
        total_value: checked_value_after_months(plan, months)?,
    })
}

/// Headline figures for a plan over its own horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub horizon_months: u32,
    pub total_contributed: f64,
    pub total_profit: f64,
    pub final_value: f64,
    /// 72 / rate; None at a zero rate
    pub doubling_years_rule_of_72: Option<f64>,
    /// ln 2 / (12 ln(1 + r)); None at a zero rate
    pub doubling_years_exact: Option<f64>,
}

/// Summarize the plan at its full horizon (fractional years included)
pub fn summarize(plan: &InvestmentPlan) -> Result<ProjectionSummary> {
    plan.validate()?;

    let months = plan.horizon_months();
    let final_value = checked_value_after_months(plan, months)?;
    let total_contributed = plan.principal_after(months);

    Ok(ProjectionSummary {
        horizon_months: months,
        total_contributed,
        total_profit: final_value - total_contributed,
        final_value,
        doubling_years_rule_of_72: rule_of_72(plan.annual_rate_percent).ok(),
        doubling_years_exact: exact_doubling_years(plan.annual_rate_percent).ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project_future_value;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_yearly_series_covers_horizon() {
        let plan = InvestmentPlan::new(1_000_000.0, 100_000.0, 7.0, 10.0);
        let series = build_series(&plan, 1).unwrap();

        assert_eq!(series.len(), 11);
        assert_eq!(series[0].year_offset, 0);
        assert_eq!(series[0].total_value, 1_000_000.0);
        assert_eq!(series[0].profit(), 0.0);
        assert_eq!(series[10].year_offset, 10);
        assert_eq!(series[10].principal_contributed, 13_000_000.0);
        assert_relative_eq!(
            series[10].total_value,
            project_future_value(&plan, 10.0).unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_step_keeps_final_year() {
        let plan = InvestmentPlan::new(1000.0, 100.0, 5.0, 10.0);
        let years: Vec<u32> = build_series(&plan, 3)
            .unwrap()
            .iter()
            .map(|p| p.year_offset)
            .collect();
        assert_eq!(years, vec![0, 3, 6, 9, 10]);

        let years: Vec<u32> = build_series(&plan, 5)
            .unwrap()
            .iter()
            .map(|p| p.year_offset)
            .collect();
        assert_eq!(years, vec![0, 5, 10]);
    }

    #[test]
    fn test_zero_step_rejected() {
        let plan = InvestmentPlan::new(1000.0, 100.0, 5.0, 10.0);
        assert!(matches!(
            build_series(&plan, 0),
            Err(PlannerError::InvalidArgument { field: "step_years", .. })
        ));
    }

    #[test]
    fn test_zero_horizon_single_point() {
        let plan = InvestmentPlan::new(1000.0, 100.0, 5.0, 0.0);
        let series = build_series(&plan, 1).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].total_value, 1000.0);
    }

    #[test]
    fn test_summary() {
        let plan = InvestmentPlan::new(1_000_000.0, 100_000.0, 7.0, 10.0);
        let summary = summarize(&plan).unwrap();
        assert_eq!(summary.horizon_months, 120);
        assert_eq!(summary.total_contributed, 13_000_000.0);
        assert_relative_eq!(
            summary.total_profit,
            summary.final_value - 13_000_000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(summary.doubling_years_rule_of_72.unwrap(), 72.0 / 7.0);

        let flat = summarize(&plan.with_rate(0.0)).unwrap();
        assert!(flat.doubling_years_exact.is_none());
        assert_eq!(flat.total_profit, 0.0);
    }

    #[test]
    fn test_tiny_rate_stays_above_principal() {
        let plan = InvestmentPlan::new(0.0, 100.0, 1e-14, 10.0);
        for point in build_series(&plan, 1).unwrap() {
            assert!(point.total_value >= point.principal_contributed);
        }
        assert_eq!(summarize(&plan).unwrap().final_value, 12_000.0);
    }

    #[test]
    fn test_unbounded_inputs_rejected() {
        let plan = InvestmentPlan::new(1_000.0, 10.0, 7.0, 1e12);
        assert!(build_series(&plan, 1).is_err());
        assert!(summarize(&plan).is_err());

        let plan = InvestmentPlan::new(1_000.0, 10.0, 1e6, 1_000.0);
        assert!(matches!(
            build_series(&plan, 100),
            Err(PlannerError::InvalidArgument { field: "annual_rate_percent", .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_series_monotone_and_above_principal(
            initial in 0u32..5_000_000,
            monthly in 0u32..500_000,
            rate_bp in 0u32..1_500,
            horizon in 0u32..40,
            step in 1u32..6
        ) {
            let plan = InvestmentPlan::new(initial as f64, monthly as f64, rate_bp as f64 / 100.0, horizon as f64);
            let series = build_series(&plan, step).unwrap();
            for pair in series.windows(2) {
                prop_assert!(pair[0].total_value <= pair[1].total_value);
                prop_assert!(pair[0].year_offset < pair[1].year_offset);
            }
            for point in &series {
                let tol = 1e-9 * point.principal_contributed.max(1.0);
                prop_assert!(point.total_value + tol >= point.principal_contributed);
            }
        }
    }
}
