//! Required monthly contribution solver
//!
//! Inverts the annuity future-value formula with the lump sum, rate and
//! horizon held fixed. The result is a recommendation only; the caller's plan
//! is never changed.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::analysis::analyze_goals;
use super::data::LifeGoal;
use crate::config::PlannerConfig;
use crate::error::{ensure_finite, ensure_non_negative, PlannerError, Result};
use crate::plan::{checked_months, InvestmentPlan};
use crate::projection::{annuity_factor, growth_path, lump_sum_value};

/// Outcome of the contribution solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recommendation {
    /// The current plan already covers the goals
    Achievable,

    /// Raise the monthly contribution
    #[serde(rename_all = "camelCase")]
    IncreaseMonthly {
        /// Exact contribution that closes the gap
        required_monthly: f64,
        /// `required_monthly` rounded up to the rounding unit
        recommended_monthly: f64,
    },
}

impl Recommendation {
    pub fn recommended_monthly(&self) -> Option<f64> {
        match self {
            Recommendation::Achievable => None,
            Recommendation::IncreaseMonthly {
                recommended_monthly,
                ..
            } => Some(*recommended_monthly),
        }
    }
}

/// Round `value` up to the next multiple of `unit`
pub fn round_up_to_unit(value: f64, unit: f64) -> f64 {
    (value / unit).ceil() * unit
}

/// Monthly contribution needed for the plan to reach `total_goal_amount`
/// after `horizon_years`
pub fn solve_required_monthly_contribution(
    plan: &InvestmentPlan,
    total_goal_amount: f64,
    horizon_years: f64,
    rounding_unit: f64,
) -> Result<Recommendation> {
    plan.validate()?;
    ensure_non_negative("total_goal_amount", total_goal_amount)?;
    ensure_non_negative("horizon_years", horizon_years)?;
    ensure_non_negative("rounding_unit", rounding_unit)?;
    if rounding_unit == 0.0 {
        return Err(PlannerError::invalid("rounding_unit", "must be > 0"));
    }

    let months = checked_months("horizon_years", horizon_years)?;
    if months == 0 {
        return Err(PlannerError::invalid(
            "horizon_years",
            format!("must cover at least one month, got {}", horizon_years),
        ));
    }

    let lump_sum = lump_sum_value(plan, months);
    ensure_finite("annual_rate_percent", lump_sum)?;
    let needed = total_goal_amount - lump_sum;
    if needed <= 0.0 {
        debug!(
            "lump sum {:.2} already covers {:.2}",
            lump_sum, total_goal_amount
        );
        return Ok(Recommendation::Achievable);
    }

    let factor = annuity_factor(plan.monthly_rate(), months);
    if !factor.is_finite() || factor <= 0.0 {
        return Err(PlannerError::invalid(
            "annual_rate_percent",
            format!("no usable annuity factor over {} months, got {}", months, factor),
        ));
    }
    let required = needed / factor;
    ensure_finite("total_goal_amount", required)?;
    let recommended = round_up_to_unit(required, rounding_unit);

    info!(
        "need {:.2}/month over {} months on the {:?} path (recommend {:.0})",
        required,
        months,
        growth_path(plan),
        recommended
    );

    Ok(Recommendation::IncreaseMonthly {
        required_monthly: required,
        recommended_monthly: recommended,
    })
}

/// Analyze the goals and, when they are out of reach, solve for the
/// contribution that reaches them by the furthest goal. `None` for an empty
/// goal set.
pub fn recommend_strategy(
    plan: &InvestmentPlan,
    goals: &[LifeGoal],
    config: &PlannerConfig,
) -> Result<Option<Recommendation>> {
    if goals.is_empty() {
        return Ok(None);
    }

    let analysis = analyze_goals(plan, goals)?;
    if analysis.achievable || analysis.horizon_years == 0 {
        return Ok(Some(Recommendation::Achievable));
    }

    solve_required_monthly_contribution(
        plan,
        analysis.total_goal_amount,
        analysis.horizon_years as f64,
        config.rounding_unit,
    )
    .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::GoalBook;
    use crate::projection::project_future_value;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_lump_sum_alone_suffices() {
        let plan = InvestmentPlan::new(1_000_000.0, 0.0, 7.0, 10.0);
        let rec = solve_required_monthly_contribution(&plan, 1_500_000.0, 10.0, 10_000.0).unwrap();
        assert_eq!(rec, Recommendation::Achievable);
        assert!(rec.recommended_monthly().is_none());
    }

    #[test]
    fn test_exact_inverse_of_annuity() {
        let plan = InvestmentPlan::new(1_000_000.0, 0.0, 7.0, 10.0);
        let target = project_future_value(&plan.with_monthly_contribution(100_000.0), 10.0).unwrap();

        match solve_required_monthly_contribution(&plan, target, 10.0, 10_000.0).unwrap() {
            Recommendation::IncreaseMonthly {
                required_monthly,
                recommended_monthly,
            } => {
                assert_relative_eq!(required_monthly, 100_000.0, max_relative = 1e-9);
                assert!(recommended_monthly >= required_monthly);
                assert_eq!(recommended_monthly % 10_000.0, 0.0);
            }
            other => panic!("expected increase, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_rate_linear() {
        let plan = InvestmentPlan::new(1_000.0, 0.0, 0.0, 1.0);
        let rec = solve_required_monthly_contribution(&plan, 13_000.0, 1.0, 1.0).unwrap();
        assert_eq!(
            rec,
            Recommendation::IncreaseMonthly {
                required_monthly: 1_000.0,
                recommended_monthly: 1_000.0,
            }
        );
    }

    #[test]
    fn test_rounding_unit() {
        assert_eq!(round_up_to_unit(123_456.0, 10_000.0), 130_000.0);
        assert_eq!(round_up_to_unit(120_000.0, 10_000.0), 120_000.0);
    }

    #[test]
    fn test_invalid_arguments() {
        let plan = InvestmentPlan::new(1_000.0, 0.0, 5.0, 1.0);
        assert!(solve_required_monthly_contribution(&plan, 5_000.0, 0.0, 10.0).is_err());
        assert!(solve_required_monthly_contribution(&plan, 5_000.0, -1.0, 10.0).is_err());
        assert!(solve_required_monthly_contribution(&plan, 5_000.0, 1.0, 0.0).is_err());
        assert!(solve_required_monthly_contribution(&plan, f64::NAN, 1.0, 10.0).is_err());
    }

    #[test]
    fn test_tiny_rate_gives_finite_contribution() {
        let plan = InvestmentPlan::new(0.0, 0.0, 1e-14, 10.0);
        let rec = solve_required_monthly_contribution(&plan, 1_000_000.0, 10.0, 10_000.0).unwrap();
        match rec {
            Recommendation::IncreaseMonthly {
                required_monthly,
                recommended_monthly,
            } => {
                assert_relative_eq!(required_monthly, 1_000_000.0 / 120.0);
                assert_eq!(recommended_monthly, 10_000.0);
            }
            other => panic!("expected increase, got {:?}", other),
        }

        let plan = plan.with_rate(1e-6);
        let monthly = solve_required_monthly_contribution(&plan, 1_000_000.0, 10.0, 1.0)
            .unwrap()
            .recommended_monthly()
            .unwrap();
        assert!(monthly.is_finite() && monthly > 0.0);
    }

    #[test]
    fn test_overflowing_inputs_rejected() {
        let plan = InvestmentPlan::new(1_000.0, 0.0, 7.0, 10.0);
        assert!(solve_required_monthly_contribution(&plan, 5_000.0, 1e12, 10.0).is_err());

        let plan = InvestmentPlan::new(0.0, 0.0, 1e6, 10.0);
        assert!(matches!(
            solve_required_monthly_contribution(&plan, 5_000.0, 1_000.0, 10.0),
            Err(PlannerError::InvalidArgument { field: "annual_rate_percent", .. })
        ));
    }

    #[test]
    fn test_recommend_strategy() {
        let config = PlannerConfig::default();
        let plan = InvestmentPlan::new(10_000_000.0, 500_000.0, 7.0, 30.0);

        assert_eq!(recommend_strategy(&plan, &[], &config).unwrap(), None);

        let book = GoalBook::with_samples(2026);
        let rec = recommend_strategy(&plan, book.goals(), &config).unwrap().unwrap();
        let monthly = rec.recommended_monthly().expect("samples exceed this plan");

        let bumped = plan.with_monthly_contribution(monthly);
        let analysis = analyze_goals(&bumped, book.goals()).unwrap();
        assert!(analysis.achievable);

        let mut small = GoalBook::new();
        small.add("Laptop", 2027, 1_000_000.0, 2026).unwrap();
        assert_eq!(
            recommend_strategy(&plan, small.goals(), &config).unwrap(),
            Some(Recommendation::Achievable)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_recommended_contribution_reaches_goal(
            initial in 0u32..50_000_000,
            rate_bp in 0u32..1_500,
            horizon in 1u32..40,
            goal in 1_000_000u32..2_000_000_000
        ) {
            let plan = InvestmentPlan::new(initial as f64, 0.0, rate_bp as f64 / 100.0, horizon as f64);
            let goal = goal as f64;
            let rec = solve_required_monthly_contribution(&plan, goal, horizon as f64, 10_000.0).unwrap();
            let monthly = rec.recommended_monthly().unwrap_or(0.0);
            let reached = project_future_value(&plan.with_monthly_contribution(monthly), horizon as f64).unwrap();
            prop_assert!(reached >= goal * (1.0 - 1e-9), "reached {} < goal {}", reached, goal);
        }
    }
}
