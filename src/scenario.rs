//! Scenario runner for batch projections
//!
//! Holds one configuration and projects many plans (or one plan at many
//! rates) in parallel. Every projection is independent, so results come back
//! in input order regardless of scheduling.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::plan::InvestmentPlan;
use crate::projection::{build_series, summarize, ProjectionPoint, ProjectionSummary};

/// Series and summary for one plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub plan: InvestmentPlan,
    pub series: Vec<ProjectionPoint>,
    pub summary: ProjectionSummary,
}

/// Batch projection runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(PlannerConfig::default());
/// for result in runner.rate_sweep(&plan, &[4.0, 6.0, 8.0])? {
///     println!("{:.1}% -> {:.0}", result.plan.annual_rate_percent, result.summary.final_value);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: PlannerConfig,
}

impl ScenarioRunner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Project a single plan
    pub fn project(&self, plan: &InvestmentPlan) -> Result<ScenarioResult> {
        Ok(ScenarioResult {
            plan: *plan,
            series: build_series(plan, self.config.series_step_years)?,
            summary: summarize(plan)?,
        })
    }

    /// Project several plans in parallel. Fails on the first invalid plan.
    pub fn run_batch(&self, plans: &[InvestmentPlan]) -> Result<Vec<ScenarioResult>> {
        debug!("projecting {} plans", plans.len());
        plans.par_iter().map(|plan| self.project(plan)).collect()
    }

    /// Project one plan at each of the given annual rates (percent)
    pub fn rate_sweep(
        &self,
        plan: &InvestmentPlan,
        rates_percent: &[f64],
    ) -> Result<Vec<ScenarioResult>> {
        debug!("sweeping {} rates", rates_percent.len());
        rates_percent
            .par_iter()
            .map(|&rate| self.project(&plan.with_rate(rate)))
            .collect()
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PlannerConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plan() -> InvestmentPlan {
        InvestmentPlan::new(1_000_000.0, 100_000.0, 7.0, 10.0)
    }

    #[test]
    fn test_rate_sweep_ordered_and_increasing() {
        let runner = ScenarioRunner::default();
        let rates = [2.0, 4.0, 6.0, 8.0, 10.0];

        let results = runner.rate_sweep(&test_plan(), &rates).unwrap();
        assert_eq!(results.len(), rates.len());

        for (result, rate) in results.iter().zip(rates) {
            assert_eq!(result.plan.annual_rate_percent, rate);
            assert_eq!(result.series.len(), 11);
        }

        // Higher rate should result in higher final value
        for pair in results.windows(2) {
            assert!(pair[1].summary.final_value > pair[0].summary.final_value);
        }
    }

    #[test]
    fn test_batch_respects_step() {
        let mut runner = ScenarioRunner::default();
        runner.config_mut().series_step_years = 5;

        let plans = [test_plan(), test_plan().with_monthly_contribution(0.0)];
        let results = runner.run_batch(&plans).unwrap();
        assert_eq!(results[0].series.len(), 3);
        assert!(results[0].summary.final_value > results[1].summary.final_value);
    }

    #[test]
    fn test_invalid_plan_fails_batch() {
        let runner = ScenarioRunner::default();
        let plans = [test_plan(), test_plan().with_rate(-1.0)];
        assert!(runner.run_batch(&plans).is_err());
    }
}
