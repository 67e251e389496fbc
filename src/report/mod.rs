//! Report data collection and export
//!
//! `ReportData` gathers everything a rendered report shows (plan summary,
//! yearly series, goals, affordability and recommendation) as plain data.
//! Layout and rendering belong to the consumer.

mod export;

pub use export::{format_amount, write_report_json, write_series_csv, write_timeline_csv};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::goals::{
    analyze_goals, goal_timeline, recommend_strategy, GoalAnalysis, GoalCheckpoint, LifeGoal,
    Recommendation,
};
use crate::plan::InvestmentPlan;
use crate::projection::{build_series, summarize, ProjectionPoint, ProjectionSummary};

/// Everything needed to render a planning report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub report_date: NaiveDate,
    pub plan: InvestmentPlan,
    pub summary: ProjectionSummary,
    pub series: Vec<ProjectionPoint>,
    pub goals: Vec<LifeGoal>,
    pub timeline: Vec<GoalCheckpoint>,
    /// None when no goals are registered
    pub analysis: Option<GoalAnalysis>,
    pub recommendation: Option<Recommendation>,
}

impl ReportData {
    /// Run every engine operation the report needs
    pub fn collect(
        plan: &InvestmentPlan,
        goals: &[LifeGoal],
        config: &PlannerConfig,
        report_date: NaiveDate,
    ) -> Result<Self> {
        let analysis = if goals.is_empty() {
            None
        } else {
            Some(analyze_goals(plan, goals)?)
        };

        Ok(Self {
            report_date,
            plan: *plan,
            summary: summarize(plan)?,
            series: build_series(plan, config.series_step_years)?,
            goals: goals.to_vec(),
            timeline: goal_timeline(plan, goals)?,
            analysis,
            recommendation: recommend_strategy(plan, goals, config)?,
        })
    }
}
