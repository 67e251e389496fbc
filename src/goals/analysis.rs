//! Goal affordability: aggregate analysis and per-goal timeline

use serde::{Deserialize, Serialize};

use super::data::{GoalId, LifeGoal};
use crate::error::{PlannerError, Result};
use crate::plan::InvestmentPlan;
use crate::projection::project_future_value;

/// Aggregate affordability of a goal set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAnalysis {
    /// Sum of every goal amount
    pub total_goal_amount: f64,

    /// Projected assets when the furthest goal falls due
    pub projected_assets_at_horizon: f64,

    /// years_from_now of the furthest goal
    pub horizon_years: u32,

    pub achievable: bool,

    /// max(0, total - projected)
    pub shortfall: f64,
}

/// Compare the sum of all goals against assets projected at the furthest
/// goal's horizon
///
/// Intermediate goals are not drawn down as they fall due; the question is
/// only whether the total has been saved by the time the last goal arrives.
pub fn analyze_goals(plan: &InvestmentPlan, goals: &[LifeGoal]) -> Result<GoalAnalysis> {
    let horizon_years = goals
        .iter()
        .map(|g| g.years_from_now)
        .max()
        .ok_or_else(|| PlannerError::invalid("goals", "at least one goal is required"))?;

    let total_goal_amount: f64 = goals.iter().map(|g| g.amount).sum();
    let projected = project_future_value(plan, horizon_years as f64)?;

    Ok(GoalAnalysis {
        total_goal_amount,
        projected_assets_at_horizon: projected,
        horizon_years,
        achievable: projected >= total_goal_amount,
        shortfall: (total_goal_amount - projected).max(0.0),
    })
}

/// Affordability of one goal taken on its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCheckpoint {
    pub goal_id: GoalId,
    pub name: String,
    pub target_year: i32,
    pub amount: f64,
    pub projected_assets: f64,
    pub affordable: bool,
    pub shortage: f64,
}

/// Projected assets at each goal's own year, in goal order
pub fn goal_timeline(plan: &InvestmentPlan, goals: &[LifeGoal]) -> Result<Vec<GoalCheckpoint>> {
    goals
        .iter()
        .map(|goal| {
            let projected = project_future_value(plan, goal.years_from_now as f64)?;
            Ok(GoalCheckpoint {
                goal_id: goal.id,
                name: goal.name.clone(),
                target_year: goal.target_year,
                amount: goal.amount,
                projected_assets: projected,
                affordable: projected >= goal.amount,
                shortage: (goal.amount - projected).max(0.0),
            })
        })
        .collect()
}
