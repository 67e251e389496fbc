//! Life goals: the sorted goal book, affordability analysis and the
//! required-contribution solver

mod data;
mod book;
mod analysis;
mod solver;

pub use data::{GoalId, LifeGoal};
pub use book::GoalBook;
pub use analysis::{analyze_goals, goal_timeline, GoalAnalysis, GoalCheckpoint};
pub use solver::{
    recommend_strategy, round_up_to_unit, solve_required_monthly_contribution, Recommendation,
};
