//! Life goal records

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PlannerError, Result};

/// Opaque goal identifier, unique within a goal book
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(pub u64);

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A future expense the plan should be able to cover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeGoal {
    pub id: GoalId,

    /// Display label (wedding, home, tuition, ...)
    pub name: String,

    /// Calendar year the money is needed
    #[serde(alias = "year")]
    pub target_year: i32,

    /// Amount needed in that year
    pub amount: f64,

    /// target_year - current year at creation (or at the last revalidation)
    pub years_from_now: u32,
}

impl LifeGoal {
    /// Create a goal, enforcing the submission rules: non-empty name,
    /// positive finite amount, target year strictly after `current_year`
    pub fn new(
        id: GoalId,
        name: &str,
        target_year: i32,
        amount: f64,
        current_year: i32,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::GoalRejected("name must not be empty".to_string()));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(PlannerError::GoalRejected(format!(
                "amount for '{}' must be a positive number, got {}",
                name, amount
            )));
        }
        if target_year <= current_year {
            return Err(PlannerError::GoalRejected(format!(
                "target year {} for '{}' is not after {}",
                target_year, name, current_year
            )));
        }

        let mut goal = Self {
            id,
            name: name.to_string(),
            target_year,
            amount,
            years_from_now: 0,
        };
        goal.years_from_now = goal.years_from(current_year);
        Ok(goal)
    }

    /// Re-apply the creation rules as of `current_year`, recomputing
    /// `years_from_now`. Used for goals read back from storage.
    pub fn revalidated(&self, current_year: i32) -> Result<Self> {
        Self::new(self.id, &self.name, self.target_year, self.amount, current_year)
    }

    /// Years remaining measured from an arbitrary year (0 once passed)
    pub fn years_from(&self, year: i32) -> u32 {
        (self.target_year - year).max(0) as u32
    }
}
