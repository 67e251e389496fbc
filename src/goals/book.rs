//! Ordered goal collection

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::data::{GoalId, LifeGoal};
use crate::error::{PlannerError, Result};

/// Goals kept in ascending target-year order
///
/// Goals are never edited in place; an edit is a remove followed by an add.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<LifeGoal>", into = "Vec<LifeGoal>")]
pub struct GoalBook {
    goals: Vec<LifeGoal>,
    next_id: u64,
}

impl GoalBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a book from stored goals, restoring order and id allocation.
    /// Stored goals are taken as-is; call `revalidate` before analysis.
    pub fn from_goals(mut goals: Vec<LifeGoal>) -> Self {
        goals.sort_by_key(|g| g.target_year);
        let next_id = goals.iter().map(|g| g.id.0 + 1).max().unwrap_or(0);
        Self { goals, next_id }
    }

    /// Demo goals relative to `current_year`
    pub fn with_samples(current_year: i32) -> Self {
        let mut book = Self::new();
        let samples = [
            ("Wedding", 3, 30_000_000.0),
            ("First home", 7, 200_000_000.0),
            ("Children's tuition", 20, 100_000_000.0),
            ("Retirement fund", 30, 1_000_000_000.0),
        ];
        for (name, offset, amount) in samples {
            if let Err(e) = book.add(name, current_year + offset, amount, current_year) {
                warn!("sample goal '{}' rejected: {}", name, e);
            }
        }
        book
    }

    /// Validate and insert a goal, returning its new id
    pub fn add(
        &mut self,
        name: &str,
        target_year: i32,
        amount: f64,
        current_year: i32,
    ) -> Result<GoalId> {
        let id = GoalId(self.next_id);
        let goal = LifeGoal::new(id, name, target_year, amount, current_year).map_err(|e| {
            debug!("rejected goal '{}': {}", name, e);
            e
        })?;

        // after any goals already due the same year
        let index = self.goals.partition_point(|g| g.target_year <= target_year);
        self.goals.insert(index, goal);
        self.next_id += 1;
        Ok(id)
    }

    /// Remove a goal by id
    pub fn remove(&mut self, id: GoalId) -> Option<LifeGoal> {
        let index = self.goals.iter().position(|g| g.id == id)?;
        Some(self.goals.remove(index))
    }

    pub fn get(&self, id: GoalId) -> Option<&LifeGoal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn goals(&self) -> &[LifeGoal] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Sum of all goal amounts
    pub fn total_amount(&self) -> f64 {
        self.goals.iter().map(|g| g.amount).sum()
    }

    /// Re-apply the creation rules as of `current_year`
    ///
    /// Refreshes every `years_from_now` and drops goals that are invalid or
    /// already due, returning them with the reason.
    pub fn revalidate(&mut self, current_year: i32) -> Vec<(LifeGoal, PlannerError)> {
        let mut kept = Vec::with_capacity(self.goals.len());
        let mut dropped = Vec::new();
        for goal in self.goals.drain(..) {
            match goal.revalidated(current_year) {
                Ok(fresh) => kept.push(fresh),
                Err(e) => {
                    warn!("dropping goal {} '{}': {}", goal.id, goal.name, e);
                    dropped.push((goal, e));
                }
            }
        }
        self.goals = kept;
        dropped
    }
}

impl From<Vec<LifeGoal>> for GoalBook {
    fn from(goals: Vec<LifeGoal>) -> Self {
        Self::from_goals(goals)
    }
}

impl From<GoalBook> for Vec<LifeGoal> {
    fn from(book: GoalBook) -> Self {
        book.goals
    }
}
