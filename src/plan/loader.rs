//! Plan persistence (JSON snapshots) and goal import from CSV

use chrono::{DateTime, Utc};
use csv::Reader;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::data::InvestmentPlan;
use crate::error::Result;
use crate::goals::GoalBook;

/// Saved planner state: the plan plus its goals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSnapshot {
    #[serde(flatten)]
    pub plan: InvestmentPlan,

    #[serde(default, alias = "lifeEvents")]
    pub goals: GoalBook,

    #[serde(default, alias = "exportDate")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl PlanSnapshot {
    pub fn new(plan: InvestmentPlan, goals: GoalBook) -> Self {
        Self {
            plan,
            goals,
            saved_at: None,
        }
    }

    /// Read a snapshot from JSON
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write the snapshot as pretty JSON, stamping the save time
    pub fn to_writer<W: Write>(&mut self, writer: W) -> Result<()> {
        self.saved_at = Some(Utc::now());
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Load a snapshot from a JSON file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<PlanSnapshot> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let snapshot = PlanSnapshot::from_reader(BufReader::new(file))?;
    info!(
        "loaded plan with {} goals from {}",
        snapshot.goals.len(),
        path.display()
    );
    Ok(snapshot)
}

/// Save a snapshot to a JSON file
pub fn save_snapshot<P: AsRef<Path>>(path: P, snapshot: &mut PlanSnapshot) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    snapshot.to_writer(&mut writer)?;
    writer.flush()?;
    info!("saved plan to {}", path.display());
    Ok(())
}

/// Raw CSV row: Name,TargetYear,Amount
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "TargetYear")]
    target_year: i32,
    #[serde(rename = "Amount")]
    amount: f64,
}

/// Load goals from a CSV file into a new book
pub fn load_goals_csv<P: AsRef<Path>>(path: P, current_year: i32) -> Result<GoalBook> {
    let file = File::open(path)?;
    load_goals_from_reader(file, current_year)
}

/// Load goals from any reader. Every row goes through the same checks as a
/// user submission; the first rejected row aborts the load.
pub fn load_goals_from_reader<R: Read>(reader: R, current_year: i32) -> Result<GoalBook> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut book = GoalBook::new();

    for (line, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        if let Err(e) = book.add(&row.name, row.target_year, row.amount, current_year) {
            warn!("goal row {} rejected: {}", line + 1, e);
            return Err(e);
        }
    }

    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    #[test]
    fn test_snapshot_persists_plan_and_goals() {
        let mut goals = GoalBook::new();
        goals.add("Home", 2033, 200_000_000.0, 2026).unwrap();
        goals.add("Wedding", 2029, 30_000_000.0, 2026).unwrap();
        let mut snapshot = PlanSnapshot::new(InvestmentPlan::new(1e6, 1e5, 7.0, 10.0), goals);

        let mut buffer = Vec::new();
        snapshot.to_writer(&mut buffer).unwrap();
        assert!(snapshot.saved_at.is_some());

        let restored = PlanSnapshot::from_reader(buffer.as_slice()).unwrap();
        assert_eq!(restored.plan, snapshot.plan);
        assert_eq!(restored.goals.goals(), snapshot.goals.goals());
    }

    #[test]
    fn test_legacy_export_format() {
        let json = r#"{
            "initialAmount": 1000000,
            "monthlyInvestment": 100000,
            "period": 10,
            "interestRate": 7,
            "lifeEvents": [
                {"id": 9, "name": "Home", "year": 2033, "amount": 200000000, "yearsFromNow": 7},
                {"id": 4, "name": "Wedding", "year": 2029, "amount": 30000000, "yearsFromNow": 3}
            ],
            "exportDate": "2026-01-05T10:00:00Z"
        }"#;

        let snapshot = PlanSnapshot::from_reader(json.as_bytes()).unwrap();
        assert_eq!(snapshot.plan.monthly_contribution, 100_000.0);
        assert_eq!(snapshot.plan.horizon_years, 10.0);
        assert_eq!(snapshot.goals.goals()[0].name, "Wedding");
        assert!(snapshot.saved_at.is_some());
    }

    #[test]
    fn test_load_goals_csv() {
        let data = "Name,TargetYear,Amount\nRetire,2056,1000000000\nCar,2028,30000000\n";
        let book = load_goals_from_reader(data.as_bytes(), 2026).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.goals()[0].name, "Car");
        assert_eq!(book.goals()[1].years_from_now, 30);
    }

    #[test]
    fn test_load_goals_csv_rejects_past_year() {
        let data = "Name,TargetYear,Amount\nOld,2020,100\n";
        let err = load_goals_from_reader(data.as_bytes(), 2026).unwrap_err();
        assert!(matches!(err, PlannerError::GoalRejected(_)));
    }

    #[test]
    fn test_load_goals_csv_bad_number() {
        let data = "Name,TargetYear,Amount\nCar,soon,100\n";
        assert!(matches!(
            load_goals_from_reader(data.as_bytes(), 2026),
            Err(PlannerError::Csv(_))
        ));
    }
}
