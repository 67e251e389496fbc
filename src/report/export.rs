//! CSV / JSON writers and amount formatting

use csv::Writer;
use std::io::Write;

use super::ReportData;
use crate::error::Result;
use crate::goals::GoalCheckpoint;
use crate::projection::ProjectionPoint;

/// Write a projection series as `Year,Principal,TotalValue,Profit`
pub fn write_series_csv<W: Write>(writer: W, series: &[ProjectionPoint]) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Year", "Principal", "TotalValue", "Profit"])?;

    for point in series {
        csv.write_record([
            point.year_offset.to_string(),
            format!("{:.2}", point.principal_contributed),
            format!("{:.2}", point.total_value),
            format!("{:.2}", point.profit()),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the per-goal timeline as CSV
pub fn write_timeline_csv<W: Write>(writer: W, timeline: &[GoalCheckpoint]) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record([
        "GoalId",
        "Name",
        "TargetYear",
        "Amount",
        "ProjectedAssets",
        "Affordable",
        "Shortage",
    ])?;

    for cp in timeline {
        csv.write_record([
            cp.goal_id.to_string(),
            cp.name.clone(),
            cp.target_year.to_string(),
            format!("{:.2}", cp.amount),
            format!("{:.2}", cp.projected_assets),
            cp.affordable.to_string(),
            format!("{:.2}", cp.shortage),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the whole report as pretty JSON
pub fn write_report_json<W: Write>(writer: W, report: &ReportData) -> Result<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Round to a whole unit and group thousands: 19318142.12 -> "19,318,142"
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
