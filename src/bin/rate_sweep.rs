//! Project one plan across a range of annual rates
//!
//! Writes one CSV row per (rate, year) and prints the final value per rate.
//! Accepts config via environment variables:
//!   SWEEP_INITIAL, SWEEP_MONTHLY, SWEEP_YEARS, SWEEP_RATE_MIN, SWEEP_RATE_MAX,
//!   SWEEP_RATE_STEP, SWEEP_OUTPUT
//! plus the PLANNER_* variables read by PlannerConfig.

use anyhow::{bail, Context, Result};
use compound_planner::{
    report::format_amount, InvestmentPlan, PlannerConfig, ScenarioRunner,
};
use log::warn;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

/// Most rates a single sweep will project
const MAX_SWEEP_POINTS: usize = 10_000;

fn env_f64(key: &str, default: f64) -> f64 {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring {}={:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Rates from `rate_min` to `rate_max` inclusive in `rate_step` increments
fn sweep_rates(rate_min: f64, rate_max: f64, rate_step: f64) -> Result<Vec<f64>> {
    if rate_step.is_nan() || rate_step <= 0.0 || rate_max < rate_min {
        bail!("invalid rate range {}..={} step {}", rate_min, rate_max, rate_step);
    }

    let steps = ((rate_max - rate_min) / rate_step + 1e-9).floor();
    if !steps.is_finite() || steps >= MAX_SWEEP_POINTS as f64 {
        bail!(
            "rate range {}..={} step {} exceeds {} sweep points",
            rate_min,
            rate_max,
            rate_step,
            MAX_SWEEP_POINTS
        );
    }

    let steps = steps as usize;
    Ok((0..=steps).map(|i| rate_min + rate_step * i as f64).collect())
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let plan = InvestmentPlan::new(
        env_f64("SWEEP_INITIAL", 1_000_000.0),
        env_f64("SWEEP_MONTHLY", 100_000.0),
        0.0,
        env_f64("SWEEP_YEARS", 30.0),
    );
    let rate_min = env_f64("SWEEP_RATE_MIN", 1.0);
    let rate_max = env_f64("SWEEP_RATE_MAX", 12.0);
    let rate_step = env_f64("SWEEP_RATE_STEP", 0.5);
    let output_path = env::var("SWEEP_OUTPUT").unwrap_or_else(|_| "rate_sweep_output.csv".to_string());

    let rates = sweep_rates(rate_min, rate_max, rate_step)?;

    println!("Sweeping {} rates from {}% to {}%...", rates.len(), rate_min, rate_max);
    let runner = ScenarioRunner::new(PlannerConfig::from_env());
    let results = runner.rate_sweep(&plan, &rates)?;

    let file = File::create(&output_path)
        .with_context(|| format!("failed to create {}", output_path))?;
    let mut file = BufWriter::new(file);
    writeln!(file, "Rate,Year,Principal,TotalValue,Profit")?;
    for result in &results {
        for point in &result.series {
            writeln!(
                file,
                "{:.2},{},{:.2},{:.2},{:.2}",
                result.plan.annual_rate_percent,
                point.year_offset,
                point.principal_contributed,
                point.total_value,
                point.profit(),
            )?;
        }
    }
    file.flush()?;
    println!("Output written to {}", output_path);

    println!("\n{:>7} {:>22} {:>22}", "Rate", "Final value", "Profit");
    println!("{}", "-".repeat(53));
    for result in &results {
        println!(
            "{:>6.2}% {:>22} {:>22}",
            result.plan.annual_rate_percent,
            format_amount(result.summary.final_value),
            format_amount(result.summary.total_profit),
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
