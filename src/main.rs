//! Compound Planner CLI
//!
//! Command-line front end for projections, goal analysis and report export

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::{Args, Parser, Subcommand};
use compound_planner::{
    goals::{goal_timeline, recommend_strategy},
    plan::{load_goals_csv, load_snapshot, save_snapshot},
    projection::{implied_annual_rate, summarize},
    report::{format_amount, write_report_json, write_series_csv, write_timeline_csv},
    analyze_goals, build_series, GoalBook, InvestmentPlan, PlanSnapshot, PlannerConfig,
    Recommendation, ReportData,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compound_planner", version, about = "Compound-interest projections and life-goal planning")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project the plan to its horizon and print the summary
    Project(PlanArgs),

    /// Print or export the year-by-year series
    Series {
        #[command(flatten)]
        plan: PlanArgs,
        /// Sampling step in years (defaults to PLANNER_SERIES_STEP or 1)
        #[arg(long)]
        step: Option<u32>,
        /// Write CSV here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Check goals against the plan and recommend a contribution
    Goals {
        #[command(flatten)]
        plan: PlanArgs,
        #[command(flatten)]
        goals: GoalArgs,
        /// Write the per-goal timeline as CSV
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Export the full report as JSON
    Report {
        #[command(flatten)]
        plan: PlanArgs,
        #[command(flatten)]
        goals: GoalArgs,
        #[arg(long, default_value = "planning_report.json")]
        output: PathBuf,
    },

    /// Save the plan and goals as a JSON snapshot
    Save {
        #[command(flatten)]
        plan: PlanArgs,
        #[command(flatten)]
        goals: GoalArgs,
        #[arg(long, default_value = "financial_plan.json")]
        output: PathBuf,
    },
}

#[derive(Args)]
struct PlanArgs {
    /// Lump sum invested today
    #[arg(long, default_value_t = 1_000_000.0)]
    initial: f64,
    /// Contribution at the end of each month
    #[arg(long, default_value_t = 100_000.0)]
    monthly: f64,
    /// Annual rate in percent
    #[arg(long, default_value_t = 7.0)]
    rate: f64,
    /// Horizon in years
    #[arg(long, default_value_t = 10.0)]
    years: f64,
    /// Load plan (and goals) from a saved snapshot instead of the flags above
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Args)]
struct GoalArgs {
    /// CSV file with Name,TargetYear,Amount columns
    #[arg(long)]
    goals: Option<PathBuf>,
    /// Use the built-in sample goals
    #[arg(long)]
    samples: bool,
}

/// Resolve plan and goals from snapshot, CSV or samples
fn load_inputs(
    plan_args: &PlanArgs,
    goal_args: Option<&GoalArgs>,
    current_year: i32,
) -> Result<(InvestmentPlan, GoalBook)> {
    let (plan, mut goals) = match &plan_args.snapshot {
        Some(path) => {
            let mut snapshot = load_snapshot(path)
                .with_context(|| format!("failed to load snapshot {}", path.display()))?;
            for (goal, reason) in snapshot.goals.revalidate(current_year) {
                eprintln!("Skipping saved goal '{}': {}", goal.name, reason);
            }
            (snapshot.plan, snapshot.goals)
        }
        None => (
            InvestmentPlan::new(
                plan_args.initial,
                plan_args.monthly,
                plan_args.rate,
                plan_args.years,
            ),
            GoalBook::new(),
        ),
    };

    if let Some(args) = goal_args {
        if let Some(path) = &args.goals {
            goals = load_goals_csv(path, current_year)
                .with_context(|| format!("failed to load goals from {}", path.display()))?;
        } else if args.samples {
            goals = GoalBook::with_samples(current_year);
        }
    }

    plan.validate().context("invalid plan")?;
    Ok((plan, goals))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = PlannerConfig::from_env();
    let current_year = Local::now().year();

    match cli.command {
        Command::Project(args) => {
            let (plan, _) = load_inputs(&args, None, current_year)?;
            print_summary(&plan)?;
        }
        Command::Series { plan, step, output } => {
            let (plan, _) = load_inputs(&plan, None, current_year)?;
            let series = build_series(&plan, step.unwrap_or(config.series_step_years))?;
            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("unable to create {}", path.display()))?;
                    write_series_csv(BufWriter::new(file), &series)?;
                    println!("Series written to: {}", path.display());
                }
                None => write_series_csv(io::stdout().lock(), &series)?,
            }
        }
        Command::Goals { plan, goals, output } => {
            let (plan, goals) = load_inputs(&plan, Some(&goals), current_year)?;
            print_goals(&plan, &goals, &config)?;
            if let Some(path) = output {
                let file = File::create(&path)
                    .with_context(|| format!("unable to create {}", path.display()))?;
                write_timeline_csv(BufWriter::new(file), &goal_timeline(&plan, goals.goals())?)?;
                println!("\nTimeline written to: {}", path.display());
            }
        }
        Command::Report { plan, goals, output } => {
            let (plan, goals) = load_inputs(&plan, Some(&goals), current_year)?;
            let report =
                ReportData::collect(&plan, goals.goals(), &config, Local::now().date_naive())?;
            let file = File::create(&output)
                .with_context(|| format!("unable to create {}", output.display()))?;
            let mut writer = BufWriter::new(file);
            write_report_json(&mut writer, &report)?;
            writer.flush()?;
            println!("Report written to: {}", output.display());
        }
        Command::Save { plan, goals, output } => {
            let (plan, goals) = load_inputs(&plan, Some(&goals), current_year)?;
            let mut snapshot = PlanSnapshot::new(plan, goals);
            save_snapshot(&output, &mut snapshot)
                .with_context(|| format!("failed to save {}", output.display()))?;
            println!("Plan saved to: {}", output.display());
        }
    }

    Ok(())
}

fn print_summary(plan: &InvestmentPlan) -> Result<()> {
    let summary = summarize(plan)?;

    println!("Projection ({} months at {}%):", summary.horizon_months, plan.annual_rate_percent);
    println!("  Total contributed: {:>20}", format_amount(summary.total_contributed));
    println!("  Total profit:      {:>20}", format_amount(summary.total_profit));
    println!("  Final value:       {:>20}", format_amount(summary.final_value));

    if let (Some(rule), Some(exact)) =
        (summary.doubling_years_rule_of_72, summary.doubling_years_exact)
    {
        println!(
            "\nMoney doubles in about {:.1} years (rule of 72), {:.1} years exactly.",
            rule, exact
        );
    }
    Ok(())
}

fn print_goals(plan: &InvestmentPlan, goals: &GoalBook, config: &PlannerConfig) -> Result<()> {
    if goals.is_empty() {
        println!("No goals registered. Use --goals <csv> or --samples.");
        return Ok(());
    }

    println!("{:>6} {:<24} {:>18} {:>18} {:>18}", "Year", "Goal", "Needed", "Projected", "Shortage");
    println!("{}", "-".repeat(88));
    for cp in goal_timeline(plan, goals.goals())? {
        println!(
            "{:>6} {:<24} {:>18} {:>18} {:>18}",
            cp.target_year,
            cp.name,
            format_amount(cp.amount),
            format_amount(cp.projected_assets),
            if cp.affordable { "-".to_string() } else { format_amount(cp.shortage) },
        );
    }

    let analysis = analyze_goals(plan, goals.goals())?;
    println!("\nAll goals by year +{}:", analysis.horizon_years);
    println!("  Total needed:    {:>20}", format_amount(analysis.total_goal_amount));
    println!("  Projected:       {:>20}", format_amount(analysis.projected_assets_at_horizon));
    println!("  Shortfall:       {:>20}", format_amount(analysis.shortfall));

    match recommend_strategy(plan, goals.goals(), config)? {
        Some(Recommendation::IncreaseMonthly {
            recommended_monthly,
            ..
        }) => {
            println!(
                "\nRaise the monthly contribution to {} to reach every goal.",
                format_amount(recommended_monthly)
            );
            let horizon = analysis.horizon_years as f64;
            if let Some(rate) = implied_annual_rate(plan, analysis.total_goal_amount, horizon)? {
                println!("Alternatively, an annual rate of {:.2}% at the current contribution.", rate);
            }
        }
        Some(Recommendation::Achievable) => {
            println!("\nThe current plan covers every goal.")
        }
        None => {}
    }
    Ok(())
}
