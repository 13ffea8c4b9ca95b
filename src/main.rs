//! Project and freelancer cost model CLI
//!
//! Seeds the demo workspace, runs the calculation engine, and prints the
//! report tables. An `engagement` subcommand runs the single-engagement
//! freelancer-centric variant instead.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use fpa_model::engine::{assignment_rows, monthly_forecast, project_costs, totals};
use fpa_model::model::ModelStore;
use fpa_model::report;
use fpa_model::Engagement;

#[derive(Parser)]
#[command(name = "fpa-model", about = "Project and freelancer cost model", version)]
struct Cli {
    /// Forecast horizon in months
    #[arg(long)]
    months: Option<u32>,

    /// Monthly overhead amount
    #[arg(long)]
    overhead: Option<f64>,

    /// Anchor forecast months to a calendar start (YYYY-MM)
    #[arg(long)]
    start: Option<String>,

    /// Write the forecast series to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the portfolio totals as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the single-engagement freelancer-centric model
    Engagement {
        /// Total client budget
        #[arg(long, default_value_t = 50_000.0)]
        budget: f64,

        /// Expected duration in months
        #[arg(long, default_value_t = 4)]
        duration: u32,

        /// Fixed internal costs over the engagement
        #[arg(long, default_value_t = 6_000.0)]
        internal: f64,

        /// Overhead as a percentage of budget
        #[arg(long, default_value_t = 10.0)]
        overhead_pct: f64,

        /// Staffed freelancer as NAME:RATE:HOURS_PER_WEEK:WEEKS (repeatable)
        #[arg(long = "freelancer")]
        freelancers: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Engagement {
            budget,
            duration,
            internal,
            overhead_pct,
            freelancers,
        }) => run_engagement(budget, duration, internal, overhead_pct, &freelancers),
        None => run_portfolio(&cli),
    }
}

fn run_portfolio(cli: &Cli) -> Result<()> {
    let mut store = ModelStore::with_sample_data();
    if let Some(months) = cli.months {
        store.settings_mut().forecast_months = months;
    }
    if let Some(overhead) = cli.overhead {
        store.settings_mut().monthly_overhead = overhead;
    }
    let start = cli.start.as_deref().map(parse_start_month).transpose()?;

    let costed = project_costs(store.projects(), store.freelancers(), store.assignments());
    let series = monthly_forecast(&costed, store.settings());
    let portfolio_totals = totals(&costed, store.settings());

    println!("FP&A Project and Freelancer Cost Model");
    println!("======================================\n");

    println!("Quick Stats:");
    print!("{}", report::render_totals(&portfolio_totals));
    println!();

    println!("Projects:");
    print!("{}", report::render_projects(&costed));
    println!();

    println!("Freelancers:");
    print!("{}", report::render_freelancers(store.freelancers()));
    println!();

    println!("Project Assignments:");
    let rows = assignment_rows(store.projects(), store.freelancers(), store.assignments());
    print!("{}", report::render_assignments(&rows));
    println!();

    println!("Financial Projections ({} months):", store.settings().forecast_months);
    print!("{}", report::render_forecast(&series, start));

    if let Some(path) = &cli.csv {
        report::write_forecast_csv(path, &series, start)
            .with_context(|| format!("failed to write forecast CSV to {}", path.display()))?;
        println!("\nForecast written to: {}", path.display());
    }

    if cli.json {
        println!("\n{}", serde_json::to_string_pretty(&portfolio_totals)?);
    }

    Ok(())
}

fn run_engagement(
    budget: f64,
    duration: u32,
    internal: f64,
    overhead_pct: f64,
    freelancer_specs: &[String],
) -> Result<()> {
    let mut engagement = Engagement {
        client_budget: budget,
        expected_duration_months: duration,
        internal_costs: internal,
        overhead_percentage: overhead_pct,
        freelancers: Vec::new(),
    };

    if freelancer_specs.is_empty() {
        engagement.add_freelancer("Designer", 75.0, 20.0, 4.0);
        engagement.add_freelancer("Developer", 90.0, 30.0, 8.0);
    } else {
        for spec in freelancer_specs {
            let (name, rate, hours, weeks) = parse_freelancer_spec(spec)?;
            engagement.add_freelancer(name, rate, hours, weeks);
        }
    }

    let summary = engagement.summary();

    println!("Engagement Model");
    println!("================\n");

    println!("Budget: {}  Duration: {} months", report::format_money(budget), duration);
    println!();

    println!("Summary:");
    println!("  Freelancer Cost: {}", report::format_money(summary.total_freelancer_cost));
    println!("  Internal Costs:  {}", report::format_money(engagement.internal_costs));
    println!("  Overhead Cost:   {}", report::format_money(summary.overhead_cost));
    println!("  Total Cost:      {}", report::format_money(summary.total_cost));
    println!("  Gross Profit:    {}", report::format_money(summary.gross_profit));
    println!("  Margin:          {}", report::format_margin(summary.margin));
    println!();

    println!("Monthly Breakdown:");
    print!("{}", report::render_engagement_months(&engagement.monthly_breakdown()));
    println!();

    println!("Cost Breakdown:");
    for (i, slice) in engagement.cost_breakdown().iter().enumerate() {
        println!(
            "  {:<16} {:>12}  [{}]",
            slice.label,
            report::format_money(slice.value),
            report::series_color(i)
        );
    }
    println!();

    println!("Per-Freelancer Costs:");
    for (i, slice) in engagement.freelancer_breakdown().iter().enumerate() {
        println!(
            "  {:<16} {:>12}  [{}]",
            slice.label,
            report::format_money(slice.value),
            report::series_color(i)
        );
    }

    Ok(())
}

/// Parse a YYYY-MM argument into the first day of that month
fn parse_start_month(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
        .with_context(|| format!("invalid --start value {:?}, expected YYYY-MM", value))
}

/// Parse a NAME:RATE:HOURS_PER_WEEK:WEEKS freelancer spec
fn parse_freelancer_spec(spec: &str) -> Result<(String, f64, f64, f64)> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() != 4 {
        bail!("invalid --freelancer value {:?}, expected NAME:RATE:HOURS_PER_WEEK:WEEKS", spec);
    }
    let parse = |field: &str, value: &str| -> Result<f64> {
        value
            .parse()
            .with_context(|| format!("invalid {} in --freelancer value {:?}", field, spec))
    };
    Ok((
        parts[0].to_string(),
        parse("rate", parts[1])?,
        parse("hours", parts[2])?,
        parse("weeks", parts[3])?,
    ))
}
