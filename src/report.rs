//! Terminal report rendering and CSV export
//!
//! Presentation collaborator for the engine: aligned text tables, display
//! formatting (including the placeholder for undefined margins), calendar
//! month labels, chart palette selection, and the forecast CSV export.

use std::path::Path;

use chrono::{Datelike, Months, NaiveDate};
use log::warn;

use crate::engagement::EngagementMonth;
use crate::engine::{AssignmentRow, ModelTotals, MonthRow, ProjectCosts};
use crate::model::Freelancer;

/// Chart series palette, cycled by index
const PALETTE: [&str; 6] = [
    "#8884d8", "#ff7300", "#82ca9d", "#ffc658", "#d884c9", "#6aa9e9",
];

/// Color for a chart series, wrapping around the palette
pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Format a monetary amount: dollar sign, thousands separators, two decimals
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

/// Format a margin to one decimal place, or the placeholder when undefined
pub fn format_margin(margin: Option<f64>) -> String {
    match margin {
        Some(m) => format!("{:.1}%", m),
        None => "--".to_string(),
    }
}

/// Label for a forecast month: "Month 3", or "Nov 2026" when anchored to a
/// calendar start date
pub fn month_label(month: u32, start: Option<NaiveDate>) -> String {
    match start.and_then(|d| d.checked_add_months(Months::new(month - 1))) {
        Some(date) => format!("{} {}", month_abbrev(date.month()), date.year()),
        None => format!("Month {}", month),
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan", 2 => "Feb", 3 => "Mar", 4 => "Apr", 5 => "May", 6 => "Jun",
        7 => "Jul", 8 => "Aug", 9 => "Sep", 10 => "Oct", 11 => "Nov",
        _ => "Dec",
    }
}

/// Render the project table with cost, profit, and margin columns
pub fn render_projects(costed: &[ProjectCosts]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<22} {:>8} {:>14} {:>16} {:>12} {:>8}\n",
        "Project", "Timeline", "Revenue", "Freelancer Cost", "Profit", "Margin"
    ));
    out.push_str(&format!("{}\n", "-".repeat(86)));
    for p in costed {
        out.push_str(&format!(
            "{:<22} {:>6}mo {:>14} {:>16} {:>12} {:>8}\n",
            p.name,
            p.timeline_months,
            format_money(p.revenue),
            format_money(p.freelancer_cost),
            format_money(p.profit),
            format_margin(p.margin),
        ));
    }
    out
}

/// Render the freelancer table with the derived weekly cost column
pub fn render_freelancers(freelancers: &[Freelancer]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<22} {:>12} {:>12} {:>14}\n",
        "Name", "Hourly Rate", "Hours/Week", "Weekly Cost"
    ));
    out.push_str(&format!("{}\n", "-".repeat(64)));
    for f in freelancers {
        out.push_str(&format!(
            "{:<22} {:>12} {:>12.1} {:>14}\n",
            f.name,
            format_money(f.hourly_rate),
            f.hours_per_week,
            format_money(f.weekly_cost()),
        ));
    }
    out
}

/// Render the assignment table, showing "Unknown" for orphaned references
pub fn render_assignments(rows: &[AssignmentRow]) -> String {
    let orphans = rows
        .iter()
        .filter(|r| r.project_name.is_none() || r.freelancer_name.is_none())
        .count();
    if orphans > 0 {
        warn!("{} assignment(s) reference missing projects or freelancers", orphans);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<22} {:<22} {:>8} {:>14}\n",
        "Project", "Freelancer", "Weeks", "Total Cost"
    ));
    out.push_str(&format!("{}\n", "-".repeat(70)));
    for r in rows {
        out.push_str(&format!(
            "{:<22} {:<22} {:>8.1} {:>14}\n",
            r.project_name.as_deref().unwrap_or("Unknown"),
            r.freelancer_name.as_deref().unwrap_or("Unknown"),
            r.weeks_assigned,
            format_money(r.cost),
        ));
    }
    out
}

/// Render the monthly forecast series
pub fn render_forecast(series: &[MonthRow], start: Option<NaiveDate>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:>14} {:>14} {:>14}\n",
        "Month", "Revenue", "Costs", "Profit"
    ));
    out.push_str(&format!("{}\n", "-".repeat(56)));
    for row in series {
        out.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14}\n",
            month_label(row.month, start),
            format_money(row.revenue),
            format_money(row.costs),
            format_money(row.profit),
        ));
    }
    out
}

/// Render the quick-stats summary block
pub fn render_totals(totals: &ModelTotals) -> String {
    let mut out = String::new();
    out.push_str(&format!("  Total Revenue:  {}\n", format_money(totals.total_revenue)));
    out.push_str(&format!("  Total Costs:    {}\n", format_money(totals.total_costs)));
    out.push_str(&format!("  Total Profit:   {}\n", format_money(totals.total_profit)));
    out.push_str(&format!("  Overall Margin: {:.1}%\n", totals.overall_margin));
    out
}

/// Render the flat engagement breakdown
pub fn render_engagement_months(months: &[EngagementMonth]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:>12} {:>12} {:>12} {:>12} {:>12} {:>8}\n",
        "Month", "Revenue", "Freelancers", "Internal", "Overhead", "Profit", "Margin"
    ));
    out.push_str(&format!("{}\n", "-".repeat(84)));
    for m in months {
        out.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12} {:>12} {:>12} {:>8}\n",
            month_label(m.month, None),
            format_money(m.revenue),
            format_money(m.freelancer_cost),
            format_money(m.internal_cost),
            format_money(m.overhead_cost),
            format_money(m.profit),
            format_margin(m.margin),
        ));
    }
    out
}

/// Write the forecast series to a CSV file
pub fn write_forecast_csv<P: AsRef<Path>>(
    path: P,
    series: &[MonthRow],
    start: Option<NaiveDate>,
) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Month", "Revenue", "Costs", "Profit"])?;
    for row in series {
        writer.write_record([
            month_label(row.month, start),
            format!("{:.2}", row.revenue),
            format!("{:.2}", row.costs),
            format!("{:.2}", row.profit),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
