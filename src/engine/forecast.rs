//! Monthly forecast distribution
//!
//! Revenue and labor cost are spread evenly over each project's timeline
//! (straight-line recognition, the deliberate projection policy; no S-curve
//! or front/back loading). Overhead lands in every forecast month whether or
//! not any project is active.

use serde::{Deserialize, Serialize};

use super::costs::ProjectCosts;
use crate::model::ModelSettings;

/// One month of the forecast series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRow {
    /// Forecast month, 1-indexed
    pub month: u32,

    /// Distributed revenue from all projects active this month
    pub revenue: f64,

    /// Distributed labor cost plus monthly overhead
    pub costs: f64,

    /// Revenue minus costs
    pub profit: f64,
}

/// Project the costed portfolio over the forecast horizon
///
/// A project is active for the first `timeline_months` months of the
/// horizon. Timelines longer than the horizon are truncated at the horizon;
/// shorter ones contribute nothing in later months. A zero timeline would
/// make the per-month share undefined, so those projects are skipped.
pub fn monthly_forecast(costed: &[ProjectCosts], settings: &ModelSettings) -> Vec<MonthRow> {
    let mut series = Vec::with_capacity(settings.forecast_months as usize);

    for month in 1..=settings.forecast_months {
        let mut revenue = 0.0;
        let mut labor_cost = 0.0;

        for project in costed {
            if project.timeline_months >= month && project.timeline_months > 0 {
                let timeline = f64::from(project.timeline_months);
                revenue += project.revenue / timeline;
                labor_cost += project.freelancer_cost / timeline;
            }
        }

        let costs = labor_cost + settings.monthly_overhead;
        series.push(MonthRow {
            month,
            revenue,
            costs,
            profit: revenue - costs,
        });
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn costed(revenue: f64, timeline_months: u32, freelancer_cost: f64) -> ProjectCosts {
        let profit = revenue - freelancer_cost;
        ProjectCosts {
            id: 1,
            name: "P".to_string(),
            revenue,
            timeline_months,
            freelancer_cost,
            profit,
            margin: if revenue > 0.0 { Some(profit / revenue * 100.0) } else { None },
        }
    }

    fn settings(monthly_overhead: f64, forecast_months: u32) -> ModelSettings {
        ModelSettings {
            monthly_overhead,
            forecast_months,
        }
    }

    #[test]
    fn test_two_month_scenario() {
        // revenue 12000 over 2 months, no assignments, overhead 5000:
        // each month shows revenue 6000, cost 5000, profit 1000
        let series = monthly_forecast(&[costed(12_000.0, 2, 0.0)], &settings(5_000.0, 2));

        assert_eq!(series.len(), 2);
        for row in &series {
            assert_relative_eq!(row.revenue, 6_000.0);
            assert_relative_eq!(row.costs, 5_000.0);
            assert_relative_eq!(row.profit, 1_000.0);
        }
    }

    #[test]
    fn test_distribution_is_revenue_preserving() {
        let project = costed(8_500.0, 3, 4_200.0);
        let series = monthly_forecast(&[project.clone()], &settings(0.0, 6));

        let total_revenue: f64 = series.iter().map(|r| r.revenue).sum();
        let total_cost: f64 = series.iter().map(|r| r.costs).sum();
        assert_relative_eq!(total_revenue, project.revenue, epsilon = 1e-9);
        assert_relative_eq!(total_cost, project.freelancer_cost, epsilon = 1e-9);
    }

    #[test]
    fn test_horizon_truncates_long_timeline() {
        // 12-month timeline, 3-month horizon: only 3 months of contribution
        let series = monthly_forecast(&[costed(12_000.0, 12, 0.0)], &settings(0.0, 3));

        assert_eq!(series.len(), 3);
        let total: f64 = series.iter().map(|r| r.revenue).sum();
        assert_relative_eq!(total, 3_000.0);
    }

    #[test]
    fn test_inactive_months_carry_overhead_only() {
        let series = monthly_forecast(&[costed(12_000.0, 2, 6_000.0)], &settings(1_000.0, 4));

        assert_relative_eq!(series[1].revenue, 6_000.0);
        assert_relative_eq!(series[1].costs, 4_000.0);

        // Months past the timeline: overhead only
        assert_relative_eq!(series[2].revenue, 0.0);
        assert_relative_eq!(series[2].costs, 1_000.0);
        assert_relative_eq!(series[2].profit, -1_000.0);
        assert_relative_eq!(series[3].costs, 1_000.0);
    }

    #[test]
    fn test_zero_timeline_is_skipped() {
        let series = monthly_forecast(&[costed(12_000.0, 0, 6_000.0)], &settings(0.0, 2));
        for row in &series {
            assert_eq!(row.revenue, 0.0);
            assert_eq!(row.costs, 0.0);
            assert!(row.profit.is_finite());
        }
    }

    #[test]
    fn test_zero_horizon_is_empty() {
        let series = monthly_forecast(&[costed(12_000.0, 2, 0.0)], &settings(5_000.0, 0));
        assert!(series.is_empty());
    }

    #[test]
    fn test_months_are_one_indexed() {
        let series = monthly_forecast(&[], &settings(0.0, 3));
        let months: Vec<u32> = series.iter().map(|r| r.month).collect();
        assert_eq!(months, vec![1, 2, 3]);
    }
}
