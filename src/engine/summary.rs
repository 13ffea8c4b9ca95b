//! Aggregate totals across the costed portfolio

use serde::{Deserialize, Serialize};

use super::costs::ProjectCosts;
use crate::model::ModelSettings;

/// Portfolio-level totals over the forecast horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelTotals {
    /// Sum of all project revenue
    pub total_revenue: f64,

    /// Sum of all freelancer costs plus overhead for the whole horizon
    pub total_costs: f64,

    /// Revenue minus costs
    pub total_profit: f64,

    /// Profit as a percentage of revenue; exactly 0.0 when there is no
    /// revenue (guarded, unlike the per-project margin which is `None`)
    pub overall_margin: f64,
}

/// Compute portfolio totals from the costed projects and settings
pub fn totals(costed: &[ProjectCosts], settings: &ModelSettings) -> ModelTotals {
    let total_revenue: f64 = costed.iter().map(|p| p.revenue).sum();
    let freelancer_costs: f64 = costed.iter().map(|p| p.freelancer_cost).sum();
    let total_costs = freelancer_costs + settings.monthly_overhead * f64::from(settings.forecast_months);
    let total_profit = total_revenue - total_costs;
    let overall_margin = if total_revenue > 0.0 {
        total_profit / total_revenue * 100.0
    } else {
        0.0
    };

    ModelTotals {
        total_revenue,
        total_costs,
        total_profit,
        overall_margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn costed(revenue: f64, freelancer_cost: f64) -> ProjectCosts {
        ProjectCosts {
            id: 1,
            name: "P".to_string(),
            revenue,
            timeline_months: 1,
            freelancer_cost,
            profit: revenue - freelancer_cost,
            margin: None,
        }
    }

    #[test]
    fn test_totals_sum_projects_and_overhead() {
        let costed = vec![costed(12_000.0, 3_000.0), costed(8_500.0, 4_200.0)];
        let settings = ModelSettings {
            monthly_overhead: 5_000.0,
            forecast_months: 6,
        };

        let t = totals(&costed, &settings);
        assert_relative_eq!(t.total_revenue, 20_500.0);
        assert_relative_eq!(t.total_costs, 3_000.0 + 4_200.0 + 30_000.0);
        assert_relative_eq!(t.total_profit, t.total_revenue - t.total_costs);
    }

    #[test]
    fn test_overall_margin_guarded_at_zero_revenue() {
        let costed = vec![costed(0.0, 1_000.0)];
        let settings = ModelSettings {
            monthly_overhead: 500.0,
            forecast_months: 2,
        };

        let t = totals(&costed, &settings);
        assert_eq!(t.overall_margin, 0.0);
        assert!(t.overall_margin.is_finite());
    }

    #[test]
    fn test_empty_portfolio_still_charges_overhead() {
        let settings = ModelSettings {
            monthly_overhead: 5_000.0,
            forecast_months: 3,
        };

        let t = totals(&[], &settings);
        assert_relative_eq!(t.total_revenue, 0.0);
        assert_relative_eq!(t.total_costs, 15_000.0);
        assert_relative_eq!(t.total_profit, -15_000.0);
        assert_eq!(t.overall_margin, 0.0);
    }
}
