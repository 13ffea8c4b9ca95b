//! Freelancer-centric single-engagement model
//!
//! The second calculation variant: one client engagement with a flat list of
//! freelancers (each carrying its own weeks of effort, no assignment layer),
//! a fixed budget and duration, internal costs, and overhead expressed as a
//! percentage of budget.

use serde::{Deserialize, Serialize};

/// A freelancer staffed on the engagement, weeks of effort included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementFreelancer {
    pub id: u32,
    pub name: String,
    pub hourly_rate: f64,
    pub hours_per_week: f64,
    pub weeks: f64,
}

impl EngagementFreelancer {
    /// Total labor cost of this freelancer over the engagement
    pub fn cost(&self) -> f64 {
        self.hourly_rate * self.hours_per_week * self.weeks
    }
}

/// A single client engagement with its cost structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engagement {
    /// Total budget agreed with the client
    pub client_budget: f64,

    /// Expected duration in months; zero yields an empty monthly breakdown
    pub expected_duration_months: u32,

    /// Fixed internal costs over the whole engagement
    pub internal_costs: f64,

    /// Overhead as a percentage of client budget
    pub overhead_percentage: f64,

    /// Staffed freelancers
    pub freelancers: Vec<EngagementFreelancer>,
}

impl Default for Engagement {
    fn default() -> Self {
        Self {
            client_budget: 0.0,
            expected_duration_months: 1,
            internal_costs: 0.0,
            overhead_percentage: 0.0,
            freelancers: Vec::new(),
        }
    }
}

/// Derived cost and profitability figures for an engagement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementSummary {
    pub total_freelancer_cost: f64,
    pub overhead_cost: f64,
    pub total_cost: f64,
    pub gross_profit: f64,

    /// Gross profit as a percentage of budget; `None` when the budget is
    /// zero (undefined, rendered as a placeholder)
    pub margin: Option<f64>,
}

/// One month of the flat engagement breakdown
///
/// Straight-line: every month carries an identical share of each cost
/// category, so all rows in a breakdown are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementMonth {
    /// Month within the engagement, 1-indexed
    pub month: u32,
    pub revenue: f64,
    pub freelancer_cost: f64,
    pub internal_cost: f64,
    pub overhead_cost: f64,
    pub profit: f64,
    pub margin: Option<f64>,
}

/// A labeled value for chart series (pie slices, bar segments)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownSlice {
    pub label: String,
    pub value: f64,
}

impl Engagement {
    /// Add a freelancer, allocating the next free identifier
    pub fn add_freelancer(
        &mut self,
        name: impl Into<String>,
        hourly_rate: f64,
        hours_per_week: f64,
        weeks: f64,
    ) -> &EngagementFreelancer {
        let id = self.freelancers.iter().map(|f| f.id).max().map_or(1, |max| max + 1);
        self.freelancers.push(EngagementFreelancer {
            id,
            name: name.into(),
            hourly_rate,
            hours_per_week,
            weeks,
        });
        self.freelancers.last().unwrap()
    }

    /// Remove a freelancer by id; returns whether one was removed
    pub fn remove_freelancer(&mut self, id: u32) -> bool {
        let before = self.freelancers.len();
        self.freelancers.retain(|f| f.id != id);
        self.freelancers.len() < before
    }

    /// Sum of all staffed freelancers' labor cost
    pub fn total_freelancer_cost(&self) -> f64 {
        self.freelancers.iter().map(|f| f.cost()).sum()
    }

    /// Overhead charged against the budget
    pub fn overhead_cost(&self) -> f64 {
        self.client_budget * self.overhead_percentage / 100.0
    }

    /// Derive the engagement's cost and profitability figures
    pub fn summary(&self) -> EngagementSummary {
        let total_freelancer_cost = self.total_freelancer_cost();
        let overhead_cost = self.overhead_cost();
        let total_cost = total_freelancer_cost + self.internal_costs + overhead_cost;
        let gross_profit = self.client_budget - total_cost;
        let margin = if self.client_budget > 0.0 {
            Some(gross_profit / self.client_budget * 100.0)
        } else {
            None
        };

        EngagementSummary {
            total_freelancer_cost,
            overhead_cost,
            total_cost,
            gross_profit,
            margin,
        }
    }

    /// Flat monthly breakdown: each cost category divided evenly by the
    /// expected duration, repeated for every month. Empty at zero duration.
    pub fn monthly_breakdown(&self) -> Vec<EngagementMonth> {
        if self.expected_duration_months == 0 {
            return Vec::new();
        }

        let duration = f64::from(self.expected_duration_months);
        let revenue = self.client_budget / duration;
        let freelancer_cost = self.total_freelancer_cost() / duration;
        let internal_cost = self.internal_costs / duration;
        let overhead_cost = self.overhead_cost() / duration;
        let profit = revenue - freelancer_cost - internal_cost - overhead_cost;
        let margin = if revenue > 0.0 {
            Some(profit / revenue * 100.0)
        } else {
            None
        };

        (1..=self.expected_duration_months)
            .map(|month| EngagementMonth {
                month,
                revenue,
                freelancer_cost,
                internal_cost,
                overhead_cost,
                profit,
                margin,
            })
            .collect()
    }

    /// Cost categories as labeled values for a chart collaborator
    pub fn cost_breakdown(&self) -> Vec<BreakdownSlice> {
        vec![
            BreakdownSlice {
                label: "Freelancers".to_string(),
                value: self.total_freelancer_cost(),
            },
            BreakdownSlice {
                label: "Internal costs".to_string(),
                value: self.internal_costs,
            },
            BreakdownSlice {
                label: "Overhead".to_string(),
                value: self.overhead_cost(),
            },
        ]
    }

    /// Per-freelancer labor costs as labeled values for a chart collaborator
    pub fn freelancer_breakdown(&self) -> Vec<BreakdownSlice> {
        self.freelancers
            .iter()
            .map(|f| BreakdownSlice {
                label: f.name.clone(),
                value: f.cost(),
            })
            .collect()
    }
}
