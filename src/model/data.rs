//! Entity records for the project/freelancer cost model

use serde::{Deserialize, Serialize};

/// A client project with revenue recognized over a fixed timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier within the store
    pub id: u32,

    /// Display name
    pub name: String,

    /// Total contracted revenue for the project
    pub revenue: f64,

    /// Number of months over which revenue and cost are recognized.
    /// A zero timeline makes the per-month distribution undefined and
    /// must be guarded by the engine.
    pub timeline_months: u32,
}

impl Project {
    pub fn new(id: u32, name: impl Into<String>, revenue: f64, timeline_months: u32) -> Self {
        Self {
            id,
            name: name.into(),
            revenue,
            timeline_months,
        }
    }
}

/// A freelancer with an hourly rate and a standing weekly commitment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Freelancer {
    /// Unique freelancer identifier within the store
    pub id: u32,

    /// Display name
    pub name: String,

    /// Billing rate per hour
    pub hourly_rate: f64,

    /// Hours worked per assigned week
    pub hours_per_week: f64,
}

impl Freelancer {
    pub fn new(id: u32, name: impl Into<String>, hourly_rate: f64, hours_per_week: f64) -> Self {
        Self {
            id,
            name: name.into(),
            hourly_rate,
            hours_per_week,
        }
    }

    /// Cost of one week of this freelancer's time
    pub fn weekly_cost(&self) -> f64 {
        self.hourly_rate * self.hours_per_week
    }
}

/// Many-to-many link between a project and a freelancer
///
/// Carries the weeks of effort specific to that pairing. References are by
/// id and may be orphaned (the referenced entity removed or never created);
/// orphaned assignments contribute zero cost rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub project_id: u32,
    pub freelancer_id: u32,

    /// Weeks of effort the freelancer spends on this project
    pub weeks_assigned: f64,
}

impl Assignment {
    pub fn new(project_id: u32, freelancer_id: u32, weeks_assigned: f64) -> Self {
        Self {
            project_id,
            freelancer_id,
            weeks_assigned,
        }
    }
}

/// Scalar settings for the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Flat recurring cost applied every forecast month
    pub monthly_overhead: f64,

    /// Forecast horizon in months
    pub forecast_months: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            monthly_overhead: 5_000.0,
            forecast_months: 6,
        }
    }
}
