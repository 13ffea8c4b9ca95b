//! Financial model for a freelancer-based services business
//!
//! This library provides:
//! - Project, freelancer, and assignment entity records with a session store
//! - Per-project cost, profit, and margin aggregation
//! - Straight-line monthly revenue/cost/profit forecasting
//! - Portfolio totals and an alternative single-engagement model
//! - Terminal report rendering and CSV export

pub mod engagement;
pub mod engine;
pub mod model;
pub mod report;

// Re-export commonly used types
pub use engagement::{Engagement, EngagementSummary};
pub use engine::{monthly_forecast, project_costs, totals, ModelTotals, MonthRow, ProjectCosts};
pub use model::{Assignment, Freelancer, ModelSettings, ModelStore, Project};
