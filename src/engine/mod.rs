//! Pure calculation engine: cost aggregation, forecast, and totals
//!
//! Every function takes read-only slices and returns derived values. The
//! engine holds no state between calls; the presentation layer re-invokes
//! it whenever any input changes.

mod costs;
mod forecast;
mod summary;

pub use costs::{assignment_cost, assignment_rows, project_costs, AssignmentRow, ProjectCosts};
pub use forecast::{monthly_forecast, MonthRow};
pub use summary::{totals, ModelTotals};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelStore;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_data_pipeline() {
        let store = ModelStore::with_sample_data();
        let costed = project_costs(store.projects(), store.freelancers(), store.assignments());

        // Website Redesign: 75*20*2 + 60*15*1 = 3900
        // Marketing Campaign: 75*20*2 + 60*15*3 = 5700
        // App Development: 75*20*2 + 90*30*4 = 13800
        assert_relative_eq!(costed[0].freelancer_cost, 3_900.0);
        assert_relative_eq!(costed[1].freelancer_cost, 5_700.0);
        assert_relative_eq!(costed[2].freelancer_cost, 13_800.0);

        let t = totals(&costed, store.settings());
        assert_relative_eq!(t.total_revenue, 45_500.0);
        assert_relative_eq!(t.total_costs, 23_400.0 + 30_000.0);
        assert_relative_eq!(t.total_profit, -7_900.0);

        let series = monthly_forecast(&costed, store.settings());
        assert_eq!(series.len(), 6);

        // Month 1: all three projects active
        let m1 = &series[0];
        assert_relative_eq!(m1.revenue, 12_000.0 / 2.0 + 8_500.0 / 3.0 + 25_000.0 / 4.0);
        assert_relative_eq!(
            m1.costs,
            3_900.0 / 2.0 + 5_700.0 / 3.0 + 13_800.0 / 4.0 + 5_000.0
        );

        // Months 5-6: past every timeline, overhead only
        assert_relative_eq!(series[4].revenue, 0.0);
        assert_relative_eq!(series[5].costs, 5_000.0);
    }
}
