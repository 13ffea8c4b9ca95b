//! Per-project cost aggregation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Assignment, Freelancer, Project};

/// A project augmented with its derived labor cost and profitability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCosts {
    pub id: u32,
    pub name: String,
    pub revenue: f64,
    pub timeline_months: u32,

    /// Total freelancer labor cost across this project's assignments
    pub freelancer_cost: f64,

    /// Revenue minus freelancer cost
    pub profit: f64,

    /// Profit as a percentage of revenue. `None` when revenue is zero, in
    /// which case the margin is undefined and rendered as a placeholder.
    pub margin: Option<f64>,
}

/// Cost of a single assignment: rate x hours/week x weeks
pub fn assignment_cost(freelancer: &Freelancer, assignment: &Assignment) -> f64 {
    freelancer.hourly_rate * freelancer.hours_per_week * assignment.weeks_assigned
}

/// Fold the assignment collection into per-project costs
///
/// Freelancers are indexed by id once so the pass over assignments is a
/// single scan. Assignments referencing an unknown freelancer contribute
/// zero; assignments referencing an unknown project are simply never picked
/// up by any output row. Summation order does not affect the result.
pub fn project_costs(
    projects: &[Project],
    freelancers: &[Freelancer],
    assignments: &[Assignment],
) -> Vec<ProjectCosts> {
    let by_id: HashMap<u32, &Freelancer> = freelancers.iter().map(|f| (f.id, f)).collect();

    let mut cost_by_project: HashMap<u32, f64> = HashMap::new();
    for assignment in assignments {
        if let Some(freelancer) = by_id.get(&assignment.freelancer_id) {
            *cost_by_project.entry(assignment.project_id).or_insert(0.0) +=
                assignment_cost(freelancer, assignment);
        }
    }

    projects
        .iter()
        .map(|project| {
            let freelancer_cost = cost_by_project.get(&project.id).copied().unwrap_or(0.0);
            let profit = project.revenue - freelancer_cost;
            let margin = if project.revenue > 0.0 {
                Some(profit / project.revenue * 100.0)
            } else {
                None
            };

            ProjectCosts {
                id: project.id,
                name: project.name.clone(),
                revenue: project.revenue,
                timeline_months: project.timeline_months,
                freelancer_cost,
                profit,
                margin,
            }
        })
        .collect()
}

/// A resolved assignment for display: names looked up, orphans flagged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRow {
    /// Project name, `None` when the project id is dangling
    pub project_name: Option<String>,

    /// Freelancer name, `None` when the freelancer id is dangling
    pub freelancer_name: Option<String>,

    pub weeks_assigned: f64,

    /// Zero when the freelancer reference is dangling
    pub cost: f64,
}

/// Resolve every assignment to a display row, tolerating orphaned references
pub fn assignment_rows(
    projects: &[Project],
    freelancers: &[Freelancer],
    assignments: &[Assignment],
) -> Vec<AssignmentRow> {
    let projects_by_id: HashMap<u32, &Project> = projects.iter().map(|p| (p.id, p)).collect();
    let freelancers_by_id: HashMap<u32, &Freelancer> = freelancers.iter().map(|f| (f.id, f)).collect();

    assignments
        .iter()
        .map(|assignment| {
            let project = projects_by_id.get(&assignment.project_id);
            let freelancer = freelancers_by_id.get(&assignment.freelancer_id);
            AssignmentRow {
                project_name: project.map(|p| p.name.clone()),
                freelancer_name: freelancer.map(|f| f.name.clone()),
                weeks_assigned: assignment.weeks_assigned,
                cost: freelancer.map_or(0.0, |f| assignment_cost(f, assignment)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fixture() -> (Vec<Project>, Vec<Freelancer>, Vec<Assignment>) {
        let projects = vec![
            Project::new(1, "Website Redesign", 12_000.0, 2),
            Project::new(2, "Marketing Campaign", 8_500.0, 3),
        ];
        let freelancers = vec![
            Freelancer::new(1, "Designer", 75.0, 20.0),
            Freelancer::new(2, "Developer", 90.0, 30.0),
        ];
        let assignments = vec![
            Assignment::new(1, 1, 2.0),
            Assignment::new(2, 2, 4.0),
        ];
        (projects, freelancers, assignments)
    }

    #[test]
    fn test_assignment_cost() {
        // rate 75 x 20 h/wk x 2 weeks = 3000
        let f = Freelancer::new(1, "Designer", 75.0, 20.0);
        let a = Assignment::new(1, 1, 2.0);
        assert_eq!(assignment_cost(&f, &a), 3_000.0);
    }

    #[test]
    fn test_project_costs_basic() {
        let (projects, freelancers, assignments) = fixture();
        let costed = project_costs(&projects, &freelancers, &assignments);

        assert_eq!(costed.len(), 2);
        assert_relative_eq!(costed[0].freelancer_cost, 3_000.0);
        assert_relative_eq!(costed[0].profit, 9_000.0);
        assert_relative_eq!(costed[0].margin.unwrap(), 75.0);

        assert_relative_eq!(costed[1].freelancer_cost, 10_800.0);
        assert_relative_eq!(costed[1].profit, -2_300.0);
    }

    #[test]
    fn test_no_assignments_costs_zero() {
        let (projects, freelancers, _) = fixture();
        let costed = project_costs(&projects, &freelancers, &[]);
        for p in &costed {
            assert_eq!(p.freelancer_cost, 0.0);
            assert_eq!(p.profit, p.revenue);
        }
    }

    #[test]
    fn test_orphaned_freelancer_contributes_zero() {
        let (projects, freelancers, mut assignments) = fixture();
        assignments.push(Assignment::new(1, 99, 10.0));

        let costed = project_costs(&projects, &freelancers, &assignments);
        assert_relative_eq!(costed[0].freelancer_cost, 3_000.0);
    }

    #[test]
    fn test_orphaned_project_ignored() {
        let (projects, freelancers, mut assignments) = fixture();
        assignments.push(Assignment::new(99, 1, 10.0));

        let costed = project_costs(&projects, &freelancers, &assignments);
        assert_eq!(costed.len(), 2);
        assert_relative_eq!(costed[0].freelancer_cost, 3_000.0);
        assert_relative_eq!(costed[1].freelancer_cost, 10_800.0);
    }

    #[test]
    fn test_duplicate_pairs_sum() {
        let (projects, freelancers, mut assignments) = fixture();
        assignments.push(Assignment::new(1, 1, 2.0));

        let costed = project_costs(&projects, &freelancers, &assignments);
        assert_relative_eq!(costed[0].freelancer_cost, 6_000.0);
    }

    #[test]
    fn test_profit_identity() {
        let (projects, freelancers, assignments) = fixture();
        for p in project_costs(&projects, &freelancers, &assignments) {
            assert_eq!(p.profit, p.revenue - p.freelancer_cost);
        }
    }

    #[test]
    fn test_zero_revenue_margin_undefined() {
        let projects = vec![Project::new(1, "Pro bono", 0.0, 1)];
        let costed = project_costs(&projects, &[], &[]);
        assert!(costed[0].margin.is_none());
    }

    #[test]
    fn test_assignment_rows_flag_orphans() {
        let (projects, freelancers, mut assignments) = fixture();
        assignments.push(Assignment::new(99, 99, 5.0));

        let rows = assignment_rows(&projects, &freelancers, &assignments);
        assert_eq!(rows.len(), 3);

        let orphan = &rows[2];
        assert!(orphan.project_name.is_none());
        assert!(orphan.freelancer_name.is_none());
        assert_eq!(orphan.cost, 0.0);

        let resolved = &rows[0];
        assert_eq!(resolved.project_name.as_deref(), Some("Website Redesign"));
        assert_eq!(resolved.cost, 3_000.0);
    }
}
