//! Session state container for the entity collections
//!
//! The store owns the mutable collections and hands the engine read-only
//! slices. All mutation happens here; the engine recomputes from scratch on
//! every call, so callers re-run the engine after any store operation.

use log::debug;

use super::data::{Assignment, Freelancer, ModelSettings, Project};

/// Owner of the model's entity collections and settings
#[derive(Debug, Clone, Default)]
pub struct ModelStore {
    projects: Vec<Project>,
    freelancers: Vec<Freelancer>,
    assignments: Vec<Assignment>,
    settings: ModelSettings,
}

impl ModelStore {
    /// Create an empty store with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the demo dataset
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();

        store.add_project("Website Redesign", 12_000.0, 2);
        store.add_project("Marketing Campaign", 8_500.0, 3);
        store.add_project("App Development", 25_000.0, 4);

        store.add_freelancer("Designer", 75.0, 20.0);
        store.add_freelancer("Developer", 90.0, 30.0);
        store.add_freelancer("Copywriter", 60.0, 15.0);

        store.add_assignment(1, 1, 2.0);
        store.add_assignment(1, 3, 1.0);
        store.add_assignment(2, 1, 2.0);
        store.add_assignment(2, 3, 3.0);
        store.add_assignment(3, 1, 2.0);
        store.add_assignment(3, 2, 4.0);

        store
    }

    /// Add a project, allocating the next free identifier
    pub fn add_project(&mut self, name: impl Into<String>, revenue: f64, timeline_months: u32) -> &Project {
        let id = next_id(self.projects.iter().map(|p| p.id));
        debug!("adding project {} (revenue {:.2}, timeline {}mo)", id, revenue, timeline_months);
        self.projects.push(Project::new(id, name, revenue, timeline_months));
        self.projects.last().unwrap()
    }

    /// Add a freelancer, allocating the next free identifier
    pub fn add_freelancer(&mut self, name: impl Into<String>, hourly_rate: f64, hours_per_week: f64) -> &Freelancer {
        let id = next_id(self.freelancers.iter().map(|f| f.id));
        debug!("adding freelancer {} (rate {:.2}, {:.1} h/wk)", id, hourly_rate, hours_per_week);
        self.freelancers.push(Freelancer::new(id, name, hourly_rate, hours_per_week));
        self.freelancers.last().unwrap()
    }

    /// Link a freelancer to a project for a number of weeks
    ///
    /// Duplicate pairs are allowed and their costs sum. The ids are not
    /// checked against the collections; a dangling reference simply
    /// contributes zero cost downstream.
    pub fn add_assignment(&mut self, project_id: u32, freelancer_id: u32, weeks_assigned: f64) {
        debug!("assigning freelancer {} to project {} for {:.1} weeks", freelancer_id, project_id, weeks_assigned);
        self.assignments.push(Assignment::new(project_id, freelancer_id, weeks_assigned));
    }

    /// Remove a freelancer by id
    ///
    /// Assignments referencing the removed freelancer are left in place as
    /// orphans and contribute zero cost from then on. Returns whether a
    /// freelancer was removed.
    pub fn remove_freelancer(&mut self, id: u32) -> bool {
        let before = self.freelancers.len();
        self.freelancers.retain(|f| f.id != id);
        let removed = self.freelancers.len() < before;
        if removed {
            debug!("removed freelancer {}", id);
        }
        removed
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn freelancers(&self) -> &[Freelancer] {
        &self.freelancers
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ModelSettings {
        &mut self.settings
    }
}

/// Next identifier: one more than the current maximum, or 1 when empty
fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max + 1)
}
