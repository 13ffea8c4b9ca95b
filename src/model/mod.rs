//! Entity records, session state container, and input validation

mod data;
mod store;
pub mod input;

pub use data::{Assignment, Freelancer, ModelSettings, Project};
pub use input::{AssignmentDraft, FreelancerDraft, InputError, ProjectDraft};
pub use store::ModelStore;
