//! Validation boundary between raw form input and typed entities
//!
//! Form fields arrive as strings. Each draft parses and validates its fields
//! up front so the store and engine only ever see well-formed numeric values.

use thiserror::Error;

/// Rejection reasons for raw form input
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field {field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("field {field} must not be negative")]
    Negative { field: &'static str },

    #[error("timeline must be at least one month")]
    ZeroTimeline,
}

/// A validated project form submission
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub revenue: f64,
    pub timeline_months: u32,
}

impl ProjectDraft {
    pub fn parse(name: &str, revenue: &str, timeline: &str) -> Result<Self, InputError> {
        let name = require_text("name", name)?;
        let revenue = parse_amount("revenue", revenue)?;
        let timeline_months = parse_count("timeline", timeline)?;
        if timeline_months == 0 {
            return Err(InputError::ZeroTimeline);
        }
        Ok(Self {
            name,
            revenue,
            timeline_months,
        })
    }
}

/// A validated freelancer form submission
#[derive(Debug, Clone, PartialEq)]
pub struct FreelancerDraft {
    pub name: String,
    pub hourly_rate: f64,
    pub hours_per_week: f64,
}

impl FreelancerDraft {
    pub fn parse(name: &str, hourly_rate: &str, hours_per_week: &str) -> Result<Self, InputError> {
        Ok(Self {
            name: require_text("name", name)?,
            hourly_rate: parse_amount("hourlyRate", hourly_rate)?,
            hours_per_week: parse_amount("hoursPerWeek", hours_per_week)?,
        })
    }
}

/// A validated assignment form submission
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentDraft {
    pub project_id: u32,
    pub freelancer_id: u32,
    pub weeks_assigned: f64,
}

impl AssignmentDraft {
    pub fn parse(project_id: &str, freelancer_id: &str, weeks: &str) -> Result<Self, InputError> {
        Ok(Self {
            project_id: parse_count("projectId", project_id)?,
            freelancer_id: parse_count("freelancerId", freelancer_id)?,
            weeks_assigned: parse_amount("weeksAssigned", weeks)?,
        })
    }
}

fn require_text(field: &'static str, value: &str) -> Result<String, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Parse a non-negative monetary or rate amount
fn parse_amount(field: &'static str, value: &str) -> Result<f64, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingField(field));
    }
    let parsed: f64 = trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })?;
    if !parsed.is_finite() {
        return Err(InputError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        });
    }
    if parsed < 0.0 {
        return Err(InputError::Negative { field });
    }
    Ok(parsed)
}

/// Parse a whole-number count or identifier
fn parse_count(field: &'static str, value: &str) -> Result<u32, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingField(field));
    }
    trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })
}
