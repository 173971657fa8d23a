//! Enumerations and field types for task management.
//!
//! This module defines the closed vocabularies used to categorise tasks
//! (priority, status), the session-level view and timeline scales, and the
//! named fallback policy for free-text numeric input.

use serde::{Deserialize, Serialize};

/// Priority classification for task importance.
///
/// Carries a fixed total order for sorting: critical sorts first, low last.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Sort rank, smallest first: critical < high < medium < low.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

/// Task completion status.
///
/// There is no enforced transition graph: any status may be set to any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    NotStarted,
    InProgress,
    Completed,
    OnHold,
}

/// Timeline rendering scale: the calendar span one header cell represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Scale {
    Day,
    Week,
    Month,
}

/// Top-level view selection. Purely informational view state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Gantt,
    Tasks,
    Calendar,
}

/// Available sorting options for task lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    StartDate,
    Priority,
}

/// Status filter for task lists: everything, or a single status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
}

impl StatusFilter {
    /// Whether a task with the given status passes this filter.
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

/// Fallback duration applied when free-text duration input cannot be parsed.
pub const DEFAULT_DURATION_MONTHS: u32 = 1;

/// Parse a duration-in-months field from free-text input.
///
/// Permissive by policy: anything that does not parse as a positive integer
/// falls back to [`DEFAULT_DURATION_MONTHS`] rather than failing, so a
/// half-typed edit never wedges the form.
pub fn parse_duration_months(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(months) if months >= 1 => months,
        _ => DEFAULT_DURATION_MONTHS,
    }
}
