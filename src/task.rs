//! Task data structure and related entities.
//!
//! This module defines the core `Task` struct representing a single unit of
//! schedulable work, plus the immutable reference entities (`TeamMember`,
//! `Milestone`) owned by a project.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{Priority, Status};

/// A schedulable unit of work with temporal bounds, status, priority and
/// display metadata.
///
/// Two notions of duration coexist deliberately: the `start_date`/`end_date`
/// span, and `duration_months`, which is what the timeline actually renders.
/// Nothing keeps them in sync; see [`crate::timeline::task_position`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique within a project's task list; assigned at creation, never reused.
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Percentage, semantically 0-100. Not enforced by the model.
    pub progress: u8,
    pub priority: Priority,
    pub status: Status,
    pub assignee: Option<String>,
    pub category: String,
    /// Ids of tasks this one depends on. Advisory, display-only: no cycle
    /// detection and no scheduling enforcement.
    pub dependencies: Vec<String>,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    /// Authoritative width driver for timeline rendering. Semantically >= 1.
    pub duration_months: u32,
    /// Presentational colour intensity in [0, 100]. Unclamped in storage;
    /// clamped only at render time. Orthogonal to scheduling.
    pub tariff_hike: Option<f64>,
}

/// A project team member. Immutable reference data: no mutation actions exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
}

/// A dated project milestone. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub completed: bool,
}
