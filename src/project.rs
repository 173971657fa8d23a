//! Project aggregate root.
//!
//! A `Project` owns the ordered task list plus the team and milestone
//! reference data, together with its own start/end envelope. The envelope is
//! advisory: nothing forces task dates to fall inside it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{Priority, Status};
use crate::task::{Milestone, Task, TeamMember};

/// The aggregate root owning tasks, team members and milestones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub tasks: Vec<Task>,
    pub team: Vec<TeamMember>,
    pub milestones: Vec<Milestone>,
}

impl Project {
    /// Get a task by id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Position of a task in the task list, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn member(id: &str, name: &str, email: &str, role: &str) -> TeamMember {
    TeamMember {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role: role.into(),
        avatar: None,
    }
}

/// One of the uniform placeholder input tasks at the top of the sample plan.
fn input_task(id: &str, ordinal: u32, description: &str, start: NaiveDate, end: NaiveDate) -> Task {
    Task {
        id: id.into(),
        name: format!("Input {ordinal}: "),
        description: Some(description.into()),
        start_date: start,
        end_date: end,
        progress: 0,
        priority: Priority::Medium,
        status: Status::NotStarted,
        assignee: Some("User".into()),
        category: "Input".into(),
        dependencies: Vec::new(),
        estimated_hours: Some(20.0),
        actual_hours: Some(0.0),
        duration_months: 1,
        tariff_hike: Some(0.0),
    }
}

/// The seeded demo project: eight tasks, five team members, four milestones,
/// spanning August through October 2025.
pub fn sample_project() -> Project {
    Project {
        id: "1".into(),
        name: "Sample Project".into(),
        description: Some("A sample project to demonstrate the Gantt chart functionality".into()),
        start_date: ymd(2025, 8, 1),
        end_date: ymd(2025, 10, 31),
        tasks: vec![
            Task {
                id: "1".into(),
                name: "Input 1: ".into(),
                description: Some("Initial project setup and planning phase".into()),
                start_date: ymd(2025, 8, 1),
                end_date: ymd(2025, 8, 7),
                progress: 100,
                priority: Priority::High,
                status: Status::Completed,
                assignee: Some("John Doe".into()),
                category: "Planning".into(),
                dependencies: Vec::new(),
                estimated_hours: Some(40.0),
                actual_hours: Some(38.0),
                duration_months: 1,
                tariff_hike: Some(0.0),
            },
            input_task("1b", 2, "Second input task", ymd(2025, 8, 8), ymd(2025, 8, 14)),
            input_task("1c", 3, "Third input task", ymd(2025, 8, 15), ymd(2025, 8, 21)),
            input_task("1d", 4, "Fourth input task", ymd(2025, 8, 22), ymd(2025, 8, 28)),
            Task {
                id: "2".into(),
                name: "Design Phase".into(),
                description: Some("UI/UX design and wireframing".into()),
                start_date: ymd(2025, 8, 8),
                end_date: ymd(2025, 8, 21),
                progress: 75,
                priority: Priority::High,
                status: Status::InProgress,
                assignee: Some("Jane Smith".into()),
                category: "Design".into(),
                dependencies: vec!["1".into()],
                estimated_hours: Some(80.0),
                actual_hours: Some(60.0),
                duration_months: 2,
                tariff_hike: Some(0.0),
            },
            Task {
                id: "3".into(),
                name: "Frontend Development".into(),
                description: Some("React component development".into()),
                start_date: ymd(2025, 8, 15),
                end_date: ymd(2025, 9, 10),
                progress: 45,
                priority: Priority::Medium,
                status: Status::InProgress,
                assignee: Some("Mike Johnson".into()),
                category: "Development".into(),
                dependencies: vec!["2".into()],
                estimated_hours: Some(120.0),
                actual_hours: Some(50.0),
                duration_months: 3,
                tariff_hike: Some(0.0),
            },
            Task {
                id: "4".into(),
                name: "Backend Development".into(),
                description: Some("API development and database setup".into()),
                start_date: ymd(2025, 8, 22),
                end_date: ymd(2025, 9, 15),
                progress: 30,
                priority: Priority::High,
                status: Status::InProgress,
                assignee: Some("Sarah Wilson".into()),
                category: "Development".into(),
                dependencies: vec!["1".into()],
                estimated_hours: Some(100.0),
                actual_hours: Some(25.0),
                duration_months: 2,
                tariff_hike: Some(0.0),
            },
            Task {
                id: "5".into(),
                name: "Testing & QA".into(),
                description: Some("Comprehensive testing and quality assurance".into()),
                start_date: ymd(2025, 9, 11),
                end_date: ymd(2025, 10, 5),
                progress: 0,
                priority: Priority::Medium,
                status: Status::NotStarted,
                assignee: Some("David Brown".into()),
                category: "Testing".into(),
                dependencies: vec!["3".into(), "4".into()],
                estimated_hours: Some(60.0),
                actual_hours: Some(0.0),
                duration_months: 1,
                tariff_hike: Some(0.0),
            },
            Task {
                id: "6".into(),
                name: "Deployment".into(),
                description: Some("Production deployment and launch".into()),
                start_date: ymd(2025, 10, 6),
                end_date: ymd(2025, 10, 15),
                progress: 0,
                priority: Priority::Critical,
                status: Status::NotStarted,
                assignee: Some("John Doe".into()),
                category: "Deployment".into(),
                dependencies: vec!["5".into()],
                estimated_hours: Some(30.0),
                actual_hours: Some(0.0),
                duration_months: 1,
                tariff_hike: Some(0.0),
            },
        ],
        team: vec![
            member("1", "John Doe", "john@example.com", "Project Manager"),
            member("2", "Jane Smith", "jane@example.com", "UI/UX Designer"),
            member("3", "Mike Johnson", "mike@example.com", "Frontend Developer"),
            member("4", "Sarah Wilson", "sarah@example.com", "Backend Developer"),
            member("5", "David Brown", "david@example.com", "QA Engineer"),
        ],
        milestones: vec![
            Milestone {
                id: "1".into(),
                name: "Project Kickoff".into(),
                date: ymd(2025, 8, 1),
                description: None,
                completed: true,
            },
            Milestone {
                id: "2".into(),
                name: "Design Complete".into(),
                date: ymd(2025, 8, 21),
                description: None,
                completed: false,
            },
            Milestone {
                id: "3".into(),
                name: "Development Complete".into(),
                date: ymd(2025, 9, 15),
                description: None,
                completed: false,
            },
            Milestone {
                id: "4".into(),
                name: "Project Launch".into(),
                date: ymd(2025, 10, 15),
                description: None,
                completed: false,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_project_has_unique_task_ids() {
        let project = sample_project();
        let ids: HashSet<&str> = project.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), project.tasks.len());
    }

    #[test]
    fn sample_project_shape() {
        let project = sample_project();
        assert_eq!(project.tasks.len(), 8);
        assert_eq!(project.team.len(), 5);
        assert_eq!(project.milestones.len(), 4);
        assert_eq!(project.start_date, ymd(2025, 8, 1));
        assert_eq!(project.end_date, ymd(2025, 10, 31));
    }

    #[test]
    fn get_and_position_find_by_id() {
        let project = sample_project();
        assert_eq!(project.get("2").map(|t| t.name.as_str()), Some("Design Phase"));
        assert_eq!(project.position("1b"), Some(1));
        assert!(project.get("missing").is_none());
        assert!(project.position("missing").is_none());
    }
}
