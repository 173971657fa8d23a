//! # Gantt planner core
//!
//! State store and timeline geometry engine for a Gantt-style project
//! planner. This crate is the headless core of a dashboard: it owns the
//! project data, the selection and view state, and the pure math that turns
//! dates into pixel layout. Rendering, styling and event wiring live in
//! whatever presentation layer embeds it.
//!
//! ## What's inside
//!
//! - **Domain model**: [`Task`], [`Project`], [`TeamMember`], [`Milestone`]
//!   with closed priority/status vocabularies.
//! - **Timeline geometry**: pure functions mapping tasks and windows to bar
//!   positions, chart width, header cells and the today marker.
//! - **State store**: a closed [`Action`] vocabulary dispatched into an
//!   exhaustively-matched reducer; every transition is atomic and
//!   synchronous, and selection always mirrors the task list.
//! - **Query helpers**: task panel filtering and sorting without the panel.
//! - **Drag state**: the idle/dragging/idle gesture machine that commits a
//!   row drag as one task update.
//!
//! ## Quick start
//!
//! ```
//! use gantt_planner::{
//!     header_cells, sample_project, Action, ProjectState, ProjectStore, Scale,
//!     TimelineConfig,
//! };
//! use chrono::NaiveDate;
//!
//! let timeline = TimelineConfig {
//!     scale: Scale::Day,
//!     start_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
//! };
//! let mut store = ProjectStore::new(ProjectState::new(sample_project(), timeline));
//!
//! let mut task = store.state().project.get("2").unwrap().clone();
//! task.progress = 90;
//! store.dispatch(Action::UpdateTask(task));
//!
//! let cells = header_cells(timeline.start_date, timeline.end_date, timeline.scale);
//! assert_eq!(cells.count(), 92);
//! ```
//!
//! All reducer actions are total: unknown ids degrade to no-ops rather than
//! errors. The crate logs dispatched actions through the `log` facade and
//! leaves backend choice to the embedding application.

pub mod drag;
pub mod fields;
pub mod project;
pub mod query;
pub mod store;
pub mod task;
pub mod timeline;

pub use drag::RowDrag;
pub use fields::{
    parse_duration_months, Priority, Scale, SortKey, Status, StatusFilter, ViewMode,
    DEFAULT_DURATION_MONTHS,
};
pub use project::{sample_project, Project};
pub use query::{filter_tasks, query_tasks, sort_tasks};
pub use store::{Action, ProjectState, ProjectStore};
pub use task::{Milestone, Task, TeamMember};
pub use timeline::{
    chart_width, days_between, header_cells, marker_offset, task_position,
    today_marker_offset, HeaderCell, HeaderCells, TaskPosition, TimelineConfig,
    TimelineUpdate, DEFAULT_CELL_WIDTH,
};
