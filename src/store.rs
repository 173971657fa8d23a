//! Project state store: the single source of truth for the current project,
//! selection, view mode and timeline window.
//!
//! State changes go through a closed action vocabulary dispatched into an
//! exhaustively-matched reducer. Every action is a total function over the
//! current state: unknown task ids degrade to no-ops, never to errors, and
//! each dispatch is one atomic synchronous transition with no intermediate
//! observable state.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::fields::ViewMode;
use crate::project::Project;
use crate::task::Task;
use crate::timeline::{TimelineConfig, TimelineUpdate};

/// The closed set of state mutations. New variants force a reducer update
/// through exhaustive matching.
#[derive(Debug, Clone)]
pub enum Action {
    /// Set or clear the selected task. No validation: selecting a task that
    /// is not in the project's list is permitted (advisory UI state).
    SelectTask(Option<Task>),
    /// Append a task. The caller owns id uniqueness; duplicates are not
    /// rejected here.
    AddTask(Task),
    /// Replace the task with a matching id in place, keeping its position.
    /// No-op when the id is unknown.
    UpdateTask(Task),
    /// Remove every task with this id and clear a matching selection.
    DeleteTask(String),
    SetViewMode(ViewMode),
    /// Shallow-merge the given fields into the timeline config.
    UpdateTimeline(TimelineUpdate),
}

/// Read-only snapshot shape exposed to presentation adapters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectState {
    pub project: Project,
    /// A full task record, not just an id. After every mutation it mirrors
    /// the latest version of that task in the list, or is cleared when the
    /// task is deleted.
    pub selected_task: Option<Task>,
    pub view_mode: ViewMode,
    pub timeline: TimelineConfig,
}

impl ProjectState {
    /// Initial state: no selection, gantt view, the given window.
    pub fn new(project: Project, timeline: TimelineConfig) -> Self {
        ProjectState {
            project,
            selected_task: None,
            view_mode: ViewMode::Gantt,
            timeline,
        }
    }
}

/// Owning dispatch handle around [`ProjectState`].
///
/// Constructor-injected rather than ambient: whoever renders gets a reference
/// to exactly one store, so "state requested outside a provider" cannot be
/// expressed, and the reducer can be unit-tested without any rendering.
#[derive(Debug)]
pub struct ProjectStore {
    state: ProjectState,
}

impl ProjectStore {
    pub fn new(state: ProjectState) -> Self {
        ProjectStore { state }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    /// Apply one action as a single synchronous transition.
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatch: {action:?}");
        reduce(&mut self.state, action);
    }

    /// Consume the store, yielding the final state.
    pub fn into_state(self) -> ProjectState {
        self.state
    }
}

/// The reducer. Total over (state, action); matched exhaustively so a new
/// [`Action`] variant cannot be silently ignored.
fn reduce(state: &mut ProjectState, action: Action) {
    match action {
        Action::SelectTask(task) => {
            state.selected_task = task;
        }
        Action::AddTask(task) => {
            state.project.tasks.push(task);
        }
        Action::UpdateTask(task) => {
            if let Some(slot) = state.project.tasks.iter_mut().find(|t| t.id == task.id) {
                *slot = task.clone();
            }
            // Refresh the selection in the same transition so it never lags
            // behind the list.
            if let Some(selected) = &state.selected_task {
                if selected.id == task.id {
                    state.selected_task = Some(task);
                }
            }
        }
        Action::DeleteTask(task_id) => {
            state.project.tasks.retain(|t| t.id != task_id);
            if let Some(selected) = &state.selected_task {
                if selected.id == task_id {
                    state.selected_task = None;
                }
            }
        }
        Action::SetViewMode(mode) => {
            state.view_mode = mode;
        }
        Action::UpdateTimeline(update) => {
            state.timeline.apply(update);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Scale;
    use crate::project::sample_project;
    use crate::timeline::TimelineUpdate;
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn store() -> ProjectStore {
        let timeline = TimelineConfig {
            scale: Scale::Day,
            start_date: ymd(2025, 8, 1),
            end_date: ymd(2025, 10, 31),
        };
        ProjectStore::new(ProjectState::new(sample_project(), timeline))
    }

    #[test]
    fn select_task_sets_and_clears_selection() {
        let mut store = store();
        let task = store.state().project.tasks[0].clone();
        store.dispatch(Action::SelectTask(Some(task.clone())));
        assert_eq!(store.state().selected_task.as_ref(), Some(&task));
        store.dispatch(Action::SelectTask(None));
        assert!(store.state().selected_task.is_none());
    }

    #[test]
    fn selecting_a_foreign_task_is_permitted() {
        // Advisory selection: no validation against the task list.
        let mut store = store();
        let mut stray = store.state().project.tasks[0].clone();
        stray.id = "not-in-project".into();
        store.dispatch(Action::SelectTask(Some(stray.clone())));
        assert_eq!(store.state().selected_task.as_ref(), Some(&stray));
    }

    #[test]
    fn add_task_appends_at_the_end() {
        let mut store = store();
        let before = store.state().project.tasks.len();
        let mut task = store.state().project.tasks[0].clone();
        task.id = "9".into();
        store.dispatch(Action::AddTask(task.clone()));
        let tasks = &store.state().project.tasks;
        assert_eq!(tasks.len(), before + 1);
        assert_eq!(tasks.last(), Some(&task));
    }

    #[test]
    fn update_task_replaces_in_place() {
        let mut store = store();
        let before = store.state().project.tasks.len();
        let position = store.state().project.position("2").unwrap();
        let mut updated = store.state().project.get("2").unwrap().clone();
        updated.progress = 90;
        updated.duration_months = 4;
        store.dispatch(Action::UpdateTask(updated.clone()));

        let state = store.state();
        assert_eq!(state.project.tasks.len(), before);
        assert_eq!(state.project.position("2"), Some(position));
        assert_eq!(state.project.get("2"), Some(&updated));
        assert_eq!(
            state.project.tasks.iter().filter(|t| **t == updated).count(),
            1
        );
    }

    #[test]
    fn update_task_refreshes_matching_selection() {
        let mut store = store();
        let original = store.state().project.get("3").unwrap().clone();
        store.dispatch(Action::SelectTask(Some(original.clone())));

        let mut updated = original;
        updated.progress = 60;
        store.dispatch(Action::UpdateTask(updated.clone()));
        assert_eq!(store.state().selected_task.as_ref(), Some(&updated));
    }

    #[test]
    fn update_task_leaves_other_selection_alone() {
        let mut store = store();
        let selected = store.state().project.get("5").unwrap().clone();
        store.dispatch(Action::SelectTask(Some(selected.clone())));

        let mut updated = store.state().project.get("3").unwrap().clone();
        updated.progress = 60;
        store.dispatch(Action::UpdateTask(updated));
        assert_eq!(store.state().selected_task.as_ref(), Some(&selected));
    }

    #[test]
    fn update_unknown_id_is_a_noop() {
        let mut store = store();
        let before = store.state().clone();
        let mut ghost = store.state().project.tasks[0].clone();
        ghost.id = "ghost".into();
        store.dispatch(Action::UpdateTask(ghost));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn update_task_is_idempotent() {
        let mut once = store();
        let mut twice = store();
        let mut updated = once.state().project.get("4").unwrap().clone();
        updated.progress = 55;

        once.dispatch(Action::UpdateTask(updated.clone()));
        twice.dispatch(Action::UpdateTask(updated.clone()));
        twice.dispatch(Action::UpdateTask(updated));
        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn delete_task_clears_matching_selection() {
        let mut store = store();
        let before = store.state().project.tasks.len();
        let task = store.state().project.get("6").unwrap().clone();
        store.dispatch(Action::SelectTask(Some(task)));
        store.dispatch(Action::DeleteTask("6".into()));

        let state = store.state();
        assert!(state.selected_task.is_none());
        assert_eq!(state.project.tasks.len(), before - 1);
        assert!(state.project.get("6").is_none());
    }

    #[test]
    fn delete_other_task_keeps_selection() {
        let mut store = store();
        let selected = store.state().project.get("2").unwrap().clone();
        store.dispatch(Action::SelectTask(Some(selected.clone())));
        store.dispatch(Action::DeleteTask("6".into()));
        assert_eq!(store.state().selected_task.as_ref(), Some(&selected));
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let mut store = store();
        let before = store.state().clone();
        store.dispatch(Action::DeleteTask("ghost".into()));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn add_then_delete_restores_prior_tasks() {
        let mut store = store();
        let before = store.state().project.tasks.clone();
        let mut task = before[0].clone();
        task.id = "9".into();
        store.dispatch(Action::AddTask(task));
        store.dispatch(Action::DeleteTask("9".into()));
        assert_eq!(store.state().project.tasks, before);
    }

    #[test]
    fn set_view_mode_touches_nothing_else() {
        let mut store = store();
        let before = store.state().clone();
        store.dispatch(Action::SetViewMode(ViewMode::Tasks));

        let state = store.state();
        assert_eq!(state.view_mode, ViewMode::Tasks);
        assert_eq!(state.project, before.project);
        assert_eq!(state.selected_task, before.selected_task);
        assert_eq!(state.timeline, before.timeline);
    }

    #[test]
    fn update_timeline_merges_partial_config() {
        let mut store = store();
        store.dispatch(Action::UpdateTimeline(TimelineUpdate {
            scale: Some(Scale::Week),
            ..TimelineUpdate::default()
        }));
        let timeline = store.state().timeline;
        assert_eq!(timeline.scale, Scale::Week);
        assert_eq!(timeline.start_date, ymd(2025, 8, 1));
        assert_eq!(timeline.end_date, ymd(2025, 10, 31));
    }
}
