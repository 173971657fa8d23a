//! Row drag interaction state.
//!
//! A transient three-phase state machine scoped to a single task row:
//! idle, dragging, idle again. Pointer-down enters the drag, pointer-move is
//! visual-only (the store is never touched mid-drag), and pointer-up either
//! commits one [`Action::UpdateTask`] shifting both task dates or discards
//! the gesture. The pixel delta snaps to whole days at the current cell
//! width.

use chrono::Duration;

use crate::store::Action;
use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging { origin_x: f64, origin_left: i64 },
}

/// Drag state for one task row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowDrag {
    phase: Phase,
}

impl Default for RowDrag {
    fn default() -> Self {
        RowDrag { phase: Phase::Idle }
    }
}

impl RowDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Pointer-down: capture the pointer position and the bar's current left
    /// offset.
    pub fn begin(&mut self, pointer_x: f64, bar_left: i64) {
        self.phase = Phase::Dragging {
            origin_x: pointer_x,
            origin_left: bar_left,
        };
    }

    /// Pointer-move: the bar's preview left offset, clamped at the window
    /// edge. Purely visual; returns `None` when not dragging.
    pub fn preview_left(&self, pointer_x: f64) -> Option<i64> {
        match self.phase {
            Phase::Idle => None,
            Phase::Dragging { origin_x, origin_left } => {
                let left = origin_left as f64 + (pointer_x - origin_x);
                Some(left.max(0.0).round() as i64)
            }
        }
    }

    /// The whole-day shift the current pointer position snaps to.
    fn snapped_days(&self, pointer_x: f64, cell_width: i64) -> Option<i64> {
        let new_left = self.preview_left(pointer_x)?;
        let Phase::Dragging { origin_left, .. } = self.phase else {
            return None;
        };
        Some((((new_left - origin_left) as f64) / cell_width as f64).round() as i64)
    }

    /// Pointer-up: leave the drag and emit the single committing action,
    /// shifting both task dates by the snapped day delta. Returns `None`
    /// when no drag was in progress.
    pub fn commit(&mut self, task: &Task, pointer_x: f64, cell_width: i64) -> Option<Action> {
        let days = self.snapped_days(pointer_x, cell_width)?;
        self.phase = Phase::Idle;

        let mut moved = task.clone();
        moved.start_date = task.start_date + Duration::days(days);
        moved.end_date = task.end_date + Duration::days(days);
        Some(Action::UpdateTask(moved))
    }

    /// Discard the gesture without touching the store.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }
}
