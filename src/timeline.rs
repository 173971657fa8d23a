//! Timeline geometry engine.
//!
//! Pure, stateless mapping from dates and durations to pixel-space layout:
//! bar position and width, overall chart width, header cell generation and
//! the today marker. No mutation, no I/O; the only wall-clock dependency is
//! [`today_marker_offset`], which samples the clock at call time.

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::fields::Scale;
use crate::task::Task;

/// Pixel width of one timeline cell at the default zoom.
pub const DEFAULT_CELL_WIDTH: i64 = 40;

/// Session-scoped view state for the timeline: the visible window and scale.
///
/// Independent of the project's own date envelope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineConfig {
    pub scale: Scale,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A partial [`TimelineConfig`]: fields left as `None` keep their prior value
/// when merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineUpdate {
    pub scale: Option<Scale>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TimelineConfig {
    /// Shallow-merge an update into this config.
    pub fn apply(&mut self, update: TimelineUpdate) {
        if let Some(scale) = update.scale {
            self.scale = scale;
        }
        if let Some(start) = update.start_date {
            self.start_date = start;
        }
        if let Some(end) = update.end_date {
            self.end_date = end;
        }
    }
}

/// Absolute day count between two dates. Symmetric in its arguments.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Pixel placement of a task bar within the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskPosition {
    pub left: i64,
    pub width: i64,
}

/// Compute a task bar's pixel position for the given window start.
///
/// `left` uses the absolute day difference, so a task starting before the
/// window still lands at a positive offset. `width` is driven entirely by
/// `duration_months` (one month = one cell), floored at a single cell; the
/// rendered span and the task's literal date range can disagree.
pub fn task_position(task: &Task, window_start: NaiveDate, cell_width: i64) -> TaskPosition {
    let left = days_between(window_start, task.start_date) * cell_width;
    let width = (i64::from(task.duration_months) * cell_width).max(cell_width);
    TaskPosition { left, width }
}

/// Total chart width in pixels for a window.
pub fn chart_width(window_start: NaiveDate, window_end: NaiveDate, cell_width: i64) -> i64 {
    days_between(window_start, window_end) * cell_width
}

/// One rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub date: NaiveDate,
    /// Month-and-year label, e.g. "August 2025".
    pub label: String,
    /// Saturday/Sunday shading hint; only ever true at day scale.
    pub is_weekend: bool,
}

/// Lazy iterator over header cells, one per scale step with step date within
/// the window (inclusive at both ends). Finite; clone it before consuming to
/// iterate again.
#[derive(Debug, Clone)]
pub struct HeaderCells {
    cursor: Option<NaiveDate>,
    end: NaiveDate,
    scale: Scale,
}

/// Generate the header cells for a window at the given scale.
///
/// Steps are +1 day, +7 days, or +1 calendar month; month steps use calendar
/// arithmetic, so varying month lengths are honoured.
pub fn header_cells(start: NaiveDate, end: NaiveDate, scale: Scale) -> HeaderCells {
    HeaderCells {
        cursor: Some(start),
        end,
        scale,
    }
}

impl Iterator for HeaderCells {
    type Item = HeaderCell;

    fn next(&mut self) -> Option<HeaderCell> {
        let date = self.cursor?;
        if date > self.end {
            self.cursor = None;
            return None;
        }
        let cell = HeaderCell {
            date,
            label: date.format("%B %Y").to_string(),
            is_weekend: self.scale == Scale::Day
                && matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        };
        self.cursor = match self.scale {
            Scale::Day => date.checked_add_days(Days::new(1)),
            Scale::Week => date.checked_add_days(Days::new(7)),
            Scale::Month => date.checked_add_months(Months::new(1)),
        };
        Some(cell)
    }
}

/// Pixel offset of a marker for `day`, when it falls inside the window.
pub fn marker_offset(
    day: NaiveDate,
    window_start: NaiveDate,
    window_end: NaiveDate,
    cell_width: i64,
) -> Option<i64> {
    if day >= window_start && day <= window_end {
        Some(days_between(window_start, day) * cell_width)
    } else {
        None
    }
}

/// Pixel offset of the today line, or `None` when today is outside the
/// window. Samples the local clock; everything else in this module is pure.
pub fn today_marker_offset(
    window_start: NaiveDate,
    window_end: NaiveDate,
    cell_width: i64,
) -> Option<i64> {
    marker_offset(Local::now().date_naive(), window_start, window_end, cell_width)
}
