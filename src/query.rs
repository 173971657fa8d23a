//! Pure filtering and sorting over task lists.
//!
//! This is the logic behind the task panel view, kept free of any UI: a
//! case-insensitive name search, a status filter, and the three supported
//! sort orders. All functions borrow; nothing here mutates the project.

use crate::fields::{SortKey, StatusFilter};
use crate::task::Task;

/// Tasks whose name contains `search` (case-insensitive) and whose status
/// passes the filter. An empty search matches everything.
pub fn filter_tasks<'a>(tasks: &'a [Task], search: &str, status: StatusFilter) -> Vec<&'a Task> {
    let needle = search.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&needle))
        .filter(|t| status.matches(t.status))
        .collect()
}

/// Stable sort by the given key. Priority uses the fixed order
/// critical < high < medium < low.
pub fn sort_tasks(tasks: &mut [&Task], key: SortKey) {
    match key {
        SortKey::Name => tasks.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::StartDate => tasks.sort_by_key(|t| t.start_date),
        SortKey::Priority => tasks.sort_by_key(|t| t.priority.rank()),
    }
}

/// Filter then sort in one pass, the way the task panel consumes it.
pub fn query_tasks<'a>(
    tasks: &'a [Task],
    search: &str,
    status: StatusFilter,
    key: SortKey,
) -> Vec<&'a Task> {
    let mut matched = filter_tasks(tasks, search, status);
    sort_tasks(&mut matched, key);
    matched
}
