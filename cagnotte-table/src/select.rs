use std::collections::HashSet;

/// Tri-state summary of the selection relative to the visible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    None,
    /// A strict non-empty subset is selected; drives the indeterminate
    /// checkbox rendering.
    Some,
    All,
}

pub fn is_selected(selected: &HashSet<String>, row_id: &str) -> bool {
    selected.contains(row_id)
}

/// Checkbox toggle for one row.
pub fn toggle_row(selected: &HashSet<String>, row_id: &str, checked: bool) -> HashSet<String> {
    let mut next = selected.clone();
    if checked {
        next.insert(row_id.to_string());
    } else {
        next.remove(row_id);
    }
    next
}

pub fn select_all_state(selected: &HashSet<String>, visible: &[String]) -> SelectAllState {
    if visible.is_empty() {
        return SelectAllState::None;
    }
    let hit = visible.iter().filter(|id| selected.contains(*id)).count();
    if hit == 0 {
        SelectAllState::None
    } else if hit == visible.len() {
        SelectAllState::All
    } else {
        SelectAllState::Some
    }
}

/// Header checkbox toggle. Only the visible ids are added or removed, so a
/// selection made on another page survives pagination.
pub fn toggle_all(
    selected: &HashSet<String>,
    checked: bool,
    visible: &[String],
) -> HashSet<String> {
    let mut next = selected.clone();
    if checked {
        next.extend(visible.iter().cloned());
    } else {
        for id in visible {
            next.remove(id);
        }
    }
    next
}
