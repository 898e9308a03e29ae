use std::collections::{HashMap, HashSet};
use std::fmt;

use cagnotte_dom::{normalize, Node};

use crate::entry::{GroupEntry, PageUnit, RowEntry, SortDirection};
use crate::paginate::{build_units, page_slice, total_pages};
use crate::parse::{parse, ParseOutcome};
use crate::select::{select_all_state, SelectAllState};
use crate::sort::SortComparator;

/// Header descriptor for one column. Display metadata beyond the label is a
/// rendering concern; the engine only reads the key, the sortable flag, and
/// the comparator.
#[derive(Clone, Default)]
pub struct Column {
    pub label: String,
    pub sort_key: Option<String>,
    pub sortable: bool,
    pub comparator: Option<SortComparator>,
}

impl Column {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self.sortable = true;
        self
    }

    pub fn comparator(mut self, comparator: SortComparator) -> Self {
        self.comparator = Some(comparator);
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("label", &self.label)
            .field("sort_key", &self.sort_key)
            .field("sortable", &self.sortable)
            .field("comparator", &self.comparator.as_ref().map(|_| "..."))
            .finish()
    }
}

/// The active sort key, direction, and comparator for one table instance.
#[derive(Clone, Default)]
pub struct SortSession {
    active_key: Option<String>,
    direction: SortDirection,
    comparator: Option<SortComparator>,
}

impl SortSession {
    /// Header click semantics: the active key flips direction, a new key
    /// resets to ascending and adopts that key's comparator (or none), and
    /// no key at all is a no-op.
    pub fn toggle(&mut self, key: Option<&str>, comparator: Option<SortComparator>) -> bool {
        let Some(key) = key else {
            return false;
        };
        if self.active_key.as_deref() == Some(key) {
            self.direction = self.direction.flip();
        } else {
            self.active_key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
            self.comparator = comparator;
        }
        true
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active_key.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl fmt::Debug for SortSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortSession")
            .field("active_key", &self.active_key)
            .field("direction", &self.direction)
            .field("comparator", &self.comparator.as_ref().map(|_| "..."))
            .finish()
    }
}

/// Table-level configuration accepted at mount time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableConfig {
    pub page_size: Option<usize>,
    pub selectable: bool,
}

/// Derived view state for the renderer: the units of the current page plus
/// everything needed for headers, pagination controls, and checkboxes.
#[derive(Debug, Clone)]
pub struct TableView {
    pub units: Vec<PageUnit>,
    pub total_pages: usize,
    pub current_page: usize,
    /// Row ids of every unit on the current page, collapsed groups included;
    /// hiding a collapsed region is the renderer's job.
    pub visible_row_ids: Vec<String>,
    pub select_all_state: SelectAllState,
    pub has_actions_column: bool,
    pub active_sort_key: Option<String>,
    pub sort_direction: SortDirection,
}

/// Per-instance session state for one mounted table.
///
/// Similar to `FocusState`: caller-owned state that persists across
/// composition passes, mutated one interaction at a time on the render
/// thread. Each mounted table must own its own instance.
#[derive(Debug)]
pub struct TableState {
    sort: SortSession,
    page_size: Option<usize>,
    current_page: usize,
    selectable: bool,
    collapse: HashMap<String, bool>,
    content: ParseOutcome,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl TableState {
    pub fn new(config: TableConfig) -> Self {
        Self {
            sort: SortSession::default(),
            page_size: config.page_size,
            current_page: 1,
            selectable: config.selectable,
            collapse: HashMap::new(),
            content: ParseOutcome::default(),
        }
    }

    /// Re-parse the composition tree after a content change.
    ///
    /// Collapse state carries over by group key, so an already-rendered
    /// group does not snap open or closed on re-composition. The current
    /// page is clamped in case the new content has fewer pages.
    pub fn set_content(&mut self, tree: &[Node]) {
        let nodes = normalize(tree);
        let outcome = parse(&nodes, &self.collapse);
        log::debug!(
            "[table] content set: {} rows, {} groups, actions={}",
            outcome.rows.len(),
            outcome.groups.len(),
            outcome.has_actions_column
        );
        self.collapse = outcome.collapse_state.clone();
        self.content = outcome;
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    /// Sort toggle for a header click. Returns true if the session changed.
    pub fn toggle_sort(&mut self, key: Option<&str>, comparator: Option<SortComparator>) -> bool {
        let changed = self.sort.toggle(key, comparator);
        if changed {
            log::debug!(
                "[table] sort: key={:?} direction={:?}",
                self.sort.active_key(),
                self.sort.direction()
            );
        }
        changed
    }

    /// Sort toggle driven from a header descriptor; a column that is not
    /// sortable or declares no key is a no-op.
    pub fn toggle_sort_column(&mut self, column: &Column) -> bool {
        if !column.sortable {
            return false;
        }
        self.toggle_sort(column.sort_key.as_deref(), column.comparator.clone())
    }

    /// Changing the page size always returns to the first page so the
    /// cursor cannot be left stranded past a smaller page count.
    pub fn set_page_size(&mut self, page_size: Option<usize>) {
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Jump to a page, clamped to `[1, total_pages]`.
    /// Returns true if the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let clamped = page.clamp(1, self.total_pages());
        if clamped == self.current_page {
            return false;
        }
        self.current_page = clamped;
        true
    }

    /// No-op past the last page.
    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    /// No-op before the first page.
    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1).max(1))
    }

    /// Flip a group's collapsed flag. The group's rows always stay in the
    /// model; the renderer hides a collapsed region. Returns true if the
    /// flag changed.
    pub fn toggle_group_collapse(&mut self, key: &str) -> bool {
        let Some(group) = self.content.groups.iter().find(|group| group.key == key) else {
            log::debug!("[table] collapse toggle for unknown group {key:?}, ignoring");
            return false;
        };
        if !group.collapsible {
            return false;
        }
        let flag = self.collapse.entry(key.to_string()).or_insert(false);
        *flag = !*flag;
        true
    }

    pub fn is_group_collapsed(&self, key: &str) -> bool {
        self.collapse.get(key).copied().unwrap_or(false)
    }

    pub fn active_sort_key(&self) -> Option<&str> {
        self.sort.active_key()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort.direction()
    }

    pub fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn selectable(&self) -> bool {
        self.selectable
    }

    pub fn has_actions_column(&self) -> bool {
        self.content.has_actions_column
    }

    pub fn rows(&self) -> &[RowEntry] {
        &self.content.rows
    }

    pub fn groups(&self) -> &[GroupEntry] {
        &self.content.groups
    }

    /// The full, sorted unit list before pagination slicing.
    pub fn units(&self) -> Vec<PageUnit> {
        build_units(
            &self.content.top_level,
            &self.content.groups,
            &self.content.rows,
            self.sort.active_key(),
            self.sort.direction(),
            self.sort.comparator.as_ref(),
        )
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.page_size, self.units().len())
    }

    /// Recompute the derived view state for the current page.
    ///
    /// The selection set is caller-owned (controlled); the engine only
    /// derives the tri-state summary from it and the visible rows.
    pub fn view(&self, selected: &HashSet<String>) -> TableView {
        let units = self.units();
        let total = total_pages(self.page_size, units.len());
        let page = self.current_page.clamp(1, total);
        let visible = page_slice(&units, self.page_size, page).to_vec();
        let visible_row_ids: Vec<String> = visible
            .iter()
            .flat_map(|unit| match unit {
                PageUnit::Row(row) => vec![row.row_id.clone()],
                PageUnit::Group(_, rows) => rows.iter().map(|row| row.row_id.clone()).collect(),
            })
            .collect();
        let select_all = if self.selectable {
            select_all_state(selected, &visible_row_ids)
        } else {
            SelectAllState::None
        };

        TableView {
            units: visible,
            total_pages: total,
            current_page: page,
            visible_row_ids,
            select_all_state: select_all,
            has_actions_column: self.content.has_actions_column,
            active_sort_key: self.sort.active_key().map(str::to_string),
            sort_direction: self.sort.direction(),
        }
    }
}
