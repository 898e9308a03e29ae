use std::collections::HashMap;

use crate::entry::{GroupEntry, PageUnit, RowEntry, SortDirection};
use crate::parse::TopLevelSlot;
use crate::sort::{sort_rows, SortComparator};

/// Merge sorted ungrouped rows and sorted per-group rows back into the
/// original top-level declaration order.
///
/// Sorting is local to each bucket: the ungrouped rows sort among
/// themselves, each group's rows sort among themselves, and the top-level
/// interleaving of rows and groups never changes.
pub fn build_units(
    top_level: &[TopLevelSlot],
    groups: &[GroupEntry],
    rows: &[RowEntry],
    key: Option<&str>,
    direction: SortDirection,
    comparator: Option<&SortComparator>,
) -> Vec<PageUnit> {
    let (ungrouped, grouped): (Vec<RowEntry>, Vec<RowEntry>) = rows
        .iter()
        .cloned()
        .partition(|row| row.group_key.is_none());

    let mut per_group: HashMap<String, Vec<RowEntry>> = HashMap::new();
    for row in grouped {
        if let Some(group_key) = row.group_key.clone() {
            per_group.entry(group_key).or_default().push(row);
        }
    }

    let sorted_ungrouped = sort_rows(&ungrouped, key, direction, comparator);

    let mut units = Vec::with_capacity(top_level.len());
    let mut group_cursor = groups.iter();
    let mut row_cursor = sorted_ungrouped.into_iter();
    for slot in top_level {
        match slot {
            TopLevelSlot::Group => {
                // Content can shift between renders; skip an unresolvable
                // slot instead of indexing past the group list.
                let Some(group) = group_cursor.next() else {
                    log::debug!("[units] group slot without a matching group, skipping");
                    continue;
                };
                let members = per_group.remove(&group.key).unwrap_or_default();
                let sorted = sort_rows(&members, key, direction, comparator);
                units.push(PageUnit::Group(group.clone(), sorted));
            }
            TopLevelSlot::Row => {
                let Some(row) = row_cursor.next() else {
                    log::debug!("[units] row slot without a matching row, skipping");
                    continue;
                };
                units.push(PageUnit::Row(row));
            }
        }
    }
    units
}

/// Page count for a unit list. No page size (or zero) means one implicit
/// page holding everything; an empty list still has one page.
pub fn total_pages(page_size: Option<usize>, unit_count: usize) -> usize {
    match page_size {
        None | Some(0) => 1,
        Some(size) => unit_count.div_ceil(size).max(1),
    }
}

/// Slice the unit list for one page.
///
/// A group unit occupies a single page slot no matter how many rows it
/// carries, so a page can display more rows than `page_size`. Page size
/// counts displayed sections, not raw rows.
pub fn page_slice(units: &[PageUnit], page_size: Option<usize>, page: usize) -> &[PageUnit] {
    let Some(size) = page_size.filter(|size| *size > 0) else {
        return units;
    };
    let start = page.saturating_sub(1).saturating_mul(size).min(units.len());
    let end = start.saturating_add(size).min(units.len());
    &units[start..end]
}
