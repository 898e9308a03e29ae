use std::collections::HashMap;

use cagnotte_dom::{normalize, Component, Node};

use crate::entry::{GroupColor, GroupEntry, RowEntry};

/// Component names accepted as a table row.
const ROW_NAMES: &[&str] = &["TableRow", "table-row"];
/// Component names accepted as a row group.
const GROUP_NAMES: &[&str] = &["TableRowGroup", "table-row-group"];

/// Prop aliases accepted for the stable row identifier.
const ROW_ID_ALIASES: &[&str] = &["row-id", "rowId", "id"];
/// Prop aliases accepted for the sort-value map.
const SORT_VALUE_ALIASES: &[&str] = &["sort-values", "sortValues", "values"];

/// Named slot marking a row's actions region.
const ACTIONS_SLOT: &str = "actions";

/// Title shown for a group that declares none.
const DEFAULT_GROUP_TITLE: &str = "Groupe";

/// The kind of each top-level slot, in declaration order.
///
/// The pagination unit builder replays this order to interleave sorted
/// ungrouped rows with whole groups exactly as the caller declared them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelSlot {
    Row,
    Group,
}

/// Everything one parse pass derives from the normalized content tree.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// All rows, grouped and ungrouped, in source order.
    pub rows: Vec<RowEntry>,
    /// All groups, in source order.
    pub groups: Vec<GroupEntry>,
    /// Top-level row/group interleaving, in source order.
    pub top_level: Vec<TopLevelSlot>,
    /// True iff any row declares an actions region.
    pub has_actions_column: bool,
    /// Collapse map carried forward: known keys keep their current value,
    /// new keys are seeded from their declared default, stale keys stay.
    pub collapse_state: HashMap<String, bool>,
}

/// Walk the normalized node list once, classifying rows and groups.
///
/// Unrecognized node shapes are skipped, never rejected: the content comes
/// from declarative composition where stray nodes are common.
pub fn parse(nodes: &[Node], collapse_in: &HashMap<String, bool>) -> ParseOutcome {
    let mut outcome = ParseOutcome {
        collapse_state: collapse_in.clone(),
        ..Default::default()
    };
    let mut row_ordinal = 0usize;
    let mut group_ordinal = 0usize;

    for node in nodes {
        let Some(component) = node.component() else {
            log::trace!("[parse] skipping non-component node");
            continue;
        };

        if is_group(component) {
            let group = parse_group(component, group_ordinal, &mut row_ordinal, &mut outcome);
            outcome
                .collapse_state
                .entry(group.key.clone())
                .or_insert(group.collapsible && component.flag("collapsed"));
            outcome.groups.push(group);
            outcome.top_level.push(TopLevelSlot::Group);
            group_ordinal += 1;
        } else if is_row(component) {
            let row = parse_row(component, None, row_ordinal);
            row_ordinal += 1;
            outcome.rows.push(row);
            outcome.top_level.push(TopLevelSlot::Row);
        } else {
            log::trace!("[parse] skipping component {:?}", component.name);
        }
    }

    outcome.has_actions_column = outcome.rows.iter().any(|row| row.has_actions);
    outcome
}

fn is_row(component: &Component) -> bool {
    ROW_NAMES.contains(&component.name.as_str())
}

fn is_group(component: &Component) -> bool {
    GROUP_NAMES.contains(&component.name.as_str())
}

fn parse_group(
    component: &Component,
    ordinal: usize,
    row_ordinal: &mut usize,
    outcome: &mut ParseOutcome,
) -> GroupEntry {
    let title = component
        .prop_alias(&["title"])
        .map(|value| value.as_text())
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GROUP_TITLE.to_string());
    let collapsible = component.flag("collapsible");
    let color = component
        .prop_alias(&["color"])
        .map(|value| GroupColor::parse(&value.as_text()))
        .unwrap_or_default();
    let key = format!("group-{ordinal}-{title}");

    let mut row_ids = Vec::new();
    for child in normalize(&component.children) {
        let Some(member) = child.component() else {
            continue;
        };
        if !is_row(member) {
            // Non-row content inside a group is a rendering concern.
            log::trace!("[parse] skipping non-row child {:?} in group {key}", member.name);
            continue;
        }
        let row = parse_row(member, Some(key.clone()), *row_ordinal);
        *row_ordinal += 1;
        row_ids.push(row.row_id.clone());
        outcome.rows.push(row);
    }

    GroupEntry {
        key,
        title,
        collapsible,
        color,
        row_ids,
    }
}

fn parse_row(component: &Component, group_key: Option<String>, ordinal: usize) -> RowEntry {
    let row_id = component
        .prop_alias(ROW_ID_ALIASES)
        .map(|value| value.as_text())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("row-{ordinal}"));
    let sort_values = component
        .prop_alias(SORT_VALUE_ALIASES)
        .and_then(|value| value.as_map().cloned())
        .unwrap_or_default();

    RowEntry {
        row_id,
        group_key,
        sort_values,
        has_actions: component.has_slot(ACTIONS_SLOT),
        payload: component.children.clone(),
    }
}
