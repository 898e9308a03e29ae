use std::collections::HashSet;
use std::sync::Arc;

use cagnotte_dom::{Component, Node, Value};
use cagnotte_table::{
    toggle_all, Column, PageUnit, SelectAllState, SortComparator, SortDirection, TableConfig,
    TableState,
};

fn row(id: &str, label: &str, amount: f64) -> Component {
    Component::new("TableRow").prop("row-id", id).prop(
        "sort-values",
        Value::map([
            ("label", Value::from(label)),
            ("amount", Value::from(amount)),
        ]),
    )
}

/// u-1(Zeta, 2), G1[g-1(Alpha, 9), g-2(Beta, 4)], G2[g-3(Gamma, 10)].
fn scenario_tree() -> Vec<Node> {
    vec![
        row("u-1", "Zeta", 2.0).into(),
        Component::new("TableRowGroup")
            .prop("title", "G1")
            .attr("collapsible")
            .child(row("g-1", "Alpha", 9.0))
            .child(row("g-2", "Beta", 4.0))
            .into(),
        Component::new("TableRowGroup")
            .prop("title", "G2")
            .child(row("g-3", "Gamma", 10.0))
            .into(),
    ]
}

fn unit_ids(units: &[PageUnit]) -> Vec<String> {
    units
        .iter()
        .map(|unit| match unit {
            PageUnit::Row(row) => row.row_id.clone(),
            PageUnit::Group(group, _) => group.title.clone(),
        })
        .collect()
}

fn group_member_ids(units: &[PageUnit], title: &str) -> Vec<String> {
    units
        .iter()
        .find_map(|unit| match unit {
            PageUnit::Group(group, members) if group.title == title => {
                Some(members.iter().map(|row| row.row_id.clone()).collect())
            }
            _ => None,
        })
        .unwrap_or_default()
}

// ============================================================================
// Sort session
// ============================================================================

#[test]
fn test_sort_toggle_cycles_asc_desc_asc() {
    let mut table = TableState::default();

    assert!(table.toggle_sort(Some("label"), None));
    assert_eq!(table.sort_direction(), SortDirection::Ascending);

    assert!(table.toggle_sort(Some("label"), None));
    assert_eq!(table.sort_direction(), SortDirection::Descending);

    assert!(table.toggle_sort(Some("label"), None));
    assert_eq!(table.sort_direction(), SortDirection::Ascending);
}

#[test]
fn test_new_key_resets_to_ascending() {
    let mut table = TableState::default();
    table.toggle_sort(Some("label"), None);
    table.toggle_sort(Some("label"), None);
    assert_eq!(table.sort_direction(), SortDirection::Descending);

    table.toggle_sort(Some("amount"), None);
    assert_eq!(table.active_sort_key(), Some("amount"));
    assert_eq!(table.sort_direction(), SortDirection::Ascending);
}

#[test]
fn test_headers_without_keys_are_noops() {
    let mut table = TableState::default();
    assert!(!table.toggle_sort(None, None));
    assert!(!table.toggle_sort_column(&Column::new("Libellé")));
    assert_eq!(table.active_sort_key(), None);
}

#[test]
fn test_column_comparator_is_adopted() {
    let reversed: SortComparator =
        Arc::new(|a: &Value, b: &Value| b.as_text().cmp(&a.as_text()));
    let column = Column::new("Libellé").sort_key("label").comparator(reversed);

    let mut table = TableState::default();
    table.set_content(&scenario_tree());
    assert!(table.toggle_sort_column(&column));

    let view = table.view(&HashSet::new());
    // The custom comparator inverts the alphabetical order inside G1.
    assert_eq!(group_member_ids(&view.units, "G1"), vec!["g-2", "g-1"]);
}

// ============================================================================
// Derived view: sorting and interleaving (scenario A)
// ============================================================================

#[test]
fn test_label_sort_keeps_top_level_order() {
    let mut table = TableState::default();
    table.set_content(&scenario_tree());
    table.toggle_sort(Some("label"), None);

    let view = table.view(&HashSet::new());
    assert_eq!(view.units.len(), 3);
    assert_eq!(unit_ids(&view.units), vec!["u-1", "G1", "G2"]);
    assert_eq!(group_member_ids(&view.units, "G1"), vec!["g-1", "g-2"]);
    assert_eq!(group_member_ids(&view.units, "G2"), vec!["g-3"]);

    // Descending flips members inside G1, never the top-level order.
    table.toggle_sort(Some("label"), None);
    let view = table.view(&HashSet::new());
    assert_eq!(unit_ids(&view.units), vec!["u-1", "G1", "G2"]);
    assert_eq!(group_member_ids(&view.units, "G1"), vec!["g-2", "g-1"]);
}

// ============================================================================
// Pagination (scenario B)
// ============================================================================

#[test]
fn test_page_size_two_splits_three_units() {
    let mut table = TableState::new(TableConfig {
        page_size: Some(2),
        selectable: false,
    });
    table.set_content(&scenario_tree());

    let view = table.view(&HashSet::new());
    assert_eq!(view.total_pages, 2);
    assert_eq!(unit_ids(&view.units), vec!["u-1", "G1"]);

    assert!(table.next_page());
    let view = table.view(&HashSet::new());
    assert_eq!(unit_ids(&view.units), vec!["G2"]);

    // Past the last page: no-op.
    assert!(!table.next_page());
}

#[test]
fn test_changing_page_size_resets_to_first_page() {
    let mut table = TableState::new(TableConfig {
        page_size: Some(2),
        selectable: false,
    });
    table.set_content(&scenario_tree());
    table.go_to_page(2);

    table.set_page_size(Some(3));
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.total_pages(), 1);
}

#[test]
fn test_navigation_clamps_to_bounds() {
    let mut table = TableState::new(TableConfig {
        page_size: Some(1),
        selectable: false,
    });
    table.set_content(&scenario_tree());

    assert!(!table.prev_page());
    assert_eq!(table.current_page(), 1);

    assert!(table.go_to_page(99));
    assert_eq!(table.current_page(), 3);
    assert!(!table.next_page());
}

#[test]
fn test_shrinking_content_clamps_current_page() {
    let mut table = TableState::new(TableConfig {
        page_size: Some(1),
        selectable: false,
    });
    table.set_content(&scenario_tree());
    table.go_to_page(3);

    table.set_content(&[row("only", "Seul", 1.0).into()]);
    assert_eq!(table.current_page(), 1);
}

// ============================================================================
// Selection through the view (scenario C)
// ============================================================================

#[test]
fn test_select_all_off_spares_other_pages() {
    let mut table = TableState::new(TableConfig {
        page_size: Some(2),
        selectable: true,
    });
    let mut tree = scenario_tree();
    tree.push(row("x-9", "Omega", 1.0).into());
    table.set_content(&tree);

    // x-9 was selected while its page was shown.
    let selected: HashSet<String> = ["u-1".to_string(), "x-9".to_string()].into();

    let view = table.view(&selected);
    assert_eq!(view.visible_row_ids, vec!["u-1", "g-1", "g-2"]);
    assert_eq!(view.select_all_state, SelectAllState::Some);

    let after = toggle_all(&selected, false, &view.visible_row_ids);
    assert_eq!(after, ["x-9".to_string()].into());
}

#[test]
fn test_select_all_state_in_view() {
    let mut table = TableState::new(TableConfig {
        page_size: None,
        selectable: true,
    });
    table.set_content(&scenario_tree());

    let all: HashSet<String> = ["u-1", "g-1", "g-2", "g-3"]
        .iter()
        .map(|id| id.to_string())
        .collect();
    assert_eq!(table.view(&all).select_all_state, SelectAllState::All);
    assert_eq!(
        table.view(&HashSet::new()).select_all_state,
        SelectAllState::None
    );
}

#[test]
fn test_non_selectable_table_reports_none() {
    let mut table = TableState::default();
    table.set_content(&scenario_tree());

    let all: HashSet<String> = ["u-1".to_string()].into();
    assert_eq!(table.view(&all).select_all_state, SelectAllState::None);
}

// ============================================================================
// Collapse state
// ============================================================================

#[test]
fn test_collapse_survives_recomposition() {
    let mut table = TableState::default();
    table.set_content(&scenario_tree());

    let key = table.groups()[0].key.clone();
    assert!(!table.is_group_collapsed(&key));

    assert!(table.toggle_group_collapse(&key));
    assert!(table.is_group_collapsed(&key));

    // Re-composition with the same tree keeps the toggled state.
    table.set_content(&scenario_tree());
    assert!(table.is_group_collapsed(&key));
}

#[test]
fn test_non_collapsible_groups_stay_expanded() {
    let mut table = TableState::default();
    table.set_content(&scenario_tree());

    // G2 declares no collapsible flag.
    let key = table.groups()[1].key.clone();
    assert!(!table.toggle_group_collapse(&key));
    assert!(!table.is_group_collapsed(&key));
}

#[test]
fn test_collapsed_group_rows_stay_in_the_model() {
    let mut table = TableState::default();
    table.set_content(&scenario_tree());

    let key = table.groups()[0].key.clone();
    table.toggle_group_collapse(&key);

    // Hiding a collapsed region is the renderer's job.
    let view = table.view(&HashSet::new());
    assert_eq!(group_member_ids(&view.units, "G1").len(), 2);
}

// ============================================================================
// Degenerate states
// ============================================================================

#[test]
fn test_empty_content_is_ordinary_data() {
    let mut table = TableState::default();
    table.set_content(&[]);

    let view = table.view(&HashSet::new());
    assert!(view.units.is_empty());
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.select_all_state, SelectAllState::None);
}

#[test]
fn test_actions_column_flows_to_view() {
    let mut table = TableState::default();
    table.set_content(&scenario_tree());
    assert!(!table.view(&HashSet::new()).has_actions_column);

    table.set_content(&[row("a", "A", 1.0).slot("actions").into()]);
    assert!(table.view(&HashSet::new()).has_actions_column);
}
