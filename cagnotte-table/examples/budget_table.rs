use std::collections::HashSet;

use cagnotte_dom::{Component, Node, Value};
use cagnotte_table::{PageUnit, TableConfig, TableState};
use simplelog::{Config, LevelFilter, SimpleLogger};

fn expense(id: &str, label: &str, amount: f64) -> Component {
    Component::new("TableRow")
        .prop("row-id", id)
        .prop(
            "sort-values",
            Value::map([
                ("label", Value::from(label)),
                ("amount", Value::from(amount)),
            ]),
        )
        .slot("actions")
}

fn tree() -> Vec<Node> {
    vec![
        Node::comment("monthly budget overview"),
        expense("rent", "Loyer", 850.0).into(),
        Component::new("TableRowGroup")
            .prop("title", "Courses")
            .prop("color", "warning")
            .attr("collapsible")
            .child(expense("g-1", "Épicerie", 210.5))
            .child(expense("g-2", "Marché", 48.0))
            .into(),
        Component::new("TableRowGroup")
            .prop("title", "Loisirs")
            .prop("color", "info")
            .attr("collapsible")
            .attr("collapsed")
            .child(expense("g-3", "Cinéma", 24.0))
            .into(),
        expense("internet", "Internet", 39.99).into(),
    ]
}

fn print_page(table: &TableState, selected: &HashSet<String>) {
    let view = table.view(selected);
    println!(
        "page {}/{} (sort: {:?} {:?})",
        view.current_page, view.total_pages, view.active_sort_key, view.sort_direction
    );
    for unit in &view.units {
        match unit {
            PageUnit::Row(row) => println!("  row {}", row.row_id),
            PageUnit::Group(group, members) => {
                let state = if table.is_group_collapsed(&group.key) {
                    "collapsed"
                } else {
                    "expanded"
                };
                println!("  group {:?} ({state})", group.title);
                for member in members {
                    println!("    row {}", member.row_id);
                }
            }
        }
    }
    println!();
}

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).expect("logger init");

    let mut table = TableState::new(TableConfig {
        page_size: Some(2),
        selectable: true,
    });
    table.set_content(&tree());

    let selected = HashSet::new();
    print_page(&table, &selected);

    table.toggle_sort(Some("amount"), None);
    print_page(&table, &selected);

    table.next_page();
    print_page(&table, &selected);
}
