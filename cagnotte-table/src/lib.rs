pub mod entry;
pub mod paginate;
pub mod parse;
pub mod select;
pub mod sort;
pub mod state;

pub use entry::{GroupColor, GroupEntry, PageUnit, RowEntry, SortDirection};
pub use paginate::{build_units, page_slice, total_pages};
pub use parse::{parse, ParseOutcome, TopLevelSlot};
pub use select::{is_selected, select_all_state, toggle_all, toggle_row, SelectAllState};
pub use sort::{default_compare, sort_rows, SortComparator};
pub use state::{Column, SortSession, TableConfig, TableState, TableView};
