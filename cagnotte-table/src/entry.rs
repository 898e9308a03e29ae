use std::collections::HashMap;

use cagnotte_dom::{Node, Value};

/// One data row extracted from the composition tree.
///
/// Recreated wholesale on every parse; identity across parses is `row_id`,
/// never object reference.
#[derive(Debug, Clone)]
pub struct RowEntry {
    pub row_id: String,
    /// Owning group key, or `None` for a top-level row.
    pub group_key: Option<String>,
    /// Named fields available to the sort comparator. Absent keys are valid.
    pub sort_values: HashMap<String, Value>,
    /// Whether this row declares an actions region.
    pub has_actions: bool,
    /// Opaque rendering content owned by the caller.
    pub payload: Vec<Node>,
}

/// One collapsible section owning an ordered subset of rows.
#[derive(Debug, Clone)]
pub struct GroupEntry {
    /// Deterministic across re-parses of the same tree, so collapse state
    /// can follow the group.
    pub key: String,
    pub title: String,
    pub collapsible: bool,
    pub color: GroupColor,
    /// Member row ids, in source order.
    pub row_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupColor {
    Primary,
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Neutral,
}

impl GroupColor {
    /// Parse a color prop; anything unrecognized falls back to neutral.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "primary" => Self::Primary,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            "info" => Self::Info,
            _ => Self::Neutral,
        }
    }
}

/// An indivisible item for pagination purposes: one row, or one whole group
/// with its sorted rows attached.
#[derive(Debug, Clone)]
pub enum PageUnit {
    Row(RowEntry),
    Group(GroupEntry, Vec<RowEntry>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}
