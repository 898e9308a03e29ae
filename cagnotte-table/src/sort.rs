use std::cmp::Ordering;
use std::sync::Arc;

use cagnotte_dom::Value;

use crate::entry::{RowEntry, SortDirection};

/// A column-declared comparator over two sort values.
///
/// Missing values arrive as `Value::Null` so comparators never need to
/// handle absence themselves.
pub type SortComparator = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// Stable-sort a copy of `rows` by `sort_values[key]`.
///
/// With no active key the parse order is returned untouched; that is the
/// contract for "no active sort". Descending order is the exact reverse of
/// ascending, including the null placement.
pub fn sort_rows(
    rows: &[RowEntry],
    key: Option<&str>,
    direction: SortDirection,
    comparator: Option<&SortComparator>,
) -> Vec<RowEntry> {
    let Some(key) = key else {
        return rows.to_vec();
    };

    let null = Value::Null;
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let va = a.sort_values.get(key);
        let vb = b.sort_values.get(key);
        match comparator {
            Some(compare) => compare(va.unwrap_or(&null), vb.unwrap_or(&null)),
            None => default_compare(va, vb),
        }
    });
    if direction == SortDirection::Descending {
        sorted.reverse();
    }
    sorted
}

/// Default comparator: nulls last, numeric-aware, accent- and
/// case-insensitive text fallback.
pub fn default_compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|value| !value.is_null());
    let b = b.filter(|value| !value.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match (numeric_value(a), numeric_value(b)) {
            (Some(na), Some(nb)) => na.partial_cmp(&nb).unwrap_or(Ordering::Equal),
            _ => fold_text(&a.as_text()).cmp(&fold_text(&b.as_text())),
        },
    }
}

/// Read a value as a number if it is one, or looks like one.
///
/// Text is accepted after stripping space-like thousands separators and
/// converting a decimal comma to a dot: `"1 234,5"` reads as 1234.5.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) if n.is_finite() => Some(*n),
        Value::Text(text) => {
            let cleaned: String = text
                .chars()
                .filter(|c| !matches!(c, ' ' | '\u{00a0}' | '\u{202f}'))
                .map(|c| if c == ',' { '.' } else { c })
                .collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

/// Case fold plus base-letter fold for the Latin accents the comparator is
/// expected to ignore (base sensitivity).
fn fold_text(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_char)
        .collect()
}

fn fold_char(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ì'..='ï' | 'ī' | 'į' | 'ı' => 'i',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ç' | 'ć' | 'č' => 'c',
        'ñ' | 'ń' => 'n',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_parsing_accepts_locale_formats() {
        assert_eq!(numeric_value(&Value::Text("1 234,5".into())), Some(1234.5));
        assert_eq!(
            numeric_value(&Value::Text("1\u{202f}234,5".into())),
            Some(1234.5)
        );
        assert_eq!(numeric_value(&Value::Text("2".into())), Some(2.0));
        assert_eq!(numeric_value(&Value::Text("abc".into())), None);
        assert_eq!(numeric_value(&Value::Text("".into())), None);
        assert_eq!(numeric_value(&Value::Number(3.5)), Some(3.5));
        assert_eq!(numeric_value(&Value::Bool(true)), None);
    }

    #[test]
    fn fold_ignores_case_and_accents() {
        assert_eq!(fold_text("Épargne"), fold_text("epargne"));
        assert_eq!(fold_text("Dépenses"), fold_text("DEPENSES"));
        assert!(fold_text("alpha") < fold_text("Beta"));
    }
}
