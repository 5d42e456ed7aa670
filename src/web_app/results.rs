// web_app/results.rs - Result table derivation
//
// Pure functions between the decoded records and the rendered table:
// flattening values to display strings, computing the column union,
// the client-side substring filter, and pagination windowing.
// The page re-derives all of this through signals; nothing here holds
// state of its own.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 12;

/// Placeholder rendered for absent or null fields.
pub const EMPTY_CELL: &str = "-";

/// One flattened table row: field name to display string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    cells: BTreeMap<String, String>,
}

impl ResultRow {
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let cells = record
            .iter()
            .map(|(key, value)| (key.clone(), flatten_value(value)))
            .collect();
        ResultRow { cells }
    }

    /// Display value for a column, `"-"` when the row lacks it.
    pub fn get(&self, column: &str) -> &str {
        self.cells
            .get(column)
            .map(String::as_str)
            .unwrap_or(EMPTY_CELL)
    }

    /// Case-insensitive substring match against every cell.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.cells
            .values()
            .any(|cell| cell.to_lowercase().contains(needle_lower))
    }

    /// All (column, value) pairs, for the record detail view.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A derived table: ordered columns plus flattened rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl RowSet {
    /// Build a table from decoded records.
    ///
    /// The column set is the union of keys across all records: preferred
    /// keys (in their given order) first, everything else in first-seen
    /// order.
    pub fn from_records(records: &[Map<String, Value>], preferred: &[&str]) -> Self {
        let mut columns: Vec<String> = Vec::new();

        for key in preferred {
            if records.iter().any(|r| r.contains_key(*key)) {
                columns.push((*key).to_string());
            }
        }
        for record in records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records.iter().map(ResultRow::from_record).collect();
        RowSet { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Render a JSON value as a table cell string.
///
/// Strings pass through verbatim; scalars stringify; arrays and nested
/// objects collapse to compact JSON; null becomes the placeholder.
pub fn flatten_value(value: &Value) -> String {
    match value {
        Value::Null => EMPTY_CELL.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| EMPTY_CELL.to_string()),
    }
}

/// Filter rows by a case-insensitive substring over every cell.
///
/// An empty or whitespace filter keeps everything.
pub fn filter_rows(rows: &[ResultRow], filter: &str) -> Vec<ResultRow> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.matches(&needle))
        .cloned()
        .collect()
}

/// Pagination window over the filtered rows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    /// 0-indexed current page.
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        PaginationState {
            current_page: 0,
            page_size: PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn total_pages(&self, total_items: usize) -> usize {
        if total_items == 0 {
            0
        } else {
            total_items.div_ceil(self.page_size)
        }
    }

    /// Current page clamped into the valid range for `total_items`.
    pub fn clamped_page(&self, total_items: usize) -> usize {
        let last = self.total_pages(total_items).saturating_sub(1);
        self.current_page.min(last)
    }

    /// Slice of `items` visible on the (clamped) current page.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let page = self.clamped_page(items.len());
        let start = page * self.page_size;
        let end = (start + self.page_size).min(items.len());
        if start >= items.len() {
            &[]
        } else {
            &items[start..end]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Value) -> Vec<Map<String, Value>> {
        crate::web_app::model::extract_records(&values)
    }

    #[test]
    fn test_flatten_value_variants() {
        assert_eq!(flatten_value(&json!(null)), "-");
        assert_eq!(flatten_value(&json!("plain")), "plain");
        assert_eq!(flatten_value(&json!(42)), "42");
        assert_eq!(flatten_value(&json!(true)), "true");
        assert_eq!(flatten_value(&json!([1, 2])), "[1,2]");
        assert_eq!(flatten_value(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_column_union_with_preferred_first() {
        let recs = records(json!([
            {"zeta": 1, "email": "a@b.c"},
            {"email": "d@e.f", "alpha": 2}
        ]));
        let set = RowSet::from_records(&recs, &["email", "password"]);
        // "password" never appears, so it is omitted. "zeta" is seen
        // before "alpha" across the record stream.
        assert_eq!(set.columns, vec!["email", "zeta", "alpha"]);
    }

    #[test]
    fn test_missing_cells_render_placeholder() {
        let recs = records(json!([{"email": "a@b.c"}, {"phone": "123"}]));
        let set = RowSet::from_records(&recs, &["email", "phone"]);
        assert_eq!(set.rows[0].get("phone"), "-");
        assert_eq!(set.rows[1].get("email"), "-");
        assert_eq!(set.rows[1].get("phone"), "123");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let recs = records(json!([
            {"email": "Alice@Example.com"},
            {"email": "bob@test.org"}
        ]));
        let set = RowSet::from_records(&recs, &[]);
        let hits = filter_rows(&set.rows, "ALICE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].get("email"), "Alice@Example.com");
    }

    #[test]
    fn test_filter_absent_needle_yields_empty() {
        let recs = records(json!([{"email": "a@b.c"}, {"email": "d@e.f"}]));
        let set = RowSet::from_records(&recs, &[]);
        assert!(filter_rows(&set.rows, "not-in-any-row").is_empty());
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let recs = records(json!([{"a": 1}, {"a": 2}, {"a": 3}]));
        let set = RowSet::from_records(&recs, &[]);
        assert_eq!(filter_rows(&set.rows, "   ").len(), 3);
    }

    #[test]
    fn test_filter_matches_numeric_cells() {
        let recs = records(json!([{"zip": 90210}, {"zip": 10001}]));
        let set = RowSet::from_records(&recs, &[]);
        assert_eq!(filter_rows(&set.rows, "902").len(), 1);
    }

    #[test]
    fn test_page_count_and_first_window() {
        let items: Vec<u32> = (0..25).collect();
        let pager = PaginationState::default();
        assert_eq!(pager.total_pages(items.len()), 3);
        assert_eq!(pager.page_slice(&items).len(), PAGE_SIZE);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<u32> = (0..25).collect();
        let pager = PaginationState {
            current_page: 2,
            page_size: PAGE_SIZE,
        };
        let window = pager.page_slice(&items);
        assert_eq!(window.len(), 1);
        assert_eq!(window[0], 24);
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let items: Vec<u32> = (0..5).collect();
        let pager = PaginationState {
            current_page: 99,
            page_size: PAGE_SIZE,
        };
        assert_eq!(pager.clamped_page(items.len()), 0);
        assert_eq!(pager.page_slice(&items).len(), 5);
    }

    #[test]
    fn test_empty_items_have_no_pages() {
        let items: Vec<u32> = vec![];
        let pager = PaginationState::default();
        assert_eq!(pager.total_pages(0), 0);
        assert!(pager.page_slice(&items).is_empty());
    }

    #[test]
    fn test_fewer_items_than_page_size() {
        let items: Vec<u32> = (0..7).collect();
        let pager = PaginationState::default();
        assert_eq!(pager.total_pages(items.len()), 1);
        assert_eq!(pager.page_slice(&items).len(), 7);
    }
}
