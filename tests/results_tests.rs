// tests/results_tests.rs - Result derivation properties
//
// The table properties from the page contract: column union with
// preferred ordering, substring filtering, and fixed-window pagination.

use serde_json::json;
use tracked::web_app::model::{extract_records, Source};
use tracked::web_app::results::*;

fn n_records(n: usize) -> Vec<serde_json::Map<String, serde_json::Value>> {
    extract_records(&json!((0..n)
        .map(|i| json!({"email": format!("user{i}@example.com"), "password": format!("pw{i}")}))
        .collect::<Vec<_>>()))
}

#[test]
fn test_first_page_shows_min_of_n_and_page_size() {
    for n in [0usize, 1, 5, 12, 13, 30, 100] {
        let records = n_records(n);
        let set = RowSet::from_records(&records, Source::LeakCheck.preferred_columns());
        let pager = PaginationState::default();
        assert_eq!(
            pager.page_slice(&set.rows).len(),
            n.min(PAGE_SIZE),
            "N = {n}"
        );
    }
}

#[test]
fn test_total_pages_is_ceiling_division() {
    let pager = PaginationState::default();
    for (n, expected) in [(0usize, 0usize), (1, 1), (12, 1), (13, 2), (24, 2), (25, 3)] {
        assert_eq!(pager.total_pages(n), expected, "N = {n}");
    }
}

#[test]
fn test_absent_filter_string_yields_empty_set() {
    let records = n_records(20);
    let set = RowSet::from_records(&records, &[]);
    let filtered = filter_rows(&set.rows, "definitely-not-present");
    assert!(filtered.is_empty());
}

#[test]
fn test_filter_then_paginate() {
    let records = n_records(30);
    let set = RowSet::from_records(&records, &[]);

    // "user2" matches user2 and user20..user29
    let filtered = filter_rows(&set.rows, "USER2");
    assert_eq!(filtered.len(), 11);

    let pager = PaginationState::default();
    assert_eq!(pager.total_pages(filtered.len()), 1);
    assert_eq!(pager.page_slice(&filtered).len(), 11);
}

#[test]
fn test_preferred_columns_lead_the_union() {
    let records = extract_records(&json!([
        {"extra": 1, "password": "x", "email": "a@b.c"},
        {"breach": "Dump", "other": 2}
    ]));
    let set = RowSet::from_records(&records, Source::LeakCheck.preferred_columns());
    // email, password, breach are preferred (in that relative order);
    // extra and other trail in first-seen order.
    let email_pos = set.columns.iter().position(|c| c == "email").unwrap();
    let breach_pos = set.columns.iter().position(|c| c == "breach").unwrap();
    let extra_pos = set.columns.iter().position(|c| c == "extra").unwrap();
    assert!(email_pos < breach_pos);
    assert!(breach_pos < extra_pos);
}

#[test]
fn test_rows_without_a_column_render_dash() {
    let records = extract_records(&json!([{"email": "a@b.c"}, {"phone": "555"}]));
    let set = RowSet::from_records(&records, &["email", "phone"]);
    assert_eq!(set.rows[0].get("phone"), "-");
    assert_eq!(set.rows[1].get("email"), "-");
}

#[test]
fn test_nested_values_are_searchable() {
    let records = extract_records(&json!([
        {"profile": {"city": "Berlin"}},
        {"profile": {"city": "Lagos"}}
    ]));
    let set = RowSet::from_records(&records, &[]);
    // Nested objects collapse to compact JSON, which the filter scans.
    assert_eq!(filter_rows(&set.rows, "berlin").len(), 1);
}

#[test]
fn test_filter_change_with_stale_page_still_renders() {
    // Filtering can shrink the set below the current page start; the
    // window clamps instead of rendering nothing.
    let records = n_records(40);
    let set = RowSet::from_records(&records, &[]);
    let pager = PaginationState {
        current_page: 3,
        page_size: PAGE_SIZE,
    };
    let filtered = filter_rows(&set.rows, "user1@"); // exactly one row
    assert_eq!(filtered.len(), 1);
    assert_eq!(pager.page_slice(&filtered).len(), 1);
}
