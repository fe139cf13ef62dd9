mod common;

use common::{ids, schema, users};
use dataview_lib::model::{Field, FieldKind, Record, Schema};
use dataview_lib::query::{FieldFilter, FilterState, apply_filters};

#[test]
fn test_empty_state_keeps_everything_in_order() {
    let users = users();
    let filtered = apply_filters(&schema(), &users, &FilterState::default());
    assert_eq!(
        ids(&filtered),
        vec!["u1", "u2", "u3", "u4", "u5", "u6", "u7", "u8"]
    );
}

#[test]
fn test_query_is_trimmed_and_case_insensitive() {
    let users = users();
    let filters = FilterState::new().with_query("  GRACE ");
    let filtered = apply_filters(&schema(), &users, &filters);
    assert_eq!(ids(&filtered), vec!["u3"]);
}

#[test]
fn test_query_matches_any_searchable_field() {
    let users = users();

    // "admin" only appears in the role column.
    let filtered = apply_filters(&schema(), &users, &FilterState::new().with_query("admin"));
    assert_eq!(ids(&filtered), vec!["u1", "u3", "u7"]);

    // Email is searchable too.
    let filtered = apply_filters(&schema(), &users, &FilterState::new().with_query("ken@"));
    assert_eq!(ids(&filtered), vec!["u6"]);
}

#[test]
fn test_query_ignores_non_searchable_fields() {
    let users = users();
    // Status is not searchable, so "pending" finds nothing.
    let filtered = apply_filters(&schema(), &users, &FilterState::new().with_query("pending"));
    assert!(filtered.is_empty());
}

#[test]
fn test_discrete_filter_is_exact_and_case_sensitive() {
    let users = users();
    let filters = FilterState::new().with_filter("status", FieldFilter::equals("active"));
    let filtered = apply_filters(&schema(), &users, &filters);
    assert_eq!(ids(&filtered), vec!["u1", "u3", "u5", "u8"]);

    let filters = FilterState::new().with_filter("status", FieldFilter::equals("Active"));
    assert!(apply_filters(&schema(), &users, &filters).is_empty());
}

#[test]
fn test_query_and_filters_combine_with_and() {
    let users = users();
    let filters = FilterState::new()
        .with_query("a")
        .with_filter("status", FieldFilter::equals("active"))
        .with_filter("role", FieldFilter::equals("Editor"));
    let filtered = apply_filters(&schema(), &users, &filters);
    assert_eq!(ids(&filtered), vec!["u5", "u8"]);
}

#[test]
fn test_adding_a_filter_never_grows_the_result() {
    let users = users();
    let schema = schema();

    let base = FilterState::new().with_query("e");
    let narrower = base
        .clone()
        .with_filter("role", FieldFilter::equals("Admin"));
    let narrowest = narrower
        .clone()
        .with_filter("status", FieldFilter::equals("pending"));

    let a = apply_filters(&schema, &users, &base).len();
    let b = apply_filters(&schema, &users, &narrower).len();
    let c = apply_filters(&schema, &users, &narrowest).len();

    assert!(a <= users.len());
    assert!(b <= a);
    assert!(c <= b);
    assert_eq!(c, 1);
}

#[test]
fn test_unknown_field_fails_instead_of_erroring() {
    let users = users();
    let filters = FilterState::new().with_filter("department", FieldFilter::equals("R&D"));
    assert!(apply_filters(&schema(), &users, &filters).is_empty());
}

#[test]
fn test_empty_source() {
    let none: Vec<common::User> = Vec::new();
    let filters = FilterState::new().with_query("ada");
    assert!(apply_filters(&schema(), &none, &filters).is_empty());
}

#[test]
fn test_field_absent_on_some_dynamic_records() {
    let schema = Schema::new([
        Field::dynamic("name", FieldKind::Text).searchable(),
        Field::dynamic("team", FieldKind::Enum),
    ])
    .unwrap();
    let records = vec![
        Record::new("r1").set("name", "Ada").set("team", "core"),
        Record::new("r2").set("name", "Brian"),
        Record::new("r3").set("name", "Grace").set("team", "core"),
    ];

    let filters = FilterState::new().with_filter("team", FieldFilter::equals("core"));
    let filtered = apply_filters(&schema, &records, &filters);
    let names: Vec<&str> = filtered
        .iter()
        .map(|r| r.get_string("name").unwrap().unwrap())
        .collect();
    assert_eq!(names, vec!["Ada", "Grace"]);
}
