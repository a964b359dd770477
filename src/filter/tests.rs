#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::ExpenseId;

fn make_record(id: &str, description: &str, category: &str) -> ExpenseRecord {
    ExpenseRecord {
        id: ExpenseId::from(id),
        amount: dec!(10.00),
        description: description.into(),
        category: category.into(),
        date: "2024-06-20".into(),
        created_at: chrono::Utc::now(),
    }
}

fn sample() -> Vec<ExpenseRecord> {
    vec![
        make_record("1", "Coffee and pastry", "Food & Dining"),
        make_record("2", "Monthly rent payment", "Housing"),
        make_record("3", "Gas station fill-up", "Transportation"),
        make_record("4", "Train ticket", "Transportation"),
    ]
}

fn ids(records: &[ExpenseRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

// ── CategoryFilter ────────────────────────────────────────────

#[test]
fn test_category_filter_parse() {
    assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
    assert_eq!(
        CategoryFilter::parse("Housing"),
        CategoryFilter::Only("Housing".into())
    );
}

#[test]
fn test_category_filter_is_case_sensitive() {
    let only = CategoryFilter::Only("Housing".into());
    assert!(only.matches("Housing"));
    assert!(!only.matches("housing"));
    assert!(CategoryFilter::All.matches("anything"));
}

#[test]
fn test_category_filter_display() {
    assert_eq!(CategoryFilter::All.to_string(), "All categories");
    assert_eq!(CategoryFilter::Only("Travel".into()).to_string(), "Travel");
}

// ── filter ────────────────────────────────────────────────────

#[test]
fn test_empty_search_and_all_returns_everything() {
    let records = sample();
    assert_eq!(filter(&records, "", &CategoryFilter::All), records);
}

#[test]
fn test_search_matches_description_case_insensitive() {
    let records = sample();
    assert_eq!(ids(&filter(&records, "coffee", &CategoryFilter::All)), vec!["1"]);
    assert_eq!(ids(&filter(&records, "COFFEE", &CategoryFilter::All)), vec!["1"]);
    assert_eq!(ids(&filter(&records, "CoFfEe", &CategoryFilter::All)), vec!["1"]);
}

#[test]
fn test_search_matches_category() {
    let records = sample();
    assert_eq!(
        ids(&filter(&records, "transport", &CategoryFilter::All)),
        vec!["3", "4"]
    );
    assert_eq!(ids(&filter(&records, "dining", &CategoryFilter::All)), vec!["1"]);
}

#[test]
fn test_search_substring_in_middle() {
    let records = sample();
    assert_eq!(ids(&filter(&records, "rent", &CategoryFilter::All)), vec!["2"]);
}

#[test]
fn test_search_no_matches() {
    assert!(filter(&sample(), "groceries", &CategoryFilter::All).is_empty());
}

#[test]
fn test_category_only() {
    let records = sample();
    let only = CategoryFilter::Only("Transportation".into());
    assert_eq!(ids(&filter(&records, "", &only)), vec!["3", "4"]);
}

#[test]
fn test_search_and_category_combine() {
    let records = sample();
    let only = CategoryFilter::Only("Transportation".into());
    assert_eq!(ids(&filter(&records, "train", &only)), vec!["4"]);
    assert!(filter(&records, "coffee", &only).is_empty());
}

#[test]
fn test_category_filter_wrong_case_matches_nothing() {
    let only = CategoryFilter::Only("housing".into());
    assert!(filter(&sample(), "", &only).is_empty());
}

#[test]
fn test_filter_preserves_order() {
    let records = sample();
    let result = filter(&records, "t", &CategoryFilter::All);
    let positions: Vec<usize> = result
        .iter()
        .map(|r| records.iter().position(|o| o.id == r.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}
