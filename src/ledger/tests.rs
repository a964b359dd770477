#![allow(clippy::unwrap_used)]

use chrono::TimeZone;
use rust_decimal_macros::dec;

use super::*;

fn make_draft(description: &str) -> ExpenseDraft {
    ExpenseDraft::new(dec!(12.00), description, "Food & Dining", "2024-06-20")
}

fn seed() -> Vec<ExpenseRecord> {
    let first = add_record(&[], make_draft("Lunch")).unwrap();
    add_record(&first, make_draft("Dinner")).unwrap()
}

// ── add_record ────────────────────────────────────────────────

#[test]
fn test_add_prepends_new_record() {
    let records = seed();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].description, "Dinner");
    assert_eq!(records[1].description, "Lunch");
}

#[test]
fn test_add_does_not_touch_input() {
    let records = seed();
    let before = records.clone();
    let next = add_record(&records, make_draft("Snack")).unwrap();
    assert_eq!(records, before);
    assert_eq!(next.len(), 3);
    assert_eq!(&next[1..], &before[..]);
}

#[test]
fn test_add_assigns_unique_ids() {
    let mut records = Vec::new();
    for i in 0..20 {
        records = add_record(&records, make_draft(&format!("Item {i}"))).unwrap();
    }
    let ids: std::collections::HashSet<_> = records.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), 20);
}

#[test]
fn test_add_at_uses_given_timestamp() {
    let at = Utc.with_ymd_and_hms(2024, 6, 20, 9, 30, 0).unwrap();
    let records = add_record_at(&[], make_draft("Coffee"), at).unwrap();
    assert_eq!(records[0].created_at, at);
}

#[test]
fn test_add_copies_draft_fields() {
    let draft = ExpenseDraft::new(dec!(45.00), "  Gas station fill-up ", "Transportation", "2024-06-18");
    let records = add_record(&[], draft).unwrap();
    let record = &records[0];
    assert_eq!(record.amount, dec!(45.00));
    assert_eq!(record.description, "Gas station fill-up");
    assert_eq!(record.category, "Transportation");
    assert_eq!(record.date, "2024-06-18");
}

#[test]
fn test_add_keeps_unknown_category() {
    let draft = ExpenseDraft::new(dec!(3), "Treats", "Pets", "2024-06-18");
    let records = add_record(&[], draft).unwrap();
    assert_eq!(records[0].category, "Pets");
}

#[test]
fn test_add_allows_negative_amount() {
    let draft = ExpenseDraft::new(dec!(-5), "Refund", "Shopping", "2024-06-18");
    assert!(add_record(&[], draft).is_ok());
}

// ── draft validation ──────────────────────────────────────────

#[test]
fn test_add_rejects_missing_amount() {
    let draft = ExpenseDraft {
        amount: None,
        ..make_draft("Lunch")
    };
    assert_eq!(add_record(&[], draft), Err(DraftError::MissingAmount));
}

#[test]
fn test_add_rejects_blank_description() {
    assert_eq!(
        add_record(&[], make_draft("   ")),
        Err(DraftError::MissingDescription)
    );
}

#[test]
fn test_add_rejects_missing_category() {
    let draft = ExpenseDraft {
        category: String::new(),
        ..make_draft("Lunch")
    };
    assert_eq!(add_record(&[], draft), Err(DraftError::MissingCategory));
}

#[test]
fn test_draft_error_messages() {
    assert_eq!(DraftError::MissingAmount.to_string(), "Amount is required");
    assert_eq!(
        DraftError::MissingDescription.to_string(),
        "Description is required"
    );
    assert_eq!(DraftError::MissingCategory.to_string(), "Category is required");
}

// ── delete_record ─────────────────────────────────────────────

#[test]
fn test_add_then_delete_restores_collection() {
    let original = seed();
    let added = add_record(&original, make_draft("Snack")).unwrap();
    let new_id = added[0].id.clone();
    let restored = delete_record(&added, &new_id);
    assert_eq!(restored, original);
}

#[test]
fn test_delete_removes_only_matching_record() {
    let records = seed();
    let target = records[1].id.clone();
    let next = delete_record(&records, &target);
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].description, "Dinner");
    assert!(find_record(&next, &target).is_none());
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let records = seed();
    let next = delete_record(&records, &ExpenseId::from("missing"));
    assert_eq!(next, records);
}

#[test]
fn test_delete_from_empty() {
    assert!(delete_record(&[], &ExpenseId::from("1")).is_empty());
}

// ── find_record ───────────────────────────────────────────────

#[test]
fn test_find_record() {
    let records = seed();
    let id = records[0].id.clone();
    assert_eq!(find_record(&records, &id).unwrap().description, "Dinner");
    assert!(find_record(&records, &ExpenseId::from("nope")).is_none());
}
