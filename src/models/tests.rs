#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn make_record(category: &str, date: &str) -> ExpenseRecord {
    ExpenseRecord {
        id: ExpenseId::from("1"),
        amount: dec!(25.50),
        description: "Coffee and pastry".into(),
        category: category.into(),
        date: date.into(),
        created_at: chrono::Utc::now(),
    }
}

// ── ExpenseCategory ───────────────────────────────────────────

#[test]
fn test_category_all_has_twelve_labels() {
    let all = ExpenseCategory::all();
    assert_eq!(all.len(), 12);
    assert_eq!(all[0], ExpenseCategory::FoodAndDining);
    assert_eq!(all[11], ExpenseCategory::Other);
}

#[test]
fn test_category_as_str() {
    assert_eq!(ExpenseCategory::FoodAndDining.as_str(), "Food & Dining");
    assert_eq!(ExpenseCategory::BillsAndUtilities.as_str(), "Bills & Utilities");
    assert_eq!(ExpenseCategory::Investments.as_str(), "Investments");
    assert_eq!(format!("{}", ExpenseCategory::Travel), "Travel");
}

#[test]
fn test_category_from_label_is_exact() {
    assert_eq!(
        ExpenseCategory::from_label("Housing"),
        Some(ExpenseCategory::Housing)
    );
    assert_eq!(ExpenseCategory::from_label("housing"), None);
    assert_eq!(ExpenseCategory::from_label(" Housing"), None);
}

#[test]
fn test_category_parse_is_lenient() {
    assert_eq!(
        ExpenseCategory::parse("food & dining"),
        Some(ExpenseCategory::FoodAndDining)
    );
    assert_eq!(
        ExpenseCategory::parse("Bills and Utilities"),
        Some(ExpenseCategory::BillsAndUtilities)
    );
    assert_eq!(
        ExpenseCategory::parse("  TRAVEL "),
        Some(ExpenseCategory::Travel)
    );
    assert_eq!(ExpenseCategory::parse("Groceries"), None);
}

#[test]
fn test_category_label_roundtrip() {
    for c in ExpenseCategory::all() {
        assert_eq!(ExpenseCategory::from_label(c.as_str()), Some(*c));
        assert_eq!(ExpenseCategory::all()[c.index()], *c);
    }
}

// ── CategoryKey ───────────────────────────────────────────────

#[test]
fn test_category_key_known_and_unknown() {
    assert_eq!(
        CategoryKey::from_label("Shopping"),
        CategoryKey::Known(ExpenseCategory::Shopping)
    );
    assert_eq!(CategoryKey::from_label("Pets"), CategoryKey::Uncategorized);
    assert_eq!(CategoryKey::from_label(""), CategoryKey::Uncategorized);
    assert_eq!(CategoryKey::Uncategorized.as_str(), "Uncategorized");
}

#[test]
fn test_category_key_serializes_as_label() {
    let json = serde_json::to_string(&CategoryKey::Known(ExpenseCategory::Housing)).unwrap();
    assert_eq!(json, "\"Housing\"");
}

// ── ExpenseRecord ─────────────────────────────────────────────

#[test]
fn test_record_parsed_date() {
    let record = make_record("Other", "2024-06-20");
    assert_eq!(
        record.parsed_date(),
        chrono::NaiveDate::from_ymd_opt(2024, 6, 20)
    );
}

#[test]
fn test_record_malformed_date_is_none() {
    assert!(make_record("Other", "").parsed_date().is_none());
    assert!(make_record("Other", "06/20/2024").parsed_date().is_none());
    assert!(make_record("Other", "2024-02-30").parsed_date().is_none());
}

#[test]
fn test_record_category_key() {
    assert_eq!(
        make_record("Food & Dining", "2024-06-20").category_key(),
        CategoryKey::Known(ExpenseCategory::FoodAndDining)
    );
    assert_eq!(
        make_record("Snacks", "2024-06-20").category_key(),
        CategoryKey::Uncategorized
    );
}

#[test]
fn test_record_deserializes_camel_case() {
    let json = r#"{
        "id": "1",
        "amount": 25.5,
        "description": "Coffee and pastry",
        "category": "Food & Dining",
        "date": "2024-06-20",
        "createdAt": "2024-06-20T10:00:00Z"
    }"#;
    let record: ExpenseRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id.as_str(), "1");
    assert_eq!(record.amount, dec!(25.5));
    assert_eq!(record.category, "Food & Dining");
    assert_eq!(record.created_at.to_rfc3339(), "2024-06-20T10:00:00+00:00");
}

#[test]
fn test_record_missing_created_at_defaults() {
    let json = r#"{"id":"7","amount":"12.00","description":"Bus","category":"Transportation","date":"2024-06-01"}"#;
    let record: ExpenseRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.amount, dec!(12.00));
}

// ── ExpenseId ─────────────────────────────────────────────────

#[test]
fn test_generated_ids_are_unique() {
    let a = ExpenseId::generate();
    let b = ExpenseId::generate();
    assert_ne!(a, b);
    assert!(!a.as_str().is_empty());
}

// ── ExpenseDraft ──────────────────────────────────────────────

#[test]
fn test_draft_new() {
    let draft = ExpenseDraft::new(dec!(4.50), "Coffee", "Food & Dining", "2024-06-20");
    assert_eq!(draft.amount, Some(dec!(4.50)));
    assert_eq!(draft.description, "Coffee");
    assert_eq!(draft.category, "Food & Dining");
    assert_eq!(draft.date, "2024-06-20");
}

#[test]
fn test_draft_default_is_empty() {
    let draft = ExpenseDraft::default();
    assert!(draft.amount.is_none());
    assert!(draft.description.is_empty());
}
