#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::*;
use crate::import::sample_records;

fn june_20() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
}

#[test]
fn test_summary_text() {
    let records = sample_records(june_20());
    let text = summary_text(&summarize(&records, &june_20()), june_20());

    assert!(text.starts_with("Expense summary as of 2024-06-20"));
    assert!(text.contains("$1,270.50"));
    assert!(text.contains("(3 expenses, 3 categories)"));
    assert!(text.contains("(2024-06)"));
    assert!(text.contains("(2024-05)"));
    assert!(text.contains("Top category:   Housing ($1,200.00)"));
    assert!(text.contains("By category:"));
}

#[test]
fn test_summary_text_empty() {
    let text = summary_text(&summarize(&[], &june_20()), june_20());
    assert!(text.contains("Top category:   None"));
    assert!(text.contains("+0.0%"));
    assert!(!text.contains("By category:"));
}

#[test]
fn test_list_text() {
    let text = list_text(&sample_records(june_20()));
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().next().unwrap().starts_with("2024-06-20  Coffee and pastry"));
    assert!(text.ends_with("3 expenses\n"));
}

#[test]
fn test_list_text_empty() {
    assert_eq!(list_text(&[]), "No expenses found\n");
}

#[test]
fn test_input_file_requires_path() {
    let args: Vec<String> = vec!["--json".into()];
    let err = input_file(&args, "summary <file.json>").unwrap_err();
    assert_eq!(err.to_string(), "Usage: summary <file.json>");

    let missing: Vec<String> = vec!["/nonexistent/expenses.json".into()];
    let err = input_file(&missing, "summary <file.json>").unwrap_err();
    assert!(err.to_string().starts_with("File not found"));
}

#[test]
fn test_input_file_exists() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let args: Vec<String> = vec![file.path().display().to_string(), "--json".into()];
    assert_eq!(input_file(&args, "usage").unwrap(), file.path());
}
