use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::models::{ExpenseCategory, ExpenseId, ExpenseRecord};

pub(crate) struct JsonImporter;

impl JsonImporter {
    /// Read a JSON array of expense records from `path`.
    pub(crate) fn load(path: &Path) -> Result<Vec<ExpenseRecord>> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let records = Self::parse(&raw)
            .with_context(|| format!("Failed to load expenses from {}", path.display()))?;
        info!(path = %path.display(), count = records.len(), "loaded expenses");
        Ok(records)
    }

    /// Parse a JSON array of records, rejecting duplicate ids.
    pub(crate) fn parse(raw: &str) -> Result<Vec<ExpenseRecord>> {
        let records: Vec<ExpenseRecord> =
            serde_json::from_str(raw).context("Invalid expense JSON")?;

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                anyhow::bail!("Duplicate expense id: {}", record.id);
            }
        }

        Ok(records)
    }
}

/// The three starter records shown on first launch, dated relative to
/// `today` so the dashboard has something in the current month.
pub(crate) fn sample_records(today: NaiveDate) -> Vec<ExpenseRecord> {
    let now = chrono::Utc::now();
    let days_back = |n: u64| {
        let date = today.checked_sub_days(Days::new(n)).unwrap_or(today);
        // Keep samples inside the current month.
        if date.month() == today.month() {
            date
        } else {
            today
        }
    };

    [
        ("1", Decimal::new(2550, 2), "Coffee and pastry", ExpenseCategory::FoodAndDining, today),
        ("2", Decimal::new(120000, 2), "Monthly rent payment", ExpenseCategory::Housing, days_back(5)),
        ("3", Decimal::new(4500, 2), "Gas station fill-up", ExpenseCategory::Transportation, days_back(2)),
    ]
    .into_iter()
    .map(|(id, amount, description, category, date)| ExpenseRecord {
        id: ExpenseId::from(id),
        amount,
        description: description.to_string(),
        category: category.as_str().to_string(),
        date: date.format("%Y-%m-%d").to_string(),
        created_at: now,
    })
    .collect()
}

#[cfg(test)]
#[path = "json_import_tests.rs"]
mod tests;
