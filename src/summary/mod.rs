//! Derived spending metrics over a snapshot of expense records.
//!
//! Everything here is a pure function of its inputs: the reference date is
//! passed in, never read from the clock.

mod month;

use std::collections::HashSet;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CategoryKey, ExpenseRecord};

pub(crate) use month::MonthKey;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct CategoryTotal {
    pub(crate) category: CategoryKey,
    pub(crate) total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Summary {
    pub(crate) total: Decimal,
    pub(crate) current_month_total: Decimal,
    pub(crate) previous_month_total: Decimal,
    /// Zero whenever the previous month has no positive spend.
    pub(crate) month_over_month_change_percent: Decimal,
    pub(crate) top_category: Option<CategoryTotal>,
    pub(crate) record_count: usize,
    /// Distinct raw category labels, unknown labels counted individually.
    pub(crate) category_count: usize,
    /// Largest first; equal totals keep first-occurrence order.
    pub(crate) by_category: Vec<CategoryTotal>,
}

/// Aggregate `records` relative to the calendar month of `now`.
///
/// Records whose `date` does not parse still count toward `total` and the
/// category sums but toward neither month bucket. Sums saturate at
/// `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
pub(crate) fn summarize(records: &[ExpenseRecord], now: &impl Datelike) -> Summary {
    let current = MonthKey::of(now);
    let previous = current.previous();

    let mut total = Decimal::ZERO;
    let mut current_month_total = Decimal::ZERO;
    let mut previous_month_total = Decimal::ZERO;
    let mut buckets: Vec<CategoryTotal> = Vec::new();
    let mut labels: HashSet<&str> = HashSet::new();

    for record in records {
        total = total.saturating_add(record.amount);
        labels.insert(record.category.as_str());

        let key = record.category_key();
        match buckets.iter_mut().find(|b| b.category == key) {
            Some(bucket) => bucket.total = bucket.total.saturating_add(record.amount),
            None => buckets.push(CategoryTotal {
                category: key,
                total: record.amount,
            }),
        }

        if let Some(date) = record.parsed_date() {
            if current.contains(&date) {
                current_month_total = current_month_total.saturating_add(record.amount);
            } else if previous.contains(&date) {
                previous_month_total = previous_month_total.saturating_add(record.amount);
            }
        }
    }

    let top_category = top_bucket(&buckets);

    let mut by_category = buckets;
    by_category.sort_by(|a, b| b.total.cmp(&a.total));

    Summary {
        total,
        current_month_total,
        previous_month_total,
        month_over_month_change_percent: month_over_month_change(
            current_month_total,
            previous_month_total,
        ),
        top_category,
        record_count: records.len(),
        category_count: labels.len(),
        by_category,
    }
}

/// Percentage change from `previous` to `current`. A previous month with no
/// positive spend yields zero rather than an undefined ratio.
pub(crate) fn month_over_month_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    current
        .checked_sub(previous)
        .and_then(|delta| delta.checked_div(previous))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

// Strict `>` keeps the earliest bucket on ties; buckets are in
// first-occurrence order.
fn top_bucket(buckets: &[CategoryTotal]) -> Option<CategoryTotal> {
    let mut best: Option<CategoryTotal> = None;
    for bucket in buckets {
        match best {
            Some(current) if bucket.total <= current.total => {}
            _ => best = Some(*bucket),
        }
    }
    best
}
