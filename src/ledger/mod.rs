//! Snapshot-style updates to the in-memory record collection.
//!
//! Every operation returns a new collection; the input slice is never
//! modified.

mod error;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{ExpenseDraft, ExpenseId, ExpenseRecord};

pub(crate) use error::DraftError;

/// Validate `draft`, stamp it with a fresh id and the current time, and
/// return a collection with the new record first.
pub(crate) fn add_record(
    collection: &[ExpenseRecord],
    draft: ExpenseDraft,
) -> Result<Vec<ExpenseRecord>, DraftError> {
    add_record_at(collection, draft, Utc::now())
}

/// `add_record` with an explicit creation timestamp.
pub(crate) fn add_record_at(
    collection: &[ExpenseRecord],
    draft: ExpenseDraft,
    created_at: DateTime<Utc>,
) -> Result<Vec<ExpenseRecord>, DraftError> {
    let record = build_record(draft, created_at)?;
    debug!(id = %record.id, amount = %record.amount, category = %record.category, "adding expense");

    let mut next = Vec::with_capacity(collection.len() + 1);
    next.push(record);
    next.extend_from_slice(collection);
    Ok(next)
}

/// Return the collection without the record matching `id`. Unknown ids
/// leave the collection unchanged.
pub(crate) fn delete_record(collection: &[ExpenseRecord], id: &ExpenseId) -> Vec<ExpenseRecord> {
    let next: Vec<ExpenseRecord> = collection.iter().filter(|r| &r.id != id).cloned().collect();
    if next.len() == collection.len() {
        debug!(%id, "delete ignored, no such expense");
    } else {
        debug!(%id, "deleted expense");
    }
    next
}

pub(crate) fn find_record<'a>(
    collection: &'a [ExpenseRecord],
    id: &ExpenseId,
) -> Option<&'a ExpenseRecord> {
    collection.iter().find(|r| &r.id == id)
}

fn build_record(draft: ExpenseDraft, created_at: DateTime<Utc>) -> Result<ExpenseRecord, DraftError> {
    let amount = draft.amount.ok_or(DraftError::MissingAmount)?;
    let description = draft.description.trim();
    if description.is_empty() {
        return Err(DraftError::MissingDescription);
    }
    let category = draft.category.trim();
    if category.is_empty() {
        return Err(DraftError::MissingCategory);
    }

    Ok(ExpenseRecord {
        id: ExpenseId::generate(),
        amount,
        description: description.to_string(),
        category: category.to_string(),
        date: draft.date.trim().to_string(),
        created_at,
    })
}

#[cfg(test)]
mod tests;
