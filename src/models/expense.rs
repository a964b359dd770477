use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CategoryKey;

/// Opaque record identifier. Fresh ids are UUID v4 strings; ids read from a
/// file are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct ExpenseId(String);

impl ExpenseId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExpenseRecord {
    pub(crate) id: ExpenseId,
    pub(crate) amount: Decimal,
    pub(crate) description: String,
    pub(crate) category: String,
    /// Format: "YYYY-MM-DD"
    pub(crate) date: String,
    #[serde(default = "Utc::now")]
    pub(crate) created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// The incurred date, or `None` when `date` is not a `YYYY-MM-DD` string.
    pub(crate) fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub(crate) fn category_key(&self) -> CategoryKey {
        CategoryKey::from_label(&self.category)
    }
}

/// User input for a new record, before an id and creation time exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ExpenseDraft {
    pub(crate) amount: Option<Decimal>,
    pub(crate) description: String,
    pub(crate) category: String,
    pub(crate) date: String,
}

impl ExpenseDraft {
    #[cfg(test)]
    pub(crate) fn new(
        amount: Decimal,
        description: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount),
            description: description.into(),
            category: category.into(),
            date: date.into(),
        }
    }
}
