use crate::models::ExpenseRecord;

/// Sentinel accepted by `CategoryFilter::parse` for "no category filter".
pub(crate) const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive label match.
    Only(String),
}

impl CategoryFilter {
    pub(crate) fn parse(s: &str) -> Self {
        if s == ALL_CATEGORIES || s.is_empty() {
            Self::All
        } else {
            Self::Only(s.to_string())
        }
    }

    pub(crate) fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => label == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All categories"),
            Self::Only(label) => write!(f, "{label}"),
        }
    }
}

/// Records whose description or category contains `search_term`
/// (case-insensitive) and whose category passes `category`. Order is kept.
pub(crate) fn filter(
    collection: &[ExpenseRecord],
    search_term: &str,
    category: &CategoryFilter,
) -> Vec<ExpenseRecord> {
    let needle = search_term.to_lowercase();
    collection
        .iter()
        .filter(|r| matches_search(r, &needle) && category.matches(&r.category))
        .cloned()
        .collect()
}

fn matches_search(record: &ExpenseRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.description.to_lowercase().contains(needle)
        || record.category.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests;
