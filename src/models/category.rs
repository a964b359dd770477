use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ExpenseCategory {
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    BillsAndUtilities,
    Healthcare,
    Education,
    Travel,
    Housing,
    Insurance,
    Investments,
    Other,
}

impl ExpenseCategory {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Housing => "Housing",
            Self::Insurance => "Insurance",
            Self::Investments => "Investments",
            Self::Other => "Other",
        }
    }

    /// Exact label lookup. Records store the label verbatim, so this is the
    /// match used when bucketing.
    pub(crate) fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == label)
    }

    /// Lenient lookup for typed input (case-insensitive, `&` or `and`).
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase().replace(" and ", " & ");
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == lower)
    }

    pub(crate) fn all() -> &'static [ExpenseCategory] {
        &[
            Self::FoodAndDining,
            Self::Transportation,
            Self::Shopping,
            Self::Entertainment,
            Self::BillsAndUtilities,
            Self::Healthcare,
            Self::Education,
            Self::Travel,
            Self::Housing,
            Self::Insurance,
            Self::Investments,
            Self::Other,
        ]
    }

    /// Position in `all()`, used by the form picker to cycle labels.
    pub(crate) fn index(&self) -> usize {
        Self::all().iter().position(|c| c == self).unwrap_or(0)
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bucket a record's category label falls into. Labels outside the fixed
/// set all share the `Uncategorized` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum CategoryKey {
    Known(ExpenseCategory),
    Uncategorized,
}

impl CategoryKey {
    pub(crate) fn from_label(label: &str) -> Self {
        ExpenseCategory::from_label(label).map_or(Self::Uncategorized, Self::Known)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Known(category) => category.as_str(),
            Self::Uncategorized => "Uncategorized",
        }
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CategoryKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
