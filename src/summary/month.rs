use chrono::Datelike;

/// A calendar month, independent of day and time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct MonthKey {
    pub(crate) year: i32,
    /// 1-based, January = 1.
    pub(crate) month: u32,
}

impl MonthKey {
    pub(crate) fn of(date: &impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month before this one; January rolls back to December of the
    /// prior year.
    pub(crate) fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub(crate) fn contains(self, date: &impl Datelike) -> bool {
        Self::of(date) == self
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
