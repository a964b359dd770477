use anyhow::Result;
use chrono::NaiveDate;

use crate::config::parse_date;
use crate::filter::{filter, CategoryFilter};
use crate::ledger::{self, DraftError};
use crate::models::{ExpenseCategory, ExpenseDraft, ExpenseId, ExpenseRecord};
use crate::summary::{summarize, MonthKey, Summary};
use crate::ui::util::parse_amount_input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Expenses,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Expenses]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Expenses => write!(f, "Expenses"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Form,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Form => write!(f, "ADD"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PendingAction {
    DeleteExpense { id: ExpenseId, description: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Amount,
    Description,
    Category,
    Date,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Amount, Self::Description, Self::Category, Self::Date]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Description => "Description",
            Self::Category => "Category",
            Self::Date => "Date",
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Amount => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Amount,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Description => Self::Amount,
            Self::Category => Self::Description,
            Self::Date => Self::Category,
        }
    }
}

/// The "Add New Expense" overlay. Text fields hold raw input until submit.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExpenseForm {
    pub(crate) amount: String,
    pub(crate) description: String,
    /// `None` until the user picks one.
    pub(crate) category: Option<ExpenseCategory>,
    pub(crate) date: String,
    pub(crate) field: FormField,
}

impl ExpenseForm {
    pub(crate) fn new(date: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            category: None,
            date: date.format("%Y-%m-%d").to_string(),
            field: FormField::Amount,
        }
    }

    /// Text buffer behind the focused field; the category picker has none.
    pub(crate) fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Amount => Some(&mut self.amount),
            FormField::Description => Some(&mut self.description),
            FormField::Date => Some(&mut self.date),
            FormField::Category => None,
        }
    }

    pub(crate) fn cycle_category(&mut self, delta: i32) {
        let all = ExpenseCategory::all();
        let len = all.len() as i32;
        let next = match self.category {
            None if delta >= 0 => 0,
            None => len - 1,
            Some(current) => (current.index() as i32 + delta).rem_euclid(len),
        };
        self.category = Some(all[next as usize]);
    }

    /// Parse the raw fields. The date must be a real `YYYY-MM-DD` calendar
    /// date; it is stored in canonical form.
    pub(crate) fn to_draft(&self) -> Result<ExpenseDraft> {
        let amount = parse_amount_input(&self.amount)?;
        let date = parse_date(&self.date)?;
        Ok(ExpenseDraft {
            amount,
            description: self.description.clone(),
            category: self
                .category
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            date: date.format("%Y-%m-%d").to_string(),
        })
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// Reference date for the month buckets.
    pub(crate) as_of: NaiveDate,

    // Session collection, replaced wholesale on every add/delete
    pub(crate) records: Vec<ExpenseRecord>,
    pub(crate) summary: Summary,

    // Expenses
    pub(crate) visible: Vec<ExpenseRecord>,
    pub(crate) category_filter: CategoryFilter,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    pub(crate) form: ExpenseForm,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(as_of: NaiveDate, records: Vec<ExpenseRecord>) -> Self {
        let mut app = Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,
            as_of,

            records,
            summary: Summary::default(),

            visible: Vec::new(),
            category_filter: CategoryFilter::All,
            expense_index: 0,
            expense_scroll: 0,

            form: ExpenseForm::new(as_of),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        };
        app.refresh();
        app
    }

    /// Recompute the summary and the filtered list from `records`.
    pub(crate) fn refresh(&mut self) {
        self.summary = summarize(&self.records, &self.as_of);
        self.visible = filter(&self.records, &self.search_input, &self.category_filter);
        if self.expense_index >= self.visible.len() {
            self.expense_index = self.visible.len().saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }

    pub(crate) fn replace_records(&mut self, records: Vec<ExpenseRecord>) {
        self.records = records;
        self.refresh();
    }

    pub(crate) fn add_expense(&mut self, draft: ExpenseDraft) -> Result<(), DraftError> {
        let next = ledger::add_record(&self.records, draft)?;
        self.replace_records(next);
        Ok(())
    }

    /// Returns `false` when no record had `id`.
    pub(crate) fn delete_expense(&mut self, id: &ExpenseId) -> bool {
        if ledger::find_record(&self.records, id).is_none() {
            return false;
        }
        let next = ledger::delete_record(&self.records, id);
        self.replace_records(next);
        true
    }

    pub(crate) fn selected_expense(&self) -> Option<&ExpenseRecord> {
        self.visible.get(self.expense_index)
    }

    pub(crate) fn current_month(&self) -> MonthKey {
        MonthKey::of(&self.as_of)
    }

    pub(crate) fn set_as_of(&mut self, as_of: NaiveDate) {
        self.as_of = as_of;
        self.refresh();
    }

    pub(crate) fn set_search(&mut self, term: impl Into<String>) {
        self.search_input = term.into();
        self.expense_index = 0;
        self.expense_scroll = 0;
        self.refresh();
    }

    pub(crate) fn set_category_filter(&mut self, category: CategoryFilter) {
        self.category_filter = category;
        self.expense_index = 0;
        self.expense_scroll = 0;
        self.refresh();
    }

    /// Step the category filter through All → each label → All.
    pub(crate) fn cycle_category_filter(&mut self, delta: i32) {
        let all = ExpenseCategory::all();
        let len = all.len() as i32 + 1;
        let current = match &self.category_filter {
            CategoryFilter::All => 0,
            CategoryFilter::Only(label) => ExpenseCategory::from_label(label)
                .map_or(0, |c| c.index() as i32 + 1),
        };
        let next = (current + delta).rem_euclid(len);
        let filter = if next == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(all[(next - 1) as usize].as_str().to_string())
        };
        self.set_category_filter(filter);
    }

    pub(crate) fn open_form(&mut self) {
        self.form = ExpenseForm::new(self.as_of);
        self.input_mode = InputMode::Form;
        self.set_status("Tab next field | +/- pick category | Enter save | Esc cancel");
    }

    /// Validate and save the form. Returns `false` and leaves the form open
    /// when the input is rejected.
    pub(crate) fn submit_form(&mut self) -> bool {
        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.set_status(e.to_string());
                return false;
            }
        };
        let description = draft.description.trim().to_string();
        match self.add_expense(draft) {
            Ok(()) => {
                self.input_mode = InputMode::Normal;
                self.set_status(format!("Added: {description}"));
                true
            }
            Err(e) => {
                self.set_status(e.to_string());
                false
            }
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
