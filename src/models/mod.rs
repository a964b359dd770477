mod category;
mod expense;

pub(crate) use category::{CategoryKey, ExpenseCategory};
pub(crate) use expense::{ExpenseDraft, ExpenseId, ExpenseRecord};

#[cfg(test)]
mod tests;
