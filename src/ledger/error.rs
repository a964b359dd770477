use thiserror::Error;

/// Reasons a draft cannot become a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum DraftError {
    #[error("Amount is required")]
    MissingAmount,

    #[error("Description is required")]
    MissingDescription,

    #[error("Category is required")]
    MissingCategory,
}
