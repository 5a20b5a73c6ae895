use crate::core::ports::CalendarStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Calendar(#[from] CalendarStoreError),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("unexpected: {0}")]
    Unexpected(#[from] anyhow::Error),
}
