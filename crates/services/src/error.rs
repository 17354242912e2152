//! Shared error types for the services crate.

use thiserror::Error;

use backend::BackendError;
use practice_core::model::{SessionValidationError, SyllabusError};

/// Errors emitted by `PracticeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeServiceError {
    #[error(transparent)]
    Validation(#[from] SessionValidationError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors emitted by `SyllabusService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyllabusServiceError {
    #[error(transparent)]
    Syllabus(#[from] SyllabusError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors emitted by `StatsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatsError {
    #[error(transparent)]
    Backend(#[from] BackendError),
}
