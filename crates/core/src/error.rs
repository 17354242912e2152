use thiserror::Error;

use crate::model::{DateError, SessionValidationError, SyllabusError};

/// Crate-level error, aggregating the model validation errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Session(#[from] SessionValidationError),
    #[error(transparent)]
    Syllabus(#[from] SyllabusError),
}
