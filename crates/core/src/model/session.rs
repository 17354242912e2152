use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::date::PracticeDate;
use crate::model::ids::{SessionId, UserId};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors produced when constructing a practice session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionValidationError {
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("session duration of {minutes} minutes exceeds the {max} minute cap")]
    DurationTooLong { minutes: u32, max: u32 },
}

//
// ─── RATING ───────────────────────────────────────────────────────────────────
//

/// Self-assessed session quality on a 1–5 scale.
///
/// A session without a rating is represented as `Option<Rating>::None`, not
/// as a zero `Rating`; zero is not a constructible value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Validates and wraps a 1–5 rating value.
    ///
    /// # Errors
    ///
    /// Returns `SessionValidationError::InvalidRating` if the value is
    /// outside `1..=5`.
    pub fn new(value: u8) -> Result<Self, SessionValidationError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SessionValidationError::InvalidRating(value))
        }
    }

    /// Interprets the backend's "0 means unrated" convention.
    ///
    /// # Errors
    ///
    /// Returns `SessionValidationError::InvalidRating` for values above 5.
    pub fn from_raw(value: u8) -> Result<Option<Self>, SessionValidationError> {
        if value == 0 {
            Ok(None)
        } else {
            Self::new(value).map(Some)
        }
    }

    /// Returns the underlying 1–5 value.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }
}

//
// ─── PRACTICE SESSION ─────────────────────────────────────────────────────────
//

/// One logged practice session: a calendar day, a duration, and an optional
/// self-rating.
///
/// Sessions are transient values rebuilt from backend records on every fetch;
/// the core never persists or mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeSession {
    id: SessionId,
    user_id: UserId,
    date: PracticeDate,
    duration_minutes: u32,
    rating: Option<Rating>,
    notes: Option<String>,
}

impl PracticeSession {
    /// Upper bound on a single session's duration (24 hours).
    pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

    /// Validates and builds a practice session.
    ///
    /// # Errors
    ///
    /// Returns `SessionValidationError::DurationTooLong` if the duration
    /// exceeds [`Self::MAX_DURATION_MINUTES`].
    pub fn new(
        id: SessionId,
        user_id: UserId,
        date: PracticeDate,
        duration_minutes: u32,
        rating: Option<Rating>,
        notes: Option<String>,
    ) -> Result<Self, SessionValidationError> {
        if duration_minutes > Self::MAX_DURATION_MINUTES {
            return Err(SessionValidationError::DurationTooLong {
                minutes: duration_minutes,
                max: Self::MAX_DURATION_MINUTES,
            });
        }

        Ok(Self {
            id,
            user_id,
            date,
            duration_minutes,
            rating,
            notes,
        })
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn date(&self) -> PracticeDate {
        self.date
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
