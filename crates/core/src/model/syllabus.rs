use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::{SyllabusItemId, UserId};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while building syllabus values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyllabusError {
    #[error("unknown syllabus status: {0:?}")]
    InvalidStatus(String),

    #[error("syllabus item title must not be empty")]
    EmptyTitle,
}

//
// ─── STATUS ───────────────────────────────────────────────────────────────────
//

/// Progress state of a syllabus item.
///
/// The variants have an implied order (planned → in-progress → ready-for-exam
/// → completed) but no transition is enforced here; whatever policy exists
/// lives with the caller. The statistics layer only ever asks whether an item
/// is `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyllabusStatus {
    Planned,
    InProgress,
    ReadyForExam,
    Completed,
}

impl SyllabusStatus {
    /// Canonical string form, as stored by the backend.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SyllabusStatus::Planned => "planned",
            SyllabusStatus::InProgress => "in-progress",
            SyllabusStatus::ReadyForExam => "ready-for-exam",
            SyllabusStatus::Completed => "completed",
        }
    }
}

impl FromStr for SyllabusStatus {
    type Err = SyllabusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(SyllabusStatus::Planned),
            "in-progress" => Ok(SyllabusStatus::InProgress),
            "ready-for-exam" => Ok(SyllabusStatus::ReadyForExam),
            "completed" => Ok(SyllabusStatus::Completed),
            other => Err(SyllabusError::InvalidStatus(other.to_owned())),
        }
    }
}

impl fmt::Display for SyllabusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── SYLLABUS ITEM ────────────────────────────────────────────────────────────
//

/// One tracked piece, scale, or exercise on a user's syllabus.
///
/// The level label is free-form (e.g. `"Grade 3"`); level-progress queries
/// match it exactly, case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusItem {
    id: SyllabusItemId,
    user_id: UserId,
    title: String,
    level: String,
    status: SyllabusStatus,
}

impl SyllabusItem {
    /// Validates and builds a syllabus item.
    ///
    /// # Errors
    ///
    /// Returns `SyllabusError::EmptyTitle` if the title is empty or
    /// whitespace-only.
    pub fn new(
        id: SyllabusItemId,
        user_id: UserId,
        title: impl Into<String>,
        level: impl Into<String>,
        status: SyllabusStatus,
    ) -> Result<Self, SyllabusError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SyllabusError::EmptyTitle);
        }

        Ok(Self {
            id,
            user_id,
            title,
            level: level.into(),
            status,
        })
    }

    #[must_use]
    pub fn id(&self) -> SyllabusItemId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    #[must_use]
    pub fn status(&self) -> SyllabusStatus {
        self.status
    }

    /// Returns a copy of this item with a different status.
    ///
    /// Any status may follow any other; ordering is not enforced here.
    #[must_use]
    pub fn with_status(&self, status: SyllabusStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn status_round_trips_through_canonical_strings() {
        for status in [
            SyllabusStatus::Planned,
            SyllabusStatus::InProgress,
            SyllabusStatus::ReadyForExam,
            SyllabusStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<SyllabusStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown_strings() {
        let err = "done".parse::<SyllabusStatus>().unwrap_err();
        assert_eq!(err, SyllabusError::InvalidStatus("done".into()));
    }

    #[test]
    fn item_rejects_empty_title() {
        let err = SyllabusItem::new(
            SyllabusItemId::generate(),
            UserId::new(Uuid::nil()),
            "   ",
            "Grade 1",
            SyllabusStatus::Planned,
        )
        .unwrap_err();
        assert_eq!(err, SyllabusError::EmptyTitle);
    }

    #[test]
    fn with_status_allows_any_jump() {
        let item = SyllabusItem::new(
            SyllabusItemId::generate(),
            UserId::new(Uuid::nil()),
            "C major scale",
            "Grade 1",
            SyllabusStatus::Planned,
        )
        .unwrap();

        let done = item.with_status(SyllabusStatus::Completed);
        assert_eq!(done.status(), SyllabusStatus::Completed);
        assert_eq!(done.title(), item.title());
    }
}
