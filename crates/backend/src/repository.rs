use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use practice_core::model::{
    PracticeDate, PracticeSession, Profile, Rating, SessionId, SyllabusItem, SyllabusItemId,
    SyllabusStatus, UserId,
};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors surfaced by backend adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    #[error("not found")]
    NotFound,

    #[error("backend rejected the credentials")]
    Unauthorized,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("backend returned status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("invalid record from backend: {0}")]
    InvalidRecord(String),
}

//
// ─── WIRE RECORDS ─────────────────────────────────────────────────────────────
//

/// Wire shape of a practice-session row.
///
/// The date travels as its canonical `YYYY-MM-DD` string and the rating as a
/// plain integer with 0 meaning unrated, exactly as the backend stores them.
/// Conversion into the domain type is where malformed rows are rejected; the
/// statistics layer only ever sees validated values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub practiced_on: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub notes: Option<String>,
}

impl SessionRecord {
    #[must_use]
    pub fn from_session(session: &PracticeSession) -> Self {
        Self {
            id: session.id().value(),
            user_id: session.user_id().value(),
            practiced_on: session.date().to_string(),
            duration_minutes: session.duration_minutes(),
            rating: session.rating().map_or(0, |r| r.value()),
            notes: session.notes().map(str::to_owned),
        }
    }

    /// Convert the record back into a domain `PracticeSession`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::InvalidRecord` if the date string is not a
    /// valid `YYYY-MM-DD` date, the rating is out of range, or the duration
    /// fails validation.
    pub fn into_session(self) -> Result<PracticeSession, BackendError> {
        let date = PracticeDate::parse(&self.practiced_on)
            .map_err(|e| BackendError::InvalidRecord(e.to_string()))?;
        let rating = Rating::from_raw(self.rating)
            .map_err(|e| BackendError::InvalidRecord(e.to_string()))?;

        PracticeSession::new(
            SessionId::new(self.id),
            UserId::new(self.user_id),
            date,
            self.duration_minutes,
            rating,
            self.notes,
        )
        .map_err(|e| BackendError::InvalidRecord(e.to_string()))
    }
}

/// Wire shape of a syllabus-item row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub level: String,
    pub status: String,
}

impl SyllabusRecord {
    #[must_use]
    pub fn from_item(item: &SyllabusItem) -> Self {
        Self {
            id: item.id().value(),
            user_id: item.user_id().value(),
            title: item.title().to_owned(),
            level: item.level().to_owned(),
            status: item.status().as_str().to_owned(),
        }
    }

    /// Convert the record back into a domain `SyllabusItem`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::InvalidRecord` if the status string is not one
    /// of the four known values or the title fails validation.
    pub fn into_item(self) -> Result<SyllabusItem, BackendError> {
        let status: SyllabusStatus = self
            .status
            .parse()
            .map_err(|e: practice_core::model::SyllabusError| {
                BackendError::InvalidRecord(e.to_string())
            })?;

        SyllabusItem::new(
            SyllabusItemId::new(self.id),
            UserId::new(self.user_id),
            self.title,
            self.level,
            status,
        )
        .map_err(|e| BackendError::InvalidRecord(e.to_string()))
    }
}

/// Wire shape of a profile row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: Uuid,
    pub display_name: String,
    #[serde(default)]
    pub instrument: Option<String>,
}

impl ProfileRecord {
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id.value(),
            display_name: profile.display_name.clone(),
            instrument: profile.instrument.clone(),
        }
    }

    #[must_use]
    pub fn into_profile(self) -> Profile {
        Profile {
            user_id: UserId::new(self.user_id),
            display_name: self.display_name,
            instrument: self.instrument,
        }
    }
}

//
// ─── PORTS ────────────────────────────────────────────────────────────────────
//

/// Read/write access to a user's practice sessions.
///
/// Row-level authorization lives with the backend: every operation is scoped
/// by `UserId` and an adapter must never return another user's rows.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Fetches all of a user's practice sessions, oldest first.
    async fn list_sessions(&self, user: UserId) -> Result<Vec<PracticeSession>, BackendError>;

    /// Inserts a new practice session.
    async fn insert_session(&self, session: &PracticeSession) -> Result<(), BackendError>;

    /// Deletes one of the user's sessions.
    ///
    /// Returns `BackendError::NotFound` if the row does not exist for that
    /// user.
    async fn delete_session(&self, user: UserId, id: SessionId) -> Result<(), BackendError>;
}

/// Read/write access to a user's syllabus.
#[async_trait]
pub trait SyllabusRepository: Send + Sync {
    /// Fetches all of a user's syllabus items.
    async fn list_items(&self, user: UserId) -> Result<Vec<SyllabusItem>, BackendError>;

    /// Inserts or replaces a syllabus item.
    async fn upsert_item(&self, item: &SyllabusItem) -> Result<(), BackendError>;

    /// Deletes one of the user's syllabus items.
    async fn delete_item(&self, user: UserId, id: SyllabusItemId) -> Result<(), BackendError>;
}

/// Read/write access to user profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetches the user's profile.
    async fn get_profile(&self, user: UserId) -> Result<Profile, BackendError>;

    /// Inserts or replaces the user's profile.
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), BackendError>;
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
