use std::sync::Arc;

use tracing::debug;

use backend::SessionRepository;
use practice_core::model::{PracticeDate, PracticeSession, Rating, SessionId, UserId};

use crate::error::PracticeServiceError;

/// Logs and lists practice sessions through the backend port.
///
/// Validation happens here, before anything is written: the backend stores
/// whatever it is given, so a bad rating or absurd duration must be caught
/// on this side of the wire.
#[derive(Clone)]
pub struct PracticeService {
    sessions: Arc<dyn SessionRepository>,
}

impl PracticeService {
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Validates and persists a new practice session, returning it.
    ///
    /// `raw_rating` uses the backend's convention: 0 means unrated, 1–5 is
    /// the rating.
    ///
    /// # Errors
    ///
    /// Returns `PracticeServiceError::Validation` for an out-of-range rating
    /// or duration, and `PracticeServiceError::Backend` when the write fails.
    pub async fn log_session(
        &self,
        user: UserId,
        date: PracticeDate,
        duration_minutes: u32,
        raw_rating: u8,
        notes: Option<String>,
    ) -> Result<PracticeSession, PracticeServiceError> {
        let rating = Rating::from_raw(raw_rating)?;
        let session = PracticeSession::new(
            SessionId::generate(),
            user,
            date,
            duration_minutes,
            rating,
            notes,
        )?;

        self.sessions.insert_session(&session).await?;
        debug!(%user, %date, duration_minutes, "logged practice session");
        Ok(session)
    }

    /// Fetches all of the user's sessions, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `PracticeServiceError::Backend` when the fetch fails.
    pub async fn list_sessions(
        &self,
        user: UserId,
    ) -> Result<Vec<PracticeSession>, PracticeServiceError> {
        Ok(self.sessions.list_sessions(user).await?)
    }

    /// Deletes one of the user's sessions.
    ///
    /// # Errors
    ///
    /// Returns `PracticeServiceError::Backend` (wrapping `NotFound`) when the
    /// session does not exist for that user.
    pub async fn delete_session(
        &self,
        user: UserId,
        id: SessionId,
    ) -> Result<(), PracticeServiceError> {
        self.sessions.delete_session(user, id).await?;
        Ok(())
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
