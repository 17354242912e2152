use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use practice_core::model::{
    PracticeSession, Profile, SessionId, SyllabusItem, SyllabusItemId, UserId,
};

use crate::repository::{
    BackendError, ProfileRepository, SessionRepository, SyllabusRepository,
};

/// In-memory stand-in for the managed backend, for tests and local runs.
///
/// Rows are keyed by `(UserId, id)` so the per-user scoping of the ports is
/// honored the same way the real backend's row-level rules are.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    sessions: Arc<Mutex<HashMap<(UserId, SessionId), PracticeSession>>>,
    syllabus: Arc<Mutex<HashMap<(UserId, SyllabusItemId), SyllabusItem>>>,
    profiles: Arc<Mutex<HashMap<UserId, Profile>>>,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemoryBackend {
    async fn list_sessions(&self, user: UserId) -> Result<Vec<PracticeSession>, BackendError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        let mut rows: Vec<PracticeSession> = guard
            .iter()
            .filter(|((owner, _), _)| *owner == user)
            .map(|(_, session)| session.clone())
            .collect();
        rows.sort_by_key(|s| (s.date(), s.id()));
        Ok(rows)
    }

    async fn insert_session(&self, session: &PracticeSession) -> Result<(), BackendError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        guard.insert((session.user_id(), session.id()), session.clone());
        Ok(())
    }

    async fn delete_session(&self, user: UserId, id: SessionId) -> Result<(), BackendError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        guard
            .remove(&(user, id))
            .map(|_| ())
            .ok_or(BackendError::NotFound)
    }
}

#[async_trait]
impl SyllabusRepository for InMemoryBackend {
    async fn list_items(&self, user: UserId) -> Result<Vec<SyllabusItem>, BackendError> {
        let guard = self
            .syllabus
            .lock()
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        let mut rows: Vec<SyllabusItem> = guard
            .iter()
            .filter(|((owner, _), _)| *owner == user)
            .map(|(_, item)| item.clone())
            .collect();
        rows.sort_by_key(SyllabusItem::id);
        Ok(rows)
    }

    async fn upsert_item(&self, item: &SyllabusItem) -> Result<(), BackendError> {
        let mut guard = self
            .syllabus
            .lock()
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        guard.insert((item.user_id(), item.id()), item.clone());
        Ok(())
    }

    async fn delete_item(&self, user: UserId, id: SyllabusItemId) -> Result<(), BackendError> {
        let mut guard = self
            .syllabus
            .lock()
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        guard
            .remove(&(user, id))
            .map(|_| ())
            .ok_or(BackendError::NotFound)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryBackend {
    async fn get_profile(&self, user: UserId) -> Result<Profile, BackendError> {
        let guard = self
            .profiles
            .lock()
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        guard.get(&user).cloned().ok_or(BackendError::NotFound)
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<(), BackendError> {
        let mut guard = self
            .profiles
            .lock()
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        guard.insert(profile.user_id, profile.clone());
        Ok(())
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use practice_core::model::{PracticeDate, Rating, SyllabusStatus};
    use uuid::Uuid;

    fn user(n: u128) -> UserId {
        UserId::new(Uuid::from_u128(n))
    }

    fn session(owner: UserId, date: &str) -> PracticeSession {
        PracticeSession::new(
            SessionId::generate(),
            owner,
            PracticeDate::parse(date).unwrap(),
            30,
            Some(Rating::new(3).unwrap()),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn sessions_are_scoped_per_user() {
        let backend = InMemoryBackend::new();
        let alice = user(1);
        let bob = user(2);

        backend
            .insert_session(&session(alice, "2024-03-08"))
            .await
            .unwrap();
        backend
            .insert_session(&session(alice, "2024-03-09"))
            .await
            .unwrap();
        backend
            .insert_session(&session(bob, "2024-03-09"))
            .await
            .unwrap();

        let rows = backend.list_sessions(alice).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|s| s.user_id() == alice));
        assert!(rows[0].date() < rows[1].date());
    }

    #[tokio::test]
    async fn deleting_a_missing_session_reports_not_found() {
        let backend = InMemoryBackend::new();
        let err = backend
            .delete_session(user(1), SessionId::generate())
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::NotFound));
    }

    #[tokio::test]
    async fn syllabus_upsert_replaces_by_id() {
        let backend = InMemoryBackend::new();
        let owner = user(1);
        let item = SyllabusItem::new(
            SyllabusItemId::generate(),
            owner,
            "Minuet in G",
            "Grade 2",
            SyllabusStatus::InProgress,
        )
        .unwrap();

        backend.upsert_item(&item).await.unwrap();
        backend
            .upsert_item(&item.with_status(SyllabusStatus::Completed))
            .await
            .unwrap();

        let rows = backend.list_items(owner).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status(), SyllabusStatus::Completed);
    }

    #[tokio::test]
    async fn profile_round_trips() {
        let backend = InMemoryBackend::new();
        let owner = user(7);
        let profile = Profile::new(owner, "Dana").with_instrument("cello");

        backend.upsert_profile(&profile).await.unwrap();
        assert_eq!(backend.get_profile(owner).await.unwrap(), profile);
    }
}
