use std::sync::Arc;

use tracing::debug;

use backend::{SessionRepository, SyllabusRepository};
use practice_core::Clock;
use practice_core::stats::{self, DailyAggregate};
use practice_core::model::UserId;

use crate::error::StatsError;

/// Everything the dashboard needs in one fetch: the current streak and the
/// per-day practice history.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub current_streak: u32,
    pub daily: Vec<DailyAggregate>,
}

/// Computes derived statistics for a user.
///
/// This service only orchestrates: it fetches raw records through the
/// backend ports and hands them to the pure functions in
/// `practice_core::stats`. The clock supplies "today" for the streak walk,
/// so a fixed clock makes every result deterministic.
#[derive(Clone)]
pub struct StatsService {
    clock: Clock,
    sessions: Arc<dyn SessionRepository>,
    syllabus: Arc<dyn SyllabusRepository>,
}

impl StatsService {
    #[must_use]
    pub fn new(
        clock: Clock,
        sessions: Arc<dyn SessionRepository>,
        syllabus: Arc<dyn SyllabusRepository>,
    ) -> Self {
        Self {
            clock,
            sessions,
            syllabus,
        }
    }

    /// Fetches the user's history and computes streak plus daily aggregates.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Backend` when the session fetch fails.
    pub async fn dashboard(&self, user: UserId) -> Result<DashboardStats, StatsError> {
        let sessions = self.sessions.list_sessions(user).await?;
        let today = self.clock.today_utc();

        let current_streak = stats::current_streak(&sessions, today);
        let daily = stats::aggregate_by_day(&sessions);
        debug!(%user, current_streak, days = daily.len(), "computed dashboard stats");

        Ok(DashboardStats {
            current_streak,
            daily,
        })
    }

    /// Computes the completion percentage for one syllabus level.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Backend` when the syllabus fetch fails.
    pub async fn level_progress(&self, user: UserId, level: &str) -> Result<u8, StatsError> {
        let items = self.syllabus.list_items(user).await?;
        Ok(stats::level_progress(&items, level))
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use backend::InMemoryBackend;
    use practice_core::model::{
        PracticeDate, PracticeSession, Rating, SessionId, SyllabusItem, SyllabusItemId,
        SyllabusStatus,
    };
    use practice_core::time::fixed_clock;
    use uuid::Uuid;

    fn user() -> UserId {
        UserId::new(Uuid::from_u128(1))
    }

    fn session(owner: UserId, date: &str, minutes: u32, raw_rating: u8) -> PracticeSession {
        PracticeSession::new(
            SessionId::generate(),
            owner,
            PracticeDate::parse(date).unwrap(),
            minutes,
            Rating::from_raw(raw_rating).unwrap(),
            None,
        )
        .unwrap()
    }

    fn service_with(backend: InMemoryBackend) -> StatsService {
        StatsService::new(
            fixed_clock(),
            Arc::new(backend.clone()),
            Arc::new(backend),
        )
    }

    #[tokio::test]
    async fn empty_history_yields_zeroed_dashboard() {
        let svc = service_with(InMemoryBackend::new());
        let stats = svc.dashboard(user()).await.unwrap();
        assert_eq!(stats.current_streak, 0);
        assert!(stats.daily.is_empty());
    }

    #[tokio::test]
    async fn dashboard_combines_streak_and_aggregates() {
        use backend::SessionRepository as _;

        let backend = InMemoryBackend::new();
        let owner = user();
        // Fixed clock puts "today" at 2024-03-09.
        for s in [
            session(owner, "2024-03-07", 20, 3),
            session(owner, "2024-03-08", 30, 4),
            session(owner, "2024-03-09", 30, 4),
            session(owner, "2024-03-09", 20, 5),
        ] {
            backend.insert_session(&s).await.unwrap();
        }

        let svc = service_with(backend);
        let stats = svc.dashboard(owner).await.unwrap();

        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.daily.len(), 3);

        let today = &stats.daily[2];
        assert_eq!(today.total_minutes, 50);
        assert_eq!(today.session_count, 2);
        assert!((today.average_rating - 4.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn level_progress_counts_completed_share() {
        use backend::SyllabusRepository as _;

        let backend = InMemoryBackend::new();
        let owner = user();
        let statuses = [
            SyllabusStatus::Completed,
            SyllabusStatus::Completed,
            SyllabusStatus::InProgress,
            SyllabusStatus::Planned,
        ];
        for (i, status) in statuses.into_iter().enumerate() {
            let item = SyllabusItem::new(
                SyllabusItemId::generate(),
                owner,
                format!("Piece {i}"),
                "Grade 3",
                status,
            )
            .unwrap();
            backend.upsert_item(&item).await.unwrap();
        }

        let svc = service_with(backend);
        assert_eq!(svc.level_progress(owner, "Grade 3").await.unwrap(), 50);
        assert_eq!(svc.level_progress(owner, "Grade 4").await.unwrap(), 0);
    }
}
