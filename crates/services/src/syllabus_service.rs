use std::sync::Arc;

use tracing::debug;

use backend::{BackendError, SyllabusRepository};
use practice_core::model::{SyllabusItem, SyllabusItemId, SyllabusStatus, UserId};

use crate::error::SyllabusServiceError;

/// Maintains a user's syllabus through the backend port.
///
/// Status changes are free-form: the four statuses have an implied order but
/// no transition is enforced anywhere in this layer.
#[derive(Clone)]
pub struct SyllabusService {
    syllabus: Arc<dyn SyllabusRepository>,
}

impl SyllabusService {
    #[must_use]
    pub fn new(syllabus: Arc<dyn SyllabusRepository>) -> Self {
        Self { syllabus }
    }

    /// Validates and persists a new syllabus item, starting as `Planned`.
    ///
    /// # Errors
    ///
    /// Returns `SyllabusServiceError::Syllabus` for an empty title and
    /// `SyllabusServiceError::Backend` when the write fails.
    pub async fn add_item(
        &self,
        user: UserId,
        title: impl Into<String>,
        level: impl Into<String>,
    ) -> Result<SyllabusItem, SyllabusServiceError> {
        let item = SyllabusItem::new(
            SyllabusItemId::generate(),
            user,
            title,
            level,
            SyllabusStatus::Planned,
        )?;

        self.syllabus.upsert_item(&item).await?;
        debug!(%user, level = item.level(), "added syllabus item");
        Ok(item)
    }

    /// Fetches all of the user's syllabus items.
    ///
    /// # Errors
    ///
    /// Returns `SyllabusServiceError::Backend` when the fetch fails.
    pub async fn list_items(
        &self,
        user: UserId,
    ) -> Result<Vec<SyllabusItem>, SyllabusServiceError> {
        Ok(self.syllabus.list_items(user).await?)
    }

    /// Fetches the user's items at one level (exact label match).
    ///
    /// # Errors
    ///
    /// Returns `SyllabusServiceError::Backend` when the fetch fails.
    pub async fn list_level(
        &self,
        user: UserId,
        level: &str,
    ) -> Result<Vec<SyllabusItem>, SyllabusServiceError> {
        let mut items = self.syllabus.list_items(user).await?;
        items.retain(|item| item.level() == level);
        Ok(items)
    }

    /// Moves an item to a new status, returning the updated item.
    ///
    /// # Errors
    ///
    /// Returns `SyllabusServiceError::Backend` wrapping `NotFound` when the
    /// item does not exist for that user.
    pub async fn set_status(
        &self,
        user: UserId,
        id: SyllabusItemId,
        status: SyllabusStatus,
    ) -> Result<SyllabusItem, SyllabusServiceError> {
        let items = self.syllabus.list_items(user).await?;
        let item = items
            .into_iter()
            .find(|item| item.id() == id)
            .ok_or(BackendError::NotFound)?;

        let updated = item.with_status(status);
        self.syllabus.upsert_item(&updated).await?;
        debug!(%user, %id, status = %status, "syllabus status changed");
        Ok(updated)
    }

    /// Deletes one of the user's items.
    ///
    /// # Errors
    ///
    /// Returns `SyllabusServiceError::Backend` wrapping `NotFound` when the
    /// item does not exist for that user.
    pub async fn delete_item(
        &self,
        user: UserId,
        id: SyllabusItemId,
    ) -> Result<(), SyllabusServiceError> {
        self.syllabus.delete_item(user, id).await?;
        Ok(())
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
