use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use practice_core::model::{
    PracticeSession, Profile, SessionId, SyllabusItem, SyllabusItemId, UserId,
};

use crate::repository::{
    BackendError, ProfileRecord, ProfileRepository, SessionRecord, SessionRepository,
    SyllabusRecord, SyllabusRepository,
};
use crate::rest::config::RestConfig;

const SESSIONS_TABLE: &str = "practice_sessions";
const SYLLABUS_TABLE: &str = "syllabus_items";
const PROFILES_TABLE: &str = "profiles";

/// Client for the managed backend's row API.
///
/// Speaks the PostgREST-style interface the backend exposes: one route per
/// table, equality filters in the query string, JSON rows in and out. The
/// backend enforces row-level access from the bearer token; this client only
/// adds the explicit `user_id` filter so a misconfigured token fails closed
/// (an empty result) instead of leaking rows.
///
/// No retry or caching policy lives here.
#[derive(Clone)]
pub struct RestBackend {
    client: Client,
    config: RestConfig,
}

impl RestBackend {
    #[must_use]
    pub fn new(config: RestConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Builds a backend from environment variables, if configured.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        RestConfig::from_env().map(Self::new)
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{table}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.access_token)
    }

    fn check_status(status: StatusCode) -> Result<(), BackendError> {
        if status.is_success() {
            return Ok(());
        }
        warn!(%status, "backend request failed");
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(BackendError::Unauthorized),
            StatusCode::NOT_FOUND => Err(BackendError::NotFound),
            other => Err(BackendError::HttpStatus(other)),
        }
    }

    /// GET rows from `table` filtered to the given user.
    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        user: UserId,
        order: Option<&str>,
    ) -> Result<Vec<T>, BackendError> {
        debug!(table, %user, "fetching rows");
        let mut query: Vec<(&str, String)> = vec![
            ("select", "*".to_owned()),
            ("user_id", format!("eq.{}", user.value())),
        ];
        if let Some(order) = order {
            query.push(("order", order.to_owned()));
        }

        let response = self
            .authorize(self.client.get(self.table_url(table)))
            .query(&query)
            .send()
            .await?;

        Self::check_status(response.status())?;
        let rows = response.json::<Vec<T>>().await?;
        Ok(rows)
    }

    /// POST one row into `table`, replacing any row with the same key.
    async fn upsert_row<T: Serialize + Sync>(
        &self,
        table: &str,
        row: &T,
    ) -> Result<(), BackendError> {
        debug!(table, "upserting row");
        let response = self
            .authorize(self.client.post(self.table_url(table)))
            .header("Prefer", "resolution=merge-duplicates")
            .json(row)
            .send()
            .await?;

        Self::check_status(response.status())
    }

    /// DELETE the user's row with the given primary key.
    async fn delete_row(
        &self,
        table: &str,
        user: UserId,
        id_filter: (&str, String),
    ) -> Result<(), BackendError> {
        debug!(table, %user, "deleting row");
        let response = self
            .authorize(self.client.delete(self.table_url(table)))
            .header("Prefer", "return=representation")
            .query(&[
                (id_filter.0, id_filter.1),
                ("user_id", format!("eq.{}", user.value())),
            ])
            .send()
            .await?;

        Self::check_status(response.status())?;

        // The row API answers 200 with the deleted rows; an empty array
        // means the filter matched nothing.
        let deleted = response.json::<Vec<serde_json::Value>>().await?;
        if deleted.is_empty() {
            return Err(BackendError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for RestBackend {
    async fn list_sessions(&self, user: UserId) -> Result<Vec<PracticeSession>, BackendError> {
        let records: Vec<SessionRecord> = self
            .fetch_rows(SESSIONS_TABLE, user, Some("practiced_on.asc"))
            .await?;
        records
            .into_iter()
            .map(SessionRecord::into_session)
            .collect()
    }

    async fn insert_session(&self, session: &PracticeSession) -> Result<(), BackendError> {
        self.upsert_row(SESSIONS_TABLE, &SessionRecord::from_session(session))
            .await
    }

    async fn delete_session(&self, user: UserId, id: SessionId) -> Result<(), BackendError> {
        self.delete_row(SESSIONS_TABLE, user, ("id", format!("eq.{}", id.value())))
            .await
    }
}

#[async_trait]
impl SyllabusRepository for RestBackend {
    async fn list_items(&self, user: UserId) -> Result<Vec<SyllabusItem>, BackendError> {
        let records: Vec<SyllabusRecord> =
            self.fetch_rows(SYLLABUS_TABLE, user, None).await?;
        records.into_iter().map(SyllabusRecord::into_item).collect()
    }

    async fn upsert_item(&self, item: &SyllabusItem) -> Result<(), BackendError> {
        self.upsert_row(SYLLABUS_TABLE, &SyllabusRecord::from_item(item))
            .await
    }

    async fn delete_item(&self, user: UserId, id: SyllabusItemId) -> Result<(), BackendError> {
        self.delete_row(SYLLABUS_TABLE, user, ("id", format!("eq.{}", id.value())))
            .await
    }
}

#[async_trait]
impl ProfileRepository for RestBackend {
    async fn get_profile(&self, user: UserId) -> Result<Profile, BackendError> {
        let records: Vec<ProfileRecord> =
            self.fetch_rows(PROFILES_TABLE, user, None).await?;
        records
            .into_iter()
            .next()
            .map(ProfileRecord::into_profile)
            .ok_or(BackendError::NotFound)
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<(), BackendError> {
        self.upsert_row(PROFILES_TABLE, &ProfileRecord::from_profile(profile))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_strips_trailing_slash() {
        let backend = RestBackend::new(RestConfig::new("https://example.test/", "key"));
        assert_eq!(
            backend.table_url(SESSIONS_TABLE),
            "https://example.test/rest/v1/practice_sessions"
        );
    }

    #[test]
    fn status_mapping_distinguishes_auth_failures() {
        assert!(matches!(
            RestBackend::check_status(StatusCode::UNAUTHORIZED),
            Err(BackendError::Unauthorized)
        ));
        assert!(matches!(
            RestBackend::check_status(StatusCode::NOT_FOUND),
            Err(BackendError::NotFound)
        ));
        assert!(matches!(
            RestBackend::check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(BackendError::HttpStatus(_))
        ));
        assert!(RestBackend::check_status(StatusCode::OK).is_ok());
    }
}
