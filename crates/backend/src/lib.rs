#![forbid(unsafe_code)]

//! Data-access layer over the external managed backend.
//!
//! Persistence, authentication, and row-level authorization belong to the
//! backend service; this crate defines the ports the rest of the app talks
//! through ([`repository`]), a REST adapter for the real backend ([`rest`]),
//! and an in-memory adapter for tests ([`memory`]).

pub mod memory;
pub mod repository;
pub mod rest;

use std::sync::Arc;

pub use memory::InMemoryBackend;
pub use repository::{
    BackendError, ProfileRecord, ProfileRepository, SessionRecord, SessionRepository,
    SyllabusRecord, SyllabusRepository,
};
pub use rest::{RestBackend, RestConfig};

/// Aggregates the three ports behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Backend {
    pub sessions: Arc<dyn SessionRepository>,
    pub syllabus: Arc<dyn SyllabusRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
}

impl Backend {
    /// Backend over in-memory maps, for tests and local runs.
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryBackend::new();
        let sessions: Arc<dyn SessionRepository> = Arc::new(repo.clone());
        let syllabus: Arc<dyn SyllabusRepository> = Arc::new(repo.clone());
        let profiles: Arc<dyn ProfileRepository> = Arc::new(repo);
        Self {
            sessions,
            syllabus,
            profiles,
        }
    }

    /// Backend over the managed service's row API.
    #[must_use]
    pub fn rest(config: RestConfig) -> Self {
        let repo = RestBackend::new(config);
        let sessions: Arc<dyn SessionRepository> = Arc::new(repo.clone());
        let syllabus: Arc<dyn SyllabusRepository> = Arc::new(repo.clone());
        let profiles: Arc<dyn ProfileRepository> = Arc::new(repo);
        Self {
            sessions,
            syllabus,
            profiles,
        }
    }
}
