#![forbid(unsafe_code)]

pub mod error;
pub mod practice_service;
pub mod stats_service;
pub mod syllabus_service;

pub use practice_core::Clock;

pub use error::{PracticeServiceError, StatsError, SyllabusServiceError};
pub use practice_service::PracticeService;
pub use stats_service::{DashboardStats, StatsService};
pub use syllabus_service::SyllabusService;
