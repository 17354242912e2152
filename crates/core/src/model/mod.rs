mod date;
mod ids;
mod profile;
mod session;
mod syllabus;

pub use date::{DateError, PracticeDate};
pub use ids::{SessionId, SyllabusItemId, UserId};
pub use profile::Profile;
pub use session::{PracticeSession, Rating, SessionValidationError};
pub use syllabus::{SyllabusError, SyllabusItem, SyllabusStatus};
