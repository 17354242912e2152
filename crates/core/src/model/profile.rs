use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;

/// A user's profile as stored by the managed backend.
///
/// The statistics layer computes nothing from profiles; this type exists so
/// services can pass profile reads/writes through to the backend with a
/// domain shape rather than raw JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub display_name: String,
    pub instrument: Option<String>,
}

impl Profile {
    #[must_use]
    pub fn new(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            instrument: None,
        }
    }

    /// Sets the instrument field.
    #[must_use]
    pub fn with_instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }
}
