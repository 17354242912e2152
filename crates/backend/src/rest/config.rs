use std::env;

/// Connection settings for the managed backend's row API.
#[derive(Clone, Debug)]
pub struct RestConfig {
    /// Base URL of the backend project, without a trailing slash.
    pub base_url: String,
    /// Project API key, sent on every request.
    pub api_key: String,
    /// Bearer token of the authenticated user; the backend derives row-level
    /// access from it.
    pub access_token: String,
}

impl RestConfig {
    /// Reads `PRACTICE_BACKEND_URL`, `PRACTICE_BACKEND_API_KEY`, and
    /// `PRACTICE_BACKEND_TOKEN`. Returns `None` when the URL or key is
    /// missing; the token defaults to the API key for service contexts.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("PRACTICE_BACKEND_URL").ok()?;
        let api_key = env::var("PRACTICE_BACKEND_API_KEY").ok()?;
        if base_url.trim().is_empty() || api_key.trim().is_empty() {
            return None;
        }
        let access_token =
            env::var("PRACTICE_BACKEND_TOKEN").unwrap_or_else(|_| api_key.clone());
        Some(Self {
            base_url,
            api_key,
            access_token,
        })
    }

    /// Builds a config with the token equal to the API key.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self {
            base_url: base_url.into(),
            access_token: api_key.clone(),
            api_key,
        }
    }

    /// Replaces the access token with an authenticated user's bearer token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }
}
