use std::fmt;

/// Public TMDB v3 endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Connection settings for the TMDB client
#[derive(Clone)]
pub struct ProviderConfig {
    /// v3 API key or v4 read-access token
    pub api_key: String,
    pub base_url: String,
    pub language: String,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Point the client somewhere else (a mock server in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// v4 read-access tokens are JWTs and go in the Authorization header;
    /// v3 keys go in the query string
    pub fn uses_bearer_token(&self) -> bool {
        self.api_key.starts_with("eyJ")
    }
}

// Keep the key out of logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish()
    }
}
