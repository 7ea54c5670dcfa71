use catalog::MovieId;
use thiserror::Error;

/// Errors that can occur when talking to the metadata provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure (DNS, TLS, connection reset, body decoding)
    #[error("Request to metadata provider failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("Metadata provider returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Movie {0} not found")]
    NotFound(MovieId),

    #[error("No TMDB API key configured (set TMDB_API_KEY or pass --api-key)")]
    MissingApiKey,

    /// Lookup refused by an in-memory provider configured to fail
    #[error("Lookup failed: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
