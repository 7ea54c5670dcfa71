//! # Sources Crate
//!
//! Recommendation sources built on top of a `MetadataProvider`.
//!
//! ## Components
//!
//! ### GenreSampler
//! Random films for a genre: search, look up each hit, keep the ones really
//! tagged with the genre, sample up to 10.
//!
//! ### TitleResolver
//! Free-text title to one full record (first search hit).
//!
//! ### ProviderRecommendations
//! The provider's own recommendation list for a movie.
//!
//! ### FallbackChain
//! Provider-native recommendations, then related titles, then same genre.
//!
//! ### CompanySuggestions
//! Movies from the same production companies.
//!
//! Sources that can come back empty report an [`Outcome`] so callers can
//! tell "nothing matched" from "the lookup failed".
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{GenreSampler, TitleResolver};
//! use std::sync::Arc;
//!
//! let provider = Arc::new(TmdbClient::connect(config).await?);
//! let sample = GenreSampler::new(provider.clone()).sample("Horror").await?;
//! let record = TitleResolver::new(provider).resolve("Inception").await?;
//! ```

// Public modules
pub mod company;
pub mod fallback;
pub mod genre_sampler;
pub mod outcome;
pub mod recommendations;
pub mod resolver;

// Re-export commonly used types
pub use company::CompanySuggestions;
pub use fallback::{FallbackChain, Strategy, Suggestions};
pub use genre_sampler::GenreSampler;
pub use outcome::Outcome;
pub use recommendations::ProviderRecommendations;
pub use resolver::TitleResolver;
