//! Filter implementations for movie lists.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod duplicate_title;
pub mod exclude_movie;
pub mod genre_match;
pub mod metadata;
pub mod related_title;

// Re-export for convenience
pub use duplicate_title::DuplicateTitleFilter;
pub use exclude_movie::ExcludeMovieFilter;
pub use genre_match::GenreFilter;
pub use metadata::{MetadataFilter, MetadataRequirement};
pub use related_title::RelatedTitleFilter;
