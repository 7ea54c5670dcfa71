//! Filtering and ranking of movie lists.
//!
//! This crate provides:
//! - Filter trait and implementations for trimming recommendation lists
//! - FilterPipeline for composing filters
//! - The title deduplicator and rating ordering
//! - ContentRanker, the TF-IDF / cosine similarity ranker over genre tags
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{ContentRanker, FilterPipeline};
//! use pipeline::filters::*;
//!
//! let similar = ContentRanker::new().rank(&sample, "Alien")?;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(MetadataFilter::new(MetadataRequirement::GenresOrRating))
//!     .add_filter(DuplicateTitleFilter);
//! let shown = pipeline.apply(similar)?;
//! ```

pub mod dedup;
pub mod filter_pipeline;
pub mod filters;
pub mod ordering;
pub mod similarity;
pub mod stop_words;
pub mod traits;

// Re-export main types
pub use dedup::dedup_by_title;
pub use filter_pipeline::FilterPipeline;
pub use ordering::sort_by_rating_desc;
pub use similarity::{ContentRanker, ScoredMovie, TfIdfMatrix, cosine_similarity};
pub use traits::Filter;
