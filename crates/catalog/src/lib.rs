//! # Catalog Crate
//!
//! Domain types shared by every other crate in the workspace.
//!
//! ## Main Components
//!
//! - **types**: `Movie`, `Company`, `MovieRecord` and provider parsing helpers
//! - **genre**: genre label normalization (case, aliases)
//! - **error**: error type for catalog-level failures
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Company, Movie};
//!
//! let movie = Movie::new(27205, "Inception")
//!     .with_year(2010)
//!     .with_genres(["Action", "Science Fiction"])
//!     .with_rating(8.4)
//!     .with_companies(vec![Company::new(923, "Legendary Pictures")]);
//!
//! assert!(movie.has_genre("sci-fi"));
//! ```

// Public modules
pub mod error;
pub mod genre;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    CompanyId,
    MovieId,
    // Core types
    Company,
    Movie,
    MovieRecord,
    // Helpers
    parse_release_year,
    rating_from_votes,
};
