//! Global title lookup: first search hit, then its full record.

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::MovieRecord;
use provider::MetadataProvider;
use tracing::{debug, instrument};

/// Resolves a free-text title to one full movie record.
///
/// There is no disambiguation: the provider's first hit wins.
pub struct TitleResolver<P> {
    provider: Arc<P>,
}

impl<P: MetadataProvider> TitleResolver<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// `Ok(None)` when the search has no hits (or the title is blank)
    #[instrument(skip(self))]
    pub async fn resolve(&self, title: &str) -> Result<Option<MovieRecord>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let hits = self
            .provider
            .search_movies(title, 1)
            .await
            .with_context(|| format!("Searching for '{}'", title))?;

        let Some(first) = hits.into_iter().next() else {
            debug!("No search hits for '{}'", title);
            return Ok(None);
        };

        let record = self
            .provider
            .fetch_movie(first.id)
            .await
            .with_context(|| format!("Loading '{}' ({})", first.title, first.id))?;

        Ok(Some(record))
    }
}
