//! # Recommendation Orchestrator
//!
//! Owns every recommendation source for one provider and runs the
//! interactive flows:
//! - in-process dispatch to the flow chosen in the launcher menu
//! - the genre flow (`genre_flow.rs`)
//! - the global title search flow (`search_flow.rs`)

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use pipeline::ContentRanker;
use provider::MetadataProvider;
use sources::genre_sampler::{DEFAULT_CANDIDATE_LIMIT, DEFAULT_SAMPLE_SIZE};
use sources::{CompanySuggestions, FallbackChain, GenreSampler, ProviderRecommendations, TitleResolver};
use tracing::info;

use crate::console::Console;
use crate::menu::MenuChoice;

/// Knobs shared by both flows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSettings {
    /// Movies shown for a genre
    pub sample_size: usize,
    /// Search hits inspected when sampling a genre
    pub candidate_limit: usize,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
        }
    }
}

/// Main orchestrator that coordinates the recommendation sources
pub struct RecommendationOrchestrator<P> {
    pub(crate) settings: FlowSettings,
    pub(crate) sampler: GenreSampler<P>,
    pub(crate) resolver: TitleResolver<P>,
    pub(crate) ranker: ContentRanker,
    pub(crate) provider_recommendations: ProviderRecommendations<P>,
    pub(crate) fallback: FallbackChain<P>,
    pub(crate) companies: CompanySuggestions<P>,
}

impl<P: MetadataProvider> RecommendationOrchestrator<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self::with_settings(provider, FlowSettings::default())
    }

    pub fn with_settings(provider: Arc<P>, settings: FlowSettings) -> Self {
        let sampler = GenreSampler::new(provider.clone())
            .with_candidate_limit(settings.candidate_limit)
            .with_sample_size(settings.sample_size);

        Self {
            settings,
            resolver: TitleResolver::new(provider.clone()),
            ranker: ContentRanker::new(),
            provider_recommendations: ProviderRecommendations::new(provider.clone()),
            fallback: FallbackChain::new(provider.clone()).with_sampler(sampler.clone()),
            companies: CompanySuggestions::new(provider),
            sampler,
        }
    }

    /// Run the flow picked from the menu or the command line. `preset`
    /// answers that flow's first prompt (the title or the genre).
    pub async fn run_choice<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        choice: MenuChoice,
        preset: Option<&str>,
    ) -> Result<()> {
        info!("Running {:?}", choice);

        match choice {
            MenuChoice::GlobalSearch => self.run_search_flow(console, preset).await,
            MenuChoice::GenreRecommendations => self.run_genre_flow(console, preset).await,
        }
    }
}
