//! Genre flow: sample a genre, pick a title, get two kinds of suggestions.
//!
//! 1. Ask for a genre and show a random sample of it
//! 2. Ask for a title; look in the sample first, then search globally
//! 3. Rank the sample by genre similarity to the chosen title
//! 4. Show the provider's own recommendations for it

use std::io::{BufRead, Write};

use anyhow::Result;
use catalog::Movie;
use colored::Colorize;
use pipeline::dedup_by_title;
use provider::MetadataProvider;
use sources::Outcome;
use tracing::{info, warn};

use crate::console::Console;
use crate::orchestrator::RecommendationOrchestrator;

pub const GENRE_PROMPT: &str = "Please enter a genre (e.g., Action, Drama, Comedy, Horror, Romance, Sci-Fi, \
                                Thriller, Fantasy, Documentary, Animation, Crime, Musical, Western): ";

pub const TITLE_PROMPT: &str = "\nEnter the movie title you want recommendations based on: ";

/// Case-insensitive exact title lookup within the sample
pub fn find_in_sample<'a>(movies: &'a [Movie], title: &str) -> Option<&'a Movie> {
    let wanted = title.to_lowercase();
    movies.iter().find(|m| m.title.to_lowercase() == wanted)
}

impl<P: MetadataProvider> RecommendationOrchestrator<P> {
    /// Run the genre flow. `genre` skips the genre prompt when given.
    pub async fn run_genre_flow<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        genre: Option<&str>,
    ) -> Result<()> {
        console.say("Welcome to the Genre-based Movie Recommendation System!\n".bold())?;

        let genre = match genre {
            Some(genre) => genre.trim().to_string(),
            None => console.prompt(GENRE_PROMPT)?,
        };

        let sample = match self.sampler.sample(&genre).await {
            Ok(sample) => sample,
            Err(e) => {
                warn!("{:#}", e);
                console.say(format!("Could not load movies for genre '{}': {:#}", genre, e))?;
                Vec::new()
            }
        };
        info!("Showing {} movies for genre '{}'", sample.len(), genre);

        console.say(
            format!(
                "\nTop {} random movies in genre '{}':",
                self.settings.sample_size, genre
            )
            .bold()
            .blue(),
        )?;
        if sample.is_empty() {
            console.say(format!("No movies found in genre '{}'.", genre))?;
        }
        console.show_movies(&sample)?;

        let choice = console.prompt(TITLE_PROMPT)?;

        let selected = match find_in_sample(&sample, &choice) {
            Some(movie) => Some(movie.clone()),
            None => {
                console.say(format!(
                    "'{}' not found in the current genre. Searching globally...",
                    choice
                ))?;
                match self.resolver.resolve(&choice).await {
                    Ok(record) => record.map(|r| r.movie),
                    Err(e) => {
                        warn!("{:#}", e);
                        console.say(format!("The search for '{}' failed: {:#}", choice, e))?;
                        None
                    }
                }
            }
        };

        let Some(selected) = selected else {
            console.say(format!("Sorry, no movie found with the title '{}'.", choice))?;
            return Ok(());
        };

        self.show_content_recommendations(console, &sample, &selected)?;
        self.show_provider_recommendations(console, &selected).await
    }

    fn show_content_recommendations<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        sample: &[Movie],
        selected: &Movie,
    ) -> Result<()> {
        let ranked = match self.ranker.rank(sample, &selected.title) {
            Ok(ranked) => dedup_by_title(ranked),
            Err(e) => {
                warn!("Genre comparison skipped: {}", e);
                console.say(format!("Genre comparison unavailable: {}", e))?;
                return Ok(());
            }
        };

        if ranked.is_empty() {
            return Ok(());
        }

        console.say(
            format!(
                "\n\nBecause you liked '{}', you might also like:\n",
                selected.title
            )
            .bold()
            .green(),
        )?;
        console.show_movies(&ranked)
    }

    async fn show_provider_recommendations<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        selected: &Movie,
    ) -> Result<()> {
        match self.provider_recommendations.for_movie(selected).await {
            Outcome::Found(movies) => {
                console.say(format!("\nOther movies similar to '{}':\n", selected.title).bold().green())?;
                console.show_movies(&movies)
            }
            Outcome::Empty => console.say(format!(
                "Sorry, no similar movies found for '{}'.",
                selected.title
            )),
            Outcome::Failed(e) => console.say(format!(
                "Could not fetch similar movies for '{}': {:#}",
                selected.title, e
            )),
        }
    }
}
