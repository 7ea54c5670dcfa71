//! Global search flow: one title, then fallback and company suggestions.

use std::io::{BufRead, Write};

use anyhow::Result;
use catalog::{Movie, MovieRecord};
use colored::Colorize;
use provider::MetadataProvider;
use sources::{Outcome, Strategy, Suggestions};
use tracing::warn;

use crate::console::Console;
use crate::orchestrator::RecommendationOrchestrator;

pub const TITLE_PROMPT: &str = "Enter the name of your favorite movie: ";

impl<P: MetadataProvider> RecommendationOrchestrator<P> {
    /// Run the global search flow. `title` skips the prompt when given.
    pub async fn run_search_flow<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        title: Option<&str>,
    ) -> Result<()> {
        console.say("Welcome to the Global Movie Search System!\n".bold())?;

        let choice = match title {
            Some(title) => title.trim().to_string(),
            None => console.prompt(TITLE_PROMPT)?,
        };

        let record = match self.resolver.resolve(&choice).await {
            Ok(record) => record,
            Err(e) => {
                warn!("{:#}", e);
                console.say(format!("The search for '{}' failed: {:#}", choice, e))?;
                None
            }
        };

        let Some(record) = record else {
            console.say(format!("Sorry, no movie found with the title '{}'.", choice))?;
            return Ok(());
        };

        console.say("\nMovie found!".bold().green())?;
        console.show_movie(&record.movie)?;

        self.show_fallback_suggestions(console, &record).await?;
        self.show_company_suggestions(console, &record.movie).await
    }

    async fn show_fallback_suggestions<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        record: &MovieRecord,
    ) -> Result<()> {
        let title = &record.movie.title;
        // the sequel search only runs when the provider had no recommendations
        let searched_related = record.recommendations.is_empty();

        match self.fallback.suggest(record).await {
            Outcome::Found(Suggestions { strategy, movies }) => {
                match strategy {
                    Strategy::ProviderNative => {
                        console.say(format!("\nMovies similar to '{}':\n", title).bold().green())?;
                    }
                    Strategy::RelatedTitles => {
                        say_no_native(console, title)?;
                        console.say("Found related movies (possibly sequels or prequels):".bold().green())?;
                    }
                    Strategy::SameGenre => {
                        if searched_related {
                            say_no_native(console, title)?;
                            console.say("No sequels or related parts found. Searching by genre...")?;
                        }
                        console.say(
                            format!("\nMovies based on the same genre as '{}':", title)
                                .bold()
                                .green(),
                        )?;
                    }
                }
                console.show_movies(&movies)
            }
            Outcome::Empty => {
                if searched_related {
                    say_no_native(console, title)?;
                    console.say("No sequels or related parts found. Searching by genre...")?;
                }
                console.say(format!("Sorry, no similar movies found for '{}'.", title))
            }
            Outcome::Failed(e) => console.say(format!(
                "An error occurred while fetching similar movies: {:#}",
                e
            )),
        }
    }

    async fn show_company_suggestions<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        movie: &Movie,
    ) -> Result<()> {
        match self.companies.for_movie(movie).await {
            Outcome::Found(movies) => {
                console.say(
                    format!(
                        "\nMovies from the same production companies as '{}':",
                        movie.title
                    )
                    .bold()
                    .green(),
                )?;
                console.show_movies(&movies)
            }
            Outcome::Empty => console.say(format!(
                "Sorry, no movies found based on production companies of '{}'.",
                movie.title
            )),
            Outcome::Failed(e) => console.say(format!(
                "Could not look up movies from the production companies of '{}': {:#}",
                movie.title, e
            )),
        }
    }
}

fn say_no_native<R: BufRead, W: Write>(console: &mut Console<R, W>, title: &str) -> Result<()> {
    console.say(format!("\nSorry, no similar movies found for '{}'.", title))?;
    console.say("Checking for sequels or related parts...")
}
