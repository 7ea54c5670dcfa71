use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orchestrator::{Console, FlowSettings, MenuChoice, RecommendationOrchestrator, prompt_choice};
use provider::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE, ProviderConfig, TmdbClient};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str =
    "warn,movie_recs=debug,orchestrator=debug,sources=debug,pipeline=debug,provider=debug";

/// movie-recs - Interactive movie recommendations backed by TMDB
#[derive(Parser)]
#[command(name = "movie-recs", version)]
#[command(about = "Find movies like the ones you love, by genre or by title", long_about = None)]
struct Cli {
    /// TMDB API key (v3 key or v4 read access token)
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Base URL of the TMDB API
    #[arg(long, env = "TMDB_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Language for titles and genre names
    #[arg(long, env = "TMDB_LANGUAGE", default_value = DEFAULT_LANGUAGE, global = true)]
    language: String,

    /// Movies shown for a genre
    #[arg(long, default_value_t = 10, global = true)]
    sample_size: usize,

    /// Search hits inspected when sampling a genre
    #[arg(long, default_value_t = 50, global = true)]
    candidates: usize,

    /// Debug logging for the recommendation crates
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Choose between the two flows (the default)
    Menu,

    /// Sample a genre and get recommendations for one of its movies
    Genre {
        /// Genre to sample; prompted for when missing
        #[arg(long)]
        genre: Option<String>,
    },

    /// Look a movie up by title and get similar movies
    Search {
        /// Title to look up; prompted for when missing
        #[arg(long)]
        title: Option<String>,
    },
}

impl Cli {
    fn provider_config(&self) -> Result<ProviderConfig> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .context("No TMDB API key. Pass --api-key or set TMDB_API_KEY (a .env file works too)")?;

        Ok(ProviderConfig::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_language(self.language.clone()))
    }

    fn flow_settings(&self) -> FlowSettings {
        FlowSettings {
            sample_size: self.sample_size,
            candidate_limit: self.candidates,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Pick the flow (asking the menu when no subcommand was given), then
/// connect to TMDB and run it. An invalid menu answer ends the run before
/// any configuration is checked or any request is made.
async fn run<R: BufRead, W: Write>(mut cli: Cli, console: &mut Console<R, W>) -> Result<()> {
    let (choice, preset) = match cli.command.take() {
        None | Some(Commands::Menu) => match prompt_choice(console)? {
            Some(choice) => (choice, None),
            None => return Ok(()),
        },
        Some(Commands::Genre { genre }) => (MenuChoice::GenreRecommendations, genre),
        Some(Commands::Search { title }) => (MenuChoice::GlobalSearch, title),
    };

    let config = cli.provider_config()?;
    debug!("Provider config: {:?}", config);

    let client = TmdbClient::connect(config)
        .await
        .context("Failed to set up the TMDB client")?;
    let orchestrator = RecommendationOrchestrator::with_settings(Arc::new(client), cli.flow_settings());

    orchestrator.run_choice(console, choice, preset.as_deref()).await?;
    info!("Finished {:?}", choice);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    run(cli, &mut console).await
}
