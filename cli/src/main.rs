//! CLI entrypoint for quotesmith
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quotesmith_application::{LineSource, QuoteComposer, QuoteService};
use quotesmith_domain::{Quote, QuoteValidator, daily_line_number};
use quotesmith_infrastructure::{ConfigLoader, FileLexicon, FileLineSource, HuggingFaceGenerator};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments for quotesmith
#[derive(Parser, Debug)]
#[command(name = "quotesmith")]
#[command(author, version, about = "Generated quotes: daily picks, random and prompted generation")]
#[command(long_about = r#"
Quotesmith serves short generated quotes in three modes:

  daily     A deterministic pick for today's date (offline)
  random    A generation from a random prompt starter
  prompted  A generation from your own prompt
  pool      Run the background producer and serve quotes from its queue

Configuration files are loaded from (in priority order):
1. --config <path>      Explicit config file
2. ./quotesmith.toml    Project-level config
3. ~/.config/quotesmith/config.toml   Global config

The API credential is read from the QUOTESMITH_API_KEY environment
variable.

Example:
  quotesmith daily
  quotesmith prompted "The purpose of art is"
  quotesmith pool --count 5
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    no_config: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print today's quote (no network access)
    Daily,
    /// Generate one quote from a random prompt starter
    Random,
    /// Generate one quote from the given prompt
    Prompted {
        /// Opening words the quote must start with
        prompt: String,
    },
    /// Start the background producer and serve quotes from its queue
    Pool {
        /// How many quotes to serve before stopping
        #[arg(short, long, default_value_t = 5)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let daily_quotes = Arc::new(
        FileLineSource::load(&config.assets.daily_quotes)
            .context("loading the daily quotes list")?,
    );

    // The daily pick is pure and offline; skip credential and assets
    // the generation pipeline would need
    if matches!(cli.command, Command::Daily) {
        let today = chrono::Local::now().date_naive();
        let number = daily_line_number(today, daily_quotes.line_count());
        println!("{}", Quote::new(daily_quotes.line(number).unwrap_or_default()));
        return Ok(());
    }

    // === Dependency Injection ===
    let quote_starters = Arc::new(
        FileLineSource::load(&config.assets.quote_starters)
            .context("loading the quote starters list")?,
    );
    let lexicon =
        Arc::new(FileLexicon::load(&config.assets.lexicon).context("loading the word lexicon")?);
    let api_key = ConfigLoader::api_key()?;

    let generator = Arc::new(HuggingFaceGenerator::new(&config.api.endpoint, api_key));
    let composer = QuoteComposer::new(
        generator,
        QuoteValidator::new(lexicon),
        Arc::clone(&daily_quotes) as Arc<dyn LineSource>,
    )
    .with_params(config.generation.clone());

    let service = QuoteService::new(
        composer,
        daily_quotes,
        quote_starters,
        config.pool.to_pool_config(),
    );

    match cli.command {
        Command::Daily => unreachable!("handled above"),
        Command::Random => {
            println!("{}", service.random_quote().await);
        }
        Command::Prompted { prompt } => {
            println!("{}", service.prompted_quote(&prompt).await);
        }
        Command::Pool { count } => {
            service.start()?;
            info!(count, "producer running; serving from the pool");

            for _ in 0..count {
                println!("{}", service.random_quote().await);
                tokio::time::sleep(Duration::from_millis(250)).await;
            }

            service.stop().await?;
        }
    }

    Ok(())
}
