// src/main.rs

//! wordwatch CLI
//!
//! Drives the library against an in-memory store: one-shot ingestion, the
//! periodic scheduler, word form expansion and appearance queries.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use wordwatch::error::Result;
use wordwatch::models::{Config, WordOptions};
use wordwatch::pipeline::{appearances_for_text, run_ingest_once, start_scheduler};
use wordwatch::services::NewsScraper;
use wordwatch::services::declension::expand;
use wordwatch::services::vocative::StaticVocatives;
use wordwatch::storage::{ArticleStore, MemoryStore};

#[derive(Parser, Debug)]
#[command(
    name = "wordwatch",
    version = "0.1.0",
    about = "News ingestion and tracked word appearances"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one ingestion pass and print the outcome
    Ingest {
        /// Maximum listing stubs to enrich
        #[arg(long)]
        limit: Option<usize>,

        /// Maximum concurrent detail fetches
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// Run the ingestion scheduler until interrupted
    Watch,
    /// Print the surface forms generated for a word
    Forms {
        word: String,

        /// Match only the word itself, without declension expansion
        #[arg(long)]
        no_declensions: bool,

        /// Disable the suffix rule table
        #[arg(long)]
        no_stemming: bool,

        /// Caller-supplied surface form (repeatable; disables generation)
        #[arg(long = "pattern")]
        patterns: Vec<String>,
    },
    /// Ingest once, then report where a word appears
    Appearances {
        word: String,

        #[arg(long)]
        no_declensions: bool,

        #[arg(long)]
        no_stemming: bool,

        #[arg(long = "pattern")]
        patterns: Vec<String>,

        /// Maximum listing stubs to enrich before the search
        #[arg(long)]
        limit: Option<usize>,

        /// Print the appearances as JSON
        #[arg(long)]
        json: bool,
    },
}

fn word_options(no_declensions: bool, no_stemming: bool, patterns: Vec<String>) -> WordOptions {
    WordOptions {
        use_declensions: !no_declensions,
        declension_patterns: patterns,
        stemming_enabled: !no_stemming,
    }
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Arc::new(Config::load_or_default(&cli.config));
    config.validate()?;

    match cli.command {
        Command::Ingest { limit, concurrency } => run_ingest(config, limit, concurrency).await?,
        Command::Watch => run_watch(config).await?,
        Command::Forms {
            word,
            no_declensions,
            no_stemming,
            patterns,
        } => {
            let options = word_options(no_declensions, no_stemming, patterns);
            let forms = expand(&word, &options, Some(&StaticVocatives))?;
            for form in forms {
                println!("{form}");
            }
        }
        Command::Appearances {
            word,
            no_declensions,
            no_stemming,
            patterns,
            limit,
            json,
        } => {
            let options = word_options(no_declensions, no_stemming, patterns);
            run_appearances(config, &word, options, limit, json).await?;
        }
    }

    Ok(())
}

async fn run_ingest(
    config: Arc<Config>,
    limit: Option<usize>,
    concurrency: Option<usize>,
) -> Result<()> {
    let mut config = (*config).clone();
    if let Some(limit) = limit {
        config.scheduler.limit = limit;
    }
    if let Some(concurrency) = concurrency {
        config.scheduler.concurrency = concurrency;
    }
    let config = Arc::new(config);

    let scraper = NewsScraper::new(Arc::clone(&config));
    let store = MemoryStore::new();

    let outcome = run_ingest_once(&scraper, &store, &config.scheduler).await?;
    println!(
        "requested={} scraped={} saved={}",
        outcome.requested, outcome.scraped, outcome.saved
    );

    for article in store.list_articles(outcome.saved.max(1)).await? {
        println!("[{}] {} ({})", article.id, article.title, article.url);
    }
    Ok(())
}

async fn run_watch(config: Arc<Config>) -> Result<()> {
    let scraper = Arc::new(NewsScraper::new(Arc::clone(&config)));
    let store: Arc<dyn ArticleStore> = Arc::new(MemoryStore::new());

    let handle = start_scheduler(scraper, store, &config);
    tokio::signal::ctrl_c().await?;
    handle.stop();
    log::info!("Scheduler stopped");
    Ok(())
}

async fn run_appearances(
    config: Arc<Config>,
    word: &str,
    options: WordOptions,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut config = (*config).clone();
    if let Some(limit) = limit {
        config.scheduler.limit = limit;
    }
    let config = Arc::new(config);

    let scraper = NewsScraper::new(Arc::clone(&config));
    let store = MemoryStore::new();
    run_ingest_once(&scraper, &store, &config.scheduler).await?;

    let appearances = appearances_for_text(&store, word, &options, Some(&StaticVocatives)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&appearances)?);
        return Ok(());
    }

    if appearances.is_empty() {
        println!("No appearances of '{word}'");
        return Ok(());
    }

    for appearance in appearances {
        println!(
            "{} ({}): {} appearance(s)",
            appearance.article.title, appearance.article.url, appearance.count
        );
        for context in appearance.contexts {
            println!("  [{}] …{}…", context.position, context.text);
        }
    }
    Ok(())
}
