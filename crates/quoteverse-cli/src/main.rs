//! QuoteVerse CLI
//!
//! Thin wrapper around quoteverse-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Fetch and list all quotes (manual + upstream)
//! quoteverse quotes
//!
//! # Filter by category and search by author or text
//! quoteverse quotes --filter funny --search twain
//!
//! # Classify arbitrary text
//! quoteverse categorize "I love that joke"
//!
//! # Favorites
//! quoteverse favorite toggle m1
//! quoteverse favorite list
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use quoteverse_core::{categorize, filter_quotes, Category, Filter, QuoteEngine, Quote};

/// QuoteVerse - quote browsing from the terminal
#[derive(Parser)]
#[command(name = "quoteverse")]
#[command(version = "0.1.0")]
#[command(about = "QuoteVerse - browse, search and favorite quotes")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: platform data dir + /quoteverse)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Upstream quote API endpoint override
    #[arg(long, global = true)]
    quotes_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and list quotes
    Quotes {
        /// Category filter key: all, inspirational, romantic, life, funny, dark
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Case-insensitive search over author and quote text
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Classify quote text into a category
    Categorize {
        /// The text to classify
        text: String,
    },

    /// Favorite management
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },
}

#[derive(Subcommand)]
enum FavoriteAction {
    /// Toggle a quote's favorite status by id
    Toggle {
        /// Quote id (e.g. m1 or api-3)
        id: String,
    },
    /// List favorited quotes
    List,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quoteverse")
}

fn print_quote(quote: &Quote, favorite: bool) {
    let marker = if favorite { "\u{2665}" } else { " " };
    println!("{} [{}] \"{}\"", marker, quote.category, quote.quote);
    println!("      \u{2014} {}  (id: {})", quote.author, quote.id);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let mut engine = match cli.quotes_url {
        Some(url) => QuoteEngine::with_quotes_url(&data_dir, url)?,
        None => QuoteEngine::new(&data_dir)?,
    };

    match cli.command {
        Commands::Quotes { filter, search } => {
            let active = match filter.as_str() {
                "all" => Filter::All,
                key => match Category::from_type_key(key) {
                    Some(cat) => Filter::Category(cat),
                    None => bail!(
                        "Unknown filter '{}' (expected all, inspirational, romantic, life, funny or dark)",
                        key
                    ),
                },
            };

            let quotes = engine.load_quotes().await;
            let visible = filter_quotes(&quotes, active, &search);
            if visible.is_empty() {
                println!("No quotes found");
            } else {
                for quote in &visible {
                    print_quote(quote, engine.is_favorite(&quote.id));
                }
                println!("\n{} of {} quotes", visible.len(), quotes.len());
            }
        }

        Commands::Categorize { text } => {
            let category = categorize(&text);
            println!("Category: {}", category.label());
            println!("Type: {}", category.type_key());
        }

        Commands::Favorite { action } => match action {
            FavoriteAction::Toggle { id } => {
                let quotes = engine.load_quotes().await;
                let Some(quote) = quotes.iter().find(|q| q.id == id).cloned() else {
                    bail!("No quote with id '{}'", id);
                };
                let now_favorite = engine.toggle_favorite(&quote)?;
                if now_favorite {
                    println!("Favorited: \"{}\" \u{2014} {}", quote.quote, quote.author);
                } else {
                    println!("Unfavorited: \"{}\" \u{2014} {}", quote.quote, quote.author);
                }
            }
            FavoriteAction::List => {
                if engine.favorites().is_empty() {
                    println!("No favorites yet");
                } else {
                    for quote in engine.favorites().to_vec() {
                        print_quote(&quote, true);
                    }
                }
            }
        },
    }

    Ok(())
}
