//! QuoteVerse Core Library
//!
//! Quote fetching, categorization, aggregation and favorites for the
//! QuoteVerse desktop app and CLI.
//!
//! ## Overview
//!
//! QuoteVerse merges a small curated quote list with quotes fetched from an
//! upstream API, classifies each by a keyword rule table, and lets the user
//! filter, search and favorite them. Mood-themed gradients for the UI are
//! resolved here as well, so every front end shares one theming table.
//!
//! ## Core Principles
//!
//! - **Never empty**: a failed fetch degrades to the manual quote list
//! - **Never fatal**: corrupt favorites load as empty, unknown moods resolve
//!   through a default gradient
//! - **Pure where possible**: categorization, gradient resolution and
//!   filtering are pure functions over their inputs
//!
//! ## Quick Start
//!
//! ```ignore
//! use quoteverse_core::{Filter, QuoteEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = QuoteEngine::new("~/.quoteverse/data")?;
//!
//!     let quotes = engine.load_quotes().await;
//!     for quote in quoteverse_core::filter_quotes(&quotes, Filter::All, "rumi") {
//!         println!("[{}] \"{}\" - {}", quote.category, quote.quote, quote.author);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod categorize;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod fetch;
pub mod filter;
pub mod gradient;
pub mod types;

// Re-exports
pub use aggregate::{aggregate, manual_quotes};
pub use categorize::categorize;
pub use engine::QuoteEngine;
pub use error::{QuoteError, QuoteResult};
pub use favorites::FavoritesStore;
pub use fetch::{QuoteFetcher, RawQuote, DEFAULT_QUOTES_URL};
pub use filter::{filter_counts, filter_quotes, Filter};
pub use gradient::{resolve, GradientDescriptor};
pub use types::{Category, Mood, Quote, ThemeMode};
