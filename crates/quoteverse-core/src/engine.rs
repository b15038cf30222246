//! Main QuoteEngine - the primary entry point for QuoteVerse
//!
//! QuoteEngine coordinates the upstream fetcher, the aggregator and the
//! favorites store behind a single facade shared by the desktop UI and the
//! CLI.
//!
//! # Example
//!
//! ```ignore
//! use quoteverse_core::QuoteEngine;
//!
//! let mut engine = QuoteEngine::new("~/.quoteverse/data")?;
//!
//! // Fetch and aggregate quotes (degrades to the manual list on failure)
//! let quotes = engine.load_quotes().await;
//!
//! // Favorite one
//! engine.toggle_favorite(&quotes[0])?;
//! ```

use std::path::{Path, PathBuf};

use tracing::info;

use crate::aggregate::aggregate;
use crate::error::QuoteResult;
use crate::favorites::FavoritesStore;
use crate::fetch::QuoteFetcher;
use crate::types::Quote;

/// Main entry point for QuoteVerse
///
/// Owns the upstream fetcher and the persisted favorites set. All quote
/// loading goes through [`QuoteEngine::load_quotes`], which never fails:
/// fetch problems degrade to the manual quote list.
pub struct QuoteEngine {
    /// Upstream quote API client
    fetcher: QuoteFetcher,
    /// Persisted favorite quotes
    favorites: FavoritesStore,
    /// Data directory path
    data_dir: PathBuf,
}

impl QuoteEngine {
    /// Create a new QuoteEngine with the given data directory.
    ///
    /// Creates the directory if needed and loads any persisted favorites.
    pub fn new(data_dir: impl AsRef<Path>) -> QuoteResult<Self> {
        Self::with_fetcher(data_dir, QuoteFetcher::new())
    }

    /// Create an engine with a custom upstream endpoint
    pub fn with_quotes_url(data_dir: impl AsRef<Path>, url: impl Into<String>) -> QuoteResult<Self> {
        Self::with_fetcher(data_dir, QuoteFetcher::with_url(url))
    }

    fn with_fetcher(data_dir: impl AsRef<Path>, fetcher: QuoteFetcher) -> QuoteResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let favorites = FavoritesStore::load(&data_dir)?;
        info!(
            "QuoteEngine ready: data dir {:?}, {} favorites, upstream {}",
            data_dir,
            favorites.len(),
            fetcher.url()
        );
        Ok(Self {
            fetcher,
            favorites,
            data_dir,
        })
    }

    /// Fetch and aggregate the full quote list.
    ///
    /// Never fails: a fetch error yields the manual quotes alone.
    pub async fn load_quotes(&self) -> Vec<Quote> {
        aggregate(self.fetcher.fetch().await)
    }

    /// Toggle a quote's favorite status, persisting the change.
    ///
    /// Returns whether the quote is a favorite after the toggle.
    pub fn toggle_favorite(&mut self, quote: &Quote) -> QuoteResult<bool> {
        self.favorites.toggle(quote)
    }

    /// All favorited quotes
    pub fn favorites(&self) -> &[Quote] {
        self.favorites.list()
    }

    /// Whether the quote with the given id is favorited
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// The data directory this engine persists into
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
