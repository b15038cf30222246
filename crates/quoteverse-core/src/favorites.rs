//! Persisted favorite quotes.
//!
//! A small set keyed by quote id, stored as a single JSON array under the
//! data directory. Every mutation rewrites the full file; at current scale
//! (tens of quotes) wholesale rewrite is simpler than incremental updates.
//! An absent or corrupt file loads as an empty set, never an error.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::QuoteResult;
use crate::types::Quote;

/// File name for the persisted set, under the data directory
const FAVORITES_FILE: &str = "favorites.json";

/// Persisted set of favorited quotes
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
    quotes: Vec<Quote>,
}

impl FavoritesStore {
    /// Load the favorites set from the given data directory.
    ///
    /// Creates the directory if needed. An absent file initializes an empty
    /// set; a corrupt file is treated as absent with a logged warning.
    pub fn load(data_dir: impl AsRef<Path>) -> QuoteResult<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(FAVORITES_FILE);

        let quotes = match std::fs::read_to_string(&path) {
            Ok(body) => match serde_json::from_str(&body) {
                Ok(quotes) => quotes,
                Err(e) => {
                    warn!("Corrupt favorites file {:?}, starting empty: {}", path, e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, quotes })
    }

    /// Toggle a quote's favorite status.
    ///
    /// Removes the quote when already present (by id), adds it otherwise,
    /// then rewrites the full set to disk. Returns whether the quote is a
    /// favorite after the toggle.
    pub fn toggle(&mut self, quote: &Quote) -> QuoteResult<bool> {
        let now_favorite = if let Some(pos) = self.quotes.iter().position(|q| q.id == quote.id) {
            self.quotes.remove(pos);
            false
        } else {
            self.quotes.push(quote.clone());
            true
        };
        self.persist()?;
        Ok(now_favorite)
    }

    /// Whether the quote with the given id is favorited
    pub fn contains(&self, id: &str) -> bool {
        self.quotes.iter().any(|q| q.id == id)
    }

    /// All favorited quotes, in insertion order
    pub fn list(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    fn persist(&self) -> QuoteResult<()> {
        let body = serde_json::to_string_pretty(&self.quotes)?;
        std::fs::write(&self.path, body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use tempfile::TempDir;

    fn quote(id: &str) -> Quote {
        Quote::new(id, "Some wisdom", "Someone", Category::Inspirational)
    }

    #[test]
    fn test_load_from_empty_dir() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::load(dir.path()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let dir = TempDir::new().unwrap();
        let mut store = FavoritesStore::load(dir.path()).unwrap();

        assert!(store.toggle(&quote("m1")).unwrap());
        assert!(store.contains("m1"));
        assert_eq!(store.len(), 1);

        assert!(!store.toggle(&quote("m1")).unwrap());
        assert!(!store.contains("m1"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_original_set() {
        let dir = TempDir::new().unwrap();
        let mut store = FavoritesStore::load(dir.path()).unwrap();
        store.toggle(&quote("m1")).unwrap();

        let before: Vec<String> = store.list().iter().map(|q| q.id.clone()).collect();
        store.toggle(&quote("api-3")).unwrap();
        store.toggle(&quote("api-3")).unwrap();
        let after: Vec<String> = store.list().iter().map(|q| q.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_no_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        let mut store = FavoritesStore::load(dir.path()).unwrap();
        store.toggle(&quote("m1")).unwrap();
        store.toggle(&quote("m1")).unwrap();
        store.toggle(&quote("m1")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_favorites_survive_reload() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = FavoritesStore::load(dir.path()).unwrap();
            store.toggle(&quote("m1")).unwrap();
            store.toggle(&quote("api-0")).unwrap();
        }
        let store = FavoritesStore::load(dir.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.contains("m1"));
        assert!(store.contains("api-0"));
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(FAVORITES_FILE), "{not valid json").unwrap();
        let store = FavoritesStore::load(dir.path()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_after_corrupt_load_overwrites_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(FAVORITES_FILE), "[[[").unwrap();
        let mut store = FavoritesStore::load(dir.path()).unwrap();
        store.toggle(&quote("m2")).unwrap();

        let reloaded = FavoritesStore::load(dir.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.contains("m2"));
    }
}
