//! Shared application context for QuoteVerse.
//!
//! Provides the QuoteEngine, the current mood and the theme mode to all
//! components via use_context. Mood and theme are session-lifetime signals
//! with a single mutation entry point each; every page reads them through
//! the hooks here rather than ambient globals.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let engine = use_engine();
//! let mood = use_mood();
//! let theme = use_theme_mode();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use quoteverse_core::{Mood, QuoteEngine, ThemeMode};
use tokio::sync::RwLock;

/// Shared engine type for context.
///
/// The engine is wrapped in Arc<RwLock<>> to allow:
/// - Multiple components to read concurrently
/// - Safe mutation when toggling favorites
pub type SharedEngine = Arc<RwLock<Option<QuoteEngine>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the upstream quote API override (if set via --quotes-url).
pub fn get_quotes_url() -> Option<String> {
    crate::get_quotes_url()
}

/// Hook to access the QuoteEngine from context.
///
/// Returns a Signal containing the shared engine state.
///
/// # Example
///
/// ```ignore
/// let engine = use_engine();
///
/// // Read engine state
/// if let Some(ref eng) = *engine.read().await {
///     let favorited = eng.is_favorite("m1");
/// }
/// ```
pub fn use_engine() -> Signal<SharedEngine> {
    use_context::<Signal<SharedEngine>>()
}

/// Hook to check if the engine is initialized.
///
/// Returns a reactive signal that updates when engine state changes.
pub fn use_engine_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to access the shared mood state.
///
/// The mood drives the gradient background on every page. It changes only
/// through `Signal::set` on this handle (the hero deck advance and nothing
/// else mutates it today).
pub fn use_mood() -> Signal<Mood> {
    use_context::<Signal<Mood>>()
}

/// Hook to access the light/dark theme mode.
///
/// Read-only input to gradient resolution; toggled from the nav header.
pub fn use_theme_mode() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}
