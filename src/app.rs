use std::sync::Arc;

use dioxus::prelude::*;
use quoteverse_core::{Mood, QuoteEngine, ThemeMode};
use tokio::sync::RwLock;

use crate::context::{get_data_dir, get_quotes_url, SharedEngine};
use crate::pages::{Categories, Favorites, Home, Random};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with the mood-rotating hero quote card
/// - `/categories` - Filter/search grid over the aggregated quote list
/// - `/random` - Floating quote bubbles with a detail modal
/// - `/favorites` - Saved quotes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/categories")]
    Categories {},
    #[route("/random")]
    Random {},
    #[route("/favorites")]
    Favorites {},
}

/// Root application component.
///
/// Provides global styles, engine/mood/theme context, and routing.
#[component]
pub fn App() -> Element {
    // Initialize shared engine state
    let engine: Signal<SharedEngine> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut engine_ready: Signal<bool> = use_signal(|| false);

    // Shared mood and theme state, read by every page background
    let mood: Signal<Mood> = use_signal(Mood::default);
    let theme: Signal<ThemeMode> = use_signal(ThemeMode::default);

    // Provide context to all child components
    use_context_provider(|| engine);
    use_context_provider(|| engine_ready);
    use_context_provider(|| mood);
    use_context_provider(|| theme);

    // Initialize engine on mount
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            let result = match get_quotes_url() {
                Some(url) => QuoteEngine::with_quotes_url(&data_dir, url),
                None => QuoteEngine::new(&data_dir),
            };
            match result {
                Ok(eng) => {
                    let shared = engine();
                    let mut guard = shared.write().await;
                    *guard = Some(eng);
                    drop(guard);
                    engine_ready.set(true);
                    tracing::info!("QuoteEngine initialized");
                }
                Err(e) => {
                    tracing::error!("Failed to initialize QuoteEngine: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
