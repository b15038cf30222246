//! Favorites page - the quotes the user has saved.
//!
//! Reads the persisted favorites set from the engine on mount. Hearts on
//! this page unfavorite directly, so the set can be pruned in place.

use chrono::Datelike;
use dioxus::prelude::*;
use quoteverse_core::Quote;

use crate::components::{MoodBackground, NavHeader, NavLocation, QuoteCard};
use crate::context::{use_engine, use_engine_ready};

/// Favorites page component.
#[component]
pub fn Favorites() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();

    let mut favorites: Signal<Vec<Quote>> = use_signal(Vec::new);

    // Load favorites when the engine becomes ready
    use_effect(move || {
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    favorites.set(eng.favorites().to_vec());
                }
            });
        }
    });

    // Unfavorite directly from the grid
    let remove_favorite = move |quote: Quote| {
        spawn(async move {
            let shared = engine();
            let mut guard = shared.write().await;
            if let Some(ref mut eng) = *guard {
                match eng.toggle_favorite(&quote) {
                    Ok(_) => favorites.set(eng.favorites().to_vec()),
                    Err(e) => tracing::error!("Failed to remove favorite: {}", e),
                }
            }
        });
    };

    let year = chrono::Utc::now().year();

    rsx! {
        NavHeader { current: NavLocation::Favorites }

        main { class: "page",
            MoodBackground {}

            div { class: "page-heading",
                h1 { class: "page-title", "Your Favorites" }
                p { class: "page-subtitle",
                    "A collection of quotes you've saved to inspire and guide you"
                }
            }

            if favorites().is_empty() {
                p { class: "status-message", "You haven't added any favorites yet." }
            } else {
                div { class: "quote-grid",
                    for quote in favorites() {
                        QuoteCard {
                            key: "{quote.id}",
                            quote: quote.clone(),
                            favorited: true,
                            on_toggle_favorite: remove_favorite,
                        }
                    }
                }
            }
        }

        footer { class: "footer",
            p { class: "footer-text", "\u{00A9} {year} QuoteVerse \u{2014} All Rights Reserved" }
        }
    }
}
