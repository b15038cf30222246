//! Categories page - filter/search grid over the aggregated quote list.
//!
//! Loads the aggregated quotes once the engine is ready, then recomputes the
//! visible subset as a pure projection of (quotes, filter, search term).

use dioxus::prelude::*;
use quoteverse_core::{filter_counts, filter_quotes, Filter, Quote};

use crate::components::{MoodBackground, NavHeader, NavLocation, QuoteCard};
use crate::context::{use_engine, use_engine_ready};

/// Categories page component.
#[component]
pub fn Categories() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();

    // Local UI state
    let mut all_quotes: Signal<Vec<Quote>> = use_signal(Vec::new);
    let mut favorite_ids: Signal<Vec<String>> = use_signal(Vec::new);
    let mut loading: Signal<bool> = use_signal(|| true);
    let mut active_filter: Signal<Filter> = use_signal(Filter::default);
    let mut search_term: Signal<String> = use_signal(String::new);

    // Load aggregated quotes when the engine becomes ready
    use_effect(move || {
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    let quotes = eng.load_quotes().await;
                    let ids = eng.favorites().iter().map(|q| q.id.clone()).collect();
                    all_quotes.set(quotes);
                    favorite_ids.set(ids);
                }
                loading.set(false);
            });
        }
    });

    // Handler for toggling a favorite
    let toggle_favorite = move |quote: Quote| {
        spawn(async move {
            let shared = engine();
            let mut guard = shared.write().await;
            if let Some(ref mut eng) = *guard {
                match eng.toggle_favorite(&quote) {
                    Ok(_) => {
                        let ids = eng.favorites().iter().map(|q| q.id.clone()).collect();
                        favorite_ids.set(ids);
                    }
                    Err(e) => {
                        tracing::error!("Failed to toggle favorite: {}", e);
                    }
                }
            }
        });
    };

    let quotes = all_quotes();
    let visible: Vec<Quote> = filter_quotes(&quotes, active_filter(), &search_term())
        .into_iter()
        .cloned()
        .collect();

    let chips = filter_counts(&quotes).into_iter().map(|(chip, count)| {
        let class = if chip == active_filter() {
            "filter-chip active"
        } else {
            "filter-chip"
        };
        let key = chip.key();
        let label = chip.label();
        rsx! {
            button {
                key: "{key}",
                class: "{class}",
                onclick: move |_| active_filter.set(chip),
                "{label}"
                span { class: "chip-count", "{count}" }
            }
        }
    });

    rsx! {
        NavHeader { current: NavLocation::Categories }

        main { class: "page",
            MoodBackground {}

            div { class: "page-heading",
                h1 { class: "page-title", "Quote Categories" }
                p { class: "page-subtitle", "Explore quotes by category or search by author" }
            }

            div { class: "filter-row",
                input {
                    class: "search-input",
                    placeholder: "Search by author",
                    value: "{search_term}",
                    oninput: move |e| search_term.set(e.value()),
                }

                div { class: "filter-chips", {chips} }
            }

            if loading() {
                p { class: "status-message", "Loading quotes..." }
            } else if visible.is_empty() {
                p { class: "status-message", "No quotes found" }
            } else {
                div { class: "quote-grid",
                    for quote in visible {
                        QuoteCard {
                            key: "{quote.id}",
                            quote: quote.clone(),
                            favorited: favorite_ids().contains(&quote.id),
                            on_toggle_favorite: toggle_favorite,
                        }
                    }
                }
            }
        }
    }
}
