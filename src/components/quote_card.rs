//! Quote card component.
//!
//! Glass card with category badge, quote text, author line and a favorite
//! heart. Used by the categories and favorites grids.

use dioxus::prelude::*;
use quoteverse_core::Quote;

/// Individual quote card.
///
/// # Props
///
/// * `quote` - The quote to display
/// * `favorited` - Whether the quote is in the favorites set
/// * `on_toggle_favorite` - Called with the quote when the heart is clicked;
///   omit to render without the heart (favorites page)
#[component]
pub fn QuoteCard(
    quote: Quote,
    favorited: bool,
    on_toggle_favorite: Option<EventHandler<Quote>>,
) -> Element {
    let heart_class = if favorited {
        "favorite-button favorited"
    } else {
        "favorite-button"
    };
    let heart_label = if favorited {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };
    let category_label = quote.category.label();
    let quote_for_toggle = quote.clone();

    let heart = on_toggle_favorite.map(|handler| {
        rsx! {
            button {
                class: "{heart_class}",
                onclick: move |_| handler.call(quote_for_toggle.clone()),
                "aria-label": "{heart_label}",
                "\u{2665}"
            }
        }
    });

    rsx! {
        div { class: "quote-card",
            div { class: "quote-card-header",
                span { class: "category-badge", "{category_label}" }
                {heart}
            }
            p { class: "quote-text", "\u{201C}{quote.quote}\u{201D}" }
            p { class: "quote-author", "\u{2014} {quote.author}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_class_logic() {
        let favorited = true;
        let class = if favorited { "favorite-button favorited" } else { "favorite-button" };
        assert_eq!(class, "favorite-button favorited");

        let favorited = false;
        let class = if favorited { "favorite-button favorited" } else { "favorite-button" };
        assert_eq!(class, "favorite-button");
    }
}
