//! Random page - floating quote bubbles with a detail modal.
//!
//! A fixed local list rendered as floating bubbles; clicking one opens a
//! modal with the full quote. Clicking outside the card closes it.

use dioxus::prelude::*;

use crate::components::{MoodBackground, NavHeader, NavLocation};

/// Fixed bubble quotes: (text, author)
const BUBBLE_QUOTES: &[(&str, &str)] = &[
    (
        "Do not be satisfied with the stories that come before you. Unfold your own myth.",
        "Rumi",
    ),
    (
        "Life is really simple, but we insist on making it complicated.",
        "Confucius",
    ),
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    (
        "I told my wife she was drawing her eyebrows too high. She looked surprised.",
        "Unknown",
    ),
    (
        "Love is composed of a single soul inhabiting two bodies.",
        "Aristotle",
    ),
    (
        "He who has a thousand friends has not a friend to spare, and he who has one enemy will meet him everywhere.",
        "Hazrat Ali (RA)",
    ),
    (
        "Don't get lost in your pain, know that one day your pain will become your cure.",
        "Rumi",
    ),
    ("Out of suffering have emerged the strongest souls.", "Khalil Gibran"),
    (
        "Your pain is the breaking of the shell that encloses your understanding.",
        "Khalil Gibran",
    ),
    (
        "You can cut all the flowers but you cannot keep spring from coming.",
        "Pablo Neruda",
    ),
    ("We know what we are, but know not what we may be.", "William Shakespeare"),
    ("Knowledge enlivens the soul.", "Hazrat Ali (RA)"),
    (
        "Patience is of two kinds: patience over what pains you, and patience against what you covet.",
        "Hazrat Ali (RA)",
    ),
];

/// Random page component.
#[component]
pub fn Random() -> Element {
    let mut selected: Signal<Option<usize>> = use_signal(|| None);

    let bubbles = BUBBLE_QUOTES.iter().enumerate().map(|(i, (text, author))| {
        // Stagger the float animation so bubbles drift out of phase
        let style = format!("animation-delay: -{}s;", i % 5);
        rsx! {
            div {
                key: "{i}",
                class: "quote-bubble",
                style: "{style}",
                onclick: move |_| selected.set(Some(i)),
                p { class: "bubble-text", "\u{201C}{text}\u{201D}" }
                p { class: "bubble-author", "\u{2014} {author}" }
            }
        }
    });

    let modal = selected().map(|index| {
        let (text, author) = BUBBLE_QUOTES[index];
        rsx! {
            div {
                class: "modal-overlay",
                onclick: move |_| selected.set(None),
                div {
                    class: "modal-card",
                    onclick: move |e| e.stop_propagation(),
                    p { class: "modal-quote", "\u{201C}{text}\u{201D}" }
                    p { class: "modal-author", "\u{2014} {author}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| selected.set(None),
                        "Close"
                    }
                }
            }
        }
    });

    rsx! {
        NavHeader { current: NavLocation::Random }

        main { class: "page",
            MoodBackground {}

            div { class: "page-heading",
                h1 { class: "page-title", "Random Quotes" }
                p { class: "page-subtitle", "Tap a bubble to read the full quote" }
            }

            div { class: "bubble-grid", {bubbles} }

            {modal}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_deck_is_nonempty_and_attributed() {
        assert!(!BUBBLE_QUOTES.is_empty());
        for (text, author) in BUBBLE_QUOTES {
            assert!(!text.is_empty());
            assert!(!author.is_empty());
        }
    }
}
