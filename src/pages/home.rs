//! Home page - the mood-rotating hero quote card.
//!
//! A fixed deck of mood-tagged quotes; advancing the deck (card click or the
//! shuffle button) flips the card and sets the shared mood to the new
//! quote's mood, which recolors the background and nav on every page.

use dioxus::prelude::*;
use quoteverse_core::Mood;

use crate::components::{MoodBackground, NavHeader, NavLocation};
use crate::context::use_mood;

/// The hero deck: (text, author, mood)
const HERO_QUOTES: &[(&str, &str, Mood)] = &[
    (
        "Be like a tree and let the dead leaves drop.",
        "Rumi",
        Mood::Inspirational,
    ),
    (
        "Try to accept the changing seasons of your heart...",
        "Shams",
        Mood::Mystic,
    ),
    ("Happiness depends upon ourselves.", "Aristotle", Mood::Philosophy),
    (
        "The brave may not live forever, but the cautious do not live at all.",
        "Richard Branson",
        Mood::Epic,
    ),
    (
        "You know you're in love when you can't fall asleep because reality is finally better than your dreams.",
        "Dr. Seuss",
        Mood::Romantic,
    ),
    (
        "When you see a man seeking faults in others, remind him of his own.",
        "Jalaluddin Suyuti",
        Mood::Motivational,
    ),
    (
        "If you want to change the way others treat you, you should first change the way you treat yourself.",
        "Shams Tabrizi",
        Mood::Sad,
    ),
    (
        "I told my wife she should embrace her mistakes. She hugged me.",
        "Unknown",
        Mood::Funny,
    ),
    (
        "The most complete gift of God is a life based on knowledge.",
        "Hazrat Ali (RA)",
        Mood::Mystic,
    ),
    (
        "Nations are born in the hearts of poets, they prosper and die in the hands of politicians.",
        "Allama Iqbal",
        Mood::Philosophy,
    ),
];

/// Flip animation duration before the next quote appears
const FLIP_MS: u64 = 600;

/// Next position in the deck, wrapping to the start
fn next_index(current: usize) -> usize {
    (current + 1) % HERO_QUOTES.len()
}

/// Home page component.
#[component]
pub fn Home() -> Element {
    let mut mood = use_mood();
    let mut current: Signal<usize> = use_signal(|| 0);
    let mut flipping: Signal<bool> = use_signal(|| false);

    let advance = move |_| {
        if flipping() {
            return;
        }
        flipping.set(true);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(FLIP_MS)).await;
            let next = next_index(current());
            current.set(next);
            mood.set(HERO_QUOTES[next].2);
            flipping.set(false);
        });
    };

    let (text, author, quote_mood) = HERO_QUOTES[current()];
    let card_class = if flipping() { "hero-card flipping" } else { "hero-card" };

    rsx! {
        NavHeader { current: NavLocation::Home }

        main { class: "hero",
            MoodBackground {}

            div { class: "page-heading",
                h1 { class: "page-title", "Daily Inspiration" }
                p { class: "page-subtitle",
                    "Discover powerful quotes that resonate with your mood and inspire your journey"
                }
            }

            div {
                class: "{card_class}",
                onclick: advance,
                span { class: "mood-tag", "{quote_mood}" }
                p { class: "hero-quote", "\u{201C}{text}\u{201D}" }
                span { class: "hero-author", "\u{2014} {author}" }
            }

            button {
                class: "shuffle-button",
                onclick: advance,
                "aria-label": "Next quote",
                "\u{2684}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_index_advances() {
        assert_eq!(next_index(0), 1);
        assert_eq!(next_index(3), 4);
    }

    #[test]
    fn test_next_index_wraps_around() {
        assert_eq!(next_index(HERO_QUOTES.len() - 1), 0);
    }

    #[test]
    fn test_deck_moods_are_named() {
        // Every deck entry carries a named mood, so advancing never
        // drops the background to the default gradient.
        for (_, _, mood) in HERO_QUOTES {
            assert_ne!(*mood, Mood::Default);
        }
    }
}
