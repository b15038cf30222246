//! Shared animated background component.
//!
//! A fixed full-screen gradient layer resolved from the current mood and
//! theme, with floating orbs for depth. Every page renders this once; the
//! gradient crossfades whenever the mood or theme changes.

use dioxus::prelude::*;
use quoteverse_core::{gradient, Mood, ThemeMode};

use crate::context::{use_mood, use_theme_mode};

/// Build the inline style for the gradient layer
fn background_style(mood: Mood, theme: ThemeMode) -> String {
    let descriptor = gradient::resolve(mood, theme);
    format!("background-image: {};", descriptor.background)
}

/// Full-screen mood gradient background.
#[component]
pub fn MoodBackground() -> Element {
    let mood = use_mood();
    let theme = use_theme_mode();

    let style = background_style(mood(), theme());

    rsx! {
        div { class: "mood-background", style: "{style}",
            // Floating orbs, alternating pink and cyan
            div {
                class: "mood-orb",
                style: "background: rgba(255,0,150,0.35); width: 260px; height: 260px; top: 8%; left: 12%;",
            }
            div {
                class: "mood-orb",
                style: "background: rgba(0,200,255,0.35); width: 320px; height: 320px; top: 55%; left: 65%; animation-delay: -4s;",
            }
            div {
                class: "mood-orb",
                style: "background: rgba(255,0,150,0.35); width: 200px; height: 200px; top: 70%; left: 20%; animation-delay: -9s;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_style_uses_resolved_gradient() {
        let style = background_style(Mood::Romantic, ThemeMode::Light);
        assert_eq!(
            style,
            "background-image: linear-gradient(135deg, #EE2727, #831A1A, #E54242);"
        );
    }

    #[test]
    fn test_background_style_never_empty() {
        for mood in Mood::NAMED.into_iter().chain([Mood::Default]) {
            for theme in [ThemeMode::Light, ThemeMode::Dark] {
                let style = background_style(mood, theme);
                assert!(style.starts_with("background-image: linear-gradient"));
            }
        }
    }
}
