//! Navigation Header Component
//!
//! Pill-shaped bar with the app logo, page links and the theme toggle.
//! The bar background follows the current mood gradient, so navigation
//! carries the mood between pages.

use dioxus::prelude::*;
use quoteverse_core::gradient;

use crate::app::Route;
use crate::context::{use_mood, use_theme_mode};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Categories,
    Random,
    Favorites,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Categories => "Categories",
            NavLocation::Random => "Random",
            NavLocation::Favorites => "Favorites",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Categories => Route::Categories {},
            NavLocation::Random => Route::Random {},
            NavLocation::Favorites => Route::Favorites {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation Header component
///
/// - Left: "QuoteVerse" logo
/// - Center: page links, current one underlined
/// - Right: light/dark toggle
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mood = use_mood();
    let mut theme = use_theme_mode();

    let locations = [
        NavLocation::Home,
        NavLocation::Categories,
        NavLocation::Random,
        NavLocation::Favorites,
    ];

    let descriptor = gradient::resolve(mood(), theme());
    let bar_style = format!("background-image: {};", descriptor.background);

    // Sun for dark mode (toggle to light), moon for light mode
    let toggle_symbol = match theme() {
        quoteverse_core::ThemeMode::Dark => "\u{2600}",
        quoteverse_core::ThemeMode::Light => "\u{263E}",
    };

    let toggle_theme = move |_| {
        let next = theme().toggled();
        theme.set(next);
    };

    let links = locations.into_iter().map(|location| {
        let class = if location == props.current {
            "nav-link active"
        } else {
            "nav-link"
        };
        let name = location.display_name();
        rsx! {
            li { key: "{name}",
                Link { class: "{class}", to: location.route(), "{name}" }
            }
        }
    });

    rsx! {
        header { class: "nav-header",
            nav { class: "nav-bar", style: "{bar_style}",
                div { class: "nav-logo",
                    div { class: "nav-logo-badge", "Q" }
                    span { class: "nav-logo-name", "QuoteVerse" }
                }

                ul { class: "nav-links", {links} }

                button {
                    class: "theme-toggle",
                    onclick: toggle_theme,
                    "aria-label": "Toggle light/dark theme",
                    "{toggle_symbol}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(NavLocation::Home.display_name(), "Home");
        assert_eq!(NavLocation::Categories.display_name(), "Categories");
        assert_eq!(NavLocation::Random.display_name(), "Random");
        assert_eq!(NavLocation::Favorites.display_name(), "Favorites");
    }

    #[test]
    fn test_active_link_class() {
        let current = NavLocation::Categories;
        let class = if NavLocation::Categories == current { "nav-link active" } else { "nav-link" };
        assert_eq!(class, "nav-link active");
        let class = if NavLocation::Home == current { "nav-link active" } else { "nav-link" };
        assert_eq!(class, "nav-link");
    }
}
