//! Core types for QuoteVerse

use serde::{Deserialize, Serialize};

/// Quote category, carrying both the display label and the filter key.
///
/// The display label ("Love") is shown on cards; the filter key ("romantic")
/// is what the category filter chips match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Inspirational,
    Love,
    Life,
    Funny,
    Dark,
}

impl Category {
    /// All categories, in the order filter chips are displayed
    pub const ALL: [Category; 5] = [
        Category::Inspirational,
        Category::Love,
        Category::Life,
        Category::Funny,
        Category::Dark,
    ];

    /// Display label, e.g. "Love"
    pub fn label(&self) -> &'static str {
        match self {
            Category::Inspirational => "Inspirational",
            Category::Love => "Love",
            Category::Life => "Life",
            Category::Funny => "Funny",
            Category::Dark => "Dark",
        }
    }

    /// Filter key, e.g. "romantic" for Love
    pub fn type_key(&self) -> &'static str {
        match self {
            Category::Inspirational => "inspirational",
            Category::Love => "romantic",
            Category::Life => "life",
            Category::Funny => "funny",
            Category::Dark => "dark",
        }
    }

    /// Parse a filter key back into a category
    pub fn from_type_key(key: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.type_key() == key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single quote as displayed and persisted.
///
/// Identity is `id`; quotes are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Locally-unique identifier ("m1", "m2" for manual quotes, "api-<i>" for fetched)
    pub id: String,
    /// The quote text
    pub quote: String,
    /// Attributed author
    pub author: String,
    /// Derived or curated category
    pub category: Category,
}

impl Quote {
    pub fn new(
        id: impl Into<String>,
        quote: impl Into<String>,
        author: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            quote: quote.into(),
            author: author.into(),
            category,
        }
    }
}

/// Mood label driving the gradient background.
///
/// `Default` is the fallback for unrecognized labels; the app starts in
/// `Inspirational`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Motivational,
    Sad,
    Funny,
    Mystic,
    Philosophy,
    Epic,
    Romantic,
    Inspirational,
    Default,
}

impl Mood {
    /// All named moods (excluding the Default fallback)
    pub const NAMED: [Mood; 8] = [
        Mood::Motivational,
        Mood::Sad,
        Mood::Funny,
        Mood::Mystic,
        Mood::Philosophy,
        Mood::Epic,
        Mood::Romantic,
        Mood::Inspirational,
    ];

    /// Display label for the mood badge
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Motivational => "Motivational",
            Mood::Sad => "Sad",
            Mood::Funny => "Funny",
            Mood::Mystic => "Mystic",
            Mood::Philosophy => "Philosophy",
            Mood::Epic => "Epic",
            Mood::Romantic => "Romantic",
            Mood::Inspirational => "Inspirational",
            Mood::Default => "Default",
        }
    }

    /// Parse a mood label; unknown labels resolve to `Mood::Default`
    pub fn from_label(label: &str) -> Mood {
        Mood::NAMED
            .iter()
            .copied()
            .find(|m| m.label() == label)
            .unwrap_or(Mood::Default)
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Inspirational
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Light/dark theme preference, read-only input to gradient resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_type_key_roundtrip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_type_key(cat.type_key()), Some(cat));
        }
        assert_eq!(Category::from_type_key("all"), None);
    }

    #[test]
    fn test_mood_label_roundtrip() {
        for mood in Mood::NAMED {
            assert_eq!(Mood::from_label(mood.label()), mood);
        }
    }

    #[test]
    fn test_unknown_mood_falls_back_to_default() {
        assert_eq!(Mood::from_label("Melancholic"), Mood::Default);
        assert_eq!(Mood::from_label(""), Mood::Default);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_quote_serde_roundtrip() {
        let quote = Quote::new("m1", "Unfold your own myth.", "Rumi", Category::Inspirational);
        let json = serde_json::to_string(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quote);
    }
}
