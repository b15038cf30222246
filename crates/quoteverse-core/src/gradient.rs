//! Mood gradient resolution.
//!
//! Maps (mood, theme) to a CSS gradient for the animated page background.
//! Resolution is total: an unrecognized mood resolves through the Default
//! entry, and the Default entry always has a light variant.

use crate::types::{Mood, ThemeMode};

/// A resolved visual style for a mood/theme pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientDescriptor {
    /// CSS background-image value, e.g. "linear-gradient(135deg, ...)"
    pub background: &'static str,
}

/// Gradient table: (mood, light variant, dark variant)
const GRADIENTS: &[(Mood, &str, &str)] = &[
    (
        Mood::Motivational,
        "linear-gradient(135deg, #1e3c72, #2a5298, #000428)",
        "linear-gradient(135deg, #0a192f, #112240, #000428)",
    ),
    (
        Mood::Sad,
        "linear-gradient(135deg, #29636D, #4DA4B3, #29636D)",
        "linear-gradient(135deg, #0f2027, #203a43, #2c5364)",
    ),
    (
        Mood::Funny,
        "linear-gradient(135deg, #62296D, #AA71BD, #50345B)",
        "linear-gradient(135deg, #2b1331, #502f5f, #1a0d1f)",
    ),
    (
        Mood::Mystic,
        "linear-gradient(135deg, #2c003e, #240046, #5a189a)",
        "linear-gradient(135deg, #0f0c29, #302b63, #24243e)",
    ),
    (
        Mood::Philosophy,
        "linear-gradient(135deg, #733B76, #8D6BA1, #894697)",
        "linear-gradient(135deg, #2c003e, #240046, #5a189a)",
    ),
    (
        Mood::Epic,
        "linear-gradient(135deg, #0f0c29, #302b63, #24243e)",
        "linear-gradient(135deg, #1f1c2c, #928dab, #000000)",
    ),
    (
        Mood::Romantic,
        "linear-gradient(135deg, #EE2727, #831A1A, #E54242)",
        "linear-gradient(135deg, #3a0d0d, #8a1f1f, #e63946)",
    ),
    (
        Mood::Inspirational,
        "linear-gradient(135deg, #25A5A9, #216D72, #4B8E93)",
        "linear-gradient(135deg, #0d3b3b, #1c6060, #2d7373)",
    ),
    (
        Mood::Default,
        "linear-gradient(135deg, #270031, #3d0153, #4e0273)",
        "linear-gradient(135deg, #0d0d0d, #1a1a1a, #262626)",
    ),
];

fn lookup(mood: Mood, theme: ThemeMode) -> Option<&'static str> {
    GRADIENTS
        .iter()
        .find(|(m, _, _)| *m == mood)
        .map(|(_, light, dark)| match theme {
            ThemeMode::Light => *light,
            ThemeMode::Dark => *dark,
        })
}

/// Resolve the gradient for a mood/theme pair.
///
/// Fallback chain: exact mood+theme, then Default+theme, then Default+light.
/// Never fails.
pub fn resolve(mood: Mood, theme: ThemeMode) -> GradientDescriptor {
    let background = lookup(mood, theme)
        .or_else(|| lookup(Mood::Default, theme))
        .or_else(|| lookup(Mood::Default, ThemeMode::Light))
        .unwrap_or("linear-gradient(135deg, #270031, #3d0153, #4e0273)");
    GradientDescriptor { background }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_total() {
        for mood in Mood::NAMED.into_iter().chain([Mood::Default]) {
            for theme in [ThemeMode::Light, ThemeMode::Dark] {
                let descriptor = resolve(mood, theme);
                assert!(descriptor.background.starts_with("linear-gradient"));
            }
        }
    }

    #[test]
    fn test_unknown_mood_uses_default_gradient() {
        let unknown = Mood::from_label("Brooding");
        assert_eq!(
            resolve(unknown, ThemeMode::Dark),
            resolve(Mood::Default, ThemeMode::Dark)
        );
    }

    #[test]
    fn test_light_and_dark_variants_differ() {
        for mood in Mood::NAMED {
            assert_ne!(
                resolve(mood, ThemeMode::Light),
                resolve(mood, ThemeMode::Dark),
                "light and dark variants should differ for {mood}"
            );
        }
    }

    #[test]
    fn test_known_mood_gradient() {
        let descriptor = resolve(Mood::Romantic, ThemeMode::Light);
        assert_eq!(
            descriptor.background,
            "linear-gradient(135deg, #EE2727, #831A1A, #E54242)"
        );
    }
}
