//! Keyword-based quote categorization.
//!
//! An ordered rule table evaluated first-match-wins. The ordering is a fixed
//! design choice: a quote matching keywords from several rules is always
//! classified by the earliest rule, so categorization is reproducible.

use crate::types::Category;

/// Categorization rules in priority order.
///
/// Each rule is a set of keywords checked by case-insensitive containment.
const RULES: &[(&[&str], Category)] = &[
    (&["love", "heart", "kiss"], Category::Love),
    (&["life", "living", "death"], Category::Life),
    (&["funny", "laugh", "joke"], Category::Funny),
    (&["dark", "pain", "fear"], Category::Dark),
];

/// Classify quote text into a category.
///
/// Checks each rule's keywords against the lowercased text; the first rule
/// with any matching keyword wins. Text matching no rule is Inspirational.
pub fn categorize(text: &str) -> Category {
    let lower = text.to_lowercase();
    for (keywords, category) in RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *category;
        }
    }
    Category::Inspirational
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_love_keywords() {
        assert_eq!(categorize("Love conquers all"), Category::Love);
        assert_eq!(categorize("Follow your HEART"), Category::Love);
        assert_eq!(categorize("A kiss goodbye"), Category::Love);
    }

    #[test]
    fn test_life_keywords() {
        assert_eq!(categorize("Life is simple"), Category::Life);
        assert_eq!(categorize("The art of living well"), Category::Life);
        assert_eq!(categorize("Death is not the end"), Category::Life);
    }

    #[test]
    fn test_funny_and_dark_keywords() {
        assert_eq!(categorize("Always laugh when you can"), Category::Funny);
        assert_eq!(categorize("Pain is temporary"), Category::Dark);
    }

    #[test]
    fn test_priority_ordering() {
        // Matches both the love and funny rules; love comes first.
        assert_eq!(categorize("I love that joke"), Category::Love);
        // Matches both life and dark; life comes first.
        assert_eq!(categorize("A life without fear"), Category::Life);
    }

    #[test]
    fn test_no_match_falls_back_to_inspirational() {
        assert_eq!(categorize("Be like a tree."), Category::Inspirational);
        assert_eq!(categorize(""), Category::Inspirational);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("LOVE AND LIGHT"), Category::Love);
    }
}
