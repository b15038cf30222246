//! Property-based tests for QuoteVerse core logic
//!
//! Uses proptest to verify invariants of categorization, gradient
//! resolution, filtering and the favorites store.

use proptest::prelude::*;
use quoteverse_core::{
    categorize, filter_quotes, gradient, manual_quotes, Category, FavoritesStore, Filter, Mood,
    Quote, ThemeMode,
};
use tempfile::TempDir;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate arbitrary quote text (printable, possibly keyword-bearing)
fn quote_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,!?']{0,200}").expect("valid regex")
}

/// Generate short author names
fn author_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{1,15}").expect("valid regex")
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn mood_strategy() -> impl Strategy<Value = Mood> {
    let mut moods = Mood::NAMED.to_vec();
    moods.push(Mood::Default);
    prop::sample::select(moods)
}

fn theme_strategy() -> impl Strategy<Value = ThemeMode> {
    prop::sample::select(vec![ThemeMode::Light, ThemeMode::Dark])
}

/// Generate a list of quotes with distinct ids
fn quote_list_strategy(max: usize) -> impl Strategy<Value = Vec<Quote>> {
    prop::collection::vec(
        (quote_text_strategy(), author_strategy(), category_strategy()),
        0..max,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (text, author, category))| {
                Quote::new(format!("q-{}", i), text, author, category)
            })
            .collect()
    })
}

// ============================================================================
// Categorizer Properties
// ============================================================================

proptest! {
    /// Categorization is case-insensitive
    #[test]
    fn categorize_ignores_case(text in quote_text_strategy()) {
        prop_assert_eq!(categorize(&text), categorize(&text.to_uppercase()));
    }

    /// Text starting with "love" is always Love, whatever follows
    #[test]
    fn love_rule_has_top_priority(suffix in quote_text_strategy()) {
        let text = format!("love {}", suffix);
        prop_assert_eq!(categorize(&text), Category::Love);
    }

    /// The category/type pairing is fixed
    #[test]
    fn category_label_and_type_key_are_paired(text in quote_text_strategy()) {
        let category = categorize(&text);
        let expected_key = match category.label() {
            "Love" => "romantic",
            "Life" => "life",
            "Funny" => "funny",
            "Dark" => "dark",
            "Inspirational" => "inspirational",
            other => panic!("unexpected label {}", other),
        };
        prop_assert_eq!(category.type_key(), expected_key);
    }
}

// ============================================================================
// Gradient Properties
// ============================================================================

proptest! {
    /// Gradient resolution is total over moods and themes
    #[test]
    fn gradient_resolution_is_total(mood in mood_strategy(), theme in theme_strategy()) {
        let descriptor = gradient::resolve(mood, theme);
        prop_assert!(!descriptor.background.is_empty());
        prop_assert!(descriptor.background.starts_with("linear-gradient"));
    }

    /// Any label whatsoever resolves to a gradient via Mood parsing
    #[test]
    fn arbitrary_labels_resolve(label in "\\PC{0,30}", theme in theme_strategy()) {
        let mood = Mood::from_label(&label);
        let descriptor = gradient::resolve(mood, theme);
        prop_assert!(!descriptor.background.is_empty());
    }
}

// ============================================================================
// Filter Properties
// ============================================================================

proptest! {
    /// Filtering never invents quotes: the result is a subsequence
    #[test]
    fn filter_result_is_subsequence(
        quotes in quote_list_strategy(30),
        search in "[a-z]{0,8}",
    ) {
        let result = filter_quotes(&quotes, Filter::All, &search);
        prop_assert!(result.len() <= quotes.len());
        let mut last_index = 0;
        for q in result {
            let index = quotes.iter().position(|orig| orig.id == q.id).unwrap();
            prop_assert!(index >= last_index);
            last_index = index;
        }
    }

    /// All-filter with empty search is the identity projection
    #[test]
    fn all_filter_empty_search_is_identity(quotes in quote_list_strategy(30)) {
        let result = filter_quotes(&quotes, Filter::All, "");
        prop_assert_eq!(result.len(), quotes.len());
    }

    /// Every returned quote satisfies both the filter and the search
    #[test]
    fn filtered_quotes_match_predicates(
        quotes in quote_list_strategy(30),
        category in category_strategy(),
        search in "[a-z]{0,8}",
    ) {
        let result = filter_quotes(&quotes, Filter::Category(category), &search);
        for q in result {
            prop_assert_eq!(q.category, category);
            if !search.is_empty() {
                let needle = search.to_lowercase();
                prop_assert!(
                    q.author.to_lowercase().contains(&needle)
                        || q.quote.to_lowercase().contains(&needle)
                );
            }
        }
    }
}

// ============================================================================
// Favorites Properties
// ============================================================================

proptest! {
    /// A quote is favorited iff it was toggled an odd number of times
    #[test]
    fn favorite_membership_follows_toggle_parity(
        toggles in prop::collection::vec(0..5usize, 1..30),
    ) {
        let dir = TempDir::new().unwrap();
        let mut store = FavoritesStore::load(dir.path()).unwrap();
        let pool: Vec<Quote> = (0..5)
            .map(|i| Quote::new(format!("q-{}", i), "text", "author", Category::Life))
            .collect();

        for &index in &toggles {
            store.toggle(&pool[index]).unwrap();
        }

        for (i, quote) in pool.iter().enumerate() {
            let count = toggles.iter().filter(|&&t| t == i).count();
            prop_assert_eq!(store.contains(&quote.id), count % 2 == 1);
        }

        // The persisted set matches the in-memory set after reload
        let reloaded = FavoritesStore::load(dir.path()).unwrap();
        prop_assert_eq!(reloaded.len(), store.len());
    }
}

// ============================================================================
// Aggregation Properties
// ============================================================================

proptest! {
    /// The aggregated list always begins with the manual quotes
    #[test]
    fn aggregate_always_starts_with_manual(payload in prop::collection::vec(
        ("[a-zA-Z ]{1,50}", "[A-Z][a-z]{1,10}"),
        0..10,
    )) {
        let body = serde_json::to_string(
            &payload
                .iter()
                .map(|(q, a)| serde_json::json!({"q": q, "a": a}))
                .collect::<Vec<_>>(),
        )
        .unwrap();
        let raw: Vec<quoteverse_core::RawQuote> = serde_json::from_str(&body).unwrap();
        let fetched_len = raw.len();

        let quotes = quoteverse_core::aggregate(Ok(raw));
        let manual = manual_quotes();
        prop_assert_eq!(&quotes[..manual.len()], &manual[..]);
        prop_assert_eq!(quotes.len(), manual.len() + fetched_len);

        // Positional ids in fetch order
        for (i, q) in quotes[manual.len()..].iter().enumerate() {
            prop_assert_eq!(q.id.clone(), format!("api-{}", i));
        }
    }
}
