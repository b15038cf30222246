//! Filter and search projection over the aggregated quote list.
//!
//! A pure, stateless projection recomputed whenever its inputs change.

use crate::types::{Category, Quote};

/// Active category filter for the quote grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show quotes from every category
    #[default]
    All,
    /// Show only quotes of one category
    Category(Category),
}

impl Filter {
    /// Filter key used by the chip row ("all" or a category type key)
    pub fn key(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Category(cat) => cat.type_key(),
        }
    }

    /// Display label for the chip ("All" or the category label)
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Category(cat) => cat.label(),
        }
    }

    fn matches(&self, quote: &Quote) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(cat) => quote.category == *cat,
        }
    }
}

/// Select quotes matching the active filter and search term.
///
/// A quote passes when its category matches the filter (or the filter is All)
/// and the search term is empty or case-insensitively substring-matches the
/// author or the quote text.
pub fn filter_quotes<'a>(quotes: &'a [Quote], filter: Filter, search: &str) -> Vec<&'a Quote> {
    let needle = search.to_lowercase();
    quotes
        .iter()
        .filter(|q| filter.matches(q))
        .filter(|q| {
            needle.is_empty()
                || q.author.to_lowercase().contains(&needle)
                || q.quote.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Count quotes per filter chip, in display order (All first).
///
/// Returns (filter, count) pairs for the chip row.
pub fn filter_counts(quotes: &[Quote]) -> Vec<(Filter, usize)> {
    let mut counts = vec![(Filter::All, quotes.len())];
    for cat in Category::ALL {
        let n = quotes.iter().filter(|q| q.category == cat).count();
        counts.push((Filter::Category(cat), n));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quotes() -> Vec<Quote> {
        vec![
            Quote::new("m1", "Unfold your own myth.", "Rumi", Category::Inspirational),
            Quote::new("a", "First joke", "Groucho", Category::Funny),
            Quote::new("b", "Second joke", "Wilde", Category::Funny),
            Quote::new("c", "Third joke", "Twain", Category::Funny),
            Quote::new("d", "Life is simple", "Confucius", Category::Life),
        ]
    }

    #[test]
    fn test_filter_funny_returns_only_funny() {
        let quotes = sample_quotes();
        let result = filter_quotes(&quotes, Filter::Category(Category::Funny), "");
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|q| q.category == Category::Funny));
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let quotes = sample_quotes();
        assert_eq!(filter_quotes(&quotes, Filter::All, "").len(), quotes.len());
    }

    #[test]
    fn test_search_is_case_insensitive_on_author() {
        let quotes = sample_quotes();
        let result = filter_quotes(&quotes, Filter::All, "RUMI");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].author, "Rumi");
    }

    #[test]
    fn test_search_matches_quote_text() {
        let quotes = sample_quotes();
        let result = filter_quotes(&quotes, Filter::All, "myth");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "m1");
    }

    #[test]
    fn test_filter_and_search_combine() {
        let quotes = sample_quotes();
        let result = filter_quotes(&quotes, Filter::Category(Category::Funny), "wilde");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b");
    }

    #[test]
    fn test_no_match_is_empty() {
        let quotes = sample_quotes();
        assert!(filter_quotes(&quotes, Filter::All, "nonexistent").is_empty());
    }

    #[test]
    fn test_filter_counts() {
        let quotes = sample_quotes();
        let counts = filter_counts(&quotes);
        assert_eq!(counts[0], (Filter::All, 5));
        let funny = counts
            .iter()
            .find(|(f, _)| *f == Filter::Category(Category::Funny))
            .unwrap();
        assert_eq!(funny.1, 3);
        let dark = counts
            .iter()
            .find(|(f, _)| *f == Filter::Category(Category::Dark))
            .unwrap();
        assert_eq!(dark.1, 0);
    }
}
