//! Quote aggregation: manual quotes merged with fetched ones.
//!
//! The manual list is the floor the app never drops below. Fetched quotes
//! are categorized and appended with position-derived ids; a failed fetch
//! degrades to the manual list only, never to an empty or error state.

use tracing::warn;

use crate::categorize::categorize;
use crate::error::QuoteResult;
use crate::fetch::RawQuote;
use crate::types::{Category, Quote};

/// The manually-curated quotes always present in the aggregated list
pub fn manual_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "m1",
            "Do not be satisfied with the stories that come before you. Unfold your own myth.",
            "Rumi",
            Category::Inspirational,
        ),
        Quote::new(
            "m2",
            "Life is really simple, but we insist on making it complicated.",
            "Confucius",
            Category::Life,
        ),
    ]
}

/// Merge the manual list with a fetch result.
///
/// Each fetched quote is categorized and assigned the id `api-<index>` from
/// its fetch position. A fetch failure is logged and the manual list is
/// returned alone.
pub fn aggregate(fetched: QuoteResult<Vec<RawQuote>>) -> Vec<Quote> {
    let mut quotes = manual_quotes();
    match fetched {
        Ok(raw) => {
            quotes.extend(raw.into_iter().enumerate().map(|(i, rq)| {
                let category = categorize(&rq.text);
                Quote::new(format!("api-{}", i), rq.text, rq.author, category)
            }));
        }
        Err(e) => {
            warn!("Quote fetch failed, falling back to manual quotes: {}", e);
        }
    }
    quotes
}
