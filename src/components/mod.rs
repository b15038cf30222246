//! UI Components for QuoteVerse.
//!
//! Glassmorphism components over the shared mood gradient.

mod mood_background;
mod nav_header;
mod quote_card;

pub use mood_background::MoodBackground;
pub use nav_header::{NavHeader, NavLocation};
pub use quote_card::QuoteCard;
