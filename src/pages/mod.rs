//! Page components for QuoteVerse.

mod categories;
mod favorites;
mod home;
mod random;

pub use categories::Categories;
pub use favorites::Favorites;
pub use home::Home;
pub use random::Random;
