//! GUI components

pub mod media_card;
pub mod url_input;

// Re-export for convenience
pub use media_card::media_card;
pub use url_input::url_input;
