//! Data models for countries and highlight colors.
//!
//! Models are independent of UI and pipeline logic.

pub mod country;
pub mod highlight;

// Re-export all model types
pub use country::{Continent, Country, Language};
pub use highlight::{HighlightColor, PaletteCursor, PALETTE};
