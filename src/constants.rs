//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Country Explorer";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "country-explorer";

/// Placeholder shown in the empty filter field.
pub const FILTER_PLACEHOLDER: &str =
    "Search by Name or Code. Group by Continent, Language or Currency. E.g: tt continent";
