//! Shared test fixtures for pipeline and CLI tests.
#![allow(dead_code)] // Each test binary uses a different subset

use country_explorer::models::Country;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn country(
    code: &str,
    name: &str,
    continent: &str,
    capital: &str,
    currency: &str,
    languages: &[&str],
) -> Country {
    Country::new(code, name, continent)
        .with_capital(capital)
        .with_currency(currency)
        .with_languages(languages.iter().copied())
}

/// Twenty countries in upstream (code) order.
///
/// Three names contain "united", one code is "TT", and Antarctica has no
/// capital, currency, or languages.
pub fn sample_countries() -> Vec<Country> {
    vec![
        country("AE", "United Arab Emirates", "Asia", "Abu Dhabi", "AED", &["Arabic"]),
        Country::new("AQ", "Antarctica", "Antarctica"),
        country("AR", "Argentina", "South America", "Buenos Aires", "ARS", &["Spanish", "Guaraní"]),
        country("AU", "Australia", "Oceania", "Canberra", "AUD", &["English"]),
        country("BR", "Brazil", "South America", "Brasília", "BRL", &["Portuguese"]),
        country("CA", "Canada", "North America", "Ottawa", "CAD", &["English", "French"]),
        country("CN", "China", "Asia", "Beijing", "CNY", &["Chinese"]),
        country("DE", "Germany", "Europe", "Berlin", "EUR", &["German"]),
        country("EG", "Egypt", "Africa", "Cairo", "EGP", &["Arabic"]),
        country("FR", "France", "Europe", "Paris", "EUR", &["French"]),
        country("GB", "United Kingdom", "Europe", "London", "GBP", &["English"]),
        country("IN", "India", "Asia", "New Delhi", "INR", &["Hindi", "English"]),
        country("IT", "Italy", "Europe", "Rome", "EUR", &["Italian"]),
        country("JP", "Japan", "Asia", "Tokyo", "JPY", &["Japanese"]),
        country("KE", "Kenya", "Africa", "Nairobi", "KES", &["English", "Swahili"]),
        country("MX", "Mexico", "North America", "Mexico City", "MXN", &["Spanish"]),
        country("NG", "Nigeria", "Africa", "Abuja", "NGN", &["English"]),
        country("NZ", "New Zealand", "Oceania", "Wellington", "NZD", &["English", "Māori"]),
        country("TT", "Trinidad and Tobago", "North America", "Port of Spain", "TTD", &["English"]),
        country("US", "United States", "North America", "Washington D.C.", "USD,USN,USS", &["English"]),
    ]
}

/// Writes the sample countries as a GraphQL response envelope.
///
/// Returns the temp dir (keep it alive) and the file path.
pub fn write_sample_envelope() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("countries.json");
    let document = serde_json::json!({ "data": { "countries": sample_countries() } });
    fs::write(&path, document.to_string()).expect("Failed to write fixture");
    (temp_dir, path)
}

/// Writes arbitrary content to a temp file.
pub fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    (temp_dir, path)
}
