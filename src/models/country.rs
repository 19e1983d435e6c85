//! Country records as returned by the countries GraphQL API.

use serde::{Deserialize, Serialize};

/// Continent reference nested inside a country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    /// Continent display name (e.g., "Europe")
    pub name: String,
}

/// Spoken language reference nested inside a country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language display name (e.g., "Spanish")
    pub name: String,
}

/// A single country as delivered by the upstream query.
///
/// Records are immutable once loaded. Selection and highlight state live on
/// [`CountryView`](crate::pipeline::CountryView), never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO code, unique across the list
    pub code: String,
    /// Display name
    pub name: String,
    /// Continent the country belongs to
    pub continent: Continent,
    /// Capital city (absent for a handful of territories)
    #[serde(default)]
    pub capital: Option<String>,
    /// Currency code(s), comma-separated upstream (e.g., "EUR" or "USD,USN")
    #[serde(default)]
    pub currency: Option<String>,
    /// Languages in upstream order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub languages: Vec<Language>,
}

/// Treats an explicit `null` language list the same as a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Language>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Language>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Country {
    /// Creates a country with the required fields and no languages.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, continent: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            continent: Continent {
                name: continent.into(),
            },
            capital: None,
            currency: None,
            languages: Vec::new(),
        }
    }

    /// Builder-style setter for the capital.
    #[must_use]
    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = Some(capital.into());
        self
    }

    /// Builder-style setter for the currency code.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Builder-style setter for the language list.
    #[must_use]
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages
            .into_iter()
            .map(|name| Language { name: name.into() })
            .collect();
        self
    }

    /// Capital for display; empty when upstream has none.
    #[must_use]
    pub fn capital_display(&self) -> &str {
        self.capital.as_deref().unwrap_or_default()
    }

    /// Currency for display; empty when upstream has none.
    #[must_use]
    pub fn currency_display(&self) -> &str {
        self.currency.as_deref().unwrap_or_default()
    }

    /// Language names joined with `", "` in upstream order.
    #[must_use]
    pub fn languages_display(&self) -> String {
        self.languages
            .iter()
            .map(|lang| lang.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Case-insensitive substring match against name or code.
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.code.to_lowercase().contains(needle)
    }
}
