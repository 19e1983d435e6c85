//! Country source: GraphQL fetch over HTTP or a local JSON document.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::Country;

/// The fixed, parameterless countries query.
pub const COUNTRIES_QUERY: &str = "query GetCountries {
  countries {
    code
    name
    continent { name }
    capital
    currency
    languages { name }
  }
}";

/// Result sent back by a background fetch. Errors are pre-rendered messages.
pub type FetchResult = Result<Vec<Country>, String>;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<CountriesData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct CountriesData {
    countries: Vec<Country>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// A local document is either a full GraphQL response or a bare country array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountriesDocument {
    List(Vec<Country>),
    Envelope(GraphQlResponse),
}

/// Where countries are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountrySource {
    /// POST the query to a GraphQL endpoint
    Remote {
        /// Endpoint URL
        endpoint: String,
        /// Request timeout
        timeout: Duration,
    },
    /// Read a JSON document from disk
    File(PathBuf),
}

impl CountrySource {
    /// Resolves the source from config and command-line overrides.
    ///
    /// A data file wins over any endpoint.
    #[must_use]
    pub fn resolve(config: &Config, data: Option<PathBuf>, endpoint: Option<String>) -> Self {
        if let Some(path) = data {
            return Self::File(path);
        }

        Self::Remote {
            endpoint: endpoint.unwrap_or_else(|| config.source.endpoint.clone()),
            timeout: Duration::from_secs(config.source.timeout_secs),
        }
    }

    /// Loads the country list. Blocks until the request or read completes.
    pub fn load(&self) -> Result<Vec<Country>> {
        let countries = match self {
            Self::Remote { endpoint, timeout } => fetch_countries(endpoint, *timeout)?,
            Self::File(path) => {
                let content = fs::read_to_string(path)
                    .context(format!("Failed to read country data: {}", path.display()))?;
                parse_countries_document(&content)
                    .context(format!("Failed to parse country data: {}", path.display()))?
            }
        };

        info!(source = %self.describe(), count = countries.len(), "Loaded countries");
        Ok(countries)
    }

    /// Human-readable description for status lines and logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Remote { endpoint, .. } => endpoint.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Executes the countries query against a GraphQL endpoint.
pub fn fetch_countries(endpoint: &str, timeout: Duration) -> Result<Vec<Country>> {
    info!(endpoint, "Fetching countries");

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .post(endpoint)
        .json(&GraphQlRequest {
            query: COUNTRIES_QUERY,
        })
        .send()
        .context(format!("Failed to reach {endpoint}"))?
        .error_for_status()
        .context("GraphQL endpoint returned an error status")?;

    let response: GraphQlResponse = response
        .json()
        .context("Failed to parse GraphQL response")?;

    into_countries(response)
}

/// Parses a country document: a GraphQL response envelope or a bare array.
pub fn parse_countries_document(json: &str) -> Result<Vec<Country>> {
    let document: CountriesDocument =
        serde_json::from_str(json).context("Document is neither a GraphQL response nor a country list")?;

    match document {
        CountriesDocument::List(countries) => Ok(dedupe_codes(countries)),
        CountriesDocument::Envelope(response) => into_countries(response),
    }
}

fn into_countries(response: GraphQlResponse) -> Result<Vec<Country>> {
    if !response.errors.is_empty() {
        let messages: Vec<&str> = response
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect();
        anyhow::bail!("GraphQL query failed: {}", messages.join("; "));
    }

    let data = response
        .data
        .context("GraphQL response contained no data")?;
    Ok(dedupe_codes(data.countries))
}

/// Drops records whose code was already seen, keeping the first.
fn dedupe_codes(countries: Vec<Country>) -> Vec<Country> {
    let mut seen = HashSet::new();
    countries
        .into_iter()
        .filter(|country| {
            let fresh = seen.insert(country.code.clone());
            if !fresh {
                warn!(code = %country.code, "Dropping duplicate country code");
            }
            fresh
        })
        .collect()
}

/// Loads countries on a worker thread; poll the receiver with `try_recv`.
#[must_use]
pub fn spawn_load(source: CountrySource) -> Receiver<FetchResult> {
    let (tx, rx) = mpsc::channel::<FetchResult>();

    std::thread::spawn(move || {
        let result = source.load().map_err(|e| {
            warn!(error = %format!("{e:#}"), "Country load failed");
            format!("{e:#}")
        });
        let _ = tx.send(result);
    });

    rx
}
