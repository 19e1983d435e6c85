//! Filter text parsing and query classification.
//!
//! Filter input goes through two explicit stages:
//!
//! 1. [`split_filter_text`] splits raw input into a search token and a group token.
//! 2. [`Query::classify`] lower-cases both and resolves the keyword overload: a lone
//!    search token that names a grouping keyword is treated as a group request.

use serde::Serialize;
use std::fmt;

/// Title shown when a query matches nothing.
pub const NOT_FOUND_TITLE: &str = "Cannot Found Country..";

/// Advisory raised when the group token is not a grouping keyword.
pub const INVALID_GROUP_WARNING: &str = "Grouping is not appropriate. Therefore, only filtering will be done. Use continent, currency or language to group";

/// Grouping keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    /// Bucket by lower-cased continent name
    Continent,
    /// Bucket by raw currency code
    Currency,
    /// Bucket by lower-cased joined language names
    Language,
}

impl GroupKey {
    /// All grouping keywords.
    pub const ALL: [Self; 3] = [Self::Continent, Self::Currency, Self::Language];

    /// Parses a lower-cased keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "continent" => Some(Self::Continent),
            "currency" => Some(Self::Currency),
            "language" => Some(Self::Language),
            _ => None,
        }
    }

    /// Keyword as typed by the user.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Continent => "continent",
            Self::Currency => "currency",
            Self::Language => "language",
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Classified group token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRequest {
    /// No group token
    None,
    /// A grouping keyword
    By(GroupKey),
    /// A group token that is not a keyword (lower-cased)
    Invalid(String),
}

impl GroupRequest {
    /// Whether any group token was given.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Splits filter text on the first whitespace run.
///
/// Returns `(search, group)`; `group` is empty when only one token is present.
/// Tokens are returned verbatim (not lower-cased). Anything after the second
/// token is ignored.
#[must_use]
pub fn split_filter_text(text: &str) -> (String, String) {
    let mut tokens = text.split_whitespace();
    let search = tokens.next().unwrap_or_default().to_string();
    let group = tokens.next().unwrap_or_default().to_string();
    (search, group)
}

/// A classified search/group query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Lower-cased search token, empty when absent
    pub search: String,
    /// Classified group token
    pub group: GroupRequest,
}

impl Query {
    /// Classifies raw tokens.
    ///
    /// A search token equal to a grouping keyword replaces the group token and
    /// clears the search, so `"continent"` alone means "group by continent".
    #[must_use]
    pub fn classify(search_text: &str, group_text: &str) -> Self {
        let mut search = search_text.trim().to_lowercase();
        let mut group = group_text.trim().to_lowercase();

        if GroupKey::from_keyword(&search).is_some() {
            group = std::mem::take(&mut search);
        }

        let group = if group.is_empty() {
            GroupRequest::None
        } else if let Some(key) = GroupKey::from_keyword(&group) {
            GroupRequest::By(key)
        } else {
            GroupRequest::Invalid(group)
        };

        Self { search, group }
    }

    /// Whether both tokens are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && !self.group.is_present()
    }

    /// Status title for a result of `result_len` items.
    #[must_use]
    pub fn title(&self, result_len: usize) -> String {
        if result_len == 0 {
            return NOT_FOUND_TITLE.to_string();
        }

        match (&self.group, self.search.is_empty()) {
            (GroupRequest::By(key), false) => format!(
                "Search & Group By: {} & {}",
                capitalize(&self.search),
                capitalize(key.keyword())
            ),
            (GroupRequest::By(key), true) => format!("Group By: {}", capitalize(key.keyword())),
            (_, false) => format!("Search By: {}", capitalize(&self.search)),
            (_, true) => String::new(),
        }
    }
}

/// Upper-cases the first character.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_single_token() {
        assert_eq!(split_filter_text("tt"), ("tt".to_string(), String::new()));
    }

    #[test]
    fn test_split_two_tokens_keeps_case() {
        assert_eq!(
            split_filter_text("Tt Continent"),
            ("Tt".to_string(), "Continent".to_string())
        );
    }

    #[test]
    fn test_split_whitespace_runs_and_extra_tokens() {
        assert_eq!(
            split_filter_text("  an \t  language extra"),
            ("an".to_string(), "language".to_string())
        );
        assert_eq!(split_filter_text("   "), (String::new(), String::new()));
    }

    #[test]
    fn test_classify_lowercases() {
        let query = Query::classify("UniTed", "CONTINENT");
        assert_eq!(query.search, "united");
        assert_eq!(query.group, GroupRequest::By(GroupKey::Continent));
    }

    #[test]
    fn test_classify_keyword_in_search_position() {
        let query = Query::classify("Currency", "");
        assert_eq!(query.search, "");
        assert_eq!(query.group, GroupRequest::By(GroupKey::Currency));
    }

    #[test]
    fn test_classify_keyword_search_overrides_group() {
        let query = Query::classify("language", "continent");
        assert_eq!(query.search, "");
        assert_eq!(query.group, GroupRequest::By(GroupKey::Language));
    }

    #[test]
    fn test_classify_invalid_group() {
        let query = Query::classify("an", "planet");
        assert_eq!(query.group, GroupRequest::Invalid("planet".to_string()));
        assert!(query.group.is_present());
    }

    #[test]
    fn test_classify_empty() {
        assert!(Query::classify("", "").is_empty());
        assert!(!Query::classify("a", "").is_empty());
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            Query::classify("tt", "continent").title(3),
            "Search & Group By: Tt & Continent"
        );
        assert_eq!(Query::classify("tt", "").title(3), "Search By: Tt");
        assert_eq!(Query::classify("tt", "planet").title(3), "Search By: Tt");
        assert_eq!(Query::classify("language", "").title(3), "Group By: Language");
        assert_eq!(Query::classify("", "planet").title(3), "");
        assert_eq!(Query::classify("xyz", "").title(0), NOT_FOUND_TITLE);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("europe"), "Europe");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ü"), "Ü");
    }

    #[test]
    fn test_group_key_roundtrip() {
        for key in GroupKey::ALL {
            assert_eq!(GroupKey::from_keyword(key.keyword()), Some(key));
        }
        assert_eq!(GroupKey::from_keyword("Continent"), None);
    }
}
