use model::core::mapping::Mapping;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a default search field compares a single search word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// The field must equal the word.
    Equal,
    /// The field must start with the word.
    Prefix,
    /// The word is a pattern where `*` matches any run of characters.
    #[default]
    Like,
    /// The field must contain the word.
    Contains,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Equal => write!(f, "equal"),
            SearchMode::Prefix => write!(f, "prefix"),
            SearchMode::Like => write!(f, "like"),
            SearchMode::Contains => write!(f, "contains"),
        }
    }
}

/// A field searched when a token is not an explicit field comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryField {
    pub field: Mapping,
    #[serde(default)]
    pub mode: SearchMode,
}

impl QueryField {
    pub fn new(field: impl Into<Mapping>, mode: SearchMode) -> Self {
        Self {
            field: field.into(),
            mode,
        }
    }

    pub fn equal(field: impl Into<Mapping>) -> Self {
        Self::new(field, SearchMode::Equal)
    }

    pub fn prefix(field: impl Into<Mapping>) -> Self {
        Self::new(field, SearchMode::Prefix)
    }

    pub fn like(field: impl Into<Mapping>) -> Self {
        Self::new(field, SearchMode::Like)
    }

    pub fn contains(field: impl Into<Mapping>) -> Self {
        Self::new(field, SearchMode::Contains)
    }
}
