use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// A named reference to a (possibly dotted) field, e.g. `company.name`.
///
/// Mappings are what constraint factories receive; the compiler builds them
/// from the path the user typed once the path resolved against the schema.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mapping(Arc<str>);

impl Mapping {
    pub fn named(path: impl Into<String>) -> Self {
        Self(Arc::from(path.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Returns the last path segment, i.e. the field on the final entity.
    pub fn leaf(&self) -> &str {
        self.segments().last().unwrap_or_default()
    }

    pub fn is_nested(&self) -> bool {
        self.0.contains('.')
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Mapping {
    fn from(s: String) -> Self {
        Self::named(s)
    }
}

impl From<&str> for Mapping {
    fn from(s: &str) -> Self {
        Self::named(s)
    }
}
