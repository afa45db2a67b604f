use std::fmt;

/// Delimiter opening and closing a tag, e.g. `||owner:42||`.
pub const TAG_DELIMITER: &str = "||";

/// A parsed `||type:value||` token. Either part is `None` when missing or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTag {
    tag_type: Option<String>,
    value: Option<String>,
}

impl QueryTag {
    pub fn new(tag_type: &str, value: &str) -> Self {
        Self {
            tag_type: Some(tag_type.to_string()),
            value: Some(value.to_string()),
        }
    }

    /// Parses a tag with or without its surrounding delimiters.
    ///
    /// The payload is split at the first `:`, so values may contain colons.
    pub fn parse(text: &str) -> Self {
        let payload = text.strip_prefix(TAG_DELIMITER).unwrap_or(text);
        let payload = payload.strip_suffix(TAG_DELIMITER).unwrap_or(payload);

        let (tag_type, value) = match payload.split_once(':') {
            Some((tag_type, value)) => (tag_type, Some(value)),
            None => (payload, None),
        };

        Self {
            tag_type: non_empty(tag_type),
            value: value.and_then(non_empty),
        }
    }

    pub fn tag_type(&self) -> Option<&str> {
        self.tag_type.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl fmt::Display for QueryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{TAG_DELIMITER}{}:{}{TAG_DELIMITER}",
            self.tag_type().unwrap_or_default(),
            self.value().unwrap_or_default()
        )
    }
}
