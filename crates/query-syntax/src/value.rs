/// Raw text read for a token or a comparison value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    raw: String,
    exact: bool,
}

impl FieldValue {
    pub fn new(raw: impl Into<String>, exact: bool) -> Self {
        Self {
            raw: raw.into(),
            exact,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `true` when the user quoted the text; exact values are never split
    /// into words and never treated as the null sentinel.
    pub fn is_exact(&self) -> bool {
        self.exact
    }
}
