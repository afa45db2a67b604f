use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators accepted between a field and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
}

impl Operator {
    /// Matches the operator starting at `current`, given the character after it.
    ///
    /// Returns the operator and how many characters it spans. `:` is an
    /// alias for `=`, `!=` an alias for `<>`.
    pub fn match_at(current: char, next: Option<char>) -> Option<(Operator, usize)> {
        match (current, next) {
            ('!', Some('=')) | ('<', Some('>')) => Some((Operator::NotEqual, 2)),
            ('<', Some('=')) => Some((Operator::LessOrEqual, 2)),
            ('>', Some('=')) => Some((Operator::GreaterOrEqual, 2)),
            ('=' | ':', _) => Some((Operator::Equal, 1)),
            ('>', _) => Some((Operator::GreaterThan, 1)),
            ('<', _) => Some((Operator::LessThan, 1)),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Equal => write!(f, "="),
            Operator::NotEqual => write!(f, "<>"),
            Operator::GreaterThan => write!(f, ">"),
            Operator::GreaterOrEqual => write!(f, ">="),
            Operator::LessThan => write!(f, "<"),
            Operator::LessOrEqual => write!(f, "<="),
        }
    }
}
