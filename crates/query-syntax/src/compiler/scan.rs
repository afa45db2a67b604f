//! Character-level scanning the grammar rules build on.

use super::QueryCompiler;
use crate::{factory::FilterFactory, operator::Operator, value::FieldValue};
use model::schema::EntityDescriptor;

/// Characters that may directly follow a keyword such as `or`. None of
/// them can continue a plain word.
fn ends_keyword(ch: Option<char>) -> bool {
    ch.is_none_or(|ch| ch.is_whitespace() || matches!(ch, '(' | ')' | '!' | '"' | '|'))
}

impl<F: FilterFactory, D: EntityDescriptor> QueryCompiler<'_, F, D> {
    /// Returns `true` if any whitespace was skipped.
    pub(super) fn skip_whitespace(&mut self) -> bool {
        let mut skipped = false;
        while self.reader.current().is_some_and(char::is_whitespace) {
            self.reader.consume();
            skipped = true;
        }
        skipped
    }

    pub(super) fn is_at_or(&mut self) -> bool {
        self.reader.current_is(&['o', 'O'])
            && self.reader.next_is(1, &['r', 'R'])
            && ends_keyword(self.reader.next(2))
    }

    pub(super) fn is_at_and(&mut self) -> bool {
        self.reader.current_is(&['a', 'A'])
            && self.reader.next_is(1, &['n', 'N'])
            && self.reader.next_is(2, &['d', 'D'])
            && ends_keyword(self.reader.next(3))
    }

    pub(super) fn is_at_binary_and(&mut self) -> bool {
        self.reader.current_is(&['&']) && self.reader.next_is(1, &['&'])
    }

    pub(super) fn is_at_tag(&mut self) -> bool {
        self.reader.current_is(&['|']) && self.reader.next_is(1, &['|'])
    }

    pub(super) fn is_at_operator(&mut self) -> bool {
        let current = self.reader.current();
        let next = self.reader.next(1);
        current
            .and_then(|ch| Operator::match_at(ch, next))
            .is_some()
    }

    pub(super) fn continue_token(&mut self, in_quotes: bool) -> bool {
        let Some(ch) = self.reader.current() else {
            return false;
        };
        if in_quotes {
            return ch != '"';
        }
        ch != ')' && ch != ':' && !ch.is_whitespace() && !self.is_at_operator()
    }

    /// Reads a field name or search token. A leading `"` makes it exact.
    ///
    /// Unquoted tokens also stop before a bare `!`, which then has to be
    /// read as an operator when the token names a field.
    pub(super) fn read_token(&mut self) -> FieldValue {
        let in_quotes = self.reader.current_is(&['"']);
        if in_quotes {
            self.reader.consume();
        }

        let mut token = String::new();
        while self.continue_token(in_quotes) {
            if !in_quotes && !token.is_empty() && self.reader.current_is(&['!']) {
                break;
            }
            self.push_escaped(&mut token);
        }
        if in_quotes && self.reader.current_is(&['"']) {
            self.reader.consume();
        }

        FieldValue::new(token, in_quotes)
    }

    /// Appends the operator at the cursor and the token text after it.
    pub(super) fn absorb_operator(&mut self, token: FieldValue) -> FieldValue {
        let mut merged = token.raw().to_string();
        while self.is_at_operator() || self.continue_token(false) {
            self.push_escaped(&mut merged);
        }
        FieldValue::new(merged, token.is_exact())
    }

    /// Reads the value of a comparison, quoted or up to whitespace or `)`.
    pub(super) fn parse_value(&mut self) -> FieldValue {
        self.skip_whitespace();

        let mut raw = String::new();
        if self.reader.current_is(&['"']) {
            self.reader.consume();
            while !self.reader.is_end_of_input() && !self.reader.current_is(&['"']) {
                self.push_escaped(&mut raw);
            }
            self.reader.consume();
            return FieldValue::new(raw, true);
        }

        while self
            .reader
            .current()
            .is_some_and(|ch| ch != ')' && !ch.is_whitespace())
        {
            self.push_escaped(&mut raw);
        }
        FieldValue::new(raw, false)
    }

    /// Consumes one character into `buffer`; a backslash takes the next
    /// character literally.
    fn push_escaped(&mut self, buffer: &mut String) {
        if self.reader.current_is(&['\\']) {
            self.reader.consume();
        }
        if let Some(ch) = self.reader.consume() {
            buffer.push(ch);
        }
    }
}
