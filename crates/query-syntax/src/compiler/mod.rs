//! Single-pass recursive-descent compiler for filter queries.
//!
//! ```text
//! Query    := OrExpr
//! OrExpr   := AndExpr ( "or" AndExpr )*
//! AndExpr  := Unary ( ["and" | "&&"] Unary )*
//! Unary    := "!" Unary | "(" OrExpr ")" | Tag | FieldCmp | DefaultToken
//! ```
//!
//! Tokens are scanned straight off the [`LookaheadReader`]; there is no
//! separate lexing phase.

mod scan;

use crate::{
    error::{CompileError, Result},
    factory::FilterFactory,
    field::{QueryField, SearchMode},
    operator::Operator,
    reader::LookaheadReader,
    resolver::resolve_property,
    tags::{QueryTag, TagRegistry},
    value::FieldValue,
};
use model::{
    core::{mapping::Mapping, value::Value},
    schema::{EntityDescriptor, Property},
};
use std::str::Chars;
use tracing::{debug, trace};

/// An unquoted value consisting of just this text asks for "no value".
pub const NULL_SENTINEL: &str = "-";

/// Compiles one query string into a constraint built by `F`.
///
/// A compiler is single-use: [`compile`](Self::compile) consumes it.
pub struct QueryCompiler<'a, F: FilterFactory, D: EntityDescriptor> {
    factory: &'a F,
    descriptor: &'a D,
    search_fields: &'a [QueryField],
    tags: Option<&'a TagRegistry<F, D>>,
    reader: LookaheadReader<Chars<'a>>,
    query: &'a str,
}

impl<'a, F: FilterFactory, D: EntityDescriptor> QueryCompiler<'a, F, D> {
    pub fn new(
        factory: &'a F,
        descriptor: &'a D,
        query: &'a str,
        search_fields: &'a [QueryField],
    ) -> Self {
        Self {
            factory,
            descriptor,
            search_fields,
            tags: None,
            reader: LookaheadReader::new(query.chars()),
            query,
        }
    }

    /// Resolves `||type:value||` tags through `registry`. Without a
    /// registry every tag is ignored.
    pub fn with_tags(mut self, registry: &'a TagRegistry<F, D>) -> Self {
        self.tags = Some(registry);
        self
    }

    /// Compiles the whole query.
    ///
    /// Returns `Ok(None)` when the query yields no constraint at all.
    pub fn compile(mut self) -> Result<Option<F::Constraint>> {
        debug!("Compiling query '{}'", self.query);
        let constraint = self.parse_or();
        if let Err(err) = &constraint {
            debug!("Rejected query '{}': {}", self.query, err);
        }
        constraint
    }

    fn parse_or(&mut self) -> Result<Option<F::Constraint>> {
        let mut constraints = Vec::new();
        while !self.reader.is_end_of_input() && !self.reader.current_is(&[')']) {
            if let Some(inner) = self.parse_and()? {
                constraints.push(inner);
            }
            if !self.is_at_or() {
                break;
            }
            self.reader.consume_n(2);
        }

        Ok(match constraints.len() {
            0 => None,
            1 => constraints.pop(),
            _ => Some(self.factory.or(constraints)),
        })
    }

    fn parse_and(&mut self) -> Result<Option<F::Constraint>> {
        let mut constraints = Vec::new();
        while !self.reader.is_end_of_input() && !self.reader.current_is(&[')']) {
            if let Some(inner) = self.parse_expression()? {
                constraints.push(inner);
            }
            self.skip_whitespace();
            if self.is_at_or() {
                break;
            }
            if self.is_at_and() {
                self.reader.consume_n(3);
            } else if self.is_at_binary_and() {
                self.reader.consume_n(2);
            }
        }

        Ok(match constraints.len() {
            0 => None,
            1 => constraints.pop(),
            _ => Some(self.factory.and(constraints)),
        })
    }

    fn parse_expression(&mut self) -> Result<Option<F::Constraint>> {
        self.skip_whitespace();

        if self.reader.current_is(&['!']) {
            self.reader.consume();
            let negated = self.parse_expression()?;
            return Ok(negated.map(|inner| self.factory.not(inner)));
        }
        if self.reader.current_is(&['(']) {
            return self.parse_brackets();
        }
        if self.is_at_tag() {
            return Ok(self.parse_tag());
        }

        // Stray operator characters cannot start a token.
        while !self.reader.is_end_of_input()
            && !self.reader.current_is(&[')'])
            && !self.continue_token(false)
        {
            self.reader.consume();
        }
        if self.reader.is_end_of_input() || self.reader.current_is(&[')']) {
            // a closing bracket is left for the enclosing group
            return Ok(None);
        }

        let token = self.read_token();
        let skipped = self.skip_whitespace();
        let bare_bang = !skipped && !token.is_exact() && self.reader.current_is(&['!']);
        if self.is_at_operator() || bare_bang {
            return self.compile_constraint(token, skipped);
        }

        Ok(self.compile_default_search(&token))
    }

    fn parse_brackets(&mut self) -> Result<Option<F::Constraint>> {
        self.reader.consume();
        let inner = self.parse_or()?;
        if self.reader.current_is(&[')']) {
            self.reader.consume();
        }
        Ok(inner)
    }

    fn parse_tag(&mut self) -> Option<F::Constraint> {
        self.reader.consume_n(2);
        let mut payload = String::new();
        while !self.reader.is_end_of_input() && !self.is_at_tag() {
            if let Some(ch) = self.reader.consume() {
                payload.push(ch);
            }
        }
        // unterminated tags run to end of input
        self.reader.consume_n(2);

        let tag = QueryTag::parse(&payload);
        let (Some(tag_type), Some(value)) = (tag.tag_type(), tag.value()) else {
            debug!("Ignoring malformed tag '{}'", payload);
            return None;
        };
        let Some(handler) = self.tags.and_then(|tags| tags.lookup(tag_type)) else {
            debug!("No handler for tag type '{}', ignoring tag", tag_type);
            return None;
        };

        trace!("Generating constraint for {}", tag);
        handler.generate(self.factory, self.descriptor, value)
    }

    /// Handles a token followed by an operator (or a bare `!`).
    fn compile_constraint(
        &mut self,
        token: FieldValue,
        skipped: bool,
    ) -> Result<Option<F::Constraint>> {
        if let Some(property) = resolve_property(self.descriptor, token.raw()) {
            return self.parse_operation(&property, token.raw()).map(Some);
        }

        debug!("'{}' is not a known field, searching it as text", token.raw());
        if skipped {
            return Ok(self.compile_default_search(&token));
        }

        // `foo:http://x` stays one search token
        let merged = self.absorb_operator(token);
        Ok(self.compile_default_search(&merged))
    }

    fn parse_operation(&mut self, property: &D::Property, field: &str) -> Result<F::Constraint> {
        let operator = self.read_operator(field)?;
        let value = self.parse_value();
        let value = compile_value(property, &value);

        trace!("Comparing {} {} {:?}", field, operator, value);
        Ok(self
            .factory
            .compare(&Mapping::named(field), operator, value))
    }

    fn read_operator(&mut self, field: &str) -> Result<Operator> {
        let current = self.reader.current();
        let next = self.reader.next(1);

        match current.and_then(|ch| Operator::match_at(ch, next)) {
            Some((operator, width)) => {
                self.reader.consume_n(width);
                Ok(operator)
            }
            None => Err(CompileError::UnexpectedOperator {
                field: field.to_string(),
                found: current.map_or_else(|| "end of input".to_string(), |ch| format!("'{ch}'")),
                position: self.reader.position(),
            }),
        }
    }

    fn compile_default_search(&self, token: &FieldValue) -> Option<F::Constraint> {
        if self.search_fields.is_empty() {
            debug!("No default search fields, ignoring '{}'", token.raw());
            return None;
        }

        if token.is_exact() {
            let phrase = self.search_any_field(Some(SearchMode::Equal), token.raw());
            return Some(self.factory.and(vec![phrase]));
        }

        let words: Vec<F::Constraint> = token
            .raw()
            .split_whitespace()
            .map(|word| self.search_any_field(None, word))
            .collect();
        if words.is_empty() {
            return None;
        }
        Some(self.factory.and(words))
    }

    /// One search-token comparison per default field, OR-ed. `mode`
    /// overrides the configured mode of every field.
    fn search_any_field(&self, mode: Option<SearchMode>, word: &str) -> F::Constraint {
        let alternatives = self
            .search_fields
            .iter()
            .map(|field| {
                self.factory
                    .search_token(&field.field, mode.unwrap_or(field.mode), word)
            })
            .collect();
        self.factory.or(alternatives)
    }
}

fn compile_value<P: Property>(property: &P, value: &FieldValue) -> Value {
    if !value.is_exact() && value.raw() == NULL_SENTINEL {
        return Value::Null;
    }
    property.transform_value(value.raw())
}
