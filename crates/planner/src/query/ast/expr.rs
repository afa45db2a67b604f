//! Defines the AST for SQL filter conditions (the body of a WHERE clause).

use model::core::value::Value;
use query_syntax::Operator;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column, optionally qualified by a table alias.
    Identifier(Ident),

    /// A literal, always rendered as a bound parameter.
    Value(Value),

    /// e.g. `"age" >= $1`
    Comparison {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },

    /// e.g. `"name" ILIKE $1`; case sensitivity is up to the dialect.
    Like { expr: Box<Expr>, pattern: Box<Expr> },

    /// `IS NULL`, or `IS NOT NULL` when negated.
    IsNull { expr: Box<Expr>, negated: bool },

    And(Vec<Expr>),
    Or(Vec<Expr>),
    Not(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub qualifier: Option<String>,
    pub name: String,
}
