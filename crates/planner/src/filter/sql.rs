use crate::query::{
    ast::expr::Expr,
    column,
    dialect::Dialect,
    renderer::{Render, Renderer},
    value,
};
use model::core::{mapping::Mapping, value::Value};
use query_syntax::{FilterFactory, Operator, SearchMode};
use serde::Serialize;
use tracing::trace;

/// Builds SQL condition ASTs; render them with [`SqlFilter::render`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlFilterFactory;

impl SqlFilterFactory {
    fn compare(field: &Mapping, op: Operator, val: Value) -> Expr {
        Expr::Comparison {
            left: Box::new(column(field)),
            op,
            right: Box::new(value(val)),
        }
    }

    fn like(field: &Mapping, pattern: String) -> Expr {
        Expr::Like {
            expr: Box::new(column(field)),
            pattern: Box::new(value(Value::String(pattern))),
        }
    }

    fn is_null(field: &Mapping, negated: bool) -> Expr {
        Expr::IsNull {
            expr: Box::new(column(field)),
            negated,
        }
    }
}

impl FilterFactory for SqlFilterFactory {
    type Constraint = Expr;

    fn and(&self, constraints: Vec<Expr>) -> Expr {
        Expr::And(constraints)
    }

    fn or(&self, constraints: Vec<Expr>) -> Expr {
        Expr::Or(constraints)
    }

    fn not(&self, constraint: Expr) -> Expr {
        Expr::Not(Box::new(constraint))
    }

    fn eq(&self, field: &Mapping, value: Value) -> Expr {
        if value.is_null() {
            return Self::is_null(field, false);
        }
        Self::compare(field, Operator::Equal, value)
    }

    fn ne(&self, field: &Mapping, value: Value) -> Expr {
        if value.is_null() {
            return Self::is_null(field, true);
        }
        Self::compare(field, Operator::NotEqual, value)
    }

    fn gt(&self, field: &Mapping, value: Value) -> Expr {
        Self::compare(field, Operator::GreaterThan, value)
    }

    fn gte(&self, field: &Mapping, value: Value) -> Expr {
        Self::compare(field, Operator::GreaterOrEqual, value)
    }

    fn lt(&self, field: &Mapping, value: Value) -> Expr {
        Self::compare(field, Operator::LessThan, value)
    }

    fn lte(&self, field: &Mapping, value: Value) -> Expr {
        Self::compare(field, Operator::LessOrEqual, value)
    }

    fn search_token(&self, field: &Mapping, mode: SearchMode, word: &str) -> Expr {
        match mode {
            SearchMode::Equal => Self::compare(field, Operator::Equal, Value::from(word)),
            SearchMode::Prefix => Self::like(field, format!("{}%", escape_like(word))),
            SearchMode::Like => Self::like(field, escape_like(word).replace('*', "%")),
            SearchMode::Contains => Self::like(field, format!("%{}%", escape_like(word))),
        }
    }
}

/// Escapes LIKE metacharacters so the word matches literally.
fn escape_like(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for ch in word.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// A rendered WHERE condition with the parameters to bind, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlFilter {
    pub sql: String,
    pub params: Vec<Value>,
}

impl SqlFilter {
    pub fn render(expr: &Expr, dialect: &dyn Dialect) -> Self {
        let mut renderer = Renderer::new(dialect);
        expr.render(&mut renderer);
        let (sql, params) = renderer.finish();

        trace!(dialect = %dialect.name(), params = params.len(), "Rendered filter: {}", sql);
        Self { sql, params }
    }
}
