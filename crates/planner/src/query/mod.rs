use crate::query::ast::expr::{Expr, Ident};
use model::core::{mapping::Mapping, value::Value};

pub mod ast;
pub mod dialect;
pub mod renderer;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn value(val: Value) -> Expr {
    Expr::Value(val)
}

/// Column reference for a field mapping.
///
/// `company.city.name` addresses column `name` of the table joined under
/// the alias `company_city`.
pub fn column(field: &Mapping) -> Expr {
    if !field.is_nested() {
        return ident(field.as_str());
    }

    let segments: Vec<&str> = field.segments().collect();
    let path = &segments[..segments.len() - 1];
    Expr::Identifier(Ident {
        qualifier: Some(path.join("_")),
        name: field.leaf().to_string(),
    })
}
