use crate::query::{
    ast::expr::Expr,
    renderer::{Render, Renderer},
};
use query_syntax::Operator;

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => r.render_ident(ident),
            Expr::Value(value) => r.add_param(value.clone()),
            Expr::Comparison { left, op, right } => {
                left.render(r);
                r.sql.push(' ');
                r.sql.push_str(sql_operator(*op));
                r.sql.push(' ');
                right.render(r);
            }
            Expr::Like { expr, pattern } => {
                expr.render(r);
                r.sql.push(' ');
                r.sql.push_str(r.dialect.like_operator());
                r.sql.push(' ');
                pattern.render(r);
            }
            Expr::IsNull { expr, negated } => {
                expr.render(r);
                r.sql
                    .push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Expr::And(children) => render_group(children, " AND ", r),
            Expr::Or(children) => render_group(children, " OR ", r),
            Expr::Not(inner) => {
                r.sql.push_str("NOT ");
                render_nested(inner, r);
            }
        }
    }
}

fn sql_operator(op: Operator) -> &'static str {
    match op {
        Operator::Equal => "=",
        Operator::NotEqual => "<>",
        Operator::GreaterThan => ">",
        Operator::GreaterOrEqual => ">=",
        Operator::LessThan => "<",
        Operator::LessOrEqual => "<=",
    }
}

fn render_group(children: &[Expr], separator: &str, r: &mut Renderer) {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(separator);
        }
        render_nested(child, r);
    }
}

/// Parenthesizes boolean groups so precedence survives nesting.
fn render_nested(expr: &Expr, r: &mut Renderer) {
    match expr {
        Expr::And(children) | Expr::Or(children) if children.len() > 1 => {
            r.sql.push('(');
            expr.render(r);
            r.sql.push(')');
        }
        _ => expr.render(r),
    }
}
