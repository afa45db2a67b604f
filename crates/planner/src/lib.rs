//! Constraint factories turning compiled filter queries into backend filters.

pub mod filter;
pub mod query;

pub use filter::{
    expr::{ExprFilterFactory, FilterExpr},
    mongo::MongoFilterFactory,
    sql::{SqlFilter, SqlFilterFactory},
};
