//! Reference implementations of [`query_syntax::FilterFactory`].

pub mod expr;
pub mod mongo;
pub mod sql;
