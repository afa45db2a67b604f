//! Shared data model for filter compilation: values, field mappings and the
//! schema capabilities the query compiler resolves fields against.

pub mod core;
pub mod error;
pub mod schema;
