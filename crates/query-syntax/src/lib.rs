pub mod compiler;
pub mod error;
pub mod factory;
pub mod field;
pub mod operator;
pub mod reader;
pub mod resolver;
pub mod tags;
pub mod value;

pub use compiler::QueryCompiler;
pub use error::CompileError;
pub use factory::FilterFactory;
pub use field::{QueryField, SearchMode};
pub use operator::Operator;
pub use tags::{FieldTagHandler, QueryTag, TagHandler, TagRegistry};
