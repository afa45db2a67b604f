use thiserror::Error;

/// Fatal compilation failures. Everything else the compiler tolerates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Expected a comparison operator after field '{field}' at position {position}, found {found}")]
    UnexpectedOperator {
        field: String,
        found: String,
        position: usize,
    },
}

pub type Result<T> = std::result::Result<T, CompileError>;
