use model::error::SchemaError;
use query_syntax::CompileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the configuration file: {0}")]
    ConfigFileRead(#[from] std::io::Error),

    #[error("Failed to deserialize the configuration file: {0}")]
    ConfigDeserialize(#[from] serde_json::Error),

    #[error("Invalid schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("Field '{field}' configured for {usage} does not resolve on entity '{entity}'")]
    UnknownField {
        field: String,
        usage: &'static str,
        entity: String,
    },

    #[error("Invalid query: {0}")]
    Compile(#[from] CompileError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
