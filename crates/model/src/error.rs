use crate::core::data_type::DataType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to parse schema definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate entity '{0}'")]
    DuplicateEntity(String),

    #[error("Duplicate property '{property}' in entity '{entity}'")]
    DuplicateProperty { entity: String, property: String },

    #[error("Property '{entity}.{property}' references unknown entity '{target}'")]
    UnknownReference {
        entity: String,
        property: String,
        target: String,
    },

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Enum property '{entity}.{property}' declares no constants")]
    EmptyEnum { entity: String, property: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("Cannot convert '{raw}' to {expected:?}")]
    Conversion { raw: String, expected: DataType },

    #[error("'{raw}' is not one of {allowed:?}")]
    UnknownConstant { raw: String, allowed: Vec<String> },
}
