pub mod data_type;
pub mod mapping;
pub mod value;
