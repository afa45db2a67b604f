//! Schema descriptors and the capabilities field resolution relies on.
//!
//! The query compiler only talks to [`EntityDescriptor`] and [`Property`];
//! [`Schema`] is the JSON-configured implementation of both.

pub mod capability;
pub mod definition;
pub mod handle;

pub use capability::{EntityDescriptor, Property};
pub use definition::{EntityDef, PropertyDef, Schema};
pub use handle::{EntityRef, PropertyRef};
