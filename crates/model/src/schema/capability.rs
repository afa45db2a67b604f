use crate::core::value::Value;

/// Describes an entity whose properties can be addressed in a filter query.
pub trait EntityDescriptor: Sized {
    type Property: Property<Descriptor = Self>;

    /// Looks up a direct property of this entity by name.
    fn find_property(&self, name: &str) -> Option<Self::Property>;
}

/// A single property of an [`EntityDescriptor`].
pub trait Property {
    type Descriptor;

    fn name(&self) -> &str;

    /// Whether the property points at another entity, enabling dotted paths.
    fn is_reference(&self) -> bool;

    /// The entity a reference property points at; `None` for plain properties.
    fn referenced_descriptor(&self) -> Option<Self::Descriptor>;

    /// Converts raw query text into the value handed to constraint factories.
    fn transform_value(&self, raw: &str) -> Value;
}
