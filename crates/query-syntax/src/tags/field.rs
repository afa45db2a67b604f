use crate::{factory::FilterFactory, resolver::resolve_property, tags::TagHandler};
use model::{
    core::mapping::Mapping,
    schema::{EntityDescriptor, Property},
};
use tracing::warn;

/// Turns a tag value into an equality on a fixed (possibly dotted) field,
/// e.g. `||owner:42||` into `owner.id = 42`.
#[derive(Debug, Clone)]
pub struct FieldTagHandler {
    field: Mapping,
}

impl FieldTagHandler {
    pub fn new(field: impl Into<Mapping>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl<F, D> TagHandler<F, D> for FieldTagHandler
where
    F: FilterFactory,
    D: EntityDescriptor,
{
    fn generate(&self, factory: &F, descriptor: &D, value: &str) -> Option<F::Constraint> {
        let Some(property) = resolve_property(descriptor, self.field.as_str()) else {
            warn!("Tag field '{}' does not resolve, ignoring tag", self.field);
            return None;
        };

        Some(factory.eq(&self.field, property.transform_value(value)))
    }
}
