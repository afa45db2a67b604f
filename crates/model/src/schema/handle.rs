use crate::{
    core::value::Value,
    schema::{
        capability::{EntityDescriptor, Property},
        definition::{EntityDef, PropertyDef, Schema},
    },
};
use tracing::warn;

/// Borrowed view of one entity inside a [`Schema`].
#[derive(Debug, Clone, Copy)]
pub struct EntityRef<'a> {
    schema: &'a Schema,
    entity: &'a EntityDef,
}

/// Borrowed view of one property, able to follow references through the schema.
#[derive(Debug, Clone, Copy)]
pub struct PropertyRef<'a> {
    schema: &'a Schema,
    entity: &'a EntityDef,
    property: &'a PropertyDef,
}

impl<'a> EntityRef<'a> {
    pub fn new(schema: &'a Schema, entity: &'a EntityDef) -> Self {
        Self { schema, entity }
    }

    pub fn name(&self) -> &'a str {
        &self.entity.name
    }

    /// Lists every addressable field path, following references up to
    /// `max_depth` hops. Reference cycles are cut off by the depth limit.
    pub fn field_paths(&self, max_depth: usize) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths("", max_depth, &mut paths);
        paths
    }

    fn collect_paths(&self, prefix: &str, depth: usize, paths: &mut Vec<String>) {
        for property in &self.entity.properties {
            let path = format!("{prefix}{}", property.name);
            paths.push(path.clone());

            if depth == 0 {
                continue;
            }
            if let Some(target) = property
                .references
                .as_deref()
                .and_then(|name| self.schema.entity(name))
            {
                target.collect_paths(&format!("{path}."), depth - 1, paths);
            }
        }
    }
}

impl<'a> EntityDescriptor for EntityRef<'a> {
    type Property = PropertyRef<'a>;

    fn find_property(&self, name: &str) -> Option<PropertyRef<'a>> {
        self.entity.property(name).map(|property| PropertyRef {
            schema: self.schema,
            entity: self.entity,
            property,
        })
    }
}

impl<'a> Property for PropertyRef<'a> {
    type Descriptor = EntityRef<'a>;

    fn name(&self) -> &str {
        &self.property.name
    }

    fn is_reference(&self) -> bool {
        self.property.references.is_some()
    }

    fn referenced_descriptor(&self) -> Option<EntityRef<'a>> {
        self.property
            .references
            .as_deref()
            .and_then(|target| self.schema.entity(target))
    }

    fn transform_value(&self, raw: &str) -> Value {
        match self.property.data_type.parse_value(raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "Keeping raw text for {}.{}: {}",
                    self.entity.name, self.property.name, err
                );
                Value::String(raw.to_string())
            }
        }
    }
}
