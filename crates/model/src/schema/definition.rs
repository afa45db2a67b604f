use crate::{core::data_type::DataType, error::SchemaError, schema::handle::EntityRef};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A set of entity definitions, usually loaded from a JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    pub entities: Vec<EntityDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityDef {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyDef {
    pub name: String,

    /// Type used to convert query values compared against this property.
    /// For references this is the type of the stored key.
    #[serde(rename = "type", default)]
    pub data_type: DataType,

    /// Name of the entity this property refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
}

impl PropertyDef {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            references: None,
        }
    }

    pub fn reference(name: &str, data_type: DataType, target: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            references: Some(target.to_string()),
        }
    }
}

impl EntityDef {
    pub fn new(name: &str, properties: Vec<PropertyDef>) -> Self {
        Self {
            name: name.to_string(),
            properties,
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }
}

impl Schema {
    pub fn new(entities: Vec<EntityDef>) -> Self {
        Self { entities }
    }

    /// Parses and validates a schema from its JSON representation.
    pub fn from_json(source: &str) -> Result<Self, SchemaError> {
        let schema: Schema = serde_json::from_str(source)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Checks that names are unique and every reference points at a known entity.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut entity_names = HashSet::new();
        for entity in &self.entities {
            if !entity_names.insert(entity.name.as_str()) {
                return Err(SchemaError::DuplicateEntity(entity.name.clone()));
            }
        }

        for entity in &self.entities {
            let mut property_names = HashSet::new();
            for property in &entity.properties {
                if !property_names.insert(property.name.as_str()) {
                    return Err(SchemaError::DuplicateProperty {
                        entity: entity.name.clone(),
                        property: property.name.clone(),
                    });
                }

                if let DataType::Enum(constants) = &property.data_type
                    && constants.is_empty()
                {
                    return Err(SchemaError::EmptyEnum {
                        entity: entity.name.clone(),
                        property: property.name.clone(),
                    });
                }

                if let Some(target) = &property.references
                    && !entity_names.contains(target.as_str())
                {
                    return Err(SchemaError::UnknownReference {
                        entity: entity.name.clone(),
                        property: property.name.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns a descriptor handle for the named entity.
    pub fn entity(&self, name: &str) -> Option<EntityRef<'_>> {
        self.entities
            .iter()
            .find(|e| e.name == name)
            .map(|entity| EntityRef::new(self, entity))
    }

    /// Like [`Schema::entity`], but fails with [`SchemaError::UnknownEntity`].
    pub fn require_entity(&self, name: &str) -> Result<EntityRef<'_>, SchemaError> {
        self.entity(name)
            .ok_or_else(|| SchemaError::UnknownEntity(name.to_string()))
    }
}
