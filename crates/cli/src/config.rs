//! The JSON filter configuration: schema, root entity, search fields, tags.

use crate::error::CliError;
use model::{
    core::mapping::Mapping,
    schema::{EntityRef, Schema},
};
use query_syntax::{FieldTagHandler, FilterFactory, QueryField, TagRegistry, resolver::resolve_property};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "FILTERC_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    pub schema: Schema,

    /// Entity queries are compiled against.
    pub root: String,

    /// Fields searched by tokens that are not field comparisons.
    #[serde(default)]
    pub search_fields: Vec<QueryField>,

    /// Tag types and the field each one compares against.
    #[serde(default)]
    pub tags: BTreeMap<String, TagConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagConfig {
    pub field: Mapping,
}

impl FilterConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        info!("Loading filter configuration from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    pub fn from_json(source: &str) -> Result<Self, CliError> {
        let config: FilterConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the schema and that every configured field resolves on the root.
    pub fn validate(&self) -> Result<(), CliError> {
        self.schema.validate()?;
        let root = self.root_entity()?;

        let search_fields = self
            .search_fields
            .iter()
            .map(|field| (&field.field, "default search"));
        let tag_fields = self.tags.values().map(|tag| (&tag.field, "a tag"));

        for (field, usage) in search_fields.chain(tag_fields) {
            if resolve_property(&root, field.as_str()).is_none() {
                return Err(CliError::UnknownField {
                    field: field.to_string(),
                    usage,
                    entity: self.root.clone(),
                });
            }
        }

        debug!(
            "Configuration for '{}' has {} search fields and {} tags",
            self.root,
            self.search_fields.len(),
            self.tags.len()
        );
        Ok(())
    }

    pub fn root_entity(&self) -> Result<EntityRef<'_>, CliError> {
        Ok(self.schema.require_entity(&self.root)?)
    }

    /// Builds a registry with one [`FieldTagHandler`] per configured tag.
    pub fn tag_registry<F: FilterFactory>(&self) -> TagRegistry<F, EntityRef<'_>> {
        let mut registry = TagRegistry::new();
        for (tag_type, tag) in &self.tags {
            registry.register(tag_type, FieldTagHandler::new(tag.field.clone()));
        }
        registry
    }
}

/// Picks the configuration file: the explicit path, then `$FILTERC_CONFIG`,
/// then `~/.filterc/filter.json`.
pub fn resolve_path(explicit: Option<&str>) -> Result<PathBuf, CliError> {
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not determine home directory".into()))?;
    Ok(home.join(".filterc/filter.json"))
}
