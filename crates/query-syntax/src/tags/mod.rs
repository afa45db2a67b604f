//! The `||type:value||` tag sub-language and its handler registry.

pub mod field;
pub mod tag;

pub use field::FieldTagHandler;
pub use tag::QueryTag;

use crate::factory::FilterFactory;
use model::schema::EntityDescriptor;
use std::collections::HashMap;

/// Generates a constraint for the value of one tag type.
pub trait TagHandler<F: FilterFactory, D: EntityDescriptor>: Send + Sync {
    /// Returns `None` when the value yields no constraint.
    fn generate(&self, factory: &F, descriptor: &D, value: &str) -> Option<F::Constraint>;
}

/// Handlers keyed by tag type. Lookups ignore case.
pub struct TagRegistry<F: FilterFactory, D: EntityDescriptor> {
    handlers: HashMap<String, Box<dyn TagHandler<F, D>>>,
}

impl<F: FilterFactory, D: EntityDescriptor> TagRegistry<F, D> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for `tag_type`, replacing any previous handler.
    pub fn register(&mut self, tag_type: &str, handler: impl TagHandler<F, D> + 'static) {
        self.handlers
            .insert(tag_type.to_lowercase(), Box::new(handler));
    }

    pub fn lookup(&self, tag_type: &str) -> Option<&dyn TagHandler<F, D>> {
        self.handlers
            .get(&tag_type.to_lowercase())
            .map(|handler| handler.as_ref())
    }

    pub fn has_tag(&self, tag_type: &str) -> bool {
        self.handlers.contains_key(&tag_type.to_lowercase())
    }

    pub fn tag_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.handlers.keys().map(|s| s.as_str()).collect();
        types.sort_unstable();
        types
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<F: FilterFactory, D: EntityDescriptor> Default for TagRegistry<F, D> {
    fn default() -> Self {
        Self::new()
    }
}
