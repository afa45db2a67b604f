//! Resolution of dotted field paths across reference properties.

use model::schema::{EntityDescriptor, Property};
use tracing::trace;

/// Resolves `path` (e.g. `company.city.name`) starting at `descriptor`.
///
/// Every segment but the last must be a reference property; the last is
/// looked up on the entity reached so far. Any miss yields `None`, there are
/// no partial matches.
pub fn resolve_property<D: EntityDescriptor>(descriptor: &D, path: &str) -> Option<D::Property> {
    let segments: Vec<&str> = path.split('.').collect();
    let (last, parents) = segments.split_last()?;

    let mut pointed: Option<D> = None;
    for segment in parents {
        let current = pointed.as_ref().unwrap_or(descriptor);
        let Some(reference) = current.find_property(segment) else {
            trace!("'{}' has no property '{}'", path, segment);
            return None;
        };
        if !reference.is_reference() {
            trace!("'{}' is not a reference in path '{}'", segment, path);
            return None;
        }
        pointed = Some(reference.referenced_descriptor()?);
    }

    pointed.as_ref().unwrap_or(descriptor).find_property(last)
}
