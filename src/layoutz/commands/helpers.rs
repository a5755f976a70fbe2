use uuid::Uuid;

use crate::error::{LayoutError, Result};
use crate::index::{index_fields, resolve_field, DisplayField, FieldSelector};
use crate::model::Document;

/// Re-index the document and pull out the entry for one field.
pub fn display_of(doc: &Document, id: Uuid) -> Result<DisplayField> {
    index_fields(doc)
        .into_iter()
        .find(|df| df.field.id == id)
        .ok_or(LayoutError::FieldNotFound(id))
}

/// Resolve a batch of selectors up front, so multi-target commands fail
/// before they mutate anything.
pub fn resolve_all(doc: &Document, selectors: &[FieldSelector]) -> Result<Vec<Uuid>> {
    selectors
        .iter()
        .map(|sel| resolve_field(doc, sel))
        .collect()
}
