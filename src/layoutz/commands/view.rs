use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_fields;
use crate::model::Document;

/// Produce the full indexed field listing. The CLI decides whether to
/// render it as the design view (everything) or the preview (visible
/// fields only, formatted values).
pub fn run(doc: &Document) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(index_fields(doc)))
}
