use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_fields;
use crate::model::Document;

/// The hidden-fields panel: everything that has been hidden but not
/// deleted, ready to be restored.
pub fn run(doc: &Document) -> Result<CmdResult> {
    let hidden: Vec<_> = index_fields(doc)
        .into_iter()
        .filter(|df| df.hidden_rank.is_some())
        .collect();

    let mut result = CmdResult::default();
    if hidden.is_empty() {
        result.add_message(CmdMessage::info("No hidden fields."));
    }
    Ok(result.with_listed(hidden))
}
