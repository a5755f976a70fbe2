use crate::commands::helpers::display_of;
use crate::commands::{CmdMessage, CmdResult, FieldDraft};
use crate::error::Result;
use crate::index::{resolve_section, SectionSelector};
use crate::model::{Document, Field};

pub fn run(doc: &mut Document, selector: &SectionSelector, draft: FieldDraft) -> Result<CmdResult> {
    let section_id = resolve_section(doc, selector)?;

    let mut field = Field::new(draft.label, draft.field_type)
        .with_options(draft.options)
        .with_value(draft.value);
    if draft.hidden {
        field = field.hidden();
    }

    // add_field rejects a mistyped draft value before it enters the tree.
    let id = doc.add_field(section_id, field)?;
    let display = display_of(doc, id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added '{}' ({}) at {}",
        display.field.label, display.field.field_type, display.path
    )));
    Ok(result.with_affected(vec![display]))
}
