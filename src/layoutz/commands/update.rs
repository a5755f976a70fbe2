use crate::commands::helpers::display_of;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_field, FieldSelector};
use crate::model::Document;

pub fn set_value(doc: &mut Document, selector: &FieldSelector, value: &str) -> Result<CmdResult> {
    let id = resolve_field(doc, selector)?;
    doc.update_field_value(id, value)?;
    let display = display_of(doc, id)?;

    let mut result = CmdResult::default();
    let message = if value.is_empty() {
        format!("Cleared '{}'", display.field.label)
    } else {
        format!("Set '{}' to {:?}", display.field.label, value)
    };
    result.add_message(CmdMessage::success(message));
    Ok(result.with_affected(vec![display]))
}

pub fn set_label(doc: &mut Document, selector: &FieldSelector, label: &str) -> Result<CmdResult> {
    let id = resolve_field(doc, selector)?;
    let old = doc.field(id)?.label.clone();
    doc.update_field_label(id, label)?;
    let display = display_of(doc, id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Relabeled '{}' to '{}'",
        old, label
    )));
    Ok(result.with_affected(vec![display]))
}
