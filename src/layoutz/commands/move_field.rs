use crate::commands::helpers::display_of;
use crate::commands::{CmdMessage, CmdResult};
use crate::document::Direction;
use crate::error::Result;
use crate::index::{resolve_field, FieldSelector};
use crate::model::Document;

pub fn run(doc: &mut Document, selector: &FieldSelector, direction: Direction) -> Result<CmdResult> {
    let id = resolve_field(doc, selector)?;
    let moved = doc.move_field(id, direction)?;
    let display = display_of(doc, id)?;

    let mut result = CmdResult::default();
    if moved {
        result.add_message(CmdMessage::success(format!(
            "Moved '{}' to {}",
            display.field.label, display.path
        )));
    } else {
        let edge = match direction {
            Direction::Up => "top",
            Direction::Down => "bottom",
        };
        result.add_message(CmdMessage::info(format!(
            "'{}' is already at the {} of its section",
            display.field.label, edge
        )));
    }
    Ok(result.with_affected(vec![display]))
}
