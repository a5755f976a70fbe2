use crate::commands::helpers::{display_of, resolve_all};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::FieldSelector;
use crate::model::Document;

pub fn hide(doc: &mut Document, selectors: &[FieldSelector]) -> Result<CmdResult> {
    set_state(doc, selectors, false)
}

pub fn restore(doc: &mut Document, selectors: &[FieldSelector]) -> Result<CmdResult> {
    set_state(doc, selectors, true)
}

fn set_state(doc: &mut Document, selectors: &[FieldSelector], visible: bool) -> Result<CmdResult> {
    let ids = resolve_all(doc, selectors)?;

    let mut result = CmdResult::default();
    for id in ids {
        let changed = doc.set_visibility(id, visible)?;
        let display = display_of(doc, id)?;
        let verb = if visible { "restored" } else { "hidden" };
        if changed {
            result.add_message(CmdMessage::success(format!(
                "Field {} ({}): {}",
                verb, display.path, display.field.label
            )));
        } else {
            result.add_message(CmdMessage::info(format!(
                "'{}' is already {}",
                display.field.label, verb
            )));
        }
        result.affected.push(display);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, FieldType};

    fn account_doc() -> Document {
        let mut doc = Document::new("Account");
        let info = doc.add_section("Account Information");
        doc.add_field(info, Field::new("Account Name", FieldType::Text))
            .unwrap();
        doc.add_field(info, Field::new("Industry", FieldType::Text))
            .unwrap();
        doc
    }

    #[test]
    fn test_hide_then_restore() {
        let mut doc = account_doc();
        let sel = [FieldSelector::parse("1.2")];

        hide(&mut doc, &sel).unwrap();
        assert!(!doc.sections[0].fields[1].visible);

        restore(&mut doc, &sel).unwrap();
        assert!(doc.sections[0].fields[1].visible);
    }

    #[test]
    fn test_hide_twice_reports_noop() {
        let mut doc = account_doc();
        let sel = [FieldSelector::parse("Industry")];

        hide(&mut doc, &sel).unwrap();
        let result = hide(&mut doc, &sel).unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Info
        ));
        assert!(!doc.sections[0].fields[1].visible);
    }

    #[test]
    fn test_hidden_field_keeps_its_position() {
        let mut doc = account_doc();
        hide(&mut doc, &[FieldSelector::parse("1.1")]).unwrap();
        assert_eq!(doc.sections[0].fields[0].label, "Account Name");
        assert_eq!(doc.sections[0].fields[0].order, 0);
    }
}
