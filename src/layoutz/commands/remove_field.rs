use crate::commands::helpers::resolve_all;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::FieldSelector;
use crate::model::Document;

/// Permanently delete fields. Unlike hiding, there is no way back; the
/// fields will not appear in any future export.
pub fn run(doc: &mut Document, selectors: &[FieldSelector]) -> Result<CmdResult> {
    // Resolve everything first so a bad selector removes nothing.
    let ids = resolve_all(doc, selectors)?;

    let mut result = CmdResult::default();
    for id in ids {
        let removed = doc.remove_field(id)?;
        result.add_message(CmdMessage::success(format!(
            "Removed '{}' permanently",
            removed.label
        )));
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
        doc.add_field(info, Field::new("Phone", FieldType::Phone))
            .unwrap();
        doc
    }

    #[test]
    fn test_remove_closes_the_gap() {
        let mut doc = account_doc();
        run(&mut doc, &[FieldSelector::parse("1.2")]).unwrap();

        let labels: Vec<_> = doc.sections[0].fields.iter().map(|f| &f.label).collect();
        assert_eq!(labels, ["Account Name", "Phone"]);
        doc.validate().unwrap();
    }

    #[test]
    fn test_remove_multiple_by_label() {
        let mut doc = account_doc();
        run(
            &mut doc,
            &[
                FieldSelector::parse("Industry"),
                FieldSelector::parse("Phone"),
            ],
        )
        .unwrap();
        assert_eq!(doc.field_count(), 1);
    }

    #[test]
    fn test_bad_selector_removes_nothing() {
        let mut doc = account_doc();
        let err = run(
            &mut doc,
            &[FieldSelector::parse("1.1"), FieldSelector::parse("9.9")],
        );
        assert!(err.is_err());
        assert_eq!(doc.field_count(), 3);
    }
}
