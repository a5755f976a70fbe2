use crate::commands::helpers::display_of;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_field, FieldSelector};
use crate::model::Document;

/// Exchange the positions of two fields, possibly across sections. The
/// two-click selection dance lives in the UI; by the time we get here it
/// is a single atomic exchange.
pub fn run(doc: &mut Document, a: &FieldSelector, b: &FieldSelector) -> Result<CmdResult> {
    let id_a = resolve_field(doc, a)?;
    let id_b = resolve_field(doc, b)?;
    doc.swap_fields(id_a, id_b)?;

    let display_a = display_of(doc, id_a)?;
    let display_b = display_of(doc, id_b)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Swapped '{}' (now {}) with '{}' (now {})",
        display_a.field.label, display_a.path, display_b.field.label, display_b.path
    )));
    Ok(result.with_affected(vec![display_a, display_b]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, FieldType};

    fn two_section_doc() -> Document {
        let mut doc = Document::new("Account");
        let info = doc.add_section("Account Information");
        doc.add_field(info, Field::new("Account Name", FieldType::Text))
            .unwrap();
        doc.add_field(info, Field::new("Industry", FieldType::Text))
            .unwrap();
        let success = doc.add_section("Customer Success");
        doc.add_field(success, Field::new("Customer Sentiment", FieldType::Picklist))
            .unwrap();
        doc
    }

    #[test]
    fn test_swap_across_sections() {
        let mut doc = two_section_doc();
        run(
            &mut doc,
            &FieldSelector::parse("1.1"),
            &FieldSelector::parse("2.1"),
        )
        .unwrap();
        assert_eq!(doc.sections[0].fields[0].label, "Customer Sentiment");
        assert_eq!(doc.sections[1].fields[0].label, "Account Name");
        doc.validate().unwrap();
    }

    #[test]
    fn test_swap_field_with_itself_is_rejected() {
        let mut doc = two_section_doc();
        let err = run(
            &mut doc,
            &FieldSelector::parse("1.1"),
            &FieldSelector::parse("Account Name"),
        );
        assert!(err.is_err());
    }
}
