use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LayoutError, Result};
use crate::index::{resolve_section, SectionSelector};
use crate::model::Document;

pub fn add(doc: &mut Document, title: &str) -> Result<CmdResult> {
    let title = title.trim();
    if title.is_empty() {
        return Err(LayoutError::InvalidOperation(
            "Section title cannot be empty".to_string(),
        ));
    }
    doc.add_section(title);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added section '{}' at position {}",
        title,
        doc.sections.len()
    )));
    Ok(result)
}

pub fn remove(doc: &mut Document, selector: &SectionSelector) -> Result<CmdResult> {
    let id = resolve_section(doc, selector)?;
    let removed = doc.remove_section(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed section '{}'",
        removed.title
    )));
    if !removed.fields.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "{} field(s) went with it; removal is permanent",
            removed.fields.len()
        )));
    }
    Ok(result)
}

/// Move a section to a 1-based position. Out-of-range positions clamp to
/// the ends rather than erroring.
pub fn relocate(doc: &mut Document, selector: &SectionSelector, position: usize) -> Result<CmdResult> {
    let id = resolve_section(doc, selector)?;
    let new_index = position.saturating_sub(1);
    doc.move_section(id, new_index)?;

    let title = doc.section(id)?.title.clone();
    let landed = doc.section(id)?.order + 1;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Moved section '{}' to position {}",
        title, landed
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_sections() -> Document {
        let mut doc = Document::new("Account");
        doc.add_section("Account Information");
        doc.add_section("Parent Hierarchy");
        doc.add_section("Customer Success");
        doc
    }

    #[test]
    fn test_add_section() {
        let mut doc = Document::new("Account");
        add(&mut doc, "Account Information").unwrap();
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "Account Information");
    }

    #[test]
    fn test_add_section_rejects_blank_title() {
        let mut doc = Document::new("Account");
        assert!(add(&mut doc, "   ").is_err());
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_remove_section_by_title() {
        let mut doc = doc_with_sections();
        remove(&mut doc, &SectionSelector::parse("hierarchy")).unwrap();
        assert_eq!(doc.sections.len(), 2);
        doc.validate().unwrap();
    }

    #[test]
    fn test_remove_warns_about_lost_fields() {
        let mut doc = doc_with_sections();
        let id = doc.sections[0].id;
        doc.add_field(
            id,
            crate::model::Field::new("Account Name", crate::model::FieldType::Text),
        )
        .unwrap();

        let result = remove(&mut doc, &SectionSelector::parse("1")).unwrap();
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn test_relocate_is_one_based_and_clamped() {
        let mut doc = doc_with_sections();
        relocate(&mut doc, &SectionSelector::parse("1"), 99).unwrap();
        assert_eq!(doc.sections[2].title, "Account Information");

        relocate(&mut doc, &SectionSelector::parse("success"), 1).unwrap();
        assert_eq!(doc.sections[0].title, "Customer Success");
        doc.validate().unwrap();
    }

    #[test]
    fn test_missing_section_errors() {
        let mut doc = doc_with_sections();
        assert!(remove(&mut doc, &SectionSelector::parse("9")).is_err());
        assert!(relocate(&mut doc, &SectionSelector::parse("billing"), 1).is_err());
    }
}
