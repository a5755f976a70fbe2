//! Mutation operations for the layout document.
//!
//! Every operation here is atomic: it either succeeds with all invariants
//! restored, or fails without touching the tree. The two invariants are:
//!
//! 1. Section and field `order` values form a dense `0..n-1` permutation
//!    within their parent at all times.
//! 2. Field ids are unique within the document for its whole lifetime
//!    (v4 ids are never reused, and inserts reject duplicates outright).
//!
//! Hiding a field keeps it in the tree so it can be restored from the
//! hidden panel; `remove_field` is the permanent path.

use std::collections::HashSet;
use uuid::Uuid;

use crate::error::{LayoutError, Result};
use crate::model::{Document, Field, Section};

/// Direction for single-step field moves within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Document {
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            sections: Vec::new(),
        }
    }

    // --- Lookup ---

    pub fn section(&self, id: Uuid) -> Result<&Section> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .ok_or(LayoutError::SectionNotFound(id))
    }

    pub fn field(&self, id: Uuid) -> Result<&Field> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.id == id)
            .ok_or(LayoutError::FieldNotFound(id))
    }

    /// Locate a field as `(section index, field index)`.
    fn locate(&self, id: Uuid) -> Result<(usize, usize)> {
        for (si, section) in self.sections.iter().enumerate() {
            if let Some(fi) = section.fields.iter().position(|f| f.id == id) {
                return Ok((si, fi));
            }
        }
        Err(LayoutError::FieldNotFound(id))
    }

    fn section_index(&self, id: Uuid) -> Result<usize> {
        self.sections
            .iter()
            .position(|s| s.id == id)
            .ok_or(LayoutError::SectionNotFound(id))
    }

    /// All hidden fields, in section and field order, paired with their
    /// section title. Backs the hidden-fields restore panel.
    pub fn hidden_fields(&self) -> Vec<(&Section, &Field)> {
        self.sections
            .iter()
            .flat_map(|s| s.hidden_fields().map(move |f| (s, f)))
            .collect()
    }

    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }

    // --- Section operations ---

    pub fn add_section(&mut self, title: impl Into<String>) -> Uuid {
        let section = Section::new(title);
        let id = section.id;
        self.sections.push(section);
        self.renumber();
        id
    }

    pub fn remove_section(&mut self, id: Uuid) -> Result<Section> {
        let index = self.section_index(id)?;
        let removed = self.sections.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Move a section to `new_index`, clamped to the valid range. Sections
    /// in between shift over.
    pub fn move_section(&mut self, id: Uuid, new_index: usize) -> Result<()> {
        let from = self.section_index(id)?;
        let to = new_index.min(self.sections.len() - 1);
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        self.renumber();
        Ok(())
    }

    // --- Field operations ---

    /// Append a field to a section. Rejects duplicate ids and values that
    /// don't fit the field's type, before anything enters the tree.
    pub fn add_field(&mut self, section_id: Uuid, field: Field) -> Result<Uuid> {
        let index = self.section_index(section_id)?;
        if self.field(field.id).is_ok() {
            return Err(LayoutError::InvalidOperation(format!(
                "Field id {} already exists in this document",
                field.id
            )));
        }
        field.check_value(&field.value)?;
        let id = field.id;
        self.sections[index].fields.push(field);
        self.renumber();
        Ok(id)
    }

    pub fn remove_field(&mut self, id: Uuid) -> Result<Field> {
        let (si, fi) = self.locate(id)?;
        let removed = self.sections[si].fields.remove(fi);
        self.renumber();
        Ok(removed)
    }

    /// Set a field's visibility. Idempotent: returns `false` when the field
    /// was already in the requested state.
    pub fn set_visibility(&mut self, id: Uuid, visible: bool) -> Result<bool> {
        let (si, fi) = self.locate(id)?;
        let field = &mut self.sections[si].fields[fi];
        if field.visible == visible {
            return Ok(false);
        }
        field.visible = visible;
        Ok(true)
    }

    /// Swap a field with its adjacent sibling. At a boundary (first field
    /// moved up, last moved down) this is a no-op returning `false`.
    pub fn move_field(&mut self, id: Uuid, direction: Direction) -> Result<bool> {
        let (si, fi) = self.locate(id)?;
        let fields = &mut self.sections[si].fields;
        let swapped = match direction {
            Direction::Up if fi > 0 => {
                fields.swap(fi, fi - 1);
                true
            }
            Direction::Down if fi + 1 < fields.len() => {
                fields.swap(fi, fi + 1);
                true
            }
            _ => false,
        };
        if swapped {
            self.renumber();
        }
        Ok(swapped)
    }

    /// Exchange the `(section, order)` positions of two fields, which may
    /// live in different sections.
    pub fn swap_fields(&mut self, a: Uuid, b: Uuid) -> Result<()> {
        if a == b {
            return Err(LayoutError::InvalidOperation(
                "Cannot swap a field with itself".to_string(),
            ));
        }
        // Resolve both before mutating anything.
        let (sa, fa) = self.locate(a)?;
        let (sb, fb) = self.locate(b)?;

        let field_a = self.sections[sa].fields[fa].clone();
        let field_b = std::mem::replace(&mut self.sections[sb].fields[fb], field_a);
        self.sections[sa].fields[fa] = field_b;
        self.renumber();
        Ok(())
    }

    /// Update a field's value in place, validated against its type.
    pub fn update_field_value(&mut self, id: Uuid, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let (si, fi) = self.locate(id)?;
        self.sections[si].fields[fi].check_value(&value)?;
        self.sections[si].fields[fi].value = value;
        Ok(())
    }

    pub fn update_field_label(&mut self, id: Uuid, label: impl Into<String>) -> Result<()> {
        let (si, fi) = self.locate(id)?;
        self.sections[si].fields[fi].label = label.into();
        Ok(())
    }

    // --- Invariants ---

    /// Restore dense `0..n-1` order values from the current array positions.
    fn renumber(&mut self) {
        for (si, section) in self.sections.iter_mut().enumerate() {
            section.order = si;
            for (fi, field) in section.fields.iter_mut().enumerate() {
                field.order = fi;
            }
        }
    }

    /// Check both document invariants, reporting violations as `Malformed`.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for (si, section) in self.sections.iter().enumerate() {
            if !ids.insert(section.id) {
                return Err(LayoutError::Malformed(format!(
                    "Duplicate section id: {}",
                    section.id
                )));
            }
            if section.order != si {
                return Err(LayoutError::Malformed(format!(
                    "Section '{}' has order {} at position {}",
                    section.title, section.order, si
                )));
            }
            for (fi, field) in section.fields.iter().enumerate() {
                if !ids.insert(field.id) {
                    return Err(LayoutError::Malformed(format!(
                        "Duplicate field id: {}",
                        field.id
                    )));
                }
                if field.order != fi {
                    return Err(LayoutError::Malformed(format!(
                        "Field '{}' has order {} at position {}",
                        field.label, field.order, fi
                    )));
                }
            }
        }
        Ok(())
    }

    // --- Serialized form ---

    /// Snapshot the document as JSON. Arrays are emitted in current order;
    /// hidden fields are included, deleted ones never existed.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Rebuild a document from its serialized form. Order is reconstructed
    /// from array position; missing keys and duplicated ids are rejected as
    /// `Malformed` without touching any existing document.
    pub fn from_json(json: &str) -> Result<Document> {
        let mut doc: Document =
            serde_json::from_str(json).map_err(|e| LayoutError::Malformed(e.to_string()))?;
        doc.renumber();
        doc.validate()?;
        log::debug!(
            "parsed layout for '{}': {} sections, {} fields",
            doc.object_type,
            doc.sections.len(),
            doc.field_count()
        );
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldType;

    fn assert_dense(doc: &Document) {
        for (si, section) in doc.sections.iter().enumerate() {
            assert_eq!(section.order, si, "section order not dense");
            for (fi, field) in section.fields.iter().enumerate() {
                assert_eq!(field.order, fi, "field order not dense in '{}'", section.title);
            }
        }
    }

    /// One section, three visible fields: [Name, Industry, Phone].
    fn account_info() -> (Document, Uuid, [Uuid; 3]) {
        let mut doc = Document::new("Account");
        let section = doc.add_section("Account Information");
        let name = doc
            .add_field(section, Field::new("Name", FieldType::Text))
            .unwrap();
        let industry = doc
            .add_field(section, Field::new("Industry", FieldType::Text))
            .unwrap();
        let phone = doc
            .add_field(section, Field::new("Phone", FieldType::Phone))
            .unwrap();
        (doc, section, [name, industry, phone])
    }

    #[test]
    fn test_add_section_assigns_dense_order() {
        let mut doc = Document::new("Account");
        doc.add_section("A");
        doc.add_section("B");
        doc.add_section("C");
        assert_dense(&doc);
        assert_eq!(doc.sections[2].title, "C");
    }

    #[test]
    fn test_remove_section_redensifies() {
        let mut doc = Document::new("Account");
        doc.add_section("A");
        let b = doc.add_section("B");
        doc.add_section("C");

        doc.remove_section(b).unwrap();
        assert_eq!(doc.sections.len(), 2);
        assert_dense(&doc);

        assert!(matches!(
            doc.remove_section(b),
            Err(LayoutError::SectionNotFound(_))
        ));
    }

    #[test]
    fn test_move_section_clamps_index() {
        let mut doc = Document::new("Account");
        let a = doc.add_section("A");
        doc.add_section("B");
        doc.add_section("C");

        doc.move_section(a, 99).unwrap();
        assert_eq!(doc.sections[2].title, "A");
        assert_dense(&doc);

        doc.move_section(a, 0).unwrap();
        assert_eq!(doc.sections[0].title, "A");
        assert_dense(&doc);
    }

    #[test]
    fn test_add_field_to_missing_section_fails() {
        let mut doc = Document::new("Account");
        let err = doc.add_field(Uuid::new_v4(), Field::new("Name", FieldType::Text));
        assert!(matches!(err, Err(LayoutError::SectionNotFound(_))));
    }

    #[test]
    fn test_add_field_rejects_duplicate_id() {
        let (mut doc, section, [name, _, _]) = account_info();
        let mut dup = Field::new("Shadow", FieldType::Text);
        dup.id = name;
        assert!(matches!(
            doc.add_field(section, dup),
            Err(LayoutError::InvalidOperation(_))
        ));
        assert_eq!(doc.field_count(), 3);
    }

    #[test]
    fn test_remove_field_leaves_no_gap() {
        let (mut doc, section, [_, industry, _]) = account_info();
        doc.add_field(section, Field::new("Website", FieldType::Url))
            .unwrap();
        doc.remove_field(industry).unwrap();

        let labels: Vec<_> = doc.sections[0].fields.iter().map(|f| &f.label).collect();
        assert_eq!(labels, ["Name", "Phone", "Website"]);
        assert_dense(&doc);
    }

    #[test]
    fn test_set_visibility_is_idempotent() {
        let (mut doc, _, [_, industry, _]) = account_info();
        assert!(doc.set_visibility(industry, false).unwrap());
        assert!(!doc.set_visibility(industry, false).unwrap());
        assert!(!doc.field(industry).unwrap().visible);
        assert!(doc.set_visibility(industry, true).unwrap());
    }

    #[test]
    fn test_hidden_fields_are_retained_not_deleted() {
        let (mut doc, _, [_, industry, _]) = account_info();
        doc.set_visibility(industry, false).unwrap();
        assert_eq!(doc.field_count(), 3);
        let hidden = doc.hidden_fields();
        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden[0].1.label, "Industry");
        assert_eq!(hidden[0].0.title, "Account Information");
    }

    #[test]
    fn test_move_field_up_and_down() {
        let (mut doc, _, [name, industry, _]) = account_info();
        assert!(doc.move_field(industry, Direction::Up).unwrap());
        let labels: Vec<_> = doc.sections[0].fields.iter().map(|f| &f.label).collect();
        assert_eq!(labels, ["Industry", "Name", "Phone"]);
        assert_dense(&doc);

        assert!(doc.move_field(name, Direction::Down).unwrap());
        let labels: Vec<_> = doc.sections[0].fields.iter().map(|f| &f.label).collect();
        assert_eq!(labels, ["Industry", "Phone", "Name"]);
        assert_dense(&doc);
    }

    #[test]
    fn test_move_field_at_boundary_is_noop() {
        let (mut doc, _, [name, _, phone]) = account_info();
        let before = doc.clone();

        assert!(!doc.move_field(name, Direction::Up).unwrap());
        assert!(!doc.move_field(phone, Direction::Down).unwrap());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_swap_fields_same_section() {
        let (mut doc, _, [name, _, phone]) = account_info();
        doc.swap_fields(name, phone).unwrap();
        let labels: Vec<_> = doc.sections[0].fields.iter().map(|f| &f.label).collect();
        assert_eq!(labels, ["Phone", "Industry", "Name"]);
        assert_dense(&doc);
    }

    #[test]
    fn test_swap_fields_across_sections() {
        let (mut doc, _, [name, _, _]) = account_info();
        let success = doc.add_section("Customer Success");
        let sentiment = doc
            .add_field(success, Field::new("Customer Sentiment", FieldType::Picklist))
            .unwrap();

        doc.swap_fields(name, sentiment).unwrap();
        assert_eq!(doc.sections[0].fields[0].label, "Customer Sentiment");
        assert_eq!(doc.sections[1].fields[0].label, "Name");
        assert_dense(&doc);
    }

    #[test]
    fn test_swap_fields_is_self_inverse() {
        let (mut doc, _, [name, _, _]) = account_info();
        let success = doc.add_section("Customer Success");
        let sentiment = doc
            .add_field(success, Field::new("Customer Sentiment", FieldType::Picklist))
            .unwrap();
        let before = doc.clone();

        doc.swap_fields(name, sentiment).unwrap();
        doc.swap_fields(name, sentiment).unwrap();
        assert_eq!(doc, before);
    }

    #[test]
    fn test_swap_field_with_itself_fails() {
        let (mut doc, _, [name, _, _]) = account_info();
        assert!(matches!(
            doc.swap_fields(name, name),
            Err(LayoutError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_swap_with_missing_field_fails_cleanly() {
        let (mut doc, _, [name, _, _]) = account_info();
        let before = doc.clone();
        assert!(matches!(
            doc.swap_fields(name, Uuid::new_v4()),
            Err(LayoutError::FieldNotFound(_))
        ));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_update_value_validates_type() {
        let (mut doc, section, _) = account_info();
        let website = doc
            .add_field(section, Field::new("Website", FieldType::Url))
            .unwrap();

        doc.update_field_value(website, "http://www.ssl.ca/").unwrap();
        assert_eq!(doc.field(website).unwrap().value, "http://www.ssl.ca/");

        let err = doc.update_field_value(website, "not a url");
        assert!(matches!(err, Err(LayoutError::InvalidValue { .. })));
        // Failed update must not partially apply.
        assert_eq!(doc.field(website).unwrap().value, "http://www.ssl.ca/");

        // Clearing is always allowed.
        doc.update_field_value(website, "").unwrap();
    }

    #[test]
    fn test_add_field_rejects_mistyped_value() {
        let (mut doc, section, _) = account_info();
        let err = doc.add_field(
            section,
            Field::new("Renewal Date", FieldType::Date).with_value("next spring"),
        );
        assert!(matches!(err, Err(LayoutError::InvalidValue { .. })));
        assert_eq!(doc.field_count(), 3);
    }

    #[test]
    fn test_update_label() {
        let (mut doc, _, [name, _, _]) = account_info();
        doc.update_field_label(name, "Account Name").unwrap();
        assert_eq!(doc.field(name).unwrap().label, "Account Name");
    }

    #[test]
    fn test_order_stays_dense_across_mutation_sequence() {
        let (mut doc, section, [name, industry, phone]) = account_info();
        let extra = doc.add_section("Parent Hierarchy");
        doc.add_field(extra, Field::new("Parent Account", FieldType::Text))
            .unwrap();
        doc.set_visibility(industry, false).unwrap();
        doc.move_field(phone, Direction::Up).unwrap();
        doc.remove_field(industry).unwrap();
        doc.add_field(section, Field::new("Website", FieldType::Url))
            .unwrap();
        doc.move_section(extra, 0).unwrap();
        doc.swap_fields(name, phone).unwrap();
        doc.remove_section(extra).unwrap();

        assert_dense(&doc);
        doc.validate().unwrap();
    }

    #[test]
    fn test_export_import_roundtrip() {
        let (mut doc, section, [_, industry, _]) = account_info();
        doc.set_visibility(industry, false).unwrap();
        doc.add_field(
            section,
            Field::new("Type", FieldType::Picklist)
                .with_options(["Customer", "Partner"])
                .with_value("Customer"),
        )
        .unwrap();

        let json = doc.to_json(true).unwrap();
        let back = Document::from_json(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_export_keeps_hidden_fields_in_position() {
        let (mut doc, _, [_, industry, _]) = account_info();
        doc.set_visibility(industry, false).unwrap();

        let json = doc.to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let fields = value["sections"][0]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1]["label"], "Industry");
        assert_eq!(fields[1]["visible"], false);
    }

    #[test]
    fn test_import_rejects_duplicate_field_ids() {
        let (doc, _, [name, _, _]) = account_info();
        let name_id = doc.field(name).unwrap().id.to_string();
        let industry_id = doc.sections[0].fields[1].id.to_string();
        let json = doc.to_json(false).unwrap().replace(&name_id, &industry_id);
        assert!(matches!(
            Document::from_json(&json),
            Err(LayoutError::Malformed(_))
        ));
        // The document we exported from is untouched.
        doc.validate().unwrap();
    }

    #[test]
    fn test_import_rejects_missing_keys() {
        let err = Document::from_json(r#"{ "sections": [] }"#);
        assert!(matches!(err, Err(LayoutError::Malformed(_))));

        let err = Document::from_json(r#"{ "object_type": "Account" }"#);
        assert!(matches!(err, Err(LayoutError::Malformed(_))));
    }

    #[test]
    fn test_import_rebuilds_order_from_array_position() {
        let json = r#"{
            "object_type": "Account",
            "sections": [
                {
                    "id": "0e2bdca5-cd9a-44f4-b78e-dc35a7797ba8",
                    "title": "Account Information",
                    "fields": [
                        {
                            "id": "6e2ad6ae-1d2e-4d30-84cd-a32d0e3ba94e",
                            "label": "Account Name",
                            "value": "Steed Standard Transport Ltd.",
                            "type": "text",
                            "visible": true
                        },
                        {
                            "id": "db18bd3d-8a36-4955-a2cb-c5e272490d0e",
                            "label": "Division",
                            "value": "PeopleNet/TMW CAD",
                            "type": "text",
                            "visible": true
                        }
                    ]
                }
            ]
        }"#;
        let doc = Document::from_json(json).unwrap();
        assert_eq!(doc.sections[0].order, 0);
        assert_eq!(doc.sections[0].fields[0].order, 0);
        assert_eq!(doc.sections[0].fields[1].order, 1);
        doc.validate().unwrap();
    }
}
