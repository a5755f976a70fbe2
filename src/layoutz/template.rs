//! Built-in default layouts.
//!
//! Sessions that don't start from an imported file start from one of these.
//! The sample data mirrors a real-looking Account record page (sections,
//! field types, picklist options and all) so the mock reads like the page
//! it is standing in for, plus a smaller Contact page.

use crate::model::{Document, Field, FieldType};
use uuid::Uuid;

pub const NAMES: [&str; 2] = ["account", "contact"];

pub const DEFAULT: &str = "account";

/// Look up a built-in template by name.
pub fn builtin(name: &str) -> Option<Document> {
    match name.to_lowercase().as_str() {
        "account" => Some(account()),
        "contact" => Some(contact()),
        _ => None,
    }
}

fn push(doc: &mut Document, section: Uuid, field: Field) {
    doc.add_field(section, field)
        .expect("builtin template section exists and ids are fresh");
}

fn account() -> Document {
    let mut doc = Document::new("Account");

    let info = doc.add_section("Account Information");
    push(
        &mut doc,
        info,
        Field::new("Account Name", FieldType::Text).with_value("Steed Standard Transport Ltd."),
    );
    push(
        &mut doc,
        info,
        Field::new("Enterprise Account Number", FieldType::Text).with_value("16484517"),
    );
    push(
        &mut doc,
        info,
        Field::new("Division", FieldType::Text).with_value("PeopleNet/TMW CAD"),
    );
    push(
        &mut doc,
        info,
        Field::new("Type", FieldType::Picklist)
            .with_options(["Customer", "Partner", "Prospect", "Vendor"])
            .with_value("Customer"),
    );
    push(
        &mut doc,
        info,
        Field::new("Account Status TMW", FieldType::Picklist)
            .with_options([
                "CUSTOMER-(C) Live Customer",
                "PROSPECT-(P) Prospect",
                "INACTIVE-(I) Inactive",
            ])
            .with_value("CUSTOMER-(C) Live Customer"),
    );
    push(
        &mut doc,
        info,
        Field::new("Global ID", FieldType::Text).with_value("G1005495"),
    );
    push(
        &mut doc,
        info,
        Field::new("Customer Id TMW CAD", FieldType::Text)
            .with_value("Steed Standard Transport - TMWCAN"),
    );
    push(
        &mut doc,
        info,
        Field::new("Parent or Child Account", FieldType::Picklist)
            .with_options(["Parent", "Child"])
            .with_value("Parent"),
    );
    push(
        &mut doc,
        info,
        Field::new("Account Time Zone (US & CA)", FieldType::Picklist)
            .with_options([
                "Eastern Standard Time",
                "Central Standard Time",
                "Mountain Standard Time",
                "Pacific Standard Time",
            ])
            .with_value("Eastern Standard Time"),
    );
    push(
        &mut doc,
        info,
        Field::new("Phone TMW", FieldType::Phone).with_value("(519) 271-9924 x230"),
    );
    push(&mut doc, info, Field::new("Fax TMW", FieldType::Phone));
    push(
        &mut doc,
        info,
        Field::new("Website", FieldType::Url).with_value("http://www.ssl.ca/"),
    );
    push(
        &mut doc,
        info,
        Field::new("Support & Maintenance", FieldType::Text).with_value("18%"),
    );
    push(&mut doc, info, Field::new("Customer Drive Link", FieldType::Url));

    // Hidden by default, like the collapsed sections on the real page.
    let parent = doc.add_section("Parent Hierarchy");
    push(
        &mut doc,
        parent,
        Field::new("Parent Account TMW US", FieldType::Text).hidden(),
    );
    push(
        &mut doc,
        parent,
        Field::new("Parent Account TMW CAD", FieldType::Text).hidden(),
    );
    push(
        &mut doc,
        parent,
        Field::new("Parent Account", FieldType::Text).hidden(),
    );
    push(
        &mut doc,
        parent,
        Field::new("Parent NetSuite Id", FieldType::Text).hidden(),
    );

    let success = doc.add_section("Customer Success");
    push(
        &mut doc,
        success,
        Field::new("Customer Sentiment", FieldType::Picklist)
            .with_options(["Excellent", "Good", "Average", "Poor", "Very Poor"])
            .with_value("Average"),
    );
    push(&mut doc, success, Field::new("At Risk Update", FieldType::Text));
    push(
        &mut doc,
        success,
        Field::new("Enterprise Risk Status", FieldType::Text),
    );
    push(
        &mut doc,
        success,
        Field::new("Totango Customer Health", FieldType::Picklist)
            .with_options(["Excellent", "Good", "Average", "Poor", "Critical"])
            .with_value("Poor"),
    );
    push(
        &mut doc,
        success,
        Field::new("Enterprise Risk Reason", FieldType::Text),
    );
    push(
        &mut doc,
        success,
        Field::new("Enterprise At-Risk Severity Level", FieldType::Text),
    );
    push(
        &mut doc,
        success,
        Field::new("Enterprise Product At Risk", FieldType::Text),
    );
    push(
        &mut doc,
        success,
        Field::new("Segmentation Tier", FieldType::Picklist)
            .with_options([
                "Tier 1 Strategic",
                "Tier 2 Enterprise",
                "Tier 3 SMB",
                "Tier 4 Transactional",
                "Tier 5 CS Engage",
            ])
            .with_value("Tier 5 CS Engage"),
    );

    doc
}

fn contact() -> Document {
    let mut doc = Document::new("Contact");

    let info = doc.add_section("Contact Information");
    push(
        &mut doc,
        info,
        Field::new("First Name", FieldType::Text).with_value("John"),
    );
    push(
        &mut doc,
        info,
        Field::new("Last Name", FieldType::Text).with_value("Smith"),
    );
    push(
        &mut doc,
        info,
        Field::new("Email", FieldType::Email).with_value("john.smith@acme.com"),
    );
    push(
        &mut doc,
        info,
        Field::new("Phone", FieldType::Phone).with_value("(555) 123-4567"),
    );
    push(&mut doc, info, Field::new("Title", FieldType::Text).with_value("CEO"));
    push(
        &mut doc,
        info,
        Field::new("Department", FieldType::Text).with_value("Executive"),
    );
    push(
        &mut doc,
        info,
        Field::new("Lead Source", FieldType::Picklist)
            .with_options(["Web", "Phone", "Email", "Partner", "Referral"])
            .with_value("Referral"),
    );

    let address = doc.add_section("Address Information");
    push(
        &mut doc,
        address,
        Field::new("Mailing Street", FieldType::Textarea)
            .with_value("123 Main St")
            .hidden(),
    );
    push(
        &mut doc,
        address,
        Field::new("Mailing City", FieldType::Text)
            .with_value("San Francisco")
            .hidden(),
    );

    let personal = doc.add_section("Personal Information");
    push(
        &mut doc,
        personal,
        Field::new("Birthdate", FieldType::Date)
            .with_value("1975-03-15")
            .hidden(),
    );

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_validates() {
        for name in NAMES {
            let doc = builtin(name).unwrap();
            doc.validate().unwrap();
            assert!(!doc.sections.is_empty());
        }
    }

    #[test]
    fn test_unknown_template() {
        assert!(builtin("opportunity").is_none());
    }

    #[test]
    fn test_account_template_shape() {
        let doc = builtin("account").unwrap();
        assert_eq!(doc.object_type, "Account");
        let titles: Vec<_> = doc.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Account Information", "Parent Hierarchy", "Customer Success"]
        );
        assert!(doc.hidden_fields().len() >= 4);
    }

    #[test]
    fn test_template_values_pass_their_own_validation() {
        for name in NAMES {
            let doc = builtin(name).unwrap();
            for section in &doc.sections {
                for field in &section.fields {
                    field.check_value(&field.value).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(builtin("Account").is_some());
        assert_eq!(DEFAULT, "account");
        assert_eq!(NAMES.len(), 2);
    }
}
